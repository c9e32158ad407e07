//! Page text model produced by the extraction collaborator

use serde::{Deserialize, Serialize};

use super::error::SelectionError;
use super::geometry::Rect;

/// Smallest selectable text unit.
///
/// `(block_no, line_no, word_no)` is the word's reading-order key.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Word {
    /// Bounding box in document space
    #[serde(flatten)]
    pub rect: Rect,
    /// Text content
    pub text: String,
    pub block_no: usize,
    pub line_no: usize,
    pub word_no: usize,
}

impl Word {
    #[must_use]
    pub fn new(
        rect: Rect,
        text: impl Into<String>,
        block_no: usize,
        line_no: usize,
        word_no: usize,
    ) -> Self {
        Self {
            rect,
            text: text.into(),
            block_no,
            line_no,
            word_no,
        }
    }

    /// True when both words sit on the same line of the same block
    #[must_use]
    pub fn shares_line_with(&self, other: &Word) -> bool {
        self.block_no == other.block_no && self.line_no == other.line_no
    }
}

/// Paragraph or column level layout region
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Block {
    #[serde(flatten)]
    pub rect: Rect,
    pub block_no: usize,
}

impl Block {
    #[must_use]
    pub const fn new(rect: Rect, block_no: usize) -> Self {
        Self { rect, block_no }
    }
}

/// Words and blocks of one page, both in document order.
///
/// Built once when the page is text-indexed and never mutated afterwards.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PageText {
    /// Page number (0-indexed)
    #[serde(default)]
    pub page: usize,
    #[serde(default)]
    pub words: Vec<Word>,
    #[serde(default)]
    pub blocks: Vec<Block>,
}

impl PageText {
    /// Build a page, rejecting non-finite or inverted rectangles
    pub fn new(page: usize, words: Vec<Word>, blocks: Vec<Block>) -> Result<Self, SelectionError> {
        let page = Self {
            page,
            words,
            blocks,
        };
        page.validate()?;
        Ok(page)
    }

    /// Check every rectangle on the page
    pub fn validate(&self) -> Result<(), SelectionError> {
        for (index, word) in self.words.iter().enumerate() {
            check_rect(&word.rect, "word", index)?;
        }
        for (index, block) in self.blocks.iter().enumerate() {
            check_rect(&block.rect, "block", index)?;
        }
        Ok(())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

fn check_rect(rect: &Rect, what: &'static str, index: usize) -> Result<(), SelectionError> {
    if !rect.is_finite() {
        return Err(SelectionError::geometry(what, index, "non-finite coordinate"));
    }
    if rect.width() < 0.0 || rect.height() < 0.0 {
        return Err(SelectionError::geometry(
            what,
            index,
            format!("negative size {}x{}", rect.width(), rect.height()),
        ));
    }
    Ok(())
}

/// Selected words of one page, in reading order
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Selection {
    /// Page number (0-indexed)
    pub page: usize,
    pub words: Vec<Word>,
}

impl Selection {
    #[must_use]
    pub fn empty(page: usize) -> Self {
        Self {
            page,
            words: Vec::new(),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Copyable text of the selection
    #[must_use]
    pub fn text(&self) -> String {
        super::text::selection_text(&self.words)
    }
}
