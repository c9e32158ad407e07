//! Per-page text index
//!
//! Each page's words and blocks are extracted once, on first use, and shared
//! read-only afterwards. Selection never waits on extraction: callers index
//! a page before starting a gesture on it.

use std::collections::HashMap;
use std::fs;
use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};
use log::debug;
use serde::{Deserialize, Serialize};

use crate::selection::{PageText, SelectionError};

/// The text-extraction collaborator
pub trait TextSource {
    /// Number of pages in the loaded document
    fn page_count(&self) -> usize;

    /// Words and blocks of one page, in reading order
    fn extract(&self, page: usize) -> Result<PageText>;
}

/// A document whose pages were extracted ahead of time and stored as JSON
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct JsonDocument {
    pub pages: Vec<PageText>,
}

impl JsonDocument {
    pub fn from_json(json: &str) -> Result<Self> {
        let mut doc: Self = serde_json::from_str(json).context("Failed to parse page text JSON")?;
        for (index, page) in doc.pages.iter_mut().enumerate() {
            page.page = index;
        }
        Ok(doc)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read document {path:?}"))?;
        Self::from_json(&content).with_context(|| format!("Invalid document {path:?}"))
    }
}

impl TextSource for JsonDocument {
    fn page_count(&self) -> usize {
        self.pages.len()
    }

    fn extract(&self, page: usize) -> Result<PageText> {
        let text = self
            .pages
            .get(page)
            .cloned()
            .ok_or_else(|| anyhow::anyhow!("Page {page} missing from document"))?;
        text.validate()?;
        Ok(text)
    }
}

/// Lazily built, write-once cache of page text
#[derive(Debug)]
pub struct PageTextStore {
    pages: HashMap<usize, Arc<PageText>>,
    page_count: usize,
}

impl PageTextStore {
    #[must_use]
    pub fn new(page_count: usize) -> Self {
        Self {
            pages: HashMap::new(),
            page_count,
        }
    }

    #[must_use]
    pub fn page_count(&self) -> usize {
        self.page_count
    }

    fn check_range(&self, page: usize) -> Result<(), SelectionError> {
        if page >= self.page_count {
            return Err(SelectionError::PageOutOfRange {
                page,
                page_count: self.page_count,
            });
        }
        Ok(())
    }

    /// Text of an already indexed page
    pub fn get(&self, page: usize) -> Result<Arc<PageText>, SelectionError> {
        self.check_range(page)?;
        self.pages
            .get(&page)
            .cloned()
            .ok_or(SelectionError::PageNotIndexed(page))
    }

    #[must_use]
    pub fn is_indexed(&self, page: usize) -> bool {
        self.pages.contains_key(&page)
    }

    /// Text of `page`, extracting it through `source` the first time
    pub fn get_or_index(&mut self, page: usize, source: &impl TextSource) -> Result<Arc<PageText>> {
        self.check_range(page)?;

        if let Some(text) = self.pages.get(&page) {
            return Ok(Arc::clone(text));
        }

        let mut text = source
            .extract(page)
            .with_context(|| format!("Failed to extract text of page {page}"))?;
        text.page = page;
        debug!(
            "Indexed page {page}: {} words in {} blocks",
            text.words.len(),
            text.blocks.len()
        );

        let text = Arc::new(text);
        self.pages.insert(page, Arc::clone(&text));
        Ok(text)
    }

    /// Forget every indexed page, e.g. when a new document is loaded
    pub fn reset(&mut self, page_count: usize) {
        self.pages.clear();
        self.page_count = page_count;
    }
}
