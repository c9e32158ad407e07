//! Turning selected words into copyable text and highlight boxes

use std::borrow::Borrow;

use super::error::{SelectionError, validate_zoom};
use super::geometry::Rect;
use super::types::Word;

/// Join selected words: spaces within a line, a line break between lines
#[must_use]
pub fn selection_text<W: Borrow<Word>>(words: &[W]) -> String {
    let mut text = String::new();
    let mut previous: Option<&Word> = None;

    for word in words {
        let word = word.borrow();
        if let Some(prev) = previous {
            if prev.shares_line_with(word) {
                text.push(' ');
            } else {
                text.push('\n');
            }
        }
        text.push_str(&word.text);
        previous = Some(word);
    }

    text
}

/// Device-space rectangles for drawing the highlight overlay
pub fn highlight_rects<W: Borrow<Word>>(words: &[W], zoom: f32) -> Result<Vec<Rect>, SelectionError> {
    let zoom = validate_zoom(zoom)?;
    Ok(words.iter().map(|w| w.borrow().rect.scaled(zoom)).collect())
}
