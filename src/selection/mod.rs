//! Reading-order text selection over extracted page words

mod blocks;
mod drag;
mod error;
mod filter;
mod geometry;
mod session;
mod text;
mod types;

pub use blocks::{BlockRange, detect_block_range};
pub use drag::{Drag, DragDirection, classify_drag};
pub use error::{SelectionError, validate_zoom};
pub use filter::{SelectionAnchors, filter_words, select_word_indices, selected_words};
pub use geometry::{Point, Rect};
pub use hit_test::word_at_point;
pub use session::SelectionSession;
pub use text::{highlight_rects, selection_text};
pub use types::{Block, PageText, Selection, Word};

/// Select words on `page` for a device-space drag from `press` to `current`
pub fn select(
    page: &PageText,
    press: Point,
    current: Point,
    zoom: f32,
) -> Result<Selection, SelectionError> {
    let drag = classify_drag(press, current, zoom)?;
    let range = detect_block_range(&drag.rect, &page.blocks);
    let words = filter_words(&page.words, range, &drag)
        .into_iter()
        .cloned()
        .collect();
    Ok(Selection {
        page: page.page,
        words,
    })
}
