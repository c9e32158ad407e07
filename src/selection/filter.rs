//! Reading-order word filter
//!
//! Words arrive already sorted by `(block_no, line_no, word_no)`; the filter
//! only drops words, so the result is always in reading order. Interior
//! blocks of the range are taken whole. On the first and last block the
//! filter cuts away everything above the entry line and below the exit
//! line, then clips the entry line before the entry point and the exit line
//! after the exit point, the way a text editor extends a selection.

use super::blocks::{BlockRange, detect_block_range};
use super::drag::{Drag, DragDirection};
use super::geometry::{Point, Rect};
use super::types::{Block, Word};

/// Where the selection enters the first touched line and leaves the last
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SelectionAnchors {
    pub entry: Point,
    pub exit: Point,
}

impl SelectionAnchors {
    /// Pick the corners of `rect` that act as entry and exit.
    ///
    /// A cross-direction drag enters at the top-right corner and exits at
    /// the bottom-left, so both diagonals read top-to-bottom.
    #[must_use]
    pub fn new(rect: &Rect, direction: DragDirection) -> Self {
        match direction {
            DragDirection::Same => Self {
                entry: rect.top_left(),
                exit: rect.bottom_right(),
            },
            DragDirection::Cross => Self {
                entry: rect.top_right(),
                exit: rect.bottom_left(),
            },
        }
    }

    fn keeps(&self, word: &Word, range: &BlockRange) -> bool {
        if !range.contains(word.block_no) {
            return false;
        }
        if !range.is_boundary(word.block_no) {
            return true;
        }

        let r = &word.rect;
        if word.block_no == range.start && r.y1 < self.entry.y {
            return false;
        }
        if word.block_no == range.end && r.y0 > self.exit.y {
            return false;
        }

        let on_entry_line = r.contains_y(self.entry.y);
        let on_exit_line = r.contains_y(self.exit.y);

        if on_entry_line && on_exit_line {
            // single line: keep words overlapping the horizontal span
            let lo = self.entry.x.min(self.exit.x);
            let hi = self.entry.x.max(self.exit.x);
            return r.x1 >= lo && r.x0 <= hi;
        }
        if on_entry_line && r.x1 < self.entry.x {
            return false;
        }
        if on_exit_line && r.x0 > self.exit.x {
            return false;
        }
        true
    }
}

/// Positions and words selected from `words`, in input order
pub fn selected_words<'a>(
    words: &'a [Word],
    range: BlockRange,
    anchors: SelectionAnchors,
) -> impl Iterator<Item = (usize, &'a Word)> + 'a {
    words
        .iter()
        .enumerate()
        .filter(move |(_, word)| anchors.keeps(word, &range))
}

/// Filter `words` down to the ones a drag over `drag.rect` selects.
///
/// `range` is the output of [`detect_block_range`]; `None` selects nothing.
#[must_use]
pub fn filter_words<'a>(words: &'a [Word], range: Option<BlockRange>, drag: &Drag) -> Vec<&'a Word> {
    let Some(range) = range else {
        return Vec::new();
    };
    let anchors = SelectionAnchors::new(&drag.rect, drag.direction);
    selected_words(words, range, anchors)
        .map(|(_, word)| word)
        .collect()
}

/// Block range detection followed by word filtering, as indices into `words`
#[must_use]
pub fn select_word_indices(words: &[Word], blocks: &[Block], drag: &Drag) -> Vec<usize> {
    let Some(range) = detect_block_range(&drag.rect, blocks) else {
        return Vec::new();
    };
    let anchors = SelectionAnchors::new(&drag.rect, drag.direction);
    selected_words(words, range, anchors)
        .map(|(index, _)| index)
        .collect()
}
