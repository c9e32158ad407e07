//! Block range detection

use super::geometry::Rect;
use super::types::Block;

/// Inclusive range of block numbers touched by a selection.
///
/// The range is by `block_no`, not geometry: blocks numbered between the two
/// endpoints belong to the selection even if the rectangle misses them.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BlockRange {
    /// `block_no` of the first intersected block in document order
    pub start: usize,
    /// `block_no` of the last intersected block in document order
    pub end: usize,
}

impl BlockRange {
    #[must_use]
    pub const fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    #[must_use]
    pub fn contains(&self, block_no: usize) -> bool {
        self.start <= block_no && block_no <= self.end
    }

    /// First or last block, where line clipping applies
    #[must_use]
    pub fn is_boundary(&self, block_no: usize) -> bool {
        block_no == self.start || block_no == self.end
    }
}

/// Find the first and last block, in supplied order, that the selection
/// rectangle intersects. `None` when no block is touched.
#[must_use]
pub fn detect_block_range(selection: &Rect, blocks: &[Block]) -> Option<BlockRange> {
    if selection.is_degenerate() {
        return None;
    }

    let mut touched = blocks
        .iter()
        .filter(|block| selection.intersects(&block.rect).is_some())
        .map(|block| block.block_no);

    let start = touched.next()?;
    let end = touched.last().unwrap_or(start);

    if end < start {
        log::debug!("block range {start}..={end} is inverted, selection will be empty");
    }

    Some(BlockRange::new(start, end))
}
