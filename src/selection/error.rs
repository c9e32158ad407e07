//! Errors raised by the selection core

/// Precondition violations reported to the caller.
///
/// An empty selection is never an error; these variants cover input the
/// caller should not have passed in the first place.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SelectionError {
    #[error("zoom must be finite and positive, got {0}")]
    InvalidZoom(f32),

    #[error("non-finite coordinate in {what}")]
    NonFiniteCoordinate { what: &'static str },

    #[error("invalid geometry for {what} #{index}: {detail}")]
    InvalidGeometry {
        what: &'static str,
        index: usize,
        detail: String,
    },

    #[error("page {page} out of range (document has {page_count} pages)")]
    PageOutOfRange { page: usize, page_count: usize },

    #[error("page {0} has not been text-indexed")]
    PageNotIndexed(usize),
}

impl SelectionError {
    pub(crate) fn geometry(what: &'static str, index: usize, detail: impl Into<String>) -> Self {
        Self::InvalidGeometry {
            what,
            index,
            detail: detail.into(),
        }
    }
}

/// Reject zoom values that cannot convert between device and document space
pub fn validate_zoom(zoom: f32) -> Result<f32, SelectionError> {
    if zoom.is_finite() && zoom > 0.0 {
        Ok(zoom)
    } else {
        Err(SelectionError::InvalidZoom(zoom))
    }
}
