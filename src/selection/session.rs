//! Drag gesture state for one page

use std::sync::Arc;

use super::drag::{Drag, classify_drag};
use super::error::{SelectionError, validate_zoom};
use super::filter::select_word_indices;
use super::geometry::Point;
use super::types::{PageText, Selection};

/// Tracks one press/move/release gesture over a text-indexed page.
///
/// Every call returns the selection directly; nothing is pushed to
/// listeners. The gesture itself is discarded on release.
#[derive(Clone, Debug)]
pub struct SelectionSession {
    page: Arc<PageText>,
    zoom: f32,
    /// Device-space press point of the active gesture
    press: Option<Point>,
    /// Word indices selected by the last update
    selected: Vec<usize>,
}

impl SelectionSession {
    /// Start tracking gestures on `page` at the given zoom
    pub fn new(page: Arc<PageText>, zoom: f32) -> Result<Self, SelectionError> {
        Ok(Self {
            page,
            zoom: validate_zoom(zoom)?,
            press: None,
            selected: Vec::new(),
        })
    }

    #[must_use]
    pub fn page(&self) -> &PageText {
        &self.page
    }

    #[must_use]
    pub fn zoom(&self) -> f32 {
        self.zoom
    }

    /// Change zoom; any gesture in progress is dropped
    pub fn set_zoom(&mut self, zoom: f32) -> Result<(), SelectionError> {
        self.zoom = validate_zoom(zoom)?;
        self.clear();
        Ok(())
    }

    #[must_use]
    pub fn is_selecting(&self) -> bool {
        self.press.is_some()
    }

    /// Begin a gesture at a device-space point
    pub fn press(&mut self, point: Point) -> Result<(), SelectionError> {
        if !point.is_finite() {
            return Err(SelectionError::NonFiniteCoordinate {
                what: "press point",
            });
        }
        self.press = Some(point);
        self.selected.clear();
        Ok(())
    }

    /// Recompute the selection for the pointer's current position
    pub fn drag_to(&mut self, point: Point) -> Result<Selection, SelectionError> {
        let Some(press) = self.press else {
            return Ok(Selection::empty(self.page.page));
        };

        let drag = classify_drag(press, point, self.zoom)?;
        self.selected = self.select(&drag);
        Ok(self.current())
    }

    /// Finish the gesture, returning the final selection.
    ///
    /// The gesture ends even when `point` is rejected.
    pub fn release(&mut self, point: Point) -> Result<Selection, SelectionError> {
        let result = self.drag_to(point);
        self.clear();
        let selection = result?;
        log::debug!(
            "page {}: released selection of {} words",
            selection.page,
            selection.len()
        );
        Ok(selection)
    }

    /// Drop any gesture and selection
    pub fn clear(&mut self) {
        self.press = None;
        self.selected.clear();
    }

    /// Selection computed by the most recent move
    #[must_use]
    pub fn current(&self) -> Selection {
        Selection {
            page: self.page.page,
            words: self
                .selected
                .iter()
                .map(|&i| self.page.words[i].clone())
                .collect(),
        }
    }

    fn select(&self, drag: &Drag) -> Vec<usize> {
        select_word_indices(&self.page.words, &self.page.blocks, drag)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::selection::geometry::Rect;
    use crate::selection::types::{Block, Word};

    fn one_line_page() -> Arc<PageText> {
        let y = (10.0, 20.0);
        let words = vec![
            Word::new(Rect::new(0.0, y.0, 10.0, y.1), "A", 0, 0, 0),
            Word::new(Rect::new(15.0, y.0, 25.0, y.1), "B", 0, 0, 1),
            Word::new(Rect::new(30.0, y.0, 40.0, y.1), "C", 0, 0, 2),
        ];
        let blocks = vec![Block::new(Rect::new(0.0, 10.0, 40.0, 20.0), 0)];
        Arc::new(PageText::new(4, words, blocks).unwrap())
    }

    #[test]
    fn drag_without_press_is_empty() {
        let mut session = SelectionSession::new(one_line_page(), 1.0).unwrap();
        let selection = session.drag_to(Point::new(35.0, 20.0)).unwrap();

        assert!(selection.is_empty());
        assert_eq!(selection.page, 4);
    }

    #[test]
    fn moves_update_and_release_clears() {
        let mut session = SelectionSession::new(one_line_page(), 2.0).unwrap();
        session.press(Point::new(24.0, 20.0)).unwrap();
        assert!(session.is_selecting());

        let partial = session.drag_to(Point::new(50.0, 40.0)).unwrap();
        assert_eq!(partial.text(), "B");

        let done = session.release(Point::new(70.0, 40.0)).unwrap();
        assert_eq!(done.text(), "B C");
        assert!(!session.is_selecting());
        assert!(session.current().is_empty());
    }

    #[test]
    fn rejected_release_still_ends_gesture() {
        let mut session = SelectionSession::new(one_line_page(), 1.0).unwrap();
        session.press(Point::new(1.0, 1.0)).unwrap();

        let err = session.release(Point::new(f32::NAN, 1.0)).unwrap_err();
        assert_eq!(err, SelectionError::NonFiniteCoordinate { what: "drag point" });
        assert!(!session.is_selecting());
        assert!(session.current().is_empty());
    }

    #[test]
    fn new_press_discards_previous_selection() {
        let mut session = SelectionSession::new(one_line_page(), 1.0).unwrap();
        session.press(Point::new(12.0, 10.0)).unwrap();
        session.drag_to(Point::new(35.0, 20.0)).unwrap();
        assert_eq!(session.current().len(), 2);

        session.press(Point::new(1.0, 1.0)).unwrap();
        assert!(session.current().is_empty());
    }

    #[test]
    fn zoom_change_drops_gesture() {
        let mut session = SelectionSession::new(one_line_page(), 1.0).unwrap();
        session.press(Point::new(12.0, 10.0)).unwrap();

        session.set_zoom(1.5).unwrap();
        assert!(!session.is_selecting());
        assert_eq!(session.set_zoom(0.0), Err(SelectionError::InvalidZoom(0.0)));
    }

    #[test]
    fn invalid_zoom_is_rejected_up_front() {
        assert!(SelectionSession::new(one_line_page(), -1.0).is_err());
    }
}
