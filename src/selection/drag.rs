//! Drag classification
//!
//! Turns two device-space points and a zoom factor into a normalized
//! document-space selection rectangle plus the diagonal the user dragged
//! along. The direction is taken from the raw deltas, before normalization
//! throws the sign information away.

use super::error::{SelectionError, validate_zoom};
use super::geometry::{Point, Rect};

/// Which diagonal a drag gesture followed
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DragDirection {
    /// Down-right or up-left, as in left-to-right reading
    #[default]
    Same,
    /// Down-left or up-right
    Cross,
}

impl DragDirection {
    /// Classify by the signs of the raw deltas.
    ///
    /// Only strictly opposite signs count as `Cross`. A zero delta on either
    /// axis is `Same`; such a drag spans a zero-area rectangle and selects
    /// nothing anyway.
    #[must_use]
    pub fn from_deltas(dx: f32, dy: f32) -> Self {
        if (dx > 0.0 && dy < 0.0) || (dx < 0.0 && dy > 0.0) {
            Self::Cross
        } else {
            Self::Same
        }
    }
}

/// A classified drag gesture in document space
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Drag {
    pub rect: Rect,
    pub direction: DragDirection,
}

impl Drag {
    /// Classify two points that are already in document space
    #[must_use]
    pub fn from_document_points(press: Point, current: Point) -> Self {
        Self {
            rect: Rect::from_corners(press, current),
            direction: DragDirection::from_deltas(current.x - press.x, current.y - press.y),
        }
    }
}

/// Map a raw press/current pair in device space to a document-space drag
pub fn classify_drag(press: Point, current: Point, zoom: f32) -> Result<Drag, SelectionError> {
    let zoom = validate_zoom(zoom)?;
    if !press.is_finite() {
        return Err(SelectionError::NonFiniteCoordinate {
            what: "press point",
        });
    }
    if !current.is_finite() {
        return Err(SelectionError::NonFiniteCoordinate {
            what: "drag point",
        });
    }

    let drag = Drag::from_document_points(press.unzoomed(zoom), current.unzoomed(zoom));
    log::trace!("classified drag {:?} as {:?}", drag.rect, drag.direction);
    Ok(drag)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn down_right_and_up_left_are_same_direction() {
        assert_eq!(DragDirection::from_deltas(5.0, 5.0), DragDirection::Same);
        assert_eq!(DragDirection::from_deltas(-5.0, -5.0), DragDirection::Same);
    }

    #[test]
    fn down_left_and_up_right_are_cross_direction() {
        assert_eq!(DragDirection::from_deltas(-5.0, 5.0), DragDirection::Cross);
        assert_eq!(DragDirection::from_deltas(5.0, -5.0), DragDirection::Cross);
    }

    #[test]
    fn zero_delta_is_same_direction() {
        assert_eq!(DragDirection::from_deltas(0.0, 7.0), DragDirection::Same);
        assert_eq!(DragDirection::from_deltas(-7.0, 0.0), DragDirection::Same);
        assert_eq!(DragDirection::from_deltas(0.0, 0.0), DragDirection::Same);
    }

    #[test]
    fn classify_divides_by_zoom_and_normalizes() {
        let drag = classify_drag(Point::new(70.0, 20.0), Point::new(24.0, 40.0), 2.0).unwrap();

        assert_eq!(drag.rect, Rect::new(12.0, 10.0, 35.0, 20.0));
        assert_eq!(drag.direction, DragDirection::Cross);
    }

    #[test]
    fn classify_rejects_bad_zoom() {
        let p = Point::new(1.0, 1.0);
        assert_eq!(classify_drag(p, p, 0.0), Err(SelectionError::InvalidZoom(0.0)));
        assert_eq!(classify_drag(p, p, -2.0), Err(SelectionError::InvalidZoom(-2.0)));
    }

    #[test]
    fn classify_rejects_nan_points() {
        let p = Point::new(1.0, 1.0);
        let nan = Point::new(f32::NAN, 1.0);

        assert_eq!(
            classify_drag(nan, p, 1.0),
            Err(SelectionError::NonFiniteCoordinate {
                what: "press point"
            })
        );
        assert_eq!(
            classify_drag(p, nan, 1.0),
            Err(SelectionError::NonFiniteCoordinate { what: "drag point" })
        );
    }
}
