//! Geometry primitives in document space (points, not pixels)

use serde::{Deserialize, Serialize};

/// A point in document coordinates
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    #[must_use]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Convert a device-space point to document space
    #[must_use]
    pub fn unzoomed(self, zoom: f32) -> Self {
        Self::new(self.x / zoom, self.y / zoom)
    }

    #[must_use]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

/// Axis-aligned rectangle with the y axis pointing down the page
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    /// Left edge
    pub x0: f32,
    /// Top edge
    pub y0: f32,
    /// Right edge
    pub x1: f32,
    /// Bottom edge
    pub y1: f32,
}

impl Rect {
    #[must_use]
    pub const fn new(x0: f32, y0: f32, x1: f32, y1: f32) -> Self {
        Self { x0, y0, x1, y1 }
    }

    /// Normalized rectangle spanned by two arbitrary corners
    #[must_use]
    pub fn from_corners(a: Point, b: Point) -> Self {
        Self {
            x0: a.x.min(b.x),
            y0: a.y.min(b.y),
            x1: a.x.max(b.x),
            y1: a.y.max(b.y),
        }
    }

    #[must_use]
    pub fn width(&self) -> f32 {
        self.x1 - self.x0
    }

    #[must_use]
    pub fn height(&self) -> f32 {
        self.y1 - self.y0
    }

    #[must_use]
    pub fn top_left(&self) -> Point {
        Point::new(self.x0, self.y0)
    }

    #[must_use]
    pub fn top_right(&self) -> Point {
        Point::new(self.x1, self.y0)
    }

    #[must_use]
    pub fn bottom_left(&self) -> Point {
        Point::new(self.x0, self.y1)
    }

    #[must_use]
    pub fn bottom_right(&self) -> Point {
        Point::new(self.x1, self.y1)
    }

    /// Zero width or zero height
    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        self.x0 >= self.x1 || self.y0 >= self.y1
    }

    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.x0.is_finite() && self.y0.is_finite() && self.x1.is_finite() && self.y1.is_finite()
    }

    /// Overlap of two rectangles.
    ///
    /// Rectangles that only share an edge or a corner do not intersect.
    #[must_use]
    pub fn intersects(&self, other: &Rect) -> Option<Rect> {
        let overlap = Rect {
            x0: self.x0.max(other.x0),
            y0: self.y0.max(other.y0),
            x1: self.x1.min(other.x1),
            y1: self.y1.min(other.y1),
        };

        if overlap.x0 < overlap.x1 && overlap.y0 < overlap.y1 {
            Some(overlap)
        } else {
            None
        }
    }

    /// Inclusive vertical span test
    #[must_use]
    pub fn contains_y(&self, y: f32) -> bool {
        self.y0 <= y && y <= self.y1
    }

    /// Inclusive on all four edges
    #[must_use]
    pub fn contains_point(&self, p: Point) -> bool {
        self.x0 <= p.x && p.x <= self.x1 && self.contains_y(p.y)
    }

    /// Document space to device space
    #[must_use]
    pub fn scaled(&self, zoom: f32) -> Rect {
        Rect {
            x0: self.x0 * zoom,
            y0: self.y0 * zoom,
            x1: self.x1 * zoom,
            y1: self.y1 * zoom,
        }
    }
}
