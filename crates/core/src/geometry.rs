//! Geometry primitives.
//!
//! All shapes are axis-aligned rectangles on the board's coordinate frame:
//! origin at the top-left corner, `y` growing toward the bottom edge.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A point in board coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    /// Creates a new point.
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}

/// An axis-aligned rectangle given by its top-left corner and size.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    /// Creates a new rectangle.
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Returns the right edge (`x + width`).
    pub fn max_x(&self) -> f64 {
        self.x + self.width
    }

    /// Returns the far edge (`y + height`).
    pub fn max_y(&self) -> f64 {
        self.y + self.height
    }

    /// Returns the rectangle center.
    pub fn center(&self) -> Point {
        Point::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    /// Returns the area.
    pub fn area(&self) -> f64 {
        self.width * self.height
    }

    /// Returns true if the two rectangles share a region of positive area.
    ///
    /// Rectangles that only touch along an edge or a corner do not overlap.
    pub fn overlaps(&self, other: &Rect) -> bool {
        !(self.max_x() <= other.x
            || other.max_x() <= self.x
            || self.max_y() <= other.y
            || other.max_y() <= self.y)
    }

    /// Returns true if `other` lies completely inside this rectangle.
    pub fn contains_rect(&self, other: &Rect) -> bool {
        other.x >= self.x
            && other.y >= self.y
            && other.max_x() <= self.max_x()
            && other.max_y() <= self.max_y()
    }

    /// Returns true if the rectangles intersect, counting touching boundaries.
    pub fn touches_or_intersects(&self, other: &Rect) -> bool {
        !(self.max_x() < other.x
            || self.x > other.max_x()
            || self.max_y() < other.y
            || self.y > other.max_y())
    }

    /// Returns the bounding box of the segment between two points.
    pub fn spanning(p1: Point, p2: Point) -> Self {
        let min_x = p1.x.min(p2.x);
        let min_y = p1.y.min(p2.y);
        Self::new(
            min_x,
            min_y,
            p1.x.max(p2.x) - min_x,
            p1.y.max(p2.y) - min_y,
        )
    }
}

/// Euclidean distance between two points.
pub fn distance(p1: Point, p2: Point) -> f64 {
    (p1.x - p2.x).hypot(p1.y - p2.y)
}

/// Returns true if two rectangles overlap with positive area.
pub fn overlaps(a: &Rect, b: &Rect) -> bool {
    a.overlaps(b)
}

/// Conservative segment/rectangle test.
///
/// Compares the segment's bounding box against `rect` with inclusive bounds,
/// so a diagonal segment whose box grazes the rectangle is reported as
/// crossing it even when the segment itself misses. Layout validity depends
/// on this exact behavior; do not replace it with an exact intersection.
pub fn segment_intersects_rect(p1: Point, p2: Point, rect: &Rect) -> bool {
    Rect::spanning(p1, p2).touches_or_intersects(rect)
}
