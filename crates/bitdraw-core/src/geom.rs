//! Geometry primitives: [`Point`] and [`Rect`].
//!
//! Integer pixel coordinates, X grows right and Y grows down.

use std::fmt;
use std::ops::{Add, Sub};

// ---------------------------------------------------------------------------
// Point
// ---------------------------------------------------------------------------

/// A 2D integer point.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    /// Create a new point.
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl Add for Point {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

// ---------------------------------------------------------------------------
// Rect
// ---------------------------------------------------------------------------

/// A half-open rectangle \[min, max). `min` is inclusive, `max` is exclusive.
///
/// Unlike a layout range, a `Rect` keeps its exact corners even when it is
/// empty or inverted: placement results are compared corner for corner.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rect {
    pub min: Point,
    pub max: Point,
}

impl Rect {
    /// Create a rect from `(left, top, right, bottom)`, swapping corners so
    /// that `min` ≤ `max` on each axis.
    #[inline]
    pub fn new(x0: i32, y0: i32, x1: i32, y1: i32) -> Self {
        Self {
            min: Point::new(x0.min(x1), y0.min(y1)),
            max: Point::new(x0.max(x1), y0.max(y1)),
        }
    }

    /// Create a rect with the given origin and size.
    #[inline]
    pub const fn from_origin_size(origin: Point, width: i32, height: i32) -> Self {
        Self {
            min: origin,
            max: Point::new(origin.x + width, origin.y + height),
        }
    }

    /// Left edge (inclusive).
    #[inline]
    pub const fn left(self) -> i32 {
        self.min.x
    }

    /// Top edge (inclusive).
    #[inline]
    pub const fn top(self) -> i32 {
        self.min.y
    }

    /// Right edge (exclusive).
    #[inline]
    pub const fn right(self) -> i32 {
        self.max.x
    }

    /// Bottom edge (exclusive).
    #[inline]
    pub const fn bottom(self) -> i32 {
        self.max.y
    }

    /// Width of the rect.
    #[inline]
    pub const fn width(self) -> i32 {
        self.max.x - self.min.x
    }

    /// Height of the rect.
    #[inline]
    pub const fn height(self) -> i32 {
        self.max.y - self.min.y
    }

    /// Whether the rect has zero or negative area.
    #[inline]
    pub const fn is_empty(self) -> bool {
        self.min.x >= self.max.x || self.min.y >= self.max.y
    }

    /// Whether `p` is inside the half-open rect.
    #[inline]
    pub const fn contains(self, p: Point) -> bool {
        p.x >= self.min.x && p.x < self.max.x && p.y >= self.min.y && p.y < self.max.y
    }

    /// Intersection of two rects.
    ///
    /// If the two rects do not overlap, the zero (empty) rect is returned.
    #[inline]
    pub fn intersect(self, other: Rect) -> Self {
        let r = Self {
            min: Point::new(self.min.x.max(other.min.x), self.min.y.max(other.min.y)),
            max: Point::new(self.max.x.min(other.max.x), self.max.y.min(other.max.y)),
        };
        if r.is_empty() { Self::default() } else { r }
    }

    /// Row-major iterator over every pixel position in the rect.
    #[inline]
    pub fn iter(self) -> RectIter {
        RectIter {
            rect: self,
            cur: self.min,
        }
    }
}

impl IntoIterator for Rect {
    type Item = Point;
    type IntoIter = RectIter;
    #[inline]
    fn into_iter(self) -> RectIter {
        self.iter()
    }
}

impl fmt::Display for Rect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}-{})", self.min, self.max)
    }
}

impl Add<Point> for Rect {
    type Output = Rect;

    #[inline]
    fn add(self, p: Point) -> Rect {
        Rect {
            min: self.min + p,
            max: self.max + p,
        }
    }
}

impl Sub<Point> for Rect {
    type Output = Rect;

    #[inline]
    fn sub(self, p: Point) -> Rect {
        Rect {
            min: self.min - p,
            max: self.max - p,
        }
    }
}

// ---------------------------------------------------------------------------
// RectIter
// ---------------------------------------------------------------------------

/// Row-major iterator over the points in a [`Rect`].
#[derive(Clone, Debug)]
pub struct RectIter {
    rect: Rect,
    cur: Point,
}

impl Iterator for RectIter {
    type Item = Point;

    #[inline]
    fn next(&mut self) -> Option<Point> {
        if self.cur.y >= self.rect.max.y || self.rect.is_empty() {
            return None;
        }
        let p = self.cur;
        self.cur.x += 1;
        if self.cur.x >= self.rect.max.x {
            self.cur.x = self.rect.min.x;
            self.cur.y += 1;
        }
        Some(p)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.rect.is_empty() || self.cur.y >= self.rect.max.y {
            return (0, Some(0));
        }
        let w = self.rect.width() as usize;
        let remaining_in_row = (self.rect.max.x - self.cur.x) as usize;
        let remaining_rows = (self.rect.max.y - self.cur.y - 1) as usize;
        let total = remaining_in_row + remaining_rows * w;
        (total, Some(total))
    }
}

impl ExactSizeIterator for RectIter {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rect_edges() {
        let r = Rect::new(10, 20, 110, 70);
        assert_eq!(r.left(), 10);
        assert_eq!(r.top(), 20);
        assert_eq!(r.right(), 110);
        assert_eq!(r.bottom(), 70);
        assert_eq!(r.width(), 100);
        assert_eq!(r.height(), 50);
    }

    #[test]
    fn rect_auto_canonicalize() {
        let r = Rect::new(3, 2, 0, 0);
        assert_eq!(r.min, Point::new(0, 0));
        assert_eq!(r.max, Point::new(3, 2));
    }

    #[test]
    fn from_origin_size_keeps_exact_corners() {
        let r = Rect::from_origin_size(Point::new(5, 5), 0, 3);
        assert!(r.is_empty());
        assert_eq!(r.max, Point::new(5, 8));
        assert_ne!(r, Rect::default());
    }

    #[test]
    fn rect_contains_is_half_open() {
        let r = Rect::new(0, 0, 3, 2);
        assert!(r.contains(Point::new(0, 0)));
        assert!(r.contains(Point::new(2, 1)));
        assert!(!r.contains(Point::new(3, 0)));
        assert!(!r.contains(Point::new(0, 2)));
    }

    #[test]
    fn rect_intersect() {
        let a = Rect::new(0, 0, 4, 4);
        let b = Rect::new(2, 2, 6, 6);
        assert_eq!(a.intersect(b), Rect::new(2, 2, 4, 4));
        let far = Rect::new(10, 10, 12, 12);
        assert_eq!(a.intersect(far), Rect::default());
    }

    #[test]
    fn rect_iter_count() {
        let r = Rect::new(1, 1, 4, 3);
        let pts: Vec<_> = r.iter().collect();
        assert_eq!(pts.len(), 6);
        assert_eq!(r.iter().len(), 6);
        assert_eq!(pts[0], Point::new(1, 1));
        assert_eq!(pts[5], Point::new(3, 2));
    }

    #[test]
    fn rect_translate() {
        let r = Rect::new(1, 2, 4, 5);
        let p = Point::new(10, 20);
        assert_eq!(r + p, Rect::new(11, 22, 14, 25));
        assert_eq!((r + p) - p, r);
    }
}
