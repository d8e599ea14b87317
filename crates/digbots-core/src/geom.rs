//! Geometry primitives: [`Point`] and [`Range`].
//!
//! Cells use world coordinates: X grows right, Y grows **up**, so the
//! "up" neighbour of a cell is `y + 1` and the top row of a range is
//! `max.y - 1`.

use std::fmt;
use std::ops::{Add, Sub};

// ---------------------------------------------------------------------------
// Point
// ---------------------------------------------------------------------------

/// An integer grid cell.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    /// Origin (0, 0).
    pub const ZERO: Self = Self { x: 0, y: 0 };
    pub const UP: Self = Self { x: 0, y: 1 };
    pub const RIGHT: Self = Self { x: 1, y: 0 };
    pub const DOWN: Self = Self { x: 0, y: -1 };
    pub const LEFT: Self = Self { x: -1, y: 0 };

    /// Create a new point.
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Return a point shifted by (dx, dy).
    #[inline]
    pub const fn shift(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// The four orthogonal neighbours in up, right, down, left order.
    ///
    /// Searches depend on this order for their tie-breaks.
    #[inline]
    pub const fn neighbors_4(self) -> [Point; 4] {
        [
            self.shift(0, 1),
            self.shift(1, 0),
            self.shift(0, -1),
            self.shift(-1, 0),
        ]
    }

    /// All eight neighbours, clockwise starting from up.
    #[inline]
    pub const fn neighbors_8(self) -> [Point; 8] {
        [
            self.shift(0, 1),
            self.shift(1, 1),
            self.shift(1, 0),
            self.shift(1, -1),
            self.shift(0, -1),
            self.shift(-1, -1),
            self.shift(-1, 0),
            self.shift(-1, 1),
        ]
    }

    /// Euclidean distance to `other`.
    #[inline]
    pub fn distance(self, other: Point) -> f64 {
        let dx = f64::from(self.x - other.x);
        let dy = f64::from(self.y - other.y);
        dx.hypot(dy)
    }

    /// Whether `other` is exactly one orthogonal step away.
    #[inline]
    pub fn is_adjacent_4(self, other: Point) -> bool {
        (self.x - other.x).abs() + (self.y - other.y).abs() == 1
    }
}

impl PartialOrd for Point {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Point {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.y.cmp(&other.y).then(self.x.cmp(&other.x))
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
// Range
// ---------------------------------------------------------------------------

/// A half-open rectangle \[min, max). `min` is inclusive, `max` is exclusive.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Range {
    pub min: Point,
    pub max: Point,
}

impl Range {
    /// Create a new range from two corners, canonicalized so that
    /// `min` <= `max` on each axis.
    #[inline]
    pub fn new(x0: i32, y0: i32, x1: i32, y1: i32) -> Self {
        Self {
            min: Point::new(x0.min(x1), y0.min(y1)),
            max: Point::new(x0.max(x1), y0.max(y1)),
        }
    }

    /// A range `width` by `height` cells with its minimum at the origin.
    #[inline]
    pub fn sized(width: i32, height: i32) -> Self {
        Self::new(0, 0, width, height)
    }

    #[inline]
    pub fn width(self) -> i32 {
        self.max.x - self.min.x
    }

    #[inline]
    pub fn height(self) -> i32 {
        self.max.y - self.min.y
    }

    /// Total number of cells in the range.
    #[inline]
    pub fn len(self) -> usize {
        if self.is_empty() {
            return 0;
        }
        (self.width() as usize) * (self.height() as usize)
    }

    /// Whether the range has zero or negative area.
    #[inline]
    pub fn is_empty(self) -> bool {
        self.min.x >= self.max.x || self.min.y >= self.max.y
    }

    /// Whether `p` is inside the half-open range.
    #[inline]
    pub fn contains(self, p: Point) -> bool {
        p.x >= self.min.x && p.x < self.max.x && p.y >= self.min.y && p.y < self.max.y
    }

    /// The top-left cell: leftmost column, highest row.
    #[inline]
    pub fn top_left(self) -> Point {
        Point::new(self.min.x, self.max.y - 1)
    }

    /// Flat row-major index of `p`, or `None` outside the range.
    #[inline]
    pub fn index_of(self, p: Point) -> Option<usize> {
        if !self.contains(p) {
            return None;
        }
        let x = (p.x - self.min.x) as usize;
        let y = (p.y - self.min.y) as usize;
        Some(y * self.width() as usize + x)
    }

    /// Inverse of [`index_of`](Self::index_of).
    #[inline]
    pub fn point_at(self, idx: usize) -> Point {
        let w = self.width().max(1) as usize;
        Point::new(
            (idx % w) as i32 + self.min.x,
            (idx / w) as i32 + self.min.y,
        )
    }

    /// Row-major iterator over every point in the range, bottom row first.
    #[inline]
    pub fn iter(self) -> RangeIter {
        RangeIter {
            range: self,
            cur: self.min,
        }
    }
}

impl IntoIterator for Range {
    type Item = Point;
    type IntoIter = RangeIter;
    #[inline]
    fn into_iter(self) -> RangeIter {
        self.iter()
    }
}

impl fmt::Display for Range {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}-{})", self.min, self.max)
    }
}

/// Row-major iterator over the points in a [`Range`].
#[derive(Clone, Debug)]
pub struct RangeIter {
    range: Range,
    cur: Point,
}

impl Iterator for RangeIter {
    type Item = Point;

    #[inline]
    fn next(&mut self) -> Option<Point> {
        if self.cur.y >= self.range.max.y || self.range.is_empty() {
            return None;
        }
        let p = self.cur;
        self.cur.x += 1;
        if self.cur.x >= self.range.max.x {
            self.cur.x = self.range.min.x;
            self.cur.y += 1;
        }
        Some(p)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn neighbor_order_is_up_right_down_left() {
        let p = Point::new(3, 3);
        assert_eq!(
            p.neighbors_4(),
            [
                Point::new(3, 4),
                Point::new(4, 3),
                Point::new(3, 2),
                Point::new(2, 3)
            ]
        );
        assert_eq!(p.neighbors_4()[0], p + Point::UP);
        assert_eq!(p.neighbors_4()[3], p + Point::LEFT);
    }

    #[test]
    fn eight_neighbors_are_distinct_and_adjacent() {
        let p = Point::new(-2, 7);
        let ns = p.neighbors_8();
        for (i, a) in ns.iter().enumerate() {
            assert!((a.x - p.x).abs() <= 1 && (a.y - p.y).abs() <= 1);
            assert_ne!(*a, p);
            for b in &ns[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn euclidean_distance() {
        assert_eq!(Point::new(0, 0).distance(Point::new(3, 4)), 5.0);
        assert_eq!(Point::new(1, 1).distance(Point::new(1, 2)), 1.0);
    }

    #[test]
    fn range_is_half_open() {
        let r = Range::new(0, 0, 5, 5);
        assert!(r.contains(Point::new(0, 0)));
        assert!(r.contains(Point::new(4, 4)));
        assert!(!r.contains(Point::new(5, 4)));
        assert!(!r.contains(Point::new(4, 5)));
        assert!(!r.contains(Point::new(-1, 0)));
        assert_eq!(r.len(), 25);
    }

    #[test]
    fn top_left_is_highest_row() {
        let r = Range::new(2, -3, 6, 4);
        assert_eq!(r.top_left(), Point::new(2, 3));
    }

    #[test]
    fn index_round_trips_through_point() {
        let r = Range::new(-2, 1, 3, 4);
        for (i, p) in r.iter().enumerate() {
            assert_eq!(r.index_of(p), Some(i));
            assert_eq!(r.point_at(i), p);
        }
        assert_eq!(r.index_of(Point::new(3, 1)), None);
    }

    #[test]
    fn empty_range_iterates_nothing() {
        let r = Range::new(1, 1, 1, 5);
        assert!(r.is_empty());
        assert_eq!(r.iter().count(), 0);
        assert_eq!(r.len(), 0);
    }
}
