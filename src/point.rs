//! Two-dimensional points and the dominance relation.
//!
//! Larger is better in both coordinates: `a` dominates `b` when it is at least
//! as large in x and in y, and strictly larger in one of them. Fully equal
//! points do not dominate each other; the algorithms keep exactly one of them.
//!
//! `Point` deliberately has no `PartialOrd`/`Ord`. The only ordering used by
//! the crate is [`Point::canonical_cmp`]: ascending x, ties broken by ascending
//! y. Sweeping that order right to left meets the tallest of several equal-x
//! points first, which is what lets every algorithm share one tie-break.

use std::cmp::Ordering;

/// An immutable point in the plane.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    x: f64,
    y: f64,
}

impl Point {
    /// Create a point. NaN coordinates are accepted here and rejected by the
    /// algorithm entry points.
    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    #[inline]
    pub fn x(&self) -> f64 {
        self.x
    }

    #[inline]
    pub fn y(&self) -> f64 {
        self.y
    }

    /// Returns true if either coordinate is NaN.
    #[inline]
    pub fn is_nan(&self) -> bool {
        self.x.is_nan() || self.y.is_nan()
    }

    /// Returns true if `self` dominates `other`.
    #[inline]
    pub fn dominates(&self, other: &Point) -> bool {
        self.x >= other.x && self.y >= other.y && (self.x > other.x || self.y > other.y)
    }

    /// Canonical sort key: ascending x, then ascending y.
    ///
    /// `-0.0` and `0.0` compare equal, as they do under [`Point::dominates`].
    #[inline]
    pub fn canonical_cmp(&self, other: &Point) -> Ordering {
        unsigned_zero(self.x)
            .total_cmp(&unsigned_zero(other.x))
            .then_with(|| unsigned_zero(self.y).total_cmp(&unsigned_zero(other.y)))
    }
}

/// Maps `-0.0` to `0.0` and leaves every other value, NaN included, alone.
#[inline]
fn unsigned_zero(v: f64) -> f64 {
    v + 0.0
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Point::new(x, y)
    }
}

/// Stable sort of `points` into canonical order.
pub fn sort_canonical(points: &mut [Point]) {
    points.sort_by(Point::canonical_cmp);
}

/// Returns true if `points` is a valid staircase: strictly ascending in x and
/// strictly descending in y.
pub fn is_staircase(points: &[Point]) -> bool {
    points.windows(2).all(|w| w[0].x < w[1].x && w[0].y > w[1].y)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dominance_needs_one_strict_coordinate() {
        let a = Point::new(2.0, 2.0);
        assert!(a.dominates(&Point::new(1.0, 2.0)));
        assert!(a.dominates(&Point::new(2.0, 1.0)));
        assert!(a.dominates(&Point::new(-1.0, -1.0)));
        assert!(!a.dominates(&a));
        assert!(!a.dominates(&Point::new(3.0, 1.0)));
        assert!(!Point::new(1.0, 2.0).dominates(&a));
    }

    #[test]
    fn canonical_order_breaks_x_ties_by_ascending_y() {
        let mut pts = vec![
            Point::new(5.0, 3.0),
            Point::new(1.0, 9.0),
            Point::new(5.0, 1.0),
            Point::new(-2.0, 0.0),
        ];
        sort_canonical(&mut pts);
        assert_eq!(
            pts,
            vec![
                Point::new(-2.0, 0.0),
                Point::new(1.0, 9.0),
                Point::new(5.0, 1.0),
                Point::new(5.0, 3.0),
            ]
        );
    }

    #[test]
    fn signed_zeros_tie_in_canonical_order() {
        let neg = Point::new(-0.0, 1.0);
        let pos = Point::new(0.0, 1.0);
        assert_eq!(neg.canonical_cmp(&pos), Ordering::Equal);
        assert_eq!(
            Point::new(-0.0, 1.0).canonical_cmp(&Point::new(0.0, 0.0)),
            Ordering::Greater
        );
        assert_eq!(
            Point::new(0.0, -0.0).canonical_cmp(&Point::new(-0.0, 0.0)),
            Ordering::Equal
        );
    }

    #[test]
    fn staircase_requires_strict_steps() {
        assert!(is_staircase(&[]));
        assert!(is_staircase(&[Point::new(0.0, 0.0)]));
        assert!(is_staircase(&[Point::new(0.0, 3.0), Point::new(1.0, 2.0)]));
        assert!(!is_staircase(&[Point::new(0.0, 3.0), Point::new(0.0, 2.0)]));
        assert!(!is_staircase(&[Point::new(0.0, 2.0), Point::new(1.0, 2.0)]));
        assert!(!is_staircase(&[Point::new(1.0, 3.0), Point::new(0.0, 2.0)]));
    }

    #[test]
    fn nan_detection() {
        assert!(Point::new(f64::NAN, 0.0).is_nan());
        assert!(Point::new(0.0, f64::NAN).is_nan());
        assert!(!Point::new(f64::INFINITY, f64::NEG_INFINITY).is_nan());
    }
}
