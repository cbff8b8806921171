//! Merging two adjacent staircases.
//!
//! `left` and `right` come from a split of one canonically ordered sequence, so
//! every point of `left` sorts no later than every point of `right`. Nothing in
//! `right` can be dominated by `left`. A point of `left` survives iff it is
//! strictly taller than the tallest point of `right`, which is `right[0]`.
//! Because `left` is itself a staircase the survivors form a prefix.

use crate::error::{ParetoError, Result};
use crate::point::Point;
use crate::utils::{ensure_numeric, ensure_staircase};
use std::cmp::Ordering;

/// Merge two valid, adjacent staircases into the staircase of their union.
///
/// Preconditions, each checked in linear time:
/// - both inputs are NaN-free staircases (strictly ascending x, strictly
///   descending y);
/// - the last point of `left` does not sort after the first point of `right`
///   in canonical order.
///
/// The second condition is stronger than every left x being at most every
/// right x. When the two staircases meet at one x, the left point there must
/// not be taller than the right one: `[(2, 3)]` and `[(2, 1)]` would merge into
/// two points sharing an x, which is not a staircase, so that pair is
/// rejected with [`ParetoError::OverlappingStaircases`].
///
/// ```
/// use pareto_frontier::{merge_staircases, Point};
///
/// let left = vec![Point::new(0.0, 9.0), Point::new(2.0, 4.0)];
/// let right = vec![Point::new(3.0, 5.0), Point::new(6.0, 1.0)];
/// let merged = merge_staircases(left, right).unwrap();
/// assert_eq!(merged, vec![Point::new(0.0, 9.0), Point::new(3.0, 5.0), Point::new(6.0, 1.0)]);
/// ```
pub fn merge_staircases(left: Vec<Point>, right: Vec<Point>) -> Result<Vec<Point>> {
    #[cfg(feature = "tracing")]
    let span = tracing::info_span!("merge_staircases", left = left.len(), right = right.len());
    #[cfg(feature = "tracing")]
    let _enter = span.enter();

    ensure_numeric(&left)?;
    ensure_numeric(&right)?;
    ensure_staircase(&left, "left")?;
    ensure_staircase(&right, "right")?;
    if let (Some(l), Some(r)) = (left.last(), right.first()) {
        if l.canonical_cmp(r) == Ordering::Greater {
            return Err(ParetoError::OverlappingStaircases {
                left_x: l.x(),
                right_x: r.x(),
            });
        }
    }
    let merged = merge_adjacent(left, right);

    #[cfg(feature = "tracing")]
    tracing::debug!(h = merged.len(), "merge finished");
    Ok(merged)
}

/// Unchecked merge used by the divide-and-conquer recursion.
pub(crate) fn merge_adjacent(mut left: Vec<Point>, right: Vec<Point>) -> Vec<Point> {
    let Some(wall) = right.first().map(Point::y) else {
        return left;
    };
    debug_assert!(right.iter().all(|p| p.y() <= wall), "right is not a staircase");

    let keep = left.partition_point(|p| p.y() > wall);
    debug_assert!(left[keep..].iter().all(|p| p.y() <= wall));
    left.truncate(keep);
    left.extend(right);
    left
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pts(coords: &[(f64, f64)]) -> Vec<Point> {
        coords.iter().copied().map(Point::from).collect()
    }

    #[test]
    fn empty_right_returns_left() {
        let left = pts(&[(0.0, 2.0), (1.0, 1.0)]);
        assert_eq!(merge_staircases(left.clone(), Vec::new()).unwrap(), left);
    }

    #[test]
    fn empty_left_returns_right() {
        let right = pts(&[(0.0, 2.0), (1.0, 1.0)]);
        assert_eq!(merge_staircases(Vec::new(), right.clone()).unwrap(), right);
    }

    #[test]
    fn left_points_level_with_the_wall_are_dropped() {
        let left = pts(&[(0.0, 9.0), (1.0, 5.0), (2.0, 4.0)]);
        let right = pts(&[(3.0, 5.0), (4.0, 0.0)]);
        assert_eq!(
            merge_staircases(left, right).unwrap(),
            pts(&[(0.0, 9.0), (3.0, 5.0), (4.0, 0.0)])
        );
    }

    #[test]
    fn shared_boundary_x_is_allowed_in_canonical_order() {
        let left = pts(&[(0.0, 4.0), (2.0, 1.0)]);
        let right = pts(&[(2.0, 3.0)]);
        assert_eq!(
            merge_staircases(left, right).unwrap(),
            pts(&[(0.0, 4.0), (2.0, 3.0)])
        );
    }

    #[test]
    fn overlapping_ranges_are_rejected() {
        let left = pts(&[(0.0, 4.0), (5.0, 1.0)]);
        let right = pts(&[(3.0, 3.0)]);
        assert_eq!(
            merge_staircases(left, right),
            Err(ParetoError::OverlappingStaircases {
                left_x: 5.0,
                right_x: 3.0
            })
        );

        // Same x, but the taller point sits on the left.
        let left = pts(&[(2.0, 3.0)]);
        let right = pts(&[(2.0, 1.0)]);
        assert!(matches!(
            merge_staircases(left, right),
            Err(ParetoError::OverlappingStaircases { .. })
        ));
    }

    #[test]
    fn malformed_staircase_is_rejected() {
        let left = pts(&[(0.0, 1.0), (1.0, 2.0)]);
        assert_eq!(
            merge_staircases(left, pts(&[(3.0, 0.0)])),
            Err(ParetoError::NotAStaircase {
                side: "left",
                index: 1
            })
        );
    }
}
