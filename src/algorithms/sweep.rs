//! Right-to-left dominance sweep.
//!
//! Walking a canonically ordered sequence from the largest x down, a point is
//! on the frontier exactly when its y beats every y seen so far. A point whose
//! y only ties the running maximum is dominated (or duplicated) by a point
//! already kept and is dropped.
//!
//! Two flavours share the scan:
//! - [`presorted_sweep`] checks the canonical-order precondition and runs in
//!   linear time;
//! - [`sort_then_sweep`] sorts a private copy first, so its cost is the sort.

use crate::analysis::Complexity;
use crate::error::Result;
use crate::point::{sort_canonical, Point};
use crate::traits::{InputOrder, ParetoAlgorithm};
use crate::utils::{ensure_canonical_order, ensure_numeric};

/// Compute the Pareto set of `points`, sorting a copy first unless `order`
/// promises canonical order.
pub fn sweep(points: &[Point], order: InputOrder) -> Result<Vec<Point>> {
    match order {
        InputOrder::Unsorted => sort_then_sweep(points),
        InputOrder::SortedByX => presorted_sweep(points),
    }
}

/// Sort a copy of `points` into canonical order and sweep it.
///
/// The caller's slice is left untouched; see [`sort_then_sweep_in_place`] for
/// the variant that reuses the caller's buffer.
pub fn sort_then_sweep(points: &[Point]) -> Result<Vec<Point>> {
    #[cfg(feature = "tracing")]
    let span = tracing::info_span!("sort_then_sweep", n = points.len());
    #[cfg(feature = "tracing")]
    let _enter = span.enter();

    ensure_numeric(points)?;
    let mut sorted = points.to_vec();
    sort_canonical(&mut sorted);
    let frontier = sweep_sorted(&sorted);

    #[cfg(feature = "tracing")]
    tracing::debug!(h = frontier.len(), "sweep finished");
    Ok(frontier)
}

/// Sort `points` in place into canonical order, then sweep it.
///
/// On success the caller's slice is left sorted. On error it is untouched.
pub fn sort_then_sweep_in_place(points: &mut [Point]) -> Result<Vec<Point>> {
    #[cfg(feature = "tracing")]
    let span = tracing::info_span!("sort_then_sweep_in_place", n = points.len());
    #[cfg(feature = "tracing")]
    let _enter = span.enter();

    ensure_numeric(points)?;
    sort_canonical(points);
    let frontier = sweep_sorted(points);

    #[cfg(feature = "tracing")]
    tracing::debug!(h = frontier.len(), "sweep finished");
    Ok(frontier)
}

/// Sweep `points`, which must already be in canonical order.
///
/// Canonical order is stricter than ascending x: points sharing an x must
/// also be in ascending y, so the tallest of them is met first from the
/// right. Input such as `[(1, 5), (1, 2)]` is sorted by x but would leave the
/// dominated `(1, 2)` on the frontier, so it is rejected.
///
/// Returns [`ParetoError::UnsortedInput`](crate::ParetoError::UnsortedInput)
/// if the order does not hold. Both checks and the sweep are linear.
pub fn presorted_sweep(points: &[Point]) -> Result<Vec<Point>> {
    #[cfg(feature = "tracing")]
    let span = tracing::info_span!("presorted_sweep", n = points.len());
    #[cfg(feature = "tracing")]
    let _enter = span.enter();

    ensure_numeric(points)?;
    ensure_canonical_order(points)?;
    let frontier = sweep_sorted(points);

    #[cfg(feature = "tracing")]
    tracing::debug!(h = frontier.len(), "sweep finished");
    Ok(frontier)
}

/// The scan itself. `sorted` must be NaN-free and in canonical order.
pub(crate) fn sweep_sorted(sorted: &[Point]) -> Vec<Point> {
    let mut frontier = Vec::new();
    let mut max_y = f64::NEG_INFINITY;
    for p in sorted.iter().rev() {
        // NEG_INFINITY > NEG_INFINITY is false, so guard the first point.
        if p.y() > max_y || frontier.is_empty() {
            frontier.push(*p);
            max_y = p.y();
        }
    }
    frontier.reverse();
    frontier
}

/// Sort-then-sweep as a [`ParetoAlgorithm`].
#[derive(Debug, Clone, Copy, Default)]
pub struct SortThenSweep;

impl ParetoAlgorithm for SortThenSweep {
    fn name(&self) -> &'static str {
        "sort_sweep"
    }

    fn title(&self) -> &'static str {
        "Simple Right-to-Left Sweep"
    }

    fn complexity(&self) -> Complexity {
        Complexity::NTimesH
    }

    fn compute(&self, points: &[Point]) -> Result<Vec<Point>> {
        sort_then_sweep(points)
    }
}

/// Presorted sweep as a [`ParetoAlgorithm`].
#[derive(Debug, Clone, Copy, Default)]
pub struct PresortedSweep;

impl ParetoAlgorithm for PresortedSweep {
    fn name(&self) -> &'static str {
        "presorted_sweep"
    }

    fn title(&self) -> &'static str {
        "Pre-Sorted Sweep"
    }

    fn complexity(&self) -> Complexity {
        Complexity::Linear
    }

    fn input_order(&self) -> InputOrder {
        InputOrder::SortedByX
    }

    fn compute(&self, points: &[Point]) -> Result<Vec<Point>> {
        presorted_sweep(points)
    }
}
