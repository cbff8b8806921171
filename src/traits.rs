//! The interface shared by every frontier algorithm.
//!
//! Each algorithm is a pure function of its input slice. The trait exists so
//! that measurement code can iterate over the algorithms uniformly and fit
//! each one against the complexity curve it claims; direct callers can use the
//! free functions in [`crate::algorithms`] instead.

use crate::analysis::Complexity;
use crate::error::Result;
use crate::point::Point;

/// Ordering an algorithm requires of its input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputOrder {
    /// Any order; the algorithm sorts a private copy.
    Unsorted,
    /// Canonical order (ascending x, ties by ascending y), checked on entry.
    SortedByX,
}

/// A Pareto-frontier algorithm.
///
/// Contract for [`compute`](ParetoAlgorithm::compute):
/// - the input slice is never mutated;
/// - the output is the Pareto set of the input in canonical order, i.e. a
///   staircase with strictly ascending x and strictly descending y;
/// - of several identical points, exactly one survives;
/// - all implementations return identical sequences for the same input.
pub trait ParetoAlgorithm {
    /// Short identifier used in reports.
    fn name(&self) -> &'static str;

    /// Human-readable title used in report headings.
    fn title(&self) -> &'static str;

    /// Complexity term the measured running time is fitted against.
    fn complexity(&self) -> Complexity;

    /// Precondition on the order of the input.
    fn input_order(&self) -> InputOrder {
        InputOrder::Unsorted
    }

    /// Compute the Pareto set of `points`.
    fn compute(&self, points: &[Point]) -> Result<Vec<Point>>;
}
