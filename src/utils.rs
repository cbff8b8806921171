//! Input validation and small heuristics shared by the algorithms.

use crate::error::{ParetoError, Result};
use crate::point::Point;
use std::cmp::Ordering;

/// Smallest interval the divide-and-conquer solver will fork on.
pub const MIN_PARALLEL_CUTOFF: usize = 1024;

/// Interval length below which divide-and-conquer solves both halves on the
/// current thread, for an input of `len` points.
///
/// Aims for roughly 64 leaf tasks on large inputs without ever splitting
/// intervals shorter than [`MIN_PARALLEL_CUTOFF`].
#[inline]
pub fn default_parallel_cutoff(len: usize) -> usize {
    (len / 64).max(MIN_PARALLEL_CUTOFF)
}

/// Fail on the first point with a NaN coordinate.
pub fn ensure_numeric(points: &[Point]) -> Result<()> {
    match points.iter().position(Point::is_nan) {
        Some(index) => Err(ParetoError::NonNumericCoordinate {
            index,
            x: points[index].x(),
            y: points[index].y(),
        }),
        None => Ok(()),
    }
}

/// Fail on the first point that sorts before its predecessor.
pub fn ensure_canonical_order(points: &[Point]) -> Result<()> {
    match points
        .windows(2)
        .position(|w| w[0].canonical_cmp(&w[1]) == Ordering::Greater)
    {
        Some(i) => Err(ParetoError::UnsortedInput { index: i + 1 }),
        None => Ok(()),
    }
}

/// Fail on the first position where `points` stops being a staircase.
pub(crate) fn ensure_staircase(points: &[Point], side: &'static str) -> Result<()> {
    match points
        .windows(2)
        .position(|w| !(w[0].x() < w[1].x() && w[0].y() > w[1].y()))
    {
        Some(i) => Err(ParetoError::NotAStaircase {
            side,
            index: i + 1,
        }),
        None => Ok(()),
    }
}
