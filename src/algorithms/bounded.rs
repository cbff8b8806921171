//! Bounded log-height sweep.
//!
//! This is an empirical stand-in for an `O(n log h)` frontier algorithm, not
//! an implementation of one. It sweeps right to left like the plain sweep, but
//! keeps the frontier found so far as an explicit candidate set and rebuilds
//! that set every time a new point survives, discarding any candidate the
//! rebuilt set dominates. The rebuild is linear in the candidate count, so the
//! worst case is `O(n·h)`; that is the cost a balanced tree would bring down
//! to `O(log h)` per point.
//!
//! Candidates are stored in ascending x order. The front entry is the one
//! kept most recently, which in a right-to-left sweep is also the tallest, so
//! a single comparison against it rejects every dominated point.

use crate::analysis::Complexity;
use crate::error::Result;
use crate::point::{sort_canonical, Point};
use crate::traits::ParetoAlgorithm;
use crate::utils::ensure_numeric;

/// Compute the Pareto set of `points` with the bounded-height sweep. The
/// caller's slice is not mutated.
pub fn bounded_height_sweep(points: &[Point]) -> Result<Vec<Point>> {
    #[cfg(feature = "tracing")]
    let span = tracing::info_span!("bounded_height_sweep", n = points.len());
    #[cfg(feature = "tracing")]
    let _enter = span.enter();

    ensure_numeric(points)?;
    let mut sorted = points.to_vec();
    sort_canonical(&mut sorted);

    let mut candidates: Vec<Point> = Vec::new();
    #[cfg(feature = "tracing")]
    let mut rebuilds = 0usize;
    for &p in sorted.iter().rev() {
        if let Some(front) = candidates.first() {
            if p.y() <= front.y() {
                continue;
            }
        }
        candidates = rebuild(p, candidates);
        #[cfg(feature = "tracing")]
        {
            rebuilds += 1;
        }
    }

    #[cfg(feature = "tracing")]
    tracing::debug!(h = candidates.len(), rebuilds, "bounded sweep finished");
    Ok(candidates)
}

/// New candidate set headed by `p`, followed by every old candidate not
/// dominated by the entry appended before it.
fn rebuild(p: Point, old: Vec<Point>) -> Vec<Point> {
    let mut next = Vec::with_capacity(old.len() + 1);
    next.push(p);
    let mut last = p;
    for q in old {
        if !last.dominates(&q) && last != q {
            next.push(q);
            last = q;
        }
    }
    next
}

/// Bounded-height sweep as a [`ParetoAlgorithm`].
#[derive(Debug, Clone, Copy, Default)]
pub struct BoundedHeightSweep;

impl ParetoAlgorithm for BoundedHeightSweep {
    fn name(&self) -> &'static str {
        "bounded_sweep"
    }

    fn title(&self) -> &'static str {
        "Log-Height Sweep (simulated)"
    }

    fn complexity(&self) -> Complexity {
        Complexity::NLogH
    }

    fn compute(&self, points: &[Point]) -> Result<Vec<Point>> {
        bounded_height_sweep(points)
    }
}
