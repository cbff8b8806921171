//! Divide-and-conquer frontier.
//!
//! The input is sorted once; the recursion then splits at the midpoint,
//! solves both halves and joins them with [`merge_adjacent`]. The split keeps
//! every point of the left half canonically before every point of the right
//! half, which is the merge's only precondition.
//!
//! Depth is `ceil(log2 n)`, so recursion is safe for any slice that fits in
//! memory. With the `parallel` feature the two halves of intervals at least
//! `parallel_cutoff` long are solved with `rayon::join`.

use crate::algorithms::merge::merge_adjacent;
use crate::analysis::Complexity;
use crate::builder::DivideAndConquerBuilder;
use crate::error::Result;
use crate::point::{sort_canonical, Point};
use crate::traits::ParetoAlgorithm;
use crate::utils::{default_parallel_cutoff, ensure_numeric};
#[cfg(feature = "parallel")]
use rayon::join;

/// Divide-and-conquer solver.
#[derive(Debug, Clone, Copy, Default)]
pub struct DivideAndConquer {
    parallel_cutoff: Option<usize>,
}

impl DivideAndConquer {
    /// Solver with the default parallel cutoff heuristic.
    pub fn new() -> Self {
        Self::default()
    }

    /// Solver that forks only on intervals of at least `cutoff` points.
    ///
    /// # Panics
    /// Panics if `cutoff < 2`.
    pub fn with_parallel_cutoff(cutoff: usize) -> Self {
        assert!(cutoff >= 2, "parallel_cutoff must be at least 2");
        Self {
            parallel_cutoff: Some(cutoff),
        }
    }

    pub fn builder() -> DivideAndConquerBuilder {
        DivideAndConquerBuilder::new()
    }

    /// Cutoff used for an input of `len` points.
    pub fn parallel_cutoff(&self, len: usize) -> usize {
        self.parallel_cutoff
            .unwrap_or_else(|| default_parallel_cutoff(len))
    }

    /// Compute the Pareto set of `points`. The caller's slice is not mutated.
    pub fn run(&self, points: &[Point]) -> Result<Vec<Point>> {
        #[cfg(feature = "tracing")]
        let span = tracing::info_span!("divide_and_conquer", n = points.len());
        #[cfg(feature = "tracing")]
        let _enter = span.enter();

        ensure_numeric(points)?;
        let mut sorted = points.to_vec();
        sort_canonical(&mut sorted);
        let cutoff = self.parallel_cutoff(sorted.len());
        let frontier = solve(&sorted, cutoff);

        #[cfg(feature = "tracing")]
        tracing::debug!(h = frontier.len(), cutoff, "divide and conquer finished");
        Ok(frontier)
    }
}

/// Compute the Pareto set of `points` by divide and conquer with default
/// settings.
pub fn divide_and_conquer(points: &[Point]) -> Result<Vec<Point>> {
    DivideAndConquer::new().run(points)
}

fn solve(sorted: &[Point], cutoff: usize) -> Vec<Point> {
    if sorted.len() <= 1 {
        return sorted.to_vec();
    }
    #[cfg(feature = "tracing")]
    let span = tracing::trace_span!("solve_interval", len = sorted.len());
    #[cfg(feature = "tracing")]
    let _enter = span.enter();

    let (lo, hi) = sorted.split_at(sorted.len() / 2);
    let (left, right) = solve_halves(lo, hi, cutoff);
    merge_adjacent(left, right)
}

#[cfg(feature = "parallel")]
fn solve_halves(lo: &[Point], hi: &[Point], cutoff: usize) -> (Vec<Point>, Vec<Point>) {
    if lo.len() + hi.len() >= cutoff {
        join(|| solve(lo, cutoff), || solve(hi, cutoff))
    } else {
        (solve(lo, cutoff), solve(hi, cutoff))
    }
}

#[cfg(not(feature = "parallel"))]
fn solve_halves(lo: &[Point], hi: &[Point], cutoff: usize) -> (Vec<Point>, Vec<Point>) {
    (solve(lo, cutoff), solve(hi, cutoff))
}

impl ParetoAlgorithm for DivideAndConquer {
    fn name(&self) -> &'static str {
        "divide_conquer"
    }

    fn title(&self) -> &'static str {
        "Divide-and-Conquer"
    }

    fn complexity(&self) -> Complexity {
        Complexity::NLogN
    }

    fn compute(&self, points: &[Point]) -> Result<Vec<Point>> {
        self.run(points)
    }
}
