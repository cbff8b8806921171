//! Pareto frontiers of 2D point sets
//!
//! This crate computes the maximal (Pareto-optimal) subset of a collection of
//! points when larger is better in both coordinates, using four interchangeable
//! algorithms with different cost profiles.
//!
//! ## Core idea
//! Sorted by ascending x, the frontier is a *staircase*: x strictly rises
//! while y strictly falls. Every algorithm here produces exactly that
//! staircase, and all four produce the same one for the same input.
//!
//! ## Quick start
//! ```
//! use pareto_frontier::{sort_then_sweep, Point};
//!
//! let points: Vec<Point> = [(1.0, 4.0), (2.0, 2.0), (3.0, 5.0), (4.0, 1.0), (5.0, 3.0)]
//!     .into_iter()
//!     .map(Point::from)
//!     .collect();
//! let frontier = sort_then_sweep(&points).unwrap();
//! assert_eq!(frontier, vec![Point::new(3.0, 5.0), Point::new(5.0, 3.0)]);
//! ```
//!
//! ## Algorithms
//! - [`presorted_sweep`]: linear scan of input already in canonical order.
//! - [`sort_then_sweep`]: sort a copy, then scan; `O(n log n)`.
//! - [`divide_and_conquer`]: split, solve, [`merge_staircases`]; `O(n log n)`,
//!   optionally fork-join with the `parallel` feature.
//! - [`bounded_height_sweep`]: scan with an explicitly rebuilt candidate set.
//!   It simulates an `O(n log h)` structure but is `O(n·h)` in the worst case.
//!
//! The [`analysis`] and [`generate`] modules support the `scaling_report`
//! binary, which times each algorithm and fits it against its complexity term.

pub mod algorithms;
pub mod analysis;
pub mod builder;
pub mod error;
pub mod generate;
pub mod point;
pub mod traits;
pub mod utils;

pub use crate::algorithms::bounded::{bounded_height_sweep, BoundedHeightSweep};
pub use crate::algorithms::divide::{divide_and_conquer, DivideAndConquer};
pub use crate::algorithms::merge::merge_staircases;
pub use crate::algorithms::sweep::{
    presorted_sweep, sort_then_sweep, sort_then_sweep_in_place, sweep, PresortedSweep,
    SortThenSweep,
};
pub use crate::builder::DivideAndConquerBuilder;
pub use crate::error::{ParetoError, Result};
pub use crate::point::Point;
pub use crate::traits::{InputOrder, ParetoAlgorithm};
