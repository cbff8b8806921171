//! The four frontier algorithms.
//!
//! - [`sweep`]    : right-to-left dominance sweep, presorted or sort-then-sweep.
//! - [`merge`]    : linear merge of two adjacent staircases.
//! - [`divide`]   : divide-and-conquer driver built on [`merge`].
//! - [`bounded`]  : sweep with an explicit, rebuilt candidate set.
//!
//! Every algorithm returns the same staircase for the same input.

pub mod bounded;
pub mod divide;
pub mod merge;
pub mod sweep;

use crate::traits::ParetoAlgorithm;

/// One instance of each algorithm, in report order.
pub fn all_algorithms() -> Vec<Box<dyn ParetoAlgorithm + Send + Sync>> {
    vec![
        Box::new(sweep::SortThenSweep),
        Box::new(divide::DivideAndConquer::new()),
        Box::new(bounded::BoundedHeightSweep),
        Box::new(sweep::PresortedSweep),
    ]
}
