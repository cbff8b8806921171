//! Point collections for benchmarks and randomized tests.

use crate::point::Point;
use rand::Rng;
use std::fmt;

/// Shape of a generated collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GenerationMode {
    /// Both coordinates uniform in `[0, 2n)`.
    Random,
    /// Point `i` is `(i, n - i)`: every point is on the frontier.
    WorstCaseDescending,
    /// Point `i` is `(i, y)` with `y` uniform in `[0, n)`: already in
    /// canonical order.
    PresortedRandomY,
}

impl GenerationMode {
    pub const ALL: [GenerationMode; 3] = [
        GenerationMode::Random,
        GenerationMode::WorstCaseDescending,
        GenerationMode::PresortedRandomY,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            GenerationMode::Random => "random",
            GenerationMode::WorstCaseDescending => "worst_case",
            GenerationMode::PresortedRandomY => "presorted",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|m| m.label() == label)
    }
}

impl fmt::Display for GenerationMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.label())
    }
}

/// Generate `n` points of the given shape, drawing randomness from `rng`.
pub fn generate_points<R: Rng + ?Sized>(n: usize, mode: GenerationMode, rng: &mut R) -> Vec<Point> {
    if n == 0 {
        return Vec::new();
    }
    let nf = n as f64;
    match mode {
        GenerationMode::Random => (0..n)
            .map(|_| Point::new(rng.gen_range(0.0..2.0 * nf), rng.gen_range(0.0..2.0 * nf)))
            .collect(),
        GenerationMode::WorstCaseDescending => (0..n)
            .map(|i| Point::new(i as f64, (n - i) as f64))
            .collect(),
        GenerationMode::PresortedRandomY => (0..n)
            .map(|i| Point::new(i as f64, rng.gen_range(0.0..nf)))
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::point::is_staircase;
    use rand::{rngs::StdRng, SeedableRng};

    #[test]
    fn empty_for_zero() {
        let mut rng = StdRng::seed_from_u64(1);
        for mode in GenerationMode::ALL {
            assert!(generate_points(0, mode, &mut rng).is_empty());
        }
    }

    #[test]
    fn worst_case_is_one_long_staircase() {
        let mut rng = StdRng::seed_from_u64(1);
        let pts = generate_points(50, GenerationMode::WorstCaseDescending, &mut rng);
        assert_eq!(pts.len(), 50);
        assert_eq!(pts[0], Point::new(0.0, 50.0));
        assert_eq!(pts[49], Point::new(49.0, 1.0));
        assert!(is_staircase(&pts));
    }

    #[test]
    fn presorted_has_ascending_x_and_bounded_y() {
        let mut rng = StdRng::seed_from_u64(7);
        let pts = generate_points(200, GenerationMode::PresortedRandomY, &mut rng);
        assert!(pts.windows(2).all(|w| w[0].x() < w[1].x()));
        assert!(pts.iter().all(|p| (0.0..200.0).contains(&p.y())));
    }

    #[test]
    fn random_stays_in_range_and_is_reproducible() {
        let a = generate_points(100, GenerationMode::Random, &mut StdRng::seed_from_u64(9));
        let b = generate_points(100, GenerationMode::Random, &mut StdRng::seed_from_u64(9));
        assert_eq!(a, b);
        assert!(a
            .iter()
            .all(|p| (0.0..200.0).contains(&p.x()) && (0.0..200.0).contains(&p.y())));
    }

    #[test]
    fn labels_round_trip() {
        for mode in GenerationMode::ALL {
            assert_eq!(GenerationMode::from_label(mode.label()), Some(mode));
        }
        assert_eq!(GenerationMode::from_label("sideways"), None);
    }
}
