#![cfg(feature = "parallel")]

use pareto_frontier::{
    generate::{generate_points, GenerationMode},
    sort_then_sweep, DivideAndConquer, DivideAndConquerBuilder, Point,
};
use proptest::prelude::*;
use rand::{rngs::StdRng, SeedableRng};

proptest! {
    #[test]
    fn forked_solver_matches_sweep(
        coords in prop::collection::vec((-20i32..20, -20i32..20), 0..400),
        cutoff in 2usize..64,
    ) {
        let points: Vec<Point> = coords
            .into_iter()
            .map(|(x, y)| Point::new(x as f64, y as f64))
            .collect();
        let solver = DivideAndConquerBuilder::new().with_parallel_cutoff(cutoff).build();
        prop_assert_eq!(solver.run(&points).unwrap(), sort_then_sweep(&points).unwrap());
    }
}

#[test]
fn forked_solver_on_generated_inputs() {
    let mut rng = StdRng::seed_from_u64(2024);
    for mode in GenerationMode::ALL {
        for &n in &[1usize, 2, 3, 1_000, 20_000] {
            let points = generate_points(n, mode, &mut rng);
            let expected = sort_then_sweep(&points).unwrap();
            let forked = DivideAndConquer::with_parallel_cutoff(2).run(&points).unwrap();
            let default = DivideAndConquer::new().run(&points).unwrap();
            assert_eq!(forked, expected, "mode={mode} n={n}");
            assert_eq!(default, expected, "mode={mode} n={n}");
        }
    }
}
