use pareto_frontier::{
    algorithms::all_algorithms,
    bounded_height_sweep, divide_and_conquer,
    point::{is_staircase, sort_canonical},
    presorted_sweep, sort_then_sweep, InputOrder, Point,
};
use proptest::prelude::*;
use rand::{rngs::StdRng, seq::SliceRandom, SeedableRng};

fn brute_force(points: &[Point]) -> Vec<Point> {
    let mut frontier: Vec<Point> = points
        .iter()
        .filter(|p| !points.iter().any(|q| q.dominates(p)))
        .copied()
        .collect();
    sort_canonical(&mut frontier);
    frontier.dedup();
    frontier
}

fn canonical(points: &[Point]) -> Vec<Point> {
    let mut sorted = points.to_vec();
    sort_canonical(&mut sorted);
    sorted
}

/// Small integers, both zeros and both infinities.
fn grid_coordinate() -> impl Strategy<Value = f64> {
    prop_oneof![
        8 => (-6i32..6).prop_map(f64::from),
        1 => Just(0.0),
        1 => Just(-0.0),
        1 => Just(f64::INFINITY),
        1 => Just(f64::NEG_INFINITY),
    ]
}

/// Small grid: plenty of shared x, shared y and exact duplicates.
fn grid_points() -> impl Strategy<Value = Vec<Point>> {
    prop::collection::vec((grid_coordinate(), grid_coordinate()), 0..48)
        .prop_map(|coords| coords.into_iter().map(Point::from).collect())
}

fn real_points() -> impl Strategy<Value = Vec<Point>> {
    prop::collection::vec((-1e6f64..1e6, -1e6f64..1e6), 0..96)
        .prop_map(|coords| coords.into_iter().map(Point::from).collect())
}

proptest! {
    #[test]
    fn all_algorithms_agree_on_grid(points in grid_points()) {
        let expected = brute_force(&points);
        let sorted = canonical(&points);
        for algorithm in all_algorithms() {
            let input = match algorithm.input_order() {
                InputOrder::Unsorted => &points,
                InputOrder::SortedByX => &sorted,
            };
            let got = algorithm.compute(input).unwrap();
            prop_assert_eq!(&got, &expected, "algorithm {}", algorithm.name());
        }
    }

    #[test]
    fn all_algorithms_agree_on_reals(points in real_points()) {
        let expected = brute_force(&points);
        prop_assert_eq!(&sort_then_sweep(&points).unwrap(), &expected);
        prop_assert_eq!(&divide_and_conquer(&points).unwrap(), &expected);
        prop_assert_eq!(&bounded_height_sweep(&points).unwrap(), &expected);
        prop_assert_eq!(&presorted_sweep(&canonical(&points)).unwrap(), &expected);
    }

    #[test]
    fn output_is_a_maximal_staircase(points in grid_points()) {
        let frontier = divide_and_conquer(&points).unwrap();
        prop_assert!(is_staircase(&frontier));
        for p in &frontier {
            prop_assert!(points.iter().all(|q| !q.dominates(p)), "{p:?} is dominated");
        }
        for p in &points {
            let undominated = points.iter().all(|q| !q.dominates(p));
            let count = frontier.iter().filter(|f| *f == p).count();
            prop_assert_eq!(count, usize::from(undominated));
        }
    }

    #[test]
    fn rerunning_on_the_output_is_idempotent(points in grid_points()) {
        let once = bounded_height_sweep(&points).unwrap();
        for algorithm in all_algorithms() {
            let twice = algorithm.compute(&once).unwrap();
            prop_assert_eq!(&twice, &once, "algorithm {}", algorithm.name());
        }
    }

    #[test]
    fn input_order_does_not_matter(points in grid_points(), seed in any::<u64>()) {
        let mut shuffled = points.clone();
        shuffled.shuffle(&mut StdRng::seed_from_u64(seed));
        prop_assert_eq!(sort_then_sweep(&shuffled).unwrap(), sort_then_sweep(&points).unwrap());
    }
}
