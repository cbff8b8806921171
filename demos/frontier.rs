//! Example: the same frontier from all four algorithms.
//!
//! Run with:
//! `cargo run --example frontier`

use pareto_frontier::{algorithms::all_algorithms, point::sort_canonical, InputOrder, Point};

fn main() {
    let mut points: Vec<Point> = [
        (1.0, 4.0),
        (2.0, 2.0),
        (3.0, 5.0),
        (4.0, 1.0),
        (5.0, 3.0),
        (5.0, 2.0),
        (0.5, 4.5),
    ]
    .into_iter()
    .map(Point::from)
    .collect();

    println!("Input: {}", render(&points));
    for algorithm in all_algorithms() {
        if algorithm.input_order() == InputOrder::SortedByX {
            sort_canonical(&mut points);
        }
        match algorithm.compute(&points) {
            Ok(frontier) => println!(
                "{:<16} {:<12} h={} {}",
                algorithm.name(),
                algorithm.complexity(),
                frontier.len(),
                render(&frontier)
            ),
            Err(err) => println!("{:<16} error: {err}", algorithm.name()),
        }
    }
}

fn render(points: &[Point]) -> String {
    let items: Vec<String> = points
        .iter()
        .map(|p| format!("({}, {})", p.x(), p.y()))
        .collect();
    format!("[{}]", items.join(", "))
}
