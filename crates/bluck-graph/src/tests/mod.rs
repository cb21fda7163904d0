//! Test suite for bluck-graph.

use bluck_catalog::Movie;

use crate::MovieGraph;

mod property_tests;

/// Spielberg directs A(Alice, Bob) and B(Bob, Charlie); Nolan directs C(Alice, David).
pub(crate) fn sample_movies() -> Vec<Movie> {
    vec![
        Movie::new("1", "A", "Spielberg", ["Alice", "Bob"]),
        Movie::new("2", "B", "Spielberg", ["Bob", "Charlie"]),
        Movie::new("3", "C", "Nolan", ["Alice", "David"]),
    ]
}

pub(crate) fn sample_graph() -> MovieGraph {
    MovieGraph::from_movies(sample_movies())
}

pub(crate) fn sorted<I: IntoIterator<Item = String>>(items: I) -> Vec<String> {
    let mut v: Vec<String> = items.into_iter().collect();
    v.sort();
    v
}

pub(crate) fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}
