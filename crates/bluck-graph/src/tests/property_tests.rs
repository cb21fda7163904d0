//! Property-based tests for the co-star graph using proptest.
//!
//! Catalogs are small random casts drawn from a fixed pool of actors so that
//! the co-star relation is dense enough to exercise multi-hop traversal.

use std::collections::{HashMap, VecDeque};

use bluck_catalog::Movie;
use proptest::prelude::*;
use rustc_hash::FxHashSet as HashSet;

use crate::{Discovered, MovieGraph};

const ACTOR_POOL: usize = 8;

fn actor(i: usize) -> String {
    format!("actor-{i}")
}

/// Movies with unique titles, one of three directors and a 1-4 actor cast.
fn catalog_strategy() -> impl Strategy<Value = Vec<Movie>> {
    prop::collection::vec(
        (0..3usize, prop::collection::hash_set(0..ACTOR_POOL, 1..=4)),
        0..=12,
    )
    .prop_map(|rows| {
        rows.into_iter()
            .enumerate()
            .map(|(i, (director, cast))| {
                let mut cast: Vec<_> = cast.into_iter().collect();
                cast.sort();
                Movie::new(
                    i.to_string(),
                    format!("movie-{i}"),
                    format!("director-{director}"),
                    cast.into_iter().map(actor),
                )
            })
            .collect()
    })
}

/// Hop distance from `start` to every reachable actor, computed directly from
/// the cast lists.
fn hop_distances(movies: &[Movie], start: &str) -> HashMap<String, usize> {
    let mut dist = HashMap::new();
    dist.insert(start.to_string(), 0);
    let mut queue = VecDeque::from([start.to_string()]);

    while let Some(star) = queue.pop_front() {
        let d = dist[&star];
        for movie in movies.iter().filter(|m| m.cast.contains(&star)) {
            for co_star in &movie.cast {
                if !dist.contains_key(co_star) {
                    dist.insert(co_star.clone(), d + 1);
                    queue.push_back(co_star.clone());
                }
            }
        }
    }
    dist
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    /// Property: depth d visits exactly the actors within d-1 hops
    #[test]
    fn prop_bfs_visits_actors_within_depth(
        movies in catalog_strategy(),
        start in 0..ACTOR_POOL,
        depth in 1..6usize,
    ) {
        let graph = MovieGraph::from_movies(movies.clone());
        let start = actor(start);
        let mut found = Discovered::new();
        graph.bfs(&start, &mut found, depth);

        let expected: HashSet<String> = hop_distances(&movies, &start)
            .into_iter()
            .filter(|(_, d)| *d < depth)
            .map(|(star, _)| star)
            .collect();
        prop_assert_eq!(&found.stars, &expected);

        // Titles and directors are exactly those of the visited stars' movies
        let titles: HashSet<String> = movies
            .iter()
            .filter(|m| m.cast.iter().any(|c| expected.contains(c)))
            .map(|m| m.title.clone())
            .collect();
        let directors: HashSet<String> = movies
            .iter()
            .filter(|m| m.cast.iter().any(|c| expected.contains(c)))
            .map(|m| m.director.clone())
            .collect();
        prop_assert_eq!(&found.movie_titles, &titles);
        prop_assert_eq!(&found.directors, &directors);
    }

    /// Property: repeating a search with the same visited sets adds nothing
    #[test]
    fn prop_bfs_reaches_fixed_point(
        movies in catalog_strategy(),
        start in 0..ACTOR_POOL,
        depth in 0..6usize,
    ) {
        let graph = MovieGraph::from_movies(movies);
        let mut found = Discovered::new();
        graph.bfs(&actor(start), &mut found, depth);
        let before = found.clone();
        graph.bfs(&actor(start), &mut found, depth);
        prop_assert_eq!(found, before);
    }

    /// Property: A co-starred with B ⟺ B co-starred with A, and nobody with themselves
    #[test]
    fn prop_co_star_relation_is_symmetric(movies in catalog_strategy()) {
        let graph = MovieGraph::from_movies(movies);
        for i in 0..ACTOR_POOL {
            let star = actor(i);
            for co_star in graph.starred_with(&star) {
                prop_assert_ne!(&co_star, &star);
                prop_assert!(graph.starred_with(&co_star).contains(&star));
            }
        }
    }

    /// Property: every ingested movie is reachable from its title, director and cast
    #[test]
    fn prop_every_movie_is_indexed(movies in catalog_strategy()) {
        let graph = MovieGraph::from_movies(movies.clone());
        prop_assert_eq!(graph.total_movies(), movies.len());
        prop_assert_eq!(
            graph.total_stars(),
            movies.iter().map(|m| m.cast.len()).sum::<usize>()
        );

        for movie in &movies {
            prop_assert_eq!(&graph.movie_from_title(&movie.title).unwrap().id, &movie.id);
            prop_assert!(graph
                .directed_movies(&movie.director)
                .iter()
                .any(|m| m.id == movie.id));
            for star in &movie.cast {
                prop_assert!(graph.starred_in(star).iter().any(|m| m.id == movie.id));
            }
        }
    }
}
