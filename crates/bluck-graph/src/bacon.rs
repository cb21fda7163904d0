//! "Kevin Bacon" search: BFS from every actor a query resolves to.

use std::sync::Arc;

use bluck_catalog::Movie;
use rustc_hash::FxHashSet as HashSet;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{GraphError, Result};
use crate::graph::Discovered;
use crate::queries::GraphQueries;

/// Absolute depth cap. No [`SearchLimits`] can raise a search past it.
pub const MAX_SEARCH_DEPTH: usize = 10;

/// Depth bounds applied to every search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchLimits {
    /// Used when the query does not ask for a depth.
    pub default_depth: usize,
    /// Cap on requested depth, itself capped at [`MAX_SEARCH_DEPTH`].
    pub max_depth: usize,
}

impl Default for SearchLimits {
    fn default() -> Self {
        Self {
            default_depth: 1,
            max_depth: MAX_SEARCH_DEPTH,
        }
    }
}

impl SearchLimits {
    pub fn clamp(&self, requested: Option<usize>) -> usize {
        requested
            .unwrap_or(self.default_depth)
            .min(self.max_depth.min(MAX_SEARCH_DEPTH))
    }
}

/// Seeds for a search. Any combination may be given; empty strings count as
/// absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct KevinBaconQuery {
    #[serde(default)]
    pub star: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub director: Option<String>,
    #[serde(default)]
    pub depth: Option<usize>,
}

impl KevinBaconQuery {
    pub fn star(star: impl Into<String>) -> Self {
        Self::default().with_star(star)
    }

    pub fn with_star(mut self, star: impl Into<String>) -> Self {
        self.star = Some(star.into());
        self
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_director(mut self, director: impl Into<String>) -> Self {
        self.director = Some(director.into());
        self
    }

    pub fn with_depth(mut self, depth: usize) -> Self {
        self.depth = Some(depth);
        self
    }
}

fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

/// Everything a search reached, plus the graph totals for "% explored" style
/// reporting.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct KevinBaconReport {
    /// The star seed as given, empty when the query had none.
    pub star: String,
    pub stars: Vec<String>,
    pub movies: Vec<Arc<Movie>>,
    pub directors: Vec<String>,
    pub total_stars: usize,
    pub total_movies: usize,
    pub total_directors: usize,
}

/// Seed actors in order: the star, then the director's cast, then the cast of
/// the titled movie. Duplicates are dropped.
fn seed_actors<G: GraphQueries + ?Sized>(graph: &G, query: &KevinBaconQuery) -> Vec<String> {
    let mut seeds = Vec::new();

    if let Some(star) = present(&query.star) {
        seeds.push(star.to_string());
    }
    if let Some(director) = present(&query.director) {
        seeds.extend(graph.directed_actors(director));
    }
    if let Some(title) = present(&query.title) {
        match graph.movie_from_title(title) {
            Ok(movie) => seeds.extend(movie.cast.iter().cloned()),
            Err(err) => debug!(title, error = %err, "skipping unresolved title seed"),
        }
    }

    let mut seen = HashSet::default();
    seeds.retain(|s| seen.insert(s.clone()));
    seeds
}

/// Run a search over `graph`.
///
/// Fails with [`GraphError::InvalidArguments`] when no seed resolves to an
/// actor. Titles reached by the traversal that no longer resolve to a movie
/// are left out of the report.
pub fn kevin_bacon<G: GraphQueries + ?Sized>(
    graph: &G,
    query: &KevinBaconQuery,
    limits: SearchLimits,
) -> Result<KevinBaconReport> {
    let seeds = seed_actors(graph, query);
    if seeds.is_empty() {
        return Err(GraphError::InvalidArguments(
            "the Kevin Bacon search requires at least one star, movie, or director".to_string(),
        ));
    }

    let depth = limits.clamp(query.depth);
    let mut found = Discovered::new();
    for seed in &seeds {
        if found.stars.contains(seed) {
            continue;
        }
        graph.bfs(seed, &mut found, depth);
    }

    let (stars, titles, directors) = found.sorted();
    let movies = graph.movies_from_titles(&titles);
    debug!(
        seeds = seeds.len(),
        depth,
        stars = stars.len(),
        movies = movies.len(),
        "kevin bacon search finished"
    );

    Ok(KevinBaconReport {
        star: present(&query.star).unwrap_or_default().to_string(),
        stars,
        movies,
        directors,
        total_stars: graph.total_stars(),
        total_movies: graph.total_movies(),
        total_directors: graph.total_directors(),
    })
}

/// BFS from a single actor into fresh sets; returns sorted stars, titles and
/// directors.
pub fn single_seed_search<G: GraphQueries + ?Sized>(
    graph: &G,
    start: &str,
    depth: usize,
) -> (Vec<String>, Vec<String>, Vec<String>) {
    let mut found = Discovered::new();
    graph.bfs(start, &mut found, depth);
    found.sorted()
}
