//! Read surface of the graph, as consumed by request handlers.
//!
//! Search orchestration is written against this trait rather than the
//! concrete [`MovieGraph`], so it can be exercised with a test double.

use std::sync::Arc;

use bluck_catalog::Movie;

use crate::error::Result;
use crate::graph::{Discovered, MovieGraph};

pub trait GraphQueries: Send + Sync {
    fn bfs(&self, start: &str, found: &mut Discovered, max_depth: usize);
    fn directed_actors(&self, director: &str) -> Vec<String>;
    fn directed_movies(&self, director: &str) -> Vec<Arc<Movie>>;
    fn starred_in(&self, star: &str) -> Vec<Arc<Movie>>;
    fn starred_with(&self, star: &str) -> Vec<String>;
    fn movie_from_title(&self, title: &str) -> Result<Arc<Movie>>;
    fn total_stars(&self) -> usize;
    fn total_movies(&self) -> usize;
    fn total_directors(&self) -> usize;

    /// Resolve a set of titles, dropping the ones that do not resolve.
    fn movies_from_titles(&self, titles: &[String]) -> Vec<Arc<Movie>> {
        titles
            .iter()
            .filter_map(|title| self.movie_from_title(title).ok())
            .collect()
    }
}

impl GraphQueries for MovieGraph {
    fn bfs(&self, start: &str, found: &mut Discovered, max_depth: usize) {
        MovieGraph::bfs(self, start, found, max_depth)
    }

    fn directed_actors(&self, director: &str) -> Vec<String> {
        MovieGraph::directed_actors(self, director)
    }

    fn directed_movies(&self, director: &str) -> Vec<Arc<Movie>> {
        MovieGraph::directed_movies(self, director)
    }

    fn starred_in(&self, star: &str) -> Vec<Arc<Movie>> {
        MovieGraph::starred_in(self, star)
    }

    fn starred_with(&self, star: &str) -> Vec<String> {
        MovieGraph::starred_with(self, star)
    }

    fn movie_from_title(&self, title: &str) -> Result<Arc<Movie>> {
        MovieGraph::movie_from_title(self, title)
    }

    fn total_stars(&self) -> usize {
        MovieGraph::total_stars(self)
    }

    fn total_movies(&self) -> usize {
        MovieGraph::total_movies(self)
    }

    fn total_directors(&self) -> usize {
        MovieGraph::total_directors(self)
    }

    fn movies_from_titles(&self, titles: &[String]) -> Vec<Arc<Movie>> {
        MovieGraph::movies_from_titles(self, titles)
    }
}
