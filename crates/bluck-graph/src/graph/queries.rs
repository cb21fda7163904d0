//! Query methods for MovieGraph.
//!
//! Lookups of unknown keys return empty collections; only title resolution
//! reports a miss as an error.

use std::sync::Arc;

use bluck_catalog::Movie;
use rustc_hash::FxHashSet as HashSet;
use tracing::debug;

use super::types::MovieGraph;
use crate::error::{GraphError, Result};

impl MovieGraph {
    /// Movies directed by `director`, in catalog order.
    pub fn directed_movies(&self, director: &str) -> Vec<Arc<Movie>> {
        self.directed_movies
            .get(director)
            .cloned()
            .unwrap_or_default()
    }

    /// Everyone cast in a movie by `director`, deduplicated in first-seen order.
    pub fn directed_actors(&self, director: &str) -> Vec<String> {
        let mut seen = HashSet::default();
        let mut actors = Vec::new();

        for movie in self.directed_movies.get(director).into_iter().flatten() {
            for actor in &movie.cast {
                if seen.insert(actor.as_str()) {
                    actors.push(actor.clone());
                }
            }
        }
        actors
    }

    /// Movies `star` appears in, in catalog order.
    pub fn starred_in(&self, star: &str) -> Vec<Arc<Movie>> {
        self.starred_in.get(star).cloned().unwrap_or_default()
    }

    /// Everyone `star` shared a cast with, in no particular order.
    pub fn starred_with(&self, star: &str) -> Vec<String> {
        self.starred_with
            .get(star)
            .map(|set| set.iter().cloned().collect())
            .unwrap_or_default()
    }

    /// Exact-match title lookup.
    pub fn movie_from_title(&self, title: &str) -> Result<Arc<Movie>> {
        self.title_to_movie.get(title).cloned().ok_or_else(|| {
            debug!(title, "no movie with title");
            GraphError::MovieNotFound(title.to_string())
        })
    }

    /// Id of the movie with this exact title.
    pub fn id_from_title(&self, title: &str) -> Result<String> {
        self.movie_from_title(title).map(|movie| movie.id.clone())
    }

    /// Resolve titles to movies, dropping titles that are not indexed.
    pub fn movies_from_titles<'a, I>(&self, titles: I) -> Vec<Arc<Movie>>
    where
        I: IntoIterator<Item = &'a String>,
    {
        titles
            .into_iter()
            .filter_map(|title| self.title_to_movie.get(title).cloned())
            .collect()
    }

    /// Cast appearances counted at build time (an actor in three movies counts three times).
    pub fn total_stars(&self) -> usize {
        self.num_stars
    }

    /// Movies ingested, summed across pages.
    pub fn total_movies(&self) -> usize {
        self.num_movies
    }

    /// Distinct directors.
    pub fn total_directors(&self) -> usize {
        self.num_directors
    }

    /// Distinct actors.
    pub fn distinct_stars(&self) -> usize {
        self.starred_in.len()
    }

    /// Distinct titles.
    pub fn distinct_titles(&self) -> usize {
        self.title_to_movie.len()
    }

    pub fn is_empty(&self) -> bool {
        self.num_movies == 0
    }
}
