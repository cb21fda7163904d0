//! Construction methods for MovieGraph.

use std::sync::Arc;

use bluck_catalog::{CatalogSource, Movie, PageKeys};
use tracing::{debug, error, info, warn};

use super::types::MovieGraph;
use crate::error::BuildFailure;

impl MovieGraph {
    /// Create a new empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Construct a graph from an iterator of movies, as if they were one page.
    pub fn from_movies<I>(movies: I) -> Self
    where
        I: IntoIterator<Item = Movie>,
    {
        let mut graph = Self::new();
        graph.ingest_page(movies);
        graph
    }

    /// Add every movie of one catalog page.
    pub fn ingest_page<I>(&mut self, movies: I)
    where
        I: IntoIterator<Item = Movie>,
    {
        for movie in movies {
            self.ingest_movie(movie);
        }
    }

    /// Index a single movie.
    ///
    /// A movie ingested twice is counted twice and appended twice; its co-star
    /// pairs are unioned, so the co-star relation stays symmetric.
    pub fn ingest_movie(&mut self, movie: Movie) {
        let movie = Arc::new(movie);
        self.num_movies += 1;

        self.title_to_movie
            .insert(movie.title.clone(), Arc::clone(&movie));
        self.directed_movies
            .entry(movie.director.clone())
            .or_default()
            .push(Arc::clone(&movie));

        for star in &movie.cast {
            self.starred_in
                .entry(star.clone())
                .or_default()
                .push(Arc::clone(&movie));
            self.num_stars += 1;

            let co_stars = self.starred_with.entry(star.clone()).or_default();
            for co_star in &movie.cast {
                if co_star != star {
                    co_stars.insert(co_star.clone());
                }
            }
        }

        self.num_directors = self.directed_movies.len();
    }

    /// Fetch every page from `source` and ingest it.
    ///
    /// A page that fails is recorded and skipped; the remaining pages are still
    /// ingested, so on `Err` the graph holds everything that did load.
    pub async fn populate_from_catalog(
        &mut self,
        source: &dyn CatalogSource,
        pages: &PageKeys,
    ) -> Result<(), BuildFailure> {
        info!(pages = pages.len(), "building movie graph");
        let mut failures = BuildFailure::default();

        for page in pages.iter() {
            match source.fetch_page(page).await {
                Ok(movies) => {
                    debug!(page, movies = movies.len(), "ingesting page");
                    self.ingest_page(movies);
                }
                Err(err) => {
                    warn!(page, error = %err, "error fetching movies for page");
                    failures.push(page, err);
                }
            }
        }

        info!(
            movies = self.num_movies,
            stars = self.num_stars,
            directors = self.num_directors,
            failed_pages = failures.len(),
            "movie graph built"
        );
        if !failures.is_empty() {
            error!(error = %failures, "error(s) occurred initializing movie graph");
        }
        failures.into_result()
    }
}
