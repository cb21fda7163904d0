//! Centroid id → member movie ids.

use bluck_catalog::{CatalogSource, Movie, PageKeys};
use rustc_hash::FxHashMap as HashMap;
use tracing::{info, warn};

use crate::error::{MoodError, Result};

/// Which movies belong to each centroid, in catalog order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CentroidMovieIndex {
    members: HashMap<usize, Vec<String>>,
}

impl CentroidMovieIndex {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_movies<'a, I>(movies: I) -> Self
    where
        I: IntoIterator<Item = &'a Movie>,
    {
        let mut index = Self::new();
        index.extend(movies);
        index
    }

    pub fn extend<'a, I>(&mut self, movies: I)
    where
        I: IntoIterator<Item = &'a Movie>,
    {
        for movie in movies {
            self.members
                .entry(movie.centroid)
                .or_default()
                .push(movie.id.clone());
        }
    }

    /// Walk every page of `source`. Pages that fail are logged and skipped.
    pub async fn load(source: &dyn CatalogSource, pages: &PageKeys) -> Self {
        let mut index = Self::new();
        let mut skipped = 0usize;

        for page in pages.iter() {
            match source.fetch_page(page).await {
                Ok(movies) => index.extend(&movies),
                Err(err) => {
                    skipped += 1;
                    warn!(page, error = %err, "failed to get movies for centroid index");
                }
            }
        }

        info!(
            centroids = index.members.len(),
            skipped_pages = skipped,
            "centroid index ready"
        );
        index
    }

    /// Number of centroids with at least one movie.
    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn movie_ids_for_centroid(&self, centroid: usize) -> Result<&[String]> {
        self.members
            .get(&centroid)
            .map(Vec::as_slice)
            .ok_or(MoodError::NoMoviesForCentroid(centroid))
    }

    /// One member of `centroid`, picked uniformly with OS randomness.
    pub fn random_movie_from_centroid(&self, centroid: usize) -> Result<&str> {
        let ids = self.movie_ids_for_centroid(centroid)?;
        let pick = getrandom::u64()? % ids.len() as u64;
        Ok(&ids[pick as usize])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bluck_catalog::test_utils::StaticCatalog;

    fn movie(id: &str, centroid: usize) -> Movie {
        Movie::new(id, format!("title {id}"), "director", ["actor"]).with_centroid(centroid)
    }

    #[test]
    fn groups_ids_in_catalog_order() {
        let movies = [movie("a", 1), movie("b", 0), movie("c", 1)];
        let index = CentroidMovieIndex::from_movies(&movies);

        assert_eq!(index.len(), 2);
        assert_eq!(index.movie_ids_for_centroid(1).unwrap(), ["a", "c"]);
        assert_eq!(index.movie_ids_for_centroid(0).unwrap(), ["b"]);
        assert!(matches!(
            index.movie_ids_for_centroid(7),
            Err(MoodError::NoMoviesForCentroid(7))
        ));
    }

    #[test]
    fn random_pick_is_a_member() {
        let movies = [movie("a", 3), movie("b", 3), movie("c", 3)];
        let index = CentroidMovieIndex::from_movies(&movies);

        for _ in 0..50 {
            let id = index.random_movie_from_centroid(3).unwrap();
            assert!(["a", "b", "c"].contains(&id));
        }
        assert!(index.random_movie_from_centroid(4).is_err());
    }

    #[tokio::test]
    async fn load_skips_failed_pages() {
        let source = StaticCatalog::new()
            .with_page("A", vec![movie("a", 0)])
            .with_page("B", vec![movie("b", 0)])
            .with_failing_page("C");

        let index = CentroidMovieIndex::load(&source, &PageKeys::from_chars("ABC")).await;
        assert_eq!(index.movie_ids_for_centroid(0).unwrap(), ["a", "b"]);
        assert_eq!(source.fetch_count(), 3);
    }
}
