//! # bluck-mood
//!
//! Mood-based lookups over clustered movies.
//!
//! Every movie in the catalog was assigned to a cluster offline; each cluster
//! is summarized by a centroid in the twelve-dimension metric space of
//! [`MovieMetrics`](bluck_catalog::MovieMetrics). This crate holds two read-only
//! caches over that clustering:
//!
//! - [`CentroidCache`]: centroid id → metrics, with nearest-centroid search
//!   for a query mood.
//! - [`CentroidMovieIndex`]: centroid id → ids of the movies in it.
//!
//! Both are loaded at most once through [`MoodInitializer`].
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use bluck_catalog::{JsonCatalog, JsonCentroids, MovieMetrics, PageKeys};
//! use bluck_mood::MoodInitializer;
//!
//! # async fn run() -> bluck_mood::Result<()> {
//! let mood = MoodInitializer::new(
//!     Arc::new(JsonCentroids::new("centroids.json")),
//!     Arc::new(JsonCatalog::new("catalog.json")),
//!     PageKeys::default(),
//! );
//!
//! let query = MovieMetrics { comedy: 9.0, romance: 7.0, ..MovieMetrics::default() };
//! let nearest = mood.centroids().await.k_nearest_centroids_from_mood(&query, 3)?;
//! let pick = mood.centroid_movies().await.random_movie_from_centroid(nearest[0])?;
//! println!("try movie {pick}");
//! # Ok(()) }
//! ```

mod cache;
mod error;
mod index;
mod init;

pub use cache::{CentroidCache, RankedCentroid, WEIGHTS};
pub use error::{MoodError, Result};
pub use index::CentroidMovieIndex;
pub use init::MoodInitializer;
