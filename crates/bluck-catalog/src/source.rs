//! Data-source abstraction for the caches.
//!
//! The caches are the only consumers of these traits and call them during
//! their one-time build. Implementations talk to the backing store (or a file,
//! or memory in tests) and must be shareable across tasks.

use std::sync::Arc;

use async_trait::async_trait;

use crate::movie::{CentroidRecord, Movie};

/// Result type for source operations
pub type SourceResult<T> = Result<T, SourceError>;

/// Errors raised while reading from the backing store
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    /// A single catalog page could not be fetched
    #[error("failed querying movies by page {page}: {reason}")]
    PageUnavailable { page: String, reason: String },

    /// The centroid table scan failed
    #[error("centroid scan failed: {0}")]
    ScanFailed(String),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed record data
    #[error("malformed catalog data: {0}")]
    Json(#[from] serde_json::Error),
}

/// Paginated movie listing.
///
/// `fetch_page` is called once per page key during a graph build. An error is
/// scoped to that page; the caller keeps going with the remaining pages.
#[async_trait]
pub trait CatalogSource: Send + Sync + std::fmt::Debug {
    /// Fetch every movie stored under `page`.
    async fn fetch_page(&self, page: &str) -> SourceResult<Vec<Movie>>;
}

/// Full scan of the centroid table.
#[async_trait]
pub trait CentroidSource: Send + Sync + std::fmt::Debug {
    async fn scan_all_centroids(&self) -> SourceResult<Vec<CentroidRecord>>;
}

#[async_trait]
impl<T: CatalogSource + ?Sized> CatalogSource for Arc<T> {
    async fn fetch_page(&self, page: &str) -> SourceResult<Vec<Movie>> {
        (**self).fetch_page(page).await
    }
}

#[async_trait]
impl<T: CentroidSource + ?Sized> CentroidSource for Arc<T> {
    async fn scan_all_centroids(&self) -> SourceResult<Vec<CentroidRecord>> {
        (**self).scan_all_centroids().await
    }
}
