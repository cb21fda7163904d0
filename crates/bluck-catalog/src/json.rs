//! File-backed sources.
//!
//! A catalog file is a JSON object mapping page keys to movie arrays; a
//! centroid file is a JSON array of centroid records. A catalog file is parsed
//! on the first successful fetch and pages are served from memory after that.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use rustc_hash::FxHashMap as HashMap;
use tokio::sync::OnceCell;
use tracing::debug;

use crate::movie::{CentroidRecord, Movie};
use crate::source::{CatalogSource, CentroidSource, SourceError, SourceResult};

/// Catalog pages read from a JSON file.
#[derive(Debug, Clone)]
pub struct JsonCatalog {
    path: PathBuf,
    pages: OnceCell<HashMap<String, Vec<Movie>>>,
}

impl JsonCatalog {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            pages: OnceCell::new(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The parsed file. A failed read is not cached, so the next fetch retries.
    async fn pages(&self) -> SourceResult<&HashMap<String, Vec<Movie>>> {
        self.pages
            .get_or_try_init(|| async {
                let bytes = tokio::fs::read(&self.path).await?;
                let pages: HashMap<String, Vec<Movie>> = serde_json::from_slice(&bytes)?;
                debug!(path = %self.path.display(), pages = pages.len(), "parsed catalog file");
                Ok(pages)
            })
            .await
    }
}

#[async_trait]
impl CatalogSource for JsonCatalog {
    async fn fetch_page(&self, page: &str) -> SourceResult<Vec<Movie>> {
        let movies = self
            .pages()
            .await?
            .get(page)
            .cloned()
            .ok_or_else(|| SourceError::PageUnavailable {
                page: page.to_string(),
                reason: format!("page missing from {}", self.path.display()),
            })?;

        debug!(page, movies = movies.len(), "fetched catalog page");
        Ok(movies)
    }
}

/// Centroid table read from a JSON file.
#[derive(Debug, Clone)]
pub struct JsonCentroids {
    path: PathBuf,
}

impl JsonCentroids {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }
}

#[async_trait]
impl CentroidSource for JsonCentroids {
    async fn scan_all_centroids(&self) -> SourceResult<Vec<CentroidRecord>> {
        let bytes = tokio::fs::read(&self.path)
            .await
            .map_err(|e| SourceError::ScanFailed(format!("{}: {e}", self.path.display())))?;
        let records: Vec<CentroidRecord> = serde_json::from_slice(&bytes)?;
        debug!(centroids = records.len(), "scanned centroid table");
        Ok(records)
    }
}
