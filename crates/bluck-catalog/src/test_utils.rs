//! In-memory sources for tests.
//!
//! Only compiled for tests and behind the `test-utils` feature, so downstream
//! crates can drive their caches deterministically without a store.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use rustc_hash::{FxHashMap as HashMap, FxHashSet as HashSet};

use crate::movie::{CentroidRecord, Movie};
use crate::source::{CatalogSource, CentroidSource, SourceError, SourceResult};

/// Catalog served from memory.
///
/// Pages that were never added come back empty; pages marked failing return
/// [`SourceError::PageUnavailable`]. Every call is counted so tests can assert
/// how many times a build actually ran.
#[derive(Debug, Default)]
pub struct StaticCatalog {
    pages: HashMap<String, Vec<Movie>>,
    failing: HashSet<String>,
    delay: Option<Duration>,
    fetches: AtomicUsize,
}

impl StaticCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_page(mut self, page: impl Into<String>, movies: Vec<Movie>) -> Self {
        self.pages.entry(page.into()).or_default().extend(movies);
        self
    }

    pub fn with_failing_page(mut self, page: impl Into<String>) -> Self {
        self.failing.insert(page.into());
        self
    }

    /// Sleep before answering each fetch, to widen initialization races.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    /// Total `fetch_page` calls so far.
    pub fn fetch_count(&self) -> usize {
        self.fetches.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl CatalogSource for StaticCatalog {
    async fn fetch_page(&self, page: &str) -> SourceResult<Vec<Movie>> {
        self.fetches.fetch_add(1, Ordering::SeqCst);
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        if self.failing.contains(page) {
            return Err(SourceError::PageUnavailable {
                page: page.to_string(),
                reason: "injected failure".to_string(),
            });
        }
        Ok(self.pages.get(page).cloned().unwrap_or_default())
    }
}

/// Centroid table served from memory, or a scan that always fails.
#[derive(Debug, Default)]
pub struct StaticCentroids {
    records: Vec<CentroidRecord>,
    fail: bool,
    scans: AtomicUsize,
}

impl StaticCentroids {
    pub fn new(records: Vec<CentroidRecord>) -> Self {
        Self {
            records,
            ..Self::default()
        }
    }

    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    pub fn scan_count(&self) -> usize {
        self.scans.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl CentroidSource for StaticCentroids {
    async fn scan_all_centroids(&self) -> SourceResult<Vec<CentroidRecord>> {
        self.scans.fetch_add(1, Ordering::SeqCst);
        if self.fail {
            return Err(SourceError::ScanFailed("injected failure".to_string()));
        }
        Ok(self.records.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn static_catalog_counts_and_fails() {
        let catalog = StaticCatalog::new()
            .with_page("A", vec![Movie::new("1", "Apollo 13", "Ron Howard", ["Tom Hanks"])])
            .with_failing_page("B");

        assert_eq!(catalog.fetch_page("A").await.unwrap().len(), 1);
        assert!(catalog.fetch_page("B").await.is_err());
        assert!(catalog.fetch_page("C").await.unwrap().is_empty());
        assert_eq!(catalog.fetch_count(), 3);
    }
}
