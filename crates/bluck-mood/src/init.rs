//! Lazily loaded, shared mood caches.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use bluck_catalog::{CatalogSource, CentroidSource, PageKeys};
use tokio::sync::OnceCell;
use tracing::{info, warn};

use crate::cache::CentroidCache;
use crate::index::CentroidMovieIndex;

/// Owns the centroid cache and the centroid index, each built on first use.
///
/// Racing first callers share one load. A failed centroid scan leaves an
/// empty cache in place instead of an error, so mood features degrade while
/// the rest of the service keeps running.
pub struct MoodInitializer {
    centroid_source: Arc<dyn CentroidSource>,
    catalog: Arc<dyn CatalogSource>,
    pages: PageKeys,
    centroids: OnceCell<Arc<CentroidCache>>,
    index: OnceCell<Arc<CentroidMovieIndex>>,
    loads: AtomicUsize,
}

impl std::fmt::Debug for MoodInitializer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MoodInitializer")
            .field("centroids_loaded", &self.centroids.initialized())
            .field("index_loaded", &self.index.initialized())
            .field("loads", &self.load_count())
            .finish()
    }
}

impl MoodInitializer {
    pub fn new(
        centroid_source: Arc<dyn CentroidSource>,
        catalog: Arc<dyn CatalogSource>,
        pages: PageKeys,
    ) -> Self {
        Self {
            centroid_source,
            catalog,
            pages,
            centroids: OnceCell::new(),
            index: OnceCell::new(),
            loads: AtomicUsize::new(0),
        }
    }

    /// The centroid cache, scanning the centroid table on first use.
    pub async fn centroids(&self) -> &Arc<CentroidCache> {
        self.centroids
            .get_or_init(|| async {
                self.loads.fetch_add(1, Ordering::SeqCst);
                let cache = match self.centroid_source.scan_all_centroids().await {
                    Ok(records) => CentroidCache::from_records(records),
                    Err(err) => {
                        warn!(error = %err, "centroid scan failed, mood search disabled");
                        CentroidCache::empty()
                    }
                };
                info!(centroids = cache.len(), "centroid cache ready");
                Arc::new(cache)
            })
            .await
    }

    /// The centroid → movies index, walking the catalog on first use.
    pub async fn centroid_movies(&self) -> &Arc<CentroidMovieIndex> {
        self.index
            .get_or_init(|| async {
                self.loads.fetch_add(1, Ordering::SeqCst);
                Arc::new(CentroidMovieIndex::load(self.catalog.as_ref(), &self.pages).await)
            })
            .await
    }

    /// Loads started across both caches.
    pub fn load_count(&self) -> usize {
        self.loads.load(Ordering::SeqCst)
    }

    /// Drop both caches so the next access reloads them.
    pub fn reset(&mut self) {
        self.centroids.take();
        self.index.take();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bluck_catalog::test_utils::{StaticCatalog, StaticCentroids};
    use bluck_catalog::{CentroidRecord, Movie, MovieMetrics};

    fn record(id: usize, acting: f64) -> CentroidRecord {
        CentroidRecord::new(
            id,
            MovieMetrics {
                acting,
                ..MovieMetrics::default()
            },
        )
    }

    fn catalog() -> Arc<StaticCatalog> {
        Arc::new(StaticCatalog::new().with_page(
            "A",
            vec![Movie::new("1", "Airplane!", "Jim Abrahams", ["Leslie Nielsen"]).with_centroid(1)],
        ))
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn concurrent_access_scans_once() {
        let centroids = Arc::new(StaticCentroids::new(vec![record(0, 1.0), record(1, 2.0)]));
        let init = Arc::new(MoodInitializer::new(
            centroids.clone(),
            catalog(),
            PageKeys::from_chars("A"),
        ));

        let handles: Vec<_> = (0..8)
            .map(|_| {
                let init = Arc::clone(&init);
                tokio::spawn(async move { Arc::clone(init.centroids().await) })
            })
            .collect();

        let mut caches = Vec::new();
        for handle in handles {
            caches.push(handle.await.unwrap());
        }

        assert_eq!(centroids.scan_count(), 1);
        assert!(caches.iter().all(|c| Arc::ptr_eq(c, &caches[0])));
        assert_eq!(caches[0].len(), 2);
    }

    #[tokio::test]
    async fn failed_scan_yields_empty_cache() {
        let centroids = Arc::new(StaticCentroids::failing());
        let init = MoodInitializer::new(centroids.clone(), catalog(), PageKeys::from_chars("A"));

        let cache = init.centroids().await;
        assert!(cache.is_empty());
        assert!(cache.get_metrics_by_centroid(0).is_err());

        // The degraded result is cached like any other
        init.centroids().await;
        assert_eq!(centroids.scan_count(), 1);
    }

    #[tokio::test]
    async fn index_loads_independently() {
        let mut init = MoodInitializer::new(
            Arc::new(StaticCentroids::default()),
            catalog(),
            PageKeys::from_chars("A"),
        );

        let index = init.centroid_movies().await;
        assert_eq!(index.movie_ids_for_centroid(1).unwrap(), ["1"]);
        assert_eq!(init.load_count(), 1);

        init.reset();
        init.centroid_movies().await;
        init.centroids().await;
        assert_eq!(init.load_count(), 3);
    }
}
