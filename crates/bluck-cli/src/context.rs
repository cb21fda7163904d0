//! Application context shared by every command.

use std::path::Path;
use std::sync::Arc;

use bluck_catalog::{CatalogSource, CentroidSource, JsonCatalog, JsonCentroids};
use bluck_config::BluckConfig;
use bluck_graph::{GraphInitializer, LoadedGraph, SearchLimits};
use bluck_mood::{CentroidCache, CentroidMovieIndex, MoodInitializer};
use tracing::warn;

use crate::error::{CliError, Result};

/// Owns the lazily built graph and mood caches for one process.
///
/// Nothing is loaded until a command asks for it, and each structure is
/// loaded at most once however many callers ask concurrently.
#[derive(Debug)]
pub struct ServiceContext {
    config: BluckConfig,
    graph: GraphInitializer,
    mood: MoodInitializer,
}

impl ServiceContext {
    pub fn new(
        config: BluckConfig,
        catalog: Arc<dyn CatalogSource>,
        centroids: Arc<dyn CentroidSource>,
    ) -> Self {
        let pages = config.catalog.page_keys();
        Self {
            graph: GraphInitializer::new(Arc::clone(&catalog), pages.clone()),
            mood: MoodInitializer::new(centroids, catalog, pages),
            config,
        }
    }

    /// Serve from JSON files. The catalog file must exist; a missing centroid
    /// file only disables mood search.
    pub fn from_files(config: BluckConfig, catalog: &Path, centroids: &Path) -> Result<Self> {
        if !catalog.exists() {
            return Err(CliError::FileNotFound(catalog.to_path_buf()));
        }
        Ok(Self::new(
            config,
            Arc::new(JsonCatalog::new(catalog)),
            Arc::new(JsonCentroids::new(centroids)),
        ))
    }

    pub fn config(&self) -> &BluckConfig {
        &self.config
    }

    pub fn search_limits(&self) -> SearchLimits {
        SearchLimits {
            default_depth: self.config.search.default_depth,
            max_depth: self.config.search.max_depth,
        }
    }

    pub async fn graph(&self) -> &LoadedGraph {
        self.graph.get().await
    }

    /// The graph, refusing a partial build when `strict` is set.
    pub async fn graph_checked(&self, strict: bool) -> Result<&LoadedGraph> {
        let loaded = self.graph().await;
        if let Some(err) = loaded.error() {
            if strict {
                return Err(CliError::Degraded(err.to_string()));
            }
            warn!(error = %err, "answering from a partial graph");
        }
        Ok(loaded)
    }

    pub async fn centroids(&self) -> &Arc<CentroidCache> {
        self.mood.centroids().await
    }

    pub async fn centroid_movies(&self) -> &Arc<CentroidMovieIndex> {
        self.mood.centroid_movies().await
    }
}
