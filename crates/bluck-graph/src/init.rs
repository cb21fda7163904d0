//! One-time, coalesced construction of the shared graph.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use bluck_catalog::{CatalogSource, PageKeys};
use tokio::sync::OnceCell;
use tracing::info;

use crate::error::{GraphError, Result};
use crate::graph::MovieGraph;

/// Fills an empty graph.
///
/// The default populator walks the catalog; tests substitute a closure to
/// build a deterministic graph through the same initializer.
#[async_trait]
pub trait GraphPopulator: Send + Sync {
    /// On error the graph keeps whatever was ingested before the failure.
    async fn populate(&self, graph: &mut MovieGraph) -> Result<()>;
}

#[async_trait]
impl<F> GraphPopulator for F
where
    F: Fn(&mut MovieGraph) -> Result<()> + Send + Sync,
{
    async fn populate(&self, graph: &mut MovieGraph) -> Result<()> {
        self(graph)
    }
}

/// Populates from every page of a catalog source.
#[derive(Debug, Clone)]
pub struct CatalogPopulator {
    source: Arc<dyn CatalogSource>,
    pages: PageKeys,
}

impl CatalogPopulator {
    pub fn new(source: Arc<dyn CatalogSource>, pages: PageKeys) -> Self {
        Self { source, pages }
    }
}

#[async_trait]
impl GraphPopulator for CatalogPopulator {
    async fn populate(&self, graph: &mut MovieGraph) -> Result<()> {
        graph
            .populate_from_catalog(self.source.as_ref(), &self.pages)
            .await
            .map_err(GraphError::from)
    }
}

/// Outcome of the one-time build: the graph plus the error, if any, that
/// left it partial. Every caller sees the same pair.
#[derive(Debug, Clone)]
pub struct LoadedGraph {
    graph: Arc<MovieGraph>,
    error: Option<Arc<GraphError>>,
}

impl LoadedGraph {
    pub fn graph(&self) -> &Arc<MovieGraph> {
        &self.graph
    }

    pub fn error(&self) -> Option<&GraphError> {
        self.error.as_deref()
    }

    /// True when the build lost data.
    pub fn is_degraded(&self) -> bool {
        self.error.is_some()
    }

    /// Treat any build error as fatal.
    pub fn into_result(self) -> std::result::Result<Arc<MovieGraph>, Arc<GraphError>> {
        match self.error {
            Some(err) => Err(err),
            None => Ok(self.graph),
        }
    }
}

/// Lazily builds the graph exactly once.
///
/// Concurrent first callers of [`GraphInitializer::get`] all wait on a single
/// build; later callers get the cached result immediately.
pub struct GraphInitializer {
    populator: Box<dyn GraphPopulator>,
    cell: OnceCell<LoadedGraph>,
    builds: AtomicUsize,
}

impl std::fmt::Debug for GraphInitializer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GraphInitializer")
            .field("built", &self.cell.initialized())
            .field("builds", &self.build_count())
            .finish()
    }
}

impl GraphInitializer {
    /// Build from every page of `source`.
    pub fn new(source: Arc<dyn CatalogSource>, pages: PageKeys) -> Self {
        Self::with_populator(CatalogPopulator::new(source, pages))
    }

    /// Build with a custom populate step.
    pub fn with_populator(populator: impl GraphPopulator + 'static) -> Self {
        Self {
            populator: Box::new(populator),
            cell: OnceCell::new(),
            builds: AtomicUsize::new(0),
        }
    }

    /// The shared graph, building it on first use.
    pub async fn get(&self) -> &LoadedGraph {
        self.cell
            .get_or_init(|| async {
                self.builds.fetch_add(1, Ordering::SeqCst);
                let mut graph = MovieGraph::new();
                let error = self.populator.populate(&mut graph).await.err();
                info!(
                    movies = graph.total_movies(),
                    degraded = error.is_some(),
                    "movie graph ready"
                );
                LoadedGraph {
                    graph: Arc::new(graph),
                    error: error.map(Arc::new),
                }
            })
            .await
    }

    /// The graph if a build already finished.
    pub fn get_if_built(&self) -> Option<&LoadedGraph> {
        self.cell.get()
    }

    /// How many builds have started. Stays at 1 after the first access.
    pub fn build_count(&self) -> usize {
        self.builds.load(Ordering::SeqCst)
    }

    /// Drop the cached graph so the next `get` rebuilds it.
    pub fn reset(&mut self) {
        self.cell.take();
    }
}
