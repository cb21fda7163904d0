//! Stats command implementation.

use serde::Serialize;

use bluck_graph::GraphError;

use crate::commands::Output;
use crate::context::ServiceContext;
use crate::error::Result;

#[derive(Debug, Serialize)]
struct Stats {
    total_movies: usize,
    distinct_titles: usize,
    total_stars: usize,
    distinct_stars: usize,
    total_directors: usize,
    centroids: usize,
    centroids_with_movies: usize,
    degraded: bool,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    failed_pages: Vec<String>,
}

/// Never strict: reporting what failed is the point.
pub async fn execute(ctx: &ServiceContext) -> Result<Output> {
    let loaded = ctx.graph().await;
    let graph = loaded.graph();

    let failed_pages = match loaded.error() {
        Some(GraphError::PartialBuild(failure)) => {
            failure.failed_pages().map(str::to_string).collect()
        }
        _ => Vec::new(),
    };

    Output::json(&Stats {
        total_movies: graph.total_movies(),
        distinct_titles: graph.distinct_titles(),
        total_stars: graph.total_stars(),
        distinct_stars: graph.distinct_stars(),
        total_directors: graph.total_directors(),
        centroids: ctx.centroids().await.len(),
        centroids_with_movies: ctx.centroid_movies().await.len(),
        degraded: loaded.is_degraded(),
        failed_pages,
    })
}
