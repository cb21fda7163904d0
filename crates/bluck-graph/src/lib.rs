//! # bluck-graph
//!
//! In-memory movie relationship graph built from the paginated catalog.
//!
//! The graph indexes every ingested movie four ways and answers co-star
//! queries without any further I/O:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                       MovieGraph                            │
//! │       (built once, shared as Arc, read without locks)       │
//! └────────────────────┬────────────────────────────────────────┘
//!                      │
//!      ┌───────────────┼────────────────┬─────────────────┐
//!      ▼               ▼                ▼                 ▼
//! ┌──────────┐   ┌────────────┐   ┌─────────────┐   ┌───────────┐
//! │ director │   │   actor    │   │    actor    │   │   title   │
//! │ → movies │   │  → movies  │   │ → co-stars  │   │  → movie  │
//! └──────────┘   └────────────┘   └─────────────┘   └───────────┘
//! ```
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use bluck_catalog::{JsonCatalog, PageKeys};
//! use bluck_graph::{GraphInitializer, KevinBaconQuery, SearchLimits, kevin_bacon};
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let init = GraphInitializer::new(Arc::new(JsonCatalog::new("catalog.json")), PageKeys::default());
//! let loaded = init.get().await;
//! if let Some(err) = loaded.error() {
//!     eprintln!("graph is partial: {err}");
//! }
//!
//! let query = KevinBaconQuery::star("Kevin Bacon").with_depth(2);
//! let report = kevin_bacon(loaded.graph().as_ref(), &query, SearchLimits::default())?;
//! println!("{} co-stars found", report.stars.len());
//! # Ok(()) }
//! ```
//!
//! ## Thread Safety
//!
//! Building needs `&mut MovieGraph`; once built the graph is wrapped in an
//! `Arc` and never mutated again, so any number of readers may query it
//! concurrently. [`GraphInitializer`] coalesces racing first-time callers into
//! a single build.

mod bacon;
mod error;
mod graph;
mod init;
mod queries;

pub use bacon::{
    KevinBaconQuery, KevinBaconReport, MAX_SEARCH_DEPTH, SearchLimits, kevin_bacon,
    single_seed_search,
};
pub use error::{BuildFailure, GraphError, PageFailure, Result};
pub use graph::{Discovered, MovieGraph};
pub use init::{CatalogPopulator, GraphInitializer, GraphPopulator, LoadedGraph};
pub use queries::GraphQueries;

#[cfg(test)]
mod tests;
