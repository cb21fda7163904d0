//! # bluck-catalog
//!
//! Catalog records and the data-source abstraction shared by the BluckBoster
//! graph and mood caches.
//!
//! The backing store is paginated: every movie lives under exactly one page
//! key and the set of page keys is fixed and enumerable. Consumers never talk
//! to the store directly; they go through [`CatalogSource`] and
//! [`CentroidSource`], which keeps the caches testable against in-memory
//! sources.
//!
//! ```text
//!   ┌──────────────────┐      fetch_page(key)      ┌──────────────┐
//!   │  CatalogSource   │ ─────────────────────────▶│  MovieGraph  │
//!   └──────────────────┘                           └──────────────┘
//!   ┌──────────────────┐    scan_all_centroids()   ┌──────────────┐
//!   │  CentroidSource  │ ─────────────────────────▶│ CentroidCache│
//!   └──────────────────┘                           └──────────────┘
//! ```

pub mod json;
pub mod movie;
pub mod pages;
pub mod source;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use json::{JsonCatalog, JsonCentroids};
pub use movie::{CentroidRecord, METRIC_DIMENSIONS, Movie, MovieMetrics};
pub use pages::{DEFAULT_PAGES, PageKeys};
pub use source::{CatalogSource, CentroidSource, SourceError, SourceResult};
