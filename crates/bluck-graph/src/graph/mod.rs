//! In-memory MovieGraph implementation.
//!
//! The struct lives in `types`; construction, queries and traversal add impl
//! blocks from their own files.

mod construction;
mod queries;
mod traversal;
mod types;

pub use traversal::Discovered;
pub use types::MovieGraph;
