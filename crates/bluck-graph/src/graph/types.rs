//! Core MovieGraph structure.

use std::sync::Arc;

use bluck_catalog::Movie;
use rustc_hash::{FxHashMap as HashMap, FxHashSet as HashSet};

/// Co-star graph over the catalog.
///
/// Movies are held once behind `Arc` and shared by every index that mentions
/// them. Per-key movie lists keep catalog order; co-star sets are unordered.
#[derive(Debug, Clone, Default)]
pub struct MovieGraph {
    /// Director -> movies they directed
    pub(crate) directed_movies: HashMap<String, Vec<Arc<Movie>>>,
    /// Actor -> movies they appear in
    pub(crate) starred_in: HashMap<String, Vec<Arc<Movie>>>,
    /// Actor -> everyone they shared a cast with
    pub(crate) starred_with: HashMap<String, HashSet<String>>,
    /// Title -> movie, last write wins
    pub(crate) title_to_movie: HashMap<String, Arc<Movie>>,
    pub(crate) num_directors: usize,
    /// Cast appearances, not distinct actors
    pub(crate) num_stars: usize,
    pub(crate) num_movies: usize,
}
