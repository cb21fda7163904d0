//! Error types for centroid lookups.

/// Result type alias for mood operations.
pub type Result<T> = std::result::Result<T, MoodError>;

#[derive(Debug, thiserror::Error)]
pub enum MoodError {
    /// Id outside `[0, count)`. An empty cache reports every id this way.
    #[error("centroid {id} out of range (cache holds {count} centroids)")]
    CentroidOutOfRange { id: usize, count: usize },

    /// Id inside the range but absent from a sparse table.
    #[error("centroid {0} not found")]
    CentroidNotFound(usize),

    #[error("k must be greater than 0, got {0}")]
    InvalidK(i64),

    #[error("cannot find movies for centroid id {0}")]
    NoMoviesForCentroid(usize),

    /// The OS random source failed.
    #[error("random source unavailable: {0}")]
    Random(String),
}

impl From<getrandom::Error> for MoodError {
    fn from(err: getrandom::Error) -> Self {
        MoodError::Random(err.to_string())
    }
}
