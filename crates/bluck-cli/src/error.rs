//! Error handling for the bluck CLI.
//!
//! Every library error converts into [`CliError`] through `#[from]`, so
//! commands propagate with `?`. `main` renders the final error through
//! [`cli_error_to_miette`].

mod report;

use std::path::PathBuf;

use thiserror::Error;

pub use report::cli_error_to_miette;

pub type Result<T> = std::result::Result<T, CliError>;

/// Top-level CLI error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration file missing, malformed or inconsistent
    #[error("Configuration error: {0}")]
    Config(#[from] bluck_config::ConfigError),

    /// Graph lookup or search failure
    #[error(transparent)]
    Graph(#[from] bluck_graph::GraphError),

    /// Centroid lookup failure
    #[error(transparent)]
    Mood(#[from] bluck_mood::MoodError),

    /// The graph was only partially built and `--strict` was given
    #[error("Catalog incomplete: {0}")]
    Degraded(String),

    /// Input file does not exist
    #[error("File not found: {}", .0.display())]
    FileNotFound(PathBuf),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
