//! Command-line interface definition for bluck.
//!
//! # Command Structure
//!
//! - `bluck bacon` - Co-star search from a star, a movie or a director
//! - `bluck lookup` - Single graph lookup by director, star or title
//! - `bluck mood` - Nearest centroids to a mood vector
//! - `bluck stats` - Graph and centroid totals
//! - `bluck config` - Print the effective configuration

mod commands;
mod tests;

use std::path::PathBuf;

use clap::Parser;

pub use commands::{BaconArgs, Command, LookupArgs, MoodArgs};

/// bluck - movie co-star graph and mood search
#[derive(Parser, Debug)]
#[command(
    name = "bluck",
    version,
    about = "Movie co-star graph and mood search",
    long_about = "bluck loads a paginated movie catalog into an in-memory co-star graph\n\
                  and answers Kevin Bacon style searches, graph lookups and mood queries\n\
                  against clustered centroids. Results are printed as JSON."
)]
pub struct Cli {
    /// Enable verbose logging (debug level)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress all output except errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Configuration file (defaults to ./bluck.toml when present)
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Catalog file: a JSON object of page key to movie list
    #[arg(long, global = true, value_name = "FILE", default_value = "catalog.json")]
    pub catalog: PathBuf,

    /// Centroid file: a JSON array of centroid records
    #[arg(long, global = true, value_name = "FILE", default_value = "centroids.json")]
    pub centroids: PathBuf,

    /// Fail instead of answering from a partially built graph
    #[arg(long, global = true)]
    pub strict: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}
