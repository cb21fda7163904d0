//! bluck CLI - co-star search and mood lookups over JSON catalogs.
//!
//! The binary is a thin transport over [`context::ServiceContext`], which owns
//! the lazily built movie graph and mood caches.
//!
//! # Architecture
//!
//! - [`cli`] - Argument parsing with clap
//! - [`commands`] - One module per subcommand, each returning an [`commands::Output`]
//! - [`context`] - The application context shared by commands
//! - [`error`] - `CliError` and its miette rendering
//! - [`logger`] - tracing subscriber setup
//!
//! # Example
//!
//! ```rust,no_run
//! use std::path::Path;
//! use bluck_cli::{commands, context::ServiceContext, error::Result};
//! use bluck_cli::cli::{BaconArgs, Command};
//! use bluck_config::BluckConfig;
//!
//! # async fn run() -> Result<()> {
//! let ctx = ServiceContext::from_files(
//!     BluckConfig::default(),
//!     Path::new("catalog.json"),
//!     Path::new("centroids.json"),
//! )?;
//! let args = BaconArgs { star: Some("Kevin Bacon".into()), ..BaconArgs::default() };
//! let output = commands::run(Command::Bacon(args), &ctx, false).await?;
//! println!("{}", output.render()?);
//! # Ok(()) }
//! ```

pub mod cli;
pub mod commands;
pub mod context;
pub mod error;
pub mod logger;

pub use error::{CliError, Result};
