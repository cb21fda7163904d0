//! Command implementations for the bluck CLI.
//!
//! - [`bacon`] - Kevin Bacon co-star search
//! - [`lookup`] - Director, star and title lookups
//! - [`mood`] - Nearest centroids to a mood vector
//! - [`stats`] - Totals for the loaded data
//! - [`config`] - The effective configuration
//!
//! Each command returns its [`Output`] rather than printing, so the caller
//! decides where it goes.

pub mod bacon;
pub mod config;
pub mod lookup;
pub mod mood;
pub mod stats;

use serde::Serialize;

use crate::cli::Command;
use crate::context::ServiceContext;
use crate::error::Result;

/// What a command produced.
#[derive(Debug, Clone, PartialEq)]
pub enum Output {
    Json(serde_json::Value),
    Text(String),
}

impl Output {
    pub(crate) fn json<T: Serialize>(value: &T) -> Result<Self> {
        Ok(Output::Json(serde_json::to_value(value)?))
    }

    /// Pretty-printed JSON, or the text as is.
    pub fn render(&self) -> Result<String> {
        match self {
            Output::Json(value) => Ok(serde_json::to_string_pretty(value)?),
            Output::Text(text) => Ok(text.clone()),
        }
    }
}

/// Dispatch one parsed command.
pub async fn run(command: Command, ctx: &ServiceContext, strict: bool) -> Result<Output> {
    match command {
        Command::Bacon(args) => bacon::execute(&args, ctx, strict).await,
        Command::Lookup(args) => lookup::execute(&args, ctx, strict).await,
        Command::Mood(args) => mood::execute(&args, ctx).await,
        Command::Stats => stats::execute(ctx).await,
        Command::Config => config::execute(ctx.config()),
    }
}
