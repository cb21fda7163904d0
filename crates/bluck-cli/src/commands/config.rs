//! Config command implementation.

use bluck_config::BluckConfig;

use crate::commands::Output;
use crate::error::Result;

/// Render the effective configuration as TOML. Needs no catalog.
pub fn execute(config: &BluckConfig) -> Result<Output> {
    Ok(Output::Text(config.to_toml()?))
}
