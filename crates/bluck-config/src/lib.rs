//! Configuration for the BluckBoster services.
//!
//! Values are layered with figment: built-in defaults, then `bluck.toml`, then
//! `BLUCK_`-prefixed environment variables using `__` between sections.
//!
//! ```toml
//! [catalog]
//! pages = "ABC#"
//!
//! [search]
//! default_depth = 2
//! max_depth = 6
//!
//! [mood]
//! default_k = 5
//! ```

pub mod config;
pub mod error;
mod loading;
mod validation;

pub use config::{
    BluckConfig, CONFIG_FILE, CatalogConfig, ENV_PREFIX, MoodConfig, SearchConfig, Settings,
};
pub use error::{ConfigError, Result};
