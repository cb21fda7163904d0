//! Configuration types and their defaults.

use bluck_catalog::{DEFAULT_PAGES, PageKeys};
use bluck_graph::MAX_SEARCH_DEPTH;
use serde::{Deserialize, Serialize};

/// Default config file looked up in the working directory.
pub const CONFIG_FILE: &str = "bluck.toml";

/// Prefix of environment overrides, e.g. `BLUCK_SEARCH__MAX_DEPTH=4`.
pub const ENV_PREFIX: &str = "BLUCK_";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BluckConfig {
    pub catalog: CatalogConfig,
    pub search: SearchConfig,
    pub mood: MoodConfig,
    pub settings: Settings,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    /// Every character is one page key.
    pub pages: String,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            pages: DEFAULT_PAGES.to_string(),
        }
    }
}

impl CatalogConfig {
    pub fn page_keys(&self) -> PageKeys {
        PageKeys::from_chars(&self.pages)
    }
}

/// Depth bounds for co-star searches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    pub default_depth: usize,
    pub max_depth: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            default_depth: 1,
            max_depth: MAX_SEARCH_DEPTH,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MoodConfig {
    /// Centroids returned when a mood query does not ask for a count.
    pub default_k: usize,
}

impl Default for MoodConfig {
    fn default() -> Self {
        Self { default_k: 3 }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_level: Option<String>,
}
