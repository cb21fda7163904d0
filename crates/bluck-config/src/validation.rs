use bluck_graph::MAX_SEARCH_DEPTH;

use crate::config::BluckConfig;
use crate::error::{ConfigError, Result};

impl BluckConfig {
    /// Validate configuration for logical consistency.
    pub fn validate(&self) -> Result<()> {
        if self.catalog.page_keys().is_empty() {
            return Err(ConfigError::invalid(
                "catalog.pages",
                format!("{:?}", self.catalog.pages),
                "At least one page key is required",
            ));
        }

        if self.search.max_depth == 0 {
            return Err(ConfigError::invalid(
                "search.max_depth",
                0,
                "A search needs at least one round",
            ));
        }

        if self.search.max_depth > MAX_SEARCH_DEPTH {
            return Err(ConfigError::invalid(
                "search.max_depth",
                self.search.max_depth,
                format!("Must not exceed {MAX_SEARCH_DEPTH}"),
            ));
        }

        if self.search.default_depth > self.search.max_depth {
            return Err(ConfigError::invalid(
                "search.default_depth",
                self.search.default_depth,
                format!("Must not exceed search.max_depth ({})", self.search.max_depth),
            ));
        }

        if self.mood.default_k == 0 {
            return Err(ConfigError::invalid(
                "mood.default_k",
                0,
                "Must be greater than 0",
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{CatalogConfig, MoodConfig, SearchConfig};

    #[test]
    fn defaults_are_valid() {
        assert!(BluckConfig::default().validate().is_ok());
    }

    #[test]
    fn rejects_inconsistent_values() {
        let blank_pages = BluckConfig {
            catalog: CatalogConfig {
                pages: "  ".to_string(),
            },
            ..BluckConfig::default()
        };
        assert!(blank_pages.validate().is_err());

        let zero_depth = BluckConfig {
            search: SearchConfig {
                default_depth: 0,
                max_depth: 0,
            },
            ..BluckConfig::default()
        };
        let err = zero_depth.validate().unwrap_err().to_string();
        assert!(err.contains("search.max_depth"), "{err}");

        let beyond_cap = BluckConfig {
            search: SearchConfig {
                default_depth: 1,
                max_depth: MAX_SEARCH_DEPTH + 1,
            },
            ..BluckConfig::default()
        };
        let err = beyond_cap.validate().unwrap_err().to_string();
        assert!(err.contains("search.max_depth"), "{err}");
        assert!(err.contains("Must not exceed 10"), "{err}");

        let default_above_max = BluckConfig {
            search: SearchConfig {
                default_depth: 4,
                max_depth: 3,
            },
            ..BluckConfig::default()
        };
        let err = default_above_max.validate().unwrap_err().to_string();
        assert!(err.contains("search.default_depth"), "{err}");

        let zero_k = BluckConfig {
            mood: MoodConfig { default_k: 0 },
            ..BluckConfig::default()
        };
        assert!(zero_k.validate().is_err());
    }
}
