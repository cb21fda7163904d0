use std::path::Path;

use figment::{
    Figment,
    providers::{Env, Format as _, Serialized, Toml},
};
use tracing::debug;

use crate::config::{BluckConfig, CONFIG_FILE, ENV_PREFIX};
use crate::error::{ConfigError, Result};

impl BluckConfig {
    /// Load configuration from every source and validate it.
    /// Priority: environment variables > config file > defaults
    ///
    /// An explicit `config_path` must exist; otherwise `bluck.toml` in the
    /// working directory is used when present.
    pub fn load(config_path: Option<&Path>) -> Result<Self> {
        let mut figment = Figment::new().merge(Serialized::defaults(Self::default()));

        let config_file = match config_path {
            Some(path) => {
                std::fs::metadata(path)?;
                Some(path.to_path_buf())
            }
            None => {
                let default_path = Path::new(CONFIG_FILE);
                default_path.exists().then(|| default_path.to_path_buf())
            }
        };

        if let Some(path) = config_file {
            debug!(path = %path.display(), "loading config file");
            figment = figment.merge(Toml::file(path));
        }

        // BLUCK_SEARCH__MAX_DEPTH -> search.max_depth
        figment = figment.merge(Env::prefixed(ENV_PREFIX).split("__"));

        let config: Self = figment.extract().map_err(|e| {
            ConfigError::invalid(
                "configuration",
                e,
                "Check bluck.toml syntax and field types",
            )
        })?;
        config.validate()?;
        Ok(config)
    }

    /// The effective configuration as TOML.
    pub fn to_toml(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }
}
