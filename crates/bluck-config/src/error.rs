//! Error types for configuration loading and validation.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, ConfigError>;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {field}: {value} ({hint})")]
    InvalidValue {
        field: String,
        value: String,
        hint: String,
    },

    #[error("failed to render configuration: {0}")]
    Render(#[from] toml::ser::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl ConfigError {
    pub(crate) fn invalid(
        field: impl Into<String>,
        value: impl ToString,
        hint: impl Into<String>,
    ) -> Self {
        ConfigError::InvalidValue {
            field: field.into(),
            value: value.to_string(),
            hint: hint.into(),
        }
    }
}
