//! Scroll configuration errors

use thiserror::Error;

/// Errors raised while loading a [`ScrollConfig`](crate::ScrollConfig)
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to read the config file
    #[error("Failed to read scroll config: {0}")]
    Io(#[from] std::io::Error),

    /// The file is not valid TOML or does not match the schema
    #[error("Failed to parse scroll config: {0}")]
    Parse(#[from] toml::de::Error),

    /// A value is outside its accepted range
    #[error("Invalid scroll config: {0}")]
    Invalid(String),
}

/// Result type for config loading
pub type Result<T> = std::result::Result<T, ConfigError>;
