//! Error types for configuration loading.

use std::path::PathBuf;

use thiserror::Error;

/// Errors from reading, parsing or validating a config file.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum ConfigError {
    /// The file could not be read.
    #[error("cannot read config {}: {message}", path.display())]
    Io { path: PathBuf, message: String },
    /// The file is not valid TOML or does not match the schema.
    #[error("cannot parse config: {0}")]
    Parse(String),
    /// A value parsed but lies outside its accepted range.
    #[error("invalid config: {0}")]
    Invalid(String),
}
