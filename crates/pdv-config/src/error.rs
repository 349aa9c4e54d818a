//! Configuration error types

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// Redirect targets are joined onto the site root.
    #[error("{key} must be an absolute path starting with '/', got {route:?}")]
    RelativeRoute { key: &'static str, route: String },

    #[error("{key} must not be empty")]
    EmptyValue { key: &'static str },

    #[error("Failed to determine user config directory")]
    NoConfigDir,
}
