//! Error types for the graph builder
//!
//! Graph operations themselves never fail; only setting the builder up can.

use thiserror::Error;

/// Errors that can occur while configuring the graph builder
#[derive(Error, Debug)]
pub enum GraphError {
    /// Configuration value out of range or malformed
    #[error("Configuration error: {0}")]
    Config(String),

    /// TOML could not be parsed into a configuration
    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    /// Configuration could not be serialized
    #[error("TOML serialize error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),
}
