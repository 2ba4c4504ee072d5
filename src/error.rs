//! Configuration Errors
//!
//! Everything that can go wrong while building a validator. These are
//! raised at construction time and never show up in the row stream.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while building a validator from configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The JSON document could not be parsed
    #[error("Invalid JSON configuration: {0}")]
    Json(#[from] serde_json::Error),

    /// The TOML document could not be parsed
    #[error("Invalid TOML configuration: {0}")]
    Toml(#[from] toml::de::Error),

    /// The configuration file could not be read
    #[error("Failed to read configuration '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The configuration file extension is not a known format
    #[error("Unsupported configuration format '{}' (expected .json or .toml)", .path.display())]
    UnsupportedFormat { path: PathBuf },

    /// A column key is not a 1-based integer
    #[error("Invalid column index '{0}': columns are numbered from 1")]
    InvalidColumnIndex(String),

    /// A pattern rule does not compile
    #[error("Invalid pattern for column {column}: {source}")]
    InvalidPattern {
        column: usize,
        #[source]
        source: regex::Error,
    },

    /// A length rule has neither a minimum nor a maximum
    #[error("Length rule for column {column} needs a 'min' or 'max' value")]
    EmptyLengthRule { column: usize },

    /// A length rule has a minimum above its maximum
    #[error("Length rule for column {column} has min {min} greater than max {max}")]
    InvalidLengthRange { column: usize, min: usize, max: usize },
}
