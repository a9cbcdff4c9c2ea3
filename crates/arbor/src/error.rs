//! Error types for view models, configuration and persistence.

use std::path::PathBuf;

use arbor_core::StoreError;

/// Result type alias for this crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in view models, configuration loading and persistence.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Error raised by the underlying tree store.
    #[error(transparent)]
    Store(#[from] StoreError),

    /// File I/O error.
    #[error("Failed to access '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// JSON encoding or decoding error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Malformed configuration file.
    #[error("Invalid configuration in '{path}': {source}")]
    Config {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    /// No per-user configuration directory could be determined.
    #[error("No configuration directory available for this user")]
    NoConfigDir,
}

impl Error {
    /// Create an I/O error.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Create a configuration error.
    pub fn config(path: impl Into<PathBuf>, source: toml::de::Error) -> Self {
        Self::Config {
            path: path.into(),
            source,
        }
    }
}
