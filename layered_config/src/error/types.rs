//! Primary error enum for loading and extracting configuration.

use camino::Utf8PathBuf;
use thiserror::Error;

/// Errors raised while loading configuration layers or extracting typed
/// values from a store.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum LayeredError {
    /// Error originating from a configuration file.
    #[error("Configuration file error in '{path}': {source}")]
    File {
        /// Path of the file that failed to load.
        path: Utf8PathBuf,
        /// Underlying read or parse failure.
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// Error while gathering configuration from a figment provider.
    #[error("Failed to gather configuration: {0}")]
    Gathering(#[from] Box<figment::Error>),

    /// A view could not be deserialised into the requested type.
    #[error("Failed to extract typed configuration: {0}")]
    Extract(#[from] serde_json::Error),
}
