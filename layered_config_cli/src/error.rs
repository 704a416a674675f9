//! Error types for `layered-config`.

use std::sync::Arc;

use camino::Utf8PathBuf;
use layered_config::LayeredError;
use thiserror::Error;

/// Errors surfaced by the `layered-config` command.
#[derive(Debug, Error)]
pub enum CliError {
    /// Loading a layer failed.
    #[error(transparent)]
    Layer(#[from] Arc<LayeredError>),

    /// A file named on the command line does not exist.
    #[error("configuration file not found: {0}")]
    MissingFile(Utf8PathBuf),

    /// The requested path resolved to nothing.
    #[error("no value at '{0}'")]
    PathNotFound(String),

    /// Rendering the output failed.
    #[error("failed to render JSON: {0}")]
    Render(#[from] serde_json::Error),

    /// Writing the output failed.
    #[error("failed to write output: {0}")]
    Io(#[from] std::io::Error),
}
