//! Loaders that turn external documents into [`Node`] layers.
//!
//! Parsing is delegated to figment providers so TOML, JSON and environment
//! variables all arrive as plain structures ready for
//! [`merge_deep`](crate::merge_deep) or [`ConfigStore`](crate::ConfigStore).

mod format;

pub use format::DocumentFormat;

use std::sync::Arc;

use camino::Utf8Path;
use figment::Figment;
use figment::providers::Env;
use serde_json::Value;
use tracing::debug;

use crate::node::Node;
use crate::{LayeredError, LayeredResult, LayeredResultExt};

/// Load a configuration file, choosing the parser from its extension.
///
/// `.json` files are parsed as JSON; every other extension is parsed as TOML.
/// Returns `Ok(None)` when `path` does not name an existing file.
///
/// # Examples
///
/// ```rust,no_run
/// use camino::Utf8Path;
/// use layered_config::{ConfigStore, Node, sources::load_file};
///
/// # fn run() -> layered_config::LayeredResult<()> {
/// let defaults = load_file(Utf8Path::new("defaults.toml"))?.unwrap_or_default();
/// let overrides = load_file(Utf8Path::new("app.toml"))?.unwrap_or_default();
/// let store = ConfigStore::new(&overrides, &defaults);
/// # let _ = store;
/// # Ok(())
/// # }
/// ```
///
/// # Errors
///
/// Returns [`LayeredError::File`] when the file cannot be read or parsed.
pub fn load_file(path: &Utf8Path) -> LayeredResult<Option<Node>> {
    if !path.is_file() {
        debug!(path = path.as_str(), "configuration file not found");
        return Ok(None);
    }
    let data =
        std::fs::read_to_string(path).map_err(|e| Arc::new(LayeredError::file(path, e)))?;
    let format = DocumentFormat::from_path(path);
    debug!(path = path.as_str(), ?format, "loading configuration file");
    parse_str(&data, format)
        .map(Some)
        .map_err(|e| Arc::new(LayeredError::file(path, e.to_string())))
}

/// Parse an in-memory TOML document.
///
/// ```rust
/// use layered_config::{Node, sources::from_toml_str};
///
/// let node = from_toml_str("[server]\nport = 8080")?;
/// assert_eq!(node.get("server").and_then(|s| s.get("port")).and_then(Node::as_i64), Some(8080));
/// # Ok::<_, std::sync::Arc<layered_config::LayeredError>>(())
/// ```
///
/// # Errors
///
/// Returns [`LayeredError::Gathering`] when the document is not valid TOML.
pub fn from_toml_str(data: &str) -> LayeredResult<Node> {
    parse_str(data, DocumentFormat::Toml)
}

/// Parse an in-memory JSON document whose root is an object.
///
/// # Errors
///
/// Returns [`LayeredError::Gathering`] when the document is not valid JSON or
/// its root is not an object.
pub fn from_json_str(data: &str) -> LayeredResult<Node> {
    parse_str(data, DocumentFormat::Json)
}

/// Parse `data` according to `format`.
///
/// # Errors
///
/// Returns [`LayeredError::Gathering`] when parsing fails.
pub fn parse_str(data: &str, format: DocumentFormat) -> LayeredResult<Node> {
    extract(&format.figment(data))
}

/// Collect environment variables starting with `prefix` into a structure.
///
/// The prefix is stripped, keys are lowercased and `__` separates nesting
/// levels, so `APP_SERVER__PORT=8080` with prefix `APP_` becomes
/// `{"server": {"port": 8080}}`.
///
/// # Errors
///
/// Returns [`LayeredError::Gathering`] when figment cannot assemble the
/// values.
pub fn from_env(prefix: &str) -> LayeredResult<Node> {
    debug!(prefix, "collecting environment layer");
    extract(&Figment::from(Env::prefixed(prefix).split("__")))
}

fn extract(figment: &Figment) -> LayeredResult<Node> {
    figment.extract::<Value>().map(Node::from).into_layered()
}
