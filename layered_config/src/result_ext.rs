//! Lifts loader and extraction failures into [`LayeredResult`].
//!
//! Figment and `serde_json` errors both convert into [`LayeredError`]; this
//! trait wraps the converted error in an `Arc` so `sources` and the store's
//! typed extraction can finish with a single call.
//!
//! # Examples
//!
//! ```
//! use layered_config::{LayeredResult, LayeredResultExt};
//!
//! fn port(layer: serde_json::Value) -> LayeredResult<u16> {
//!     serde_json::from_value(layer).into_layered()
//! }
//! assert_eq!(port(serde_json::json!(8080)).ok(), Some(8080));
//! assert!(port(serde_json::json!("eighty")).is_err());
//! ```

use std::sync::Arc;

use crate::{LayeredError, LayeredResult};

/// Wraps the error side of a `Result` as `Arc<LayeredError>`.
pub trait LayeredResultExt<T, E> {
    /// Converts the error and shares it behind an `Arc`.
    ///
    /// # Errors
    ///
    /// Returns the converted error when `self` is `Err`.
    fn into_layered(self) -> LayeredResult<T>;
}

impl<T, E> LayeredResultExt<T, E> for Result<T, E>
where
    E: Into<LayeredError>,
{
    fn into_layered(self) -> LayeredResult<T> {
        self.map_err(|e| Arc::new(e.into()))
    }
}
