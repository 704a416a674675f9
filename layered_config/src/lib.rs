//! Layered configuration objects built from recursive deep merges.
//!
//! The crate merges a defaults tree with any number of override trees,
//! remembers the defaults separately for later lookups, and can flatten nested
//! structures into dotted keys.
//!
//! - [`merge_deep`] and [`merged`] combine [`Node`] trees with a configurable
//!   [`ArrayBehavior`] and an optional skip predicate.
//! - [`plainify`] and [`plainify_with`] flatten nested structures into
//!   `"parent.child"` keys.
//! - [`prop_ref`] resolves dotted paths.
//! - [`ConfigStore`] keeps a current-values view and a defaults view built
//!   from the above.
//! - [`sources`] turns TOML, JSON and environment variables into layers.
//!
//! ```rust
//! use layered_config::{ArrayBehavior, ConfigStore, MergeOptions, Node};
//! use serde_json::json;
//!
//! let defaults = Node::from(json!({"yourOption": 1, "nested": {"option": "two", "array": [1]}}));
//! let mut store = ConfigStore::new(&Node::from(json!({"yourOption": 2})), &defaults);
//!
//! store.add(
//!     &Node::from(json!({"nested": {"array": [3]}})),
//!     &Node::structure(),
//!     &MergeOptions::with_array(ArrayBehavior::Append),
//! );
//! assert_eq!(store.get_prop_ref(Some("nested.array")), Some(&Node::from(json!([1, 3]))));
//! assert_eq!(store.get_default(Some("yourOption")).and_then(Node::as_i64), Some(1));
//! ```

mod error;
mod merge;
mod node;
mod path;
mod plainify;
mod result_ext;
pub mod sources;
mod store;

use std::sync::Arc;

pub use error::LayeredError;
pub use merge::{ArrayBehavior, MergeOptions, SkipFn, merge_deep, merged};
pub use node::{Leaf, Node, Sequence, Structure};
pub use path::{prop_ref, prop_ref_mut};
pub use plainify::{plainify, plainify_with};
pub use result_ext::LayeredResultExt;
pub use store::ConfigStore;

/// Result type used by fallible loaders and extractors.
pub type LayeredResult<T> = Result<T, Arc<LayeredError>>;

/// Builds a [`ConfigStore`] from `overrides` layered over `defaults`.
///
/// Shorthand for [`ConfigStore::new`].
#[must_use]
pub fn create(overrides: &Node, defaults: &Node) -> ConfigStore {
    ConfigStore::new(overrides, defaults)
}
