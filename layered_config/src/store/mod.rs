//! A current-values view paired with an independently owned defaults view.

use serde::de::DeserializeOwned;
use tracing::debug;

use crate::merge::{MergeOptions, merge_all_into};
use crate::node::Node;
use crate::path::{prop_ref, prop_ref_mut};
use crate::plainify::plainify;
use crate::{LayeredResult, LayeredResultExt};

/// Layered configuration holding current values and the defaults they were
/// built from.
///
/// Both views are deep copies of their inputs, so mutating the current view
/// never alters the defaults, nested lists included. The only way to make the
/// views share storage is to pass
/// [`ArrayBehavior::ReplaceLink`](crate::ArrayBehavior::ReplaceLink) to
/// [`ConfigStore::add`].
///
/// # Examples
///
/// ```rust
/// use layered_config::{ConfigStore, MergeOptions, Node};
/// use serde_json::json;
///
/// let mut store = ConfigStore::new(
///     &Node::from(json!({"a": "new value"})),
///     &Node::from(json!({"a": "default value"})),
/// );
/// assert_eq!(store.get_prop_ref(Some("a")).and_then(Node::as_str), Some("new value"));
/// assert_eq!(store.get_default(Some("a")).and_then(Node::as_str), Some("default value"));
///
/// store.add(
///     &Node::from(json!({"b": 1})),
///     &Node::from(json!({"b": 0})),
///     &MergeOptions::default(),
/// );
/// assert_eq!(store.get_prop_ref(Some("b")).and_then(Node::as_i64), Some(1));
/// assert_eq!(store.get_default(Some("b")).and_then(Node::as_i64), Some(0));
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ConfigStore {
    current: Node,
    defaults: Node,
}

impl ConfigStore {
    /// Builds a store whose current view is `defaults` overlaid with
    /// `overrides` and whose defaults view is a copy of `defaults`.
    #[must_use]
    pub fn new(overrides: &Node, defaults: &Node) -> Self {
        let mut store = Self::default();
        store.add(overrides, defaults, &MergeOptions::default());
        store
    }

    /// Merges `defaults` then `config` into the current view and `defaults`
    /// into the defaults view.
    ///
    /// Both views are always updated in place: a non-mutating `options` is
    /// treated as mutating. Array behaviour and the skip predicate apply to
    /// both merges.
    pub fn add(&mut self, config: &Node, defaults: &Node, options: &MergeOptions) -> &mut Self {
        if !options.mutate() {
            debug!("ignoring non-mutating merge option for store update");
        }
        debug!(
            array_behavior = ?options.array_behavior(),
            has_skip = options.has_skip(),
            "adding configuration layer"
        );
        merge_all_into(&mut self.current, [defaults, config], options);
        merge_all_into(&mut self.defaults, [defaults], options);
        self
    }

    /// Looks up a dotted path in the defaults view.
    #[must_use]
    pub fn get_default(&self, path: Option<&str>) -> Option<&Node> {
        prop_ref(&self.defaults, path)
    }

    /// Looks up a dotted path in the current view. An empty path returns the
    /// whole view.
    ///
    /// To resolve a path against some other tree, such as a subtree already
    /// borrowed from the store, call [`prop_ref`](crate::prop_ref) with that
    /// tree as the target.
    ///
    /// ```rust
    /// use layered_config::{ConfigStore, Node, prop_ref};
    /// use serde_json::json;
    ///
    /// let store = ConfigStore::new(
    ///     &Node::structure(),
    ///     &Node::from(json!({"server": {"tls": {"port": 443}}})),
    /// );
    /// let server = store.get_prop_ref(Some("server"));
    /// let port = server.and_then(|tree| prop_ref(tree, Some("tls.port")));
    /// assert_eq!(port.and_then(Node::as_i64), Some(443));
    /// ```
    #[must_use]
    pub fn get_prop_ref(&self, path: Option<&str>) -> Option<&Node> {
        prop_ref(&self.current, path)
    }

    /// Mutable lookup of a dotted path in the current view.
    pub fn get_prop_mut(&mut self, path: Option<&str>) -> Option<&mut Node> {
        prop_ref_mut(&mut self.current, path)
    }

    /// The current-values view.
    #[must_use]
    pub const fn current(&self) -> &Node {
        &self.current
    }

    /// Mutable access to the current-values view.
    pub const fn current_mut(&mut self) -> &mut Node {
        &mut self.current
    }

    /// The defaults view.
    #[must_use]
    pub const fn defaults(&self) -> &Node {
        &self.defaults
    }

    /// The current view flattened into dotted keys.
    #[must_use]
    pub fn plainified(&self) -> Node {
        plainify(&self.current)
    }

    /// Deserialises the current view into `T`.
    ///
    /// # Errors
    ///
    /// Returns [`crate::LayeredError::Extract`] when the view does not match
    /// the shape of `T`.
    pub fn extract<T: DeserializeOwned>(&self) -> LayeredResult<T> {
        extract_node(&self.current)
    }

    /// Deserialises the defaults view into `T`.
    ///
    /// # Errors
    ///
    /// Returns [`crate::LayeredError::Extract`] when the view does not match
    /// the shape of `T`.
    pub fn extract_default<T: DeserializeOwned>(&self) -> LayeredResult<T> {
        extract_node(&self.defaults)
    }
}

fn extract_node<T: DeserializeOwned>(node: &Node) -> LayeredResult<T> {
    serde_json::from_value(serde_json::Value::from(node)).into_layered()
}

#[cfg(test)]
mod tests;
