//! Dotted-path lookups into configuration trees.

use crate::node::Node;

/// Resolves a dotted `path` such as `"formula.output"` inside `target`.
///
/// An absent or empty path returns `target` itself. Each segment indexes a
/// structure key; a missing key, a non-structure intermediate value or an
/// undefined leaf yields `None`.
///
/// ```rust
/// use layered_config::{Node, prop_ref};
/// use serde_json::json;
///
/// let tree = Node::from(json!({"nested": {"foo": "bar"}}));
/// assert_eq!(prop_ref(&tree, Some("nested.foo")).and_then(Node::as_str), Some("bar"));
/// assert!(prop_ref(&tree, Some("missing.foo")).is_none());
/// assert!(std::ptr::eq(prop_ref(&tree, None).unwrap_or(&tree), &tree));
/// ```
#[must_use]
pub fn prop_ref<'a>(target: &'a Node, path: Option<&str>) -> Option<&'a Node> {
    let Some(dotted) = path.filter(|p| !p.is_empty()) else {
        return Some(target);
    };
    dotted
        .split('.')
        .try_fold(target, |level, segment| level.get(segment))
        .filter(|found| !found.is_undefined())
}

/// Mutable counterpart of [`prop_ref`].
pub fn prop_ref_mut<'a>(target: &'a mut Node, path: Option<&str>) -> Option<&'a mut Node> {
    let Some(dotted) = path.filter(|p| !p.is_empty()) else {
        return Some(target);
    };
    dotted
        .split('.')
        .try_fold(target, |level, segment| level.get_mut(segment))
        .filter(|found| !found.is_undefined())
}
