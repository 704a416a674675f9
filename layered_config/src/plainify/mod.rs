//! Flattening of nested structures into dotted keys.

use crate::node::{Node, Structure};

/// Flattens every nested structure in `target` into dotted keys.
///
/// ```rust
/// use layered_config::{Node, plainify};
/// use serde_json::json;
///
/// let nested = Node::from(json!({"nested": {"foo": "bar", "nested": {"foo": [1, 2]}}, "foo": "bar"}));
/// assert_eq!(
///     plainify(&nested),
///     Node::from(json!({"nested.foo": "bar", "nested.nested.foo": [1, 2], "foo": "bar"}))
/// );
/// ```
#[must_use]
pub fn plainify(target: &Node) -> Node {
    plainify_with(target, |_| false)
}

/// Flattens `target`, keeping any structure for which `keep_whole` returns
/// `true` intact under its (possibly dotted) key.
///
/// The input is never modified. A non-structure `target` is returned as a deep
/// copy. Undefined leaves are dropped and empty nested structures vanish,
/// because they contribute no dotted paths.
///
/// ```rust
/// use layered_config::{Node, plainify_with};
/// use serde_json::json;
///
/// let described = Node::from(json!({
///     "nested": {"key": {"desc": "d", "type": "boolean"}, "foo": "bar"}
/// }));
/// let flat = plainify_with(&described, |map| map.contains_key("desc") && map.contains_key("type"));
/// assert_eq!(
///     flat,
///     Node::from(json!({"nested.key": {"desc": "d", "type": "boolean"}, "nested.foo": "bar"}))
/// );
/// ```
#[must_use]
pub fn plainify_with<F>(target: &Node, keep_whole: F) -> Node
where
    F: Fn(&Structure) -> bool,
{
    let Node::Structure(root) = target else {
        return target.deep_clone();
    };
    let mut flat = Structure::new();
    flatten_into(&mut flat, None, root, &keep_whole);
    Node::Structure(flat)
}

fn flatten_into<F>(flat: &mut Structure, prefix: Option<&str>, structure: &Structure, keep_whole: &F)
where
    F: Fn(&Structure) -> bool,
{
    for (key, value) in structure {
        let path = prefix.map_or_else(|| key.clone(), |parent| format!("{parent}.{key}"));
        match value {
            Node::Structure(nested) if !keep_whole(nested) => {
                flatten_into(flat, Some(&path), nested, keep_whole);
            }
            _ if value.is_undefined() => {}
            _ => {
                flat.insert(path, value.deep_clone());
            }
        }
    }
}

#[cfg(test)]
mod tests;
