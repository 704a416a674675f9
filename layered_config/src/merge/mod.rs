//! Recursive deep merge of configuration trees.
//!
//! Sources are applied left to right: each one is merged into the accumulator
//! produced by every earlier source, so later sources win key by key. Nested
//! structures merge recursively, sequences follow the selected
//! [`ArrayBehavior`], and leaves replace the accumulator's value unless they
//! are [`Leaf::Undefined`](crate::Leaf::Undefined) or the skip predicate
//! vetoes the write.

mod options;

pub use options::{ArrayBehavior, MergeOptions, SkipFn};

use std::borrow::Cow;

use tracing::trace;

use crate::node::{Node, Sequence, Structure};

/// Merge `sources` into `target` according to `options`.
///
/// When [`MergeOptions::mutate`] is `true` (the default) `target` is updated in
/// place and a borrow of it is returned. When it is `false`, `target` is left
/// untouched and the merge result is returned as a new tree (see [`merged`]).
///
/// Merging only happens between structures: if `target` or a source is not a
/// [`Node::Structure`], that source contributes nothing.
///
/// # Examples
///
/// ```rust
/// use layered_config::{MergeOptions, Node, merge_deep};
/// use serde_json::json;
///
/// let mut target = Node::from(json!({"a": 1, "nested": {"x": 1}}));
/// let override_layer = Node::from(json!({"a": 2, "nested": {"y": 2}}));
/// merge_deep(&mut target, [&override_layer], &MergeOptions::default());
/// assert_eq!(target, Node::from(json!({"a": 2, "nested": {"x": 1, "y": 2}})));
/// ```
pub fn merge_deep<'t, 's, I>(
    target: &'t mut Node,
    sources: I,
    options: &MergeOptions,
) -> Cow<'t, Node>
where
    I: IntoIterator<Item = &'s Node>,
{
    if !options.mutate() {
        return Cow::Owned(merged(target, sources, options));
    }
    merge_all_into(target, sources, options);
    Cow::Borrowed(target)
}

/// Merge `sources` into a deep copy of `target`, leaving `target` unchanged.
///
/// The [`MergeOptions::mutate`] flag is irrelevant here.
///
/// ```rust
/// use layered_config::{MergeOptions, Node, merged};
/// use serde_json::json;
///
/// let base = Node::from(json!({"a": 1}));
/// let layer = Node::from(json!({"a": 2}));
/// let result = merged(&base, [&layer], &MergeOptions::default());
/// assert_eq!(result, Node::from(json!({"a": 2})));
/// assert_eq!(base, Node::from(json!({"a": 1})));
/// ```
#[must_use]
pub fn merged<'s, I>(target: &Node, sources: I, options: &MergeOptions) -> Node
where
    I: IntoIterator<Item = &'s Node>,
{
    let mut copy = target.deep_clone();
    merge_all_into(&mut copy, sources, options);
    copy
}

/// Mutating merge that ignores [`MergeOptions::mutate`].
pub(crate) fn merge_all_into<'s, I>(target: &mut Node, sources: I, options: &MergeOptions)
where
    I: IntoIterator<Item = &'s Node>,
{
    for source in sources {
        merge_into(target, source, options);
    }
}

fn merge_into(target: &mut Node, source: &Node, options: &MergeOptions) {
    match (target, source) {
        (Node::Structure(acc), Node::Structure(incoming)) => {
            merge_structure(acc, incoming, options);
        }
        _ => trace!("skipping merge: target or source is not a structure"),
    }
}

fn merge_structure(acc: &mut Structure, incoming: &Structure, options: &MergeOptions) {
    for (key, value) in incoming {
        match value {
            Node::Structure(nested) => merge_nested(acc, key, nested, options),
            Node::Sequence(seq) => {
                if options.should_skip(current_value(acc, key), value) {
                    trace!(key = key.as_str(), "skip predicate vetoed sequence");
                    continue;
                }
                let combined = combine_sequences(acc.get(key), seq, options.array_behavior());
                acc.insert(key.clone(), Node::Sequence(combined));
            }
            Node::Leaf(leaf) => {
                if options.should_skip(current_value(acc, key), value) {
                    trace!(key = key.as_str(), "skip predicate vetoed leaf");
                    continue;
                }
                if value.is_undefined() {
                    continue;
                }
                acc.insert(key.clone(), Node::Leaf(leaf.clone()));
            }
        }
    }
}

/// The accumulator's value for `key`, with undefined reported as absent.
fn current_value<'a>(acc: &'a Structure, key: &str) -> Option<&'a Node> {
    acc.get(key).filter(|node| !node.is_undefined())
}

fn merge_nested(acc: &mut Structure, key: &str, nested: &Structure, options: &MergeOptions) {
    let slot = acc.entry(key.to_owned()).or_insert_with(Node::structure);
    if slot.is_falsy() {
        *slot = Node::structure();
    }
    match slot {
        Node::Structure(inner) => merge_structure(inner, nested, options),
        Node::Sequence(_) | Node::Leaf(_) => {
            trace!(key, "skipping merge of structure over non-structure value");
        }
    }
}

fn combine_sequences(
    existing: Option<&Node>,
    incoming: &Sequence,
    behavior: ArrayBehavior,
) -> Sequence {
    match behavior {
        ArrayBehavior::ReplaceCopy => incoming.deep_clone(),
        ArrayBehavior::Append => match existing {
            Some(Node::Sequence(current)) => current.concat(incoming),
            _ => incoming.deep_clone(),
        },
        ArrayBehavior::ReplaceLink => incoming.link(),
    }
}
