//! Structural data model shared by merging, flattening and path lookups.
//!
//! A configuration tree is made of [`Node`] values: keyed [`Structure`] maps,
//! ordered [`Sequence`] lists and scalar [`Leaf`] values. Cloning a node is
//! always a deep, storage-independent copy. The single exception to that rule
//! is [`Sequence::link`], which hands out a second handle onto the same
//! storage and backs [`crate::ArrayBehavior::ReplaceLink`].

mod convert;
mod sequence;

pub use sequence::Sequence;

use std::collections::BTreeMap;

use serde_json::Number;

/// Keyed map of child nodes.
pub type Structure = BTreeMap<String, Node>;

/// Scalar value stored at the edge of a configuration tree.
#[derive(Clone, Debug, PartialEq)]
pub enum Leaf {
    /// Explicitly unset value. Merging never writes it and lookups treat it
    /// as absent.
    Undefined,
    /// JSON-style `null`.
    Null,
    /// Boolean flag.
    Bool(bool),
    /// Integer or floating-point number.
    Number(Number),
    /// UTF-8 string.
    String(String),
}

/// A configuration tree node.
#[derive(Debug, PartialEq)]
pub enum Node {
    /// Keyed map of nested nodes.
    Structure(Structure),
    /// Ordered list of nodes.
    Sequence(Sequence),
    /// Scalar value.
    Leaf(Leaf),
}

impl Default for Node {
    fn default() -> Self {
        Self::structure()
    }
}

impl Clone for Node {
    fn clone(&self) -> Self {
        self.deep_clone()
    }
}

impl Node {
    /// Returns an empty structure node.
    #[must_use]
    pub const fn structure() -> Self {
        Self::Structure(BTreeMap::new())
    }

    /// Returns the explicit "unset" leaf.
    #[must_use]
    pub const fn undefined() -> Self {
        Self::Leaf(Leaf::Undefined)
    }

    /// Returns a `null` leaf.
    #[must_use]
    pub const fn null() -> Self {
        Self::Leaf(Leaf::Null)
    }

    /// Produces a structurally identical tree that shares no sequence storage
    /// with `self`.
    ///
    /// ```rust
    /// use layered_config::Node;
    /// use serde_json::json;
    ///
    /// let original = Node::from(json!({"list": [1, 2]}));
    /// let copy = original.deep_clone();
    /// assert_eq!(copy, original);
    ///
    /// let (Some(a), Some(b)) = (
    ///     original.get("list").and_then(Node::as_sequence),
    ///     copy.get("list").and_then(Node::as_sequence),
    /// ) else {
    ///     panic!("lists present");
    /// };
    /// assert!(!a.shares_storage_with(b));
    /// ```
    #[must_use]
    pub fn deep_clone(&self) -> Self {
        match self {
            Self::Structure(map) => Self::Structure(
                map.iter()
                    .map(|(key, value)| (key.clone(), value.deep_clone()))
                    .collect(),
            ),
            Self::Sequence(seq) => Self::Sequence(seq.deep_clone()),
            Self::Leaf(leaf) => Self::Leaf(leaf.clone()),
        }
    }

    /// Returns `true` when the node is a [`Structure`].
    #[must_use]
    pub const fn is_structure(&self) -> bool {
        matches!(self, Self::Structure(_))
    }

    /// Returns `true` when the node is [`Leaf::Undefined`].
    #[must_use]
    pub const fn is_undefined(&self) -> bool {
        matches!(self, Self::Leaf(Leaf::Undefined))
    }

    /// Returns `true` for `null` and undefined leaves.
    #[must_use]
    pub const fn is_nullish(&self) -> bool {
        matches!(self, Self::Leaf(Leaf::Undefined | Leaf::Null))
    }

    /// Returns `true` for "empty" leaves: null, undefined, `false`, numeric
    /// zero and the empty string. Structures and sequences, empty or not, are
    /// never falsy.
    ///
    /// ```rust
    /// use layered_config::Node;
    ///
    /// assert!(Node::from(0).is_falsy());
    /// assert!(Node::from("").is_falsy());
    /// assert!(!Node::from("0").is_falsy());
    /// assert!(!Node::structure().is_falsy());
    /// ```
    #[must_use]
    pub fn is_falsy(&self) -> bool {
        match self {
            Self::Leaf(Leaf::Undefined | Leaf::Null | Leaf::Bool(false)) => true,
            Self::Leaf(Leaf::Number(number)) => number.as_f64() == Some(0.0),
            Self::Leaf(Leaf::String(text)) => text.is_empty(),
            _ => false,
        }
    }

    /// Borrows the inner map when the node is a structure.
    #[must_use]
    pub const fn as_structure(&self) -> Option<&Structure> {
        match self {
            Self::Structure(map) => Some(map),
            _ => None,
        }
    }

    /// Mutably borrows the inner map when the node is a structure.
    pub const fn as_structure_mut(&mut self) -> Option<&mut Structure> {
        match self {
            Self::Structure(map) => Some(map),
            _ => None,
        }
    }

    /// Borrows the sequence handle when the node is a sequence.
    #[must_use]
    pub const fn as_sequence(&self) -> Option<&Sequence> {
        match self {
            Self::Sequence(seq) => Some(seq),
            _ => None,
        }
    }

    /// Returns the string slice of a string leaf.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Leaf(Leaf::String(value)) => Some(value),
            _ => None,
        }
    }

    /// Returns the value of a boolean leaf.
    #[must_use]
    pub const fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Leaf(Leaf::Bool(value)) => Some(*value),
            _ => None,
        }
    }

    /// Returns the value of an integral number leaf that fits in `i64`.
    #[must_use]
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Self::Leaf(Leaf::Number(number)) => number.as_i64(),
            _ => None,
        }
    }

    /// Returns the value of a number leaf as `f64`.
    #[must_use]
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Leaf(Leaf::Number(number)) => number.as_f64(),
            _ => None,
        }
    }

    /// Looks up a direct child of a structure node.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Self> {
        self.as_structure().and_then(|map| map.get(key))
    }

    /// Mutably looks up a direct child of a structure node.
    pub fn get_mut(&mut self, key: &str) -> Option<&mut Self> {
        self.as_structure_mut().and_then(|map| map.get_mut(key))
    }
}
