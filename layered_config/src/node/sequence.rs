//! Ordered list storage with explicit aliasing.

use std::cell::{Ref, RefCell, RefMut};
use std::fmt;
use std::rc::Rc;

use super::Node;

/// Handle onto an ordered list of nodes.
///
/// Handles produced by [`Sequence::new`], [`Clone`] and [`Sequence::deep_clone`]
/// own their storage exclusively. [`Sequence::link`] is the escape hatch: the
/// returned handle shares storage with `self`, so a push through either one is
/// visible through both. Callers that link a sequence into a merged tree must
/// treat the source list as no longer exclusively theirs.
#[derive(Default)]
pub struct Sequence {
    items: Rc<RefCell<Vec<Node>>>,
}

impl Sequence {
    /// Wraps `items` in freshly allocated storage.
    #[must_use]
    pub fn new(items: Vec<Node>) -> Self {
        Self {
            items: Rc::new(RefCell::new(items)),
        }
    }

    /// Returns a second handle onto the same storage.
    ///
    /// ```rust
    /// use layered_config::{Node, Sequence};
    ///
    /// let original = Sequence::new(vec![Node::from(1)]);
    /// let alias = original.link();
    /// alias.push(Node::from(2));
    /// assert_eq!(original.len(), 2);
    /// assert!(original.shares_storage_with(&alias));
    /// ```
    #[must_use]
    pub fn link(&self) -> Self {
        Self {
            items: Rc::clone(&self.items),
        }
    }

    /// Copies every element (recursively) into new storage.
    #[must_use]
    pub fn deep_clone(&self) -> Self {
        Self::new(self.to_vec())
    }

    /// Returns `true` when both handles point at the same storage.
    #[must_use]
    pub fn shares_storage_with(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.items, &other.items)
    }

    /// Borrows the elements.
    ///
    /// # Panics
    ///
    /// Panics if the storage is currently mutably borrowed through a linked
    /// handle.
    #[must_use]
    pub fn borrow(&self) -> Ref<'_, Vec<Node>> {
        self.items.borrow()
    }

    /// Mutably borrows the elements.
    ///
    /// # Panics
    ///
    /// Panics if the storage is currently borrowed through a linked handle.
    #[must_use]
    pub fn borrow_mut(&self) -> RefMut<'_, Vec<Node>> {
        self.items.borrow_mut()
    }

    /// Appends `node` to the end of the list.
    pub fn push(&self, node: Node) {
        self.items.borrow_mut().push(node);
    }

    /// Number of elements.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.borrow().len()
    }

    /// Returns `true` when the list has no elements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.borrow().is_empty()
    }

    /// Deep copies of the elements in order.
    #[must_use]
    pub fn to_vec(&self) -> Vec<Node> {
        self.items.borrow().iter().map(Node::deep_clone).collect()
    }

    /// Concatenates deep copies of `self` and `tail` into new storage.
    #[must_use]
    pub fn concat(&self, tail: &Self) -> Self {
        let mut items = self.to_vec();
        items.extend(tail.to_vec());
        Self::new(items)
    }
}

impl Clone for Sequence {
    fn clone(&self) -> Self {
        self.deep_clone()
    }
}

impl PartialEq for Sequence {
    fn eq(&self, other: &Self) -> bool {
        self.shares_storage_with(other) || *self.items.borrow() == *other.items.borrow()
    }
}

impl fmt::Debug for Sequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.items.borrow().iter()).finish()
    }
}

impl From<Vec<Node>> for Sequence {
    fn from(items: Vec<Node>) -> Self {
        Self::new(items)
    }
}

impl FromIterator<Node> for Sequence {
    fn from_iter<I: IntoIterator<Item = Node>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
