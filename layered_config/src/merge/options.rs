//! Options controlling a deep merge.

use std::fmt;

use crate::node::Node;

/// How a sequence in a source combines with the accumulator's value.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum ArrayBehavior {
    /// Replace with an independent copy of the source sequence.
    #[default]
    ReplaceCopy,
    /// Existing elements followed by the source elements, in new storage.
    Append,
    /// Replace with a handle that shares the source's storage.
    ///
    /// The merged tree and the source alias the same list afterwards: a push
    /// through either is visible through the other. Callers choosing this
    /// accept that the source list is no longer exclusively theirs.
    ReplaceLink,
}

/// Predicate consulted before a non-structure source value is written.
///
/// Receives the accumulator's current value for the key and the incoming
/// source value. The current value is `None` when the key is absent or holds
/// [`Leaf::Undefined`](crate::Leaf::Undefined). Returning `true` leaves the
/// key untouched.
pub type SkipFn = dyn Fn(Option<&Node>, &Node) -> bool;

/// Options for [`crate::merge_deep`] and friends.
///
/// ```rust
/// use layered_config::{ArrayBehavior, MergeOptions};
///
/// let options = MergeOptions::default()
///     .with_array_behavior(ArrayBehavior::Append)
///     .with_skip(|current, _| current.is_none());
/// assert_eq!(options.array_behavior(), ArrayBehavior::Append);
/// assert!(options.mutate());
/// ```
pub struct MergeOptions {
    array_behavior: ArrayBehavior,
    skip: Option<Box<SkipFn>>,
    mutate: bool,
}

impl Default for MergeOptions {
    fn default() -> Self {
        Self {
            array_behavior: ArrayBehavior::default(),
            skip: None,
            mutate: true,
        }
    }
}

impl fmt::Debug for MergeOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MergeOptions")
            .field("array_behavior", &self.array_behavior)
            .field("skip", &self.skip.as_ref().map(|_| "<fn>"))
            .field("mutate", &self.mutate)
            .finish()
    }
}

impl MergeOptions {
    /// Options with the given array behaviour and no skip predicate.
    #[must_use]
    pub fn with_array(array_behavior: ArrayBehavior) -> Self {
        Self::default().with_array_behavior(array_behavior)
    }

    /// Sets the array behaviour.
    #[must_use]
    pub fn with_array_behavior(mut self, array_behavior: ArrayBehavior) -> Self {
        self.array_behavior = array_behavior;
        self
    }

    /// Installs a skip predicate.
    #[must_use]
    pub fn with_skip<F>(mut self, skip: F) -> Self
    where
        F: Fn(Option<&Node>, &Node) -> bool + 'static,
    {
        self.skip = Some(Box::new(skip));
        self
    }

    /// Sets whether the merge target is updated in place.
    #[must_use]
    pub fn with_mutate(mut self, mutate: bool) -> Self {
        self.mutate = mutate;
        self
    }

    /// Shorthand for `with_mutate(false)`.
    #[must_use]
    pub fn non_mutating(self) -> Self {
        self.with_mutate(false)
    }

    /// Selected array behaviour.
    #[must_use]
    pub const fn array_behavior(&self) -> ArrayBehavior {
        self.array_behavior
    }

    /// Whether the target is updated in place.
    #[must_use]
    pub const fn mutate(&self) -> bool {
        self.mutate
    }

    /// Returns `true` when a skip predicate is installed.
    #[must_use]
    pub const fn has_skip(&self) -> bool {
        self.skip.is_some()
    }

    pub(crate) fn should_skip(&self, current: Option<&Node>, incoming: &Node) -> bool {
        self.skip
            .as_ref()
            .is_some_and(|skip| skip(current, incoming))
    }
}
