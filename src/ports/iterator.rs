// SPDX-License-Identifier: MIT OR Apache-2.0

//! Positional node iteration trait definitions.
//!
//! A tree-query engine steps through a configuration tree with iterators that
//! yield typed handles. These traits are the whole contract between such an engine
//! and the tree: the engine never needs to know whether it is stepping over
//! attributes or child nodes.

use crate::tree::NodePointer;

/// A handle to an attribute or a node produced during traversal.
pub trait NodeHandle: Clone {
    /// The name of the attribute or node.
    fn name(&self) -> &str;

    /// The value of the attribute or node, if it has one.
    fn value(&self) -> Option<&str>;

    /// The pointer to the owning node, or `None` for a tree root.
    fn parent(&self) -> Option<&NodePointer>;

    /// Returns `true` if the handle refers to an attribute.
    fn is_attribute(&self) -> bool {
        false
    }
}

/// A forward-only positional iterator over node handles.
///
/// The iterator starts before the first handle. Each successful [`advance`]
/// positions it on the next handle; once it returns `false` the iterator is
/// exhausted and keeps returning `false`. There is no rewind: construct a new
/// iterator to start over.
///
/// [`advance`]: NodeIterator::advance
pub trait NodeIterator {
    /// The handle type this iterator yields.
    type Handle: NodeHandle;

    /// Moves to the next handle. Returns `false` when there is none.
    fn advance(&mut self) -> bool;

    /// The handle at the current position, or `None` when not positioned on one.
    fn current(&self) -> Option<Self::Handle>;

    /// The 1-based position of the current handle, or 0 when not positioned.
    fn position(&self) -> usize;

    /// Advances through all remaining handles and collects them.
    fn collect_remaining(&mut self) -> Vec<Self::Handle> {
        let mut handles = Vec::new();
        while self.advance() {
            if let Some(handle) = self.current() {
                handles.push(handle);
            }
        }
        handles
    }
}
