// SPDX-License-Identifier: MIT OR Apache-2.0

//! Iteration over the attributes of a single node.

use crate::domain::AttributePattern;
use crate::ports::NodeIterator;
use crate::tree::pointer::{AttributePointer, NodePointer};
use crate::tree::Cursor;
use std::sync::Arc;

/// Iterates over the attributes of one node that match an [`AttributePattern`].
///
/// The names of the matching attributes are captured when the iterator is created,
/// in the node's declaration order. A pattern with a namespace, or a name the node
/// does not have, produces an empty iteration.
///
/// # Examples
///
/// ```rust
/// use layercfg::domain::{AttributePattern, ConfigurationNode};
/// use layercfg::ports::{NodeHandle, NodeIterator};
/// use layercfg::tree::NodePointer;
///
/// let node = ConfigurationNode::builder("n")
///     .attribute("a", "1")
///     .attribute("b", "2")
///     .build();
/// let pointer = NodePointer::root(node);
///
/// let names: Vec<String> = pointer
///     .attributes(&AttributePattern::all())
///     .map(|attr| attr.name().to_string())
///     .collect();
/// assert_eq!(names, vec!["a", "b"]);
///
/// let mut it = pointer.attributes(&"ns:*".parse().unwrap());
/// assert!(!it.advance());
/// assert!(!it.advance());
/// ```
#[derive(Debug, Clone)]
pub struct AttributeIterator {
    owner: Arc<NodePointer>,
    names: Vec<String>,
    cursor: Cursor,
}

impl AttributeIterator {
    /// Creates an iterator over the attributes of `owner` matching `pattern`.
    pub fn new(owner: Arc<NodePointer>, pattern: &AttributePattern) -> Self {
        let names: Vec<String> = owner
            .node()
            .attribute_names()
            .filter(|name| pattern.matches(name))
            .map(str::to_string)
            .collect();
        tracing::trace!(
            node = owner.node().name(),
            %pattern,
            matches = names.len(),
            "attribute iteration prepared"
        );
        let cursor = Cursor::new(names.len());
        Self {
            owner,
            names,
            cursor,
        }
    }

    /// Number of matching attributes.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Returns `true` if no attribute matches.
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

impl NodeIterator for AttributeIterator {
    type Handle = AttributePointer;

    fn advance(&mut self) -> bool {
        self.cursor.advance()
    }

    fn current(&self) -> Option<AttributePointer> {
        let index = self.cursor.index()?;
        Some(AttributePointer::new(
            self.owner.clone(),
            self.names[index].clone(),
        ))
    }

    fn position(&self) -> usize {
        self.cursor.position()
    }
}

impl Iterator for AttributeIterator {
    type Item = AttributePointer;

    fn next(&mut self) -> Option<AttributePointer> {
        if self.advance() {
            self.current()
        } else {
            None
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.cursor.remaining();
        (remaining, Some(remaining))
    }
}
