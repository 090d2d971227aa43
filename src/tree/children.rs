// SPDX-License-Identifier: MIT OR Apache-2.0

//! Iteration over the child nodes of a single node.

use crate::domain::{ConfigurationNode, NamePattern};
use crate::ports::NodeIterator;
use crate::tree::pointer::NodePointer;
use crate::tree::Cursor;
use std::sync::Arc;

/// Iterates over the children of one node whose name matches a [`NamePattern`].
///
/// Matching children are captured at creation, in declaration order.
#[derive(Debug, Clone)]
pub struct ChildIterator {
    parent: Arc<NodePointer>,
    children: Vec<ConfigurationNode>,
    cursor: Cursor,
}

impl ChildIterator {
    /// Creates an iterator over the children of `parent` matching `pattern`.
    pub fn new(parent: Arc<NodePointer>, pattern: NamePattern) -> Self {
        let children: Vec<ConfigurationNode> = parent
            .node()
            .children()
            .iter()
            .filter(|child| pattern.matches(child.name()))
            .cloned()
            .collect();
        let cursor = Cursor::new(children.len());
        Self {
            parent,
            children,
            cursor,
        }
    }
}

impl NodeIterator for ChildIterator {
    type Handle = NodePointer;

    fn advance(&mut self) -> bool {
        self.cursor.advance()
    }

    fn current(&self) -> Option<NodePointer> {
        let index = self.cursor.index()?;
        Some(NodePointer::child_of(
            self.parent.clone(),
            self.children[index].clone(),
        ))
    }

    fn position(&self) -> usize {
        self.cursor.position()
    }
}

impl Iterator for ChildIterator {
    type Item = NodePointer;

    fn next(&mut self) -> Option<NodePointer> {
        if self.advance() {
            self.current()
        } else {
            None
        }
    }
}
