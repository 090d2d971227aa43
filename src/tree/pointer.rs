// SPDX-License-Identifier: MIT OR Apache-2.0

//! Navigation pointers into a configuration tree.
//!
//! Nodes are immutable and shared, so they cannot point back to their parent. A
//! [`NodePointer`] pairs a node with the pointer it was reached from, which gives
//! traversal code a parent chain without the tree owning one.

use crate::domain::{AttributePattern, ConfigurationNode, NamePattern};
use crate::ports::NodeHandle;
use crate::tree::attributes::AttributeIterator;
use crate::tree::children::ChildIterator;
use std::sync::Arc;

/// A node together with the path of pointers leading to it.
///
/// # Examples
///
/// ```rust
/// use layercfg::domain::{AttributePattern, ConfigurationNode, NamePattern};
/// use layercfg::ports::{NodeHandle, NodeIterator};
/// use layercfg::tree::NodePointer;
///
/// let root = ConfigurationNode::builder("config")
///     .child(ConfigurationNode::builder("server").attribute("port", "8080").build())
///     .build();
///
/// let mut children = NodePointer::root(root).children(NamePattern::from("server"));
/// assert!(children.advance());
/// let server = children.current().unwrap();
///
/// let mut attrs = server.attributes(&AttributePattern::all());
/// assert!(attrs.advance());
/// let port = attrs.current().unwrap();
/// assert_eq!(port.value(), Some("8080"));
/// assert_eq!(port.path(), "/config/server/@port");
/// ```
#[derive(Debug, Clone)]
pub struct NodePointer {
    node: ConfigurationNode,
    parent: Option<Arc<NodePointer>>,
}

impl NodePointer {
    /// Creates a pointer to a tree root.
    pub fn root(node: ConfigurationNode) -> Self {
        Self { node, parent: None }
    }

    /// Creates a pointer to `node`, reached from `parent`.
    pub fn child_of(parent: Arc<NodePointer>, node: ConfigurationNode) -> Self {
        Self {
            node,
            parent: Some(parent),
        }
    }

    /// The node this pointer refers to.
    pub fn node(&self) -> &ConfigurationNode {
        &self.node
    }

    /// Number of ancestors; 0 for a root.
    pub fn depth(&self) -> usize {
        let mut depth = 0;
        let mut current = self.parent.as_deref();
        while let Some(pointer) = current {
            depth += 1;
            current = pointer.parent.as_deref();
        }
        depth
    }

    /// The slash-separated names from the root down to this node, e.g. `/a/b`.
    pub fn path(&self) -> String {
        let mut names = vec![self.node.name()];
        let mut current = self.parent.as_deref();
        while let Some(pointer) = current {
            names.push(pointer.node.name());
            current = pointer.parent.as_deref();
        }
        names.iter().rev().fold(String::new(), |mut path, name| {
            path.push('/');
            path.push_str(name);
            path
        })
    }

    /// Iterates over this node's attributes that match `pattern`.
    pub fn attributes(&self, pattern: &AttributePattern) -> AttributeIterator {
        AttributeIterator::new(Arc::new(self.clone()), pattern)
    }

    /// Iterates over this node's children whose name matches `pattern`.
    pub fn children(&self, pattern: NamePattern) -> ChildIterator {
        ChildIterator::new(Arc::new(self.clone()), pattern)
    }
}

impl NodeHandle for NodePointer {
    fn name(&self) -> &str {
        self.node.name()
    }

    fn value(&self) -> Option<&str> {
        self.node.value()
    }

    fn parent(&self) -> Option<&NodePointer> {
        self.parent.as_deref()
    }
}

/// A handle to one attribute of a node.
#[derive(Debug, Clone)]
pub struct AttributePointer {
    owner: Arc<NodePointer>,
    name: String,
}

impl AttributePointer {
    pub(crate) fn new(owner: Arc<NodePointer>, name: String) -> Self {
        Self { owner, name }
    }

    /// The pointer to the node that owns the attribute.
    pub fn owner(&self) -> &NodePointer {
        &self.owner
    }

    /// The owner's path followed by `/@name`.
    pub fn path(&self) -> String {
        format!("{}/@{}", self.owner.path(), self.name)
    }
}

impl NodeHandle for AttributePointer {
    fn name(&self) -> &str {
        &self.name
    }

    fn value(&self) -> Option<&str> {
        self.owner.node().attribute(&self.name)
    }

    fn parent(&self) -> Option<&NodePointer> {
        Some(&self.owner)
    }

    fn is_attribute(&self) -> bool {
        true
    }
}
