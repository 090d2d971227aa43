// SPDX-License-Identifier: MIT OR Apache-2.0

//! Immutable hierarchical configuration nodes.
//!
//! A [`ConfigurationNode`] is a persistent value: cloning is cheap (the data sits
//! behind an `Arc`) and every modifying operation returns a new node while the
//! original stays untouched. Nodes do not know their parent; upward navigation is
//! provided by [`NodePointer`](crate::tree::NodePointer).

use std::sync::Arc;

#[derive(Debug, PartialEq, Eq)]
struct NodeData {
    name: String,
    value: Option<String>,
    children: Vec<ConfigurationNode>,
    attributes: Vec<(String, String)>,
}

/// An immutable node in a configuration tree.
///
/// Attribute names are unique per node. Both the children and the attributes keep
/// the order in which they were declared.
///
/// # Examples
///
/// ```
/// use layercfg::domain::ConfigurationNode;
///
/// let node = ConfigurationNode::builder("server")
///     .attribute("host", "localhost")
///     .attribute("port", "8080")
///     .child(ConfigurationNode::new("timeout").with_value("30"))
///     .build();
///
/// let updated = node.set_attribute("port", "9090");
/// assert_eq!(node.attribute("port"), Some("8080"));
/// assert_eq!(updated.attribute("port"), Some("9090"));
/// assert_eq!(updated.attribute_names().collect::<Vec<_>>(), vec!["host", "port"]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigurationNode(Arc<NodeData>);

impl ConfigurationNode {
    /// Creates a node without value, children or attributes.
    pub fn new(name: impl Into<String>) -> Self {
        ConfigurationNode(Arc::new(NodeData {
            name: name.into(),
            value: None,
            children: Vec::new(),
            attributes: Vec::new(),
        }))
    }

    /// Returns a builder for a node with the given name.
    pub fn builder(name: impl Into<String>) -> NodeBuilder {
        NodeBuilder::new(name)
    }

    /// The node's name.
    pub fn name(&self) -> &str {
        &self.0.name
    }

    /// The node's value, if it has one.
    pub fn value(&self) -> Option<&str> {
        self.0.value.as_deref()
    }

    /// The node's children in declaration order.
    pub fn children(&self) -> &[ConfigurationNode] {
        &self.0.children
    }

    /// The node's attributes as `(name, value)` pairs in declaration order.
    pub fn attributes(&self) -> impl ExactSizeIterator<Item = (&str, &str)> {
        self.0
            .attributes
            .iter()
            .map(|(name, value)| (name.as_str(), value.as_str()))
    }

    /// The attribute names in declaration order.
    pub fn attribute_names(&self) -> impl ExactSizeIterator<Item = &str> {
        self.0.attributes.iter().map(|(name, _)| name.as_str())
    }

    /// Looks up the value of the attribute `name`.
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.0
            .attributes
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, value)| value.as_str())
    }

    /// Returns a copy of this node with the given value.
    pub fn with_value(&self, value: impl Into<String>) -> Self {
        let mut data = self.copy_data();
        data.value = Some(value.into());
        ConfigurationNode(Arc::new(data))
    }

    /// Returns a copy of this node with `child` appended.
    pub fn add_child(&self, child: ConfigurationNode) -> Self {
        let mut data = self.copy_data();
        data.children.push(child);
        ConfigurationNode(Arc::new(data))
    }

    /// Returns a copy of this node with the attribute set.
    ///
    /// An existing attribute keeps its position and gets the new value; a new
    /// attribute is appended.
    pub fn set_attribute(&self, name: impl Into<String>, value: impl Into<String>) -> Self {
        let mut data = self.copy_data();
        put_attribute(&mut data.attributes, name.into(), value.into());
        ConfigurationNode(Arc::new(data))
    }

    /// Returns a copy of this node without the attribute `name`.
    pub fn remove_attribute(&self, name: &str) -> Self {
        let mut data = self.copy_data();
        data.attributes.retain(|(n, _)| n != name);
        ConfigurationNode(Arc::new(data))
    }

    /// Returns `true` if both handles refer to the same node data.
    pub fn ptr_eq(&self, other: &ConfigurationNode) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }

    fn copy_data(&self) -> NodeData {
        NodeData {
            name: self.0.name.clone(),
            value: self.0.value.clone(),
            children: self.0.children.clone(),
            attributes: self.0.attributes.clone(),
        }
    }
}

fn put_attribute(attributes: &mut Vec<(String, String)>, name: String, value: String) {
    match attributes.iter_mut().find(|(n, _)| *n == name) {
        Some(slot) => slot.1 = value,
        None => attributes.push((name, value)),
    }
}

/// Builder for [`ConfigurationNode`].
#[derive(Debug)]
pub struct NodeBuilder {
    data: NodeData,
}

impl NodeBuilder {
    /// Creates a builder for a node with the given name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            data: NodeData {
                name: name.into(),
                value: None,
                children: Vec::new(),
                attributes: Vec::new(),
            },
        }
    }

    /// Sets the node value.
    pub fn value(mut self, value: impl Into<String>) -> Self {
        self.data.value = Some(value.into());
        self
    }

    /// Appends a child node.
    pub fn child(mut self, child: ConfigurationNode) -> Self {
        self.data.children.push(child);
        self
    }

    /// Sets an attribute; a repeated name overwrites the earlier value in place.
    pub fn attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        put_attribute(&mut self.data.attributes, name.into(), value.into());
        self
    }

    /// Finishes the node.
    pub fn build(self) -> ConfigurationNode {
        ConfigurationNode(Arc::new(self.data))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> ConfigurationNode {
        ConfigurationNode::builder("org")
            .attribute("name", "apache")
            .child(ConfigurationNode::new("project").with_value("configuration"))
            .child(ConfigurationNode::new("project").with_value("jxpath"))
            .build()
    }

    #[test]
    fn test_new_node_is_empty() {
        let node = ConfigurationNode::new("empty");
        assert_eq!(node.name(), "empty");
        assert!(node.value().is_none());
        assert!(node.children().is_empty());
        assert_eq!(node.attributes().len(), 0);
    }

    #[test]
    fn test_children_keep_order() {
        let node = sample();
        let values: Vec<_> = node.children().iter().filter_map(|c| c.value()).collect();
        assert_eq!(values, vec!["configuration", "jxpath"]);
    }

    #[test]
    fn test_set_attribute_leaves_original_untouched() {
        let node = sample();
        let updated = node.set_attribute("test", "yes");

        assert_eq!(node.attributes().len(), 1);
        assert_eq!(updated.attributes().len(), 2);
        assert_eq!(updated.attribute("test"), Some("yes"));
        assert!(node.attribute("test").is_none());
    }

    #[test]
    fn test_set_attribute_existing_keeps_position() {
        let node = sample().set_attribute("test", "yes").set_attribute("name", "asf");
        let attrs: Vec<_> = node.attributes().collect();
        assert_eq!(attrs, vec![("name", "asf"), ("test", "yes")]);
    }

    #[test]
    fn test_builder_attribute_names_unique() {
        let node = ConfigurationNode::builder("n")
            .attribute("a", "1")
            .attribute("b", "2")
            .attribute("a", "3")
            .build();
        let attrs: Vec<_> = node.attributes().collect();
        assert_eq!(attrs, vec![("a", "3"), ("b", "2")]);
    }

    #[test]
    fn test_remove_attribute() {
        let node = sample().set_attribute("test", "yes");
        let removed = node.remove_attribute("name");
        assert_eq!(removed.attribute_names().collect::<Vec<_>>(), vec!["test"]);
        assert_eq!(node.attributes().len(), 2);
    }

    #[test]
    fn test_children_are_shared_between_versions() {
        let node = sample();
        let updated = node.set_attribute("test", "yes");
        assert!(node.children()[0].ptr_eq(&updated.children()[0]));
        assert!(!node.ptr_eq(&updated));
    }

    #[test]
    fn test_node_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<ConfigurationNode>();
    }
}
