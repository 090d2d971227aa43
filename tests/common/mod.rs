// SPDX-License-Identifier: MIT OR Apache-2.0

//! Shared fixtures for the integration tests.

use layercfg::domain::{ConfigValue, ConfigurationNode};
use layercfg::ports::{NodeHandle, NodeIterator, ValueLookup};
use std::collections::HashMap;
use std::sync::Once;

/// Name of the attribute every `org` node carries in [`test_tree`].
#[allow(dead_code)]
pub const ATTR_NAME: &str = "counter";

static TRACING: Once = Once::new();

/// Installs a fmt subscriber once so `RUST_LOG`-style output shows up in failing tests.
#[allow(dead_code)]
pub fn init_tracing() {
    TRACING.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_test_writer()
            .with_max_level(tracing::Level::TRACE)
            .try_init();
    });
}

/// Builds a small tree: a root with `tables`, `org` and `admin` children.
///
/// The `org` child carries the attribute [`ATTR_NAME`].
#[allow(dead_code)]
pub fn test_tree() -> ConfigurationNode {
    ConfigurationNode::builder("config")
        .child(
            ConfigurationNode::builder("tables")
                .child(ConfigurationNode::new("table").with_value("users"))
                .build(),
        )
        .child(
            ConfigurationNode::builder("org")
                .attribute(ATTR_NAME, "0")
                .child(ConfigurationNode::new("project").with_value("configuration"))
                .build(),
        )
        .child(ConfigurationNode::new("admin").with_value("root"))
        .build()
}

/// Drains `it` and returns the names of the handles it produced.
#[allow(dead_code)]
pub fn iteration_names<I: NodeIterator>(it: &mut I) -> Vec<String> {
    it.collect_remaining()
        .iter()
        .map(|handle| handle.name().to_string())
        .collect()
}

/// A bare [`ValueLookup`] over a hash map, independent of `ValueStore`.
#[allow(dead_code)]
#[derive(Debug, Default)]
pub struct MockLookup {
    values: HashMap<String, Vec<ConfigValue>>,
}

#[allow(dead_code)]
impl MockLookup {
    /// Creates an empty lookup.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a single-valued key.
    pub fn with_value(mut self, key: &str, value: &str) -> Self {
        self.values
            .insert(key.to_string(), vec![ConfigValue::from(value)]);
        self
    }
}

impl ValueLookup for MockLookup {
    fn lookup_sequence(&self, key: &str) -> Option<&[ConfigValue]> {
        self.values.get(key).map(Vec::as_slice)
    }
}
