// SPDX-License-Identifier: MIT OR Apache-2.0

//! Layered configuration with variable interpolation and tree navigation.
//!
//! This crate provides two complementary views of configuration data:
//!
//! - a flat [`ValueStore`](service::ValueStore) mapping dotted keys to one or more
//!   values, optionally backed by a chain of default stores, whose getters resolve
//!   `${key}` placeholders recursively and report reference cycles;
//! - an immutable [`ConfigurationNode`](domain::ConfigurationNode) tree with
//!   positional iterators over attributes and children, suitable as the model of a
//!   path-stepping query engine.
//!
//! # Architecture
//!
//! - **Domain Layer**: Core types (`ConfigKey`, `ConfigValue`, `ConfigurationNode`,
//!   `AttributePattern`, errors)
//! - **Ports**: Trait definitions (`ValueLookup`, `NodeIterator`, `NodeHandle`,
//!   `ConfigParser`)
//! - **Service**: The value store and the interpolation engine
//! - **Tree**: Node pointers and attribute/child iterators
//! - **Adapters**: Parser implementations (YAML)
//!
//! # Feature Flags
//!
//! - `yaml`: Enable the YAML parser (default)
//! - `full`: Enable all features
//!
//! # Quick Start
//!
//! ```rust
//! use layercfg::prelude::*;
//!
//! # fn main() -> Result<()> {
//! let mut store = ValueStore::new();
//! store.set("test.base-level", "/base-level");
//! store.set("test.first-level", "${test.base-level}/first-level");
//! store.set("test.loop", "${test.loop}");
//!
//! assert_eq!(store.get_string("test.first-level")?, "/base-level/first-level");
//! assert!(store.get_string("test.loop").unwrap_err().is_circular_reference());
//!
//! let node = ConfigurationNode::builder("org")
//!     .attribute("name", "apache")
//!     .attribute("test", "yes")
//!     .build();
//! let attrs = NodePointer::root(node).attributes(&AttributePattern::named("test"));
//! assert_eq!(attrs.count(), 1);
//! # Ok(())
//! # }
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![warn(clippy::all)]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod service;
pub mod tree;

/// Commonly used types and traits.
///
/// This module re-exports the most commonly used types and traits for convenient access.
pub mod prelude {
    pub use crate::domain::{
        AttributePattern, ConfigError, ConfigKey, ConfigValue, ConfigurationNode, NamePattern,
        Result,
    };
    pub use crate::ports::{ConfigParser, NodeHandle, NodeIterator, ValueLookup};
    pub use crate::service::{Interpolator, ValueStore, ValueStoreBuilder};
    pub use crate::tree::{AttributeIterator, AttributePointer, ChildIterator, NodePointer};

    // Re-export adapters based on feature flags
    #[cfg(feature = "yaml")]
    pub use crate::adapters::YamlParser;
}
