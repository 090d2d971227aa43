// SPDX-License-Identifier: MIT OR Apache-2.0

//! Domain layer containing core types.
//!
//! This module contains the core domain types of the crate: keys and values of the
//! flat store, the immutable configuration tree, attribute patterns, and errors.
//! It is independent of any external concerns.

pub mod config_key;
pub mod config_value;
pub mod errors;
pub mod node;
pub mod pattern;

// Re-export commonly used types
pub use config_key::ConfigKey;
pub use config_value::ConfigValue;
pub use errors::{ConfigError, Result};
pub use node::{ConfigurationNode, NodeBuilder};
pub use pattern::{AttributePattern, NamePattern};
