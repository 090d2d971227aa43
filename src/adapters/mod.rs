// SPDX-License-Identifier: MIT OR Apache-2.0

//! Adapters layer containing parser implementations.
//!
//! Each adapter implements a port from the ports layer for a specific format.

#[cfg(feature = "yaml")]
pub mod yaml;

// Re-export adapters based on feature flags
#[cfg(feature = "yaml")]
pub use yaml::YamlParser;
