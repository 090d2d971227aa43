// SPDX-License-Identifier: MIT OR Apache-2.0

//! Ports layer containing trait definitions.
//!
//! This module contains the interfaces between the core and its collaborators:
//! value lookup for the interpolator, positional iteration for tree-query engines,
//! and parsing for loaders. Implementations live in the service, tree and adapters
//! layers.

pub mod iterator;
pub mod lookup;
pub mod parser;

// Re-export commonly used types
pub use iterator::{NodeHandle, NodeIterator};
pub use lookup::ValueLookup;
pub use parser::{ConfigParser, ParsedEntry};
