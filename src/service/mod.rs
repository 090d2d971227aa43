// SPDX-License-Identifier: MIT OR Apache-2.0

//! Service layer containing the value store and its interpolation engine.
//!
//! [`ValueStore`] is the main entry point for flat, keyed configuration. Its string
//! and typed getters run values through the [`Interpolator`].

pub mod interpolator;
pub mod value_store;

// Re-export commonly used types
pub use interpolator::{InterpolationContext, Interpolator};
pub use value_store::{ValueStore, ValueStoreBuilder, DEFAULT_LIST_DELIMITER};
