// SPDX-License-Identifier: MIT OR Apache-2.0

//! Value lookup trait definition.
//!
//! This module defines the `ValueLookup` trait, the read-only surface that the
//! interpolator needs from whatever holds configuration values.

use crate::domain::ConfigValue;

/// Read access to keyed configuration values.
///
/// Implementations decide where values come from, including any fallback chain.
/// Lookups must not mutate the implementor.
///
/// # Examples
///
/// ```rust
/// use layercfg::domain::ConfigValue;
/// use layercfg::ports::ValueLookup;
/// use std::collections::HashMap;
///
/// struct MapLookup(HashMap<String, Vec<ConfigValue>>);
///
/// impl ValueLookup for MapLookup {
///     fn lookup_sequence(&self, key: &str) -> Option<&[ConfigValue]> {
///         self.0.get(key).map(Vec::as_slice)
///     }
/// }
///
/// let mut values = HashMap::new();
/// values.insert(
///     "colors".to_string(),
///     vec![ConfigValue::from("red"), ConfigValue::from("blue")],
/// );
/// let lookup = MapLookup(values);
///
/// assert_eq!(lookup.lookup_scalar("colors").unwrap().as_str(), "red");
/// assert!(lookup.lookup_scalar("missing").is_none());
/// ```
pub trait ValueLookup {
    /// Returns every value stored for `key`, or `None` if the key is absent.
    ///
    /// A present key always has at least one value.
    fn lookup_sequence(&self, key: &str) -> Option<&[ConfigValue]>;

    /// Returns the first value stored for `key`.
    ///
    /// Multi-valued keys collapse to their first element.
    fn lookup_scalar(&self, key: &str) -> Option<&ConfigValue> {
        self.lookup_sequence(key).and_then(<[ConfigValue]>::first)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FixedLookup {
        values: Vec<ConfigValue>,
    }

    impl ValueLookup for FixedLookup {
        fn lookup_sequence(&self, key: &str) -> Option<&[ConfigValue]> {
            (key == "fixed").then_some(self.values.as_slice())
        }
    }

    #[test]
    fn test_scalar_collapses_to_first() {
        let lookup = FixedLookup {
            values: vec![ConfigValue::from("1"), ConfigValue::from("2")],
        };
        assert_eq!(lookup.lookup_scalar("fixed"), Some(&ConfigValue::from("1")));
        assert_eq!(lookup.lookup_sequence("fixed").unwrap().len(), 2);
    }

    #[test]
    fn test_missing_key() {
        let lookup = FixedLookup { values: vec![] };
        assert!(lookup.lookup_scalar("other").is_none());
        assert!(lookup.lookup_sequence("other").is_none());
    }
}
