// SPDX-License-Identifier: MIT OR Apache-2.0

//! Property-based tests using proptest.
//!
//! These tests check that interpolation, value conversion and attribute
//! iteration behave for arbitrary inputs.

use layercfg::domain::config_value::split_list;
use layercfg::domain::{ConfigKey, ConfigValue};
use layercfg::prelude::*;
use proptest::prelude::*;

// Text without a placeholder opener is returned unchanged
proptest! {
    #[test]
    fn test_text_without_placeholders_is_unchanged(s in "[^$]*") {
        let mut store = ValueStore::new();
        store.set("a", "1");
        prop_assert_eq!(store.resolve(&s).unwrap(), s);
    }
}

// Placeholders for absent keys are left as they are
proptest! {
    #[test]
    fn test_unknown_placeholder_left_as_is(key in "[a-z][a-z0-9.]{0,16}") {
        let store = ValueStore::new();
        let text = format!("prefix/${{{}}}/suffix", key);
        prop_assert_eq!(store.resolve(&text).unwrap(), text);
    }
}

// A linear chain of any length resolves to the concatenation of its segments
proptest! {
    #[test]
    fn test_chain_resolves(segments in prop::collection::vec("[a-z]{1,8}", 1..12)) {
        let mut store = ValueStore::new();
        store.set("k0", format!("/{}", segments[0]));
        for (i, segment) in segments.iter().enumerate().skip(1) {
            store.set(format!("k{}", i), format!("${{k{}}}/{}", i - 1, segment));
        }

        let expected: String = segments.iter().map(|s| format!("/{}", s)).collect();
        let last = format!("k{}", segments.len() - 1);
        prop_assert_eq!(store.get_string(&last).unwrap(), expected);
    }
}

// A ring of references of any length is always reported as a cycle
proptest! {
    #[test]
    fn test_ring_is_circular(len in 1usize..10, start in 0usize..10) {
        let mut store = ValueStore::new();
        for i in 0..len {
            store.set(format!("r{}", i), format!("x${{r{}}}", (i + 1) % len));
        }

        let key = format!("r{}", start % len);
        let err = store.get_string(&key).unwrap_err();
        prop_assert!(err.is_circular_reference());
    }
}

// Test that ConfigKey can be created from any string
proptest! {
    #[test]
    fn test_config_key_from_any_string(s in "\\PC*") {
        let key = ConfigKey::from(s.clone());
        prop_assert_eq!(key.as_str(), s.as_str());
    }
}

// Test integer parsing tolerates surrounding whitespace
proptest! {
    #[test]
    fn test_i64_parsing_trimmed(n in prop::num::i64::ANY) {
        let value = ConfigValue::from(format!("  {} ", n));
        prop_assert_eq!(value.as_i64("test").unwrap(), n);
    }
}

// Test boolean parsing with known valid values
proptest! {
    #[test]
    fn test_bool_parsing_valid_values(b in prop::bool::ANY) {
        let value_str = if b { "true" } else { "false" };
        let value = ConfigValue::from(value_str);
        prop_assert_eq!(value.as_bool("test").unwrap(), b);
    }
}

// Splitting a joined list restores its items
proptest! {
    #[test]
    fn test_split_list_restores_items(items in prop::collection::vec("[a-z0-9]{1,6}", 1..8)) {
        let joined = items.join(", ");
        prop_assert_eq!(split_list(&joined, ','), items);
    }
}

// The wildcard visits every attribute, in declaration order
proptest! {
    #[test]
    fn test_wildcard_visits_every_attribute(
        names in prop::collection::btree_set("[a-z]{1,6}", 0..10)
    ) {
        let mut builder = ConfigurationNode::builder("node");
        for name in &names {
            builder = builder.attribute(name.as_str(), "v");
        }
        let pointer = NodePointer::root(builder.build());

        let visited: Vec<String> = pointer
            .attributes(&AttributePattern::all())
            .map(|attr| attr.name().to_string())
            .collect();
        let expected: Vec<String> = names.iter().cloned().collect();
        prop_assert_eq!(visited, expected);
    }
}

// A namespaced pattern never matches
proptest! {
    #[test]
    fn test_namespaced_pattern_matches_nothing(
        names in prop::collection::btree_set("[a-z]{1,6}", 0..10),
        prefix in "[a-z]{1,4}"
    ) {
        let mut builder = ConfigurationNode::builder("node");
        for name in &names {
            builder = builder.attribute(name.as_str(), "v");
        }
        let pointer = NodePointer::root(builder.build());

        let mut it = pointer.attributes(&AttributePattern::all().with_namespace(&prefix));
        prop_assert!(!it.advance());
        prop_assert!(it.current().is_none());
    }
}
