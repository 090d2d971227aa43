// SPDX-License-Identifier: MIT OR Apache-2.0

//! Integration tests for variable interpolation across stores and default chains.

mod common;

use common::{init_tracing, MockLookup};
use layercfg::prelude::*;
use std::sync::Arc;

fn application_defaults() -> ValueStore {
    let mut defaults = ValueStore::new();
    defaults.set("applicationRoot", "/home/applicationRoot");
    defaults.set("db", "${applicationRoot}/db/hypersonic");
    defaults.set("dbFailedInterpolate", "${applicationRoot2}/db/hypersonic");
    defaults
}

#[test]
fn test_interpolation_through_defaults() {
    init_tracing();
    let store = ValueStore::with_defaults(Arc::new(application_defaults()));

    assert_eq!(
        store.get_string("db").unwrap(),
        "/home/applicationRoot/db/hypersonic"
    );
}

#[test]
fn test_failed_lookup_leaves_variable_as_is() {
    let store = ValueStore::with_defaults(Arc::new(application_defaults()));

    assert_eq!(
        store.get_string("dbFailedInterpolate").unwrap(),
        "${applicationRoot2}/db/hypersonic"
    );
}

#[test]
fn test_string_array_first_entry_interpolated() {
    let mut store = ValueStore::with_defaults(Arc::new(application_defaults()));
    store.set("arrayInt", "${applicationRoot}/1");

    let array = store.get_string_array("arrayInt").unwrap();
    assert_eq!(array[0], "/home/applicationRoot/1");
}

#[test]
fn test_multiple_interpolation() {
    let mut store = ValueStore::new();
    store.set("test.base-level", "/base-level");
    store.set("test.first-level", "${test.base-level}/first-level");
    store.set("test.second-level", "${test.first-level}/second-level");
    store.set("test.third-level", "${test.second-level}/third-level");

    assert_eq!(
        store.get_string("test.third-level").unwrap(),
        "/base-level/first-level/second-level/third-level"
    );
}

#[test]
fn test_chain_spread_over_default_stores() {
    let mut grandparent = ValueStore::new();
    grandparent.set("a", "/base");
    let mut parent = ValueStore::with_defaults(Arc::new(grandparent));
    parent.set("b", "${a}/first");
    let mut store = ValueStore::with_defaults(Arc::new(parent));
    store.set("c", "${b}/second");
    store.set("d", "${c}/third");

    assert_eq!(store.get_string("d").unwrap(), "/base/first/second/third");
}

#[test]
fn test_local_value_shadows_default_during_interpolation() {
    let mut store = ValueStore::with_defaults(Arc::new(application_defaults()));
    store.set("applicationRoot", "/opt/app");

    assert_eq!(store.get_string("db").unwrap(), "/opt/app/db/hypersonic");
}

#[test]
fn test_interpolation_loop() {
    init_tracing();
    let mut store = ValueStore::new();
    store.set("test.a", "${test.b}");
    store.set("test.b", "${test.a}");

    let err = store.get_string("test.a").unwrap_err();
    assert!(err.is_circular_reference());
    let err = store.get_string("test.b").unwrap_err();
    assert!(err.is_circular_reference());
}

#[test]
fn test_self_reference() {
    let mut store = ValueStore::new();
    store.set("a", "${a}");

    assert!(matches!(
        store.get_string("a"),
        Err(ConfigError::CircularReference { .. })
    ));
}

#[test]
fn test_cycle_is_reported_even_with_default() {
    let mut store = ValueStore::new();
    store.set("a", "${a}");

    assert!(store.get_string_or("a", "fallback").is_err());
    assert!(store.get_i32_or("a", 1).is_err());
    assert_eq!(store.get_string_or("missing", "fallback").unwrap(), "fallback");
}

#[test]
fn test_cycle_leaves_store_untouched() {
    let mut store = ValueStore::new();
    store.set("a", "${b}");
    store.set("b", "${a}");
    store.set("c", "plain");

    assert!(store.get_string("a").is_err());
    assert_eq!(store.get_scalar("a").unwrap().as_str(), "${b}");
    assert_eq!(store.get_string("c").unwrap(), "plain");
}

#[test]
fn test_cycle_in_one_list_element_fails_whole_list() {
    let mut store = ValueStore::new();
    store.add("list", "ok");
    store.add("list", "${list}");

    assert!(store.get_list("list").unwrap_err().is_circular_reference());
}

#[test]
fn test_resolutions_do_not_share_state() {
    let mut store = ValueStore::new();
    store.set("a", "x");
    store.set("b", "${a}${a}");

    assert_eq!(store.resolve("${b}-${b}").unwrap(), "xx-xx");
    assert_eq!(store.resolve("${a}").unwrap(), "x");
}

#[test]
fn test_interpolator_over_custom_lookup() {
    let lookup = MockLookup::new()
        .with_value("host", "localhost")
        .with_value("url", "http://${host}:${port}/");
    let interpolator = Interpolator::new(&lookup);

    assert_eq!(
        interpolator.resolve_key("url").unwrap().unwrap(),
        "http://localhost:${port}/"
    );
}

#[test]
fn test_malformed_placeholders_copied_verbatim() {
    let mut store = ValueStore::new();
    store.set("a", "1");

    assert_eq!(store.resolve("${a").unwrap(), "${a");
    assert_eq!(store.resolve("${}").unwrap(), "${}");
    assert_eq!(store.resolve("${ a }").unwrap(), "${ a }");
    assert_eq!(store.resolve("$a {a}").unwrap(), "$a {a}");
}
