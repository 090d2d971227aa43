// SPDX-License-Identifier: MIT OR Apache-2.0

//! Basic usage example for layercfg.
//!
//! This example demonstrates:
//! - Layering a store over a default store
//! - Interpolating `${key}` placeholders across layers
//! - Typed getters with defaults and list values
//! - Reporting circular references
//! - Iterating over the attributes of a configuration node
//!
//! To run this example:
//! ```bash
//! cargo run --example basic_usage
//! ```

use layercfg::prelude::*;
use std::sync::Arc;

fn main() -> Result<()> {
    // Initialize tracing subscriber for logging
    tracing_subscriber::fmt::init();

    println!("=== layercfg: Basic Usage ===\n");

    // Example 1: Defaults and interpolation
    println!("--- Example 1: Layered Stores ---");
    let defaults = ValueStore::builder()
        .value("app.root", "/srv/app")
        .value("app.data", "${app.root}/data")
        .value("app.port", "8080")
        .build();

    let mut store = ValueStore::with_defaults(Arc::new(defaults));
    store.set("app.root", "/opt/app");
    store.set("app.hosts", "a.example.com, b.example.com");

    println!("app.data  = {}", store.get_string("app.data")?);
    println!("app.port  = {}", store.get_i32("app.port")?);
    println!("app.debug = {}", store.get_bool_or("app.debug", false)?);
    println!("app.hosts = {:?}", store.get_list("app.hosts")?);

    // Example 2: Circular references
    println!("\n--- Example 2: Circular References ---");
    store.set("loop.a", "${loop.b}");
    store.set("loop.b", "${loop.a}");
    match store.get_string("loop.a") {
        Ok(value) => println!("unexpected value: {}", value),
        Err(e) => println!("✗ {}", e),
    }

    // Example 3: Attribute iteration
    println!("\n--- Example 3: Attribute Iteration ---");
    let server = ConfigurationNode::builder("server")
        .attribute("host", "localhost")
        .attribute("port", "8080")
        .child(ConfigurationNode::new("timeout").with_value("30"))
        .build();
    let pointer = NodePointer::root(server);

    let mut attributes = pointer.attributes(&AttributePattern::all());
    while attributes.advance() {
        if let Some(attr) = attributes.current() {
            println!(
                "{} = {}",
                attr.path(),
                attr.value().unwrap_or_default()
            );
        }
    }

    let namespaced: AttributePattern = "ns:*".parse().unwrap_or_else(|never| match never {});
    println!(
        "attributes matching {}: {}",
        namespaced,
        pointer.attributes(&namespaced).count()
    );

    println!("\n=== Example Complete ===");
    Ok(())
}
