// SPDX-License-Identifier: MIT OR Apache-2.0

//! YAML parser adapter.
//!
//! Flattens a YAML document into dotted keys for a
//! [`ValueStore`](crate::service::ValueStore). Only in-memory text is handled;
//! reading files is left to the caller.

use crate::domain::{ConfigError, ConfigKey, Result};
use crate::ports::{ConfigParser, ParsedEntry};
use serde_yaml::Value;

/// YAML parser implementation.
///
/// Nested mappings become dotted keys. A sequence of scalars becomes one
/// multi-valued key; sequence elements that are themselves mappings or sequences
/// are addressed by index (`servers.0.host`). `null` becomes the empty string.
///
/// # Examples
///
/// ```rust
/// use layercfg::adapters::YamlParser;
/// use layercfg::service::ValueStore;
///
/// let yaml = "app:\n  root: /srv\n  dirs: [\"${app.root}/a\", b]\n";
/// let mut store = ValueStore::new();
/// store.load(&YamlParser::new(), yaml).unwrap();
///
/// assert_eq!(store.get_list("app.dirs").unwrap(), vec!["/srv/a", "b"]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct YamlParser;

impl YamlParser {
    /// Creates a new YAML parser.
    pub fn new() -> Self {
        YamlParser
    }

    fn flatten(value: &Value, prefix: &ConfigKey, entries: &mut Vec<ParsedEntry>) {
        match value {
            Value::Mapping(map) => {
                for (key, val) in map {
                    if let Some(key) = scalar_text(key) {
                        Self::flatten(val, &prefix.child(&key), entries);
                    }
                }
            }
            Value::Sequence(seq) => {
                let mut scalars = Vec::new();
                for (index, item) in seq.iter().enumerate() {
                    match scalar_text(item) {
                        Some(text) => scalars.push(text),
                        None => Self::flatten(item, &prefix.child(&index.to_string()), entries),
                    }
                }
                if !scalars.is_empty() {
                    entries.push((String::from(prefix.clone()), scalars));
                }
            }
            Value::Tagged(tagged) => Self::flatten(&tagged.value, prefix, entries),
            scalar => {
                if let Some(text) = scalar_text(scalar) {
                    entries.push((String::from(prefix.clone()), vec![text]));
                }
            }
        }
    }
}

fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Null => Some(String::new()),
        Value::Tagged(tagged) => scalar_text(&tagged.value),
        Value::Sequence(_) | Value::Mapping(_) => None,
    }
}

impl ConfigParser for YamlParser {
    fn parse(&self, content: &str) -> Result<Vec<ParsedEntry>> {
        let value: Value = serde_yaml::from_str(content).map_err(|e| ConfigError::ParseError {
            message: format!("Failed to parse YAML: {}", e),
            source: Some(Box::new(e)),
        })?;

        match value {
            Value::Null => Ok(Vec::new()),
            Value::Mapping(_) => {
                let mut entries = Vec::new();
                Self::flatten(&value, &ConfigKey::new(String::new()), &mut entries);
                Ok(entries)
            }
            _ => Err(ConfigError::parse("YAML document must be a mapping")),
        }
    }
}
