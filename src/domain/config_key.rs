// SPDX-License-Identifier: MIT OR Apache-2.0

//! Dotted configuration keys.
//!
//! Keys are hierarchical paths such as `database.connection.host`. The segments are
//! separated by `.`; the key itself is stored as a single string so that lookups by
//! `&str` work directly against maps keyed by [`ConfigKey`].

use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;

/// The separator between the segments of a dotted key.
pub const KEY_SEPARATOR: char = '.';

/// A dotted configuration key.
///
/// # Examples
///
/// ```
/// use layercfg::domain::ConfigKey;
///
/// let key = ConfigKey::from("database.host");
/// assert_eq!(key.segments().collect::<Vec<_>>(), vec!["database", "host"]);
/// assert_eq!(key.strip_prefix("database").unwrap().as_str(), "host");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ConfigKey(String);

impl ConfigKey {
    /// Creates a new `ConfigKey` from a `String`.
    pub fn new(key: String) -> Self {
        ConfigKey(key)
    }

    /// Returns the key as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Iterates over the dot-separated segments of the key.
    pub fn segments(&self) -> impl Iterator<Item = &str> {
        self.0.split(KEY_SEPARATOR)
    }

    /// Appends a segment, producing `self.segment`.
    ///
    /// An empty key yields the segment alone.
    pub fn child(&self, segment: &str) -> ConfigKey {
        if self.0.is_empty() {
            ConfigKey::from(segment)
        } else {
            ConfigKey(format!("{}{}{}", self.0, KEY_SEPARATOR, segment))
        }
    }

    /// Returns the remainder of this key below `prefix`.
    ///
    /// Only whole segments match: `db.host` is below `db`, `dbx.host` is not, and
    /// `db` itself has no remainder.
    pub fn strip_prefix(&self, prefix: &str) -> Option<ConfigKey> {
        self.0
            .strip_prefix(prefix)
            .and_then(|rest| rest.strip_prefix(KEY_SEPARATOR))
            .filter(|rest| !rest.is_empty())
            .map(ConfigKey::from)
    }
}

impl From<String> for ConfigKey {
    fn from(s: String) -> Self {
        ConfigKey(s)
    }
}

impl From<&str> for ConfigKey {
    fn from(s: &str) -> Self {
        ConfigKey(s.to_string())
    }
}

impl From<ConfigKey> for String {
    fn from(key: ConfigKey) -> Self {
        key.0
    }
}

impl AsRef<str> for ConfigKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for ConfigKey {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ConfigKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    #[test]
    fn test_config_key_display() {
        let key = ConfigKey::from("test.key");
        assert_eq!(format!("{}", key), "test.key");
    }

    #[test]
    fn test_config_key_borrow_lookup() {
        let mut map = BTreeMap::new();
        map.insert(ConfigKey::from("test.key"), "value1");

        assert_eq!(map.get("test.key"), Some(&"value1"));
        assert_eq!(map.get("other.key"), None);
    }

    #[test]
    fn test_config_key_ordering() {
        let mut keys = vec![
            ConfigKey::from("b.key"),
            ConfigKey::from("a.key"),
            ConfigKey::from("a"),
        ];
        keys.sort();
        assert_eq!(keys[0].as_str(), "a");
        assert_eq!(keys[1].as_str(), "a.key");
        assert_eq!(keys[2].as_str(), "b.key");
    }

    #[test]
    fn test_segments() {
        let key = ConfigKey::from("database.connection.host");
        let segments: Vec<_> = key.segments().collect();
        assert_eq!(segments, vec!["database", "connection", "host"]);
    }

    #[test]
    fn test_child() {
        assert_eq!(ConfigKey::from("db").child("host").as_str(), "db.host");
        assert_eq!(ConfigKey::from("").child("host").as_str(), "host");
    }

    #[test]
    fn test_strip_prefix_whole_segments_only() {
        let key = ConfigKey::from("prop.string");
        assert_eq!(key.strip_prefix("prop").unwrap().as_str(), "string");
        assert!(key.strip_prefix("pro").is_none());
        assert!(ConfigKey::from("prop").strip_prefix("prop").is_none());
        assert!(ConfigKey::from("prop.").strip_prefix("prop").is_none());
    }

    #[test]
    fn test_string_from_config_key() {
        let key = ConfigKey::from("test.key");
        let s: String = key.into();
        assert_eq!(s, "test.key");
    }

    #[test]
    fn test_config_key_empty() {
        let key = ConfigKey::from("");
        assert_eq!(key.as_str(), "");
        assert_eq!(key.segments().count(), 1);
    }
}
