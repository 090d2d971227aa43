// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration parser trait definition.
//!
//! This module defines the `ConfigParser` trait, which turns structured text into
//! the flat, possibly multi-valued entries held by a
//! [`ValueStore`](crate::service::ValueStore).

use crate::domain::Result;

/// One parsed entry: a dotted key and its values in document order.
pub type ParsedEntry = (String, Vec<String>);

/// A trait for parsing configuration text.
///
/// # Key Format
///
/// Parsers should flatten nested structures using dot notation. For example,
/// a YAML structure like:
///
/// ```yaml
/// database:
///   host: localhost
///   replicas: [a, b]
/// ```
///
/// Should be parsed into:
/// - `database.host` -> `["localhost"]`
/// - `database.replicas` -> `["a", "b"]`
///
/// # Examples
///
/// ```rust
/// use layercfg::domain::Result;
/// use layercfg::ports::{ConfigParser, ParsedEntry};
///
/// struct LineParser;
///
/// impl ConfigParser for LineParser {
///     fn parse(&self, content: &str) -> Result<Vec<ParsedEntry>> {
///         Ok(content
///             .lines()
///             .filter_map(|line| line.split_once('='))
///             .map(|(k, v)| (k.trim().to_string(), vec![v.trim().to_string()]))
///             .collect())
///     }
/// }
///
/// let entries = LineParser.parse("a = 1\nb = 2").unwrap();
/// assert_eq!(entries[1], ("b".to_string(), vec!["2".to_string()]));
/// ```
pub trait ConfigParser {
    /// Parses configuration content into flat entries.
    ///
    /// Each key appears at most once; multi-valued keys carry all their values in
    /// a single entry.
    fn parse(&self, content: &str) -> Result<Vec<ParsedEntry>>;
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FlatteningParser;

    impl ConfigParser for FlatteningParser {
        fn parse(&self, _content: &str) -> Result<Vec<ParsedEntry>> {
            Ok(vec![
                ("database.host".to_string(), vec!["localhost".to_string()]),
                (
                    "database.replicas".to_string(),
                    vec!["a".to_string(), "b".to_string()],
                ),
            ])
        }
    }

    #[test]
    fn test_flattening_parser() {
        let result = FlatteningParser.parse("").unwrap();
        assert_eq!(result.len(), 2);
        assert_eq!(result[1].1, vec!["a".to_string(), "b".to_string()]);
    }

    #[test]
    fn test_parser_as_trait_object() {
        let parsers: Vec<Box<dyn ConfigParser>> = vec![Box::new(FlatteningParser)];
        let total: usize = parsers.iter().map(|p| p.parse("").unwrap().len()).sum();
        assert_eq!(total, 2);
    }
}
