// SPDX-License-Identifier: MIT OR Apache-2.0

//! Name patterns used to select attributes and children during tree traversal.
//!
//! A pattern is a qualified name: an optional namespace prefix and a local name that
//! is either a literal or the wildcard `*`. Configuration nodes have no namespaces,
//! so any pattern that names one matches nothing.

use std::fmt;

/// The wildcard that matches every name.
pub const WILDCARD: &str = "*";

/// The local-name part of a pattern.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum NamePattern {
    /// Matches every name (`*`).
    Any,
    /// Matches exactly this name.
    Exact(String),
}

impl NamePattern {
    /// Returns `true` if `name` satisfies this pattern.
    pub fn matches(&self, name: &str) -> bool {
        match self {
            NamePattern::Any => true,
            NamePattern::Exact(expected) => expected == name,
        }
    }
}

impl From<&str> for NamePattern {
    fn from(name: &str) -> Self {
        if name == WILDCARD {
            NamePattern::Any
        } else {
            NamePattern::Exact(name.to_string())
        }
    }
}

impl fmt::Display for NamePattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NamePattern::Any => f.write_str(WILDCARD),
            NamePattern::Exact(name) => f.write_str(name),
        }
    }
}

/// A name plus namespace filter for attributes.
///
/// # Examples
///
/// ```
/// use layercfg::domain::AttributePattern;
///
/// assert!(AttributePattern::all().matches("anything"));
/// assert!(AttributePattern::named("test").matches("test"));
/// assert!(!AttributePattern::named("test").matches("other"));
///
/// // Namespaces are not supported, so they never match.
/// let namespaced: AttributePattern = "test:*".parse().unwrap();
/// assert!(!namespaced.matches("anything"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AttributePattern {
    namespace: Option<String>,
    name: NamePattern,
}

impl AttributePattern {
    /// Creates a pattern from its parts. An empty namespace counts as none.
    pub fn new(namespace: Option<&str>, name: NamePattern) -> Self {
        Self {
            namespace: namespace.filter(|ns| !ns.is_empty()).map(str::to_string),
            name,
        }
    }

    /// A pattern matching every attribute.
    pub fn all() -> Self {
        Self::new(None, NamePattern::Any)
    }

    /// A pattern matching only the attribute `name`.
    pub fn named(name: &str) -> Self {
        Self::new(None, NamePattern::from(name))
    }

    /// Returns a copy of this pattern restricted to `namespace`.
    pub fn with_namespace(mut self, namespace: &str) -> Self {
        self.namespace = Some(namespace.to_string()).filter(|ns| !ns.is_empty());
        self
    }

    /// The namespace prefix, if any.
    pub fn namespace(&self) -> Option<&str> {
        self.namespace.as_deref()
    }

    /// The local-name component.
    pub fn name(&self) -> &NamePattern {
        &self.name
    }

    /// Decides whether the attribute `attribute_name` qualifies.
    pub fn matches(&self, attribute_name: &str) -> bool {
        self.namespace.is_none() && self.name.matches(attribute_name)
    }
}

impl std::str::FromStr for AttributePattern {
    type Err = std::convert::Infallible;

    /// Parses `name`, `*` or `prefix:name`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.split_once(':') {
            Some((prefix, local)) => Self::new(Some(prefix), NamePattern::from(local)),
            None => Self::new(None, NamePattern::from(s)),
        })
    }
}

impl fmt::Display for AttributePattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.namespace {
            Some(ns) => write!(f, "{}:{}", ns, self.name),
            None => write!(f, "{}", self.name),
        }
    }
}
