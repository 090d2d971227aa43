// SPDX-License-Identifier: MIT OR Apache-2.0

//! Variable interpolation for configuration values.
//!
//! A value may reference other keys with `${key}` placeholders. The [`Interpolator`]
//! replaces each placeholder whose key can be looked up with that key's own fully
//! interpolated value, then rescans the whole string, until a scan finds nothing
//! more to substitute.
//!
//! Placeholders whose key is absent stay in the output verbatim, as do unterminated
//! or malformed ones. A key whose value leads back to itself, directly or through
//! other keys, fails the whole resolution with
//! [`ConfigError::CircularReference`].

use crate::domain::{ConfigError, Result};
use crate::ports::ValueLookup;
use std::collections::HashSet;

/// Opening delimiter of a placeholder.
pub const PLACEHOLDER_START: &str = "${";
/// Closing delimiter of a placeholder.
pub const PLACEHOLDER_END: char = '}';

/// Keys currently being resolved during one top-level resolution.
///
/// A fresh context is created for every top-level call and dropped when it returns,
/// so concurrent resolutions never see each other's keys.
#[derive(Debug, Default)]
pub struct InterpolationContext {
    in_progress: Vec<String>,
}

impl InterpolationContext {
    /// Creates an empty context.
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks `key` as being resolved.
    ///
    /// Fails with `CircularReference` if `key` is already being resolved.
    pub fn enter(&mut self, key: &str) -> Result<()> {
        if self.is_resolving(key) {
            let mut chain = self.in_progress.clone();
            chain.push(key.to_string());
            tracing::debug!(key, chain = %chain.join(" -> "), "circular reference detected");
            return Err(ConfigError::CircularReference {
                key: key.to_string(),
                chain,
            });
        }
        self.in_progress.push(key.to_string());
        Ok(())
    }

    /// Marks the innermost key as resolved.
    pub fn leave(&mut self) {
        self.in_progress.pop();
    }

    /// Returns `true` if `key` is currently being resolved.
    pub fn is_resolving(&self, key: &str) -> bool {
        self.in_progress.iter().any(|k| k == key)
    }

    /// Number of keys currently being resolved.
    pub fn depth(&self) -> usize {
        self.in_progress.len()
    }
}

/// A `${key}` occurrence in a string, as byte offsets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Placeholder<'t> {
    start: usize,
    end: usize,
    key: &'t str,
}

/// Finds the first well-formed placeholder at or after byte offset `from`.
fn find_placeholder(text: &str, from: usize) -> Option<Placeholder<'_>> {
    let mut search = from;
    while let Some(offset) = text[search..].find(PLACEHOLDER_START) {
        let start = search + offset;
        let key_start = start + PLACEHOLDER_START.len();
        // without a closing brace nothing after this point can be a placeholder
        let end = key_start + text[key_start..].find(PLACEHOLDER_END)?;
        let key = &text[key_start..end];
        if is_placeholder_key(key) {
            return Some(Placeholder {
                start,
                end: end + 1,
                key,
            });
        }
        search = key_start;
    }
    None
}

fn is_placeholder_key(key: &str) -> bool {
    !key.is_empty()
        && !key
            .chars()
            .any(|c| c.is_whitespace() || matches!(c, '$' | '{' | '}'))
}

/// Resolves `${key}` placeholders against a [`ValueLookup`].
///
/// # Examples
///
/// ```rust
/// use layercfg::service::{Interpolator, ValueStore};
///
/// let mut store = ValueStore::new();
/// store.set("app.root", "/srv/app");
/// store.set("app.data", "${app.root}/data");
///
/// let interpolator = Interpolator::new(&store);
/// assert_eq!(interpolator.resolve("${app.data}/db").unwrap(), "/srv/app/data/db");
/// assert_eq!(interpolator.resolve("${missing}/db").unwrap(), "${missing}/db");
/// ```
#[derive(Debug)]
pub struct Interpolator<'a, L: ValueLookup + ?Sized> {
    lookup: &'a L,
}

impl<'a, L: ValueLookup + ?Sized> Interpolator<'a, L> {
    /// Creates an interpolator reading from `lookup`.
    pub fn new(lookup: &'a L) -> Self {
        Self { lookup }
    }

    /// Resolves every placeholder in `text`.
    pub fn resolve(&self, text: &str) -> Result<String> {
        let mut context = InterpolationContext::new();
        self.resolve_in(text, &mut context)
    }

    /// Resolves `raw`, the value stored under `key`.
    ///
    /// `key` counts as being resolved, so a value that references its own key is
    /// reported as a circular reference.
    pub fn resolve_entry(&self, key: &str, raw: &str) -> Result<String> {
        let mut context = InterpolationContext::new();
        context.enter(key)?;
        let resolved = self.resolve_in(raw, &mut context)?;
        context.leave();
        Ok(resolved)
    }

    /// Resolves the scalar value of `key`, or returns `None` if it is absent.
    pub fn resolve_key(&self, key: &str) -> Result<Option<String>> {
        match self.lookup.lookup_scalar(key) {
            Some(raw) => self.resolve_entry(key, raw.as_str()).map(Some),
            None => Ok(None),
        }
    }

    fn resolve_in(&self, text: &str, context: &mut InterpolationContext) -> Result<String> {
        let mut current = text.to_string();
        let mut seen = HashSet::new();
        while let Some((key, next)) = self.substitute_first(&current, context)? {
            // a rescan that reproduces an earlier string would never settle
            if !seen.insert(next.clone()) {
                let mut chain: Vec<String> = Vec::with_capacity(context.depth() + 1);
                chain.extend(context.in_progress.iter().cloned());
                chain.push(key.clone());
                return Err(ConfigError::CircularReference { key, chain });
            }
            current = next;
        }
        Ok(current)
    }

    /// Substitutes the first resolvable placeholder and returns its key and the new
    /// string, or `None` if no placeholder in `text` can be resolved.
    fn substitute_first(
        &self,
        text: &str,
        context: &mut InterpolationContext,
    ) -> Result<Option<(String, String)>> {
        let mut from = 0;
        while let Some(placeholder) = find_placeholder(text, from) {
            let Some(raw) = self.lookup.lookup_scalar(placeholder.key) else {
                tracing::trace!(key = placeholder.key, "unresolved placeholder left as is");
                from = placeholder.end;
                continue;
            };

            context.enter(placeholder.key)?;
            let value = self.resolve_in(raw.as_str(), context)?;
            context.leave();

            tracing::trace!(key = placeholder.key, value = %value, "substituted placeholder");
            let mut substituted =
                String::with_capacity(text.len() - (placeholder.end - placeholder.start) + value.len());
            substituted.push_str(&text[..placeholder.start]);
            substituted.push_str(&value);
            substituted.push_str(&text[placeholder.end..]);
            return Ok(Some((placeholder.key.to_string(), substituted)));
        }
        Ok(None)
    }
}
