// SPDX-License-Identifier: MIT OR Apache-2.0

//! Layered value store.
//!
//! A [`ValueStore`] maps dotted keys to one or more values. It may be linked to a
//! default store that is consulted whenever a key is missing locally; a local key
//! always shadows the same key in the defaults. Reads through the typed getters
//! interpolate `${key}` placeholders against the store and its defaults.

use crate::domain::config_value::split_list;
use crate::domain::{ConfigError, ConfigKey, ConfigValue, Result};
use crate::ports::{ConfigParser, ValueLookup};
use crate::service::interpolator::Interpolator;
use std::collections::{BTreeMap, BTreeSet};
use std::str::FromStr;
use std::sync::Arc;

/// Separator between the `name=value` pairs of a property map value.
const PROPERTY_SEPARATOR: char = ',';

/// Delimiter a new store splits values on.
pub const DEFAULT_LIST_DELIMITER: char = ',';

/// A flat, layered store of configuration values.
///
/// Mutating operations only ever touch the store's own entries; the default store
/// is shared and read-only. Values passed to `set`/`add` are split on unescaped
/// [`DEFAULT_LIST_DELIMITER`]s unless the store was built with
/// [`no_list_delimiter`](ValueStoreBuilder::no_list_delimiter). There is no internal locking: a store has one writer,
/// and it must not be mutated while values are being resolved.
///
/// # Examples
///
/// ```rust
/// use layercfg::service::ValueStore;
/// use std::sync::Arc;
///
/// # fn main() -> layercfg::domain::Result<()> {
/// let mut defaults = ValueStore::new();
/// defaults.set("app.root", "/srv/app");
/// defaults.set("shared", "x");
///
/// let mut store = ValueStore::with_defaults(Arc::new(defaults));
/// store.set("app.db", "${app.root}/db");
///
/// assert_eq!(store.get_string("app.db")?, "/srv/app/db");
/// assert_eq!(store.get_string("shared")?, "x");
///
/// store.set("shared", "y");
/// assert_eq!(store.get_string("shared")?, "y");
/// assert_eq!(store.defaults().unwrap().get_string("shared")?, "x");
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct ValueStore {
    /// Local entries; every present key holds at least one value
    entries: BTreeMap<ConfigKey, Vec<ConfigValue>>,
    /// Store consulted for keys missing locally
    defaults: Option<Arc<ValueStore>>,
    /// Delimiter used to split values on `set`/`add`, if any
    list_delimiter: Option<char>,
}

impl Default for ValueStore {
    fn default() -> Self {
        Self {
            entries: BTreeMap::new(),
            defaults: None,
            list_delimiter: Some(DEFAULT_LIST_DELIMITER),
        }
    }
}

impl ValueStore {
    /// Creates an empty store without defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty store that falls back to `defaults`.
    pub fn with_defaults(defaults: Arc<ValueStore>) -> Self {
        Self {
            defaults: Some(defaults),
            ..Self::default()
        }
    }

    /// Creates a new store builder.
    pub fn builder() -> ValueStoreBuilder {
        ValueStoreBuilder::new()
    }

    /// The default store, if one is linked.
    pub fn defaults(&self) -> Option<&Arc<ValueStore>> {
        self.defaults.as_ref()
    }

    /// The delimiter used to split values into lists, if any.
    pub fn list_delimiter(&self) -> Option<char> {
        self.list_delimiter
    }

    /// Returns the raw values of `key`, falling back to the default chain.
    pub fn get(&self, key: &str) -> Option<&[ConfigValue]> {
        match self.entries.get(key) {
            Some(values) => Some(values.as_slice()),
            None => {
                let defaults = self.defaults.as_deref()?;
                tracing::trace!(key, "key missing locally, consulting defaults");
                defaults.get(key)
            }
        }
    }

    /// Returns the first raw value of `key`.
    pub fn get_scalar(&self, key: &str) -> Result<ConfigValue> {
        self.get(key)
            .and_then(<[ConfigValue]>::first)
            .cloned()
            .ok_or_else(|| not_found(key))
    }

    /// Returns the first raw value of `key`, or `default` if it is absent.
    pub fn get_scalar_or(&self, key: &str, default: impl Into<ConfigValue>) -> ConfigValue {
        self.get_scalar(key).unwrap_or_else(|_| default.into())
    }

    /// Returns `true` if `key` is present locally or in the defaults.
    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// All visible keys, including those only present in the defaults, in order.
    pub fn keys(&self) -> Vec<ConfigKey> {
        let mut keys = BTreeSet::new();
        self.collect_keys(&mut keys);
        keys.into_iter().collect()
    }

    fn collect_keys(&self, keys: &mut BTreeSet<ConfigKey>) {
        keys.extend(self.entries.keys().cloned());
        if let Some(defaults) = &self.defaults {
            defaults.collect_keys(keys);
        }
    }

    /// Number of local entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the store has no local entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Replaces the values of `key` with `value`.
    pub fn set(&mut self, key: impl Into<ConfigKey>, value: impl Into<String>) {
        let values = self.split(value.into());
        self.entries.insert(key.into(), values);
    }

    /// Appends `value` to the values of `key`.
    pub fn add(&mut self, key: impl Into<ConfigKey>, value: impl Into<String>) {
        let values = self.split(value.into());
        self.entries.entry(key.into()).or_default().extend(values);
    }

    /// Removes `key` from this store. Returns `true` if it was present.
    ///
    /// A value for `key` in the defaults becomes visible again.
    pub fn clear(&mut self, key: &str) -> bool {
        self.entries.remove(key).is_some()
    }

    fn split(&self, value: String) -> Vec<ConfigValue> {
        match self.list_delimiter {
            Some(delimiter) => split_list(&value, delimiter)
                .into_iter()
                .map(ConfigValue::from)
                .collect(),
            None => vec![ConfigValue::from(value)],
        }
    }

    /// Interpolates every placeholder in `text` against this store.
    pub fn resolve(&self, text: &str) -> Result<String> {
        Interpolator::new(self).resolve(text)
    }

    /// Returns the interpolated first value of `key`.
    pub fn get_string(&self, key: &str) -> Result<String> {
        self.resolved_scalar(key)?.ok_or_else(|| not_found(key))
    }

    /// Returns the interpolated first value of `key`, or `default` if it is absent.
    ///
    /// A circular reference is still an error.
    pub fn get_string_or(&self, key: &str, default: &str) -> Result<String> {
        Ok(self
            .resolved_scalar(key)?
            .unwrap_or_else(|| default.to_string()))
    }

    /// Returns every value of `key`, each interpolated. An absent key yields an
    /// empty list.
    pub fn get_list(&self, key: &str) -> Result<Vec<String>> {
        let interpolator = Interpolator::new(self);
        self.get(key)
            .unwrap_or_default()
            .iter()
            .map(|raw| interpolator.resolve_entry(key, raw.as_str()))
            .collect()
    }

    /// Same as [`get_list`](Self::get_list).
    pub fn get_string_array(&self, key: &str) -> Result<Vec<String>> {
        self.get_list(key)
    }

    fn resolved_scalar(&self, key: &str) -> Result<Option<String>> {
        Interpolator::new(self).resolve_key(key)
    }

    fn convert<T>(
        &self,
        key: &str,
        convert: impl FnOnce(&ConfigValue, &str) -> Result<T>,
    ) -> Result<Option<T>> {
        match self.resolved_scalar(key)? {
            Some(resolved) => convert(&ConfigValue::from(resolved), key).map(Some),
            None => Ok(None),
        }
    }

    /// Parses the interpolated value of `key` into any `FromStr` type.
    pub fn get_parsed<T>(&self, key: &str) -> Result<T>
    where
        T: FromStr,
        T::Err: std::error::Error + Send + Sync + 'static,
    {
        self.convert(key, ConfigValue::parse::<T>)?
            .ok_or_else(|| not_found(key))
    }

    /// Like [`get_parsed`](Self::get_parsed), returning `default` if `key` is absent.
    pub fn get_parsed_or<T>(&self, key: &str, default: T) -> Result<T>
    where
        T: FromStr,
        T::Err: std::error::Error + Send + Sync + 'static,
    {
        Ok(self.convert(key, ConfigValue::parse::<T>)?.unwrap_or(default))
    }

    /// Returns the value of `key` as a boolean.
    pub fn get_bool(&self, key: &str) -> Result<bool> {
        self.convert(key, ConfigValue::as_bool)?
            .ok_or_else(|| not_found(key))
    }

    /// Returns the value of `key` as a boolean, or `default` if it is absent.
    pub fn get_bool_or(&self, key: &str, default: bool) -> Result<bool> {
        Ok(self.convert(key, ConfigValue::as_bool)?.unwrap_or(default))
    }

    /// Returns the value of `key` as an `i8`.
    pub fn get_i8(&self, key: &str) -> Result<i8> {
        self.convert(key, ConfigValue::as_i8)?
            .ok_or_else(|| not_found(key))
    }

    /// Returns the value of `key` as an `i8`, or `default` if it is absent.
    pub fn get_i8_or(&self, key: &str, default: i8) -> Result<i8> {
        Ok(self.convert(key, ConfigValue::as_i8)?.unwrap_or(default))
    }

    /// Returns the value of `key` as an `i16`.
    pub fn get_i16(&self, key: &str) -> Result<i16> {
        self.convert(key, ConfigValue::as_i16)?
            .ok_or_else(|| not_found(key))
    }

    /// Returns the value of `key` as an `i16`, or `default` if it is absent.
    pub fn get_i16_or(&self, key: &str, default: i16) -> Result<i16> {
        Ok(self.convert(key, ConfigValue::as_i16)?.unwrap_or(default))
    }

    /// Returns the value of `key` as an `i32`.
    pub fn get_i32(&self, key: &str) -> Result<i32> {
        self.convert(key, ConfigValue::as_i32)?
            .ok_or_else(|| not_found(key))
    }

    /// Returns the value of `key` as an `i32`, or `default` if it is absent.
    pub fn get_i32_or(&self, key: &str, default: i32) -> Result<i32> {
        Ok(self.convert(key, ConfigValue::as_i32)?.unwrap_or(default))
    }

    /// Returns the value of `key` as an `i64`.
    pub fn get_i64(&self, key: &str) -> Result<i64> {
        self.convert(key, ConfigValue::as_i64)?
            .ok_or_else(|| not_found(key))
    }

    /// Returns the value of `key` as an `i64`, or `default` if it is absent.
    pub fn get_i64_or(&self, key: &str, default: i64) -> Result<i64> {
        Ok(self.convert(key, ConfigValue::as_i64)?.unwrap_or(default))
    }

    /// Returns the value of `key` as an `f32`.
    pub fn get_f32(&self, key: &str) -> Result<f32> {
        self.convert(key, ConfigValue::as_f32)?
            .ok_or_else(|| not_found(key))
    }

    /// Returns the value of `key` as an `f32`, or `default` if it is absent.
    pub fn get_f32_or(&self, key: &str, default: f32) -> Result<f32> {
        Ok(self.convert(key, ConfigValue::as_f32)?.unwrap_or(default))
    }

    /// Returns the value of `key` as an `f64`.
    pub fn get_f64(&self, key: &str) -> Result<f64> {
        self.convert(key, ConfigValue::as_f64)?
            .ok_or_else(|| not_found(key))
    }

    /// Returns the value of `key` as an `f64`, or `default` if it is absent.
    pub fn get_f64_or(&self, key: &str, default: f64) -> Result<f64> {
        Ok(self.convert(key, ConfigValue::as_f64)?.unwrap_or(default))
    }

    /// Reads `key` as a map of `name=value` pairs separated by commas.
    ///
    /// An absent key or an empty value yields an empty map. A pair without `=` is
    /// a parse error.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use layercfg::service::ValueStore;
    ///
    /// let mut store = ValueStore::new();
    /// store.set("prop.properties", "foo=bar, baz=moo, seal=clubber");
    ///
    /// let props = store.get_properties("prop.properties").unwrap();
    /// assert_eq!(props.len(), 3);
    /// assert_eq!(props["baz"], "moo");
    /// ```
    pub fn get_properties(&self, key: &str) -> Result<BTreeMap<String, String>> {
        let mut properties = BTreeMap::new();
        for element in self.get_list(key)? {
            for token in split_list(&element, PROPERTY_SEPARATOR) {
                if token.is_empty() {
                    continue;
                }
                let (name, value) = token.split_once('=').ok_or_else(|| {
                    ConfigError::parse(format!(
                        "'{}' in property '{}' is not a name=value pair",
                        token, key
                    ))
                })?;
                properties.insert(name.trim().to_string(), value.trim().to_string());
            }
        }
        Ok(properties)
    }

    /// Returns a new store with every visible key below `prefix`, prefix stripped.
    ///
    /// Raw values are copied as they are: nothing is split again or interpolated.
    /// The subset has no defaults of its own.
    pub fn subset(&self, prefix: &str) -> ValueStore {
        let mut subset = ValueStore {
            list_delimiter: self.list_delimiter,
            ..ValueStore::default()
        };
        for key in self.keys() {
            let Some(child) = key.strip_prefix(prefix) else {
                continue;
            };
            if let Some(values) = self.get(key.as_str()) {
                subset.entries.insert(child, values.to_vec());
            }
        }
        subset
    }

    /// Adds every entry `parser` produces from `content`. Returns the number of
    /// entries added.
    pub fn load<P: ConfigParser + ?Sized>(&mut self, parser: &P, content: &str) -> Result<usize> {
        let entries = parser.parse(content)?;
        let count = entries.len();
        for (key, values) in entries {
            let key = ConfigKey::from(key);
            for value in values {
                self.add(key.clone(), value);
            }
        }
        tracing::debug!(entries = count, "loaded configuration entries");
        Ok(count)
    }
}

impl ValueLookup for ValueStore {
    fn lookup_sequence(&self, key: &str) -> Option<&[ConfigValue]> {
        self.get(key)
    }
}

fn not_found(key: &str) -> ConfigError {
    ConfigError::ConfigKeyNotFound {
        key: key.to_string(),
    }
}

/// Builder for constructing a [`ValueStore`].
///
/// # Examples
///
/// ```rust
/// use layercfg::service::ValueStore;
///
/// let store = ValueStore::builder()
///     .list_delimiter(',')
///     .value("colors", "red, green")
///     .value("colors", "blue")
///     .build();
///
/// assert_eq!(store.get_list("colors").unwrap(), vec!["red", "green", "blue"]);
/// ```
#[derive(Debug)]
pub struct ValueStoreBuilder {
    defaults: Option<Arc<ValueStore>>,
    list_delimiter: Option<char>,
    values: Vec<(ConfigKey, String)>,
}

impl Default for ValueStoreBuilder {
    fn default() -> Self {
        Self {
            defaults: None,
            list_delimiter: Some(DEFAULT_LIST_DELIMITER),
            values: Vec::new(),
        }
    }
}

impl ValueStoreBuilder {
    /// Creates a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Links the store to a default store.
    pub fn defaults(mut self, defaults: Arc<ValueStore>) -> Self {
        self.defaults = Some(defaults);
        self
    }

    /// Splits stored values on unescaped occurrences of `delimiter`.
    pub fn list_delimiter(mut self, delimiter: char) -> Self {
        self.list_delimiter = Some(delimiter);
        self
    }

    /// Stores values verbatim, without splitting them into lists.
    pub fn no_list_delimiter(mut self) -> Self {
        self.list_delimiter = None;
        self
    }

    /// Adds a value; repeating a key makes it multi-valued.
    pub fn value(mut self, key: impl Into<ConfigKey>, value: impl Into<String>) -> Self {
        self.values.push((key.into(), value.into()));
        self
    }

    /// Builds the store.
    pub fn build(self) -> ValueStore {
        let mut store = ValueStore {
            entries: BTreeMap::new(),
            defaults: self.defaults,
            list_delimiter: self.list_delimiter,
        };
        for (key, value) in self.values {
            store.add(key, value);
        }
        store
    }
}
