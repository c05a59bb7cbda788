//! Shared query infrastructure: the [`Query`] trait, [`QueryOptions`], and
//! [`OptionValue`].

use serde::{Deserialize, Serialize};

/// Trait implemented by everything the client can send. Implementors only
/// describe the caller's options; sanitizing happens in the client.
pub trait Query {
    /// Returns the raw, unsanitized options for this query.
    fn to_options(&self) -> QueryOptions;
}

/// A single option value. The API takes strings everywhere, but `limit` and
/// `offset` are naturally integers.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(untagged)]
pub enum OptionValue {
    Integer(i64),
    Text(String),
}

impl std::fmt::Display for OptionValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OptionValue::Integer(n) => write!(f, "{}", n),
            OptionValue::Text(s) => write!(f, "{}", s),
        }
    }
}

impl From<&str> for OptionValue {
    fn from(value: &str) -> Self {
        OptionValue::Text(value.to_string())
    }
}

impl From<String> for OptionValue {
    fn from(value: String) -> Self {
        OptionValue::Text(value)
    }
}

impl From<i64> for OptionValue {
    fn from(value: i64) -> Self {
        OptionValue::Integer(value)
    }
}

impl From<i32> for OptionValue {
    fn from(value: i32) -> Self {
        OptionValue::Integer(value.into())
    }
}

impl From<u32> for OptionValue {
    fn from(value: u32) -> Self {
        OptionValue::Integer(value.into())
    }
}

/// Insertion-ordered option map. Setting an existing key replaces its value
/// in place.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct QueryOptions {
    entries: Vec<(String, OptionValue)>,
}

impl QueryOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets `key`, keeping its original position if it was already present.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<OptionValue>) {
        upsert(&mut self.entries, key.into(), value.into());
    }

    /// Builder form of [`QueryOptions::set`].
    pub fn with(mut self, key: impl Into<String>, value: impl Into<OptionValue>) -> Self {
        self.set(key, value);
        self
    }

    pub fn get(&self, key: &str) -> Option<&OptionValue> {
        self.entries.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &OptionValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }
}

impl Query for QueryOptions {
    fn to_options(&self) -> QueryOptions {
        self.clone()
    }
}

impl<K, V> FromIterator<(K, V)> for QueryOptions
where
    K: Into<String>,
    V: Into<OptionValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut options = QueryOptions::new();
        for (key, value) in iter {
            options.set(key, value);
        }
        options
    }
}

pub(crate) fn upsert(entries: &mut Vec<(String, OptionValue)>, key: String, value: OptionValue) {
    match entries.iter_mut().find(|(k, _)| *k == key) {
        Some((_, existing)) => *existing = value,
        None => entries.push((key, value)),
    }
}
