//! The untyped parameter set accepted at the system boundary.
//!
//! Upstream callers hand over a flat string map. Values are parsed lazily,
//! only where a validator needs an integer, so an unused key with a garbage
//! value never causes a rejection on its own.

use serde::{Deserialize, Serialize};
use std::collections::hash_map;
use std::collections::HashMap;

use crate::error::{ParamCheckError, Result};

/// String-keyed build parameters for one index build request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ParamSet(HashMap<String, String>);

impl ParamSet {
    /// Create an empty parameter set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a parameter, builder style.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.0.insert(key.into(), value.into());
        self
    }

    /// Insert a parameter, returning the previous value for the key.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) -> Option<String> {
        self.0.insert(key.into(), value.into())
    }

    /// Remove a parameter.
    pub fn remove(&mut self, key: &str) -> Option<String> {
        self.0.remove(key)
    }

    /// Raw value for `key`.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> hash_map::Iter<'_, String, String> {
        self.0.iter()
    }

    /// Value for `key` parsed as a decimal integer.
    ///
    /// # Errors
    ///
    /// `MissingParameter` if the key is absent, `InvalidInteger` if the
    /// value is not a decimal integer.
    pub fn get_int(&self, key: &str) -> Result<i64> {
        let raw = self.get(key).ok_or_else(|| ParamCheckError::missing(key))?;
        parse_int(key, raw)
    }

    /// Like [`get_int`](Self::get_int), but an absent key yields `default`.
    pub fn get_int_or(&self, key: &str, default: i64) -> Result<i64> {
        match self.get(key) {
            Some(raw) => parse_int(key, raw),
            None => Ok(default),
        }
    }

    /// Copy every entry of `other` into `self`, overwriting shared keys.
    pub fn merge(&mut self, other: &ParamSet) {
        for (k, v) in other.iter() {
            self.0.insert(k.clone(), v.clone());
        }
    }

    /// A copy of this set with `key` set to `value` only if it was absent.
    pub fn with_default(&self, key: &str, value: impl Into<String>) -> ParamSet {
        let mut out = self.clone();
        out.0.entry(key.to_string()).or_insert_with(|| value.into());
        out
    }

    /// A copy of this set with `key` set to `value` unconditionally.
    pub fn with_override(&self, key: &str, value: impl Into<String>) -> ParamSet {
        self.clone().with(key, value)
    }

    /// Decode a parameter set from a JSON object of string values.
    ///
    /// # Errors
    ///
    /// Returns `InvalidDocument` if the input is not a JSON object whose
    /// values are all strings.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Encode this parameter set as a JSON object.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

fn parse_int(key: &str, raw: &str) -> Result<i64> {
    raw.parse::<i64>()
        .map_err(|_| ParamCheckError::invalid_integer(key, raw))
}

impl From<HashMap<String, String>> for ParamSet {
    fn from(map: HashMap<String, String>) -> Self {
        Self(map)
    }
}

impl From<ParamSet> for HashMap<String, String> {
    fn from(params: ParamSet) -> Self {
        params.0
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for ParamSet {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

impl<K: Into<String>, V: Into<String>> Extend<(K, V)> for ParamSet {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        self.0
            .extend(iter.into_iter().map(|(k, v)| (k.into(), v.into())));
    }
}

impl<'a> IntoIterator for &'a ParamSet {
    type Item = (&'a String, &'a String);
    type IntoIter = hash_map::Iter<'a, String, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
