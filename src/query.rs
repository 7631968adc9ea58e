//! Query-string model
//!
//! Navigation links are built by copying the incoming request's query
//! parameters, swapping the pagination parameters, and serializing the result
//! back out. `QueryMap` keeps that transform alias-free: every mutation works
//! on an owned copy, and serialization is deterministic so a given parameter
//! set always produces the same query string.

use std::collections::BTreeMap;

use url::form_urlencoded;
use url::Url;

/// Ordered multimap of query parameters.
///
/// Repeated keys are supported. Keys serialize in sorted order and the values
/// of a key in insertion order, with standard percent-encoding.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryMap {
    params: BTreeMap<String, Vec<String>>,
}

impl QueryMap {
    /// Create an empty parameter set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Collect the query pairs of a parsed URL.
    pub fn from_url(url: &Url) -> Self {
        let mut map = Self::new();
        for (key, value) in url.query_pairs() {
            map.append(key.into_owned(), value.into_owned());
        }
        map
    }

    /// Add a value, keeping any existing values for the key.
    pub fn append(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.params.entry(key.into()).or_default().push(value.into());
    }

    /// Replace all values of a key with a single value.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.params.insert(key.into(), vec![value.into()]);
    }

    /// Remove a key entirely, reporting whether it was present.
    pub fn remove(&mut self, key: &str) -> bool {
        self.params.remove(key).is_some()
    }

    /// First value for a key, if any.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.params
            .get(key)
            .and_then(|values| values.first())
            .map(String::as_str)
    }

    /// All values for a key, in insertion order.
    pub fn get_all(&self, key: &str) -> &[String] {
        self.params.get(key).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Whether the key is present.
    pub fn contains(&self, key: &str) -> bool {
        self.params.contains_key(key)
    }

    /// Whether any parameters are present.
    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }

    /// Copy with `key` replaced by a single `value`.
    pub fn with(&self, key: impl Into<String>, value: impl Into<String>) -> Self {
        let mut copy = self.clone();
        copy.set(key, value);
        copy
    }

    /// Copy without `key`.
    pub fn without(&self, key: &str) -> Self {
        let mut copy = self.clone();
        copy.remove(key);
        copy
    }

    /// Percent-encoded query string, without the leading `?`.
    pub fn to_query_string(&self) -> String {
        let mut serializer = form_urlencoded::Serializer::new(String::new());
        for (key, values) in &self.params {
            for value in values {
                serializer.append_pair(key, value);
            }
        }
        serializer.finish()
    }
}
