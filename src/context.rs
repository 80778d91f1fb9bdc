//! # Request Context Module
//!
//! Per-request parameter storage used by the decode side of the router.
//!
//! ## Overview
//!
//! Decoding a path does not return a value; its observable effect is writing
//! the resolved module/controller/action and any trailing path parameters into
//! a [`RequestContext`] owned by the caller. The context is an explicit,
//! request-scoped store rather than ambient global state, so the router can be
//! exercised in tests (and run multiple independent instances) without any
//! process-wide request storage.
//!
//! [`Params`] is the ordered key/value map used on the encode side. Insertion
//! order is preserved because it determines the order of generated
//! query-string pairs; values are optional, and absent values are dropped
//! during encoding, never rendered.

use smallvec::SmallVec;

/// Maximum number of parameters stored inline before spilling to the heap.
/// Most requests carry a handful of trailing path params at most.
pub const MAX_INLINE_PARAMS: usize = 8;

/// Ordered key → optional value parameter map.
///
/// Used as the parameter input to [`Router::encode`](crate::router::Router::encode)
/// and as the "remaining params" output of encode callbacks. Keys are kept in
/// insertion order; `get` uses last-write-wins semantics for duplicate keys.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Params {
    pairs: SmallVec<[(String, Option<String>); MAX_INLINE_PARAMS]>,
}

impl Params {
    /// Create an empty parameter map.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a key with a present value.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.pairs.push((key.into(), Some(value.into())));
    }

    /// Append a key with an optional value. `None` values are carried but
    /// dropped by every encoder.
    pub fn insert_opt(&mut self, key: impl Into<String>, value: Option<String>) {
        self.pairs.push((key.into(), value));
    }

    /// Look up a value by key. Last write wins; keys with absent values
    /// return `None`.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.pairs
            .iter()
            .rfind(|(k, _)| k == name)
            .and_then(|(_, v)| v.as_deref())
    }

    /// Number of entries, including absent-valued ones.
    #[must_use]
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Iterate all entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, Option<&str>)> {
        self.pairs.iter().map(|(k, v)| (k.as_str(), v.as_deref()))
    }

    /// Iterate entries with present values only, in insertion order.
    /// This is the view every encoder consumes.
    pub fn present(&self) -> impl Iterator<Item = (&str, &str)> {
        self.pairs
            .iter()
            .filter_map(|(k, v)| v.as_deref().map(|v| (k.as_str(), v)))
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Params {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut params = Params::new();
        for (k, v) in iter {
            params.insert(k, v);
        }
        params
    }
}

impl<K: Into<String>, V: Into<String>, const N: usize> From<[(K, V); N]> for Params {
    fn from(pairs: [(K, V); N]) -> Self {
        pairs.into_iter().collect()
    }
}

/// Mutable per-request parameter store the decode side writes into.
///
/// One context belongs to exactly one logical request and must not be shared
/// across concurrent requests. `decode` writes the resolved MCA under the
/// configured parameter names and each trailing path pair under its own name.
#[derive(Debug, Clone, Default)]
pub struct RequestContext {
    values: SmallVec<[(String, String); MAX_INLINE_PARAMS]>,
}

impl RequestContext {
    /// Create an empty context.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a key, overwriting nothing: entries are appended and lookups use
    /// last-write-wins, so the latest `set` is the visible value.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.values.push((key.into(), value.into()));
    }

    /// Set a key only if it has no value yet. Default MCA resolution uses
    /// this so values already present on the request are not clobbered.
    pub fn set_if_absent(&mut self, key: &str, value: impl Into<String>) {
        if !self.contains(key) {
            self.values.push((key.to_string(), value.into()));
        }
    }

    /// Look up a value by key, last write wins.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.values
            .iter()
            .rfind(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.values.iter().any(|(k, _)| k == name)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Iterate all entries in write order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}
