//! The request-lifetime key/value store
//!
//! A string-keyed store of shared values, owned by whoever owns the
//! request. Nothing is evicted within the scope's lifetime; dropping the
//! scope is the only invalidation.

use std::any::Any;
use std::sync::Arc;

use dashmap::DashMap;

/// Key/value store scoped to one logical request
///
/// Inserts are first-write-wins: when two callers race on the same key,
/// both receive the value that landed first, so a key never refers to two
/// distinct live values within one scope. Construction of values happens
/// outside the store's locks - a losing racer wastes the construction but
/// never observes its own duplicate.
#[derive(Default)]
pub struct RequestScope {
    values: DashMap<String, Arc<dyn Any + Send + Sync>>,
}

impl RequestScope {
    /// Create an empty scope
    pub fn new() -> Self {
        Self::default()
    }

    /// Read the value stored under a key
    pub fn get(&self, key: &str) -> Option<Arc<dyn Any + Send + Sync>> {
        self.values.get(key).map(|value| Arc::clone(&value))
    }

    /// Store a value under a key, first write wins
    ///
    /// Returns the value the scope holds after the call - the given one if
    /// the key was vacant, the previously stored one otherwise.
    pub fn insert(
        &self,
        key: impl Into<String>,
        value: Arc<dyn Any + Send + Sync>,
    ) -> Arc<dyn Any + Send + Sync> {
        self.values.entry(key.into()).or_insert(value).clone()
    }

    /// Number of stored entries
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the scope holds no entries
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl std::fmt::Debug for RequestScope {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RequestScope")
            .field("entries", &self.values.len())
            .finish()
    }
}
