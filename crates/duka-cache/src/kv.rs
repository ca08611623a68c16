//! Typed wrapper with automatic serialization.

use crate::{CacheError, KeyValueStore};
use serde::{de::DeserializeOwned, Serialize};

/// Type-safe cache over any [`KeyValueStore`].
///
/// Provides automatic JSON serialization for any type that implements
/// `Serialize` and `DeserializeOwned`.
#[derive(Debug, Clone, Default)]
pub struct Cache<S> {
    store: S,
}

impl<S: KeyValueStore> Cache<S> {
    /// Wrap a store.
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Get a value from the cache.
    ///
    /// Returns `None` if the key doesn't exist, and a `SerializeError` if the
    /// stored text does not parse as `T`.
    pub fn get<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, CacheError> {
        match self.store.get(key)? {
            Some(text) => Ok(Some(serde_json::from_str(&text)?)),
            None => Ok(None),
        }
    }

    /// Set a value in the cache.
    pub fn set<T: Serialize + ?Sized>(&mut self, key: &str, value: &T) -> Result<(), CacheError> {
        let text = serde_json::to_string(value)?;
        self.store.set(key, &text)
    }

    /// Delete a value from the cache.
    pub fn delete(&mut self, key: &str) -> Result<(), CacheError> {
        self.store.delete(key)
    }

    /// Check if a key exists in the cache.
    pub fn exists(&self, key: &str) -> Result<bool, CacheError> {
        self.store.exists(key)
    }

    /// Get all keys in the cache.
    pub fn keys(&self) -> Result<Vec<String>, CacheError> {
        self.store.keys()
    }

    /// Borrow the underlying store.
    pub fn store(&self) -> &S {
        &self.store
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MemoryStore;

    #[test]
    fn test_get_reports_unparseable_value() {
        let cache = Cache::new(MemoryStore::with_entry("cart", "{oops"));
        let result: Result<Option<Vec<u32>>, _> = cache.get("cart");
        assert!(matches!(result, Err(CacheError::SerializeError(_))));
        assert_eq!(cache.store().get("cart").unwrap().as_deref(), Some("{oops"));
    }

    #[test]
    fn test_set_then_get() {
        let mut cache = Cache::new(MemoryStore::new());
        cache.set("numbers", &[1, 2, 3]).unwrap();
        let numbers: Option<Vec<u32>> = cache.get("numbers").unwrap();
        assert_eq!(numbers, Some(vec![1, 2, 3]));
        assert_eq!(cache.keys().unwrap(), vec!["numbers"]);
    }
}
