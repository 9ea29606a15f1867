use std::collections::HashMap;
use std::sync::Mutex;

use thiserror::Error;

/// String-to-string durable storage, as exposed by `window.localStorage`.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StorageError {
    #[error("local storage is not available")]
    Unavailable,
    #[error("storage rejected write to '{key}': {reason}")]
    WriteRejected { key: String, reason: String },
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for &S {
    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        (**self).set(key, value)
    }
}

/// In-process store. Backs tests and anything rendered outside a browser.
#[derive(Debug, Default)]
pub struct MemoryStore {
    items: Mutex<HashMap<String, String>>,
    quota: Option<usize>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rejects any single value longer than `quota` bytes, mimicking a browser
    /// quota error.
    pub fn with_quota(quota: usize) -> Self {
        Self {
            items: Mutex::default(),
            quota: Some(quota),
        }
    }

    pub fn len(&self) -> usize {
        self.items.lock().map(|items| items.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.items.lock().ok()?.get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        if let Some(quota) = self.quota {
            if value.len() > quota {
                return Err(StorageError::WriteRejected {
                    key: key.to_string(),
                    reason: format!("{} bytes exceeds quota of {quota}", value.len()),
                });
            }
        }
        let mut items = self.items.lock().map_err(|_| StorageError::Unavailable)?;
        items.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// The browser's `localStorage`. Outside of a hydrated client every read misses
/// and every write reports [`StorageError::Unavailable`].
#[derive(Debug, Default, Clone, Copy)]
pub struct LocalStore;

#[cfg(feature = "hydrate")]
impl LocalStore {
    fn storage() -> Option<web_sys::Storage> {
        web_sys::window().and_then(|w| w.local_storage().ok().flatten())
    }
}

impl KeyValueStore for LocalStore {
    #[cfg(feature = "hydrate")]
    fn get(&self, key: &str) -> Option<String> {
        Self::storage().and_then(|s| s.get_item(key).ok().flatten())
    }

    #[cfg(not(feature = "hydrate"))]
    fn get(&self, _key: &str) -> Option<String> {
        None
    }

    #[cfg(feature = "hydrate")]
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let storage = Self::storage().ok_or(StorageError::Unavailable)?;
        storage
            .set_item(key, value)
            .map_err(|e| StorageError::WriteRejected {
                key: key.to_string(),
                reason: format!("{e:?}"),
            })
    }

    #[cfg(not(feature = "hydrate"))]
    fn set(&self, _key: &str, _value: &str) -> Result<(), StorageError> {
        Err(StorageError::Unavailable)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_store_overwrites() {
        let store = MemoryStore::new();
        assert_eq!(store.get("theme"), None);
        store.set("theme", "dark").unwrap();
        store.set("theme", "light").unwrap();
        assert_eq!(store.get("theme").as_deref(), Some("light"));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn quota_rejects_large_values_and_keeps_previous() {
        let store = MemoryStore::with_quota(8);
        store.set("profileImage", "short").unwrap();
        let err = store.set("profileImage", "much too long").unwrap_err();
        assert!(matches!(err, StorageError::WriteRejected { ref key, .. } if key == "profileImage"));
        assert_eq!(store.get("profileImage").as_deref(), Some("short"));
    }

    #[cfg(not(feature = "hydrate"))]
    #[test]
    fn local_store_is_inert_off_browser() {
        assert_eq!(LocalStore.get("theme"), None);
        assert_eq!(LocalStore.set("theme", "dark"), Err(StorageError::Unavailable));
    }
}
