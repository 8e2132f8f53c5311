//! Durable key/value storage used to remember user preferences across reloads.
//!
//! Every access is fallible. Callers decide how to degrade; nothing here
//! panics or logs.

#[cfg(not(target_arch = "wasm32"))]
pub mod file;

use std::collections::HashMap;

/// Failures raised by a [`DurableStorage`] backend.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StorageError {
    /// The backend cannot be reached at all (disabled, denied, no profile dir).
    #[error("durable storage is unavailable: {0}")]
    Unavailable(String),

    #[error("failed to read `{key}`: {reason}")]
    Read { key: String, reason: String },

    /// Quota exceeded, read-only medium, serialization failure, ...
    #[error("failed to write `{key}`: {reason}")]
    Write { key: String, reason: String },
}

/// A string key/value store that survives a page reload or an app restart.
pub trait DurableStorage {
    /// Returns `Ok(None)` when the key has never been written.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
}

impl<T: DurableStorage + ?Sized> DurableStorage for Box<T> {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        (**self).set(key, value)
    }
}

/// In-process storage.
///
/// Used where no durable backend exists (server-side rendering, a desktop
/// without a config directory) and in tests, where the failure switches
/// simulate a browser with storage disabled or full.
#[derive(Debug, Default, Clone)]
pub struct MemoryStorage {
    values: HashMap<String, String>,
    unavailable: bool,
    read_only: bool,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store whose every access fails, like `localStorage` with cookies blocked.
    pub fn unavailable() -> Self {
        Self {
            unavailable: true,
            ..Self::default()
        }
    }

    /// Reads succeed, writes fail (quota exceeded).
    pub fn read_only(mut self) -> Self {
        self.read_only = true;
        self
    }

    pub fn with_value(mut self, key: &str, value: &str) -> Self {
        self.values.insert(key.to_owned(), value.to_owned());
        self
    }
}

impl DurableStorage for MemoryStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        if self.unavailable {
            return Err(StorageError::Unavailable("storage disabled".to_owned()));
        }
        Ok(self.values.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        if self.unavailable {
            return Err(StorageError::Unavailable("storage disabled".to_owned()));
        }
        if self.read_only {
            return Err(StorageError::Write {
                key: key.to_owned(),
                reason: "quota exceeded".to_owned(),
            });
        }
        self.values.insert(key.to_owned(), value.to_owned());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_key_is_none() {
        let storage = MemoryStorage::new();
        assert_eq!(storage.get("theme"), Ok(None));
    }

    #[test]
    fn set_then_get() {
        let mut storage = MemoryStorage::new();
        storage.set("theme", "light").unwrap();
        assert_eq!(storage.get("theme").unwrap().as_deref(), Some("light"));
    }

    #[test]
    fn unavailable_fails_both_ways() {
        let mut storage = MemoryStorage::unavailable();
        assert!(matches!(storage.get("theme"), Err(StorageError::Unavailable(_))));
        assert!(matches!(
            storage.set("theme", "dark"),
            Err(StorageError::Unavailable(_))
        ));
    }

    #[test]
    fn read_only_keeps_old_value() {
        let mut storage = MemoryStorage::new().with_value("theme", "dark").read_only();
        let err = storage.set("theme", "light").unwrap_err();
        assert_eq!(
            err.to_string(),
            "failed to write `theme`: quota exceeded"
        );
        assert_eq!(storage.get("theme").unwrap().as_deref(), Some("dark"));
    }

    #[test]
    fn boxed_storage_delegates() {
        let mut storage: Box<dyn DurableStorage> = Box::new(MemoryStorage::new());
        storage.set("k", "v").unwrap();
        assert_eq!(storage.get("k").unwrap().as_deref(), Some("v"));
    }
}
