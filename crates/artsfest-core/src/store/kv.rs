use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;
use tracing::{debug, warn};

use super::backend::StorageBackend;
use super::keys::StoreKey;

/// JSON values over a `StorageBackend`.
///
/// Faults never escape: `save` reports them as `false` and `load` substitutes
/// the caller's default. Both log the underlying error.
pub struct KeyValueStore {
    backend: Box<dyn StorageBackend>,
}

impl KeyValueStore {
    pub fn new(backend: Box<dyn StorageBackend>) -> Self {
        Self { backend }
    }

    /// Serialize `value` and store it under `key`. Returns `false` on failure.
    pub fn save<T: Serialize + ?Sized>(&self, key: StoreKey, value: &T) -> bool {
        let contents = match serde_json::to_string_pretty(value) {
            Ok(contents) => contents,
            Err(e) => {
                warn!(key = %key, error = %e, "Failed to serialize value");
                return false;
            }
        };

        match self.backend.write(key.as_str(), &contents) {
            Ok(()) => {
                debug!(key = %key, bytes = contents.len(), "Saved value");
                true
            }
            Err(e) => {
                warn!(key = %key, error = %e, "Failed to save value");
                false
            }
        }
    }

    fn read(&self, key: StoreKey) -> Option<String> {
        match self.backend.read(key.as_str()) {
            Ok(contents) => contents,
            Err(e) => {
                warn!(key = %key, error = %e, "Failed to read value, using default");
                None
            }
        }
    }

    /// Read the value under `key`, or `default` if it is missing or unreadable.
    pub fn load<T: DeserializeOwned>(&self, key: StoreKey, default: T) -> T {
        let Some(contents) = self.read(key) else {
            return default;
        };

        match serde_json::from_str(&contents) {
            Ok(value) => value,
            Err(e) => {
                warn!(key = %key, error = %e, "Failed to parse value, using default");
                default
            }
        }
    }

    /// Read a JSON array under `key` one record at a time.
    ///
    /// Records that fail to parse are skipped and logged, so one bad entry does
    /// not empty the collection. A missing or non-array value yields no records.
    pub fn load_list<T: DeserializeOwned>(&self, key: StoreKey) -> Vec<T> {
        let Some(contents) = self.read(key) else {
            return Vec::new();
        };

        let records: Vec<Value> = match serde_json::from_str(&contents) {
            Ok(records) => records,
            Err(e) => {
                warn!(key = %key, error = %e, "Failed to parse list, using empty");
                return Vec::new();
            }
        };

        records
            .into_iter()
            .enumerate()
            .filter_map(|(index, record)| match serde_json::from_value(record) {
                Ok(item) => Some(item),
                Err(e) => {
                    warn!(key = %key, index, error = %e, "Skipping unreadable record");
                    None
                }
            })
            .collect()
    }

    /// Delete the value under `key`. Returns `false` on failure.
    pub fn remove(&self, key: StoreKey) -> bool {
        match self.backend.remove(key.as_str()) {
            Ok(()) => true,
            Err(e) => {
                warn!(key = %key, error = %e, "Failed to remove value");
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;
    use crate::store::backend::tests::FailingBackend;
    use crate::store::MemoryBackend;

    fn memory_store() -> KeyValueStore {
        KeyValueStore::new(Box::new(MemoryBackend::new()))
    }

    #[test]
    fn test_save_then_load() {
        let store = memory_store();
        let mut data = HashMap::new();
        data.insert("name".to_string(), 123);

        assert!(store.save(StoreKey::GradePoints, &data));
        let loaded: HashMap<String, i32> = store.load(StoreKey::GradePoints, HashMap::new());
        assert_eq!(loaded, data);
    }

    #[test]
    fn test_load_missing_returns_default() {
        let store = memory_store();
        let value: String = store.load(StoreKey::AdminPassword, "defaultValue".to_string());
        assert_eq!(value, "defaultValue");
    }

    #[test]
    fn test_load_corrupt_returns_default() {
        let backend = MemoryBackend::new();
        backend.write("teams", "{not json").unwrap();
        let store = KeyValueStore::new(Box::new(backend));

        let teams: Vec<String> = store.load(StoreKey::Teams, vec!["fallback".to_string()]);
        assert_eq!(teams, vec!["fallback".to_string()]);
    }

    #[test]
    fn test_load_wrong_shape_returns_default() {
        let store = memory_store();
        assert!(store.save(StoreKey::Points, "not a number"));
        let value: u32 = store.load(StoreKey::Points, 7);
        assert_eq!(value, 7);
    }

    #[test]
    fn test_load_list_skips_bad_records() {
        let backend = MemoryBackend::new();
        backend
            .write("availableGrades", r#"["A", 7, "C", null]"#)
            .unwrap();
        let store = KeyValueStore::new(Box::new(backend));

        let grades: Vec<String> = store.load_list(StoreKey::AvailableGrades);
        assert_eq!(grades, vec!["A".to_string(), "C".to_string()]);
    }

    #[test]
    fn test_load_list_missing_or_not_a_list() {
        let store = memory_store();
        let missing: Vec<String> = store.load_list(StoreKey::Teams);
        assert!(missing.is_empty());

        assert!(store.save(StoreKey::Teams, "not a list"));
        let wrong: Vec<String> = store.load_list(StoreKey::Teams);
        assert!(wrong.is_empty());
    }

    #[test]
    fn test_backend_failures_are_contained() {
        let store = KeyValueStore::new(Box::new(FailingBackend));
        assert!(!store.save(StoreKey::Teams, &vec![1, 2, 3]));
        let value: bool = store.load(StoreKey::Initialized, false);
        assert!(!value);
        let list: Vec<u32> = store.load_list(StoreKey::Results);
        assert!(list.is_empty());
        assert!(!store.remove(StoreKey::LogoImage));
    }
}
