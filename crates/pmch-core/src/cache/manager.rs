use std::path::PathBuf;
use std::sync::Arc;

use chrono::Utc;
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use tracing::{debug, warn};

use super::store::{FileStore, KeyValueStore, MemoryStore, StorageError};

/// Prefix for cached payload keys, keeping them apart from preferences.
const CACHE_PREFIX: &str = "pmch_cache_";

/// Current time as Unix epoch milliseconds.
pub fn now_millis() -> i64 {
    Utc::now().timestamp_millis()
}

/// Last successful payload for one cache key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CacheEntry<T> {
    pub data: T,
    /// Unix epoch milliseconds of the fetch that produced `data`.
    pub timestamp: i64,
}

impl<T> CacheEntry<T> {
    pub fn new(data: T) -> Self {
        Self {
            data,
            timestamp: now_millis(),
        }
    }
}

/// Reads and writes cache entries and preferences on a [`KeyValueStore`].
///
/// Entries never expire; callers decide what to do with old data.
/// Clone is cheap and clones share the backend.
#[derive(Clone)]
pub struct CacheManager {
    store: Arc<dyn KeyValueStore>,
}

impl CacheManager {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    /// File-backed cache rooted at `cache_dir`.
    pub fn on_disk(cache_dir: PathBuf) -> Result<Self, StorageError> {
        Ok(Self::new(Arc::new(FileStore::new(cache_dir)?)))
    }

    pub fn in_memory() -> Self {
        Self::new(Arc::new(MemoryStore::new()))
    }

    fn entry_key(key: &str) -> String {
        format!("{}{}", CACHE_PREFIX, key)
    }

    // ===== Raw operations =====

    /// Store `data` stamped with the current time, replacing any prior entry.
    pub async fn put<T: Serialize>(&self, key: &str, data: &T) -> Result<(), StorageError> {
        self.put_entry(key, &CacheEntry::new(data)).await
    }

    pub async fn put_entry<T: Serialize>(
        &self,
        key: &str,
        entry: &CacheEntry<T>,
    ) -> Result<(), StorageError> {
        let contents = serde_json::to_string(entry).map_err(|source| StorageError::Serialize {
            key: key.to_string(),
            source,
        })?;
        self.store.set_item(&Self::entry_key(key), &contents).await
    }

    /// Read the entry for `key`. A payload that does not parse as
    /// `CacheEntry<T>` is reported as [`StorageError::Corrupt`].
    pub async fn get<T: DeserializeOwned>(
        &self,
        key: &str,
    ) -> Result<Option<CacheEntry<T>>, StorageError> {
        let Some(contents) = self.store.get_item(&Self::entry_key(key)).await? else {
            return Ok(None);
        };

        serde_json::from_str(&contents)
            .map(Some)
            .map_err(|source| StorageError::Corrupt {
                key: key.to_string(),
                source,
            })
    }

    // ===== Lenient operations =====
    //
    // Storage trouble must never reach the user: read errors become misses
    // and write errors are dropped, both after logging.

    pub async fn load<T: DeserializeOwned>(&self, key: &str) -> Option<CacheEntry<T>> {
        match self.get(key).await {
            Ok(Some(entry)) => Some(entry),
            Ok(None) => {
                debug!(cache = key, "Cache miss");
                None
            }
            Err(e) => {
                warn!(cache = key, error = %e, "Cache read failed, treating as miss");
                None
            }
        }
    }

    pub async fn save<T: Serialize>(&self, key: &str, data: &T) {
        if let Err(e) = self.put(key, data).await {
            warn!(cache = key, error = %e, "Cache write failed");
        }
    }

    pub async fn save_entry<T: Serialize>(&self, key: &str, entry: &CacheEntry<T>) {
        if let Err(e) = self.put_entry(key, entry).await {
            warn!(cache = key, error = %e, "Cache write failed");
        }
    }

    // ===== Preferences =====

    /// Read a plain string preference stored under its own key.
    pub async fn load_preference(&self, name: &str) -> Option<String> {
        match self.store.get_item(name).await {
            Ok(value) => value,
            Err(e) => {
                warn!(preference = name, error = %e, "Failed to read preference");
                None
            }
        }
    }

    pub async fn save_preference(&self, name: &str, value: &str) {
        if let Err(e) = self.store.set_item(name, value).await {
            warn!(preference = name, error = %e, "Failed to save preference");
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;

    /// Backend whose every operation fails.
    struct BrokenStore;

    #[async_trait]
    impl KeyValueStore for BrokenStore {
        async fn get_item(&self, _key: &str) -> Result<Option<String>, StorageError> {
            Err(StorageError::Unavailable("disk gone".to_string()))
        }

        async fn set_item(&self, _key: &str, _value: &str) -> Result<(), StorageError> {
            Err(StorageError::Unavailable("disk gone".to_string()))
        }

        async fn remove_item(&self, _key: &str) -> Result<(), StorageError> {
            Err(StorageError::Unavailable("disk gone".to_string()))
        }
    }

    #[tokio::test]
    async fn test_put_then_get_returns_value() {
        let cache = CacheManager::in_memory();
        let before = now_millis();
        cache.put("faqs", &vec!["a".to_string(), "b".to_string()]).await.unwrap();

        let entry: CacheEntry<Vec<String>> = cache.get("faqs").await.unwrap().unwrap();
        assert_eq!(entry.data, vec!["a", "b"]);
        assert!(entry.timestamp >= before);
        assert!(entry.timestamp <= now_millis());
    }

    #[tokio::test]
    async fn test_put_overwrites() {
        let cache = CacheManager::in_memory();
        cache.put("contacts", &1u32).await.unwrap();
        cache.put("contacts", &2u32).await.unwrap();
        assert_eq!(cache.load::<u32>("contacts").await.unwrap().data, 2);
    }

    #[tokio::test]
    async fn test_keys_are_namespaced() {
        let store = Arc::new(MemoryStore::new());
        let cache = CacheManager::new(store.clone());
        cache.put("departments", &3u8).await.unwrap();

        let raw = store.get_item("pmch_cache_departments").await.unwrap().unwrap();
        let json: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(json["data"], 3);
        assert!(json["timestamp"].is_i64());
        assert_eq!(store.get_item("departments").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_corrupt_entry_is_error_and_lenient_miss() {
        let store = Arc::new(MemoryStore::new());
        store.set_item("pmch_cache_faqs", "{not json").await.unwrap();
        let cache = CacheManager::new(store);

        assert!(matches!(
            cache.get::<Vec<u8>>("faqs").await,
            Err(StorageError::Corrupt { .. })
        ));
        assert!(cache.load::<Vec<u8>>("faqs").await.is_none());
    }

    #[tokio::test]
    async fn test_wrong_shape_is_miss() {
        let cache = CacheManager::in_memory();
        cache.put("faqs", &"text").await.unwrap();
        assert!(cache.load::<Vec<u8>>("faqs").await.is_none());
    }

    #[tokio::test]
    async fn test_broken_backend_never_propagates() {
        let cache = CacheManager::new(Arc::new(BrokenStore));
        assert!(cache.put("k", &1).await.is_err());

        cache.save("k", &1).await;
        assert!(cache.load::<i32>("k").await.is_none());
        cache.save_preference("pmch_language", "en").await;
        assert!(cache.load_preference("pmch_language").await.is_none());
    }

    #[tokio::test]
    async fn test_on_disk_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let cache = CacheManager::on_disk(dir.path().to_path_buf()).unwrap();
        cache.save("department_3", &"Cardiology").await;

        let reopened = CacheManager::on_disk(dir.path().to_path_buf()).unwrap();
        let entry = reopened.load::<String>("department_3").await.unwrap();
        assert_eq!(entry.data, "Cardiology");
    }
}
