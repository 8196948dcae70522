use anyhow::{Result, anyhow};
#[cfg(feature = "rocksdb")]
use rocksdb::{DB, Options};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};
use thiserror::Error;
use tracing::debug;

pub const ACCOUNTS_KEY: &str = "accounts";
pub const CHANNELS_KEY: &str = "channels";
pub const SETTINGS_KEY: &str = "settings";
pub const LOGS_KEY: &str = "logs";
pub const CRYPTO_BOXES_KEY: &str = "cryptoBoxes";

/// String-keyed, string-valued durable storage.
pub trait KvStore: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<String>>;
    fn set(&self, key: &str, value: &str) -> Result<()>;
    fn remove(&self, key: &str) -> Result<()>;
}

impl<T: KvStore + ?Sized> KvStore for Arc<T> {
    fn get(&self, key: &str) -> Result<Option<String>> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) -> Result<()> {
        (**self).remove(key)
    }
}

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("storage backend error: {0}")]
    Backend(String),
    #[error("failed to serialize value: {0}")]
    Serialize(#[from] serde_json::Error),
    #[error("failed to parse stored value for `{key}`: {source}")]
    Deserialize {
        key: String,
        source: serde_json::Error,
    },
}

/// Read and parse `key`. `Ok(None)` when the key was never written.
pub fn load_json<T, S>(store: &S, key: &str) -> Result<Option<T>, StorageError>
where
    T: DeserializeOwned,
    S: KvStore + ?Sized,
{
    let raw = store
        .get(key)
        .map_err(|err| StorageError::Backend(err.to_string()))?;
    match raw {
        Some(raw) => serde_json::from_str(&raw)
            .map(Some)
            .map_err(|source| StorageError::Deserialize {
                key: key.to_owned(),
                source,
            }),
        None => {
            debug!("no stored value for `{}`", key);
            Ok(None)
        }
    }
}

pub fn save_json<T, S>(store: &S, key: &str, value: &T) -> Result<(), StorageError>
where
    T: Serialize + ?Sized,
    S: KvStore + ?Sized,
{
    let json = serde_json::to_string(value)?;
    store
        .set(key, &json)
        .map_err(|err| StorageError::Backend(err.to_string()))
}

#[derive(Default)]
pub struct NoopStore;

impl KvStore for NoopStore {
    fn get(&self, _key: &str) -> Result<Option<String>> {
        Ok(None)
    }

    fn set(&self, _key: &str, _value: &str) -> Result<()> {
        Ok(())
    }

    fn remove(&self, _key: &str) -> Result<()> {
        Ok(())
    }
}

#[derive(Default)]
pub struct InMemoryStore {
    values: RwLock<HashMap<String, String>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KvStore for InMemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let guard = self
            .values
            .read()
            .map_err(|_| anyhow!("in-memory store lock poisoned"))?;
        Ok(guard.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut guard = self
            .values
            .write()
            .map_err(|_| anyhow!("in-memory store lock poisoned"))?;
        guard.insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        let mut guard = self
            .values
            .write()
            .map_err(|_| anyhow!("in-memory store lock poisoned"))?;
        guard.remove(key);
        Ok(())
    }
}

#[cfg(feature = "rocksdb")]
pub struct RocksDbStore {
    db: Arc<DB>,
}

#[cfg(feature = "rocksdb")]
impl RocksDbStore {
    pub fn open_default(path: &str) -> Result<Self> {
        let mut options = Options::default();
        options.create_if_missing(true);
        let db = DB::open(&options, path)?;
        debug!("opened rocksdb store at {}", path);
        Ok(Self { db: Arc::new(db) })
    }
}

#[cfg(feature = "rocksdb")]
impl KvStore for RocksDbStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let value = self.db.get(key.as_bytes())?;
        match value {
            Some(raw) => Ok(Some(String::from_utf8(raw)?)),
            None => Ok(None),
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.db.put(key.as_bytes(), value.as_bytes())?;
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        self.db.delete(key.as_bytes())?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Sample {
        name: String,
        count: u32,
    }

    #[test]
    fn in_memory_round_trip_and_remove() {
        let store = InMemoryStore::new();
        assert_eq!(store.get(ACCOUNTS_KEY).unwrap(), None);

        store.set(ACCOUNTS_KEY, "[]").unwrap();
        assert_eq!(store.get(ACCOUNTS_KEY).unwrap().as_deref(), Some("[]"));

        store.remove(ACCOUNTS_KEY).unwrap();
        assert_eq!(store.get(ACCOUNTS_KEY).unwrap(), None);
    }

    #[test]
    fn noop_store_never_returns_values() {
        let store = NoopStore;
        store.set(SETTINGS_KEY, "{}").unwrap();
        assert_eq!(store.get(SETTINGS_KEY).unwrap(), None);
    }

    #[test]
    fn load_json_reports_the_bad_key() {
        let store = InMemoryStore::new();
        store.set(LOGS_KEY, "{not json").unwrap();

        let err = load_json::<Vec<Sample>, _>(&store, LOGS_KEY).unwrap_err();
        match err {
            StorageError::Deserialize { key, .. } => assert_eq!(key, LOGS_KEY),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn load_json_absent_key_is_none() {
        let store = InMemoryStore::new();
        let loaded = load_json::<Sample, _>(&store, CHANNELS_KEY).unwrap();
        assert!(loaded.is_none());
    }

    #[test]
    fn shared_store_sees_writes_through_arc() {
        let store = Arc::new(InMemoryStore::new());
        let sample = Sample {
            name: "btc".into(),
            count: 2,
        };
        save_json(&store, CRYPTO_BOXES_KEY, &sample).unwrap();

        let other = Arc::clone(&store);
        let loaded: Option<Sample> = load_json(&other, CRYPTO_BOXES_KEY).unwrap();
        assert_eq!(loaded, Some(sample));
    }

    #[cfg(feature = "rocksdb")]
    #[test]
    fn rocksdb_values_survive_reopen() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("claimer-db");
        let path = path.to_str().ok_or_else(|| anyhow!("non-utf8 temp path"))?;

        {
            let store = RocksDbStore::open_default(path)?;
            save_json(
                &store,
                SETTINGS_KEY,
                &Sample {
                    name: "en".into(),
                    count: 1,
                },
            )?;
            store.set(LOGS_KEY, "[]")?;
            store.remove(LOGS_KEY)?;
        }

        let store = RocksDbStore::open_default(path)?;
        let loaded: Option<Sample> = load_json(&store, SETTINGS_KEY)?;
        assert_eq!(
            loaded,
            Some(Sample {
                name: "en".into(),
                count: 1,
            })
        );
        assert_eq!(store.get(LOGS_KEY)?, None);
        Ok(())
    }
}
