//! `localStorage` backend and browser clock.

use anyhow::{Result, anyhow};
use bc_core::Clock;
use bc_storage::KvStore;
use gloo_storage::{LocalStorage, Storage};

#[derive(Debug, Default)]
pub struct LocalStorageStore;

impl KvStore for LocalStorageStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        LocalStorage::raw()
            .get_item(key)
            .map_err(|err| anyhow!("localStorage read of `{key}` failed: {err:?}"))
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        LocalStorage::raw()
            .set_item(key, value)
            .map_err(|err| anyhow!("localStorage write of `{key}` failed: {err:?}"))
    }

    fn remove(&self, key: &str) -> Result<()> {
        LocalStorage::raw()
            .remove_item(key)
            .map_err(|err| anyhow!("localStorage remove of `{key}` failed: {err:?}"))
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct JsClock;

impl Clock for JsClock {
    fn now_epoch_ms(&self) -> u64 {
        js_sys::Date::now() as u64
    }
}
