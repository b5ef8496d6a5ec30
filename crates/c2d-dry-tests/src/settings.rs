// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! In-memory settings store fake for testing without filesystem I/O.

use c2d_core::{SettingsError, SettingsStore};
use std::collections::HashMap;
use std::io;
use std::sync::{Arc, Mutex};

/// In-memory implementation of [`SettingsStore`] for testing.
///
/// Clones share state, so a test can hand one clone to a
/// [`SettingsService`](c2d_core::SettingsService) and inspect the other.
///
/// # Example
///
/// ```
/// use c2d_core::{Settings, SettingsService};
/// use c2d_dry_tests::InMemorySettingsStore;
///
/// let store = InMemorySettingsStore::new();
/// let service = SettingsService::new(store.clone());
///
/// service.save("collision", &Settings::default()).unwrap();
/// assert_eq!(store.load_count(), 0);
/// assert_eq!(store.save_count(), 1);
/// ```
#[derive(Clone, Default)]
pub struct InMemorySettingsStore {
    inner: Arc<Mutex<Inner>>,
}

#[derive(Default)]
struct Inner {
    data: HashMap<String, Vec<u8>>,
    load_count: usize,
    save_count: usize,
    fail_on_load: bool,
    fail_on_save: bool,
}

impl InMemorySettingsStore {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store holding `data` under `key`.
    pub fn with_entry(key: &str, data: impl Into<Vec<u8>>) -> Self {
        let store = Self::new();
        store.lock().data.insert(key.to_string(), data.into());
        store
    }

    /// Configure the store to fail on load operations.
    pub fn set_fail_on_load(&self, fail: bool) {
        self.lock().fail_on_load = fail;
    }

    /// Configure the store to fail on save operations.
    pub fn set_fail_on_save(&self, fail: bool) {
        self.lock().fail_on_save = fail;
    }

    /// Number of `load_raw` attempts, failed ones included.
    pub fn load_count(&self) -> usize {
        self.lock().load_count
    }

    /// Number of `save_raw` attempts, failed ones included.
    pub fn save_count(&self) -> usize {
        self.lock().save_count
    }

    /// Raw blob stored under `key`, if any.
    pub fn get(&self, key: &str) -> Option<Vec<u8>> {
        self.lock().data.get(key).cloned()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Inner> {
        self.inner.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl SettingsStore for InMemorySettingsStore {
    fn load_raw(&self, key: &str) -> Result<Vec<u8>, SettingsError> {
        let mut inner = self.lock();
        inner.load_count += 1;

        if inner.fail_on_load {
            return Err(io::Error::other("simulated load failure").into());
        }

        inner.data.get(key).cloned().ok_or(SettingsError::NotFound)
    }

    fn save_raw(&self, key: &str, data: &[u8]) -> Result<(), SettingsError> {
        let mut inner = self.lock();
        inner.save_count += 1;

        if inner.fail_on_save {
            return Err(io::Error::other("simulated save failure").into());
        }

        inner.data.insert(key.to_string(), data.to_vec());
        Ok(())
    }
}
