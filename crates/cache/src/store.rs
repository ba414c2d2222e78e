//! The shared query cache.
//!
//! Entries hold the last-known JSON value for a [`QueryKey`], an
//! invalidation flag, and an epoch counter. The epoch is bumped whenever
//! a mutation supersedes the key, so that a read which was already in
//! flight cannot overwrite the newer (optimistic) value when it lands.
//!
//! The entry map sits behind a std `Mutex` that is never held across an
//! await point; per-key `tokio::Mutex` handles serialize mutations.

use std::collections::HashMap;
use std::future::Future;
use std::sync::{Arc, Mutex};

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use crate::error::CacheError;
use crate::key::QueryKey;

#[derive(Default)]
struct Entry {
    value: Option<Value>,
    invalidated: bool,
    epoch: u64,
}

#[derive(Default)]
struct Inner {
    entries: Mutex<HashMap<QueryKey, Entry>>,
    /// Per-key locks serializing optimistic mutations.
    mutation_locks: Mutex<HashMap<QueryKey, Arc<tokio::sync::Mutex<()>>>>,
}

/// Handle to the shared in-memory query cache.
///
/// Cheap to clone; all clones share the same entries. Created once at
/// application start and passed explicitly to every handler.
#[derive(Clone, Default)]
pub struct CacheClient {
    inner: Arc<Inner>,
}

impl CacheClient {
    pub fn new() -> Self {
        Self::default()
    }

    /// Last-known value for `key`, decoded into `T`.
    ///
    /// Returns the value even if the entry is invalidated; staleness only
    /// matters to [`fetch`](Self::fetch).
    pub fn get<T: DeserializeOwned>(&self, key: &QueryKey) -> Result<Option<T>, CacheError> {
        match self.get_raw(key) {
            Some(value) => Ok(Some(serde_json::from_value(value)?)),
            None => Ok(None),
        }
    }

    /// Last-known raw JSON value for `key`.
    pub fn get_raw(&self, key: &QueryKey) -> Option<Value> {
        let entries = self.inner.entries.lock().expect("cache lock poisoned");
        entries.get(key).and_then(|entry| entry.value.clone())
    }

    /// Overwrite the value for `key`, marking it fresh.
    pub fn set<T: Serialize>(&self, key: &QueryKey, value: &T) -> Result<(), CacheError> {
        self.set_raw(key, Some(serde_json::to_value(value)?));
        Ok(())
    }

    /// Overwrite the raw value for `key`; `None` removes the value while
    /// keeping the entry's epoch (an in-flight read must still be
    /// discarded after a removal).
    pub fn set_raw(&self, key: &QueryKey, value: Option<Value>) {
        let mut entries = self.inner.entries.lock().expect("cache lock poisoned");
        let entry = entries.entry(key.clone()).or_default();
        entry.value = value;
        entry.invalidated = false;
    }

    /// Mark `key` stale so the next [`fetch`](Self::fetch) refetches.
    ///
    /// Idempotent: invalidating an already-invalidated key changes
    /// nothing, and the next read still refetches exactly once.
    pub fn invalidate(&self, key: &QueryKey) {
        let mut entries = self.inner.entries.lock().expect("cache lock poisoned");
        let entry = entries.entry(key.clone()).or_default();
        entry.invalidated = true;
        tracing::debug!(%key, "Cache entry invalidated");
    }

    /// Discard any in-flight read for `key` by bumping its epoch. The
    /// stale response is dropped when it arrives instead of overwriting
    /// whatever was written in the meantime.
    pub fn cancel_in_flight(&self, key: &QueryKey) {
        let mut entries = self.inner.entries.lock().expect("cache lock poisoned");
        let entry = entries.entry(key.clone()).or_default();
        entry.epoch += 1;
    }

    /// Whether `key` currently holds a fresh (non-invalidated) value.
    pub fn is_fresh(&self, key: &QueryKey) -> bool {
        let entries = self.inner.entries.lock().expect("cache lock poisoned");
        entries
            .get(key)
            .is_some_and(|entry| entry.value.is_some() && !entry.invalidated)
    }

    /// Drop every entry and per-key lock. Used at sign-out.
    ///
    /// A mutation currently holding its lock keeps it alive through its
    /// own `Arc`; only the map's references are dropped here, so the
    /// lock table cannot grow without bound across sessions.
    pub fn clear(&self) {
        let mut entries = self.inner.entries.lock().expect("cache lock poisoned");
        entries.clear();
        drop(entries);
        let mut locks = self
            .inner
            .mutation_locks
            .lock()
            .expect("cache lock poisoned");
        locks.clear();
        tracing::debug!("Cache cleared");
    }

    /// Read-through fetch.
    ///
    /// Returns the cached value when the entry is fresh; otherwise runs
    /// `fetcher` and stores its result. If a mutation bumps the key's
    /// epoch while the fetch is in flight, the response is returned to
    /// the caller but not written to the cache.
    pub async fn fetch<T, E, F, Fut>(&self, key: &QueryKey, fetcher: F) -> Result<T, E>
    where
        T: Serialize + DeserializeOwned,
        E: From<CacheError>,
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<T, E>>,
    {
        let start_epoch = {
            let mut entries = self.inner.entries.lock().expect("cache lock poisoned");
            let entry = entries.entry(key.clone()).or_default();
            if let Some(value) = &entry.value {
                if !entry.invalidated {
                    tracing::debug!(%key, "Cache hit");
                    return Ok(serde_json::from_value(value.clone()).map_err(CacheError::from)?);
                }
            }
            entry.epoch
        };

        tracing::debug!(%key, "Cache miss, fetching");
        let value = fetcher().await?;
        let raw = serde_json::to_value(&value).map_err(CacheError::from)?;

        let mut entries = self.inner.entries.lock().expect("cache lock poisoned");
        let entry = entries.entry(key.clone()).or_default();
        if entry.epoch == start_epoch {
            entry.value = Some(raw);
            entry.invalidated = false;
        } else {
            tracing::debug!(%key, "Discarding stale fetch response");
        }
        Ok(value)
    }

    /// The per-key lock serializing optimistic mutations on `key`.
    pub(crate) fn mutation_lock(&self, key: &QueryKey) -> Arc<tokio::sync::Mutex<()>> {
        let mut locks = self
            .inner
            .mutation_locks
            .lock()
            .expect("cache lock poisoned");
        Arc::clone(locks.entry(key.clone()).or_default())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
