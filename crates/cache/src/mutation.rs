//! Optimistic mutation controller.
//!
//! [`run_optimistic`] performs one write against the service while
//! keeping a cache entry visually consistent, with a strict ordering:
//!
//! 1. acquire the per-key mutation lock (overlapping mutations on the
//!    same key serialize, so a rollback always targets a settled value),
//! 2. cancel any in-flight fetch for the key,
//! 3. snapshot the current cache value,
//! 4. write `apply(snapshot)` into the cache — the only visible effect
//!    before the request resolves,
//! 5. await the request,
//! 6. on failure restore the snapshot,
//! 7. at settle, invalidate the key unconditionally so the next read
//!    refetches server truth. No path skips the invalidation.

use std::future::Future;

use serde_json::Value;

use crate::key::QueryKey;
use crate::store::CacheClient;

/// Run one write operation with an optimistic update of `key`.
///
/// `apply` must be pure: it maps the snapshotted cache value to the
/// presumed post-write value and must not assume the request has
/// completed. Returning `None` removes the cached value (optimistic
/// delete). The request's error propagates unchanged after rollback;
/// nothing is retried.
pub async fn run_optimistic<T, E, Fut>(
    cache: &CacheClient,
    key: &QueryKey,
    apply: impl FnOnce(Option<Value>) -> Option<Value>,
    request: Fut,
) -> Result<T, E>
where
    Fut: Future<Output = Result<T, E>>,
{
    let lock = cache.mutation_lock(key);
    let _guard = lock.lock().await;

    cache.cancel_in_flight(key);
    let snapshot = cache.get_raw(key);
    cache.set_raw(key, apply(snapshot.clone()));
    tracing::debug!(%key, "Optimistic value applied");

    let result = request.await;
    match &result {
        Ok(_) => {
            tracing::debug!(%key, "Mutation succeeded");
        }
        Err(_) => {
            tracing::debug!(%key, "Mutation failed, rolling back");
            cache.set_raw(key, snapshot);
        }
    }

    // Settle: converge to server truth on the next read, success or not.
    cache.invalidate(key);
    result
}
