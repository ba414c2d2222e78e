//! End-to-end cache scenarios: optimistic status updates and deletions
//! over a post list, as the handlers drive them.

use std::sync::atomic::{AtomicUsize, Ordering};

use serde_json::{json, Value};

use relay_cache::{run_optimistic, CacheClient, CacheError, QueryKey};

/// Set a post's status within a cached list, leaving other posts alone.
fn set_status(list: Option<Value>, id: &str, status: &str) -> Option<Value> {
    let mut list = list?;
    if let Some(posts) = list.as_array_mut() {
        for post in posts {
            if post["_id"] == id {
                post["status"] = json!(status);
            }
        }
    }
    Some(list)
}

/// Remove a post from a cached list.
fn remove_post(list: Option<Value>, id: &str) -> Option<Value> {
    let mut list = list?;
    if let Some(posts) = list.as_array_mut() {
        posts.retain(|post| post["_id"] != id);
    }
    Some(list)
}

fn open_post(id: &str) -> Value {
    json!({ "_id": id, "status": "Open" })
}

/// A failed status update reverts the list to its pre-call snapshot and
/// surfaces the error.
#[tokio::test]
async fn failed_status_update_rolls_back() {
    let cache = CacheClient::new();
    let key = QueryKey::OwnPosts;
    cache.set_raw(&key, Some(json!([open_post("1")])));

    let result: Result<(), &str> = run_optimistic(
        &cache,
        &key,
        |list| set_status(list, "1", "Accepted"),
        async { Err("network down") },
    )
    .await;

    assert_eq!(result.unwrap_err(), "network down");
    assert_eq!(cache.get_raw(&key), Some(json!([open_post("1")])));
}

/// A successful delete shows the shortened list immediately, and the next
/// read refetches server truth.
#[tokio::test]
async fn successful_delete_is_visible_then_refetched() {
    let cache = CacheClient::new();
    let key = QueryKey::OwnPosts;
    cache.set_raw(
        &key,
        Some(json!([open_post("1"), open_post("2")])),
    );

    let result: Result<(), CacheError> = run_optimistic(
        &cache,
        &key,
        |list| remove_post(list, "1"),
        async {
            // While the request is in flight the optimistic removal is
            // not yet observable here (we hold no reference), but it is
            // the value in the cache the moment apply ran.
            Ok(())
        },
    )
    .await;
    assert!(result.is_ok());

    // Optimistic value survives the settle...
    assert_eq!(cache.get_raw(&key), Some(json!([open_post("2")])));

    // ...but the entry is stale, so the next read goes to the server.
    let refetches = AtomicUsize::new(0);
    let fetched: Result<Value, CacheError> = cache
        .fetch(&key, || async {
            refetches.fetch_add(1, Ordering::SeqCst);
            Ok(json!([open_post("2")]))
        })
        .await;
    assert!(fetched.is_ok());
    assert_eq!(refetches.load(Ordering::SeqCst), 1);

    // A second read is served from the now-fresh cache.
    let fetched: Result<Value, CacheError> = cache
        .fetch(&key, || async {
            refetches.fetch_add(1, Ordering::SeqCst);
            Ok(json!([]))
        })
        .await;
    assert!(fetched.is_ok());
    assert_eq!(refetches.load(Ordering::SeqCst), 1);
}

/// A succeeding mutation invalidates the key no matter what `apply`
/// produced, forcing reconciliation with the server.
#[tokio::test]
async fn success_always_invalidates() {
    let cache = CacheClient::new();
    let key = QueryKey::Post("9".into());
    cache.set_raw(&key, Some(json!({ "_id": "9", "status": "Open" })));

    // Even an apply that changes nothing must end in an invalidated entry.
    let result: Result<(), CacheError> =
        run_optimistic(&cache, &key, |snapshot| snapshot, async { Ok(()) }).await;
    assert!(result.is_ok());

    let refetches = AtomicUsize::new(0);
    let _: Result<Value, CacheError> = cache
        .fetch(&key, || async {
            refetches.fetch_add(1, Ordering::SeqCst);
            Ok(json!({ "_id": "9", "status": "Requested" }))
        })
        .await;
    assert_eq!(refetches.load(Ordering::SeqCst), 1);
}

/// Mutating a key with no cached value yet: snapshot is `None`, rollback
/// restores the absence.
#[tokio::test]
async fn rollback_on_empty_key_restores_absence() {
    let cache = CacheClient::new();
    let key = QueryKey::Post("404".into());

    let result: Result<(), &str> = run_optimistic(
        &cache,
        &key,
        |_| Some(json!({ "_id": "404", "status": "Accepted" })),
        async { Err("no such post") },
    )
    .await;

    assert!(result.is_err());
    assert_eq!(cache.get_raw(&key), None);
}
