//! Post browsing, creation, acceptance, and deletion.

use serde_json::{json, Value};
use validator::Validate;

use relay_cache::{run_optimistic, CacheClient, QueryKey};
use relay_client::RelayApi;
use relay_core::forms::NewPost;
use relay_core::{Post, PostStatus, SessionContext};

use crate::error::{AppError, AppResult};

/// All open posts, served from the cache when fresh.
pub async fn browse_posts(api: &RelayApi, cache: &CacheClient) -> AppResult<Vec<Post>> {
    cache
        .fetch(&QueryKey::AllPosts, || async {
            api.list_posts().await.map_err(AppError::from)
        })
        .await
}

/// A single post by id, served from the cache when fresh.
pub async fn view_post(
    api: &RelayApi,
    cache: &CacheClient,
    ctx: &SessionContext,
    id: &str,
) -> AppResult<Post> {
    cache
        .fetch(&QueryKey::Post(id.to_string()), || async {
            api.get_post(ctx, id).await.map_err(AppError::from)
        })
        .await
}

/// The signed-in user's own posts, served from the cache when fresh.
pub async fn own_posts(
    api: &RelayApi,
    cache: &CacheClient,
    ctx: &SessionContext,
) -> AppResult<Vec<Post>> {
    cache
        .fetch(&QueryKey::OwnPosts, || async {
            api.own_posts(ctx).await.map_err(AppError::from)
        })
        .await
}

/// Create a delivery request post and stale both post lists.
pub async fn create_post(
    api: &RelayApi,
    cache: &CacheClient,
    ctx: &SessionContext,
    form: &NewPost,
) -> AppResult<Post> {
    form.validate()?;
    let post = api.create_post(ctx, form).await?;
    tracing::info!(post_id = %post.id, "Post created");

    // Two independent invalidations; no multi-key atomicity.
    cache.invalidate(&QueryKey::OwnPosts);
    cache.invalidate(&QueryKey::AllPosts);
    Ok(post)
}

/// Accept someone else's post: optimistically move the cached post to
/// `Accepted`, then confirm with the service.
pub async fn accept_post(
    api: &RelayApi,
    cache: &CacheClient,
    ctx: &SessionContext,
    id: &str,
) -> AppResult<Post> {
    let key = QueryKey::Post(id.to_string());
    let updated = run_optimistic(
        cache,
        &key,
        |snapshot| set_status(snapshot, PostStatus::Accepted),
        async {
            api.update_status(ctx, id, PostStatus::Accepted)
                .await
                .map_err(AppError::from)
        },
    )
    .await?;

    cache.invalidate(&QueryKey::AllPosts);
    cache.invalidate(&QueryKey::OwnPosts);
    Ok(updated)
}

/// Delete one of the user's own posts: the cached list drops it
/// immediately and is reconciled with the server after settle.
pub async fn delete_post(
    api: &RelayApi,
    cache: &CacheClient,
    ctx: &SessionContext,
    id: &str,
) -> AppResult<()> {
    run_optimistic(
        cache,
        &QueryKey::OwnPosts,
        |list| remove_from_list(list, id),
        async { api.delete_post(ctx, id).await.map_err(AppError::from) },
    )
    .await?;

    tracing::info!(post_id = id, "Post deleted");
    cache.invalidate(&QueryKey::AllPosts);
    cache.invalidate(&QueryKey::Post(id.to_string()));
    Ok(())
}

/// Optimistically set the status on a cached single-post entry.
pub(crate) fn set_status(snapshot: Option<Value>, status: PostStatus) -> Option<Value> {
    let mut post = snapshot?;
    post["status"] = json!(status);
    Some(post)
}

/// Optimistically set the status of one post inside a cached list.
pub(crate) fn set_status_in_list(
    snapshot: Option<Value>,
    id: &str,
    status: PostStatus,
) -> Option<Value> {
    let mut list = snapshot?;
    if let Some(posts) = list.as_array_mut() {
        for post in posts {
            if post["_id"] == id {
                post["status"] = json!(status);
            }
        }
    }
    Some(list)
}

/// Optimistically remove one post from a cached list.
pub(crate) fn remove_from_list(snapshot: Option<Value>, id: &str) -> Option<Value> {
    let mut list = snapshot?;
    if let Some(posts) = list.as_array_mut() {
        posts.retain(|post| post["_id"] != id);
    }
    Some(list)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_status_rewrites_only_the_status_field() {
        let post = json!({ "_id": "1", "title": "Parcel", "status": "Open" });
        let updated = set_status(Some(post), PostStatus::Accepted).unwrap();
        assert_eq!(updated["status"], "Accepted");
        assert_eq!(updated["title"], "Parcel");
    }

    #[test]
    fn set_status_on_empty_snapshot_stays_empty() {
        assert_eq!(set_status(None, PostStatus::Accepted), None);
    }

    #[test]
    fn set_status_in_list_targets_one_post() {
        let list = json!([
            { "_id": "1", "status": "Open" },
            { "_id": "2", "status": "Open" },
        ]);
        let updated = set_status_in_list(Some(list), "2", PostStatus::Completed).unwrap();
        assert_eq!(updated[0]["status"], "Open");
        assert_eq!(updated[1]["status"], "Completed");
    }

    #[test]
    fn remove_from_list_drops_only_the_target() {
        let list = json!([{ "_id": "1" }, { "_id": "2" }]);
        let updated = remove_from_list(Some(list), "1").unwrap();
        assert_eq!(updated, json!([{ "_id": "2" }]));
    }
}
