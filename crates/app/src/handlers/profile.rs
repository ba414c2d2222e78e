//! The signed-in user's profile.

use relay_cache::{CacheClient, QueryKey};
use relay_client::RelayApi;
use relay_core::{SessionContext, UserProfile};

use crate::error::{AppError, AppResult};

/// Fetch the current user's profile, served from the cache when fresh.
pub async fn my_profile(
    api: &RelayApi,
    cache: &CacheClient,
    ctx: &SessionContext,
) -> AppResult<UserProfile> {
    cache
        .fetch(&QueryKey::UserProfile, || async {
            api.profile(ctx).await.map_err(AppError::from)
        })
        .await
}
