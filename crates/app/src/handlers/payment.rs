//! Simulated payment completing a delivery.
//!
//! There is no payment backend; "paying" is a validated form plus a
//! status update to `Completed`, optimistically reflected in the owner's
//! post list.

use validator::Validate;

use relay_cache::{run_optimistic, CacheClient, QueryKey};
use relay_client::RelayApi;
use relay_core::forms::PaymentForm;
use relay_core::{Post, PostStatus, SessionContext};

use crate::error::{AppError, AppResult};
use crate::handlers::posts::set_status_in_list;

/// Validate the payment form and mark the post `Completed`.
pub async fn complete_payment(
    api: &RelayApi,
    cache: &CacheClient,
    ctx: &SessionContext,
    post_id: &str,
    form: &PaymentForm,
) -> AppResult<Post> {
    form.validate()?;

    let updated = run_optimistic(
        cache,
        &QueryKey::OwnPosts,
        |list| set_status_in_list(list, post_id, PostStatus::Completed),
        async {
            api.update_status(ctx, post_id, PostStatus::Completed)
                .await
                .map_err(AppError::from)
        },
    )
    .await?;

    tracing::info!(post_id, method = %form.method, amount = form.amount, "Payment completed");
    cache.invalidate(&QueryKey::Post(post_id.to_string()));
    Ok(updated)
}
