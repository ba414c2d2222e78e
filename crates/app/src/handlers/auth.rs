//! Registration, sign-in, and sign-out.

use validator::Validate;

use relay_cache::CacheClient;
use relay_client::RelayApi;
use relay_core::forms::RegisterForm;
use relay_core::{Credentials, SessionContext};

use crate::error::AppResult;

/// Register a new account after validating the form locally.
pub async fn register(api: &RelayApi, form: &RegisterForm) -> AppResult<serde_json::Value> {
    form.validate()?;
    let ack = api.register(form).await?;
    tracing::info!(email = %form.email, "Account registered");
    Ok(ack)
}

/// Sign in and produce the session context every authenticated handler
/// takes.
pub async fn sign_in(api: &RelayApi, credentials: &Credentials) -> AppResult<SessionContext> {
    Ok(api.sign_in(credentials).await?)
}

/// End the session: the context is consumed and every cached value tied
/// to it is dropped.
pub fn sign_out(cache: &CacheClient, ctx: SessionContext) {
    tracing::info!(user = %ctx.user.email, "Signed out");
    cache.clear();
    drop(ctx);
}
