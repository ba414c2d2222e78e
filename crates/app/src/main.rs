//! Smoke binary: sign in (when credentials are configured) and log the
//! current open posts. Useful for checking connectivity against a
//! running service instance.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use relay_app::handlers::{auth, posts, profile};
use relay_app::AppConfig;
use relay_cache::CacheClient;
use relay_client::RelayApi;
use relay_core::status::{reached, PostStatus};
use relay_core::Credentials;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "relay_app=debug,relay_client=debug,relay_cache=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = AppConfig::from_env();
    tracing::info!(api_url = %config.api_url, "Starting smoke client");

    let api = RelayApi::new(config.api_url.clone());
    let cache = CacheClient::new();

    let open_posts = posts::browse_posts(&api, &cache).await?;
    tracing::info!(count = open_posts.len(), "Fetched public posts");
    for post in &open_posts {
        let progress: String = PostStatus::ALL
            .iter()
            .map(|label| if reached(*label, post.status) { '#' } else { '-' })
            .collect();
        tracing::info!(id = %post.id, status = %post.status, progress = %progress, title = %post.title);
    }

    let (Some(email), Some(password)) = (config.email, config.password) else {
        tracing::info!("No credentials configured, skipping authenticated checks");
        return Ok(());
    };

    let ctx = auth::sign_in(&api, &Credentials { email, password }).await?;
    let me = profile::my_profile(&api, &cache, &ctx).await?;
    tracing::info!(name = %me.name, hall = %me.hall_name, "Profile fetched");

    let own = posts::own_posts(&api, &cache, &ctx).await?;
    tracing::info!(count = own.len(), "Fetched own posts");

    auth::sign_out(&cache, ctx);
    Ok(())
}
