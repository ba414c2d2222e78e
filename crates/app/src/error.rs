use relay_cache::CacheError;
use relay_client::ClientError;
use relay_core::CoreError;

/// Application-level error surfaced by the handlers.
///
/// Wraps the layer errors unchanged; nothing here is retried, and no
/// failure is fatal — the worst case is stale cached data until the
/// next read.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `relay-core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A transport or service error from the REST client.
    #[error(transparent)]
    Client(#[from] ClientError),

    /// A cache encode/decode error.
    #[error(transparent)]
    Cache(#[from] CacheError),

    /// A form failed its required-field checks.
    #[error("Validation failed: {0}")]
    Validation(#[from] validator::ValidationErrors),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;
