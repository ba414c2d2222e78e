/// Errors from the cache layer.
#[derive(Debug, thiserror::Error)]
pub enum CacheError {
    /// A cached value could not be encoded or decoded.
    #[error("Cache serialization failed: {0}")]
    Serde(#[from] serde_json::Error),
}
