/// Errors from the REST client layer.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// The HTTP request itself failed (network, DNS, TLS, etc.).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The service returned a non-2xx status code.
    #[error("API error ({status}): {body}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Raw response body for debugging.
        body: String,
    },

    /// The service returned 2xx but no body. Every call is expected to
    /// produce one, so this is a failure, never a silent success.
    #[error("Empty response body from {method} {path}")]
    EmptyBody {
        method: &'static str,
        path: String,
    },

    /// The response body was not valid JSON for the expected type.
    #[error("Failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),
}
