//! HTTP client for the campus delivery REST API.
//!
//! Two layers:
//!
//! - [`RestClient`] — a thin verb-per-method wrapper over [`reqwest`]
//!   that attaches bearer tokens, parses JSON, and treats an empty
//!   response body as a failure. One attempt per call; no retry, no
//!   backoff.
//! - [`RelayApi`] — the typed endpoint surface (auth, posts, profile)
//!   built on top of it.

pub mod api;
pub mod error;
pub mod rest;

pub use api::RelayApi;
pub use error::ClientError;
pub use rest::RestClient;
