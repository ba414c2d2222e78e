//! Handler layer for the campus delivery client.
//!
//! Every user-facing operation is a plain async function taking its
//! collaborators explicitly: the typed API client, the shared cache
//! handle, and (where authentication is needed) the session context.
//! There are no ambient globals and no UI framework; callers surface
//! the returned errors however they like.

pub mod config;
pub mod error;
pub mod handlers;

pub use config::AppConfig;
pub use error::{AppError, AppResult};
