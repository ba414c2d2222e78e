//! Typed handlers for every user-facing operation.

pub mod auth;
pub mod payment;
pub mod posts;
pub mod profile;
