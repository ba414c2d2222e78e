//! In-memory query cache and optimistic mutation controller.
//!
//! [`CacheClient`] is a keyed store of last-known fetch results shared by
//! all handlers. Reads go through [`CacheClient::fetch`], which refetches
//! only when an entry is missing or invalidated and discards responses
//! that a mutation superseded while they were in flight.
//!
//! [`run_optimistic`] wraps a single write against the service with an
//! optimistic cache update: snapshot, apply, request, rollback on error,
//! and unconditional invalidation at settle so the cache always
//! converges back to server truth.

pub mod error;
pub mod key;
pub mod mutation;
pub mod store;

pub use error::CacheError;
pub use key::QueryKey;
pub use mutation::run_optimistic;
pub use store::CacheClient;
