//! Domain types for the campus delivery service.
//!
//! Everything here is plain data plus pure logic: the [`Post`] wire
//! model, the closed [`PostStatus`] ordering with its display helpers,
//! session/user types, and validated input forms. No I/O lives in this
//! crate.

pub mod error;
pub mod forms;
pub mod post;
pub mod session;
pub mod status;
pub mod types;

pub use error::CoreError;
pub use post::{Post, PostAuthor, StatusChange};
pub use session::{Credentials, SessionContext, SessionUser, UserProfile};
pub use status::{PostStatus, StatusTier};
