//! Semantic cache keys.

use std::fmt;

use relay_core::types::PostId;

/// Identifies one cached query result.
///
/// Keys are semantic, not path-based: the same key is shared by every
/// handler that reads or invalidates that data.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum QueryKey {
    /// All open posts (public browse list).
    AllPosts,
    /// The signed-in user's own posts.
    OwnPosts,
    /// A single post by id.
    Post(PostId),
    /// The signed-in user's profile.
    UserProfile,
}

impl fmt::Display for QueryKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QueryKey::AllPosts => f.write_str("posts"),
            QueryKey::OwnPosts => f.write_str("own-posts"),
            QueryKey::Post(id) => write!(f, "post:{id}"),
            QueryKey::UserProfile => f.write_str("user-profile"),
        }
    }
}
