//! Wire models for delivery posts.
//!
//! Field names mirror the service's JSON (camelCase, Mongo-style `_id`).

use serde::{Deserialize, Serialize};

use crate::status::PostStatus;
use crate::types::{PostId, Timestamp};

/// A delivery request post as returned by the service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    #[serde(rename = "_id")]
    pub id: PostId,
    /// The post's owner.
    #[serde(rename = "userId")]
    pub user: PostAuthor,
    pub title: String,
    pub description: String,
    pub status: PostStatus,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
    /// Append-only log of status transitions; never truncated client-side.
    #[serde(default)]
    pub status_history: Vec<StatusChange>,
}

/// The user reference embedded in posts and history entries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PostAuthor {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub email: String,
}

/// One entry of a post's status history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusChange {
    pub status: PostStatus,
    pub changed_by: PostAuthor,
    pub changed_at: Timestamp,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_service_json() {
        let json = serde_json::json!({
            "_id": "66b1",
            "userId": { "_id": "u1", "name": "Rahim", "email": "rahim@campus.edu" },
            "title": "Pick up parcel",
            "description": "From the main gate to Hall 3",
            "status": "Open",
            "createdAt": "2026-01-05T10:15:00Z",
            "updatedAt": "2026-01-05T10:15:00Z",
            "statusHistory": [
                {
                    "status": "Open",
                    "changedBy": { "_id": "u1", "name": "Rahim", "email": "rahim@campus.edu" },
                    "changedAt": "2026-01-05T10:15:00Z"
                }
            ]
        });

        let post: Post = serde_json::from_value(json).unwrap();
        assert_eq!(post.id, "66b1");
        assert_eq!(post.user.name, "Rahim");
        assert_eq!(post.status, PostStatus::Open);
        assert_eq!(post.status_history.len(), 1);
        assert_eq!(post.status_history[0].changed_by.id, "u1");
    }

    #[test]
    fn missing_status_history_defaults_to_empty() {
        let json = serde_json::json!({
            "_id": "66b2",
            "userId": { "_id": "u2", "name": "Karim", "email": "karim@campus.edu" },
            "title": "Lunch run",
            "description": "Canteen to library",
            "status": "Accepted",
            "createdAt": "2026-01-06T09:00:00Z",
            "updatedAt": "2026-01-06T09:30:00Z"
        });

        let post: Post = serde_json::from_value(json).unwrap();
        assert!(post.status_history.is_empty());
    }
}
