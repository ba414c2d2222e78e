//! Session identity types.
//!
//! A [`SessionContext`] is created by signing in and passed explicitly
//! into every operation that needs authentication; there is no ambient
//! session store. Dropping the context (or calling the sign-out handler)
//! ends the session from this client's point of view.

use serde::{Deserialize, Serialize};

/// Credentials submitted to the sign-in endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

/// The signed-in user as reported by the service at login.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionUser {
    #[serde(rename = "_id")]
    pub id: String,
    /// Campus student ID.
    #[serde(rename = "stdId")]
    pub student_id: String,
    pub name: String,
    pub email: String,
    pub hall_name: String,
    pub role: String,
}

/// Full profile returned by `GET /api/users/profile`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(rename = "stdId")]
    pub student_id: String,
    pub name: String,
    pub email: String,
    pub hall_name: String,
    #[serde(default)]
    pub description: String,
    pub role: String,
}

/// Identity plus bearer token for one signed-in user.
///
/// Holds everything an authenticated call needs. Created at sign-in,
/// never mutated afterwards.
#[derive(Debug, Clone)]
pub struct SessionContext {
    pub user: SessionUser,
    token: String,
}

impl SessionContext {
    pub fn new(user: SessionUser, token: String) -> Self {
        Self { user, token }
    }

    /// The bearer token attached to authenticated requests.
    pub fn token(&self) -> &str {
        &self.token
    }
}
