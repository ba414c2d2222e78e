//! Typed endpoint surface for the campus delivery service.
//!
//! One method per REST endpoint. Authenticated calls take a
//! [`SessionContext`] and attach its bearer token; the two auth
//! endpoints are the only unauthenticated writes.

use serde::{Deserialize, Serialize};

use relay_core::forms::{NewPost, RegisterForm};
use relay_core::{Credentials, Post, PostStatus, SessionContext, SessionUser, UserProfile};

use crate::error::ClientError;
use crate::rest::RestClient;

/// Response body of `POST /api/auth/login`.
#[derive(Debug, Deserialize)]
struct LoginResponse {
    token: String,
    user: SessionUser,
}

/// Request body of `PUT /api/posts/{id}`.
#[derive(Debug, Serialize)]
struct UpdateStatusBody {
    status: PostStatus,
}

/// Typed API client for the delivery service.
pub struct RelayApi {
    rest: RestClient,
}

impl RelayApi {
    /// Create an API client for a service base URL.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            rest: RestClient::new(base_url),
        }
    }

    /// Create an API client over an existing [`RestClient`].
    pub fn with_rest(rest: RestClient) -> Self {
        Self { rest }
    }

    /// Register a new account. The service's acknowledgement body is
    /// returned as raw JSON; callers only rely on it being non-empty.
    pub async fn register(&self, form: &RegisterForm) -> Result<serde_json::Value, ClientError> {
        self.rest.post("/api/auth/register", form, None).await
    }

    /// Sign in with credentials, producing a [`SessionContext`].
    pub async fn sign_in(&self, credentials: &Credentials) -> Result<SessionContext, ClientError> {
        let response: LoginResponse = self.rest.post("/api/auth/login", credentials, None).await?;
        tracing::info!(user = %response.user.email, "Signed in");
        Ok(SessionContext::new(response.user, response.token))
    }

    /// All open posts, unauthenticated browse.
    pub async fn list_posts(&self) -> Result<Vec<Post>, ClientError> {
        self.rest.get("/api/posts", None).await
    }

    /// Create a delivery request post.
    pub async fn create_post(
        &self,
        ctx: &SessionContext,
        post: &NewPost,
    ) -> Result<Post, ClientError> {
        self.rest
            .post("/api/posts", post, Some(ctx.token()))
            .await
    }

    /// Fetch a single post by id.
    pub async fn get_post(&self, ctx: &SessionContext, id: &str) -> Result<Post, ClientError> {
        self.rest
            .get(&format!("/api/posts/{id}"), Some(ctx.token()))
            .await
    }

    /// Move a post to `status`. Returns the updated post.
    pub async fn update_status(
        &self,
        ctx: &SessionContext,
        id: &str,
        status: PostStatus,
    ) -> Result<Post, ClientError> {
        self.rest
            .put(
                &format!("/api/posts/{id}"),
                &UpdateStatusBody { status },
                Some(ctx.token()),
            )
            .await
    }

    /// Delete a post. The acknowledgement body is returned as raw JSON.
    pub async fn delete_post(
        &self,
        ctx: &SessionContext,
        id: &str,
    ) -> Result<serde_json::Value, ClientError> {
        self.rest
            .delete(&format!("/api/posts/{id}"), Some(ctx.token()))
            .await
    }

    /// The signed-in user's own posts.
    pub async fn own_posts(&self, ctx: &SessionContext) -> Result<Vec<Post>, ClientError> {
        self.rest
            .get("/api/posts/own/posts", Some(ctx.token()))
            .await
    }

    /// The signed-in user's profile.
    pub async fn profile(&self, ctx: &SessionContext) -> Result<UserProfile, ClientError> {
        self.rest
            .get("/api/users/profile", Some(ctx.token()))
            .await
    }
}
