//! Verb-per-method REST wrapper.
//!
//! Wraps a [`reqwest::Client`] for a single base URL. Each method makes
//! exactly one attempt, optionally attaches `Authorization: Bearer
//! <token>`, and parses a JSON response body.

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::ClientError;

/// HTTP client bound to one service base URL.
pub struct RestClient {
    client: reqwest::Client,
    base_url: String,
}

impl RestClient {
    /// Create a new client for a base URL, e.g. `http://host:5000`.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    /// Create a client reusing an existing [`reqwest::Client`] (useful
    /// for connection pooling across several wrappers).
    pub fn with_client(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }

    /// Base URL this client targets.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// `GET {base_url}{path}`.
    pub async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        token: Option<&str>,
    ) -> Result<T, ClientError> {
        let request = self.authorize(self.client.get(self.url(path)), token);
        Self::send("GET", path, request).await
    }

    /// `POST {base_url}{path}` with a JSON body.
    pub async fn post<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
        token: Option<&str>,
    ) -> Result<T, ClientError> {
        let request = self.authorize(self.client.post(self.url(path)).json(body), token);
        Self::send("POST", path, request).await
    }

    /// `PUT {base_url}{path}` with a JSON body.
    pub async fn put<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
        token: Option<&str>,
    ) -> Result<T, ClientError> {
        let request = self.authorize(self.client.put(self.url(path)).json(body), token);
        Self::send("PUT", path, request).await
    }

    /// `DELETE {base_url}{path}`.
    pub async fn delete<T: DeserializeOwned>(
        &self,
        path: &str,
        token: Option<&str>,
    ) -> Result<T, ClientError> {
        let request = self.authorize(self.client.delete(self.url(path)), token);
        Self::send("DELETE", path, request).await
    }

    // ---- private helpers ----

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn authorize(
        &self,
        request: reqwest::RequestBuilder,
        token: Option<&str>,
    ) -> reqwest::RequestBuilder {
        match token {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    /// Issue the request and parse the JSON body.
    ///
    /// Non-2xx responses become [`ClientError::Api`]; a 2xx response with
    /// an empty body becomes [`ClientError::EmptyBody`].
    async fn send<T: DeserializeOwned>(
        method: &'static str,
        path: &str,
        request: reqwest::RequestBuilder,
    ) -> Result<T, ClientError> {
        tracing::debug!(method, path, "Sending request");
        let response = request.send().await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            tracing::debug!(method, path, status = status.as_u16(), "Request failed");
            return Err(ClientError::Api {
                status: status.as_u16(),
                body,
            });
        }

        if body.trim().is_empty() {
            return Err(ClientError::EmptyBody {
                method,
                path: path.to_string(),
            });
        }

        Ok(serde_json::from_str(&body)?)
    }
}
