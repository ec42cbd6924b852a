//! TimeSide HTTP Client
//!
//! A small, typed client for the TimeSide audio analysis API, covering the
//! operations the batch importer needs: collections (selections), pipelines
//! (experiences), items and jobs (tasks).
//!
//! The importer never talks to [`TimesideClient`] directly; it goes through
//! the [`RemoteClient`] trait so the engine can be exercised against an
//! in-memory double.
//!
//! # Example
//!
//! ```no_run
//! use timeside_client::TimesideClient;
//!
//! # async fn example() -> timeside_client::Result<()> {
//! let client = TimesideClient::new("https://sandbox.wasabi.telemeta.org")
//!     .login("user", "secret")
//!     .await?;
//!
//! for collection in client.list_collections().await? {
//!     println!("{} {}", collection.id, collection.title);
//! }
//! # Ok(())
//! # }
//! ```

mod auth;
mod collections;
pub mod error;
mod items;
mod jobs;
mod pipelines;
mod remote;

pub use error::{ClientError, Result};
pub use remote::RemoteClient;

use reqwest::{Client, Method, RequestBuilder};
use serde::de::DeserializeOwned;
use timeside_core::reference::API_ROOT;

/// HTTP client for the TimeSide API
#[derive(Debug, Clone)]
pub struct TimesideClient {
    /// Base URL of the server (e.g., "https://sandbox.wasabi.telemeta.org")
    base_url: String,
    /// HTTP client instance
    client: Client,
    /// Bearer token obtained by [`TimesideClient::login`]
    token: Option<String>,
}

impl TimesideClient {
    /// Create a new, unauthenticated client
    ///
    /// # Example
    /// ```
    /// use timeside_client::TimesideClient;
    ///
    /// let client = TimesideClient::new("http://localhost:9080/");
    /// assert_eq!(client.base_url(), "http://localhost:9080");
    /// ```
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(base_url, Client::new())
    }

    /// Create a new client with a custom HTTP client
    ///
    /// This allows you to configure timeouts, proxies, TLS settings, etc.
    pub fn with_client(base_url: impl Into<String>, client: Client) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
            token: None,
        }
    }

    /// Get the base URL of the server
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Whether a bearer token is attached to requests
    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    /// Absolute URL of an API path such as `/selections/`
    fn endpoint(&self, path: &str) -> String {
        format!("{}{}{}", self.base_url, API_ROOT, path)
    }

    /// Start a request, attaching the bearer token when logged in
    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let builder = self.client.request(method, self.endpoint(path));
        match &self.token {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    // =============================================================================
    // Response Handlers
    // =============================================================================

    /// Handle an API response and deserialize JSON
    ///
    /// Non-success responses are turned into [`ClientError::ApiError`]
    /// carrying the raw body, which the caller may log but never parses.
    async fn handle_response<T: DeserializeOwned>(&self, response: reqwest::Response) -> Result<T> {
        let status = response.status();

        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(ClientError::api_error(status.as_u16(), error_text));
        }

        response
            .json()
            .await
            .map_err(|e| ClientError::ParseError(format!("Failed to parse JSON response: {}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_creation() {
        let client = TimesideClient::new("http://localhost:9080");
        assert_eq!(client.base_url(), "http://localhost:9080");
        assert!(!client.is_authenticated());
    }

    #[test]
    fn test_client_trims_trailing_slash() {
        let client = TimesideClient::new("http://localhost:9080/");
        assert_eq!(client.base_url(), "http://localhost:9080");
    }

    #[test]
    fn test_endpoint_includes_api_root() {
        let client = TimesideClient::with_client("http://localhost:9080", Client::new());
        assert_eq!(
            client.endpoint("/tasks/"),
            "http://localhost:9080/timeside/api/tasks/"
        );
    }
}
