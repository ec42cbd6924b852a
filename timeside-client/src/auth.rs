//! Token authentication

use crate::TimesideClient;
use crate::error::{ClientError, Result};
use reqwest::Method;
use timeside_core::dto::auth::{TokenPair, TokenRequest};
use tracing::debug;

impl TimesideClient {
    /// Exchange credentials for a JWT and attach it to every later request
    ///
    /// The refresh token is not used: an import run is expected to finish
    /// within the access token lifetime.
    pub async fn login(mut self, username: &str, password: &str) -> Result<Self> {
        let response = self
            .request(Method::POST, "/token/")
            .json(&TokenRequest {
                username: username.to_string(),
                password: password.to_string(),
            })
            .send()
            .await?;

        let pair: TokenPair = self.handle_response(response).await?;
        if pair.access.is_empty() {
            return Err(ClientError::NotAuthenticated(
                "empty access token".to_string(),
            ));
        }

        debug!(username, "Obtained access token");
        self.token = Some(pair.access);
        Ok(self)
    }
}
