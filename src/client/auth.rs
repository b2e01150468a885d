//! Authentication handling for the Netatmo API.
//!
//! This module performs the OAuth2 password grant against the Netatmo token
//! endpoint and holds the resulting token pair for the lifetime of the client.
//! The token is obtained once; there is no refresh or persistence.

use anyhow::Result;
use crate::client::types::{TokenRequest, TokenSet};
use crate::config::Config;
use reqwest::Client;

/// # Netatmo Authentication Handler
///
/// Exchanges the credentials from `~/.pynetatmo.conf` for an access/refresh
/// token pair via one form-encoded POST to `/oauth2/token`.
///
/// ## Scopes
///
/// The grant requests the space-separated scopes from the credentials file
/// (e.g. `read_thermostat write_thermostat`); the endpoint answers with the
/// scopes actually granted, which are kept on the [`TokenSet`].
pub struct NetatmoAuth {
    /// Base URL of the Netatmo API
    base_url: String,
    /// HTTP client for authentication requests
    client: Client,
    /// Token pair from the last successful grant
    tokens: Option<TokenSet>,
}

impl NetatmoAuth {
    pub fn new(base_url: String) -> Self {
        Self {
            base_url,
            client: Client::new(),
            tokens: None,
        }
    }

    pub async fn authenticate(&mut self, config: &Config) -> Result<()> {
        tracing::info!("Attempting authentication for user: {}", config.user);

        let token_request = TokenRequest {
            grant_type: "password".to_string(),
            username: config.user.clone(),
            password: config.password.clone(),
            client_id: config.client_id.clone(),
            client_secret: config.client_secret.clone(),
            scope: config.scope.clone(),
        };
        let token_url = format!("{}/oauth2/token", self.base_url);

        tracing::debug!("Making token request to: {}", token_url);

        let response = self
            .client
            .post(&token_url)
            .form(&token_request)
            .timeout(std::time::Duration::from_secs(10))
            .send()
            .await
            .map_err(|e| {
                tracing::error!("Network error during authentication: {}", e);
                anyhow::anyhow!("Failed to connect to Netatmo API at {}: {}", self.base_url, e)
            })?;

        let status = response.status();
        tracing::debug!("Token response status: {}", status);

        if !status.is_success() {
            let error_body = response.text().await.unwrap_or_else(|_| "Unable to read error response".to_string());
            tracing::error!("Authentication failed with status {}: {}", status, error_body);

            match status.as_u16() {
                400 => anyhow::bail!("Token request rejected ({}): {}. Check client_id, client_secret and scope.", status, error_body),
                401 => anyhow::bail!("Authentication failed ({}): {}. Invalid user or password.", status, error_body),
                403 => anyhow::bail!("Access denied ({}): {}. The application may lack the requested scopes.", status, error_body),
                500..=599 => anyhow::bail!("Netatmo server error ({}): {}", status, error_body),
                _ => anyhow::bail!("Authentication failed with status {}: {}", status, error_body),
            }
        }

        let tokens: TokenSet = response.json().await
            .map_err(|e| {
                tracing::error!("Failed to parse token response: {}", e);
                anyhow::anyhow!("Invalid response from Netatmo token endpoint: {}", e)
            })?;

        tracing::info!("Authentication successful for user: {}", config.user);
        tracing::debug!(
            "Received access token: {}... (scopes: {})",
            &tokens.access_token[..tokens.access_token.len().min(10)],
            tokens.scope.join(" ")
        );
        self.tokens = Some(tokens);

        Ok(())
    }

    pub fn access_token(&self) -> Option<&str> {
        self.tokens.as_ref().map(|t| t.access_token.as_str())
    }

    pub fn token_set(&self) -> Option<&TokenSet> {
        self.tokens.as_ref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.tokens.is_some()
    }

    pub fn set_token_set(&mut self, tokens: TokenSet) {
        self.tokens = Some(tokens);
    }
}
