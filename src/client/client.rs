use anyhow::Result;
use chrono::{DateTime, Utc};
use reqwest::Client;
use crate::client::{
    auth::NetatmoAuth,
    types::*,
};
use crate::config::Config;

/// Default base URL of the Netatmo cloud API.
pub const DEFAULT_BASE_URL: &str = "https://api.netatmo.com";

pub struct NetatmoClient {
    base_url: String,
    client: Client,
    auth: NetatmoAuth,
}

impl Default for NetatmoClient {
    fn default() -> Self {
        Self::new()
    }
}

impl NetatmoClient {
    pub fn new() -> Self {
        Self::with_base_url(DEFAULT_BASE_URL.to_string())
    }

    /// Client against a non-default base URL (test servers).
    pub fn with_base_url(base_url: String) -> Self {
        Self {
            client: Client::new(),
            auth: NetatmoAuth::new(base_url.clone()),
            base_url,
        }
    }

    pub async fn authenticate(&mut self, config: &Config) -> Result<()> {
        self.auth.authenticate(config).await
    }

    pub fn is_authenticated(&self) -> bool {
        self.auth.is_authenticated()
    }

    pub fn get_token_preview(&self) -> Option<String> {
        self.auth.access_token().map(|t| format!("{}...", &t[..t.len().min(10)]))
    }

    pub fn set_token_set(&mut self, tokens: TokenSet) {
        self.auth.set_token_set(tokens);
    }

    pub fn token_set(&self) -> Option<&TokenSet> {
        self.auth.token_set()
    }

    fn access_token(&self) -> Result<&str> {
        match self.auth.access_token() {
            Some(token) => {
                tracing::debug!("Using access token: {}...", &token[..token.len().min(10)]);
                Ok(token)
            },
            None => {
                tracing::error!("Attempted to make API request without access token");
                anyhow::bail!("Not authenticated - call authenticate() before thermostat operations")
            },
        }
    }

    // Thermostat operations

    /// Fetch the full thermostat snapshot for one relay.
    ///
    /// Returns the `body` field of the `getthermostatsdata` response.
    pub async fn get_thermostats_data(&self, device_id: &str) -> Result<ThermostatsData> {
        let access_token = self.access_token()?;
        let url = format!(
            "{}/api/getthermostatsdata?access_token={}&device_id={}",
            self.base_url,
            urlencoding::encode(access_token),
            urlencoding::encode(device_id),
        );

        tracing::debug!("Fetching thermostat data for device: {}", device_id);

        let response = self
            .client
            .post(&url)
            .send()
            .await
            .map_err(|e| {
                tracing::error!("Network error fetching thermostat data: {}", e);
                anyhow::anyhow!("Failed to connect to Netatmo API: {}", e)
            })?;

        let status = response.status();
        tracing::debug!("Thermostat data response status: {}", status);

        if !status.is_success() {
            let error_body = response.text().await.unwrap_or_else(|_| "Unable to read error response".to_string());
            tracing::error!("Failed to fetch thermostat data with status {}: {}", status, error_body);

            match status.as_u16() {
                401 => anyhow::bail!("Access token expired or invalid ({}): {}", status, error_body),
                403 => anyhow::bail!("Token lacks the read_thermostat scope ({}): {}", status, error_body),
                404 => anyhow::bail!("Unknown device id {} ({}): {}", device_id, status, error_body),
                500..=599 => anyhow::bail!("Netatmo server error ({}): {}", status, error_body),
                _ => anyhow::bail!("Failed to fetch thermostat data with status {}: {}", status, error_body),
            }
        }

        let envelope: ApiEnvelope<ThermostatsData> = response.json().await
            .map_err(|e| {
                tracing::error!("Failed to parse thermostat data response: {}", e);
                anyhow::anyhow!("Invalid response format from Netatmo API: {}", e)
            })?;

        tracing::debug!("Snapshot contains {} device(s)", envelope.body.devices.len());
        Ok(envelope.body)
    }

    /// Module ids paired with the given relay, in snapshot order.
    pub async fn get_module_ids(&self, device_id: &str) -> Result<Vec<String>> {
        let snapshot = self.get_thermostats_data(device_id).await?;
        Ok(snapshot.module_ids(device_id))
    }

    /// Current and target temperatures of every module on the given relay.
    pub async fn get_current_temperatures(&self, device_id: &str) -> Result<Temperatures> {
        let snapshot = self.get_thermostats_data(device_id).await?;
        Ok(snapshot.temperatures(device_id))
    }

    /// Push a setpoint change to one module.
    ///
    /// `endtime` and `temp` are required by the API for some modes (`manual`
    /// needs both, `max` needs `endtime`); they are omitted from the request
    /// entirely when `None`.
    pub async fn set_therm_point(
        &self,
        device_id: &str,
        module_id: &str,
        mode: SetpointMode,
        endtime: Option<DateTime<Utc>>,
        temp: Option<f64>,
    ) -> Result<()> {
        let access_token = self.access_token()?;
        let mut params = vec![
            format!("access_token={}", urlencoding::encode(access_token)),
            format!("device_id={}", urlencoding::encode(device_id)),
            format!("module_id={}", urlencoding::encode(module_id)),
            format!("setpoint_mode={}", mode.as_str()),
        ];
        if let Some(endtime) = endtime {
            params.push(format!("setpoint_endtime={}", endtime.timestamp()));
        }
        if let Some(temp) = temp {
            params.push(format!("setpoint_temp={}", temp));
        }

        let url = format!("{}/api/setthermpoint?{}", self.base_url, params.join("&"));

        tracing::info!("Setting {} mode on module {} of device {}", mode.as_str(), module_id, device_id);

        let response = self
            .client
            .post(&url)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let error_body = response.text().await.unwrap_or_else(|_| "Unable to read error response".to_string());
            tracing::error!("Failed to set therm point with status {}: {}", status, error_body);
            anyhow::bail!("Failed to set therm point with status {}: {}", status, error_body);
        }

        let body: serde_json::Value = response.json().await?;
        tracing::debug!("Set therm point response: {}", body);

        Ok(())
    }
}
