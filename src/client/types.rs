//! Type definitions for the Netatmo thermostat API.
//!
//! This module contains the data structures used for communicating with the
//! Netatmo API: the OAuth2 token exchange, the thermostat snapshot returned
//! by `getthermostatsdata`, and the parameters accepted by `setthermpoint`.
//!
//! ## Key Types
//!
//! - [`TokenSet`] - Access/refresh token pair obtained from the OAuth2 password grant
//! - [`ApiEnvelope`] - Standard Netatmo response wrapper (`body` + status metadata)
//! - [`ThermostatsData`] - Snapshot of all devices and their modules
//! - [`SetpointMode`] - Operating modes accepted by the setpoint endpoint
//!
//! ## API Compatibility
//!
//! Netatmo identifies devices and modules by MAC address under the `_id` key,
//! which is renamed to `id` here. Several fields are optional because the API
//! omits them depending on device generation and relay state.

use serde::{Deserialize, Serialize};

/// OAuth2 password-grant request sent to `/oauth2/token`.
///
/// Serialized as a form-encoded body. `scope` is the space-separated grant
/// string from the credentials file (e.g. `"read_thermostat write_thermostat"`).
#[derive(Debug, Serialize)]
pub struct TokenRequest {
    /// Always `"password"` for this client
    pub grant_type: String,
    /// Netatmo account e-mail
    pub username: String,
    /// Netatmo account password
    pub password: String,
    /// Application id from dev.netatmo.com
    pub client_id: String,
    /// Application secret from dev.netatmo.com
    pub client_secret: String,
    /// Space-separated scopes being requested
    pub scope: String,
}

/// Token pair returned by the OAuth2 token endpoint.
///
/// Obtained once at startup; this client never refreshes it, although the
/// refresh token is kept for callers that want to persist it themselves.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenSet {
    /// Bearer token for API calls
    pub access_token: String,
    /// Refresh token (stored, unused by this client)
    pub refresh_token: String,
    /// Scopes actually granted; the token endpoint returns these as an array
    #[serde(default)]
    pub scope: Vec<String>,
    /// Token lifetime in seconds
    #[serde(default)]
    pub expires_in: Option<i64>,
}

/// Standard response wrapper used by the Netatmo data endpoints.
///
/// Every payload of interest lives under `body`; the remaining fields are
/// server-side timing metadata.
#[derive(Debug, Serialize, Deserialize)]
pub struct ApiEnvelope<T> {
    /// The actual payload
    pub body: T,
    /// `"ok"` on success
    #[serde(default)]
    pub status: Option<String>,
    /// Server-side execution time in seconds
    #[serde(default)]
    pub time_exec: Option<f64>,
    /// Server timestamp of the response
    #[serde(default)]
    pub time_server: Option<i64>,
}

/// Snapshot of thermostat state as returned by `getthermostatsdata`.
///
/// Transient: re-fetched on every read call, never cached or diffed.
#[derive(Debug, Serialize, Deserialize)]
pub struct ThermostatsData {
    /// All relays visible to the account
    #[serde(default)]
    pub devices: Vec<Device>,
    /// Account metadata attached to the snapshot
    #[serde(default)]
    pub user: Option<serde_json::Value>,
}

/// A relay (the plug connected to the boiler), identified by MAC address.
#[derive(Debug, Serialize, Deserialize)]
pub struct Device {
    /// Relay MAC address
    #[serde(rename = "_id")]
    pub id: String,
    /// User-assigned name
    #[serde(default)]
    pub station_name: Option<String>,
    /// Relay firmware revision
    #[serde(default)]
    pub firmware: Option<i64>,
    /// Thermostat modules paired with this relay
    #[serde(default)]
    pub modules: Vec<ThermModule>,
}

/// A thermostat module paired with a relay.
#[derive(Debug, Serialize, Deserialize)]
pub struct ThermModule {
    /// Module MAC address
    #[serde(rename = "_id")]
    pub id: String,
    /// User-assigned name
    #[serde(default)]
    pub module_name: Option<String>,
    /// Module firmware revision
    #[serde(default)]
    pub firmware: Option<i64>,
    /// Battery charge percentage
    #[serde(default)]
    pub battery_percent: Option<i64>,
    /// Latest measurement; absent while the module is unreachable
    #[serde(default)]
    pub measured: Option<Measured>,
}

/// Latest measurement reported by a module.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Measured {
    /// Unix timestamp of the measurement
    #[serde(default)]
    pub time: Option<i64>,
    /// Ambient temperature in °C
    pub temperature: f64,
    /// Target temperature in °C
    pub setpoint_temp: f64,
}

/// Current and target temperatures for one device, in snapshot module order.
#[derive(Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct Temperatures {
    pub temp: Vec<f64>,
    pub setpoint_temp: Vec<f64>,
}

/// Operating modes accepted by the `setthermpoint` endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SetpointMode {
    /// Follow the weekly schedule
    Program,
    /// Away mode
    Away,
    /// Frost guard
    #[serde(rename = "hg")]
    FrostGuard,
    /// Hold a manual setpoint until `setpoint_endtime`
    Manual,
    /// Heating off
    Off,
    /// Maximum heating until `setpoint_endtime`
    Max,
}

impl SetpointMode {
    /// Wire representation sent as the `setpoint_mode` parameter.
    pub fn as_str(self) -> &'static str {
        match self {
            SetpointMode::Program => "program",
            SetpointMode::Away => "away",
            SetpointMode::FrostGuard => "hg",
            SetpointMode::Manual => "manual",
            SetpointMode::Off => "off",
            SetpointMode::Max => "max",
        }
    }
}

impl ThermostatsData {
    /// Module ids of the device with the given id, in snapshot order.
    ///
    /// An unknown device id yields an empty list.
    pub fn module_ids(&self, device_id: &str) -> Vec<String> {
        self.devices
            .iter()
            .filter(|device| device.id == device_id)
            .flat_map(|device| device.modules.iter().map(|module| module.id.clone()))
            .collect()
    }

    /// Current and target temperatures for the device with the given id.
    ///
    /// Modules that have not reported a measurement yet are skipped; the
    /// order of the remaining modules is preserved.
    pub fn temperatures(&self, device_id: &str) -> Temperatures {
        let mut data = Temperatures::default();
        for device in self.devices.iter().filter(|d| d.id == device_id) {
            for measured in device.modules.iter().filter_map(|m| m.measured.as_ref()) {
                data.temp.push(measured.temperature);
                data.setpoint_temp.push(measured.setpoint_temp);
            }
        }
        data
    }
}
