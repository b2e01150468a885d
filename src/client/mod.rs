//! # Netatmo HTTP Client
//!
//! This module provides a direct HTTP client for the Netatmo thermostat API,
//! handling OAuth2 authentication, thermostat snapshots, and setpoint changes.
//!
//! ## Modules
//!
//! - [`auth`] - OAuth2 password-grant authentication
//! - [`client`] - Main HTTP client implementation with the thermostat operations
//! - [`types`] - Type definitions for API requests and responses
//!
//! ## Quick Start
//!
//! ```no_run
//! use netatmo_thermostat::client::NetatmoClient;
//! use netatmo_thermostat::config::Config;
//!
//! # async fn example() -> anyhow::Result<()> {
//! let config = Config::load()?;
//! let mut client = NetatmoClient::new();
//!
//! // Exchange the credentials for a token pair
//! client.authenticate(&config).await?;
//!
//! // Read the current temperatures of one relay's modules
//! let temperatures = client.get_current_temperatures("70:ee:50:00:00:01").await?;
//! println!("{:?} / {:?}", temperatures.temp, temperatures.setpoint_temp);
//! # Ok(())
//! # }
//! ```

pub mod auth;
#[allow(clippy::module_inception)]
pub mod client;
pub mod types;

pub use client::NetatmoClient;
pub use types::*;
