//! # Netatmo Thermostat Client
//!
//! This library is a small client for the Netatmo smart-thermostat cloud API.
//! It authenticates via the OAuth2 password grant, then issues a handful of
//! HTTP calls to read thermostat state and push a setpoint change.
//!
//! ## Config Module
//!
//! The [`config`] module loads the account credentials from a local JSON file
//! (`~/.pynetatmo.conf`, overridable with `NETATMO_CONF`).
//!
//! ## Client Module
//!
//! The [`client`] module exchanges the credentials for a token pair and talks
//! to the thermostat endpoints: snapshot fetch, module listing, temperature
//! readout and setpoint changes.
//!
//! ## Quick Start
//!
//! ```no_run
//! use netatmo_thermostat::{Config, NetatmoClient};
//!
//! # async fn example() -> anyhow::Result<()> {
//! let config = Config::load()?;
//! let mut client = NetatmoClient::new();
//! client.authenticate(&config).await?;
//!
//! let module_ids = client.get_module_ids("70:ee:50:00:00:01").await?;
//! println!("modules: {:?}", module_ids);
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod config;

pub use client::NetatmoClient;
pub use config::Config;
