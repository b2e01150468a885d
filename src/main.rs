use netatmo_thermostat::{Config, NetatmoClient};
use std::env;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".to_string().into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load credentials from ~/.pynetatmo.conf (or $NETATMO_CONF)
    let config = match Config::load() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("Could not load credentials: {:#}", e);
            tracing::error!("Create ~/.pynetatmo.conf with user, password, client_id, client_secret and scope,");
            tracing::error!("or point NETATMO_CONF at an existing credentials file.");
            std::process::exit(1);
        }
    };

    let device_id = match env::var("NETATMO_DEVICE_ID") {
        Ok(id) => id,
        Err(_) => {
            tracing::error!("NETATMO_DEVICE_ID is not set (relay MAC address, e.g. 70:ee:50:00:00:01)");
            std::process::exit(1);
        }
    };

    tracing::info!("Validating Netatmo credentials...");
    let mut client = NetatmoClient::new();

    if let Err(e) = client.authenticate(&config).await {
        tracing::error!("Authentication failed: {}", e);
        tracing::error!("Please verify:");
        tracing::error!("  - user and password are correct");
        tracing::error!("  - client_id and client_secret match your app on dev.netatmo.com");
        tracing::error!("  - the requested scopes are enabled for the app");
        std::process::exit(1);
    }

    tracing::info!("Successfully authenticated with Netatmo");

    // Readout: current vs target temperature per module
    let snapshot = client.get_thermostats_data(&device_id).await?;
    let module_ids = snapshot.module_ids(&device_id);

    println!("Device {}: {} module(s)", device_id, module_ids.len());
    for device in snapshot.devices.iter().filter(|d| d.id == device_id) {
        for module in &device.modules {
            let name = module.module_name.as_deref().unwrap_or(&module.id);
            match &module.measured {
                Some(measured) => println!(
                    "  {}: {:.1} °C (setpoint {:.1} °C)",
                    name, measured.temperature, measured.setpoint_temp
                ),
                None => println!("  {}: no measurement yet", name),
            }
        }
    }

    Ok(())
}
