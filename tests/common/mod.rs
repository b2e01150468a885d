use netatmo_thermostat::client::types::TokenSet;
use netatmo_thermostat::{Config, NetatmoClient};
use serde_json::json;
use wiremock::matchers::{body_string_contains, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const DEVICE_ID: &str = "70:ee:50:00:00:01";
pub const OTHER_DEVICE_ID: &str = "70:ee:50:00:00:02";
pub const ACCESS_TOKEN: &str = "5f1c|aaaaaaaaaaaaaaaaaaaa";
pub const REFRESH_TOKEN: &str = "5f1c|bbbbbbbbbbbbbbbbbbbb";

pub struct TestEnvironment {
    pub server: MockServer,
    pub config: Config,
    pub client: NetatmoClient,
}

impl TestEnvironment {
    /// Mock server plus a client pointed at it, not yet authenticated.
    pub async fn new() -> Self {
        let server = MockServer::start().await;
        let client = NetatmoClient::with_base_url(server.uri());
        Self {
            server,
            config: test_config(),
            client,
        }
    }

    /// Environment with a token already injected, skipping the grant.
    pub async fn authenticated() -> Self {
        let mut env = Self::new().await;
        env.client.set_token_set(token_set());
        env
    }
}

pub fn test_config() -> Config {
    Config::from_json(
        r#"{
            "user": "someone@example.com",
            "password": "hunter2",
            "client_id": "app-id",
            "client_secret": "app-secret",
            "scope": "read_thermostat write_thermostat"
        }"#,
    )
    .expect("test config should parse")
}

pub fn token_set() -> TokenSet {
    TokenSet {
        access_token: ACCESS_TOKEN.to_string(),
        refresh_token: REFRESH_TOKEN.to_string(),
        scope: vec!["read_thermostat".to_string(), "write_thermostat".to_string()],
        expires_in: Some(10800),
    }
}

pub fn token_response() -> serde_json::Value {
    json!({
        "access_token": ACCESS_TOKEN,
        "refresh_token": REFRESH_TOKEN,
        "scope": ["read_thermostat", "write_thermostat"],
        "expires_in": 10800,
        "expire_in": 10800
    })
}

/// Snapshot envelope with two relays; only `DEVICE_ID` carries two modules.
pub fn thermostats_response() -> serde_json::Value {
    json!({
        "body": {
            "devices": [
                {
                    "_id": DEVICE_ID,
                    "station_name": "Home",
                    "firmware": 222,
                    "modules": [
                        {
                            "_id": "04:00:00:00:00:aa",
                            "module_name": "Living room",
                            "battery_percent": 82,
                            "measured": { "time": 1_700_000_000i64, "temperature": 19.2, "setpoint_temp": 20.0 }
                        },
                        {
                            "_id": "04:00:00:00:00:bb",
                            "module_name": "Bedroom",
                            "measured": { "time": 1_700_000_060i64, "temperature": 17.5, "setpoint_temp": 16.0 }
                        }
                    ]
                },
                {
                    "_id": OTHER_DEVICE_ID,
                    "modules": [
                        {
                            "_id": "04:00:00:00:00:cc",
                            "measured": { "temperature": 21.0, "setpoint_temp": 21.5 }
                        }
                    ]
                }
            ]
        },
        "status": "ok",
        "time_exec": 0.06,
        "time_server": 1_700_000_100i64
    })
}

pub async fn mount_token_endpoint(server: &MockServer) {
    Mock::given(method("POST"))
        .and(path("/oauth2/token"))
        .and(body_string_contains("grant_type=password"))
        .respond_with(ResponseTemplate::new(200).set_body_json(token_response()))
        .mount(server)
        .await;
}

pub async fn mount_thermostats_endpoint(server: &MockServer) {
    Mock::given(method("POST"))
        .and(path("/api/getthermostatsdata"))
        .respond_with(ResponseTemplate::new(200).set_body_json(thermostats_response()))
        .mount(server)
        .await;
}

pub fn init_test_logging() {
    let _ = env_logger::builder()
        .filter_level(log::LevelFilter::Debug)
        .is_test(true)
        .try_init();
}
