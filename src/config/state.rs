// Application state module
// Holds the loaded configuration and the upstream clients shared by all connections

use std::sync::atomic::AtomicUsize;
use std::sync::Arc;

use super::types::Config;
use crate::client::{self, AddressClient, ClientError, WeatherClient};

/// Application state
pub struct AppState {
    pub config: Config,
    pub address_client: AddressClient,
    pub weather_client: WeatherClient,

    // Live connection count, checked against performance.max_connections
    pub active_connections: Arc<AtomicUsize>,
}

impl AppState {
    /// Build the upstream clients from the `upstream` section
    pub fn new(config: &Config) -> Result<Self, ClientError> {
        let http = client::build_http_client(&config.upstream)?;

        Ok(Self {
            config: config.clone(),
            address_client: AddressClient::new(&config.upstream.address_base_url, http.clone()),
            weather_client: WeatherClient::new(
                &config.upstream.weather_base_url,
                &config.upstream.weather_api_key,
                http,
            ),
            active_connections: Arc::new(AtomicUsize::new(0)),
        })
    }
}
