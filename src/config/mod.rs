// Configuration module entry point
// Loads layered configuration and holds the shared application state

mod state;
mod types;

use std::net::SocketAddr;

// Re-export public types
pub use state::AppState;
pub use types::{
    Config, HealthConfig, LoggingConfig, PerformanceConfig, ServerConfig, UpstreamConfig,
};

/// Environment variable prefix, nested keys separated by `__`
/// (e.g. `CEP_WEATHER_SERVER__PORT=9090`)
const ENV_PREFIX: &str = "CEP_WEATHER";

/// Legacy variable carrying the WeatherAPI key
const WEATHER_API_KEY_VAR: &str = "WEATHER_API_KEY";

impl Config {
    /// Load configuration from specified file path (without extension)
    /// Default config file is "config.toml" when no path specified
    pub fn load_from(config_path: &str) -> Result<Self, config::ConfigError> {
        Self::builder(config_path)?
            .set_override_option(
                "upstream.weather_api_key",
                std::env::var(WEATHER_API_KEY_VAR).ok(),
            )?
            .build()?
            .try_deserialize()
    }

    /// Defaults, optional file and prefixed environment, without overrides
    fn builder(
        config_path: &str,
    ) -> Result<config::ConfigBuilder<config::builder::DefaultState>, config::ConfigError> {
        config::Config::builder()
            .add_source(config::File::with_name(config_path).required(false))
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__"),
            )
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 8080)?
            .set_default("server.backlog", 128)?
            .set_default("logging.level", "info")?
            .set_default("logging.format", "text")?
            .set_default("logging.access_log", true)?
            .set_default("logging.access_log_format", "combined")?
            .set_default("performance.keep_alive_timeout", 75)?
            .set_default("performance.read_timeout", 30)?
            .set_default("performance.write_timeout", 30)?
            .set_default("upstream.address_base_url", "https://viacep.com.br/ws")?
            .set_default(
                "upstream.weather_base_url",
                "https://api.weatherapi.com/v1/current.json",
            )?
            .set_default("upstream.weather_api_key", "")?
            .set_default("upstream.accept_invalid_certs", false)
    }

    pub fn get_socket_addr(&self) -> Result<SocketAddr, String> {
        format!("{}:{}", self.server.host, self.server.port)
            .parse()
            .map_err(|e| format!("Invalid address: {e}"))
    }
}
