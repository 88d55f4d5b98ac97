//! Logger module
//!
//! Provides logging utilities for the weather service including:
//! - Subscriber initialisation (text or JSON output)
//! - Server lifecycle logging
//! - Access logging with multiple formats
//! - Error, warning and upstream failure logging

mod format;

pub use format::{AccessLogEntry, AccessLogFormat};

use crate::client::ClientError;
use crate::config::{Config, LoggingConfig};
use std::net::SocketAddr;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Tracing target for access log lines, filterable on its own (`RUST_LOG=access=off`)
pub const ACCESS_TARGET: &str = "access";

/// Initialize the global subscriber
///
/// Should be called once at application startup. `RUST_LOG` takes
/// precedence over `logging.level`.
pub fn init(config: &LoggingConfig) -> Result<(), Box<dyn std::error::Error>> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.level))?;

    let registry = tracing_subscriber::registry().with(filter);
    let layer = tracing_subscriber::fmt::layer()
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false);

    if config.format == "json" {
        registry.with(layer.json()).try_init()?;
    } else {
        registry.with(layer.compact()).try_init()?;
    }
    Ok(())
}

pub fn log_server_start(addr: &SocketAddr, config: &Config) {
    tracing::info!("======================================");
    tracing::info!("Weather server started successfully");
    tracing::info!("Listening on: http://{addr}");
    tracing::info!("Log level: {}", config.logging.level);
    if let Some(workers) = config.server.workers {
        tracing::info!("Worker threads: {workers}");
    }
    if let Some(max) = config.performance.max_connections {
        tracing::info!("Max connections: {max}");
    }
    tracing::info!("Address lookup: {}", config.upstream.address_base_url);
    tracing::info!("Weather service: {}", config.upstream.weather_base_url);
    tracing::info!("======================================");
}

pub fn log_connection_error(err: &impl std::fmt::Debug) {
    tracing::error!("Failed to serve connection: {err:?}");
}

pub fn log_error(message: &str) {
    tracing::error!("{message}");
}

pub fn log_warning(message: &str) {
    tracing::warn!("{message}");
}

/// An upstream call failed; the same message goes back to the client as a 500
pub fn log_upstream_failure(postal_code: &str, err: &ClientError) {
    tracing::error!(postal_code, error = %err, "upstream lookup failed");
}

/// Log formatted access log entry
pub fn log_access(entry: &AccessLogEntry, format: &str) {
    tracing::info!(target: ACCESS_TARGET, "{}", entry.format(format));
}

pub fn log_shutdown(reason: &str) {
    tracing::info!("{reason}, shutting down");
}
