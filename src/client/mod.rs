//! Upstream HTTP clients
//!
//! Thin wrappers around the ViaCEP address lookup and the WeatherAPI current
//! conditions endpoint. Both share one `reqwest::Client` built from the
//! `upstream` configuration section.

mod address;
mod weather;

pub use address::{AddressClient, AddressLookup};
pub use weather::{WeatherClient, WeatherReading};

use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;
use thiserror::Error;

use crate::config::UpstreamConfig;
use crate::logger;

const USER_AGENT: &str = concat!("cep-weather/", env!("CARGO_PKG_VERSION"));

/// Failure talking to an upstream service
#[derive(Error, Debug)]
pub enum ClientError {
    #[error("build http client: {0}")]
    Build(#[source] reqwest::Error),

    /// Connection, TLS or body read failure
    #[error("send request: {0}")]
    Request(#[source] reqwest::Error),

    #[error("decode {service} response: {source}")]
    Decode {
        service: &'static str,
        #[source]
        source: serde_json::Error,
    },
}

/// Build the HTTP client shared by both upstreams.
///
/// Certificate validation stays on unless `accept_invalid_certs` is set,
/// in which case a warning is logged once at startup.
pub fn build_http_client(upstream: &UpstreamConfig) -> Result<Client, ClientError> {
    if upstream.accept_invalid_certs {
        logger::log_warning(
            "TLS certificate validation is disabled for upstream services (upstream.accept_invalid_certs)",
        );
    }

    Client::builder()
        .user_agent(USER_AGENT)
        .danger_accept_invalid_certs(upstream.accept_invalid_certs)
        .build()
        .map_err(ClientError::Build)
}

/// Send a request and decode the JSON body, ignoring the HTTP status
async fn fetch_json<T: DeserializeOwned>(
    request: RequestBuilder,
    service: &'static str,
) -> Result<T, ClientError> {
    let response = request.send().await.map_err(ClientError::Request)?;
    let status = response.status();
    let body = response.bytes().await.map_err(ClientError::Request)?;

    tracing::debug!(service, %status, bytes = body.len(), "upstream response received");

    serde_json::from_slice(&body).map_err(|source| ClientError::Decode { service, source })
}
