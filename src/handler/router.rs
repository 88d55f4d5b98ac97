//! Request routing dispatch module
//!
//! Entry point for HTTP request processing, responsible for method validation, route matching, and dispatching.

use crate::config::AppState;
use crate::handler::weather;
use crate::http;
use crate::logger::{self, AccessLogEntry};
use http_body_util::Full;
use hyper::body::Bytes;
use hyper::http::request::Parts;
use hyper::{header, Method, Request, Response};
use std::convert::Infallible;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Instant;

/// Path served by the weather handler
pub const WEATHER_PATH: &str = "/weather";

/// Main entry point for HTTP request handling
pub async fn handle_request<B>(
    req: Request<B>,
    state: Arc<AppState>,
    peer_addr: SocketAddr,
) -> Result<Response<Full<Bytes>>, Infallible> {
    let started = Instant::now();
    // Only the head matters: every route is a body-less GET
    let (parts, _) = req.into_parts();
    let response = route_request(&parts, &state).await;

    if state.config.logging.access_log {
        let entry = access_entry(&parts, &response, peer_addr, started);
        logger::log_access(&entry, &state.config.logging.access_log_format);
    }

    Ok(response)
}

/// Route request based on path and method
pub async fn route_request(req: &Parts, state: &AppState) -> Response<Full<Bytes>> {
    let path = req.uri.path();
    let health = &state.config.health;

    let is_known = path == WEATHER_PATH
        || (health.enabled && (path == health.liveness_path || path == health.readiness_path));
    if !is_known {
        return http::build_404_response();
    }

    // 1. Check HTTP method
    let is_head = match req.method {
        Method::GET => false,
        Method::HEAD => true,
        ref other => {
            logger::log_warning(&format!("Method not allowed: {other} {path}"));
            return http::build_405_response();
        }
    };

    // 2. Dispatch
    let response = if path == WEATHER_PATH {
        weather::handle_weather(
            req.uri.query(),
            &state.address_client,
            &state.weather_client,
        )
        .await
    } else {
        // Readiness has no extra checks: upstreams are only contacted per request
        http::build_health_response("ok")
    };

    if is_head {
        http::strip_body(response)
    } else {
        response
    }
}

fn access_entry(
    req: &Parts,
    response: &Response<Full<Bytes>>,
    peer_addr: SocketAddr,
    started: Instant,
) -> AccessLogEntry {
    let header_value = |name: header::HeaderName| {
        req.headers
            .get(name)
            .and_then(|v| v.to_str().ok())
            .map(ToString::to_string)
    };

    let mut entry = AccessLogEntry::new(
        peer_addr.ip().to_string(),
        req.method.to_string(),
        req.uri.path().to_string(),
    );
    entry.query = req.uri.query().map(ToString::to_string);
    entry.http_version = http_version(req.version).to_string();
    entry.status = response.status().as_u16();
    entry.body_bytes = response
        .headers()
        .get(header::CONTENT_LENGTH)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.parse().ok())
        .unwrap_or(0);
    entry.referer = header_value(header::REFERER);
    entry.user_agent = header_value(header::USER_AGENT);
    entry.request_time_us = u64::try_from(started.elapsed().as_micros()).unwrap_or(u64::MAX);
    entry
}

const fn http_version(version: hyper::Version) -> &'static str {
    match version {
        hyper::Version::HTTP_09 => "0.9",
        hyper::Version::HTTP_10 => "1.0",
        hyper::Version::HTTP_2 => "2",
        hyper::Version::HTTP_3 => "3",
        _ => "1.1",
    }
}
