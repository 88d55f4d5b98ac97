//! HTTP response building module
//!
//! Every response this service writes is JSON; builders fall back to a bare
//! response and log when the builder itself fails.

use http_body_util::Full;
use hyper::body::Bytes;
use hyper::{Response, StatusCode};
use serde::Serialize;

use crate::model::ErrorBody;

const JSON_CONTENT_TYPE: &str = "application/json";

/// Build a JSON response with the given status
pub fn json_response<T: Serialize>(status: StatusCode, body: &T) -> Response<Full<Bytes>> {
    let json = match serde_json::to_vec(body) {
        Ok(j) => j,
        Err(e) => {
            crate::logger::log_error(&format!("Failed to serialize response: {e}"));
            return build_response(
                StatusCode::INTERNAL_SERVER_ERROR,
                Bytes::from_static(br#"{"error":"internal server error"}"#),
            );
        }
    };

    build_response(status, Bytes::from(json))
}

/// Build `{"error": message}` with the given status
pub fn build_error_response(status: StatusCode, message: &str) -> Response<Full<Bytes>> {
    json_response(status, &ErrorBody { error: message })
}

/// Build 404 Not Found response
pub fn build_404_response() -> Response<Full<Bytes>> {
    build_error_response(StatusCode::NOT_FOUND, "not found")
}

/// Build 405 Method Not Allowed response
pub fn build_405_response() -> Response<Full<Bytes>> {
    let mut response = build_error_response(StatusCode::METHOD_NOT_ALLOWED, "method not allowed");
    response
        .headers_mut()
        .insert(hyper::header::ALLOW, hyper::header::HeaderValue::from_static("GET, HEAD"));
    response
}

/// Build health check response
pub fn build_health_response(status: &str) -> Response<Full<Bytes>> {
    json_response(StatusCode::OK, &serde_json::json!({ "status": status }))
}

/// Drop the body of a response for HEAD requests, keeping its headers
pub fn strip_body(response: Response<Full<Bytes>>) -> Response<Full<Bytes>> {
    let (parts, _) = response.into_parts();
    Response::from_parts(parts, Full::new(Bytes::new()))
}

fn build_response(status: StatusCode, body: Bytes) -> Response<Full<Bytes>> {
    let content_length = body.len();
    Response::builder()
        .status(status)
        .header("Content-Type", JSON_CONTENT_TYPE)
        .header("Content-Length", content_length)
        .body(Full::new(body))
        .unwrap_or_else(|e| {
            log_build_error(status, &e);
            Response::new(Full::new(Bytes::new()))
        })
}

/// Log response build error
fn log_build_error(status: StatusCode, error: &hyper::http::Error) {
    crate::logger::log_error(&format!("Failed to build {status} response: {error}"));
}

#[cfg(test)]
mod tests {
    use super::*;
    use http_body_util::BodyExt;

    async fn body_string(response: Response<Full<Bytes>>) -> String {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[tokio::test]
    async fn test_error_response_shape() {
        let response = build_error_response(StatusCode::UNPROCESSABLE_ENTITY, "invalid zipcode");
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(response.headers()["content-type"], "application/json");
        assert_eq!(body_string(response).await, r#"{"error":"invalid zipcode"}"#);
    }

    #[tokio::test]
    async fn test_405_has_allow_header() {
        let response = build_405_response();
        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
        assert_eq!(response.headers()["allow"], "GET, HEAD");
    }

    #[tokio::test]
    async fn test_strip_body_keeps_headers() {
        let response = strip_body(build_health_response("ok"));
        assert_eq!(response.status(), StatusCode::OK);
        assert!(response.headers().contains_key("content-length"));
        assert!(body_string(response).await.is_empty());
    }
}
