//! `GET /weather` handler
//!
//! Resolves a postal code to a locality through ViaCEP, then reads the
//! current temperature for that locality from WeatherAPI.

use http_body_util::Full;
use hyper::body::Bytes;
use hyper::{Response, StatusCode};

use crate::client::{AddressClient, WeatherClient};
use crate::error::LookupError;
use crate::http;
use crate::logger;
use crate::model::{PostalCode, TemperatureResponse};

/// Query parameter carrying the raw postal code
pub const POSTAL_CODE_PARAM: &str = "postalCode";

/// Validate the raw postal code and run both upstream calls in sequence
pub async fn lookup_temperature(
    raw_postal_code: &str,
    address_client: &AddressClient,
    weather_client: &WeatherClient,
) -> Result<TemperatureResponse, LookupError> {
    let postal_code = PostalCode::parse(raw_postal_code).ok_or(LookupError::InvalidPostalCode)?;

    let address = address_client.get_address(postal_code.as_str()).await?;
    if address.is_not_found() {
        return Err(LookupError::PostalCodeNotFound);
    }

    let reading = weather_client.get_weather(&address.locality).await?;
    Ok(TemperatureResponse::from_celsius(reading.celsius()))
}

/// Map a lookup to its JSON response; a missing parameter counts as empty
pub async fn handle_weather(
    query: Option<&str>,
    address_client: &AddressClient,
    weather_client: &WeatherClient,
) -> Response<Full<Bytes>> {
    let raw = http::query_param(query, POSTAL_CODE_PARAM).unwrap_or_default();

    match lookup_temperature(&raw, address_client, weather_client).await {
        Ok(temperature) => http::json_response(StatusCode::OK, &temperature),
        Err(err) => {
            if let LookupError::Upstream(cause) = &err {
                logger::log_upstream_failure(&raw, cause);
            }
            http::build_error_response(err.status(), &err.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use http_body_util::BodyExt;
    use httpmock::prelude::*;
    use reqwest::Client;

    /// One mock server standing in for both upstreams, like the real pair
    async fn upstreams(server: &MockServer) -> (AddressClient, WeatherClient) {
        server
            .mock_async(|when, then| {
                when.method(GET).path("/00000000/json");
                then.status(200).body(r#"{"erro":"true"}"#);
            })
            .await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/12345678/json");
                then.status(200).body(r#"{"cep":"12345-678","localidade":"City"}"#);
            })
            .await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/weather").query_param("q", "City");
                then.status(200).body(r#"{"current":{"temp_c":30}}"#);
            })
            .await;

        (
            AddressClient::new(&server.base_url(), Client::new()),
            WeatherClient::new(&server.url("/weather"), "", Client::new()),
        )
    }

    async fn body_json(response: Response<Full<Bytes>>) -> serde_json::Value {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_missing_postal_code_is_422() {
        let server = MockServer::start_async().await;
        let (address, weather) = upstreams(&server).await;

        for query in [None, Some(""), Some("other=1")] {
            let response = handle_weather(query, &address, &weather).await;
            assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
            assert_eq!(body_json(response).await["error"], "invalid zipcode");
        }
    }

    #[tokio::test]
    async fn test_wrong_length_is_422() {
        let server = MockServer::start_async().await;
        let (address, weather) = upstreams(&server).await;

        let response = handle_weather(Some("postalCode=1234567890"), &address, &weather).await;
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body_json(response).await["error"], "invalid zipcode");
    }

    #[tokio::test]
    async fn test_unknown_postal_code_is_404() {
        let server = MockServer::start_async().await;
        let (address, weather) = upstreams(&server).await;

        let response = handle_weather(Some("postalCode=00000000"), &address, &weather).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(body_json(response).await["error"], "can not find zipcode");
    }

    #[tokio::test]
    async fn test_success_returns_three_units() {
        let server = MockServer::start_async().await;
        let (address, weather) = upstreams(&server).await;

        let response = handle_weather(Some("postalCode=12345678"), &address, &weather).await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.headers()["content-type"], "application/json");

        let body = body_json(response).await;
        assert_eq!(body["temp_C"], 30.0);
        assert_eq!(body["temp_F"], 86.0);
        assert_eq!(body["temp_K"], 303.0);
    }

    #[tokio::test]
    async fn test_punctuation_is_stripped_before_lookup() {
        let server = MockServer::start_async().await;
        let (address, weather) = upstreams(&server).await;

        let response = handle_weather(Some("postalCode=123.456-78"), &address, &weather).await;
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_identical_inputs_give_identical_bodies() {
        let server = MockServer::start_async().await;
        let (address, weather) = upstreams(&server).await;

        let first = handle_weather(Some("postalCode=12345678"), &address, &weather).await;
        let second = handle_weather(Some("postalCode=12345678"), &address, &weather).await;
        let first = first.into_body().collect().await.unwrap().to_bytes();
        let second = second.into_body().collect().await.unwrap().to_bytes();
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn test_address_upstream_down_is_500() {
        let weather = WeatherClient::new("http://127.0.0.1:1/weather", "", Client::new());
        let address = AddressClient::new("http://127.0.0.1:1", Client::new());

        let response = handle_weather(Some("postalCode=12345678"), &address, &weather).await;
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = body_json(response).await;
        assert!(body["error"].as_str().unwrap().starts_with("send request: "));
    }

    #[tokio::test]
    async fn test_weather_decode_failure_is_500() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/12345678/json");
                then.status(200).body(r#"{"localidade":"City"}"#);
            })
            .await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/weather");
                then.status(403).body(r#"{"error":{"code":2008,"message":"disabled"}}"#);
            })
            .await;

        let address = AddressClient::new(&server.base_url(), Client::new());
        let weather = WeatherClient::new(&server.url("/weather"), "key", Client::new());

        let response = handle_weather(Some("postalCode=12345678"), &address, &weather).await;
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = body_json(response).await;
        assert!(body["error"]
            .as_str()
            .unwrap()
            .starts_with("decode weather response: "));
    }
}
