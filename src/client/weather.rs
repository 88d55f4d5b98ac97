// WeatherAPI current conditions client

use reqwest::Client;
use serde::Deserialize;

use super::{fetch_json, ClientError};

/// Decoded WeatherAPI payload, only the fields this service reads
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct WeatherReading {
    // Required: an error payload without `current` fails to decode instead of reading 0 °C
    current: CurrentConditions,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
struct CurrentConditions {
    temp_c: f64,
}

impl WeatherReading {
    pub const fn celsius(&self) -> f64 {
        self.current.temp_c
    }
}

#[derive(Debug, Clone)]
pub struct WeatherClient {
    base_url: String,
    api_key: String,
    http: Client,
}

impl WeatherClient {
    pub fn new(base_url: &str, api_key: &str, http: Client) -> Self {
        Self {
            base_url: base_url.to_string(),
            api_key: api_key.to_string(),
            http,
        }
    }

    /// `GET {base_url}?key={api_key}&q={city}`, city form-urlencoded
    pub async fn get_weather(&self, city: &str) -> Result<WeatherReading, ClientError> {
        tracing::debug!(city, "fetching current weather");
        let request = self
            .http
            .get(&self.base_url)
            .query(&[("key", self.api_key.as_str()), ("q", city)]);
        fetch_json(request, "weather").await
    }
}
