// ViaCEP address lookup client

use reqwest::Client;
use serde::Deserialize;

use super::{fetch_json, ClientError};

/// Decoded ViaCEP payload
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct AddressLookup {
    /// Present (any non-null value) when the postal code does not exist
    #[serde(rename = "erro", default)]
    pub error: Option<serde_json::Value>,
    #[serde(rename = "localidade", default)]
    pub locality: String,
}

impl AddressLookup {
    pub const fn is_not_found(&self) -> bool {
        self.error.is_some()
    }
}

#[derive(Debug, Clone)]
pub struct AddressClient {
    base_url: String,
    http: Client,
}

impl AddressClient {
    pub fn new(base_url: &str, http: Client) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            http,
        }
    }

    /// `GET {base_url}/{postal_code}/json`
    pub async fn get_address(&self, postal_code: &str) -> Result<AddressLookup, ClientError> {
        let url = format!("{}/{postal_code}/json", self.base_url);
        tracing::debug!(%url, "looking up postal code");
        fetch_json(self.http.get(&url), "viacep").await
    }
}
