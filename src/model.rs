//! Request-scoped data: postal codes and temperature responses

use serde::Serialize;

/// Required number of digits in a Brazilian postal code (CEP)
pub const POSTAL_CODE_DIGITS: usize = 8;

/// Normalized postal code: exactly eight ASCII digits
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostalCode(String);

impl PostalCode {
    /// Strip every non-digit character and accept the result only when it
    /// has exactly eight digits. `"123.456-78"` becomes `"12345678"`.
    pub fn parse(raw: &str) -> Option<Self> {
        let digits: String = raw.chars().filter(char::is_ascii_digit).collect();
        (digits.len() == POSTAL_CODE_DIGITS).then_some(Self(digits))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Successful response body
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TemperatureResponse {
    #[serde(rename = "temp_C")]
    pub celsius: f64,
    #[serde(rename = "temp_F")]
    pub fahrenheit: f64,
    #[serde(rename = "temp_K")]
    pub kelvin: f64,
}

impl TemperatureResponse {
    /// Convert a Celsius reading, truncating every unit to two decimals
    #[allow(clippy::suboptimal_flops)]
    pub fn from_celsius(celsius: f64) -> Self {
        Self {
            celsius: truncate_2dp(celsius),
            fahrenheit: truncate_2dp(celsius * 1.8 + 32.0),
            kelvin: truncate_2dp(celsius + 273.0),
        }
    }
}

/// Error response body
#[derive(Debug, Clone, Serialize)]
pub struct ErrorBody<'a> {
    pub error: &'a str,
}

/// Truncate toward zero at the second decimal place (30.456 -> 30.45, -1.239 -> -1.23)
///
/// Adding `0.0` folds `-0.0` into `0.0`, so readings in (-0.01, 0) serialize as `0.0`.
fn truncate_2dp(value: f64) -> f64 {
    (value * 100.0).trunc() / 100.0 + 0.0
}
