//! Postal-code weather service
//!
//! `GET /weather?postalCode=<cep>` resolves a Brazilian postal code to its
//! locality through ViaCEP, reads the current temperature for that locality
//! from WeatherAPI and answers with the reading in Celsius, Fahrenheit and
//! Kelvin.

pub mod client;
pub mod config;
pub mod error;
pub mod handler;
pub mod http;
pub mod logger;
pub mod model;
pub mod server;
