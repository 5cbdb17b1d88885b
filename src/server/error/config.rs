use std::net::AddrParseError;

use axum::http::header::InvalidHeaderValue;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    /// `BIND_ADDR` is not a socket address such as `0.0.0.0:8080`.
    #[error("Invalid BIND_ADDR '{value}': {source}")]
    InvalidBindAddr {
        value: String,
        #[source]
        source: AddrParseError,
    },

    /// A URL variable could not be parsed.
    #[error("Invalid URL in {name} '{value}': {source}")]
    InvalidUrl {
        name: &'static str,
        value: String,
        #[source]
        source: url::ParseError,
    },

    /// A URL variable parsed but does not use `http` or `https`.
    #[error("Unsupported scheme in {name} '{value}', expected http or https")]
    UnsupportedScheme { name: &'static str, value: String },

    /// `CORS_ALLOW_ORIGIN` cannot be sent as a header value.
    #[error("Invalid CORS_ALLOW_ORIGIN '{value}': {source}")]
    InvalidOrigin {
        value: String,
        #[source]
        source: InvalidHeaderValue,
    },
}
