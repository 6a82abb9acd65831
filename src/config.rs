use fallible_core::{nullable::json_field, Maybe, Outcome};
use serde::Serialize;
use serde_json::Value;
use thiserror::Error;

/// Server address read from a JSON document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Config {
    pub port: u16,
    pub host: String,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    /// The document is not JSON at all.
    #[error("JSON parse error: {0}")]
    Json(#[source] serde_json::Error),

    /// `port` is missing, `null`, or not a number in 0..=65535.
    #[error("missing port")]
    MissingPort,

    /// `host` is missing, `null`, or not a string.
    #[error("missing host")]
    MissingHost,
}

/// Parses `{"port": 3000, "host": "localhost"}`.
///
/// The raw parse error is captured and normalized into [`ConfigError`],
/// fields are checked in order so a document missing both reports the port.
pub fn parse_config(raw: &str) -> Outcome<Config, ConfigError> {
    Outcome::from_throwable(|| serde_json::from_str::<Value>(raw))
        .map_err(ConfigError::Json)
        .flat_map(|doc| {
            let port = json_field(&doc, "port")
                .flat_map(|p| Maybe::from_nullable(p.as_u64()))
                .flat_map(|p| Maybe::from_nullable(u16::try_from(p).ok()));
            let host = json_field(&doc, "host").flat_map(|h| Maybe::from_nullable(h.as_str()));

            match (port, host) {
                (Maybe::Absent, _) => Outcome::failure(ConfigError::MissingPort),
                (_, Maybe::Absent) => Outcome::failure(ConfigError::MissingHost),
                (Maybe::Present(port), Maybe::Present(host)) => Outcome::success(Config {
                    port,
                    host: host.to_string(),
                }),
            }
        })
}
