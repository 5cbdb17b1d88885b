use std::net::SocketAddr;

use axum::http::HeaderValue;
use url::Url;

use crate::server::error::config::ConfigError;

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";
const DEFAULT_DISCORD_API_BASE_URL: &str = "https://discord.com/api/v10";

pub struct Config {
    pub bind_addr: SocketAddr,

    /// Server URL written into the published Discord document.
    pub discord_api_base_url: Url,

    /// Single origin allowed by CORS; `None` allows any origin.
    pub cors_allow_origin: Option<HeaderValue>,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds the configuration from any variable source, falling back to defaults for unset
    /// or empty variables.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let var = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());

        let bind_addr = var("BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let bind_addr = bind_addr
            .parse::<SocketAddr>()
            .map_err(|source| ConfigError::InvalidBindAddr {
                value: bind_addr.clone(),
                source,
            })?;

        let base_url = var("DISCORD_API_BASE_URL")
            .unwrap_or_else(|| DEFAULT_DISCORD_API_BASE_URL.to_string());
        let discord_api_base_url = parse_http_url("DISCORD_API_BASE_URL", &base_url)?;

        let cors_allow_origin = var("CORS_ALLOW_ORIGIN")
            .map(|origin| {
                HeaderValue::from_str(&origin)
                    .map_err(|source| ConfigError::InvalidOrigin { value: origin, source })
            })
            .transpose()?;

        Ok(Self {
            bind_addr,
            discord_api_base_url,
            cors_allow_origin,
        })
    }
}

fn parse_http_url(name: &'static str, value: &str) -> Result<Url, ConfigError> {
    let url = Url::parse(value).map_err(|source| ConfigError::InvalidUrl {
        name,
        value: value.to_string(),
        source,
    })?;

    if !matches!(url.scheme(), "http" | "https") {
        return Err(ConfigError::UnsupportedScheme {
            name,
            value: value.to_string(),
        });
    }

    Ok(url)
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn config_from(vars: &[(&str, &str)]) -> Result<Config, ConfigError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|name| vars.get(name).cloned())
    }

    /// Tests defaults when nothing is set.
    ///
    /// Expected: Ok with the default address, Discord v10 base URL and no CORS origin
    #[test]
    fn uses_defaults() {
        let config = config_from(&[]).unwrap();

        assert_eq!(config.bind_addr, "0.0.0.0:8080".parse().unwrap());
        assert_eq!(
            config.discord_api_base_url.as_str(),
            "https://discord.com/api/v10"
        );
        assert!(config.cors_allow_origin.is_none());
    }

    /// Tests that empty values count as unset.
    ///
    /// Expected: Ok with the default bind address
    #[test]
    fn empty_values_use_defaults() {
        let config = config_from(&[("BIND_ADDR", "  ")]).unwrap();
        assert_eq!(config.bind_addr.port(), 8080);
    }

    /// Tests overriding every variable.
    ///
    /// Expected: Ok with each value applied
    #[test]
    fn reads_overrides() {
        let config = config_from(&[
            ("BIND_ADDR", "127.0.0.1:3000"),
            ("DISCORD_API_BASE_URL", "http://localhost:9000/api/v10"),
            ("CORS_ALLOW_ORIGIN", "http://localhost:5173"),
        ])
        .unwrap();

        assert_eq!(config.bind_addr.port(), 3000);
        assert_eq!(config.discord_api_base_url.host_str(), Some("localhost"));
        assert_eq!(
            config.cors_allow_origin,
            Some(HeaderValue::from_static("http://localhost:5173"))
        );
    }

    /// Tests malformed values.
    ///
    /// Expected: Err naming the offending variable for each
    #[test]
    fn rejects_malformed_values() {
        assert!(matches!(
            config_from(&[("BIND_ADDR", "localhost")]),
            Err(ConfigError::InvalidBindAddr { .. })
        ));
        assert!(matches!(
            config_from(&[("DISCORD_API_BASE_URL", "not a url")]),
            Err(ConfigError::InvalidUrl { .. })
        ));
        assert!(matches!(
            config_from(&[("DISCORD_API_BASE_URL", "ftp://discord.com/api")]),
            Err(ConfigError::UnsupportedScheme { .. })
        ));
        assert!(matches!(
            config_from(&[("CORS_ALLOW_ORIGIN", "bad\norigin")]),
            Err(ConfigError::InvalidOrigin { .. })
        ));
    }
}
