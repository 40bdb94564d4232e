//! Application configuration read from the environment.

use std::net::SocketAddr;
use std::path::PathBuf;

use crate::restcountries::{DEFAULT_URL_TEMPLATE, RestCountriesConfig};

/// Default listen address.
const DEFAULT_LISTEN_ADDR: &str = "127.0.0.1:8080";

/// Default upstream timeout in seconds.
const DEFAULT_TIMEOUT_SECS: u64 = 5;

/// Errors from reading configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// A variable was set but could not be parsed
    #[error("invalid value for {name}: {value:?}")]
    Invalid { name: &'static str, value: String },
}

/// Server configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Address the HTTP server binds to.
    pub listen_addr: SocketAddr,

    /// Upstream URL template with a `{country_name}` placeholder.
    pub api_url_template: String,

    /// Upstream request timeout in seconds.
    pub api_timeout_secs: u64,

    /// Serve canned data from this directory instead of calling upstream.
    pub mock_dir: Option<PathBuf>,
}

impl AppConfig {
    /// Read configuration from process environment variables.
    ///
    /// * `LISTEN_ADDR` - bind address (default `127.0.0.1:8080`)
    /// * `COUNTRY_API_URL` - upstream URL template
    /// * `COUNTRY_API_TIMEOUT_SECS` - upstream timeout (default 5)
    /// * `COUNTRY_MOCK_DIR` - mock data directory (optional)
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_vars(|name| std::env::var(name).ok())
    }

    /// Build configuration from an arbitrary variable source.
    ///
    /// Empty values are treated as unset.
    pub fn from_vars(var: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let var = |name: &str| var(name).filter(|v| !v.trim().is_empty());

        let listen_addr: SocketAddr = match var("LISTEN_ADDR") {
            Some(value) => value.trim().parse().map_err(|_| ConfigError::Invalid {
                name: "LISTEN_ADDR",
                value,
            })?,
            None => DEFAULT_LISTEN_ADDR.parse().map_err(|_| ConfigError::Invalid {
                name: "LISTEN_ADDR",
                value: DEFAULT_LISTEN_ADDR.to_string(),
            })?,
        };

        let api_timeout_secs = match var("COUNTRY_API_TIMEOUT_SECS") {
            Some(value) => match value.trim().parse::<u64>() {
                Ok(secs) if secs > 0 => secs,
                _ => {
                    return Err(ConfigError::Invalid {
                        name: "COUNTRY_API_TIMEOUT_SECS",
                        value,
                    });
                }
            },
            None => DEFAULT_TIMEOUT_SECS,
        };

        Ok(Self {
            listen_addr,
            api_url_template: var("COUNTRY_API_URL")
                .unwrap_or_else(|| DEFAULT_URL_TEMPLATE.to_string()),
            api_timeout_secs,
            mock_dir: var("COUNTRY_MOCK_DIR").map(PathBuf::from),
        })
    }

    /// Upstream client configuration.
    pub fn rest_countries(&self) -> RestCountriesConfig {
        RestCountriesConfig::new()
            .with_url_template(&self.api_url_template)
            .with_timeout(self.api_timeout_secs)
    }
}
