//! REST Countries HTTP client.

use std::time::Duration;

use reqwest::{StatusCode, Url};

use crate::domain::CountrySummary;
use crate::lookup::{CountryFetcher, LookupError};

use super::convert::{convert_country, first_match};
use super::error::RestCountriesError;
use super::types::RestCountry;

/// Placeholder in the URL template replaced by the requested country name.
pub const COUNTRY_PLACEHOLDER: &str = "{country_name}";

/// Default URL template for the public REST Countries API.
pub const DEFAULT_URL_TEMPLATE: &str = "https://restcountries.com/v3.1/name/{country_name}";

/// Default request timeout.
const DEFAULT_TIMEOUT_SECS: u64 = 5;

/// Configuration for the REST Countries client.
#[derive(Debug, Clone)]
pub struct RestCountriesConfig {
    /// URL template containing a single `{country_name}` placeholder
    pub url_template: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl RestCountriesConfig {
    /// Create a config pointing at the public API.
    pub fn new() -> Self {
        Self {
            url_template: DEFAULT_URL_TEMPLATE.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }

    /// Set a custom URL template (for testing or a self-hosted mirror).
    pub fn with_url_template(mut self, template: impl Into<String>) -> Self {
        self.url_template = template.into();
        self
    }

    /// Set request timeout.
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

impl Default for RestCountriesConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Check that a URL template has somewhere to put the country name.
fn check_template(template: &str) -> Result<(), RestCountriesError> {
    if template.contains(COUNTRY_PLACEHOLDER) {
        Ok(())
    } else {
        Err(RestCountriesError::NotConfigured(format!(
            "URL template must contain {COUNTRY_PLACEHOLDER}"
        )))
    }
}

/// Percent-encode `name` as a single URL path segment.
///
/// Reserved characters such as `/`, `?` and `#` are escaped, so the name
/// cannot add path segments, a query or a fragment.
fn encode_path_segment(name: &str) -> Result<String, RestCountriesError> {
    let mut scratch = Url::parse("http://localhost/")
        .map_err(|e| RestCountriesError::NotConfigured(format!("URL encoder: {e}")))?;
    scratch
        .path_segments_mut()
        .map_err(|_| RestCountriesError::NotConfigured("URL encoder has no path".to_string()))?
        .pop()
        .push(name);

    Ok(scratch.path().trim_start_matches('/').to_string())
}

/// Substitute `country` into the first placeholder of `template`.
///
/// The trimmed name is percent-encoded as one path segment before
/// substitution.
pub fn build_url(template: &str, country: &str) -> Result<Url, RestCountriesError> {
    check_template(template)?;

    let encoded = encode_path_segment(country.trim())?;
    let raw = template.replacen(COUNTRY_PLACEHOLDER, &encoded, 1);
    Url::parse(&raw).map_err(|e| RestCountriesError::NotConfigured(format!("invalid URL {raw}: {e}")))
}

/// Client for the REST Countries API.
#[derive(Debug, Clone)]
pub struct RestCountriesClient {
    http: reqwest::Client,
    url_template: String,
}

impl RestCountriesClient {
    /// Create a new client with the given configuration.
    ///
    /// Fails if the URL template has no placeholder.
    pub fn new(config: RestCountriesConfig) -> Result<Self, RestCountriesError> {
        check_template(&config.url_template)?;

        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            url_template: config.url_template,
        })
    }

    /// Fetch a country by its human-readable name.
    ///
    /// When the name matches several countries only the first is returned.
    pub async fn fetch_country(&self, country: &str) -> Result<CountrySummary, RestCountriesError> {
        let url = build_url(&self.url_template, country)?;

        let response = self.http.get(url).send().await?;
        let status = response.status();

        if status == StatusCode::NOT_FOUND {
            return Err(RestCountriesError::NotFound);
        }

        if status != StatusCode::OK {
            let body = response.text().await.unwrap_or_default();
            return Err(RestCountriesError::Api {
                status: status.as_u16(),
                message: body.chars().take(200).collect(),
            });
        }

        let body = response.text().await?;

        let records: Vec<RestCountry> =
            serde_json::from_str(&body).map_err(|e| RestCountriesError::Json {
                message: e.to_string(),
            })?;

        let record = first_match(records).ok_or(RestCountriesError::NotFound)?;
        convert_country(&record)
    }
}

impl CountryFetcher for RestCountriesClient {
    async fn fetch(&self, country: &str) -> Result<CountrySummary, LookupError> {
        self.fetch_country(country).await.map_err(LookupError::from)
    }
}
