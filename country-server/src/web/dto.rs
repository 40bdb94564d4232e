//! Data transfer objects for web requests and responses.

use serde::{Deserialize, Serialize};

use crate::domain::CountrySummary;

/// Query string for a country search.
#[derive(Debug, Deserialize)]
pub struct CountrySearchRequest {
    /// Country name as typed by the user
    pub name: Option<String>,
}

/// A country in search results.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountryResponse {
    pub name: String,
    pub capital: String,
    pub currency: String,
    pub population: u64,
}

impl CountryResponse {
    /// Create from a domain summary.
    pub fn from_summary(summary: &CountrySummary) -> Self {
        Self {
            name: summary.name().to_string(),
            capital: summary.capital().to_string(),
            currency: summary.currency().to_string(),
            population: summary.population(),
        }
    }
}

/// Cache statistics.
#[derive(Debug, Serialize, Deserialize)]
pub struct CacheStatsResponse {
    /// Number of cached countries
    pub entries: usize,
}

/// Error body.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}
