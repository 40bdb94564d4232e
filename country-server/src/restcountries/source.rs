//! Runtime choice between the live API and canned data.

use crate::domain::CountrySummary;
use crate::lookup::{CountryFetcher, LookupError};

use super::client::RestCountriesClient;
use super::mock::MockCountryClient;

/// Upstream used by the running server.
#[derive(Debug, Clone)]
pub enum CountrySource {
    Live(RestCountriesClient),
    Mock(MockCountryClient),
}

impl CountryFetcher for CountrySource {
    async fn fetch(&self, country: &str) -> Result<CountrySummary, LookupError> {
        match self {
            CountrySource::Live(client) => client.fetch(country).await,
            CountrySource::Mock(client) => client.fetch(country).await,
        }
    }
}
