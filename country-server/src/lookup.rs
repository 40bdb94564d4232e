//! Cache-aware country lookup.
//!
//! `CountryLookup` is the single entry point used by the web layer. For each
//! request it normalizes the name, serves from the cache when possible, and
//! otherwise goes upstream and stores the result.
//!
//! Concurrent misses for the same country are not coalesced: each one makes
//! its own upstream call and the last store wins. Every caller still gets
//! the summary from its own fetch.

use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::cache::CountryCache;
use crate::domain::{CountryKey, CountrySummary, InvalidCountry};
use crate::restcountries::RestCountriesError;

/// Errors a lookup can fail with.
#[derive(Debug, thiserror::Error)]
pub enum LookupError {
    /// The requested name cannot be normalized into a key
    #[error("invalid country name: {0}")]
    InvalidInput(#[from] InvalidCountry),

    /// Upstream could not be reached or timed out
    #[error("country API unavailable: {0}")]
    UpstreamUnavailable(String),

    /// Upstream has no country by that name
    #[error("country not found")]
    UpstreamNotFound,

    /// Upstream answered with an unexpected status
    #[error("country API error: {0}")]
    UpstreamError(String),

    /// Upstream body did not have the expected shape
    #[error("malformed response from country API")]
    DecodeError { message: String },
}

impl From<RestCountriesError> for LookupError {
    fn from(e: RestCountriesError) -> Self {
        match e {
            RestCountriesError::Http(e) => LookupError::UpstreamUnavailable(e.to_string()),
            RestCountriesError::NotFound => LookupError::UpstreamNotFound,
            RestCountriesError::Json { message } => LookupError::DecodeError { message },
            e @ (RestCountriesError::Api { .. } | RestCountriesError::NotConfigured(_)) => {
                LookupError::UpstreamError(e.to_string())
            }
        }
    }
}

/// Source of country data consulted on a cache miss.
///
/// This abstraction allows the lookup to be tested without network access.
pub trait CountryFetcher: Send + Sync {
    /// Fetch a country by its human-readable name.
    fn fetch(
        &self,
        country: &str,
    ) -> impl Future<Output = Result<CountrySummary, LookupError>> + Send;
}

/// Coordinates normalization, cache access and upstream fetches.
#[derive(Debug)]
pub struct CountryLookup<F> {
    fetcher: F,
    cache: CountryCache,
}

impl<F: CountryFetcher> CountryLookup<F> {
    /// Create a lookup over the given fetcher and cache handle.
    pub fn new(fetcher: F, cache: CountryCache) -> Self {
        Self { fetcher, cache }
    }

    /// The cache this lookup reads and populates.
    pub fn cache(&self) -> &CountryCache {
        &self.cache
    }

    pub fn fetcher(&self) -> &F {
        &self.fetcher
    }

    /// Look up a country by name.
    ///
    /// Invalid names fail before the cache or upstream is touched. Upstream
    /// receives the trimmed name as typed, not the lowercased key. Failed
    /// fetches are never cached.
    pub async fn lookup(&self, country: &str) -> Result<Arc<CountrySummary>, LookupError> {
        let key = CountryKey::parse(country)?;

        if let Some(cached) = self.cache.get(&key).await {
            debug!(country = %key, "cache hit");
            return Ok(cached);
        }

        debug!(country = %key, "cache miss, calling country API");

        let summary = self
            .fetcher
            .fetch(country.trim())
            .await
            .inspect_err(|e| warn!(country = %key, error = %e, "country fetch failed"))?;

        let stored = self.cache.set(key.clone(), summary).await;
        info!(country = %key, "saved country into cache");

        Ok(stored)
    }
}
