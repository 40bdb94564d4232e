//! Application state for the web layer.

use std::sync::Arc;

use crate::cache::CountryCache;
use crate::lookup::CountryLookup;
use crate::restcountries::CountrySource;

/// Shared application state.
///
/// One lookup, and therefore one cache, serves every request.
#[derive(Clone)]
pub struct AppState {
    /// Cache-aware country lookup
    pub lookup: Arc<CountryLookup<CountrySource>>,
}

impl AppState {
    /// Create a new app state with an empty cache.
    pub fn new(source: CountrySource) -> Self {
        Self {
            lookup: Arc::new(CountryLookup::new(source, CountryCache::new())),
        }
    }
}
