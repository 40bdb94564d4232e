//! Conversion from REST Countries records to domain summaries.

use crate::domain::CountrySummary;

use super::error::RestCountriesError;
use super::types::RestCountry;

/// Convert a raw record into a `CountrySummary`.
///
/// Uses the first listed capital and the symbol of the first currency in
/// code order. Either falls back to `"N/A"` when absent. A record without a
/// common name is malformed.
pub fn convert_country(raw: &RestCountry) -> Result<CountrySummary, RestCountriesError> {
    let name = raw.name.common.trim();
    if name.is_empty() {
        return Err(RestCountriesError::Json {
            message: "country record has no common name".to_string(),
        });
    }

    let capital = raw.capital.first().cloned();
    let currency = raw
        .currencies
        .values()
        .find_map(|c| c.symbol.clone().filter(|s| !s.trim().is_empty()));

    Ok(CountrySummary::new(name, capital, currency, raw.population))
}

/// Pick the record to report from a list of matches.
///
/// The upstream search is fuzzy, so `"india"` may also match
/// `"British Indian Ocean Territory"`. Only the first match is used.
pub fn first_match(records: Vec<RestCountry>) -> Option<RestCountry> {
    records.into_iter().next()
}
