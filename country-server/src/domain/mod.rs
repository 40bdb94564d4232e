//! Domain types for the country lookup service.
//!
//! Both types validate at construction, so code holding a `CountryKey`
//! never needs to re-check normalization.

mod country;
mod key;

pub use country::{CountrySummary, NOT_AVAILABLE};
pub use key::{CountryKey, InvalidCountry};
