//! REST Countries API client.
//!
//! This is the upstream source of country data. The `/name/{name}`
//! endpoint performs a fuzzy name search and returns an array of matches;
//! the client reports only the first one, reduced to a `CountrySummary`.

mod client;
mod convert;
mod error;
mod mock;
mod source;
mod types;

pub use client::{
    COUNTRY_PLACEHOLDER, DEFAULT_URL_TEMPLATE, RestCountriesClient, RestCountriesConfig, build_url,
};
pub use convert::{convert_country, first_match};
pub use error::RestCountriesError;
pub use mock::MockCountryClient;
pub use source::CountrySource;
pub use types::{CountryName, Currency, RestCountry};
