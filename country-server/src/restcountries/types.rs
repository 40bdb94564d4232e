//! Wire types for the REST Countries v3.1 API.
//!
//! The `/name/{name}` endpoint returns a JSON array of matching countries.
//! Only the fields the service reports are modelled; everything else in the
//! payload is ignored. Every field is optional on the wire.

use std::collections::BTreeMap;

use serde::Deserialize;

/// A single country record.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RestCountry {
    #[serde(default)]
    pub name: CountryName,

    /// Capital cities; some territories have none, a few have several.
    #[serde(default)]
    pub capital: Vec<String>,

    #[serde(default)]
    pub population: u64,

    /// Currencies keyed by ISO 4217 code (e.g. `INR`).
    #[serde(default)]
    pub currencies: BTreeMap<String, Currency>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CountryName {
    #[serde(default)]
    pub common: String,

    #[serde(default)]
    pub official: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Currency {
    #[serde(default)]
    pub name: Option<String>,

    #[serde(default)]
    pub symbol: Option<String>,
}
