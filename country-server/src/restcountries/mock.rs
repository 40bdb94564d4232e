//! Mock REST Countries client for running without network access.
//!
//! Serves canned upstream payloads from JSON files and counts how many
//! fetches it has answered.

use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use tokio::sync::RwLock;

use crate::domain::CountrySummary;
use crate::lookup::{CountryFetcher, LookupError};

use super::convert::{convert_country, first_match};
use super::error::RestCountriesError;
use super::types::RestCountry;

/// Mock client that serves data from memory.
///
/// Records are keyed by lowercased country name. A name with no record, or
/// whose record is an empty array, yields `NotFound` just like the real API.
#[derive(Debug, Clone, Default)]
pub struct MockCountryClient {
    records: Arc<RwLock<HashMap<String, Vec<RestCountry>>>>,
    calls: Arc<AtomicUsize>,
}

impl MockCountryClient {
    /// Create a mock with no countries.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Create a mock by loading JSON files from a directory.
    ///
    /// Expects files named after the country (e.g. `india.json`,
    /// `united_states.json`), each holding a raw upstream response array.
    pub fn new(data_dir: impl AsRef<Path>) -> Result<Self, RestCountriesError> {
        let data_dir = data_dir.as_ref();
        let mut records = HashMap::new();

        let entries = std::fs::read_dir(data_dir).map_err(|e| {
            RestCountriesError::NotConfigured(format!(
                "failed to read mock data directory {}: {e}",
                data_dir.display()
            ))
        })?;

        for entry in entries {
            let path = entry
                .map_err(|e| {
                    RestCountriesError::NotConfigured(format!("failed to read directory entry: {e}"))
                })?
                .path();

            if !path.is_file() || path.extension().and_then(|s| s.to_str()) != Some("json") {
                continue;
            }

            let Some(stem) = path.file_stem().and_then(|s| s.to_str()) else {
                continue;
            };

            let json = std::fs::read_to_string(&path).map_err(|e| {
                RestCountriesError::NotConfigured(format!("failed to read {}: {e}", path.display()))
            })?;

            records.insert(lookup_name(&stem.replace('_', " ")), parse_records(&json)?);
        }

        if records.is_empty() {
            return Err(RestCountriesError::NotConfigured(format!(
                "no mock country files found in {}",
                data_dir.display()
            )));
        }

        Ok(Self {
            records: Arc::new(RwLock::new(records)),
            calls: Arc::default(),
        })
    }

    /// Add or replace the upstream payload served for `name`.
    pub async fn insert_json(&self, name: &str, json: &str) -> Result<(), RestCountriesError> {
        let parsed = parse_records(json)?;
        let mut records = self.records.write().await;
        records.insert(lookup_name(name), parsed);
        Ok(())
    }

    /// Number of fetches answered so far, including failed ones.
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// Names with a canned payload.
    pub async fn available_countries(&self) -> Vec<String> {
        let records = self.records.read().await;
        let mut names: Vec<String> = records.keys().cloned().collect();
        names.sort();
        names
    }

    /// Mimics `RestCountriesClient::fetch_country`.
    pub async fn fetch_country(&self, country: &str) -> Result<CountrySummary, RestCountriesError> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        let records = self.records.read().await;
        let matches = records
            .get(&lookup_name(country))
            .cloned()
            .ok_or(RestCountriesError::NotFound)?;

        let record = first_match(matches).ok_or(RestCountriesError::NotFound)?;
        convert_country(&record)
    }
}

impl CountryFetcher for MockCountryClient {
    async fn fetch(&self, country: &str) -> Result<CountrySummary, LookupError> {
        self.fetch_country(country).await.map_err(LookupError::from)
    }
}

fn lookup_name(name: &str) -> String {
    name.trim().to_lowercase()
}

fn parse_records(json: &str) -> Result<Vec<RestCountry>, RestCountriesError> {
    serde_json::from_str(json).map_err(|e| RestCountriesError::Json {
        message: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[tokio::test]
    async fn load_mock_data() {
        let client = MockCountryClient::new("data/mock_countries").unwrap();
        let countries = client.available_countries().await;

        assert!(countries.contains(&"india".to_string()));
        assert!(countries.contains(&"united states".to_string()));
    }

    #[tokio::test]
    async fn serves_bundled_india() {
        let client = MockCountryClient::new("data/mock_countries").unwrap();
        let india = client.fetch_country("  INDIA ").await.unwrap();

        assert_eq!(india.capital(), "New Delhi");
        assert_eq!(india.currency(), "₹");
        assert_eq!(client.call_count(), 1);
    }

    #[tokio::test]
    async fn loads_from_directory() {
        let dir = tempdir().unwrap();
        std::fs::write(
            dir.path().join("peru.json"),
            r#"[{"name": {"common": "Peru"}, "capital": ["Lima"], "population": 33715471,
                 "currencies": {"PEN": {"symbol": "S/ "}}}]"#,
        )
        .unwrap();
        std::fs::write(dir.path().join("notes.txt"), "ignored").unwrap();

        let client = MockCountryClient::new(dir.path()).unwrap();
        assert_eq!(client.available_countries().await, vec!["peru".to_string()]);

        let peru = client.fetch_country("Peru").await.unwrap();
        assert_eq!(peru.population(), 33_715_471);
    }

    #[test]
    fn empty_directory_is_an_error() {
        let dir = tempdir().unwrap();
        assert!(MockCountryClient::new(dir.path()).is_err());
    }

    #[test]
    fn malformed_file_is_an_error() {
        let dir = tempdir().unwrap();
        std::fs::write(dir.path().join("bad.json"), "{not json").unwrap();
        assert!(matches!(
            MockCountryClient::new(dir.path()),
            Err(RestCountriesError::Json { .. })
        ));
    }

    #[tokio::test]
    async fn unknown_country_is_not_found() {
        let client = MockCountryClient::empty();
        client.insert_json("Atlantis", "[]").await.unwrap();

        assert!(matches!(
            client.fetch_country("Atlantis").await,
            Err(RestCountriesError::NotFound)
        ));
        assert!(matches!(
            client.fetch_country("Lemuria").await,
            Err(RestCountriesError::NotFound)
        ));
        assert_eq!(client.call_count(), 2);
    }
}
