//! Normalized country summaries.

/// Placeholder used when the upstream record has no capital or currency.
pub const NOT_AVAILABLE: &str = "N/A";

/// Summary of a country as returned to callers.
///
/// Built once from an upstream record and never mutated afterwards; the
/// cache hands out shared `Arc`s to the same value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CountrySummary {
    name: String,
    capital: String,
    currency: String,
    population: u64,
}

impl CountrySummary {
    /// Create a summary, substituting [`NOT_AVAILABLE`] for a missing or
    /// blank capital and currency.
    pub fn new(
        name: impl Into<String>,
        capital: Option<String>,
        currency: Option<String>,
        population: u64,
    ) -> Self {
        Self {
            name: name.into(),
            capital: or_not_available(capital),
            currency: or_not_available(currency),
            population,
        }
    }

    /// Common name of the country.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Capital city, or `"N/A"`.
    pub fn capital(&self) -> &str {
        &self.capital
    }

    /// Currency symbol, or `"N/A"`.
    pub fn currency(&self) -> &str {
        &self.currency
    }

    pub fn population(&self) -> u64 {
        self.population
    }
}

fn or_not_available(value: Option<String>) -> String {
    value
        .filter(|v| !v.trim().is_empty())
        .unwrap_or_else(|| NOT_AVAILABLE.to_string())
}
