//! Normalized country cache keys.

use std::fmt;

/// Error returned when a country name cannot be turned into a key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum InvalidCountry {
    /// Nothing left after trimming whitespace
    #[error("country name is empty")]
    Empty,

    /// Input contains no alphabetic characters at all
    #[error("country name must contain at least one letter")]
    NoLetters,
}

/// A normalized country name used to key the lookup cache.
///
/// Keys are trimmed and lowercased, and always contain at least one
/// alphabetic character. Any two spellings that differ only in surrounding
/// whitespace or letter case map to the same key.
///
/// # Examples
///
/// ```
/// use country_server::domain::CountryKey;
///
/// let key = CountryKey::parse("  India ").unwrap();
/// assert_eq!(key.as_str(), "india");
/// assert_eq!(key, CountryKey::parse("india").unwrap());
///
/// // Digits alone are rejected
/// assert!(CountryKey::parse("1234").is_err());
///
/// // So is whitespace
/// assert!(CountryKey::parse("   ").is_err());
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct CountryKey(String);

impl CountryKey {
    /// Parse and normalize a raw country name.
    pub fn parse(raw: &str) -> Result<Self, InvalidCountry> {
        let trimmed = raw.trim();

        if trimmed.is_empty() {
            return Err(InvalidCountry::Empty);
        }

        if !trimmed.chars().any(char::is_alphabetic) {
            return Err(InvalidCountry::NoLetters);
        }

        Ok(CountryKey(trimmed.to_lowercase()))
    }

    /// Returns the key as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for CountryKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CountryKey({})", self.0)
    }
}

impl fmt::Display for CountryKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn trims_and_lowercases() {
        let key = CountryKey::parse("  India ").unwrap();
        assert_eq!(key.as_str(), "india");
        assert_eq!(key, CountryKey::parse("india").unwrap());
        assert_eq!(key, CountryKey::parse("INDIA").unwrap());
    }

    #[test]
    fn keeps_inner_whitespace() {
        let key = CountryKey::parse("\tUnited States\n").unwrap();
        assert_eq!(key.as_str(), "united states");
    }

    #[test]
    fn rejects_empty() {
        assert_eq!(CountryKey::parse(""), Err(InvalidCountry::Empty));
        assert_eq!(CountryKey::parse("   \t"), Err(InvalidCountry::Empty));
    }

    #[test]
    fn rejects_no_letters() {
        assert_eq!(CountryKey::parse("123"), Err(InvalidCountry::NoLetters));
        assert_eq!(CountryKey::parse(" 12-34 "), Err(InvalidCountry::NoLetters));
    }

    #[test]
    fn accepts_mixed_and_unicode() {
        assert!(CountryKey::parse("r2d2").is_ok());
        assert_eq!(
            CountryKey::parse("Côte d'Ivoire").unwrap().as_str(),
            "côte d'ivoire"
        );
    }

    #[test]
    fn display_and_debug() {
        let key = CountryKey::parse("Peru").unwrap();
        assert_eq!(key.to_string(), "peru");
        assert_eq!(format!("{key:?}"), "CountryKey(peru)");
    }

    #[test]
    fn error_display() {
        assert_eq!(InvalidCountry::Empty.to_string(), "country name is empty");
        assert_eq!(
            InvalidCountry::NoLetters.to_string(),
            "country name must contain at least one letter"
        );
    }

    proptest! {
        #[test]
        fn parse_is_idempotent(raw in "[ a-zA-Z0-9éÖß\\t-]{0,24}") {
            if let Ok(key) = CountryKey::parse(&raw) {
                let again = CountryKey::parse(key.as_str()).unwrap();
                prop_assert_eq!(again, key);
            }
        }

        #[test]
        fn surrounding_whitespace_is_ignored(name in "[A-Za-z ]{0,16}[A-Za-z]", pad in "[ \t]{0,4}") {
            let padded = format!("{pad}{name}{pad}");
            prop_assert_eq!(CountryKey::parse(&padded), CountryKey::parse(&name));
        }

        #[test]
        fn digit_only_input_is_rejected(digits in "[0-9 ]{0,12}") {
            prop_assert!(CountryKey::parse(&digits).is_err());
        }
    }
}
