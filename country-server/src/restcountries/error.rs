//! REST Countries client error types.

/// Errors from the REST Countries HTTP client.
#[derive(Debug, thiserror::Error)]
pub enum RestCountriesError {
    /// HTTP request failed (network error, timeout, etc.)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// No country matched the requested name
    #[error("country not found")]
    NotFound,

    /// API returned an error status code
    #[error("API error {status}: {message}")]
    Api { status: u16, message: String },

    /// Response body was not the expected JSON shape
    #[error("JSON parse error: {message}")]
    Json { message: String },

    /// Client configuration is unusable
    #[error("not configured: {0}")]
    NotConfigured(String),
}
