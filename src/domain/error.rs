//! Error types for the CountryDeck plugin.
//!
//! [`CountryDeckError`] is the crate-wide error and [`Result`] its alias. The
//! fetcher's concrete failure causes live in [`FetchError`]; callers only ever
//! see them wrapped in [`CountryDeckError::CountriesUnavailable`], with the cause
//! reachable through [`std::error::Error::source`] for logging.

use thiserror::Error;

/// Concrete reasons a countries fetch can fail.
///
/// These never reach the user. They are kept as the `source` of
/// [`CountryDeckError::CountriesUnavailable`] so logs can tell a bad status
/// from a bad payload.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The endpoint answered outside the 200–299 range.
    ///
    /// Zellij also reports transport failures (DNS, timeouts, aborted
    /// connections) this way, so this variant covers them too.
    #[error("unexpected status: {status}")]
    RequestFailed {
        /// HTTP status code returned by the host.
        status: u16,
    },

    /// The body was not a JSON array of country objects.
    #[error("malformed countries payload: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// The main error type for CountryDeck operations.
#[derive(Debug, Error)]
pub enum CountryDeckError {
    /// The country list could not be obtained.
    ///
    /// Every fetch failure collapses into this variant. The display text is the
    /// generic message; the specific cause is the error source.
    #[error("failed to fetch countries")]
    CountriesUnavailable(#[from] FetchError),

    /// Reading or writing the preference store failed.
    #[error("Storage error: {0}")]
    Storage(String),

    /// Filesystem or I/O operation failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Theme parsing or loading failed.
    #[error("Theme error: {0}")]
    Theme(String),

    /// Configuration is invalid.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl CountryDeckError {
    /// Returns the HTTP status behind a failed fetch, if there was one.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::CountriesUnavailable(FetchError::RequestFailed { status }) => Some(*status),
            _ => None,
        }
    }
}

/// A specialized `Result` type for CountryDeck operations.
pub type Result<T> = std::result::Result<T, CountryDeckError>;
