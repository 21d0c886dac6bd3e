//! Error types for data operations.
//!
//! This module defines [`DataError`] which covers all error cases that can occur
//! when building requests for, fetching, or parsing financial data.

use thiserror::Error;

/// Errors that can occur during data operations.
#[derive(Error, Debug)]
pub enum DataError {
    /// Network-related errors (connection failures, timeouts, non-success HTTP status).
    #[error("Network error: {0}")]
    Network(String),

    /// The provider answered with HTTP 429.
    #[error("Rate limited by {provider}")]
    RateLimited {
        /// The provider that rate limited the request.
        provider: String,
    },

    /// The requested symbol was not found.
    #[error("Symbol not found: {0}")]
    SymbolNotFound(String),

    /// The provider knows the symbol but returned nothing usable for it.
    #[error("Data not available for {symbol}: {detail}")]
    DataNotAvailable {
        /// The symbol that was requested.
        symbol: String,
        /// What was missing from the response.
        detail: String,
    },

    /// Error parsing data from a provider.
    #[error("Parse error: {0}")]
    Parse(String),

    /// An invalid parameter was provided.
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// The client could not be configured (bad proxy, bad base URL, ...).
    #[error("Configuration error: {0}")]
    Config(String),

    /// Any other error.
    #[error("{0}")]
    Other(String),
}

impl DataError {
    /// Returns true if the error only means "nothing there for this symbol".
    ///
    /// Batch operations record these as an empty entry for the symbol instead
    /// of failing the whole batch.
    #[must_use]
    pub const fn is_missing_data(&self) -> bool {
        matches!(self, Self::SymbolNotFound(_) | Self::DataNotAvailable { .. })
    }
}

/// Result type alias using [`DataError`].
pub type Result<T> = std::result::Result<T, DataError>;
