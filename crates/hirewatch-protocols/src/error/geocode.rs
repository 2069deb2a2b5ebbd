//! Geocoding errors.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum GeocodeError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Timeout after {0} seconds")]
    Timeout(u64),

    #[error("Geocoding API error: {status} - {message}")]
    Api { status: u16, message: String },

    /// The provider answered but refused or failed the lookup.
    #[error("Geocoding failed with status {status}: {message}")]
    Rejected { status: String, message: String },

    #[error("No geocoding results for '{0}'")]
    NoResults(String),

    #[error("Malformed geocoding response: {0}")]
    MalformedBody(String),
}
