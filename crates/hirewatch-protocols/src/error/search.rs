//! Job search errors.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SearchError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Timeout after {0} seconds")]
    Timeout(u64),

    #[error("Search API error: {status} - {message}")]
    Api { status: u16, message: String },

    #[error("Malformed search response: {0}")]
    MalformedBody(String),

    /// The endpoint returned GraphQL `errors` and no data.
    #[error("GraphQL error: {0}")]
    GraphQl(String),
}
