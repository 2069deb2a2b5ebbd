//! Session token errors.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum TokenError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Timeout after {0} seconds")]
    Timeout(u64),

    #[error("Auth endpoint error: {status} - {message}")]
    Api { status: u16, message: String },

    #[error("Malformed token body: {0}")]
    MalformedBody(String),
}
