//! Fatal run errors.

use thiserror::Error;

use hirewatch_protocols::error::{GeocodeError, SearchError, TokenError};

/// Errors that abort a run before any email is sent.
#[derive(Debug, Error)]
pub enum RunError {
    #[error("Session token: {0}")]
    Token(#[from] TokenError),

    #[error("Geocoding: {0}")]
    Geocode(#[from] GeocodeError),

    #[error("Job search: {0}")]
    Search(#[from] SearchError),
}
