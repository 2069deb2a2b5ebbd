//! Email delivery errors.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum NotifyError {
    #[error("No recipients configured")]
    NoRecipients,

    #[error("Network error: {0}")]
    Network(String),

    #[error("Timeout after {0} seconds")]
    Timeout(u64),

    #[error("Email provider error: {status} - {message}")]
    Api { status: u16, message: String },
}
