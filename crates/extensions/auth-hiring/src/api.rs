//! Auth endpoint wire types.

use serde::Deserialize;

/// Body of the CSRF/session endpoint.
#[derive(Debug, Deserialize)]
pub struct TokenResponse {
    pub token: String,
}
