//! Provider trait definitions.

use async_trait::async_trait;
use chrono::NaiveDate;

use crate::error::{GeocodeError, NotifyError, SearchError, TokenError};
use crate::types::{DeliveryReceipt, EmailDigest, GeoCoordinate, JobQueryResult, SessionToken};

/// Source of the unauthenticated session token.
#[async_trait]
pub trait TokenSource: Send + Sync {
    /// Returns the provider ID.
    fn id(&self) -> &str;

    /// Fetch a fresh session token.
    async fn fetch_session_token(&self) -> Result<SessionToken, TokenError>;
}

/// Postal code to coordinate lookup.
#[async_trait]
pub trait Geocoder: Send + Sync {
    /// Returns the provider ID.
    fn id(&self) -> &str;

    /// Resolve a postal code. The first match wins.
    async fn geocode(&self, postal_code: &str) -> Result<GeoCoordinate, GeocodeError>;
}

/// Job listing search.
#[async_trait]
pub trait JobSearch: Send + Sync {
    /// Returns the provider ID.
    fn id(&self) -> &str;

    /// Fetch the first page of cards near `geo` starting on or after `as_of`.
    async fn search_jobs(
        &self,
        geo: &GeoCoordinate,
        as_of: NaiveDate,
        token: &SessionToken,
    ) -> Result<JobQueryResult, SearchError>;
}

/// Transactional email delivery.
#[async_trait]
pub trait Mailer: Send + Sync {
    /// Returns the provider ID.
    fn id(&self) -> &str;

    /// Send one message to every recipient of the digest.
    async fn send(&self, digest: &EmailDigest) -> Result<DeliveryReceipt, NotifyError>;
}
