//! Google geocoder implementation.

use std::time::Duration;

use async_trait::async_trait;
use tracing::debug;

use hirewatch_protocols::error::GeocodeError;
use hirewatch_protocols::provider::Geocoder;
use hirewatch_protocols::types::{GeoCoordinate, DEFAULT_DISTANCE_UNIT, DEFAULT_SEARCH_RADIUS};

use crate::api::{GeocodeResponse, STATUS_OK, STATUS_ZERO_RESULTS};

const DEFAULT_API_URL: &str = "https://maps.googleapis.com/maps/api/geocode/json";
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Resolves postal codes through the Google Geocoding API.
pub struct GoogleGeocoder {
    api_key: String,
    api_url: String,
    unit: String,
    distance: u32,
    timeout_secs: u64,
    client: reqwest::Client,
}

impl GoogleGeocoder {
    pub fn new(api_key: String) -> Self {
        Self::with_url(api_key, DEFAULT_API_URL.to_string())
    }

    /// Create geocoder against a custom endpoint.
    pub fn with_url(api_key: String, api_url: String) -> Self {
        Self {
            api_key,
            api_url,
            unit: DEFAULT_DISTANCE_UNIT.to_string(),
            distance: DEFAULT_SEARCH_RADIUS,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            client: reqwest::Client::new(),
        }
    }

    /// Unit and radius stamped on every returned coordinate.
    pub fn with_radius(mut self, unit: impl Into<String>, distance: u32) -> Self {
        self.unit = unit.into();
        self.distance = distance;
        self
    }

    pub fn with_timeout(mut self, timeout_secs: u64) -> Self {
        self.timeout_secs = timeout_secs;
        self
    }

    fn map_send_error(&self, e: reqwest::Error) -> GeocodeError {
        if e.is_timeout() {
            GeocodeError::Timeout(self.timeout_secs)
        } else {
            GeocodeError::Network(e.to_string())
        }
    }

    fn first_location(
        &self,
        postal_code: &str,
        response: GeocodeResponse,
    ) -> Result<GeoCoordinate, GeocodeError> {
        match response.status.as_str() {
            STATUS_OK => {}
            STATUS_ZERO_RESULTS => return Err(GeocodeError::NoResults(postal_code.to_string())),
            _ => {
                return Err(GeocodeError::Rejected {
                    status: response.status,
                    message: response.error_message.unwrap_or_default(),
                });
            }
        }

        let first = response
            .results
            .into_iter()
            .next()
            .ok_or_else(|| GeocodeError::NoResults(postal_code.to_string()))?;

        if let Some(address) = &first.formatted_address {
            debug!("Geocoded '{}' to {}", postal_code, address);
        }

        let location = first.geometry.location;
        Ok(GeoCoordinate::new(location.lat, location.lng)
            .with_radius(self.unit.clone(), self.distance))
    }
}

#[async_trait]
impl Geocoder for GoogleGeocoder {
    fn id(&self) -> &str {
        "google"
    }

    async fn geocode(&self, postal_code: &str) -> Result<GeoCoordinate, GeocodeError> {
        let response = self
            .client
            .get(&self.api_url)
            .query(&[("address", postal_code), ("key", self.api_key.as_str())])
            .timeout(Duration::from_secs(self.timeout_secs))
            .send()
            .await
            .map_err(|e| self.map_send_error(e))?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let text = response.text().await.unwrap_or_default();
            return Err(GeocodeError::Api { status, message: text });
        }

        let body = response.text().await.map_err(|e| self.map_send_error(e))?;
        let parsed: GeocodeResponse = serde_json::from_str(&body)
            .map_err(|e| GeocodeError::MalformedBody(e.to_string()))?;

        self.first_location(postal_code, parsed)
    }
}

#[cfg(test)]
#[path = "provider_tests.rs"]
mod tests;
