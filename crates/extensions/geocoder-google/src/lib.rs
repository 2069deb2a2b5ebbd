//! Google Geocoding API client for hirewatch.

mod api;
mod provider;

pub use provider::GoogleGeocoder;
