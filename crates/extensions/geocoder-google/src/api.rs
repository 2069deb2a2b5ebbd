//! Google Geocoding API types.
//! Only the fields needed to read the first location are modelled.

use serde::Deserialize;

/// Status value of a successful lookup.
pub const STATUS_OK: &str = "OK";

/// Status value when the address matched nothing.
pub const STATUS_ZERO_RESULTS: &str = "ZERO_RESULTS";

/// API response.
#[derive(Debug, Deserialize)]
pub struct GeocodeResponse {
    pub status: String,
    #[serde(default)]
    pub results: Vec<GeocodeResult>,
    #[serde(default)]
    pub error_message: Option<String>,
}

/// One candidate match.
#[derive(Debug, Deserialize)]
pub struct GeocodeResult {
    pub geometry: Geometry,
    #[serde(default)]
    pub formatted_address: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct Geometry {
    pub location: LatLng,
}

#[derive(Debug, Deserialize)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}
