//! Configuration schema definitions.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

mod schema_infra;
mod schema_providers;

pub use schema_infra::*;
pub use schema_providers::*;

/// Root configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub auth: AuthConfig,

    #[serde(default)]
    pub search: SearchConfig,

    #[serde(default)]
    pub geocoder: GeocoderConfig,

    #[serde(default)]
    pub jobs: JobsConfig,

    #[serde(default)]
    pub email: EmailConfig,

    #[serde(default)]
    pub storage: StorageConfig,

    #[serde(default)]
    pub watch: WatchConfig,
}

/// When to fetch a new session token.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenPolicy {
    /// Fetch a new token on every run.
    #[default]
    Always,
    /// Reuse the stored token while the last-run date is today.
    Daily,
}

/// Session token endpoint configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    #[serde(default = "default_auth_endpoint")]
    pub endpoint: String,

    #[serde(default = "default_country_code")]
    pub country_code: String,

    #[serde(default = "default_http_timeout")]
    pub timeout_secs: u64,

    #[serde(default)]
    pub token_policy: TokenPolicy,

    /// Configured token, reused under `daily` while `last_run_date` is today.
    #[serde(default)]
    pub token: Option<String>,

    /// Date the configured token was fetched.
    #[serde(default)]
    pub last_run_date: Option<NaiveDate>,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            endpoint: default_auth_endpoint(),
            country_code: default_country_code(),
            timeout_secs: default_http_timeout(),
            token_policy: TokenPolicy::default(),
            token: None,
            last_run_date: None,
        }
    }
}

fn default_auth_endpoint() -> String {
    "https://auth.hiring.amazon.com/api/csrf".to_string()
}

fn default_country_code() -> String {
    "US".to_string()
}

pub(crate) fn default_http_timeout() -> u64 {
    30
}

/// What to search for.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Postal code to geocode when the geo-cache is empty.
    #[serde(default)]
    pub postal_code: Option<String>,

    #[serde(default = "default_unit")]
    pub unit: String,

    #[serde(default = "default_radius")]
    pub radius: u32,

    #[serde(default = "default_page_size")]
    pub page_size: u32,

    #[serde(default = "default_locale")]
    pub locale: String,

    #[serde(default = "default_country")]
    pub country: String,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            postal_code: None,
            unit: default_unit(),
            radius: default_radius(),
            page_size: default_page_size(),
            locale: default_locale(),
            country: default_country(),
        }
    }
}

fn default_unit() -> String {
    "mi".to_string()
}

fn default_radius() -> u32 {
    30
}

fn default_page_size() -> u32 {
    100
}

pub(crate) fn default_locale() -> String {
    "en-US".to_string()
}

fn default_country() -> String {
    "United States".to_string()
}

#[cfg(test)]
#[path = "schema_tests.rs"]
mod tests;
