//! External provider configuration: geocoder, job search, email.

use serde::{Deserialize, Serialize};

use super::{default_http_timeout, default_locale};

/// Geocoding API configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeocoderConfig {
    #[serde(default = "default_geocoder_endpoint")]
    pub endpoint: String,

    #[serde(default)]
    pub api_key: Option<String>,

    #[serde(default = "default_http_timeout")]
    pub timeout_secs: u64,
}

impl Default for GeocoderConfig {
    fn default() -> Self {
        Self {
            endpoint: default_geocoder_endpoint(),
            api_key: None,
            timeout_secs: default_http_timeout(),
        }
    }
}

fn default_geocoder_endpoint() -> String {
    "https://maps.googleapis.com/maps/api/geocode/json".to_string()
}

/// Job search GraphQL endpoint configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobsConfig {
    #[serde(default = "default_jobs_endpoint")]
    pub endpoint: String,

    #[serde(default = "default_jobs_timeout")]
    pub timeout_secs: u64,
}

impl Default for JobsConfig {
    fn default() -> Self {
        Self {
            endpoint: default_jobs_endpoint(),
            timeout_secs: default_jobs_timeout(),
        }
    }
}

fn default_jobs_endpoint() -> String {
    "https://e5mquma77feepi2bdn4d6h3mpu.appsync-api.us-east-1.amazonaws.com/graphql".to_string()
}

fn default_jobs_timeout() -> u64 {
    5
}

/// Digest email configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmailConfig {
    #[serde(default = "default_email_endpoint")]
    pub endpoint: String,

    #[serde(default)]
    pub api_key: Option<String>,

    #[serde(default = "default_from_address")]
    pub from_address: String,

    #[serde(default = "default_from_name")]
    pub from_name: String,

    #[serde(default)]
    pub recipients: Vec<String>,

    #[serde(default = "default_subject_prefix")]
    pub subject_prefix: String,

    /// Listing page; `jobId` and `locale` are appended as query parameters.
    #[serde(default = "default_detail_url")]
    pub detail_url: String,

    #[serde(default = "default_locale")]
    pub detail_locale: String,

    #[serde(default = "default_http_timeout")]
    pub timeout_secs: u64,
}

impl Default for EmailConfig {
    fn default() -> Self {
        Self {
            endpoint: default_email_endpoint(),
            api_key: None,
            from_address: default_from_address(),
            from_name: default_from_name(),
            recipients: Vec::new(),
            subject_prefix: default_subject_prefix(),
            detail_url: default_detail_url(),
            detail_locale: default_locale(),
            timeout_secs: default_http_timeout(),
        }
    }
}

fn default_email_endpoint() -> String {
    "https://api.sendgrid.com/v3/mail/send".to_string()
}

/// Placeholder sender; SendGrid rejects senders that are not verified.
pub const DEFAULT_FROM_ADDRESS: &str = "hirewatch@example.com";

fn default_from_address() -> String {
    DEFAULT_FROM_ADDRESS.to_string()
}

fn default_from_name() -> String {
    "hirewatch".to_string()
}

fn default_subject_prefix() -> String {
    "NEW AMAZON FULFILLMENT JOBS".to_string()
}

fn default_detail_url() -> String {
    "https://hiring.amazon.com/app#/jobDetail".to_string()
}

/// Split a comma-separated recipient list, trimming each entry and
/// dropping empty ones.
pub fn parse_recipients(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}
