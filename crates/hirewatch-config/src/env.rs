//! Environment variable overlay.
//!
//! Secrets and per-deployment values come from the environment. Any key
//! that is set and non-empty replaces the matching config field.

use std::path::PathBuf;

use chrono::NaiveDate;

use crate::error::ConfigError;
use crate::schema::{parse_recipients, Config};

pub const ENV_SESSION_TOKEN: &str = "AWS_JOB_SESSION_TOKEN";
pub const ENV_LAST_RUN_DATE: &str = "AWS_JOB_DATE";
pub const ENV_GOOGLE_API_KEY: &str = "GOOGLE_API_KEY";
pub const ENV_DATA_DIR: &str = "FILE_PATH";
pub const ENV_RECIPIENTS: &str = "EMAIL";
pub const ENV_POSTAL_CODE: &str = "ZIPCODE";
pub const ENV_SENDGRID_API_KEY: &str = "SENDGRID_API_KEY";
pub const ENV_FROM_ADDRESS: &str = "FROM_EMAIL";

impl Config {
    /// Overlay values from the process environment.
    pub fn apply_env(&mut self) -> Result<(), ConfigError> {
        self.apply_env_with(|key| std::env::var(key).ok())
    }

    /// Overlay values from an arbitrary lookup.
    pub fn apply_env_with<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        if let Some(token) = get(ENV_SESSION_TOKEN) {
            self.auth.token = Some(token);
        }
        if let Some(date) = get(ENV_LAST_RUN_DATE) {
            let parsed = NaiveDate::parse_from_str(&date, "%Y-%m-%d").map_err(|e| {
                ConfigError::InvalidValue {
                    field: ENV_LAST_RUN_DATE.to_string(),
                    message: format!("expected YYYY-MM-DD, got '{}': {}", date, e),
                }
            })?;
            self.auth.last_run_date = Some(parsed);
        }
        if let Some(key) = get(ENV_GOOGLE_API_KEY) {
            self.geocoder.api_key = Some(key);
        }
        if let Some(dir) = get(ENV_DATA_DIR) {
            self.storage.data_dir = PathBuf::from(dir);
        }
        if let Some(list) = get(ENV_RECIPIENTS) {
            self.email.recipients = parse_recipients(&list);
        }
        if let Some(zip) = get(ENV_POSTAL_CODE) {
            self.search.postal_code = Some(zip);
        }
        if let Some(key) = get(ENV_SENDGRID_API_KEY) {
            self.email.api_key = Some(key);
        }
        if let Some(addr) = get(ENV_FROM_ADDRESS) {
            self.email.from_address = addr;
        }

        Ok(())
    }
}
