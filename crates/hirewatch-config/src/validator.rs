//! Configuration validation.
//!
//! Missing credentials are only warnings: the run still starts and the
//! provider rejects the call.

use crate::error::ConfigError;
use crate::schema::{Config, TokenPolicy, DEFAULT_FROM_ADDRESS};

/// Validation result.
#[derive(Debug, Default)]
pub struct ValidationResult {
    pub errors: Vec<ValidationError>,
    pub warnings: Vec<ValidationWarning>,
}

impl ValidationResult {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn add_error(&mut self, error: ValidationError) {
        self.errors.push(error);
    }

    pub fn add_warning(&mut self, warning: ValidationWarning) {
        self.warnings.push(warning);
    }
}

/// A validation error.
#[derive(Debug)]
pub struct ValidationError {
    pub path: String,
    pub message: String,
}

impl ValidationError {
    pub fn new(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            message: message.into(),
        }
    }
}

/// A validation warning.
#[derive(Debug)]
pub struct ValidationWarning {
    pub path: String,
    pub message: String,
}

impl ValidationWarning {
    pub fn new(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            message: message.into(),
        }
    }
}

/// Upstream rejects larger pages.
const MAX_PAGE_SIZE: u32 = 100;

/// Configuration validator.
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validate the configuration.
    pub fn validate(config: &Config) -> Result<ValidationResult, ConfigError> {
        let mut result = ValidationResult::default();

        Self::validate_endpoints(config, &mut result);
        Self::validate_timeouts(config, &mut result);
        Self::validate_search(config, &mut result);
        Self::validate_credentials(config, &mut result);
        Self::validate_email(config, &mut result);

        Ok(result)
    }

    fn validate_endpoints(config: &Config, result: &mut ValidationResult) {
        let endpoints = [
            ("auth.endpoint", &config.auth.endpoint),
            ("geocoder.endpoint", &config.geocoder.endpoint),
            ("jobs.endpoint", &config.jobs.endpoint),
            ("email.endpoint", &config.email.endpoint),
        ];
        for (path, url) in endpoints {
            if !url.starts_with("http://") && !url.starts_with("https://") {
                result.add_error(ValidationError::new(
                    path,
                    "endpoint must start with http:// or https://",
                ));
            }
        }
    }

    fn validate_timeouts(config: &Config, result: &mut ValidationResult) {
        let timeouts = [
            ("auth.timeout_secs", config.auth.timeout_secs),
            ("geocoder.timeout_secs", config.geocoder.timeout_secs),
            ("jobs.timeout_secs", config.jobs.timeout_secs),
            ("email.timeout_secs", config.email.timeout_secs),
        ];
        for (path, secs) in timeouts {
            if secs == 0 {
                result.add_error(ValidationError::new(path, "timeout must be greater than 0"));
            }
        }
    }

    fn validate_search(config: &Config, result: &mut ValidationResult) {
        if config.search.page_size == 0 {
            result.add_error(ValidationError::new(
                "search.page_size",
                "page_size must be greater than 0",
            ));
        } else if config.search.page_size > MAX_PAGE_SIZE {
            result.add_warning(ValidationWarning::new(
                "search.page_size",
                format!("page_size above {} is not honored upstream", MAX_PAGE_SIZE),
            ));
        }

        if config.search.radius == 0 {
            result.add_error(ValidationError::new(
                "search.radius",
                "radius must be greater than 0",
            ));
        }

        if config.search.postal_code.is_none() {
            result.add_warning(ValidationWarning::new(
                "search.postal_code",
                "postal code is not set (ZIPCODE); geocoding will fail unless the geo-cache exists",
            ));
        }
    }

    fn validate_credentials(config: &Config, result: &mut ValidationResult) {
        if config.geocoder.api_key.is_none() {
            result.add_warning(ValidationWarning::new(
                "geocoder.api_key",
                "API key is not set (GOOGLE_API_KEY); needed when the geo-cache is empty",
            ));
        }

        if config.email.api_key.is_none() {
            result.add_warning(ValidationWarning::new(
                "email.api_key",
                "API key is not set (SENDGRID_API_KEY); email delivery will be rejected",
            ));
        }

        if config.auth.token.is_some() {
            match config.auth.token_policy {
                TokenPolicy::Always => result.add_warning(ValidationWarning::new(
                    "auth.token",
                    "configured token is ignored under the always policy",
                )),
                TokenPolicy::Daily if config.auth.last_run_date.is_none() => {
                    result.add_warning(ValidationWarning::new(
                        "auth.last_run_date",
                        "configured token has no date (AWS_JOB_DATE); it will be refreshed",
                    ))
                }
                TokenPolicy::Daily => {}
            }
        }
    }

    fn validate_email(config: &Config, result: &mut ValidationResult) {
        if config.email.recipients.is_empty() {
            result.add_warning(ValidationWarning::new(
                "email.recipients",
                "no recipients configured (EMAIL); digests cannot be delivered",
            ));
        }

        for recipient in &config.email.recipients {
            if !recipient.contains('@') {
                result.add_error(ValidationError::new(
                    "email.recipients",
                    format!("'{}' is not an email address", recipient),
                ));
            }
        }

        if !config.email.from_address.contains('@') {
            result.add_error(ValidationError::new(
                "email.from_address",
                "sender must be an email address",
            ));
        } else if config.email.from_address == DEFAULT_FROM_ADDRESS {
            result.add_warning(ValidationWarning::new(
                "email.from_address",
                format!(
                    "sender is the placeholder {} (FROM_EMAIL); SendGrid needs a verified sender",
                    DEFAULT_FROM_ADDRESS
                ),
            ));
        }
    }
}

#[cfg(test)]
#[path = "validator_tests.rs"]
mod tests;
