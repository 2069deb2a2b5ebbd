//! `validate` subcommand.

use hirewatch_config::{Config, ConfigError, ConfigValidator, ValidationResult};

/// Validate and print findings. Errors make the result invalid.
pub(crate) fn validate(config: &Config) -> Result<ValidationResult, ConfigError> {
    let result = ConfigValidator::validate(config)?;

    for error in &result.errors {
        println!("error: {}: {}", error.path, error.message);
    }
    for warning in &result.warnings {
        println!("warning: {}: {}", warning.path, warning.message);
    }
    if result.is_valid() {
        println!("Configuration OK ({} warning(s))", result.warnings.len());
    }

    Ok(result)
}
