//! Configuration loader.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::ConfigError;
use crate::schema::Config;

/// Configuration loader with environment variable substitution.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Config, ConfigError> {
        if !path.exists() {
            return Err(ConfigError::NotFound(path.display().to_string()));
        }
        let content = fs::read_to_string(path)?;
        Self::load_str(&content)
    }

    /// Load configuration from a string.
    pub fn load_str(content: &str) -> Result<Config, ConfigError> {
        let expanded = Self::expand_env_vars(content)?;
        let config: Config = toml::from_str(&expanded)?;
        Ok(config)
    }

    /// Build the effective configuration for a run.
    ///
    /// The file is optional unless `required` is set. Environment variables
    /// are applied on top, then `~` in the data directory is expanded.
    pub fn resolve(path: &Path, required: bool) -> Result<Config, ConfigError> {
        let mut config = if path.exists() || required {
            Self::load(path)?
        } else {
            Config::default()
        };
        config.apply_env()?;
        config.storage.data_dir =
            PathBuf::from(Self::expand_path(&config.storage.data_dir.to_string_lossy()));
        Ok(config)
    }

    /// Load a `.env` file into the process environment.
    ///
    /// Variables already set in the environment are left untouched. Returns
    /// the path that was loaded, or `None` when no file was found.
    pub fn load_dotenv(path: Option<&Path>) -> Result<Option<PathBuf>, ConfigError> {
        let result = match path {
            Some(p) => dotenvy::from_path(p).map(|_| p.to_path_buf()),
            None => dotenvy::dotenv(),
        };
        match result {
            Ok(loaded) => Ok(Some(loaded)),
            Err(e) if e.not_found() && path.is_none() => Ok(None),
            Err(e) => Err(ConfigError::DotEnv(e.to_string())),
        }
    }

    /// Expand environment variables in the format `${VAR}`.
    fn expand_env_vars(content: &str) -> Result<String, ConfigError> {
        let mut result = content.to_string();
        let re = regex::Regex::new(r"\$\{([^}]+)\}")
            .map_err(|e| ConfigError::InvalidFormat(e.to_string()))?;

        for cap in re.captures_iter(content) {
            let var_name = &cap[1];
            let var_value = std::env::var(var_name)
                .map_err(|_| ConfigError::EnvVarNotSet(var_name.to_string()))?;
            result = result.replace(&cap[0], &var_value);
        }

        Ok(result)
    }

    /// Expand shell-style paths (e.g., `~/.local/share`).
    pub fn expand_path(path: &str) -> String {
        shellexpand::tilde(path).to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::TokenPolicy;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_load_empty_config() {
        let config = ConfigLoader::load_str("").unwrap();
        assert_eq!(config.search.radius, 30);
        assert_eq!(config.jobs.timeout_secs, 5);
    }

    #[test]
    fn test_load_full_config() {
        let content = r#"
            [auth]
            token_policy = "daily"

            [search]
            postal_code = "21201"
            radius = 15

            [email]
            from_address = "jobs@example.org"
            recipients = ["a@x.com", "b@y.com"]

            [storage]
            data_dir = "/var/lib/hirewatch"
            log_to_file = false

            [watch]
            schedule = "0 */30 * * * *"
        "#;
        let config = ConfigLoader::load_str(content).unwrap();
        assert_eq!(config.auth.token_policy, TokenPolicy::Daily);
        assert_eq!(config.search.postal_code.as_deref(), Some("21201"));
        assert_eq!(config.search.radius, 15);
        assert_eq!(config.email.from_address, "jobs@example.org");
        assert_eq!(config.email.recipients.len(), 2);
        assert_eq!(config.storage.data_dir, PathBuf::from("/var/lib/hirewatch"));
        assert!(!config.storage.log_to_file);
        assert_eq!(config.watch.schedule, "0 */30 * * * *");
    }

    #[test]
    fn test_load_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[jobs]").unwrap();
        writeln!(file, "timeout_secs = 10").unwrap();

        let config = ConfigLoader::load(file.path()).unwrap();
        assert_eq!(config.jobs.timeout_secs, 10);
    }

    #[test]
    fn test_load_nonexistent_file() {
        let result = ConfigLoader::load(Path::new("/nonexistent/path/hirewatch.toml"));
        assert!(matches!(result, Err(ConfigError::NotFound(_))));
    }

    #[test]
    fn test_resolve_missing_optional_file() {
        let config =
            ConfigLoader::resolve(Path::new("/nonexistent/path/hirewatch.toml"), false).unwrap();
        assert_eq!(config.search.page_size, 100);
    }

    #[test]
    fn test_resolve_missing_required_file() {
        let result = ConfigLoader::resolve(Path::new("/nonexistent/path/hirewatch.toml"), true);
        assert!(result.is_err());
    }

    #[test]
    fn test_load_invalid_toml() {
        let content = "invalid = [unclosed";
        let result = ConfigLoader::load_str(content);
        assert!(result.is_err());
    }

    #[test]
    fn test_expand_env_vars() {
        // SAFETY: This test runs in isolation and sets a unique test-only env var
        unsafe {
            std::env::set_var("HIREWATCH_TEST_CONFIG_VAR", "test_value");
        }
        let content = "value = \"${HIREWATCH_TEST_CONFIG_VAR}\"";
        let expanded = ConfigLoader::expand_env_vars(content).unwrap();
        assert!(expanded.contains("test_value"));
        unsafe {
            std::env::remove_var("HIREWATCH_TEST_CONFIG_VAR");
        }
    }

    #[test]
    fn test_expand_env_vars_not_set() {
        let content = "value = \"${NONEXISTENT_HIREWATCH_VAR_12345}\"";
        let result = ConfigLoader::expand_env_vars(content);
        assert!(result.is_err());
    }

    #[test]
    fn test_expand_path_with_tilde() {
        let expanded = ConfigLoader::expand_path("~/test");
        assert!(!expanded.starts_with('~'));
        assert!(expanded.ends_with("/test"));
    }

    #[test]
    fn test_expand_path_no_tilde() {
        let path = "/app/data";
        assert_eq!(ConfigLoader::expand_path(path), path);
    }

    #[test]
    fn test_load_dotenv_explicit_missing_file() {
        let result = ConfigLoader::load_dotenv(Some(Path::new("/nonexistent/.env")));
        assert!(result.is_err());
    }

    #[test]
    fn test_load_dotenv_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "HIREWATCH_TEST_DOTENV_VAR=from_dotenv").unwrap();

        let loaded = ConfigLoader::load_dotenv(Some(file.path())).unwrap();
        assert_eq!(loaded.as_deref(), Some(file.path()));
        assert_eq!(
            std::env::var("HIREWATCH_TEST_DOTENV_VAR").unwrap(),
            "from_dotenv"
        );
        unsafe {
            std::env::remove_var("HIREWATCH_TEST_DOTENV_VAR");
        }
    }
}
