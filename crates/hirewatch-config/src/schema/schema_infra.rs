//! Local storage and scheduling configuration.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Where the geo-cache, run state and logs live.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,

    #[serde(default = "default_geo_cache_file")]
    pub geo_cache_file: String,

    #[serde(default = "default_state_file")]
    pub state_file: String,

    /// Also write logs to `<data_dir>/logs`.
    #[serde(default = "default_log_to_file")]
    pub log_to_file: bool,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            geo_cache_file: default_geo_cache_file(),
            state_file: default_state_file(),
            log_to_file: default_log_to_file(),
        }
    }
}

impl StorageConfig {
    pub fn geo_cache_path(&self) -> PathBuf {
        self.data_dir.join(&self.geo_cache_file)
    }

    pub fn state_path(&self) -> PathBuf {
        self.data_dir.join(&self.state_file)
    }

    pub fn log_dir(&self) -> PathBuf {
        self.data_dir.join("logs")
    }
}

fn default_data_dir() -> PathBuf {
    dirs::data_local_dir()
        .map(|d| d.join("hirewatch"))
        .unwrap_or_else(|| PathBuf::from(".hirewatch"))
}

fn default_geo_cache_file() -> String {
    "geo_query.json".to_string()
}

fn default_state_file() -> String {
    "run_state.json".to_string()
}

fn default_log_to_file() -> bool {
    true
}

/// In-process schedule for `hirewatch watch`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WatchConfig {
    /// Six-field cron expression (`sec min hour day month weekday`).
    #[serde(default = "default_schedule")]
    pub schedule: String,
}

impl Default for WatchConfig {
    fn default() -> Self {
        Self {
            schedule: default_schedule(),
        }
    }
}

fn default_schedule() -> String {
    "0 0 9 * * *".to_string()
}
