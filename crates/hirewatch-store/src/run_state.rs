//! Run-state storage.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tokio::fs;
use tracing::debug;

use hirewatch_protocols::{SessionToken, StoreError};

/// What one run leaves behind for the next.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunState {
    /// Date the stored token was fetched.
    #[serde(default)]
    pub last_run_date: Option<NaiveDate>,

    #[serde(default)]
    pub session_token: Option<String>,
}

impl RunState {
    pub fn new(date: NaiveDate, token: &SessionToken) -> Self {
        Self {
            last_run_date: Some(date),
            session_token: Some(token.as_str().to_string()),
        }
    }

    /// The stored token, if it was fetched on `today`.
    pub fn token_for(&self, today: NaiveDate) -> Option<SessionToken> {
        match (&self.last_run_date, &self.session_token) {
            (Some(date), Some(token)) if *date == today && !token.is_empty() => {
                Some(SessionToken::new(token.clone()))
            }
            _ => None,
        }
    }
}

/// Load/save contract for [`RunState`].
#[async_trait]
pub trait RunStateStore: Send + Sync {
    /// Load the state; the default state when nothing was saved.
    async fn load(&self) -> Result<RunState, StoreError>;

    /// Replace the saved state.
    async fn save(&self, state: &RunState) -> Result<(), StoreError>;
}

/// In-memory run state for testing.
#[derive(Default)]
pub struct MemoryRunStateStore {
    state: tokio::sync::RwLock<RunState>,
}

impl MemoryRunStateStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_state(state: RunState) -> Self {
        Self {
            state: tokio::sync::RwLock::new(state),
        }
    }
}

#[async_trait]
impl RunStateStore for MemoryRunStateStore {
    async fn load(&self) -> Result<RunState, StoreError> {
        Ok(self.state.read().await.clone())
    }

    async fn save(&self, state: &RunState) -> Result<(), StoreError> {
        *self.state.write().await = state.clone();
        Ok(())
    }
}

/// Run state kept as a pretty-printed JSON file.
pub struct FileRunStateStore {
    path: PathBuf,
}

impl FileRunStateStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl RunStateStore for FileRunStateStore {
    async fn load(&self) -> Result<RunState, StoreError> {
        if !self.path.exists() {
            return Ok(RunState::default());
        }

        let content = fs::read_to_string(&self.path).await?;
        serde_json::from_str(&content).map_err(|e| {
            StoreError::Serialization(format!("Failed to parse run state {:?}: {}", self.path, e))
        })
    }

    async fn save(&self, state: &RunState) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).await?;
        }

        let content = serde_json::to_string_pretty(state).map_err(|e| {
            StoreError::Serialization(format!("Failed to serialize run state: {}", e))
        })?;

        fs::write(&self.path, content).await?;

        debug!("Saved run state to {:?}", self.path);
        Ok(())
    }
}
