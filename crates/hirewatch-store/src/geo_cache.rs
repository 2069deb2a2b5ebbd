//! Geo-cache storage.

use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use tokio::fs;
use tracing::debug;

use hirewatch_protocols::{GeoCoordinate, StoreError};

/// Persisted search coordinate.
///
/// The stored value is never checked against the configured postal code.
#[async_trait]
pub trait GeoCache: Send + Sync {
    /// Load the cached coordinate, `None` when nothing is cached.
    async fn load(&self) -> Result<Option<GeoCoordinate>, StoreError>;

    /// Replace the cached coordinate.
    async fn save(&self, geo: &GeoCoordinate) -> Result<(), StoreError>;

    /// Drop the cached coordinate. Returns whether anything was removed.
    async fn clear(&self) -> Result<bool, StoreError>;
}

/// In-memory geo-cache for testing.
#[derive(Default)]
pub struct MemoryGeoCache {
    value: tokio::sync::RwLock<Option<GeoCoordinate>>,
    saves: AtomicUsize,
}

impl MemoryGeoCache {
    /// Create an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a cache already holding `geo`.
    pub fn with_value(geo: GeoCoordinate) -> Self {
        Self {
            value: tokio::sync::RwLock::new(Some(geo)),
            saves: AtomicUsize::new(0),
        }
    }

    /// Number of `save` calls so far.
    pub fn save_count(&self) -> usize {
        self.saves.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl GeoCache for MemoryGeoCache {
    async fn load(&self) -> Result<Option<GeoCoordinate>, StoreError> {
        Ok(self.value.read().await.clone())
    }

    async fn save(&self, geo: &GeoCoordinate) -> Result<(), StoreError> {
        *self.value.write().await = Some(geo.clone());
        self.saves.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    async fn clear(&self) -> Result<bool, StoreError> {
        Ok(self.value.write().await.take().is_some())
    }
}

/// Geo-cache kept as a single JSON file.
///
/// The file holds exactly the `geoQueryClause` object sent upstream:
/// ```text
/// {"lat":39.29,"lng":-76.61,"unit":"mi","distance":30}
/// ```
pub struct FileGeoCache {
    path: PathBuf,
}

impl FileGeoCache {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl GeoCache for FileGeoCache {
    async fn load(&self) -> Result<Option<GeoCoordinate>, StoreError> {
        if !self.path.exists() {
            return Ok(None);
        }

        let content = fs::read_to_string(&self.path).await?;
        let geo = serde_json::from_str::<GeoCoordinate>(&content).map_err(|e| {
            StoreError::Serialization(format!(
                "Failed to parse geo-cache {:?}: {}",
                self.path, e
            ))
        })?;

        debug!("Loaded geo-cache from {:?}", self.path);
        Ok(Some(geo))
    }

    async fn save(&self, geo: &GeoCoordinate) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).await?;
        }

        let content = serde_json::to_string(geo).map_err(|e| {
            StoreError::Serialization(format!("Failed to serialize geo-cache: {}", e))
        })?;

        // Single write so a concurrent reader sees either nothing or the whole record.
        fs::write(&self.path, content).await?;

        debug!("Saved geo-cache to {:?}", self.path);
        Ok(())
    }

    async fn clear(&self) -> Result<bool, StoreError> {
        if !self.path.exists() {
            return Ok(false);
        }
        fs::remove_file(&self.path).await?;
        debug!("Removed geo-cache {:?}", self.path);
        Ok(true)
    }
}

#[cfg(test)]
#[path = "geo_cache_tests.rs"]
mod tests;
