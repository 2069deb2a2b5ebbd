//! Run controller.
//!
//! A run is strictly sequential: token, coordinate, search, digest. Any
//! failure before the digest aborts the run; a failed delivery does not.

use std::sync::Arc;
use std::time::{Duration, Instant};

use chrono::NaiveDate;
use tracing::{debug, error, info, warn};

use hirewatch_config::{AuthConfig, Config};
use hirewatch_protocols::provider::{Geocoder, JobSearch, Mailer, TokenSource};
use hirewatch_protocols::types::GeoCoordinate;
use hirewatch_store::{GeoCache, RunStateStore};

use crate::digest::DigestBuilder;
use crate::error::RunError;
use crate::notifier::{DigestOutcome, Notifier};
use crate::token::{TokenManager, TokenOrigin};

/// Providers and stores a run talks to.
#[derive(Clone)]
pub struct RunComponents {
    pub token_source: Arc<dyn TokenSource>,
    pub geocoder: Arc<dyn Geocoder>,
    pub job_search: Arc<dyn JobSearch>,
    pub mailer: Arc<dyn Mailer>,
    pub geo_cache: Arc<dyn GeoCache>,
    pub run_state: Arc<dyn RunStateStore>,
}

/// Non-provider settings of a run.
#[derive(Debug, Clone)]
pub struct RunSettings {
    /// Empty when not configured; the geocoder reports the failure.
    pub postal_code: String,
    pub auth: AuthConfig,
    pub digest: DigestBuilder,
}

impl RunSettings {
    pub fn from_config(config: &Config) -> Self {
        Self {
            postal_code: config.search.postal_code.clone().unwrap_or_default(),
            auth: config.auth.clone(),
            digest: DigestBuilder::from_config(&config.email),
        }
    }
}

/// How the search coordinate was obtained.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GeoPath {
    CacheHit,
    CacheMiss,
}

/// Outcome of the notification step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeliveryStatus {
    Skipped,
    Sent { status: u16 },
    Failed(String),
}

/// Summary of a completed run.
#[derive(Debug, Clone)]
pub struct RunReport {
    pub geo_path: GeoPath,
    pub token_origin: TokenOrigin,
    pub geo: GeoCoordinate,
    pub cards_found: usize,
    pub has_more: bool,
    pub delivery: DeliveryStatus,
    pub elapsed: Duration,
}

/// Executes single runs.
pub struct Runner {
    components: RunComponents,
    tokens: TokenManager,
    notifier: Notifier,
    postal_code: String,
}

impl Runner {
    pub fn new(components: RunComponents, settings: RunSettings) -> Self {
        let tokens = TokenManager::from_config(
            components.token_source.clone(),
            components.run_state.clone(),
            &settings.auth,
        );
        let notifier = Notifier::new(settings.digest, components.mailer.clone());

        Self {
            components,
            tokens,
            notifier,
            postal_code: settings.postal_code,
        }
    }

    /// Run once with `today` as the search start date.
    pub async fn run(&self, today: NaiveDate) -> Result<RunReport, RunError> {
        let start = Instant::now();
        info!("Starting run for {}", today);

        let result = self.execute(today, start).await;
        let elapsed = start.elapsed();

        match &result {
            Ok(report) => info!(
                "Run finished in {:.2?}: {} card(s), delivery {:?}",
                elapsed, report.cards_found, report.delivery
            ),
            Err(e) => error!("Run aborted after {:.2?}: {}", elapsed, e),
        }

        result
    }

    async fn execute(&self, today: NaiveDate, start: Instant) -> Result<RunReport, RunError> {
        let (token, token_origin) = self.tokens.obtain(today).await?;
        debug!("Session token ready ({:?})", token_origin);

        let (geo, geo_path) = self.resolve_coordinate().await?;

        let result = self
            .components
            .job_search
            .search_jobs(&geo, today, &token)
            .await?;
        info!("Found {} job card(s)", result.len());
        if result.has_more() {
            debug!("More results available; only the first page is used");
        }

        let delivery = match self.notifier.send_digest(&result.cards).await {
            Ok(DigestOutcome::Skipped) => DeliveryStatus::Skipped,
            Ok(DigestOutcome::Sent { receipt, .. }) => DeliveryStatus::Sent {
                status: receipt.status,
            },
            Err(e) => {
                error!("Failed to deliver digest: {}", e);
                DeliveryStatus::Failed(e.to_string())
            }
        };

        Ok(RunReport {
            geo_path,
            token_origin,
            geo,
            cards_found: result.len(),
            has_more: result.has_more(),
            delivery,
            elapsed: start.elapsed(),
        })
    }

    async fn resolve_coordinate(&self) -> Result<(GeoCoordinate, GeoPath), RunError> {
        match self.components.geo_cache.load().await {
            Ok(Some(geo)) => {
                debug!("Using cached coordinate ({}, {})", geo.lat, geo.lng);
                return Ok((geo, GeoPath::CacheHit));
            }
            Ok(None) => debug!("No cached coordinate"),
            Err(e) => warn!("Ignoring unreadable geo-cache: {}", e),
        }

        let geo = self
            .components
            .geocoder
            .geocode(&self.postal_code)
            .await?;
        info!(
            "Geocoded '{}' to ({}, {}) via {}",
            self.postal_code,
            geo.lat,
            geo.lng,
            self.components.geocoder.id()
        );

        if let Err(e) = self.components.geo_cache.save(&geo).await {
            warn!("Failed to write geo-cache: {}", e);
        }

        Ok((geo, GeoPath::CacheMiss))
    }
}

#[cfg(test)]
#[path = "runner_tests.rs"]
mod tests;
