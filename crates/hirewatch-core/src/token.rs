//! Session token policy.

use std::sync::Arc;

use chrono::NaiveDate;
use tracing::{debug, info, warn};

use hirewatch_config::{AuthConfig, TokenPolicy};
use hirewatch_protocols::error::TokenError;
use hirewatch_protocols::provider::TokenSource;
use hirewatch_protocols::types::SessionToken;
use hirewatch_store::{RunState, RunStateStore};

/// Where the token of a run came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenOrigin {
    /// Configured token whose last-run date is today.
    Configured,
    Fetched,
    /// Stored earlier today and reused under the daily policy.
    Reused,
}

/// Decides whether a run fetches a fresh token.
///
/// Under `always` every run fetches. Under `daily` a token is reused only
/// while its date is today: first the stored run state, then the configured
/// token/date pair. Anything older is refreshed.
pub struct TokenManager {
    source: Arc<dyn TokenSource>,
    state: Arc<dyn RunStateStore>,
    policy: TokenPolicy,
    seed: RunState,
}

impl TokenManager {
    pub fn new(
        source: Arc<dyn TokenSource>,
        state: Arc<dyn RunStateStore>,
        policy: TokenPolicy,
    ) -> Self {
        Self {
            source,
            state,
            policy,
            seed: RunState::default(),
        }
    }

    /// Apply the `[auth]` section: policy plus the configured token and
    /// last-run date.
    pub fn from_config(
        source: Arc<dyn TokenSource>,
        state: Arc<dyn RunStateStore>,
        config: &AuthConfig,
    ) -> Self {
        Self::new(source, state, config.token_policy).with_seed(RunState {
            last_run_date: config.last_run_date,
            session_token: config.token.clone().filter(|t| !t.is_empty()),
        })
    }

    /// Token/date pair to fall back on when the store holds nothing usable.
    pub fn with_seed(mut self, seed: RunState) -> Self {
        self.seed = seed;
        self
    }

    pub fn policy(&self) -> TokenPolicy {
        self.policy
    }

    pub async fn obtain(&self, today: NaiveDate) -> Result<(SessionToken, TokenOrigin), TokenError> {
        if self.policy == TokenPolicy::Daily {
            let stored = self.load_state().await;
            if let Some(token) = stored.token_for(today) {
                info!("Reusing session token from {}", today);
                return Ok((token, TokenOrigin::Reused));
            }
            if let Some(token) = self.seed.token_for(today) {
                info!("Using configured session token dated {}", today);
                return Ok((token, TokenOrigin::Configured));
            }
            debug!(
                "No token dated {} (stored {:?}, configured {:?}), fetching",
                today, stored.last_run_date, self.seed.last_run_date
            );
        } else if self.seed.session_token.is_some() {
            debug!("Ignoring configured session token under the always policy");
        }

        let token = self.source.fetch_session_token().await?;
        info!("Fetched session token from {}", self.source.id());

        if let Err(e) = self.state.save(&RunState::new(today, &token)).await {
            warn!("Failed to save run state: {}", e);
        }

        Ok((token, TokenOrigin::Fetched))
    }

    async fn load_state(&self) -> RunState {
        match self.state.load().await {
            Ok(state) => state,
            Err(e) => {
                warn!("Failed to load run state, starting fresh: {}", e);
                RunState::default()
            }
        }
    }
}

#[cfg(test)]
#[path = "token_tests.rs"]
mod tests;
