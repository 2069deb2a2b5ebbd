//! Call-counting fakes for the provider traits.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use chrono::NaiveDate;

use hirewatch_protocols::error::{GeocodeError, NotifyError, SearchError, StoreError, TokenError};
use hirewatch_protocols::provider::{Geocoder, JobSearch, Mailer, TokenSource};
use hirewatch_protocols::types::{
    DeliveryReceipt, EmailDigest, GeoCoordinate, JobCard, JobQueryResult, SessionToken,
};
use hirewatch_store::{GeoCache, RunState, RunStateStore};

pub struct FakeTokenSource {
    token: Option<String>,
    calls: AtomicUsize,
}

impl FakeTokenSource {
    pub fn returning(token: &str) -> Self {
        Self {
            token: Some(token.to_string()),
            calls: AtomicUsize::new(0),
        }
    }

    /// Always fails with a timeout.
    pub fn timing_out() -> Self {
        Self {
            token: None,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl TokenSource for FakeTokenSource {
    fn id(&self) -> &str {
        "fake-token"
    }

    async fn fetch_session_token(&self) -> Result<SessionToken, TokenError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match &self.token {
            Some(token) => Ok(SessionToken::new(token.clone())),
            None => Err(TokenError::Timeout(30)),
        }
    }
}

pub struct FakeGeocoder {
    result: Option<GeoCoordinate>,
    calls: AtomicUsize,
    last_postal_code: Mutex<Option<String>>,
}

impl FakeGeocoder {
    pub fn returning(geo: GeoCoordinate) -> Self {
        Self {
            result: Some(geo),
            calls: AtomicUsize::new(0),
            last_postal_code: Mutex::new(None),
        }
    }

    pub fn failing() -> Self {
        Self {
            result: None,
            calls: AtomicUsize::new(0),
            last_postal_code: Mutex::new(None),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn last_postal_code(&self) -> Option<String> {
        self.last_postal_code.lock().unwrap().clone()
    }
}

#[async_trait]
impl Geocoder for FakeGeocoder {
    fn id(&self) -> &str {
        "fake-geocoder"
    }

    async fn geocode(&self, postal_code: &str) -> Result<GeoCoordinate, GeocodeError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.last_postal_code.lock().unwrap() = Some(postal_code.to_string());
        self.result.clone().ok_or_else(|| GeocodeError::Rejected {
            status: "REQUEST_DENIED".to_string(),
            message: "invalid key".to_string(),
        })
    }
}

/// What the fake search saw on its last call.
#[derive(Debug, Clone)]
pub struct SearchCall {
    pub geo: GeoCoordinate,
    pub as_of: NaiveDate,
    pub token: String,
}

pub struct FakeJobSearch {
    cards: Option<Vec<JobCard>>,
    calls: AtomicUsize,
    last_call: Mutex<Option<SearchCall>>,
}

impl FakeJobSearch {
    pub fn returning(cards: Vec<JobCard>) -> Self {
        Self {
            cards: Some(cards),
            calls: AtomicUsize::new(0),
            last_call: Mutex::new(None),
        }
    }

    pub fn failing() -> Self {
        Self {
            cards: None,
            calls: AtomicUsize::new(0),
            last_call: Mutex::new(None),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn last_call(&self) -> Option<SearchCall> {
        self.last_call.lock().unwrap().clone()
    }
}

#[async_trait]
impl JobSearch for FakeJobSearch {
    fn id(&self) -> &str {
        "fake-search"
    }

    async fn search_jobs(
        &self,
        geo: &GeoCoordinate,
        as_of: NaiveDate,
        token: &SessionToken,
    ) -> Result<JobQueryResult, SearchError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.last_call.lock().unwrap() = Some(SearchCall {
            geo: geo.clone(),
            as_of,
            token: token.as_str().to_string(),
        });
        match &self.cards {
            Some(cards) => Ok(JobQueryResult::new(cards.clone())),
            None => Err(SearchError::Timeout(5)),
        }
    }
}

pub struct FakeMailer {
    fail_status: Option<u16>,
    calls: AtomicUsize,
    last: Mutex<Option<EmailDigest>>,
}

impl FakeMailer {
    pub fn accepting() -> Self {
        Self {
            fail_status: None,
            calls: AtomicUsize::new(0),
            last: Mutex::new(None),
        }
    }

    pub fn failing(status: u16) -> Self {
        Self {
            fail_status: Some(status),
            calls: AtomicUsize::new(0),
            last: Mutex::new(None),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn last_subject(&self) -> Option<String> {
        self.last_digest().map(|d| d.subject)
    }

    pub fn last_digest(&self) -> Option<EmailDigest> {
        self.last.lock().unwrap().clone()
    }
}

#[async_trait]
impl Mailer for FakeMailer {
    fn id(&self) -> &str {
        "fake-mailer"
    }

    async fn send(&self, digest: &EmailDigest) -> Result<DeliveryReceipt, NotifyError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.last.lock().unwrap() = Some(digest.clone());
        match self.fail_status {
            Some(status) => Err(NotifyError::Api {
                status,
                message: "rejected".to_string(),
            }),
            None => Ok(DeliveryReceipt {
                status: 202,
                message_id: Some("fake-id".to_string()),
            }),
        }
    }
}

/// Geo-cache whose writes always fail.
pub struct ReadOnlyGeoCache;

#[async_trait]
impl GeoCache for ReadOnlyGeoCache {
    async fn load(&self) -> Result<Option<GeoCoordinate>, StoreError> {
        Ok(None)
    }

    async fn save(&self, _geo: &GeoCoordinate) -> Result<(), StoreError> {
        Err(StoreError::Io(std::io::Error::new(
            std::io::ErrorKind::PermissionDenied,
            "read-only",
        )))
    }

    async fn clear(&self) -> Result<bool, StoreError> {
        Ok(false)
    }
}

/// Geo-cache holding unparseable content.
pub struct CorruptGeoCache;

#[async_trait]
impl GeoCache for CorruptGeoCache {
    async fn load(&self) -> Result<Option<GeoCoordinate>, StoreError> {
        Err(StoreError::Serialization("expected value at line 1".to_string()))
    }

    async fn save(&self, _geo: &GeoCoordinate) -> Result<(), StoreError> {
        Ok(())
    }

    async fn clear(&self) -> Result<bool, StoreError> {
        Ok(true)
    }
}

/// Run-state store whose writes always fail.
pub struct ReadOnlyRunStateStore;

#[async_trait]
impl RunStateStore for ReadOnlyRunStateStore {
    async fn load(&self) -> Result<RunState, StoreError> {
        Ok(RunState::default())
    }

    async fn save(&self, _state: &RunState) -> Result<(), StoreError> {
        Err(StoreError::Io(std::io::Error::new(
            std::io::ErrorKind::PermissionDenied,
            "read-only",
        )))
    }
}
