//! Builds concrete providers and stores from the configuration.

use std::sync::Arc;

use hirewatch_auth_hiring::HiringAuthProvider;
use hirewatch_config::Config;
use hirewatch_core::{RunComponents, RunSettings, Runner};
use hirewatch_geocoder_google::GoogleGeocoder;
use hirewatch_notify_sendgrid::SendGridMailer;
use hirewatch_search_hiring::HiringJobSearch;
use hirewatch_store::{FileGeoCache, FileRunStateStore};

/// Wire the HTTP clients and file stores for a run.
pub(crate) fn build_components(config: &Config) -> RunComponents {
    let token_source = HiringAuthProvider::with_url(config.auth.endpoint.clone())
        .with_country_code(config.auth.country_code.clone())
        .with_timeout(config.auth.timeout_secs);

    let geocoder = GoogleGeocoder::with_url(
        config.geocoder.api_key.clone().unwrap_or_default(),
        config.geocoder.endpoint.clone(),
    )
    .with_radius(config.search.unit.clone(), config.search.radius)
    .with_timeout(config.geocoder.timeout_secs);

    let job_search = HiringJobSearch::with_url(config.jobs.endpoint.clone())
        .with_locale(config.search.locale.clone(), config.search.country.clone())
        .with_page_size(config.search.page_size)
        .with_timeout(config.jobs.timeout_secs);

    let mailer = SendGridMailer::with_url(
        config.email.api_key.clone().unwrap_or_default(),
        config.email.from_address.clone(),
        config.email.endpoint.clone(),
    )
    .with_from_name(config.email.from_name.clone())
    .with_timeout(config.email.timeout_secs);

    RunComponents {
        token_source: Arc::new(token_source),
        geocoder: Arc::new(geocoder),
        job_search: Arc::new(job_search),
        mailer: Arc::new(mailer),
        geo_cache: Arc::new(FileGeoCache::new(config.storage.geo_cache_path())),
        run_state: Arc::new(FileRunStateStore::new(config.storage.state_path())),
    }
}

pub(crate) fn build_runner(config: &Config) -> Runner {
    Runner::new(build_components(config), RunSettings::from_config(config))
}
