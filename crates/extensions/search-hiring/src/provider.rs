//! Hiring job search implementation.

use std::time::Duration;

use async_trait::async_trait;
use chrono::NaiveDate;
use tracing::{debug, warn};

use hirewatch_protocols::error::SearchError;
use hirewatch_protocols::provider::JobSearch;
use hirewatch_protocols::types::{GeoCoordinate, JobQueryResult, SessionToken};

use crate::api::{
    DateFilter, DateRange, Filter, GraphQlRequest, GraphQlResponse, SearchJobRequest, Variables,
    FIRST_DAY_FILTER, PRIVATE_SCHEDULE_FILTER,
};
use crate::query::{OPERATION_NAME, SEARCH_JOB_CARDS_QUERY};

const DEFAULT_API_URL: &str =
    "https://e5mquma77feepi2bdn4d6h3mpu.appsync-api.us-east-1.amazonaws.com/graphql";
const DEFAULT_LOCALE: &str = "en-US";
const DEFAULT_COUNTRY: &str = "United States";
const DEFAULT_PAGE_SIZE: u32 = 100;
const DEFAULT_TIMEOUT_SECS: u64 = 5;

/// Queries job cards near a coordinate.
pub struct HiringJobSearch {
    api_url: String,
    locale: String,
    country: String,
    page_size: u32,
    timeout_secs: u64,
    client: reqwest::Client,
}

impl HiringJobSearch {
    pub fn new() -> Self {
        Self::with_url(DEFAULT_API_URL.to_string())
    }

    /// Create client against a custom endpoint.
    pub fn with_url(api_url: String) -> Self {
        Self {
            api_url,
            locale: DEFAULT_LOCALE.to_string(),
            country: DEFAULT_COUNTRY.to_string(),
            page_size: DEFAULT_PAGE_SIZE,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            client: reqwest::Client::new(),
        }
    }

    pub fn with_locale(mut self, locale: impl Into<String>, country: impl Into<String>) -> Self {
        self.locale = locale.into();
        self.country = country.into();
        self
    }

    pub fn with_page_size(mut self, page_size: u32) -> Self {
        self.page_size = page_size;
        self
    }

    pub fn with_timeout(mut self, timeout_secs: u64) -> Self {
        self.timeout_secs = timeout_secs;
        self
    }

    fn build_request<'a>(&'a self, geo: &'a GeoCoordinate, as_of: NaiveDate) -> GraphQlRequest<'a> {
        GraphQlRequest {
            operation_name: OPERATION_NAME,
            query: SEARCH_JOB_CARDS_QUERY,
            variables: Variables {
                search_job_request: SearchJobRequest {
                    locale: &self.locale,
                    country: &self.country,
                    key_words: "",
                    equal_filters: Vec::new(),
                    contain_filters: vec![Filter {
                        key: PRIVATE_SCHEDULE_FILTER.to_string(),
                        val: vec!["false".to_string()],
                    }],
                    geo_query_clause: geo,
                    date_filters: vec![DateFilter {
                        key: FIRST_DAY_FILTER.to_string(),
                        range: DateRange {
                            start_date: as_of.format("%Y-%m-%d").to_string(),
                        },
                    }],
                    sorters: Vec::new(),
                    page_size: self.page_size,
                    consolidate_schedule: true,
                },
            },
        }
    }

    fn auth_header(token: &SessionToken) -> String {
        format!("Bearer Status|unauthenticated|Session|{}", token.as_str())
    }

    fn map_send_error(&self, e: reqwest::Error) -> SearchError {
        if e.is_timeout() {
            SearchError::Timeout(self.timeout_secs)
        } else {
            SearchError::Network(e.to_string())
        }
    }

    fn extract_result(&self, response: GraphQlResponse) -> Result<JobQueryResult, SearchError> {
        let result = response
            .data
            .and_then(|d| d.search_job_cards_by_location);

        let mut result = match result {
            Some(result) => {
                if !response.errors.is_empty() {
                    warn!(
                        "Search returned data with {} GraphQL error(s)",
                        response.errors.len()
                    );
                }
                result
            }
            None if !response.errors.is_empty() => {
                let messages: Vec<_> = response.errors.into_iter().map(|e| e.message).collect();
                return Err(SearchError::GraphQl(messages.join("; ")));
            }
            None => {
                return Err(SearchError::MalformedBody(
                    "missing searchJobCardsByLocation".to_string(),
                ));
            }
        };

        let limit = self.page_size as usize;
        if result.cards.len() > limit {
            debug!("Truncating {} cards to page size {}", result.cards.len(), limit);
            result.cards.truncate(limit);
        }

        Ok(result)
    }
}

impl Default for HiringJobSearch {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl JobSearch for HiringJobSearch {
    fn id(&self) -> &str {
        "hiring-graphql"
    }

    async fn search_jobs(
        &self,
        geo: &GeoCoordinate,
        as_of: NaiveDate,
        token: &SessionToken,
    ) -> Result<JobQueryResult, SearchError> {
        let request = self.build_request(geo, as_of);

        debug!(
            "Searching jobs near ({}, {}) within {} {} from {}",
            geo.lat, geo.lng, geo.distance, geo.unit, as_of
        );

        let response = self
            .client
            .post(&self.api_url)
            .header("Content-Type", "application/json")
            .header("Authorization", Self::auth_header(token))
            .timeout(Duration::from_secs(self.timeout_secs))
            .json(&request)
            .send()
            .await
            .map_err(|e| self.map_send_error(e))?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            return Err(SearchError::Api {
                status: status.as_u16(),
                message: text,
            });
        }

        let body = response.text().await.map_err(|e| self.map_send_error(e))?;
        let parsed: GraphQlResponse =
            serde_json::from_str(&body).map_err(|e| SearchError::MalformedBody(e.to_string()))?;

        self.extract_result(parsed)
    }
}

#[cfg(test)]
#[path = "provider_tests.rs"]
mod tests;
