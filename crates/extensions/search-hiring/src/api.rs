//! GraphQL request and response types.

use serde::{Deserialize, Serialize};

use hirewatch_protocols::types::{GeoCoordinate, JobQueryResult};

/// Filter key excluding private schedules.
pub const PRIVATE_SCHEDULE_FILTER: &str = "isPrivateSchedule";

/// Date filter key for the first day on site.
pub const FIRST_DAY_FILTER: &str = "firstDayOnSite";

/// GraphQL POST body.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GraphQlRequest<'a> {
    pub operation_name: &'a str,
    pub variables: Variables<'a>,
    pub query: &'a str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Variables<'a> {
    pub search_job_request: SearchJobRequest<'a>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchJobRequest<'a> {
    pub locale: &'a str,
    pub country: &'a str,
    pub key_words: &'a str,
    pub equal_filters: Vec<Filter>,
    pub contain_filters: Vec<Filter>,
    pub geo_query_clause: &'a GeoCoordinate,
    pub date_filters: Vec<DateFilter>,
    pub sorters: Vec<serde_json::Value>,
    pub page_size: u32,
    pub consolidate_schedule: bool,
}

/// Key plus accepted values.
#[derive(Debug, Serialize)]
pub struct Filter {
    pub key: String,
    pub val: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct DateFilter {
    pub key: String,
    pub range: DateRange,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DateRange {
    /// `YYYY-MM-DD`.
    pub start_date: String,
}

/// GraphQL response envelope.
#[derive(Debug, Deserialize)]
pub struct GraphQlResponse {
    #[serde(default)]
    pub data: Option<SearchData>,
    #[serde(default)]
    pub errors: Vec<GraphQlError>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchData {
    #[serde(default)]
    pub search_job_cards_by_location: Option<JobQueryResult>,
}

#[derive(Debug, Deserialize)]
pub struct GraphQlError {
    #[serde(default)]
    pub message: String,
}
