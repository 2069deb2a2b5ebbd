//! Job-card search against the hiring GraphQL endpoint.

mod api;
mod provider;
mod query;

pub use provider::HiringJobSearch;
pub use query::{OPERATION_NAME, SEARCH_JOB_CARDS_QUERY};
