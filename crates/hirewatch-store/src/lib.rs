//! # hirewatch Store
//!
//! Small on-disk records that survive between runs:
//!
//! - the geo-cache, written once when a postal code is first geocoded
//! - the run state (last-run date and session token) used by the daily
//!   token policy

pub mod geo_cache;
pub mod run_state;

pub use geo_cache::{FileGeoCache, GeoCache, MemoryGeoCache};
pub use run_state::{FileRunStateStore, MemoryRunStateStore, RunState, RunStateStore};
