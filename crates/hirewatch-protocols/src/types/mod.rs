//! Domain types.

mod digest;
mod geo;
mod job;
mod token;

pub use digest::{DeliveryReceipt, EmailDigest};
pub use geo::{GeoCoordinate, DEFAULT_DISTANCE_UNIT, DEFAULT_SEARCH_RADIUS};
pub use job::{JobCard, JobQueryResult};
pub use token::SessionToken;
