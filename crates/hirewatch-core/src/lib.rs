//! # hirewatch Core
//!
//! One pass of the watcher: obtain a session token, resolve the search
//! coordinate, query job cards, mail the digest.
//!
//! ## Components
//!
//! - [`Runner`] - Sequences a single run and reports what happened
//! - [`TokenManager`] - Applies the token policy (always or daily)
//! - [`DigestBuilder`] / [`Notifier`] - Turn job cards into one email

pub mod digest;
pub mod error;
pub mod notifier;
pub mod runner;
pub mod token;

#[cfg(test)]
pub(crate) mod testing;

pub use digest::DigestBuilder;
pub use error::RunError;
pub use notifier::{DigestOutcome, Notifier};
pub use runner::{DeliveryStatus, GeoPath, RunComponents, RunReport, RunSettings, Runner};
pub use token::{TokenManager, TokenOrigin};
