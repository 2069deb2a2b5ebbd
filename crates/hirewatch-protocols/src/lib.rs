//! # hirewatch Protocols
//!
//! Domain types and provider traits shared by every hirewatch crate.
//! Contains only definitions - the HTTP clients live in the extension crates.
//!
//! ## Core Traits
//!
//! - [`TokenSource`] - Fetches the unauthenticated session token
//! - [`Geocoder`] - Resolves a postal code to a search coordinate
//! - [`JobSearch`] - Queries the job-card listing endpoint
//! - [`Mailer`] - Delivers an assembled email digest

pub mod error;
pub mod provider;
pub mod types;

pub use error::{GeocodeError, NotifyError, SearchError, StoreError, TokenError};
pub use provider::{Geocoder, JobSearch, Mailer, TokenSource};
pub use types::*;
