//! Session token provider for the hiring API.

mod api;
mod provider;

pub use provider::HiringAuthProvider;
