//! # hirewatch Config
//!
//! Configuration for a hirewatch run: an optional TOML file, overlaid by
//! environment variables (optionally loaded from a `.env` file).

mod env;
mod error;
mod loader;
mod schema;
mod validator;

pub use env::*;
pub use error::ConfigError;
pub use loader::ConfigLoader;
pub use schema::*;
pub use validator::{ConfigValidator, ValidationError, ValidationResult, ValidationWarning};
