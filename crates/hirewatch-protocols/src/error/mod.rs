//! Error types for the hirewatch protocol layer.

mod geocode;
mod notify;
mod search;
mod store;
mod token;

pub use geocode::*;
pub use notify::*;
pub use search::*;
pub use store::*;
pub use token::*;
