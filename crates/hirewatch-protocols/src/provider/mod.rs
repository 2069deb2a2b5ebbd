//! Provider protocol definitions.
//!
//! Each external service the run talks to sits behind one of these traits,
//! so the run controller can be driven by fakes in tests.

mod traits;

pub use traits::*;
