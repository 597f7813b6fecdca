//! An optional value that may be none (no value) or some (a value).
//!
//! [`Optional`] is a replacement for passing bare nullable values around,
//! with better type checks: absence has to be handled explicitly, or routed
//! through a default with [`Optional::or_some`].

mod error;
mod optional;

pub use error::{Error, Result};
pub use optional::Optional;
