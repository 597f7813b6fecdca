//! A sequence is an ordered list of values, supporting positional access,
//! external iteration and functional transformations.
//!
//! The sequence is a wrapper around a backing value, implemented by the
//! value module.

mod creation;
mod iter;
mod sequence_core;
mod value;

pub use iter::{IntoIter, Iter};
pub use sequence_core::Sequence;
