//! Functional value types: optional values and ordered sequences.
//!
//! Two small, composable abstractions:
//!
//! - [`Optional`]: a value that is explicitly some or none, replacing bare
//!   nullable values.
//! - [`Sequence`]: an immutable ordered collection with positional access
//!   and functional transformations.
//!
//! Both are plain values: transformations derive new instances and never
//! mutate the receiver, so sharing a sequence or an optional value is
//! always safe.
//!
//! ```
//! use sequin::{sequence, Optional, Sequence};
//!
//! let numbers = sequence![1, 2, 3, 4];
//! let even = numbers.filter(|n: &i64| n % 2 == 0);
//! assert_eq!(even.to_vec(), vec![2, 4]);
//! assert_eq!(numbers.len(), 4);
//!
//! assert_eq!(numbers.head_option(), Optional::some(1));
//! assert_eq!(Sequence::<i64>::empty().head_option(), Optional::none());
//! ```
//!
//! Positional accessors fail fast when the position does not exist; the
//! `*_option` counterparts report absence as a value instead:
//!
//! ```
//! use sequin::{Sequence, SequenceError};
//!
//! let empty = Sequence::<i64>::empty();
//! assert!(matches!(
//!     empty.head(),
//!     Err(SequenceError::IndexOutOfRange { .. })
//! ));
//! assert_eq!(empty.head_option().or_some(0), 0);
//! ```
//!
//! Caller-supplied behavior goes through two single-method contracts,
//! [`Transform`] and [`Predicate`], satisfied by closures or by explicit
//! implementor types.

pub use sequin_optional::{Error as OptionalError, Optional};
pub use sequin_sequence::{
    sequence, Error as SequenceError, IntoIter, Iter, Predicate, Sequence, Transform,
};
