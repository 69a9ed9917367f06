//! Error payloads and storage aliases.
//!
//! # Examples
//!
//! ```
//! use lenient_rail::{kinds, SchemaError, ValidationError};
//!
//! let err = ValidationError::new(kinds::STRING_TYPE, "Input should be a valid string")
//!     .with_input(3, "int");
//! assert_eq!(
//!     err.to_string(),
//!     "Input should be a valid string [type=string_type, input_value=3, input_type=int]"
//! );
//!
//! let wrapped: SchemaError = err.into();
//! assert!(wrapped.is_invalid());
//! ```
use smallvec::SmallVec;

pub mod batch_error;
pub mod schema_error;
pub mod validation_error;

pub use batch_error::*;
pub use schema_error::*;
pub use validation_error::*;

/// SmallVec-backed collection used for captured errors.
///
/// Uses inline storage for one element: most batches carry no failure or a
/// single one.
pub type ErrorVec<E> = SmallVec<[E; 1]>;

/// Original positions of captured errors, parallel to an [`ErrorVec`].
pub type IndexVec = SmallVec<[usize; 1]>;
