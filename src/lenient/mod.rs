//! Lenient validation of batches.
//!
//! A batch flows through two pieces:
//!
//! - [`Lenient`] wraps a per-item [`ItemSchema`](crate::ItemSchema) so that a
//!   data failure becomes a captured [`Outcome::Failure`] instead of aborting
//!   the batch. It does not know where the item sits in the input.
//! - [`LenientCollection`] consumes the outcomes in one pass, assigns the
//!   original index of every failure and can rebuild the input-ordered view
//!   with [`LenientCollection::with_errors`].
//!
//! [`validate_collection`] and [`BatchValidator`] run both over a slice.
//!
//! # Examples
//!
//! ```
//! use lenient_rail::{schema_fn, validate_collection, ValidationError};
//!
//! let trimmed = schema_fn(|raw: &&str| {
//!     let value = raw.trim();
//!     if value.is_empty() {
//!         Err(ValidationError::new("string_too_short", "String should not be blank"))
//!     } else {
//!         Ok(value.to_owned())
//!     }
//! });
//!
//! let batch = validate_collection(&[" a ", "  ", "b"], &trimmed).unwrap();
//! assert_eq!(batch.successes(), &["a".to_string(), "b".to_string()]);
//!
//! let merged = batch.with_errors();
//! assert_eq!(merged.len(), 3);
//! assert!(merged[1].is_err());
//! ```

pub mod collection;
pub mod iter;
pub mod outcome;
pub mod pipeline;
pub mod wrapper;

pub use collection::LenientCollection;
pub use iter::{ErrorEntries, IndexedError, IntoWithErrors, WithErrors};
pub use outcome::Outcome;
pub use pipeline::{
    validate_collection, BatchValidator, CollectionFor, Isolation, DEFAULT_MAX_ITEMS,
};
pub use wrapper::{capture, CapturedOutcome, Lenient};
