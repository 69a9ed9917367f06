//! Lenient validation for batches of records.
//!
//! A bulk ingestion endpoint should not reject a thousand events because one
//! of them carries a malformed timestamp. This crate validates each item of a
//! batch on its own, keeps the valid ones in their original order and sets
//! the failures aside together with the position each failing item held.
//!
//! Each submodule re-exports its public surface from here, so consumers can
//! simply depend on `lenient_rail::*` or pick focused pieces as needed.
//!
//! # Examples
//!
//! ## Partitioning a batch
//!
//! ```
//! use lenient_rail::{schema_fn, validate_collection, ValidationError};
//!
//! let as_int = schema_fn(|raw: &&str| {
//!     raw.parse::<i64>().map_err(|_| {
//!         ValidationError::new("int_parsing", "unable to parse string as an integer")
//!             .with_input(format!("'{raw}'"), "str")
//!     })
//! });
//!
//! let batch = validate_collection(&["1", "2", "c"], &as_int).unwrap();
//!
//! assert_eq!(batch.successes(), &[1, 2]);
//! assert_eq!(batch.original_error_indices(), &[2]);
//!
//! let merged = batch.with_errors();
//! assert_eq!(merged[..2], [Ok(&1), Ok(&2)]);
//! assert_eq!(merged[2].unwrap_err().kind(), "int_parsing");
//! ```
//!
//! ## Data failures versus broken schemas
//!
//! ```
//! use lenient_rail::{schema_fn, validate_collection, SchemaError, ValidationError};
//!
//! let schema = schema_fn(|raw: &i32| match *raw {
//!     n if n >= 0 => Ok(n),
//!     -1 => Err(SchemaError::misconfigured("example", "sentinel hit")),
//!     _ => Err(SchemaError::from(ValidationError::new("negative", "Input should be >= 0"))),
//! });
//!
//! // Negative values are captured...
//! let batch = validate_collection(&[1, -5, 2], &schema).unwrap();
//! assert_eq!(batch.errors().len(), 1);
//!
//! // ...but a misconfigured schema aborts the batch.
//! assert!(validate_collection(&[1, -1, 2], &schema).is_err());
//! ```
//!
//! ## Reporting
//!
//! ```
//! use lenient_rail::{LenientCollection, ReportFormat, ValidationError};
//!
//! let batch: LenientCollection<u32> = vec![
//!     Ok(1),
//!     Err(ValidationError::new("int_type", "Input should be a valid integer").at("count")),
//! ]
//! .into_iter()
//! .collect();
//!
//! let text = ReportFormat::default().title("EventList").render(&batch);
//! assert!(text.starts_with("1 validation error for EventList\n1.count\n"));
//! ```

/// Shorthand macros for building validation errors
pub mod macros;
/// Convenience re-exports for quick starts
pub mod prelude;
/// Counts and failures of a validated batch
pub mod report;
/// Ready-made schemas
pub mod schema;
/// Seams between the lenient core and the validators it drives
pub mod traits;
/// Error payloads and storage aliases
pub mod types;

/// Item wrapper, partitioning collector and batch pipeline
pub mod lenient;

pub use lenient::{
    capture, validate_collection, BatchValidator, CapturedOutcome, CollectionFor, ErrorEntries,
    IndexedError, IntoWithErrors, Isolation, Lenient, LenientCollection, Outcome, WithErrors,
    DEFAULT_MAX_ITEMS,
};
pub use report::{BatchReport, ErrorReport, ReportFormat};
pub use traits::{schema_fn, Capture, ElementType, FnSchema, ItemSchema};
pub use types::{
    kinds, BatchError, ErrorVec, IndexVec, InputValue, InvariantError, LocSegment, SchemaError,
    ValidationError,
};
