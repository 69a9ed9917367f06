//! Convenience re-exports for common usage patterns.
//!
//! ```
//! use lenient_rail::prelude::*;
//!
//! let schema = schema_fn(|raw: &i32| {
//!     u8::try_from(*raw).map_err(|_| invalid!("u8_range", "{raw} does not fit in a byte"))
//! });
//!
//! let batch: LenientCollection<u8> = validate_collection(&[1, 256, 3], &schema).unwrap();
//! assert_eq!(batch.with_errors().len(), 3);
//! ```

// Macros
pub use crate::invalid;

// Core types
pub use crate::lenient::{
    validate_collection, BatchValidator, Isolation, Lenient, LenientCollection, Outcome,
};
pub use crate::types::{kinds, BatchError, SchemaError, ValidationError};

// Traits
pub use crate::traits::{schema_fn, Capture, ElementType, ItemSchema};

// Reports
pub use crate::report::{BatchReport, ReportFormat};
