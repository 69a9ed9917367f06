//! Classification of validator errors into captured and propagated failures.
//!
//! A lenient collection tolerates *data* problems only. Everything else a
//! validator can report (a broken schema, an internal fault) must abort the
//! batch. [`Capture`] is the seam where a validator's error type makes that
//! call.
//!
//! # Examples
//!
//! ```
//! use lenient_rail::traits::Capture;
//!
//! #[derive(Debug, PartialEq)]
//! enum RecordError {
//!     BadField(String),
//!     StoreUnavailable,
//! }
//!
//! impl Capture for RecordError {
//!     type Captured = String;
//!
//!     fn capture(self) -> Result<String, Self> {
//!         match self {
//!             RecordError::BadField(field) => Ok(field),
//!             other => Err(other),
//!         }
//!     }
//! }
//!
//! assert_eq!(RecordError::BadField("timestamp".into()).capture(), Ok("timestamp".to_string()));
//! assert_eq!(RecordError::StoreUnavailable.capture(), Err(RecordError::StoreUnavailable));
//! ```

use crate::types::ValidationError;

/// Splits an error into the captured payload or the error to propagate.
pub trait Capture: Sized {
    /// Payload stored in the collection when the error is captured.
    type Captured;

    /// Returns `Ok(payload)` for a data problem, or hands `self` back as `Err`
    /// when the failure must propagate unchanged.
    fn capture(self) -> Result<Self::Captured, Self>;
}

/// A bare [`ValidationError`] is always a data problem.
impl Capture for ValidationError {
    type Captured = Self;

    #[inline]
    fn capture(self) -> Result<Self, Self> {
        Ok(self)
    }
}
