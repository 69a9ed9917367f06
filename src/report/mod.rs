//! Summaries of a validated batch for callers that answer with the failures.
//!
//! [`BatchReport`] is the body an ingestion endpoint returns when some items
//! were rejected: counts plus one entry per failure with its original index.
//! With the `serde` feature it serializes to
//!
//! ```json
//! {
//!   "original_len": 3,
//!   "accepted": 2,
//!   "rejected": 1,
//!   "errors": [
//!     { "index": 2, "kind": "int_parsing", "message": "...", "input": { ... }, "loc": [] }
//!   ]
//! }
//! ```

use crate::lenient::LenientCollection;
use crate::types::ValidationError;
use core::fmt::{self, Display};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

pub mod format;

pub use format::ReportFormat;

/// One rejected item.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorReport {
    /// Position of the item in the submitted batch.
    pub index: usize,
    #[cfg_attr(feature = "serde", serde(flatten))]
    pub error: ValidationError,
}

/// Counts and failures of one batch.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct BatchReport {
    pub original_len: usize,
    pub accepted: usize,
    pub rejected: usize,
    pub errors: Vec<ErrorReport>,
}

impl BatchReport {
    #[must_use]
    #[inline]
    pub fn is_clean(&self) -> bool {
        self.errors.is_empty()
    }
}

impl Display for BatchReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let format = if f.alternate() { ReportFormat::default() } else { ReportFormat::compact() };
        f.write_str(&format.render_report(self))
    }
}

impl<T> LenientCollection<T, ValidationError> {
    /// Builds the report of this batch.
    ///
    /// # Examples
    ///
    /// ```
    /// use lenient_rail::{LenientCollection, ValidationError};
    ///
    /// let batch: LenientCollection<i32> = vec![
    ///     Ok(1),
    ///     Err(ValidationError::new("int_parsing", "Input should be a valid integer")),
    /// ]
    /// .into_iter()
    /// .collect();
    ///
    /// let report = batch.report();
    /// assert_eq!((report.original_len, report.accepted, report.rejected), (2, 1, 1));
    /// assert_eq!(report.errors[0].index, 1);
    /// assert_eq!(report.to_string(), "1 validation error: 1: Input should be a valid integer [type=int_parsing]");
    /// ```
    pub fn report(&self) -> BatchReport {
        BatchReport {
            original_len: self.original_len(),
            accepted: self.len(),
            rejected: self.errors().len(),
            errors: self
                .error_entries()
                .map(|entry| ErrorReport { index: entry.original_index, error: entry.error.clone() })
                .collect(),
        }
    }
}
