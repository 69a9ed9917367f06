//! Ready-made schemas.
//!
//! [`Untyped`] and [`Opaque`] describe an unknown element type, which makes a
//! lenient collection validate the sequence as a whole. The `json` feature
//! adds coercing schemas over `serde_json::Value` in [`json`].

use crate::traits::{ElementType, ItemSchema};
use crate::types::ValidationError;

#[cfg(feature = "json")]
pub mod json;

/// Accepts every item unchanged; the element type is unknown.
///
/// # Examples
///
/// ```
/// use lenient_rail::schema::Untyped;
/// use lenient_rail::validate_collection;
///
/// let batch = validate_collection(&["a", "b"], &Untyped).unwrap();
/// assert_eq!(batch.successes(), &["a", "b"]);
/// assert!(batch.is_complete());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Untyped;

impl<Raw: Clone> ItemSchema<Raw> for Untyped {
    type Output = Raw;
    type Error = ValidationError;

    #[inline]
    fn validate_one(&self, raw: &Raw) -> Result<Raw, ValidationError> {
        Ok(raw.clone())
    }

    #[inline]
    fn element_type(&self) -> ElementType {
        ElementType::Opaque
    }
}

/// Runs the inner schema but reports an opaque element type, so batches are
/// validated as a whole and the first failure aborts them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Opaque<S>(pub S);

impl<Raw, S> ItemSchema<Raw> for Opaque<S>
where
    Raw: ?Sized,
    S: ItemSchema<Raw>,
{
    type Output = S::Output;
    type Error = S::Error;

    #[inline]
    fn validate_one(&self, raw: &Raw) -> Result<S::Output, S::Error> {
        self.0.validate_one(raw)
    }

    #[inline]
    fn element_type(&self) -> ElementType {
        ElementType::Opaque
    }
}
