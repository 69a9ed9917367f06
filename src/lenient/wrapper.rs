//! Item validator wrapper: turns a data failure into a captured [`Outcome`].

use crate::lenient::Outcome;
use crate::traits::{Capture, ItemSchema};

/// Outcome produced by wrapping a schema's result.
pub type CapturedOutcome<T, E> = Outcome<T, <E as Capture>::Captured>;

/// Converts a validator result into an outcome, capturing data failures.
///
/// Errors that [`Capture`] refuses are handed back as `Err` and must abort the
/// batch.
///
/// # Examples
///
/// ```
/// use lenient_rail::{capture, Outcome, SchemaError, ValidationError};
///
/// let data: Result<i64, SchemaError> = Err(ValidationError::new("int_type", "not an int").into());
/// assert!(matches!(capture(data), Ok(Outcome::Failure(_))));
///
/// let broken: Result<i64, SchemaError> = Err(SchemaError::misconfigured("IntRange", "min > max"));
/// assert!(capture(broken).is_err());
/// ```
#[inline]
pub fn capture<T, E>(result: Result<T, E>) -> Result<CapturedOutcome<T, E>, E>
where
    E: Capture,
{
    match result {
        Ok(value) => Ok(Outcome::Success(value)),
        Err(error) => error.capture().map(Outcome::Failure),
    }
}

/// Wraps an [`ItemSchema`] so one bad item does not abort a batch.
///
/// The wrapper makes a single validation attempt per item and knows nothing
/// about positions; see [`LenientCollection`](crate::LenientCollection) for
/// index bookkeeping.
///
/// # Examples
///
/// ```
/// use lenient_rail::{schema_fn, Lenient, Outcome, ValidationError};
///
/// let lenient = Lenient::new(schema_fn(|raw: &str| {
///     raw.parse::<i32>().map_err(|_| ValidationError::new("int_parsing", "not an int"))
/// }));
///
/// assert_eq!(lenient.validate("4"), Ok(Outcome::Success(4)));
/// assert!(lenient.validate("four").unwrap().is_failure());
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct Lenient<S> {
    schema: S,
}

impl<S> Lenient<S> {
    #[inline]
    pub const fn new(schema: S) -> Self {
        Self { schema }
    }

    #[inline]
    pub const fn schema(&self) -> &S {
        &self.schema
    }

    #[inline]
    pub fn into_inner(self) -> S {
        self.schema
    }

    /// Validates one item; `Err` only for failures the schema does not capture.
    #[inline]
    pub fn validate<Raw>(
        &self,
        raw: &Raw,
    ) -> Result<CapturedOutcome<S::Output, S::Error>, S::Error>
    where
        Raw: ?Sized,
        S: ItemSchema<Raw>,
    {
        capture(self.schema.validate_one(raw))
    }
}
