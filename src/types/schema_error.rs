use crate::traits::Capture;
use crate::types::ValidationError;
use core::fmt::{self, Display};
use std::borrow::Cow;

/// Error returned by the built-in schemas.
///
/// Only [`SchemaError::Invalid`] describes a problem with the data; it is the
/// variant a lenient collection captures. The other variants describe a broken
/// schema or an internal fault and abort the whole batch.
///
/// # Examples
///
/// ```
/// use lenient_rail::{Capture, SchemaError, ValidationError};
///
/// let data = SchemaError::from(ValidationError::new("int_type", "Input should be a valid integer"));
/// assert!(data.capture().is_ok());
///
/// let broken = SchemaError::misconfigured("IntRange", "min is greater than max");
/// assert!(broken.capture().is_err());
/// ```
#[derive(Debug)]
pub enum SchemaError {
    Invalid(ValidationError),
    Misconfigured { schema: Cow<'static, str>, reason: String },
    Internal(Box<dyn std::error::Error + Send + Sync>),
}

impl SchemaError {
    #[inline]
    pub fn misconfigured<S, R>(schema: S, reason: R) -> Self
    where
        S: Into<Cow<'static, str>>,
        R: Into<String>,
    {
        Self::Misconfigured { schema: schema.into(), reason: reason.into() }
    }

    #[inline]
    pub fn internal<E>(error: E) -> Self
    where
        E: Into<Box<dyn std::error::Error + Send + Sync>>,
    {
        Self::Internal(error.into())
    }

    /// Returns `true` for data problems.
    #[inline]
    pub fn is_invalid(&self) -> bool {
        matches!(self, Self::Invalid(_))
    }
}

impl Display for SchemaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Invalid(error) => Display::fmt(error, f),
            Self::Misconfigured { schema, reason } => {
                write!(f, "schema `{schema}` is misconfigured: {reason}")
            }
            Self::Internal(error) => write!(f, "internal validator fault: {error}"),
        }
    }
}

impl std::error::Error for SchemaError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Invalid(error) => Some(error),
            Self::Misconfigured { .. } => None,
            Self::Internal(error) => Some(error.as_ref()),
        }
    }
}

impl From<ValidationError> for SchemaError {
    #[inline]
    fn from(error: ValidationError) -> Self {
        Self::Invalid(error)
    }
}

impl Capture for SchemaError {
    type Captured = ValidationError;

    #[inline]
    fn capture(self) -> Result<ValidationError, Self> {
        match self {
            Self::Invalid(error) => Ok(error),
            other => Err(other),
        }
    }
}
