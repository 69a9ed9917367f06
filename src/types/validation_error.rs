//! Structured payload describing why one item failed validation.
//!
//! A [`ValidationError`] carries a machine-readable kind tag, a human-readable
//! message, an optional rendering of the offending input and a location path
//! inside the item. It is the error type captured by
//! [`LenientCollection`](crate::LenientCollection) by default.

use crate::types::ErrorVec;
use core::fmt::{self, Display};
use std::borrow::Cow;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Well-known values for [`ValidationError::kind`].
///
/// The tags follow the naming used by the built-in schemas; custom schemas are
/// free to use their own.
pub mod kinds {
    pub const INT_TYPE: &str = "int_type";
    pub const INT_PARSING: &str = "int_parsing";
    pub const INT_FROM_FLOAT: &str = "int_from_float";
    pub const INT_PARSING_SIZE: &str = "int_parsing_size";
    pub const FLOAT_TYPE: &str = "float_type";
    pub const FLOAT_PARSING: &str = "float_parsing";
    pub const STRING_TYPE: &str = "string_type";
    pub const BOOL_TYPE: &str = "bool_type";
    pub const BOOL_PARSING: &str = "bool_parsing";
    pub const GREATER_THAN_EQUAL: &str = "greater_than_equal";
    pub const LESS_THAN_EQUAL: &str = "less_than_equal";
    pub const MISSING: &str = "missing";
    pub const EXTRA_FORBIDDEN: &str = "extra_forbidden";
    pub const DESERIALIZE: &str = "deserialize";
    pub const VALUE_ERROR: &str = "value_error";
}

/// One step of the path from the item root to the failing value.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum LocSegment {
    Field(Cow<'static, str>),
    Index(usize),
}

impl Display for LocSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Field(name) => f.write_str(name),
            Self::Index(index) => write!(f, "{index}"),
        }
    }
}

impl From<&'static str> for LocSegment {
    #[inline]
    fn from(name: &'static str) -> Self {
        Self::Field(Cow::Borrowed(name))
    }
}

impl From<String> for LocSegment {
    #[inline]
    fn from(name: String) -> Self {
        Self::Field(Cow::Owned(name))
    }
}

impl From<usize> for LocSegment {
    #[inline]
    fn from(index: usize) -> Self {
        Self::Index(index)
    }
}

/// Rendering of the input value that failed validation.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct InputValue {
    /// Display form of the offending value.
    pub value: String,
    /// Name of the value's type as seen by the schema (`str`, `int`, ...).
    pub type_name: Cow<'static, str>,
}

/// Failure payload produced by a per-item validator.
///
/// # Examples
///
/// ```
/// use lenient_rail::{kinds, ValidationError};
///
/// let err = ValidationError::new(kinds::INT_PARSING, "Input should be a valid integer")
///     .with_input("'c'", "str")
///     .at_index(2)
///     .at("events");
///
/// assert_eq!(err.kind(), "int_parsing");
/// assert_eq!(err.loc_path(), "events.2");
/// assert_eq!(
///     err.to_string(),
///     "events.2: Input should be a valid integer [type=int_parsing, input_value='c', input_type=str]"
/// );
/// ```
#[must_use]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ValidationError {
    pub(crate) kind: Cow<'static, str>,
    pub(crate) message: String,
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub(crate) input: Option<InputValue>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub(crate) loc: ErrorVec<LocSegment>,
}

impl ValidationError {
    /// Creates an error with a kind tag and message, no input and an empty location.
    #[inline]
    pub fn new<K, M>(kind: K, message: M) -> Self
    where
        K: Into<Cow<'static, str>>,
        M: Into<String>,
    {
        Self { kind: kind.into(), message: message.into(), input: None, loc: ErrorVec::new() }
    }

    /// Attaches the offending input and its type name.
    #[inline]
    pub fn with_input<V, N>(mut self, value: V, type_name: N) -> Self
    where
        V: Display,
        N: Into<Cow<'static, str>>,
    {
        self.input = Some(InputValue { value: value.to_string(), type_name: type_name.into() });
        self
    }

    /// Prepends a location segment.
    ///
    /// Schemas that nest other schemas call this on the way out, so the
    /// outermost segment ends up first.
    #[inline]
    pub fn at<S: Into<LocSegment>>(mut self, segment: S) -> Self {
        self.loc.insert(0, segment.into());
        self
    }

    /// Prepends an index segment.
    #[inline]
    pub fn at_index(self, index: usize) -> Self {
        self.at(LocSegment::Index(index))
    }

    #[inline]
    pub fn kind(&self) -> &str {
        &self.kind
    }

    #[inline]
    pub fn message(&self) -> &str {
        &self.message
    }

    #[inline]
    pub fn input(&self) -> Option<&InputValue> {
        self.input.as_ref()
    }

    /// Location segments, outermost first.
    #[inline]
    pub fn loc(&self) -> &[LocSegment] {
        &self.loc
    }

    /// Location rendered as a dotted path, empty when the item root failed.
    pub fn loc_path(&self) -> String {
        let mut path = String::new();
        for (i, segment) in self.loc.iter().enumerate() {
            if i > 0 {
                path.push('.');
            }
            path.push_str(&segment.to_string());
        }
        path
    }

    /// Writes `message [type=..., input_value=..., input_type=...]` without the location.
    pub(crate) fn fmt_detail(&self, f: &mut dyn fmt::Write, show_input: bool) -> fmt::Result {
        write!(f, "{} [type={}", self.message, self.kind)?;
        if show_input {
            if let Some(input) = &self.input {
                write!(f, ", input_value={}, input_type={}", input.value, input.type_name)?;
            }
        }
        f.write_char(']')
    }
}

impl Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.loc.is_empty() {
            write!(f, "{}: ", self.loc_path())?;
        }
        self.fmt_detail(f, true)
    }
}

impl std::error::Error for ValidationError {}
