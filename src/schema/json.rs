//! Coercing schemas over [`serde_json::Value`] items.
//!
//! The scalar schemas are lax in the usual ingestion sense: an integer field
//! accepts `"2"` and `2.0`, a boolean field accepts `"yes"`. [`Typed`] applies
//! serde's own rules to a whole record.
//!
//! # Examples
//!
//! ```
//! use lenient_rail::schema::json::{Int, Str};
//! use lenient_rail::validate_collection;
//! use serde_json::json;
//!
//! let x = validate_collection(&[json!(1), json!("2"), json!("c")], &Int).unwrap();
//! assert_eq!(x.successes(), &[1, 2]);
//! assert_eq!(x.original_error_indices(), &[2]);
//! assert_eq!(x.errors()[0].kind(), "int_parsing");
//!
//! let y = validate_collection(&[json!("a"), json!("b"), json!(3)], &Str::coerce_numbers()).unwrap();
//! assert_eq!(y.successes(), &["a", "b", "3"]);
//! ```

use crate::lenient::{validate_collection, LenientCollection};
use crate::traits::ItemSchema;
use crate::types::{kinds, SchemaError, ValidationError};
use core::fmt;
use core::marker::PhantomData;
use serde::de::{DeserializeOwned, Error as _};
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Type name of a JSON value as reported in [`InputValue`](crate::types::InputValue).
pub fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(n) if n.is_f64() => "float",
        Value::Number(_) => "int",
        Value::String(_) => "str",
        Value::Array(_) => "list",
        Value::Object(_) => "dict",
    }
}

struct Repr<'a>(&'a Value);

impl fmt::Display for Repr<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Value::String(s) => write!(f, "'{s}'"),
            other => write!(f, "{other}"),
        }
    }
}

/// Builds a captured failure for `raw`.
pub fn invalid(kind: &'static str, message: impl Into<String>, raw: &Value) -> ValidationError {
    ValidationError::new(kind, message).with_input(Repr(raw), type_name(raw))
}

fn coerce_int(raw: &Value) -> Result<i64, ValidationError> {
    match raw {
        Value::Number(n) => {
            if let Some(value) = n.as_i64() {
                return Ok(value);
            }
            let value = n.as_f64().unwrap_or(f64::NAN);
            if value.fract() != 0.0 {
                Err(invalid(
                    kinds::INT_FROM_FLOAT,
                    "Input should be a valid integer, got a number with a fractional part",
                    raw,
                ))
            } else if value >= i64::MIN as f64 && value < i64::MAX as f64 {
                Ok(value as i64)
            } else {
                Err(invalid(
                    kinds::INT_PARSING_SIZE,
                    "Unable to parse input as an integer, exceeded maximum size",
                    raw,
                ))
            }
        }
        Value::String(s) => s.trim().parse::<i64>().map_err(|_| {
            invalid(
                kinds::INT_PARSING,
                "Input should be a valid integer, unable to parse string as an integer",
                raw,
            )
        }),
        _ => Err(invalid(kinds::INT_TYPE, "Input should be a valid integer", raw)),
    }
}

/// Lax 64-bit integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Int;

impl ItemSchema<Value> for Int {
    type Output = i64;
    type Error = SchemaError;

    fn validate_one(&self, raw: &Value) -> Result<i64, SchemaError> {
        Ok(coerce_int(raw)?)
    }
}

/// Integer with inclusive bounds.
///
/// A range whose `min` exceeds its `max` is a broken schema: validating any
/// item with it fails with [`SchemaError::Misconfigured`], which a lenient
/// collection does not capture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct IntRange {
    min: Option<i64>,
    max: Option<i64>,
}

impl IntRange {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn min(mut self, min: i64) -> Self {
        self.min = Some(min);
        self
    }

    #[inline]
    pub fn max(mut self, max: i64) -> Self {
        self.max = Some(max);
        self
    }
}

impl ItemSchema<Value> for IntRange {
    type Output = i64;
    type Error = SchemaError;

    fn validate_one(&self, raw: &Value) -> Result<i64, SchemaError> {
        if let (Some(min), Some(max)) = (self.min, self.max) {
            if min > max {
                return Err(SchemaError::misconfigured(
                    "IntRange",
                    format!("min {min} is greater than max {max}"),
                ));
            }
        }

        let value = coerce_int(raw)?;
        if let Some(min) = self.min.filter(|min| value < *min) {
            return Err(invalid(
                kinds::GREATER_THAN_EQUAL,
                format!("Input should be greater than or equal to {min}"),
                raw,
            )
            .into());
        }
        if let Some(max) = self.max.filter(|max| value > *max) {
            return Err(invalid(
                kinds::LESS_THAN_EQUAL,
                format!("Input should be less than or equal to {max}"),
                raw,
            )
            .into());
        }
        Ok(value)
    }
}

/// String; numbers are rejected unless built with [`Str::coerce_numbers`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Str {
    coerce_numbers: bool,
}

impl Str {
    #[inline]
    pub fn strict() -> Self {
        Self { coerce_numbers: false }
    }

    /// Accepts numbers, rendering them as strings.
    #[inline]
    pub fn coerce_numbers() -> Self {
        Self { coerce_numbers: true }
    }
}

impl ItemSchema<Value> for Str {
    type Output = String;
    type Error = SchemaError;

    fn validate_one(&self, raw: &Value) -> Result<String, SchemaError> {
        match raw {
            Value::String(s) => Ok(s.clone()),
            Value::Number(n) if self.coerce_numbers => Ok(n.to_string()),
            _ => Err(invalid(kinds::STRING_TYPE, "Input should be a valid string", raw).into()),
        }
    }
}

/// Lax 64-bit float.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Float;

impl ItemSchema<Value> for Float {
    type Output = f64;
    type Error = SchemaError;

    fn validate_one(&self, raw: &Value) -> Result<f64, SchemaError> {
        match raw {
            Value::Number(n) => n
                .as_f64()
                .ok_or_else(|| {
                    SchemaError::from(invalid(kinds::FLOAT_TYPE, "Input should be a valid number", raw))
                }),
            Value::String(s) => s.trim().parse::<f64>().map_err(|_| {
                SchemaError::from(invalid(
                    kinds::FLOAT_PARSING,
                    "Input should be a valid number, unable to parse string as a number",
                    raw,
                ))
            }),
            _ => Err(invalid(kinds::FLOAT_TYPE, "Input should be a valid number", raw).into()),
        }
    }
}

/// Lax boolean: `true`/`false`, `0`/`1` and the usual yes/no spellings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Bool;

const TRUTHY: [&str; 6] = ["true", "t", "yes", "y", "on", "1"];
const FALSY: [&str; 6] = ["false", "f", "no", "n", "off", "0"];

impl ItemSchema<Value> for Bool {
    type Output = bool;
    type Error = SchemaError;

    fn validate_one(&self, raw: &Value) -> Result<bool, SchemaError> {
        let unable = || {
            SchemaError::from(invalid(
                kinds::BOOL_PARSING,
                "Input should be a valid boolean, unable to interpret input",
                raw,
            ))
        };
        match raw {
            Value::Bool(b) => Ok(*b),
            Value::Number(n) => match n.as_i64() {
                Some(0) => Ok(false),
                Some(1) => Ok(true),
                _ => Err(unable()),
            },
            Value::String(s) => {
                let s = s.trim().to_ascii_lowercase();
                if TRUTHY.contains(&s.as_str()) {
                    Ok(true)
                } else if FALSY.contains(&s.as_str()) {
                    Ok(false)
                } else {
                    Err(unable())
                }
            }
            _ => Err(invalid(kinds::BOOL_TYPE, "Input should be a valid boolean", raw).into()),
        }
    }
}

/// Record shape defined by a serde `Deserialize` implementation.
///
/// Missing fields fail with kind `missing` and unknown fields (under
/// `#[serde(deny_unknown_fields)]`) with `extra_forbidden`, both located on
/// the field. Any other serde failure has kind `deserialize`.
///
/// # Examples
///
/// ```
/// use lenient_rail::schema::json::Typed;
/// use lenient_rail::validate_collection;
/// use serde::Deserialize;
/// use serde_json::json;
///
/// #[derive(Debug, Deserialize, PartialEq)]
/// struct Event {
///     event_id: String,
///     r#type: String,
/// }
///
/// let raw = [
///     json!({"event_id": "a", "type": "user"}),
///     json!({"event_id": 7, "type": "user"}),
///     json!({"event_id": "c"}),
/// ];
/// let batch = validate_collection(&raw, &Typed::<Event>::new()).unwrap();
/// assert_eq!(batch.len(), 1);
/// assert_eq!(batch.errors()[0].kind(), "deserialize");
/// assert_eq!(batch.errors()[1].kind(), "missing");
/// assert_eq!(batch.errors()[1].loc_path(), "type");
/// ```
pub struct Typed<T> {
    _marker: PhantomData<fn() -> T>,
}

impl<T> Typed<T> {
    #[inline]
    pub fn new() -> Self {
        Self { _marker: PhantomData }
    }
}

impl<T> Default for Typed<T> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for Typed<T> {
    #[inline]
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Typed<T> {}

impl<T> fmt::Debug for Typed<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Typed<{}>", core::any::type_name::<T>())
    }
}

impl<T: DeserializeOwned> ItemSchema<Value> for Typed<T> {
    type Output = T;
    type Error = ValidationError;

    fn validate_one(&self, raw: &Value) -> Result<T, ValidationError> {
        T::deserialize(raw).map_err(|err| {
            let message = err.to_string();
            field_error(&message, raw)
                .unwrap_or_else(|| invalid(kinds::DESERIALIZE, message, raw))
        })
    }
}

/// Locates serde's missing and unknown field failures on the field they name.
fn field_error(message: &str, raw: &Value) -> Option<ValidationError> {
    if let Some(rest) = message.strip_prefix("missing field `") {
        let field = rest.split('`').next()?;
        return Some(invalid(kinds::MISSING, "Field required", raw).at(field.to_owned()));
    }
    let rest = message.strip_prefix("unknown field `")?;
    let field = rest.split('`').next()?;
    let input = raw.get(field).unwrap_or(raw);
    Some(
        invalid(kinds::EXTRA_FORBIDDEN, "Extra inputs are not permitted", input)
            .at(field.to_owned()),
    )
}

/// Deserializes a JSON array leniently: each element is deserialized on its
/// own and failures are captured instead of failing the whole document.
///
/// # Examples
///
/// ```
/// use lenient_rail::LenientCollection;
/// use serde::Deserialize;
///
/// #[derive(Deserialize)]
/// struct Body {
///     scores: LenientCollection<u8>,
/// }
///
/// let body: Body = serde_json::from_str(r#"{"scores": [10, -1, 200, "x"]}"#).unwrap();
/// assert_eq!(body.scores.successes(), &[10, 200]);
/// assert_eq!(body.scores.original_error_indices(), &[1, 3]);
/// ```
impl<'de, T> Deserialize<'de> for LenientCollection<T, ValidationError>
where
    T: DeserializeOwned,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let items = Vec::<Value>::deserialize(deserializer)?;
        validate_collection(&items, &Typed::<T>::new()).map_err(D::Error::custom)
    }
}
