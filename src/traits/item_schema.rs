//! The per-item validation capability a lenient collection invokes.

use crate::traits::Capture;
use core::fmt;
use core::marker::PhantomData;

/// What a schema knows about the elements it validates.
///
/// A lenient collection isolates failures per item only when the element type
/// is known. An opaque element type makes the collection validate the
/// sequence as a whole instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ElementType {
    #[default]
    Known,
    Opaque,
}

/// Validates or coerces one raw item into `Output`.
///
/// # Examples
///
/// ```
/// use lenient_rail::{ItemSchema, ValidationError};
///
/// struct Positive;
///
/// impl ItemSchema<i64> for Positive {
///     type Output = u64;
///     type Error = ValidationError;
///
///     fn validate_one(&self, raw: &i64) -> Result<u64, ValidationError> {
///         u64::try_from(*raw)
///             .ok()
///             .filter(|value| *value > 0)
///             .ok_or_else(|| ValidationError::new("positive", "Input should be positive"))
///     }
/// }
///
/// assert_eq!(Positive.validate_one(&7), Ok(7));
/// assert!(Positive.validate_one(&-1).is_err());
/// ```
pub trait ItemSchema<Raw: ?Sized> {
    type Output;
    type Error: Capture;

    fn validate_one(&self, raw: &Raw) -> Result<Self::Output, Self::Error>;

    /// Describes the element type; [`ElementType::Known`] unless overridden.
    #[inline]
    fn element_type(&self) -> ElementType {
        ElementType::Known
    }
}

impl<Raw, S> ItemSchema<Raw> for &S
where
    Raw: ?Sized,
    S: ItemSchema<Raw> + ?Sized,
{
    type Output = S::Output;
    type Error = S::Error;

    #[inline]
    fn validate_one(&self, raw: &Raw) -> Result<Self::Output, Self::Error> {
        (**self).validate_one(raw)
    }

    #[inline]
    fn element_type(&self) -> ElementType {
        (**self).element_type()
    }
}

/// Schema backed by a closure, created by [`schema_fn`].
pub struct FnSchema<F, T, E> {
    f: F,
    _marker: PhantomData<fn() -> (T, E)>,
}

impl<F, T, E> fmt::Debug for FnSchema<F, T, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnSchema").finish_non_exhaustive()
    }
}

impl<F: Clone, T, E> Clone for FnSchema<F, T, E> {
    fn clone(&self) -> Self {
        Self { f: self.f.clone(), _marker: PhantomData }
    }
}

/// Adapts a closure into an [`ItemSchema`].
///
/// # Examples
///
/// ```
/// use lenient_rail::{schema_fn, validate_collection, ValidationError};
///
/// let schema = schema_fn(|raw: &&str| {
///     raw.parse::<u8>()
///         .map_err(|_| ValidationError::new("u8_parsing", "Input should be a byte"))
/// });
///
/// let batch = validate_collection(&["1", "300", "3"], &schema).unwrap();
/// assert_eq!(batch.successes(), &[1, 3]);
/// assert_eq!(batch.original_error_indices(), &[1]);
/// ```
#[inline]
pub fn schema_fn<Raw, T, E, F>(f: F) -> FnSchema<F, T, E>
where
    Raw: ?Sized,
    F: Fn(&Raw) -> Result<T, E>,
    E: Capture,
{
    FnSchema { f, _marker: PhantomData }
}

impl<Raw, T, E, F> ItemSchema<Raw> for FnSchema<F, T, E>
where
    Raw: ?Sized,
    F: Fn(&Raw) -> Result<T, E>,
    E: Capture,
{
    type Output = T;
    type Error = E;

    #[inline]
    fn validate_one(&self, raw: &Raw) -> Result<T, E> {
        (self.f)(raw)
    }
}
