//! Shorthand for building [`ValidationError`](crate::ValidationError)s inside schemas.
//!
//! - [`macro@crate::invalid`] - creates an error from a kind tag and a `format!` message.
//!
//! # Examples
//!
//! ```
//! use lenient_rail::{invalid, schema_fn, validate_collection};
//!
//! let adult = schema_fn(|age: &u32| {
//!     if *age >= 18 {
//!         Ok(*age)
//!     } else {
//!         Err(invalid!("too_young", "age {} is below 18", age).with_input(age, "int"))
//!     }
//! });
//!
//! let batch = validate_collection(&[30, 12], &adult).unwrap();
//! assert_eq!(batch.errors()[0].message(), "age 12 is below 18");
//! ```

/// Creates a [`ValidationError`](crate::ValidationError) with a formatted message.
///
/// # Arguments
///
/// * `$kind` - machine-readable tag, e.g. one of [`kinds`](crate::kinds)
/// * the rest - arguments accepted by `format!`
///
/// # Examples
///
/// ```
/// use lenient_rail::{invalid, kinds};
///
/// let err = invalid!(kinds::LESS_THAN_EQUAL, "Input should be less than or equal to {}", 10);
/// assert_eq!(err.kind(), "less_than_equal");
/// assert_eq!(err.message(), "Input should be less than or equal to 10");
/// ```
#[macro_export]
macro_rules! invalid {
    ($kind:expr, $($arg:tt)+) => {
        $crate::ValidationError::new($kind, format!($($arg)+))
    };
}
