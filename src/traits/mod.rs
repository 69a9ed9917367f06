//! Seams between the lenient core and the validators it drives.
//!
//! - [`ItemSchema`]: validates one raw item, optionally describing its element type
//! - [`Capture`]: decides which validator errors are data problems worth capturing
//!
//! # Examples
//!
//! ```
//! use lenient_rail::traits::{Capture, ElementType, ItemSchema};
//! use lenient_rail::ValidationError;
//!
//! struct NonEmpty;
//!
//! impl ItemSchema<str> for NonEmpty {
//!     type Output = String;
//!     type Error = ValidationError;
//!
//!     fn validate_one(&self, raw: &str) -> Result<String, ValidationError> {
//!         if raw.is_empty() {
//!             Err(ValidationError::new("string_too_short", "String should not be empty"))
//!         } else {
//!             Ok(raw.to_owned())
//!         }
//!     }
//! }
//!
//! assert_eq!(NonEmpty.element_type(), ElementType::Known);
//! assert!(NonEmpty.validate_one("").unwrap_err().capture().is_ok());
//! ```

pub mod capture;
pub mod item_schema;

pub use capture::Capture;
pub use item_schema::{schema_fn, ElementType, FnSchema, ItemSchema};
