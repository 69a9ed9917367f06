pub mod lenient;
pub mod macros;
pub mod properties;
pub mod report;
pub mod types;

#[cfg(feature = "json")]
pub mod schema;
