//! Validation functionality
//!
//! Confirms that a written output file is well-formed JSON.

pub mod json;

pub use json::validate;
