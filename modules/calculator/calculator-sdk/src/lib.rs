//! Calculator SDK
//!
//! This crate provides the public contract of the `calculator` module:
//!
//! - [`Number`] - Numeric value (integer or floating point)
//! - [`CalculatorError`] - Error types
//!
//! ## Usage
//!
//! ```ignore
//! use calculator_sdk::{CalculatorError, Number};
//!
//! let total = Number::from(2) + Number::from(0.5);
//! assert_eq!(total, Number::Float(2.5));
//!
//! let err = CalculatorError::DivisionByZero;
//! assert_eq!(err.to_string(), "Cannot divide by zero.");
//! ```

#![forbid(unsafe_code)]
#![deny(rust_2018_idioms)]

pub mod error;
pub mod models;

// Re-export main types at crate root
pub use error::CalculatorError;
pub use models::Number;
