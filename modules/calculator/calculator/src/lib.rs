//! Calculator Module Implementation
//!
//! Arithmetic primitives and a stateful accumulator built on top of them.
//! The public contract (`Number`, `CalculatorError`) is defined in
//! `calculator-sdk` and re-exported here.
//!
//! ## Architecture
//!
//! - `domain/arithmetic.rs` - Pure `add`, `subtract`, `multiply`, `divide`
//! - `domain/accumulator.rs` - `Calculator` accumulator delegating to the primitives
//! - `config.rs` - Typed configuration loading

#![forbid(unsafe_code)]
#![deny(rust_2018_idioms)]

// === PUBLIC API (from SDK) ===
pub use calculator_sdk::{CalculatorError, Number};

// === CONFIGURATION ===
pub mod config;
pub use config::CalculatorConfig;

// === DOMAIN ===
pub mod domain;
pub use domain::arithmetic::{add, divide, multiply, subtract};
pub use domain::accumulator::Calculator;
