#![allow(dead_code)]

//! Common test utilities for calculator integration tests

use calculator::{Calculator, Number};

/// Relative tolerance used for float comparisons.
pub const REL_TOLERANCE: f64 = 1e-6;

/// Absolute tolerance used for comparisons against values near zero.
pub const ABS_TOLERANCE: f64 = 1e-12;

/// Whether `actual` is within tolerance of `expected`.
pub fn approx_eq(actual: Number, expected: f64) -> bool {
    let actual = actual.as_f64();
    (actual - expected).abs() <= f64::max(REL_TOLERANCE * expected.abs(), ABS_TOLERANCE)
}

/// Assert that `actual` is within tolerance of `expected`, naming the case on failure.
#[track_caller]
pub fn assert_approx(case: &str, actual: Number, expected: f64) {
    assert!(
        approx_eq(actual, expected),
        "{case}: got {actual}, expected {expected}"
    );
}

/// Fresh calculator starting at zero.
pub fn create_calculator() -> Calculator {
    Calculator::default()
}
