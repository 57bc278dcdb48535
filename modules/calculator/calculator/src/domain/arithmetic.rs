//! Arithmetic primitives
//!
//! Pure functions over [`Number`]. None of them read or write shared state;
//! identical inputs always produce identical outputs.

use calculator_sdk::{CalculatorError, Number};
use tracing::debug;

/// Return the sum of `a` and `b`.
#[must_use]
pub fn add(a: impl Into<Number>, b: impl Into<Number>) -> Number {
    let (a, b) = (a.into(), b.into());
    debug!(%a, %b, "performing addition");
    a + b
}

/// Return the difference `a - b`.
#[must_use]
pub fn subtract(a: impl Into<Number>, b: impl Into<Number>) -> Number {
    let (a, b) = (a.into(), b.into());
    debug!(%a, %b, "performing subtraction");
    a - b
}

/// Return the product `a * b`.
#[must_use]
pub fn multiply(a: impl Into<Number>, b: impl Into<Number>) -> Number {
    let (a, b) = (a.into(), b.into());
    debug!(%a, %b, "performing multiplication");
    a * b
}

/// Divide `a` by `b` using true division; the quotient is always a float.
///
/// Only the divisor is validated, and only against exact zero: a tiny
/// non-zero divisor is accepted even if the quotient overflows to infinity.
///
/// # Errors
/// Returns [`CalculatorError::DivisionByZero`] when `b` equals zero.
pub fn divide(a: impl Into<Number>, b: impl Into<Number>) -> Result<Number, CalculatorError> {
    let (a, b) = (a.into(), b.into());
    if b.is_zero() {
        debug!(%a, "rejecting division by zero");
        return Err(CalculatorError::DivisionByZero);
    }
    debug!(%a, %b, "performing division");
    Ok(a / b)
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn approx_eq(actual: Number, expected: f64) -> bool {
        let actual = actual.as_f64();
        (actual - expected).abs() <= f64::max(1e-6 * expected.abs(), 1e-12)
    }

    fn arb_number() -> impl Strategy<Value = Number> {
        prop_oneof![
            any::<i64>().prop_map(Number::Int),
            (-1e12..1e12f64).prop_map(Number::Float),
        ]
    }

    fn arb_divisor() -> impl Strategy<Value = f64> {
        (1e-3..1e6f64, any::<bool>()).prop_map(|(magnitude, negative)| {
            if negative { -magnitude } else { magnitude }
        })
    }

    #[test]
    fn test_add() {
        assert_eq!(add(2, 3), Number::Int(5));
        assert!(add(2, 3).is_int());
        assert!(approx_eq(add(1.5, 2.6), 4.1));
    }

    #[test]
    fn test_subtract() {
        assert_eq!(subtract(5, 2), Number::Int(3));
        assert_eq!(subtract(0, 5), Number::Int(-5));
    }

    #[test]
    fn test_multiply() {
        assert_eq!(multiply(3, 4), Number::Int(12));
        assert!(approx_eq(multiply(0.9, 0.5), 0.45));
    }

    #[test]
    fn test_divide() {
        let quotient = divide(10, 2).unwrap();
        assert!(quotient.is_float());
        assert_eq!(quotient, Number::Int(5));
        assert!(approx_eq(divide(1, 3).unwrap(), 0.333_333_333));
    }

    #[test]
    fn test_divide_by_zero() {
        let err = divide(1, 0).unwrap_err();
        assert_eq!(err, CalculatorError::DivisionByZero);
        assert_eq!(err.to_string(), "Cannot divide by zero.");
    }

    #[test]
    fn test_divide_by_float_zero() {
        assert_eq!(divide(1, 0.0), Err(CalculatorError::DivisionByZero));
        assert_eq!(divide(1.5, -0.0), Err(CalculatorError::DivisionByZero));
    }

    #[test]
    fn test_divide_by_tiny_divisor_is_accepted() {
        let quotient = divide(1e300, 1e-300).unwrap();
        assert_eq!(quotient, Number::Float(f64::INFINITY));
    }

    proptest! {
        #[test]
        fn add_is_commutative(a in arb_number(), b in arb_number()) {
            prop_assert_eq!(add(a, b), add(b, a));
        }

        #[test]
        fn subtract_self_is_zero(a in arb_number()) {
            prop_assert!(subtract(a, a).is_zero());
        }

        #[test]
        fn divide_then_multiply_restores_dividend(a in -1e6..1e6f64, b in arb_divisor()) {
            let quotient = divide(a, b).unwrap();
            let restored = multiply(quotient, b).as_f64();
            prop_assert!((restored - a).abs() <= 1e-9 * a.abs() + 1e-12);
        }

        #[test]
        fn divide_int_then_multiply_restores_dividend(a in any::<i32>(), b in any::<i32>()) {
            prop_assume!(b != 0);
            let quotient = divide(a, b).unwrap();
            let restored = multiply(quotient, b).as_f64();
            let expected = f64::from(a);
            prop_assert!((restored - expected).abs() <= 1e-9 * expected.abs() + 1e-12);
        }

        #[test]
        fn divide_by_zero_always_fails(a in arb_number()) {
            let err = divide(a, 0).unwrap_err();
            prop_assert_eq!(err.to_string(), "Cannot divide by zero.");
        }
    }
}
