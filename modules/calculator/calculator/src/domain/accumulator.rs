//! Stateful accumulator
//!
//! [`Calculator`] holds a single [`Number`] and applies the arithmetic
//! primitives to it in place.

use calculator_sdk::{CalculatorError, Number};
use tracing::{debug, trace};

use super::arithmetic;
use crate::config::CalculatorConfig;

/// Accumulator over a single numeric value.
///
/// The value is always the result of the most recent successful mutating
/// operation, the initial value if none has been applied yet, or zero after
/// [`Calculator::reset`]. A failed [`Calculator::divide`] leaves it untouched.
#[derive(Debug, Clone, Default)]
pub struct Calculator {
    value: Number,
}

impl Calculator {
    /// Create a calculator starting at `initial`.
    #[must_use]
    pub fn new(initial: impl Into<Number>) -> Self {
        Self {
            value: initial.into(),
        }
    }

    /// Create a calculator starting at the configured initial value.
    #[must_use]
    pub fn from_config(config: &CalculatorConfig) -> Self {
        Self::new(config.initial)
    }

    /// Current value.
    #[must_use]
    pub fn value(&self) -> Number {
        self.value
    }

    /// Add `x` to the current value and return the result.
    pub fn add(&mut self, x: impl Into<Number>) -> Number {
        self.value = arithmetic::add(self.value, x);
        self.value
    }

    /// Subtract `x` from the current value and return the result.
    pub fn subtract(&mut self, x: impl Into<Number>) -> Number {
        self.value = arithmetic::subtract(self.value, x);
        self.value
    }

    /// Multiply the current value by `x` and return the result.
    pub fn multiply(&mut self, x: impl Into<Number>) -> Number {
        self.value = arithmetic::multiply(self.value, x);
        self.value
    }

    /// Divide the current value by `x` and return the result.
    ///
    /// # Errors
    /// Returns [`CalculatorError::DivisionByZero`] when `x` equals zero; the
    /// current value is left unchanged.
    pub fn divide(&mut self, x: impl Into<Number>) -> Result<Number, CalculatorError> {
        match arithmetic::divide(self.value, x) {
            Ok(value) => {
                self.value = value;
                Ok(value)
            }
            Err(err) => {
                debug!(value = %self.value, "division rejected, value unchanged");
                Err(err)
            }
        }
    }

    /// Reset the value to zero.
    pub fn reset(&mut self) {
        trace!(value = %self.value, "resetting calculator");
        self.value = Number::ZERO;
    }
}
