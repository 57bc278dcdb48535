//! Error types for the calculator module.

use thiserror::Error;

/// Errors that can occur when using the calculator API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CalculatorError {
    /// The divisor of a division was exactly zero.
    ///
    /// This is an invalid-argument failure: the caller supplied an operand
    /// that violates the operation's precondition. It is never recovered
    /// internally.
    #[error("Cannot divide by zero.")]
    DivisionByZero,
}

impl CalculatorError {
    /// Whether the error was caused by a caller-supplied argument.
    #[must_use]
    pub const fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::DivisionByZero)
    }
}
