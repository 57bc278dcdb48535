//! Public models for the calculator module.
//!
//! [`Number`] keeps the integer/float distinction of its operands. Integer
//! arithmetic stays integral for as long as the exact result fits in `i64`
//! and falls back to floating point when it does not; mixing an integer with
//! a float, or dividing, always yields a float.

use std::fmt;
use std::ops::{Add, Div, Mul, Sub};

use serde::{Deserialize, Serialize};

/// Numeric value: either an integer or a floating-point number.
///
/// Equality is numeric and exact, so `Number::Int(5) == Number::Float(5.0)`
/// while `Number::Int(2^53 + 1) != Number::Float(2^53)`. A float `NaN`
/// compares unequal to everything, which is why `Number` is not `Eq`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Number {
    Int(i64),
    Float(f64),
}

impl Number {
    /// Integer zero, the value of a freshly reset accumulator.
    pub const ZERO: Self = Self::Int(0);

    /// Whether this value is exactly zero (`0`, `0.0` or `-0.0`).
    #[must_use]
    pub fn is_zero(self) -> bool {
        match self {
            Self::Int(v) => v == 0,
            Self::Float(v) => v == 0.0,
        }
    }

    #[must_use]
    pub const fn is_int(self) -> bool {
        matches!(self, Self::Int(_))
    }

    #[must_use]
    pub const fn is_float(self) -> bool {
        matches!(self, Self::Float(_))
    }

    /// Widens the value to `f64`. Integers beyond 2^53 lose precision.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn as_f64(self) -> f64 {
        match self {
            Self::Int(v) => v as f64,
            Self::Float(v) => v,
        }
    }
}

impl Default for Number {
    fn default() -> Self {
        Self::ZERO
    }
}

/// `2^63` as `f64`; every integral float in `[-2^63, 2^63)` fits in `i64`.
const I64_BOUND: f64 = 9_223_372_036_854_775_808.0;

/// Compares an integer with a float without rounding the integer.
#[allow(clippy::cast_possible_truncation)]
fn int_eq_float(int: i64, float: f64) -> bool {
    // NaN and infinities have a NaN fractional part.
    if float.fract() != 0.0 || !(-I64_BOUND..I64_BOUND).contains(&float) {
        return false;
    }
    float as i64 == int
}

impl PartialEq for Number {
    #[allow(clippy::float_cmp)]
    fn eq(&self, other: &Self) -> bool {
        match (*self, *other) {
            (Self::Int(a), Self::Int(b)) => a == b,
            (Self::Float(a), Self::Float(b)) => a == b,
            (Self::Int(int), Self::Float(float)) | (Self::Float(float), Self::Int(int)) => {
                int_eq_float(int, float)
            }
        }
    }
}

/// Non-zero finite floats outside `[1e-4, 1e16)` in magnitude print in
/// scientific notation.
fn prints_scientific(v: f64) -> bool {
    v.is_finite() && v != 0.0 && !(1e-4..1e16).contains(&v.abs())
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::Int(v) => write!(f, "{v}"),
            Self::Float(v) if prints_scientific(v) => write!(f, "{v:e}"),
            // Keep a fractional digit so that integral floats stay recognisable.
            Self::Float(v) if v.fract() == 0.0 => write!(f, "{v:.1}"),
            Self::Float(v) => write!(f, "{v}"),
        }
    }
}

macro_rules! number_from {
    ($variant:ident, $target:ty, $($t:ty),+) => {
        $(
            impl From<$t> for Number {
                fn from(v: $t) -> Self {
                    Self::$variant(<$target>::from(v))
                }
            }
        )+
    };
}

number_from!(Int, i64, i8, i16, i32, i64, u8, u16, u32);
number_from!(Float, f64, f32, f64);

macro_rules! number_binary_op {
    ($trait_name:ident, $method:ident, $checked:ident, $op:tt) => {
        impl $trait_name for Number {
            type Output = Number;

            fn $method(self, rhs: Number) -> Number {
                match (self, rhs) {
                    (Number::Int(a), Number::Int(b)) => a.$checked(b).map_or_else(
                        || Number::Float(self.as_f64() $op rhs.as_f64()),
                        Number::Int,
                    ),
                    _ => Number::Float(self.as_f64() $op rhs.as_f64()),
                }
            }
        }
    };
}

number_binary_op!(Add, add, checked_add, +);
number_binary_op!(Sub, sub, checked_sub, -);
number_binary_op!(Mul, mul, checked_mul, *);

/// True division. Always produces a float; a zero divisor yields an infinity
/// or `NaN` exactly as `f64` does.
impl Div for Number {
    type Output = Number;

    fn div(self, rhs: Number) -> Number {
        Number::Float(self.as_f64() / rhs.as_f64())
    }
}
