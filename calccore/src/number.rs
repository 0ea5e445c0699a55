//! Numbers as the keypad sees them
//!
//! A value is integer-typed whenever it has no fractional part, so that
//! `6 / 3` shows as `2` and not `2.0`, and `1e20` shows all of its digits.
//! Integers that fit an `i128` are kept exactly in `Int`; everything else is
//! an `f64`, printed without decimals when it is whole.

use std::fmt;

use crate::token::is_valid_number;

/// Decimal places kept when a result is shown.
pub const DEFAULT_PRECISION: u32 = 2;

/// Past this magnitude an `f64` has no fractional digits left to round.
const ROUNDING_LIMIT: f64 = 1e15;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Number {
    Int(i128),
    Float(f64),
}

impl Number {
    /// Build a number from an `f64`, collapsing whole values to `Int`.
    ///
    /// Whole values outside the `i128` range stay `Float` but still count as
    /// integers (see [`Number::is_int`]).
    pub fn from_f64(value: f64) -> Self {
        // i128::MAX as f64 rounds up to 2^127, hence the strict upper bound
        let in_range = value >= i128::MIN as f64 && value < i128::MAX as f64;
        if value.fract() == 0.0 && in_range {
            Number::Int(value as i128)
        } else {
            Number::Float(value)
        }
    }

    pub fn as_f64(self) -> f64 {
        match self {
            Number::Int(n) => n as f64,
            Number::Float(x) => x,
        }
    }

    /// True if the value has no fractional part.
    pub fn is_int(self) -> bool {
        match self {
            Number::Int(_) => true,
            Number::Float(x) => x.is_finite() && x.fract() == 0.0,
        }
    }

    pub fn is_finite(self) -> bool {
        match self {
            Number::Int(_) => true,
            Number::Float(x) => x.is_finite(),
        }
    }

    pub fn is_zero(self) -> bool {
        match self {
            Number::Int(n) => n == 0,
            Number::Float(x) => x == 0.0,
        }
    }
}

impl From<i64> for Number {
    fn from(n: i64) -> Self {
        Number::Int(n.into())
    }
}

impl From<f64> for Number {
    fn from(x: f64) -> Self {
        Number::from_f64(x)
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Number::Int(n) => write!(f, "{}", n),
            Number::Float(x) if self.is_int() => write!(f, "{:.0}", x),
            Number::Float(x) => {
                let abs = x.abs();
                if x.is_finite() && abs < 1e-4 && abs != 0.0 {
                    write!(f, "{:e}", x)
                } else {
                    write!(f, "{}", x)
                }
            }
        }
    }
}

/// Parse typed text into a number. `None` if the text is not a number.
pub fn to_number(text: &str) -> Option<Number> {
    if !is_valid_number(text) {
        return None;
    }
    text.trim().parse::<f64>().ok().map(Number::from_f64)
}

/// Normalize a result for display with the default precision.
pub fn format_result(value: Number) -> Number {
    format_result_with(value, DEFAULT_PRECISION)
}

/// Normalize a result for display: whole values become `Int`, everything
/// else is rounded to `places` decimals.
///
/// Rounding can land on a whole value (`2.999` -> `3`), which is collapsed
/// to `Int` as well, so applying this twice is the same as applying it once.
pub fn format_result_with(value: Number, places: u32) -> Number {
    let x = match value {
        Number::Int(_) => return value,
        Number::Float(x) => x,
    };
    if !x.is_finite() || x.fract() == 0.0 || x.abs() >= ROUNDING_LIMIT {
        return Number::from_f64(x);
    }
    let factor = 10f64.powi(places.min(15) as i32);
    Number::from_f64((x * factor).round() / factor)
}
