//! Binary arithmetic over keypad numbers

use std::fmt;

use thiserror::Error;

use crate::number::Number;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    Add,
    Sub,
    Mul,
    Div,
    Pow,
}

impl Operator {
    pub const ALL: [Operator; 5] = [
        Operator::Add,
        Operator::Sub,
        Operator::Mul,
        Operator::Div,
        Operator::Pow,
    ];

    pub fn symbol(self) -> char {
        match self {
            Operator::Add => '+',
            Operator::Sub => '-',
            Operator::Mul => '*',
            Operator::Div => '/',
            Operator::Pow => '^',
        }
    }

    pub fn from_symbol(c: char) -> Option<Self> {
        Self::ALL.into_iter().find(|op| op.symbol() == c)
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Why an evaluation produced no number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ArithmeticError {
    #[error("Divisão por zero")]
    DivisionByZero,
    #[error("Esta conta não pode ser realizada")]
    Overflow,
    /// The result is not a number at all (e.g. a negative base under a
    /// fractional exponent).
    #[error("Esta conta não pode ser realizada")]
    Undefined,
}

/// Evaluate `left op right`.
pub fn evaluate(left: Number, op: Operator, right: Number) -> Result<Number, ArithmeticError> {
    if let (Number::Int(a), Number::Int(b)) = (left, right) {
        let exact = match op {
            Operator::Add => a.checked_add(b),
            Operator::Sub => a.checked_sub(b),
            Operator::Mul => a.checked_mul(b),
            Operator::Div | Operator::Pow => None,
        };
        if let Some(n) = exact {
            return Ok(Number::Int(n));
        }
    }

    let (a, b) = (left.as_f64(), right.as_f64());
    let value = match op {
        Operator::Add => a + b,
        Operator::Sub => a - b,
        Operator::Mul => a * b,
        Operator::Div => {
            if right.is_zero() {
                return Err(ArithmeticError::DivisionByZero);
            }
            a / b
        }
        Operator::Pow => {
            if a == 0.0 && b < 0.0 {
                return Err(ArithmeticError::Undefined);
            }
            a.powf(b)
        }
    };
    check(value)
}

fn check(value: f64) -> Result<Number, ArithmeticError> {
    if value.is_nan() {
        return Err(ArithmeticError::Undefined);
    }
    // an infinite operand is itself too large to represent
    if value.is_infinite() {
        return Err(ArithmeticError::Overflow);
    }
    Ok(Number::from_f64(value))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn i(n: i128) -> Number {
        Number::Int(n)
    }

    fn f(x: f64) -> Number {
        Number::Float(x)
    }

    #[test]
    fn test_symbols() {
        for op in Operator::ALL {
            assert_eq!(Operator::from_symbol(op.symbol()), Some(op));
        }
        assert_eq!(Operator::from_symbol('x'), None);
        assert_eq!(Operator::Pow.to_string(), "^");
    }

    #[test]
    fn test_integer_ops() {
        assert_eq!(evaluate(i(3), Operator::Add, i(4)), Ok(Number::Int(7)));
        assert_eq!(evaluate(i(3), Operator::Sub, i(4)), Ok(Number::Int(-1)));
        assert_eq!(evaluate(i(6), Operator::Mul, i(7)), Ok(Number::Int(42)));
    }

    #[test]
    fn test_division() {
        assert_eq!(evaluate(i(6), Operator::Div, i(3)), Ok(Number::Int(2)));
        assert_eq!(evaluate(i(1), Operator::Div, i(4)), Ok(Number::Float(0.25)));
        assert_eq!(evaluate(f(1.5), Operator::Div, f(0.5)), Ok(Number::Int(3)));
    }

    #[test]
    fn test_division_by_zero() {
        assert_eq!(evaluate(i(5), Operator::Div, i(0)), Err(ArithmeticError::DivisionByZero));
        assert_eq!(evaluate(f(5.5), Operator::Div, f(0.0)), Err(ArithmeticError::DivisionByZero));
        assert_eq!(evaluate(i(0), Operator::Div, i(0)), Err(ArithmeticError::DivisionByZero));
    }

    #[test]
    fn test_power() {
        assert_eq!(evaluate(i(2), Operator::Pow, i(10)), Ok(Number::Int(1024)));
        assert_eq!(evaluate(i(9), Operator::Pow, f(0.5)), Ok(Number::Int(3)));
        assert_eq!(evaluate(i(2), Operator::Pow, i(-1)), Ok(Number::Float(0.5)));
        assert_eq!(evaluate(i(0), Operator::Pow, i(-1)), Err(ArithmeticError::Undefined));
        assert_eq!(evaluate(i(-8), Operator::Pow, f(0.5)), Err(ArithmeticError::Undefined));
    }

    #[test]
    fn test_overflow() {
        assert_eq!(evaluate(i(10), Operator::Pow, i(400)), Err(ArithmeticError::Overflow));
        assert_eq!(evaluate(f(1e308), Operator::Mul, i(10)), Err(ArithmeticError::Overflow));
    }

    #[test]
    fn test_integer_overflow_falls_back_to_float() {
        let n = evaluate(i(i128::MAX), Operator::Add, i(1)).unwrap();
        assert_eq!(n, Number::Float(i128::MAX as f64 + 1.0));
        assert!(n.is_int());
    }

    #[test]
    fn test_exact_above_i64() {
        let ten_billion = i(10_000_000_000);
        assert_eq!(
            evaluate(ten_billion, Operator::Mul, ten_billion),
            Ok(Number::Int(100_000_000_000_000_000_000))
        );
        assert_eq!(evaluate(i(10), Operator::Pow, i(20)), Ok(Number::Int(100_000_000_000_000_000_000)));
    }

    #[test]
    fn test_infinite_operand_overflows() {
        assert_eq!(evaluate(f(f64::INFINITY), Operator::Add, i(1)), Err(ArithmeticError::Overflow));
        assert_eq!(evaluate(i(2), Operator::Mul, f(f64::NEG_INFINITY)), Err(ArithmeticError::Overflow));
    }

    #[test]
    fn test_messages() {
        assert_eq!(ArithmeticError::DivisionByZero.to_string(), "Divisão por zero");
        assert_eq!(ArithmeticError::Overflow.to_string(), "Esta conta não pode ser realizada");
    }
}
