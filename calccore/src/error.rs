//! Errors surfaced to the user
//!
//! `Display` for each variant is the exact text shown in the error dialog.

use thiserror::Error;

use crate::evaluator::ArithmeticError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CalcError {
    /// An operator was pressed with no usable left operand.
    #[error("Você não digitou nada")]
    EmptyOperand,
    /// `=` was pressed before the operand and operator were both set.
    #[error("Conta incompleta")]
    IncompleteEquation,
    #[error(transparent)]
    Arithmetic(#[from] ArithmeticError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        assert_eq!(CalcError::EmptyOperand.to_string(), "Você não digitou nada");
        assert_eq!(CalcError::IncompleteEquation.to_string(), "Conta incompleta");
        assert_eq!(
            CalcError::from(ArithmeticError::DivisionByZero).to_string(),
            "Divisão por zero"
        );
        assert_eq!(
            CalcError::from(ArithmeticError::Undefined).to_string(),
            "Esta conta não pode ser realizada"
        );
    }
}
