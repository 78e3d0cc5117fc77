use crate::common::{Int, Operator};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum RollError {
    #[error("too many dice rolled")]
    TooManyRolls,
    #[error("cannot evaluate an empty expression")]
    EmptyExpression,
    #[error("operator '{0}' has no right operand")]
    MissingOperand(Operator),
    #[error("cannot select around {keep} of {num} dice")]
    KeepOutOfRange { keep: Int, num: usize },
    #[error("integer overflow")]
    Overflow,
}
