//! Error types for expression conversion and evaluation.

use thiserror::Error;

use crate::token::BoolOp;

/// Everything that can go wrong while evaluating one expression.
///
/// Errors are local to a single call; the caller can report them and keep
/// going.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EvalError {
    /// Character is not an operand, operator, parenthesis or whitespace.
    #[error("invalid character '{character}' at position {position}")]
    InvalidCharacter {
        /// The offending character.
        character: char,
        /// Byte offset of the character in the input.
        position: usize,
    },

    /// Unbalanced `(` or `)`.
    #[error("mismatched parentheses")]
    MismatchedParentheses,

    /// NOT applied with no operand available.
    #[error("invalid syntax for NOT operation")]
    MalformedUnaryOperand,

    /// Binary operator applied with fewer than two operands available.
    #[error("invalid syntax for binary operation {0}")]
    MalformedBinaryOperands(BoolOp),

    /// Postfix stream contained something that is neither operand nor operator.
    #[error("invalid operator: {0}")]
    UnknownOperatorToken(String),

    /// Evaluation did not leave exactly one value on the stack.
    #[error("invalid expression ({residual} values left after evaluation)")]
    MalformedExpression {
        /// Number of values left on the stack.
        residual: usize,
    },

    /// Input exceeds [`Limits::max_len`](crate::Limits::max_len).
    #[error("expression is {len} bytes long, maximum is {max}")]
    InputTooLong {
        /// Actual input length in bytes.
        len: usize,
        /// Configured maximum.
        max: usize,
    },

    /// Parentheses nested deeper than [`Limits::max_depth`](crate::Limits::max_depth).
    #[error("maximum nesting depth exceeded ({0})")]
    NestingTooDeep(usize),
}

impl EvalError {
    /// The offending character, for errors that have one.
    pub fn character(&self) -> Option<char> {
        match self {
            EvalError::InvalidCharacter { character, .. } => Some(*character),
            EvalError::UnknownOperatorToken(word) => {
                let mut chars = word.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => Some(c),
                    _ => None,
                }
            }
            _ => None,
        }
    }
}
