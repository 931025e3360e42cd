//! Stack machine for postfix sequences.

use tracing::trace;

use crate::error::EvalError;
use crate::postfix::Postfix;
use crate::token::Token;

/// Reduce a postfix sequence to a single boolean.
///
/// Binary operators pop their right operand first, then their left, and
/// apply as `left op right`.
///
/// # Errors
///
/// Returns an error if:
/// - `!` finds an empty stack
/// - a binary operator finds fewer than two values
/// - the sequence contains a grouping token
/// - anything other than exactly one value remains at the end
pub fn evaluate_postfix(postfix: &Postfix) -> Result<bool, EvalError> {
    let mut stack: Vec<bool> = Vec::with_capacity(postfix.len());

    for &token in postfix {
        match token {
            Token::Operand(value) => stack.push(value),
            Token::Not => {
                let operand = stack.pop().ok_or(EvalError::MalformedUnaryOperand)?;
                stack.push(!operand);
            }
            Token::Binary(op) => {
                let (Some(right), Some(left)) = (stack.pop(), stack.pop()) else {
                    return Err(EvalError::MalformedBinaryOperands(op));
                };
                stack.push(op.eval(left, right));
            }
            Token::GroupOpen | Token::GroupClose => {
                return Err(EvalError::UnknownOperatorToken(token.to_string()));
            }
        }
        trace!(token = %token, depth = stack.len(), "postfix step");
    }

    match stack.as_slice() {
        [value] => Ok(*value),
        rest => Err(EvalError::MalformedExpression {
            residual: rest.len(),
        }),
    }
}
