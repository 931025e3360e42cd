//! Shunting-yard conversion from infix tokens to postfix.
//!
//! The converter consumes tokens one-by-one, holding pending operators
//! and open groups on a stack, and emits a [`Postfix`] sequence on
//! `finish()`. Operand/operator arity is not checked here; that is left
//! to the evaluator.

use tracing::trace;

use crate::error::EvalError;
use crate::lexer::tokenize;
use crate::limits::Limits;
use crate::postfix::Postfix;
use crate::precedence::Operator;
use crate::token::{BoolOp, Token};

/// Incremental infix-to-postfix converter.
///
/// After `push` returns an error the converter is left in an unspecified
/// state and should be dropped.
#[derive(Debug)]
pub struct Converter {
    output: Postfix,
    /// Pending operators and open groups, top of stack last.
    operators: Vec<Token>,
    /// Currently open groups.
    depth: usize,
    limits: Limits,
}

impl Default for Converter {
    fn default() -> Self {
        Self::new()
    }
}

impl Converter {
    /// Create a new converter with default limits.
    pub fn new() -> Self {
        Self::with_limits(Limits::default())
    }

    /// Create a new converter with custom limits.
    pub fn with_limits(limits: Limits) -> Self {
        Self {
            output: Postfix::new(),
            operators: Vec::new(),
            depth: 0,
            limits,
        }
    }

    /// Number of groups opened and not yet closed.
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Tokens emitted so far.
    pub fn output(&self) -> &Postfix {
        &self.output
    }

    /// Feed a single infix token to the converter.
    pub fn push(&mut self, token: Token) -> Result<(), EvalError> {
        match token {
            Token::Operand(_) => {
                self.output.push(token);
                Ok(())
            }
            Token::GroupOpen => {
                if self.depth >= self.limits.max_depth {
                    return Err(EvalError::NestingTooDeep(self.limits.max_depth));
                }
                self.depth += 1;
                self.operators.push(token);
                Ok(())
            }
            Token::GroupClose => self.close_group(),
            // Prefix operator: nothing on the stack can take it as a right
            // operand yet, so it never pops.
            Token::Not => {
                self.operators.push(token);
                Ok(())
            }
            Token::Binary(op) => {
                self.pop_while_binding(op);
                self.operators.push(token);
                Ok(())
            }
        }
    }

    /// Flush pending operators and return the postfix sequence.
    ///
    /// # Errors
    ///
    /// Returns [`EvalError::MismatchedParentheses`] if a group is still open.
    pub fn finish(mut self) -> Result<Postfix, EvalError> {
        while let Some(top) = self.operators.pop() {
            if top == Token::GroupOpen {
                return Err(EvalError::MismatchedParentheses);
            }
            self.output.push(top);
        }
        trace!(postfix = %self.output, "converted to postfix");
        Ok(self.output)
    }

    /// Pop operators down to and including the nearest `(`.
    fn close_group(&mut self) -> Result<(), EvalError> {
        loop {
            match self.operators.pop() {
                None => return Err(EvalError::MismatchedParentheses),
                Some(Token::GroupOpen) => {
                    self.depth -= 1;
                    return Ok(());
                }
                Some(op) => self.output.push(op),
            }
        }
    }

    /// Emit stacked operators that bind at least as tightly as `incoming`.
    ///
    /// Equal precedence pops, so operators of the same rank apply left to right.
    fn pop_while_binding(&mut self, incoming: BoolOp) {
        let rank = Operator::from(incoming).precedence();
        while let Some(&top) = self.operators.last() {
            match top.operator() {
                Some(op) if op.precedence() >= rank => {
                    self.output.push(top);
                    self.operators.pop();
                }
                _ => break,
            }
        }
    }
}

/// Convert a full token sequence to postfix with default limits.
pub fn to_postfix(tokens: &[Token]) -> Result<Postfix, EvalError> {
    to_postfix_with_limits(tokens, Limits::default())
}

/// Convert a full token sequence to postfix with custom limits.
pub fn to_postfix_with_limits(tokens: &[Token], limits: Limits) -> Result<Postfix, EvalError> {
    let mut converter = Converter::with_limits(limits);
    for &token in tokens {
        converter.push(token)?;
    }
    converter.finish()
}

/// Tokenize and convert an infix expression.
pub fn infix_to_postfix(source: &str) -> Result<Postfix, EvalError> {
    to_postfix(&tokenize(source)?)
}
