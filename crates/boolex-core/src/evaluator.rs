//! Single entry point composing tokenizer, converter and stack machine.

use tracing::debug;

use crate::convert::to_postfix_with_limits;
use crate::error::EvalError;
use crate::eval::evaluate_postfix;
use crate::lexer::tokenize;
use crate::limits::Limits;
use crate::postfix::Postfix;

/// Evaluates infix Boolean expressions.
///
/// Holds only immutable [`Limits`]; every call allocates its own stacks, so
/// one evaluator can be shared freely across threads.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Evaluator {
    limits: Limits,
}

impl Evaluator {
    /// Create an evaluator with default limits.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an evaluator with custom limits.
    pub fn with_limits(limits: Limits) -> Self {
        Self { limits }
    }

    pub fn limits(&self) -> Limits {
        self.limits
    }

    /// Evaluate an infix expression such as `T | F & !F`.
    ///
    /// # Errors
    ///
    /// Returns the first error raised by tokenizing, converting or evaluating.
    pub fn evaluate(&self, expression: &str) -> Result<bool, EvalError> {
        let postfix = self.postfix(expression)?;
        let result = evaluate_postfix(&postfix);
        if let Err(err) = &result {
            debug!(%expression, %postfix, error = %err, "evaluation failed");
        }
        result
    }

    /// Convert an infix expression to its postfix form without evaluating it.
    pub fn postfix(&self, expression: &str) -> Result<Postfix, EvalError> {
        self.check_len(expression)?;
        let postfix = tokenize(expression)
            .and_then(|tokens| to_postfix_with_limits(&tokens, self.limits))
            .inspect_err(|err| debug!(%expression, error = %err, "conversion failed"))?;
        debug!(%expression, %postfix, "converted");
        Ok(postfix)
    }

    /// Evaluate an expression already written in postfix form, e.g. `T F & !`.
    pub fn evaluate_postfix_str(&self, text: &str) -> Result<bool, EvalError> {
        self.check_len(text)?;
        let postfix: Postfix = text.parse()?;
        evaluate_postfix(&postfix)
    }

    fn check_len(&self, input: &str) -> Result<(), EvalError> {
        if input.len() > self.limits.max_len {
            debug!(len = input.len(), max = self.limits.max_len, "input rejected");
            return Err(EvalError::InputTooLong {
                len: input.len(),
                max: self.limits.max_len,
            });
        }
        Ok(())
    }
}

/// Evaluate an infix expression with default limits.
///
/// # Errors
///
/// See [`Evaluator::evaluate`].
pub fn evaluate(expression: &str) -> Result<bool, EvalError> {
    Evaluator::new().evaluate(expression)
}
