//! Postfix (reverse Polish) token sequences.

use std::fmt;
use std::str::FromStr;

use crate::error::EvalError;
use crate::precedence::{classify, Class};
use crate::token::Token;

/// An ordered postfix token sequence.
///
/// Sequences produced by [`crate::Converter`] never contain grouping tokens.
/// Sequences built by hand or parsed from text may be malformed; the
/// evaluator reports that instead of assuming it away.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Postfix {
    tokens: Vec<Token>,
}

impl Postfix {
    /// Create an empty sequence.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, token: Token) {
        self.tokens.push(token);
    }

    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Token> {
        self.tokens.iter()
    }

    /// Number of `T`/`F` occurrences.
    pub fn operand_count(&self) -> usize {
        self.tokens
            .iter()
            .filter(|t| matches!(t, Token::Operand(_)))
            .count()
    }

    /// Number of binary operator occurrences.
    pub fn binary_count(&self) -> usize {
        self.tokens
            .iter()
            .filter(|t| matches!(t, Token::Binary(_)))
            .count()
    }

    /// Check the arity invariant: exactly one more operand than binary operators.
    ///
    /// This is necessary but not sufficient for successful evaluation, since
    /// operator placement still matters (`T & F T` is balanced but not valid).
    pub fn is_balanced(&self) -> bool {
        self.operand_count() == self.binary_count() + 1
    }
}

impl From<Vec<Token>> for Postfix {
    fn from(tokens: Vec<Token>) -> Self {
        Self { tokens }
    }
}

impl<'a> IntoIterator for &'a Postfix {
    type Item = &'a Token;
    type IntoIter = std::slice::Iter<'a, Token>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.iter()
    }
}

impl fmt::Display for Postfix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, token) in self.tokens.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{token}")?;
        }
        Ok(())
    }
}

impl FromStr for Postfix {
    type Err = EvalError;

    /// Parse the space-separated form produced by `Display`.
    ///
    /// Only operands and operators are accepted; parentheses and any other
    /// word are [`EvalError::UnknownOperatorToken`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut postfix = Postfix::new();

        for word in s.split_whitespace() {
            let mut chars = word.chars();
            let class = match (chars.next(), chars.next()) {
                (Some(c), None) => classify(c),
                _ => Class::Invalid,
            };
            let token = match class {
                Class::Operand(value) => Token::Operand(value),
                Class::Operator(op) => op.as_bool_op().map_or(Token::Not, Token::Binary),
                _ => return Err(EvalError::UnknownOperatorToken(word.to_string())),
            };
            postfix.push(token);
        }

        Ok(postfix)
    }
}
