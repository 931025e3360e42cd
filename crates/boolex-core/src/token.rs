//! Token vocabulary for Boolean expressions.
//!
//! Every token is a single character of source text. The lexer is derived
//! with `logos`; anything it does not recognize is reported by
//! [`crate::lexer::tokenize`] as an invalid character.

use std::fmt;

use logos::Logos;

use crate::precedence::Operator;

/// A lexical unit of an infix or postfix expression.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[logos(skip r"[ \t\n\r\x0B\x0C]+")]
pub enum Token {
    // === Literals ===
    /// Truth value literal: `T` or `F`
    #[token("T", |_| true)]
    #[token("F", |_| false)]
    Operand(bool),

    // === Logic Operators ===
    /// Binary operator: `&`, `|`, `@` or `$`
    #[token("&", |_| BoolOp::And)]
    #[token("|", |_| BoolOp::Or)]
    #[token("@", |_| BoolOp::Nand)]
    #[token("$", |_| BoolOp::Xor)]
    Binary(BoolOp),
    /// Prefix negation: `!`
    #[token("!")]
    Not,

    // === Grouping ===
    /// `(`
    #[token("(")]
    GroupOpen,
    /// `)`
    #[token(")")]
    GroupClose,
}

impl Token {
    /// The source character this token was scanned from.
    pub fn symbol(&self) -> char {
        match self {
            Token::Operand(true) => 'T',
            Token::Operand(false) => 'F',
            Token::Binary(op) => op.symbol(),
            Token::Not => '!',
            Token::GroupOpen => '(',
            Token::GroupClose => ')',
        }
    }

    /// Convert to an [`Operator`] if this is an operator token.
    pub fn operator(&self) -> Option<Operator> {
        match self {
            Token::Binary(op) => Some(Operator::from(*op)),
            Token::Not => Some(Operator::Not),
            _ => None,
        }
    }

    /// Check if this is a grouping token.
    pub fn is_group(&self) -> bool {
        matches!(self, Token::GroupOpen | Token::GroupClose)
    }

    /// Parse a token from its single-character symbol.
    pub fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            'T' => Some(Token::Operand(true)),
            'F' => Some(Token::Operand(false)),
            '!' => Some(Token::Not),
            '(' => Some(Token::GroupOpen),
            ')' => Some(Token::GroupClose),
            _ => BoolOp::from_symbol(symbol).map(Token::Binary),
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Binary boolean operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BoolOp {
    /// Logical AND: A ∧ B
    And,
    /// Logical OR: A ∨ B
    Or,
    /// Logical NAND: ¬(A ∧ B)
    Nand,
    /// Logical XOR: A ⊕ B
    Xor,
}

impl BoolOp {
    /// Evaluate this operation on two boolean values.
    ///
    /// `left` is the operand that appeared first in the source.
    #[inline]
    pub fn eval(self, left: bool, right: bool) -> bool {
        match self {
            BoolOp::And => left && right,
            BoolOp::Or => left || right,
            BoolOp::Nand => !(left && right),
            BoolOp::Xor => left != right,
        }
    }

    /// The operator's source symbol.
    pub fn symbol(self) -> char {
        match self {
            BoolOp::And => '&',
            BoolOp::Or => '|',
            BoolOp::Nand => '@',
            BoolOp::Xor => '$',
        }
    }

    /// Parse a binary operator from its symbol.
    pub fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            '&' => Some(BoolOp::And),
            '|' => Some(BoolOp::Or),
            '@' => Some(BoolOp::Nand),
            '$' => Some(BoolOp::Xor),
            _ => None,
        }
    }

    /// Upper-case operator name, e.g. `NAND`.
    pub fn name(self) -> &'static str {
        Operator::from(self).name()
    }
}

impl fmt::Display for BoolOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
