//! Operator precedence table and character classifier.

use std::fmt;

use crate::token::BoolOp;

/// An operator of the expression language, unary or binary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    /// `|`
    Or,
    /// `&`
    And,
    /// `@`
    Nand,
    /// `$`
    Xor,
    /// `!`, prefix
    Not,
}

/// Every operator paired with its precedence. Higher binds tighter.
///
/// Entries follow the declaration order of [`Operator`], so an operator's
/// discriminant indexes its own row.
pub const PRECEDENCE_TABLE: [(Operator, u8); 5] = [
    (Operator::Or, 1),
    (Operator::And, 2),
    (Operator::Nand, 2),
    (Operator::Xor, 2),
    (Operator::Not, 3),
];

impl Operator {
    /// Precedence rank of this operator.
    pub const fn precedence(self) -> u8 {
        PRECEDENCE_TABLE[self as usize].1
    }

    pub fn symbol(self) -> char {
        match self {
            Operator::Or => '|',
            Operator::And => '&',
            Operator::Nand => '@',
            Operator::Xor => '$',
            Operator::Not => '!',
        }
    }

    pub fn from_symbol(symbol: char) -> Option<Self> {
        PRECEDENCE_TABLE
            .iter()
            .map(|&(op, _)| op)
            .find(|op| op.symbol() == symbol)
    }

    pub fn name(self) -> &'static str {
        match self {
            Operator::Or => "OR",
            Operator::And => "AND",
            Operator::Nand => "NAND",
            Operator::Xor => "XOR",
            Operator::Not => "NOT",
        }
    }

    /// The binary form of this operator, `None` for `Not`.
    pub fn as_bool_op(self) -> Option<BoolOp> {
        match self {
            Operator::Or => Some(BoolOp::Or),
            Operator::And => Some(BoolOp::And),
            Operator::Nand => Some(BoolOp::Nand),
            Operator::Xor => Some(BoolOp::Xor),
            Operator::Not => None,
        }
    }
}

impl From<BoolOp> for Operator {
    fn from(op: BoolOp) -> Self {
        match op {
            BoolOp::And => Operator::And,
            BoolOp::Or => Operator::Or,
            BoolOp::Nand => Operator::Nand,
            BoolOp::Xor => Operator::Xor,
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Precedence of an operator symbol, `None` if `symbol` is not an operator.
pub fn precedence_of(symbol: char) -> Option<u8> {
    PRECEDENCE_TABLE
        .iter()
        .find(|(op, _)| op.symbol() == symbol)
        .map(|&(_, rank)| rank)
}

/// Check if `symbol` is one of the five operator symbols.
pub fn is_operator(symbol: char) -> bool {
    precedence_of(symbol).is_some()
}

/// What a single source character means to the tokenizer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Class {
    Whitespace,
    Operand(bool),
    Operator(Operator),
    GroupOpen,
    GroupClose,
    Invalid,
}

/// Classify one character of an infix expression.
pub fn classify(c: char) -> Class {
    match c {
        ' ' | '\t' | '\n' | '\r' | '\x0B' | '\x0C' => Class::Whitespace,
        'T' => Class::Operand(true),
        'F' => Class::Operand(false),
        '(' => Class::GroupOpen,
        ')' => Class::GroupClose,
        _ => Operator::from_symbol(c).map_or(Class::Invalid, Class::Operator),
    }
}
