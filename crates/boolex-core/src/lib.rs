//! boolex: infix Boolean expression evaluator
//!
//! Evaluates expressions over the literals `T` and `F` with the operators
//! `&` (AND), `|` (OR), `@` (NAND), `$` (XOR) and prefix `!` (NOT).
//!
//! # Overview
//!
//! Evaluation is a single synchronous pass in three pure stages:
//!
//! - **Tokenize**: characters to typed [`Token`]s, whitespace dropped
//! - **Convert**: shunting-yard reordering into a [`Postfix`] sequence
//! - **Evaluate**: a boolean stack machine reduces the sequence to one value
//!
//! Precedence, loosest to tightest: `|`, then `&` `@` `$`, then `!`.
//! Operators of equal precedence apply left to right.
//!
//! # Example
//!
//! ```
//! use boolex_core::{evaluate, EvalError};
//!
//! // AND binds tighter than OR
//! assert_eq!(evaluate("T | F & F"), Ok(true));
//!
//! // Parentheses override precedence
//! assert_eq!(evaluate("(T | F) & F"), Ok(false));
//!
//! assert_eq!(evaluate("(T & F"), Err(EvalError::MismatchedParentheses));
//! ```
//!
//! # Inspecting the postfix form
//!
//! ```
//! use boolex_core::{evaluate_postfix, infix_to_postfix};
//!
//! let postfix = infix_to_postfix("!F & T").unwrap();
//! assert_eq!(postfix.to_string(), "F ! T &");
//! assert_eq!(evaluate_postfix(&postfix), Ok(true));
//! ```

pub mod convert;
pub mod error;
pub mod eval;
pub mod evaluator;
pub mod lexer;
pub mod limits;
pub mod postfix;
pub mod precedence;
pub mod token;

pub use convert::{infix_to_postfix, to_postfix, to_postfix_with_limits, Converter};
pub use error::EvalError;
pub use eval::evaluate_postfix;
pub use evaluator::{evaluate, Evaluator};
pub use lexer::tokenize;
pub use limits::Limits;
pub use postfix::Postfix;
pub use precedence::{classify, is_operator, precedence_of, Class, Operator, PRECEDENCE_TABLE};
pub use token::{BoolOp, Token};
