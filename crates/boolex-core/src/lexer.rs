//! Tokenizer for infix expressions.

use logos::Logos;

use crate::error::EvalError;
use crate::token::Token;

/// Split `source` into tokens, discarding whitespace.
///
/// # Errors
///
/// Returns [`EvalError::InvalidCharacter`] for the first character that is
/// not an operand, operator, parenthesis or whitespace.
pub fn tokenize(source: &str) -> Result<Vec<Token>, EvalError> {
    let mut tokens = Vec::with_capacity(source.len());
    let mut lexer = Token::lexer(source);

    while let Some(token) = lexer.next() {
        match token {
            Ok(tok) => tokens.push(tok),
            Err(()) => {
                let position = lexer.span().start;
                // An error span always starts on a char boundary and is non-empty.
                let character = source[position..].chars().next().unwrap_or('\u{FFFD}');
                return Err(EvalError::InvalidCharacter {
                    character,
                    position,
                });
            }
        }
    }

    Ok(tokens)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::token::BoolOp;

    #[test]
    fn test_tokenize_simple() {
        let tokens = tokenize("T | F & F").unwrap();
        assert_eq!(
            tokens,
            vec![
                Token::Operand(true),
                Token::Binary(BoolOp::Or),
                Token::Operand(false),
                Token::Binary(BoolOp::And),
                Token::Operand(false),
            ]
        );
    }

    #[test]
    fn test_tokenize_without_spaces() {
        let tokens = tokenize("!(T@F)$T").unwrap();
        assert_eq!(
            tokens,
            vec![
                Token::Not,
                Token::GroupOpen,
                Token::Operand(true),
                Token::Binary(BoolOp::Nand),
                Token::Operand(false),
                Token::GroupClose,
                Token::Binary(BoolOp::Xor),
                Token::Operand(true),
            ]
        );
    }

    #[test]
    fn test_tokenize_empty() {
        assert_eq!(tokenize("").unwrap(), vec![]);
        assert_eq!(tokenize(" \t \n").unwrap(), vec![]);
    }

    #[test]
    fn test_invalid_character() {
        assert_eq!(
            tokenize("T X F"),
            Err(EvalError::InvalidCharacter {
                character: 'X',
                position: 2
            })
        );
    }

    #[test]
    fn test_lowercase_literal_is_invalid() {
        assert_eq!(
            tokenize("t"),
            Err(EvalError::InvalidCharacter {
                character: 't',
                position: 0
            })
        );
    }

    #[test]
    fn test_multibyte_invalid_character() {
        let err = tokenize("T ∧ F").unwrap_err();
        assert_eq!(err.character(), Some('∧'));
    }
}
