//! Golden vector integration tests.
//!
//! These tests verify the complete pipeline from raw text to evaluation.

use boolex_core::{evaluate, infix_to_postfix, BoolOp, EvalError, Evaluator};

/// Evaluate an expression that must succeed.
fn eval_ok(expression: &str) -> bool {
    evaluate(expression).unwrap_or_else(|e| panic!("{expression:?} failed: {e}"))
}

#[test]
fn test_precedence_and_over_or() {
    // F & F = false, T | false = true
    assert!(eval_ok("T | F & F"));
    assert!(eval_ok("F & F | T"));
}

#[test]
fn test_parentheses_override_precedence() {
    assert!(!eval_ok("(T | F) & F"));
    assert!(!eval_ok("F & (F | T) & T"));
}

#[test]
fn test_not_binds_tightest() {
    // !F = true, true & T = true
    assert!(eval_ok("!F & T"));
    assert!(!eval_ok("!T | F"));
    assert!(!eval_ok("!(F | T)"));
}

#[test]
fn test_xor() {
    assert!(eval_ok("T $ F"));
    assert!(!eval_ok("T $ T"));
}

#[test]
fn test_nand() {
    assert!(!eval_ok("T @ T"));
    assert!(eval_ok("F @ F"));
}

/// Every binary operator against every operand pair.
#[test]
fn test_truth_tables() {
    let cases = [
        ('&', [false, false, false, true]),
        ('|', [false, true, true, true]),
        ('@', [true, true, true, false]),
        ('$', [false, true, true, false]),
    ];
    let operands = [("F", "F"), ("F", "T"), ("T", "F"), ("T", "T")];

    for (symbol, expected) in cases {
        for ((left, right), want) in operands.iter().zip(expected) {
            let expression = format!("{left} {symbol} {right}");
            assert_eq!(eval_ok(&expression), want, "Failed for {expression}");
        }
    }
}

/// Equal-precedence operators apply left to right.
///
/// `T @ T & F` is `(T @ T) & F = F`; grouping the other way gives `T`.
#[test]
fn test_left_to_right_at_equal_precedence() {
    assert!(!eval_ok("T @ T & F"));
    assert!(eval_ok("T @ (T & F)"));
}

#[test]
fn test_whitespace_is_ignored() {
    assert_eq!(evaluate("T|F&F"), evaluate(" \tT |  F &F \n"));
    assert!(eval_ok("!(T$F)@T"));
}

#[test]
fn test_nested_groups() {
    // (T $ T) | F
    assert!(!eval_ok("((T & (F | T)) $ (F @ F)) | F"));
    assert!(eval_ok("!((T & F) | (F $ F))"));
}

#[test]
fn test_mismatched_parentheses() {
    assert_eq!(evaluate("(T & F"), Err(EvalError::MismatchedParentheses));
    assert_eq!(evaluate("T & F)"), Err(EvalError::MismatchedParentheses));
    assert_eq!(evaluate(")("), Err(EvalError::MismatchedParentheses));
}

#[test]
fn test_double_binary_operator() {
    assert_eq!(
        evaluate("T & & F"),
        Err(EvalError::MalformedBinaryOperands(BoolOp::And))
    );
}

#[test]
fn test_invalid_character() {
    let err = evaluate("T X F").unwrap_err();
    assert_eq!(
        err,
        EvalError::InvalidCharacter {
            character: 'X',
            position: 2
        }
    );
    assert_eq!(err.character(), Some('X'));
}

#[test]
fn test_dangling_not() {
    assert_eq!(evaluate("!"), Err(EvalError::MalformedUnaryOperand));
    assert_eq!(evaluate("(!)"), Err(EvalError::MalformedUnaryOperand));
    assert_eq!(
        evaluate("T & !"),
        Err(EvalError::MalformedBinaryOperands(BoolOp::And))
    );
}

/// An incoming `!` never pops a stacked `!`. Under the `>=` rule the binary
/// operators use, `!!T` would convert to `! T !` and fail with
/// `MalformedUnaryOperand`; here it converts to `T ! !`.
#[test]
fn test_double_negation() {
    assert_eq!(evaluate("!!T"), Ok(true));
    assert_eq!(evaluate("!!F"), Ok(false));
    assert_eq!(evaluate("!!!T"), Ok(false));
    assert_eq!(evaluate("!!T & F"), Ok(false));
    assert_eq!(infix_to_postfix("!!T").unwrap().to_string(), "T ! !");
    assert_ne!(
        evaluate("!!T"),
        Err(EvalError::MalformedUnaryOperand),
        "prefix negation must not pop an earlier prefix negation"
    );
}

#[test]
fn test_missing_operator() {
    assert_eq!(
        evaluate("T F"),
        Err(EvalError::MalformedExpression { residual: 2 })
    );
    assert_eq!(
        evaluate("()"),
        Err(EvalError::MalformedExpression { residual: 0 })
    );
}

#[test]
fn test_empty_input_is_malformed() {
    assert_eq!(evaluate(""), Err(EvalError::MalformedExpression { residual: 0 }));
    assert_eq!(
        evaluate(" \t "),
        Err(EvalError::MalformedExpression { residual: 0 })
    );
}

#[test]
fn test_idempotent() {
    let evaluator = Evaluator::new();
    for expression in ["T | F & F", "!(T @ F) $ T", "(T & F"] {
        assert_eq!(evaluator.evaluate(expression), evaluator.evaluate(expression));
    }
}

#[test]
fn test_postfix_reference_form() {
    let cases = [
        ("T | F & F", "T F F & |"),
        ("(T | F) & F", "T F | F &"),
        ("!F & T", "F ! T &"),
        ("T $ F @ T | F", "T F $ T @ F |"),
    ];
    for (infix, postfix) in cases {
        assert_eq!(infix_to_postfix(infix).unwrap().to_string(), postfix);
    }
}
