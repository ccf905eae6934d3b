//! Expression evaluator integration tests.

use proptest::prelude::*;

use rust_mathcards::core::{parse_tokens, Operator, Token};
use rust_mathcards::eval::{evaluate, normalize, try_evaluate};
use rust_mathcards::EvalError;

fn eval(raw: &[&str]) -> f64 {
    evaluate(&parse_tokens(raw).unwrap())
}

// =============================================================================
// Precedence and Concatenation
// =============================================================================

#[test]
fn test_precedence() {
    assert_eq!(eval(&["2", "+", "3", "*", "4"]), 14.0);
}

#[test]
fn test_placeholder_concatenation() {
    assert_eq!(eval(&["1", "?", "2"]), 12.0);
    assert_eq!(eval(&["1", "?", "?", "2", "?", "3"]), 123.0);
}

#[test]
fn test_placeholders_around_operators_are_ignored() {
    assert_eq!(eval(&["?", "8", "?", "/", "?", "2", "?"]), 4.0);
}

#[test]
fn test_real_division() {
    assert_eq!(eval(&["7", "/", "2"]), 3.5);
    assert_eq!(eval(&["1", "/", "4", "*", "2"]), 0.5);
}

// =============================================================================
// Failure Sentinels
// =============================================================================

#[test]
fn test_division_by_zero_is_non_finite() {
    let value = eval(&["5", "/", "0"]);
    assert!(!value.is_finite());
}

#[test]
fn test_malformed_is_nan() {
    assert!(eval(&[]).is_nan());
    assert!(eval(&["?"]).is_nan());
    assert!(eval(&["4", "-"]).is_nan());
    assert!(eval(&["^", "4"]).is_nan());
}

#[test]
fn test_try_evaluate_reports_reason() {
    let tokens = parse_tokens(&["4", "-"]).unwrap();
    assert_eq!(try_evaluate(&tokens), Err(EvalError::DanglingOperator(Operator::Sub)));
}

// =============================================================================
// Properties
// =============================================================================

fn token_strategy() -> impl Strategy<Value = Token> {
    prop_oneof![
        4 => (0u8..=9).prop_map(Token::digit),
        3 => prop::sample::select(Operator::ALL.to_vec()).prop_map(Token::Operator),
        1 => Just(Token::Placeholder),
    ]
}

proptest! {
    #[test]
    fn prop_evaluation_is_idempotent(tokens in prop::collection::vec(token_strategy(), 0..10)) {
        let first = evaluate(&tokens);
        let second = evaluate(&tokens);
        prop_assert!(first == second || (first.is_nan() && second.is_nan()));
    }

    #[test]
    fn prop_evaluate_never_panics_and_is_finite_or_nan(tokens in prop::collection::vec(token_strategy(), 0..12)) {
        let value = evaluate(&tokens);
        prop_assert!(value.is_finite() || value.is_nan());
    }

    #[test]
    fn prop_normalized_has_no_placeholders_or_adjacent_numbers(tokens in prop::collection::vec(token_strategy(), 0..12)) {
        let normalized = normalize(&tokens);
        prop_assert!(normalized.iter().all(|t| !t.is_placeholder()));
        prop_assert!(normalized.windows(2).all(|w| !(w[0].is_number() && w[1].is_number())));
    }

    #[test]
    fn prop_normalizing_preserves_value(tokens in prop::collection::vec(token_strategy(), 0..12)) {
        let original = evaluate(&tokens);
        let normalized = evaluate(&normalize(&tokens));
        prop_assert!(original == normalized || (original.is_nan() && normalized.is_nan()));
    }

    #[test]
    fn prop_digit_concatenation(a in 1u8..=9, b in 0u8..=9) {
        let tokens = vec![Token::digit(a), Token::Placeholder, Token::digit(b)];
        prop_assert_eq!(evaluate(&tokens), f64::from(a) * 10.0 + f64::from(b));
    }

    #[test]
    fn prop_addition_matches_arithmetic(a in 0u8..=9, b in 0u8..=9, c in 0u8..=9) {
        let tokens = vec![
            Token::digit(a),
            Token::Operator(Operator::Add),
            Token::digit(b),
            Token::Operator(Operator::Mul),
            Token::digit(c),
        ];
        prop_assert_eq!(evaluate(&tokens), f64::from(a) + f64::from(b) * f64::from(c));
    }
}
