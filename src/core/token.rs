//! Tokens and hands.
//!
//! A token is the atomic unit the UI moves around: a run of decimal digits,
//! one of the five operators, or the placeholder marker `?` that stands for an
//! empty result slot. Tokens carry no identity beyond their string value.

use std::fmt;
use std::str::FromStr;

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::error::TokenError;

/// Placeholder marker for an empty slot.
pub const PLACEHOLDER: &str = "?";

/// Arithmetic operator.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Operator {
    Add,
    Sub,
    Mul,
    Div,
    Pow,
}

impl Operator {
    /// All operators, in display order.
    pub const ALL: [Operator; 5] = [
        Operator::Add,
        Operator::Sub,
        Operator::Mul,
        Operator::Div,
        Operator::Pow,
    ];

    /// Canonical symbol.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Operator::Add => "+",
            Operator::Sub => "-",
            Operator::Mul => "*",
            Operator::Div => "/",
            Operator::Pow => "^",
        }
    }

    /// Parse a symbol, accepting the display aliases `x`, `×` and `÷`.
    #[must_use]
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        match symbol {
            "+" => Some(Operator::Add),
            "-" | "−" => Some(Operator::Sub),
            "*" | "x" | "X" | "×" => Some(Operator::Mul),
            "/" | "÷" => Some(Operator::Div),
            "^" => Some(Operator::Pow),
            _ => None,
        }
    }

    /// Binding strength. Higher binds tighter.
    #[must_use]
    pub const fn precedence(self) -> u8 {
        match self {
            Operator::Add | Operator::Sub => 1,
            Operator::Mul | Operator::Div => 2,
            Operator::Pow => 3,
        }
    }

    /// Only `^` groups to the right.
    #[must_use]
    pub const fn is_right_associative(self) -> bool {
        matches!(self, Operator::Pow)
    }

    /// Apply to two operands with real-valued semantics.
    ///
    /// Division by zero yields a non-finite value instead of failing.
    #[must_use]
    pub fn apply(self, lhs: f64, rhs: f64) -> f64 {
        match self {
            Operator::Add => lhs + rhs,
            Operator::Sub => lhs - rhs,
            Operator::Mul => lhs * rhs,
            Operator::Div => lhs / rhs,
            Operator::Pow => lhs.powf(rhs),
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// A single card token.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Token {
    /// Non-negative decimal number, kept as its literal digits.
    Number(String),
    /// Arithmetic operator.
    Operator(Operator),
    /// Empty slot marker, removed before evaluation.
    Placeholder,
}

impl Token {
    /// Number token from a non-negative integer.
    #[must_use]
    pub fn number(value: u32) -> Self {
        Token::Number(value.to_string())
    }

    /// Single-digit token. Values above 9 are reduced modulo 10.
    #[must_use]
    pub fn digit(value: u8) -> Self {
        Token::Number(char::from(b'0' + value % 10).to_string())
    }

    #[must_use]
    pub const fn op(op: Operator) -> Self {
        Token::Operator(op)
    }

    #[must_use]
    pub fn is_number(&self) -> bool {
        matches!(self, Token::Number(_))
    }

    #[must_use]
    pub fn is_operator(&self) -> bool {
        matches!(self, Token::Operator(_))
    }

    #[must_use]
    pub fn is_placeholder(&self) -> bool {
        matches!(self, Token::Placeholder)
    }

    /// True for a number token made of exactly one digit.
    #[must_use]
    pub fn is_single_digit(&self) -> bool {
        matches!(self, Token::Number(d) if d.len() == 1)
    }

    /// The digits of a number token.
    #[must_use]
    pub fn digits(&self) -> Option<&str> {
        match self {
            Token::Number(d) => Some(d),
            _ => None,
        }
    }

    /// The operator of an operator token.
    #[must_use]
    pub fn as_operator(&self) -> Option<Operator> {
        match self {
            Token::Operator(op) => Some(*op),
            _ => None,
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Number(d) => f.write_str(d),
            Token::Operator(op) => f.write_str(op.symbol()),
            Token::Placeholder => f.write_str(PLACEHOLDER),
        }
    }
}

impl FromStr for Token {
    type Err = TokenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(TokenError::Empty);
        }
        if trimmed == PLACEHOLDER {
            return Ok(Token::Placeholder);
        }
        if let Some(op) = Operator::from_symbol(trimmed) {
            return Ok(Token::Operator(op));
        }
        if trimmed.bytes().all(|b| b.is_ascii_digit()) {
            return Ok(Token::Number(trimmed.to_string()));
        }
        Err(TokenError::Unrecognized(s.to_string()))
    }
}

impl TryFrom<String> for Token {
    type Error = TokenError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Token> for String {
    fn from(token: Token) -> Self {
        token.to_string()
    }
}

impl From<Operator> for Token {
    fn from(op: Operator) -> Self {
        Token::Operator(op)
    }
}

/// Parse a list of raw strings, failing on the first bad one.
pub fn parse_tokens<S: AsRef<str>>(raw: &[S]) -> Result<Vec<Token>, TokenError> {
    raw.iter().map(|s| s.as_ref().parse()).collect()
}

/// Render tokens separated by single spaces.
#[must_use]
pub fn render(tokens: &[Token]) -> String {
    let mut out = String::new();
    for (i, token) in tokens.iter().enumerate() {
        if i > 0 {
            out.push(' ');
        }
        out.push_str(&token.to_string());
    }
    out
}

/// Token counts, used for sub-multiset checks.
pub fn token_counts<'a>(tokens: impl IntoIterator<Item = &'a Token>) -> FxHashMap<&'a Token, usize> {
    let mut counts = FxHashMap::default();
    for token in tokens {
        *counts.entry(token).or_insert(0) += 1;
    }
    counts
}

/// True if every token of `needle` occurs in `haystack` at least as often.
#[must_use]
pub fn is_sub_multiset(needle: &[Token], haystack: &[Token]) -> bool {
    let available = token_counts(haystack);
    token_counts(needle)
        .into_iter()
        .all(|(token, needed)| available.get(token).copied().unwrap_or(0) >= needed)
}

/// The tokens dealt to a player for one round.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Hand(Vec<Token>);

impl Hand {
    #[must_use]
    pub fn new(tokens: Vec<Token>) -> Self {
        Self(tokens)
    }

    /// Build a hand from raw strings, skipping anything that is not a token.
    ///
    /// Placeholders are not cards and are skipped as well.
    pub fn from_strs<S: AsRef<str>>(raw: &[S]) -> Self {
        let mut tokens = Vec::with_capacity(raw.len());
        for (index, s) in raw.iter().enumerate() {
            match s.as_ref().parse::<Token>() {
                Ok(Token::Placeholder) => {
                    tracing::warn!(index, "placeholder is not a hand card, skipping");
                }
                Ok(token) => tokens.push(token),
                Err(err) => {
                    tracing::warn!(index, %err, "skipping malformed hand token");
                }
            }
        }
        Self(tokens)
    }

    #[must_use]
    pub fn tokens(&self) -> &[Token] {
        &self.0
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number tokens, in hand order.
    pub fn numbers(&self) -> impl Iterator<Item = &Token> {
        self.0.iter().filter(|t| t.is_number())
    }

    /// Operator tokens, in hand order.
    pub fn operators(&self) -> impl Iterator<Item = Operator> + '_ {
        self.0.iter().filter_map(Token::as_operator)
    }

    /// Does the hand hold every token in `required`, with multiplicity?
    #[must_use]
    pub fn contains_all(&self, required: &[Token]) -> bool {
        is_sub_multiset(required, &self.0)
    }

    #[must_use]
    pub fn into_inner(self) -> Vec<Token> {
        self.0
    }
}

impl From<Vec<Token>> for Hand {
    fn from(tokens: Vec<Token>) -> Self {
        Self(tokens)
    }
}

impl AsRef<[Token]> for Hand {
    fn as_ref(&self) -> &[Token] {
        &self.0
    }
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]", render(&self.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_tokens() {
        assert_eq!("7".parse::<Token>().unwrap(), Token::number(7));
        assert_eq!("12".parse::<Token>().unwrap(), Token::Number("12".into()));
        assert_eq!("?".parse::<Token>().unwrap(), Token::Placeholder);
        assert_eq!("^".parse::<Token>().unwrap(), Token::op(Operator::Pow));
    }

    #[test]
    fn test_parse_aliases() {
        assert_eq!("x".parse::<Token>().unwrap(), Token::op(Operator::Mul));
        assert_eq!("÷".parse::<Token>().unwrap(), Token::op(Operator::Div));
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert_eq!("".parse::<Token>(), Err(TokenError::Empty));
        assert!(matches!("1a".parse::<Token>(), Err(TokenError::Unrecognized(_))));
        assert!(matches!("-3".parse::<Token>(), Err(TokenError::Unrecognized(_))));
    }

    #[test]
    fn test_display_is_canonical() {
        let tokens = parse_tokens(&["3", "x", "4", "÷", "2"]).unwrap();
        assert_eq!(render(&tokens), "3 * 4 / 2");
    }

    #[test]
    fn test_digit_wraps() {
        assert_eq!(Token::digit(4), Token::number(4));
        assert_eq!(Token::digit(14), Token::number(4));
        assert!(Token::digit(0).is_single_digit());
        assert!(!Token::number(10).is_single_digit());
    }

    #[test]
    fn test_sub_multiset() {
        let hand = parse_tokens(&["2", "2", "+", "3"]).unwrap();
        assert!(is_sub_multiset(&parse_tokens(&["2", "+", "2"]).unwrap(), &hand));
        assert!(!is_sub_multiset(&parse_tokens(&["3", "+", "3"]).unwrap(), &hand));
        assert!(is_sub_multiset(&[], &hand));
    }

    #[test]
    fn test_hand_from_strs_skips_bad_tokens() {
        let hand = Hand::from_strs(&["1", "bogus", "+", "?", "9"]);
        assert_eq!(hand.len(), 3);
        assert_eq!(hand.numbers().count(), 2);
        assert_eq!(hand.operators().collect::<Vec<_>>(), vec![Operator::Add]);
    }

    #[test]
    fn test_token_serde_as_string() {
        let token = Token::op(Operator::Div);
        let json = serde_json::to_string(&token).unwrap();
        assert_eq!(json, "\"/\"");
        let back: Token = serde_json::from_str(&json).unwrap();
        assert_eq!(back, token);

        let hand = Hand::from_strs(&["1", "+", "2"]);
        let json = serde_json::to_string(&hand).unwrap();
        assert_eq!(json, "[\"1\",\"+\",\"2\"]");
    }

    #[test]
    fn test_operator_apply() {
        assert_eq!(Operator::Div.apply(7.0, 2.0), 3.5);
        assert_eq!(Operator::Pow.apply(2.0, 10.0), 1024.0);
        assert!(!Operator::Div.apply(5.0, 0.0).is_finite());
    }
}
