//! Token-sequence evaluation.
//!
//! Evaluation runs in two passes:
//!
//! 1. **Normalize**: drop placeholders and merge number tokens that end up
//!    adjacent, so `1 ? 2` reads as `12`.
//! 2. **Parse**: precedence climbing over the normalized stream. `^` binds
//!    tightest and groups right, then `* /`, then `+ -`. A leading `+`/`-`
//!    is a sign.
//!
//! Division is real-valued. Nothing is rounded.

use crate::core::{Operator, Token};
use crate::error::EvalError;

/// One element of a normalized expression.
#[derive(Clone, Debug, PartialEq)]
enum Item {
    Number(String),
    Op(Operator),
}

/// Drop placeholders and concatenate number tokens that become neighbours.
///
/// The result contains no placeholders and never two numbers in a row.
#[must_use]
pub fn normalize(tokens: &[Token]) -> Vec<Token> {
    let mut out: Vec<Token> = Vec::with_capacity(tokens.len());
    for token in tokens {
        match token {
            Token::Placeholder => {}
            Token::Number(digits) => match out.last_mut() {
                Some(Token::Number(prev)) => prev.push_str(digits),
                _ => out.push(token.clone()),
            },
            Token::Operator(_) => out.push(token.clone()),
        }
    }
    out
}

fn items(tokens: &[Token]) -> Vec<Item> {
    normalize(tokens)
        .into_iter()
        .filter_map(|t| match t {
            Token::Number(d) => Some(Item::Number(d)),
            Token::Operator(op) => Some(Item::Op(op)),
            Token::Placeholder => None,
        })
        .collect()
}

struct Parser {
    items: Vec<Item>,
    pos: usize,
}

impl Parser {
    fn peek_op(&self) -> Option<Operator> {
        match self.items.get(self.pos) {
            Some(Item::Op(op)) => Some(*op),
            _ => None,
        }
    }

    fn expression(&mut self, min_precedence: u8) -> Result<f64, EvalError> {
        let mut lhs = self.unary()?;

        while let Some(op) = self.peek_op() {
            if op.precedence() < min_precedence {
                break;
            }
            self.pos += 1;
            let next_min = if op.is_right_associative() {
                op.precedence()
            } else {
                op.precedence() + 1
            };
            let rhs = self.expression(next_min)?;
            lhs = op.apply(lhs, rhs);
        }

        Ok(lhs)
    }

    /// Consume a run of `+`/`-` signs. Returns true when the net sign is negative.
    fn signs(&mut self) -> Result<bool, EvalError> {
        let mut negative = false;
        while let Some(sign @ (Operator::Add | Operator::Sub)) = self.peek_op() {
            self.pos += 1;
            if self.pos >= self.items.len() {
                return Err(EvalError::DanglingOperator(sign));
            }
            negative ^= sign == Operator::Sub;
        }
        Ok(negative)
    }

    /// A signed power chain. A sign covers the chain after it, so
    /// `-2^2 == -(2^2)` and `2^-1^2 == 2^(-(1^2))`.
    fn unary(&mut self) -> Result<f64, EvalError> {
        let negative = self.signs()?;
        let base = self.primary()?;

        let mut exponents: Vec<(bool, f64)> = Vec::new();
        while self.peek_op() == Some(Operator::Pow) {
            self.pos += 1;
            let negative = self.signs()?;
            exponents.push((negative, self.primary()?));
        }

        // `^` groups right: fold the chain from its far end.
        let exponent = exponents
            .into_iter()
            .rev()
            .fold(None, |exponent, (negative, base)| {
                Some(signed(negative, raise(base, exponent)))
            });
        Ok(signed(negative, raise(base, exponent)))
    }

    fn primary(&mut self) -> Result<f64, EvalError> {
        match self.items.get(self.pos) {
            Some(Item::Number(digits)) => {
                self.pos += 1;
                digits
                    .parse::<f64>()
                    .map_err(|_| EvalError::BadLiteral(digits.clone()))
            }
            Some(Item::Op(op)) => Err(EvalError::MissingOperand {
                op: *op,
                position: self.pos,
            }),
            None => match self.pos.checked_sub(1).and_then(|i| self.items.get(i)) {
                Some(Item::Op(op)) => Err(EvalError::DanglingOperator(*op)),
                _ => Err(EvalError::Empty),
            },
        }
    }
}

fn raise(base: f64, exponent: Option<f64>) -> f64 {
    exponent.map_or(base, |e| Operator::Pow.apply(base, e))
}

fn signed(negative: bool, value: f64) -> f64 {
    if negative {
        -value
    } else {
        value
    }
}

/// Evaluate a token sequence, reporting why it has no value.
pub fn try_evaluate(tokens: &[Token]) -> Result<f64, EvalError> {
    let mut parser = Parser {
        items: items(tokens),
        pos: 0,
    };
    if parser.items.is_empty() {
        return Err(EvalError::Empty);
    }

    let value = parser.expression(0)?;

    // Normalization never leaves two numbers adjacent, so the loop above
    // always consumes the whole stream.
    debug_assert_eq!(parser.pos, parser.items.len());

    if value.is_finite() {
        Ok(value)
    } else {
        Err(EvalError::NonFinite(value))
    }
}

/// Evaluate a token sequence.
///
/// Returns `NaN` for an empty or malformed sequence and for non-finite
/// results such as division by zero. Callers check `is_finite()` before
/// trusting the value.
#[must_use]
pub fn evaluate(tokens: &[Token]) -> f64 {
    try_evaluate(tokens).unwrap_or(f64::NAN)
}

/// Evaluate raw token strings. An unparsable string makes the result `NaN`.
#[must_use]
pub fn evaluate_strs<S: AsRef<str>>(raw: &[S]) -> f64 {
    match crate::core::parse_tokens(raw) {
        Ok(tokens) => evaluate(&tokens),
        Err(err) => {
            tracing::debug!(%err, "expression contains a malformed token");
            f64::NAN
        }
    }
}
