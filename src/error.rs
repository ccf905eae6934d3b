//! Error types for the structured entry points.
//!
//! The convenience API never returns these: evaluation reports a `NaN`
//! sentinel, objective checks report `false`, and generation always yields a
//! round. These enums are what the `try_*` and `FromStr` paths expose.

use thiserror::Error;

use crate::core::Operator;

/// A raw string that is not a token.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum TokenError {
    #[error("empty token")]
    Empty,
    #[error("unrecognized token: {0:?}")]
    Unrecognized(String),
}

/// An objective string that does not follow `<Kind>[ <integer>]`.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ObjectiveParseError {
    #[error("unknown objective kind: {0:?}")]
    UnknownKind(String),
    #[error("objective {0:?} needs an integer parameter")]
    MissingParameter(&'static str),
    #[error("objective {0:?} takes no parameter")]
    UnexpectedParameter(&'static str),
    #[error("invalid objective parameter: {0:?}")]
    InvalidParameter(String),
}

/// Why a token sequence has no numeric value.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum EvalError {
    #[error("expression is empty")]
    Empty,
    #[error("expression ends after operator {0}")]
    DanglingOperator(Operator),
    #[error("operator {op} at position {position} has no left operand")]
    MissingOperand { op: Operator, position: usize },
    #[error("number literal {0:?} is not representable")]
    BadLiteral(String),
    #[error("expression evaluates to a non-finite value ({0})")]
    NonFinite(f64),
}
