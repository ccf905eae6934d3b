//! Expression evaluation.
//!
//! `evaluate` is the total, sentinel-returning form the game uses on every
//! submission; `try_evaluate` reports what went wrong.

pub mod evaluator;

pub use evaluator::{evaluate, evaluate_strs, normalize, try_evaluate};
