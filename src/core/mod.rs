//! Core types: tokens, hands, difficulty configuration, RNG.
//!
//! Everything else in the crate is built from these. None of them hold
//! mutable shared state; a hand or a config is a plain value.

pub mod config;
pub mod rng;
pub mod token;

pub use config::{Difficulty, DifficultyConfig, ObjectiveRanges};
pub use rng::{PuzzleRng, PuzzleRngState};
pub use token::{is_sub_multiset, parse_tokens, render, Hand, Operator, Token, PLACEHOLDER};
