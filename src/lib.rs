//! # rust-mathcards
//!
//! Puzzle-integrity engine for a math card game.
//!
//! A round deals a hand of number and operator cards together with an
//! objective such as `Divisible by 3` or `Prime number`. The player arranges
//! some of the cards into an expression whose value meets the objective.
//! This crate is everything behind that table:
//!
//! - evaluate an arrangement of cards
//! - check a value against an objective
//! - decide whether a hand can meet an objective at all
//! - generate rounds that are guaranteed solvable
//!
//! ## Design Principles
//!
//! 1. **Pure calls**: every operation is a synchronous function of its
//!    arguments. Tier configuration and randomness are passed in, never
//!    read from globals.
//!
//! 2. **Total at the edges**: evaluation returns `NaN` instead of failing,
//!    objective checks return `false`, and generation always yields a round.
//!    Structured errors are available through the `try_*` and `FromStr` paths.
//!
//! 3. **Seeded randomness**: a `PuzzleRng` seed reproduces every round.
//!
//! ## Modules
//!
//! - `core`: tokens, hands, difficulty configuration, RNG
//! - `eval`: expression evaluation
//! - `objectives`: objective kinds, checking, synthesis
//! - `search`: brute-force solvability search
//! - `generator`: solvable round generation
//! - `session`: per-game facade for the UI layer
//!
//! ## Example
//!
//! ```rust
//! use rust_mathcards::{check_objective, evaluate, generate_round, is_solvable};
//! use rust_mathcards::core::{parse_tokens, Difficulty, PuzzleRng};
//! use rust_mathcards::search::SearchOptions;
//!
//! let tokens = parse_tokens(&["2", "+", "3", "*", "4"]).unwrap();
//! assert_eq!(evaluate(&tokens), 14.0);
//! assert!(check_objective(8.0, "Power of 2"));
//!
//! let mut rng = PuzzleRng::new(7);
//! let round = generate_round(Difficulty::Hard, &mut rng);
//! let outcome = is_solvable(round.hand.tokens(), &round.objective.to_string(), &SearchOptions::default());
//! assert!(outcome.is_solvable());
//! ```

pub mod core;
pub mod error;
pub mod eval;
pub mod generator;
pub mod objectives;
pub mod search;
pub mod session;

// Re-export commonly used types
pub use crate::core::{
    Difficulty, DifficultyConfig, Hand, ObjectiveRanges, Operator, PuzzleRng, PuzzleRngState, Token,
};

pub use crate::error::{EvalError, ObjectiveParseError, TokenError};

pub use crate::eval::{evaluate, try_evaluate};

pub use crate::objectives::{check_objective, Objective, ObjectiveKind, ObjectiveSynthesizer};

pub use crate::search::{SearchOptions, SearchOutcome, SearchStats, Witness};

pub use crate::generator::{generate_round, GenerationPath, GeneratorOptions, Round, RoundGenerator};

pub use crate::session::{PuzzleSession, Verdict};

/// Can some arrangement of cards from `hand` meet the objective string?
///
/// An unrecognised objective is reported as unsolvable.
#[must_use]
pub fn is_solvable(hand: &[Token], objective: &str, options: &SearchOptions) -> SearchOutcome {
    search::is_solvable_str(hand, objective, options)
}
