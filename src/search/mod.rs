//! Objective solvability search.
//!
//! ## Overview
//!
//! Given a hand and an objective, find an arrangement of some of the hand's
//! cards whose value meets the objective:
//!
//! - **Fast path**: single number cards, then two single-digit cards read as
//!   one two-digit number. Most objectives are met here.
//! - **Enumeration**: for `k = 1..=max_operands`, every ordering of `k`
//!   number cards interleaved with every distinct ordering of `k - 1`
//!   operator cards. Duplicate expressions, literal `/ 0`, non-finite and
//!   out-of-bound values are skipped.
//!
//! ## Usage
//!
//! ```rust
//! use rust_mathcards::core::parse_tokens;
//! use rust_mathcards::objectives::Objective;
//! use rust_mathcards::search::{is_solvable, SearchOptions};
//!
//! let hand = parse_tokens(&["2", "3", "4", "+", "*"]).unwrap();
//! let outcome = is_solvable(&hand, &Objective::EqualTo(14), &SearchOptions::default());
//! assert!(outcome.is_solvable());
//! ```

pub mod config;
pub mod solvability;
pub mod stats;

pub use config::SearchOptions;
pub use solvability::{is_solvable, is_solvable_str, SearchOutcome, SolvabilitySearch, Witness};
pub use stats::{SearchPhase, SearchStats};
