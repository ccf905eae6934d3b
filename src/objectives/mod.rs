//! Objectives: the win condition a round asks the player to meet.
//!
//! - `objective`: the closed set of kinds and their string grammar
//! - `checker`: does a value satisfy an objective?
//! - `synthesizer`: tier-gated sampling and value-driven derivation

pub mod checker;
pub mod objective;
pub mod synthesizer;

pub use checker::{check, check_objective, is_table_prime, SMALL_PRIMES};
pub use objective::{Objective, ObjectiveKind};
pub use synthesizer::ObjectiveSynthesizer;
