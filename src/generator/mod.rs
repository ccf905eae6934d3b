//! Solvable round generation.
//!
//! The generator is the inverse of the solvability search: it starts from a
//! solution and builds a round around it, so every round it deals can be
//! solved by construction.
//!
//! ```rust
//! use rust_mathcards::core::{Difficulty, PuzzleRng};
//! use rust_mathcards::generator::RoundGenerator;
//!
//! let generator = RoundGenerator::for_difficulty(Difficulty::Medium);
//! let mut rng = PuzzleRng::new(42);
//! let round = generator.generate(&mut rng);
//! assert!(round.is_consistent());
//! ```

pub mod config;
pub mod hand;
pub mod round;
pub mod solvable;

pub use config::GeneratorOptions;
pub use hand::assemble_hand;
pub use round::{GenerationPath, GenerationReport, Rejections, Round};
pub use solvable::{generate_round, last_resort_round, RoundGenerator};
