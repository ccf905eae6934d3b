//! Seeded random source for round generation.
//!
//! Generation is random by nature; tests and replays get determinism by
//! seeding, never by changing the generator.
//!
//! ```
//! use rust_mathcards::core::PuzzleRng;
//!
//! let mut rng = PuzzleRng::new(7);
//! let mut replay = PuzzleRng::new(7);
//! assert_eq!(rng.gen_range(1..=9), replay.gen_range(1..=9));
//!
//! // A fork is an independent, still reproducible, stream.
//! let mut round_rng = rng.fork();
//! let _ = round_rng.gen_range(0..=9);
//! ```

use std::ops::RangeInclusive;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

/// ChaCha8-backed RNG with forking and checkpointing.
#[derive(Clone, Debug)]
pub struct PuzzleRng {
    inner: ChaCha8Rng,
    seed: u64,
    fork_counter: u64,
}

impl PuzzleRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
            fork_counter: 0,
        }
    }

    /// Seed from OS entropy, for callers that want non-reproducible play.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(rand::thread_rng().gen())
    }

    /// Fork an independent stream. The n-th fork of a seed is always the same.
    #[must_use]
    pub fn fork(&mut self) -> Self {
        self.fork_counter += 1;
        let fork_seed = self
            .seed
            .wrapping_add(self.fork_counter.wrapping_mul(0x9E3779B97F4A7C15));
        Self {
            inner: ChaCha8Rng::seed_from_u64(fork_seed),
            seed: fork_seed,
            fork_counter: 0,
        }
    }

    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Uniform integer in an inclusive range. An empty range yields its start.
    pub fn gen_range(&mut self, range: RangeInclusive<i64>) -> i64 {
        if range.is_empty() {
            return *range.start();
        }
        self.inner.gen_range(range)
    }

    /// Uniform index in an inclusive range. An empty range yields its start.
    pub fn gen_range_usize(&mut self, range: RangeInclusive<usize>) -> usize {
        if range.is_empty() {
            return *range.start();
        }
        self.inner.gen_range(range)
    }

    /// Shuffle a slice in place.
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        use rand::seq::SliceRandom;
        slice.shuffle(&mut self.inner);
    }

    /// Choose a random element from a slice.
    #[must_use]
    pub fn choose<'a, T>(&mut self, slice: &'a [T]) -> Option<&'a T> {
        use rand::seq::SliceRandom;
        slice.choose(&mut self.inner)
    }

    /// Get the current state for serialization.
    #[must_use]
    pub fn state(&self) -> PuzzleRngState {
        PuzzleRngState {
            seed: self.seed,
            word_pos: self.inner.get_word_pos(),
            fork_counter: self.fork_counter,
        }
    }

    /// Restore from a saved state.
    #[must_use]
    pub fn from_state(state: &PuzzleRngState) -> Self {
        let mut inner = ChaCha8Rng::seed_from_u64(state.seed);
        inner.set_word_pos(state.word_pos);
        Self {
            inner,
            seed: state.seed,
            fork_counter: state.fork_counter,
        }
    }
}

/// Serializable RNG state for checkpointing a session.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PuzzleRngState {
    /// Original seed
    pub seed: u64,
    /// ChaCha8 word position (128-bit counter)
    pub word_pos: u128,
    /// Forks taken so far
    pub fork_counter: u64,
}
