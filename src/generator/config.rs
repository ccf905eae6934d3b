//! Round generator parameters.

use serde::{Deserialize, Serialize};

use crate::search::SearchOptions;

/// Round generator parameters.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GeneratorOptions {
    /// Expression-first attempts before falling back to objective-first.
    pub max_attempts: u32,

    /// Objective-first attempts before the built-in round.
    pub fallback_attempts: u32,

    /// Re-solve every assembled round with the solvability search before
    /// accepting it.
    pub verify_solvable: bool,

    /// Search used for verification. Its operand cap is raised to the
    /// tier's if lower.
    pub search: SearchOptions,
}

impl Default for GeneratorOptions {
    fn default() -> Self {
        Self {
            max_attempts: 60,
            fallback_attempts: 10,
            verify_solvable: true,
            search: SearchOptions::default(),
        }
    }
}

impl GeneratorOptions {
    /// Set the expression-first attempt budget.
    #[must_use]
    pub fn with_max_attempts(mut self, attempts: u32) -> Self {
        self.max_attempts = attempts;
        self
    }

    /// Set the objective-first attempt budget.
    #[must_use]
    pub fn with_fallback_attempts(mut self, attempts: u32) -> Self {
        self.fallback_attempts = attempts;
        self
    }

    /// Enable or disable verification by search.
    #[must_use]
    pub fn with_verification(mut self, verify: bool) -> Self {
        self.verify_solvable = verify;
        self
    }

    /// Set the verification search options.
    #[must_use]
    pub fn with_search(mut self, search: SearchOptions) -> Self {
        self.search = search;
        self
    }
}
