//! Search statistics for diagnostics and tuning.

use serde::{Deserialize, Serialize};

/// Which stage of the search produced the witness.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SearchPhase {
    /// A single card or a two-digit concatenation.
    FastPath,
    /// Full enumeration of number/operator arrangements.
    Combinatorial,
}

/// Statistics collected during one solvability search.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchStats {
    /// Single cards and concatenations tried.
    pub fast_path_checks: u32,

    /// Candidate expressions produced by enumeration.
    pub candidates: u32,

    /// Candidates dropped because an identical expression was already seen.
    pub duplicates: u32,

    /// Candidates skipped for containing a literal `/ 0`.
    pub zero_divisions: u32,

    /// Candidates actually evaluated.
    pub evaluations: u32,

    /// Evaluated candidates dropped as non-finite or out of bounds.
    pub discarded: u32,

    /// Where the witness came from, if one was found.
    pub found_in: Option<SearchPhase>,

    /// Total time spent searching (microseconds).
    pub time_us: u64,
}

impl SearchStats {
    /// Fraction of enumerated candidates that reached the evaluator.
    #[must_use]
    pub fn evaluation_ratio(&self) -> f64 {
        if self.candidates == 0 {
            0.0
        } else {
            self.evaluations as f64 / self.candidates as f64
        }
    }
}

impl std::fmt::Display for SearchStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "fast={} candidates={} dup={} div0={} eval={} discarded={} found={:?} ({}us)",
            self.fast_path_checks,
            self.candidates,
            self.duplicates,
            self.zero_divisions,
            self.evaluations,
            self.discarded,
            self.found_in,
            self.time_us,
        )
    }
}
