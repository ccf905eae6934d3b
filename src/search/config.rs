//! Solvability search parameters.

use serde::{Deserialize, Serialize};

/// Solvability search parameters.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SearchOptions {
    /// Most number cards a candidate expression may use. A two-digit
    /// concatenation on the fast path uses two.
    pub max_operands: usize,

    /// Candidates whose magnitude exceeds this are discarded.
    /// Keeps power chains from producing runaway values.
    pub magnitude_bound: f64,

    /// Try single cards and two-digit concatenations before enumerating.
    pub fast_path: bool,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            max_operands: 3,
            magnitude_bound: 1e9,
            fast_path: true,
        }
    }
}

impl SearchOptions {
    /// Set the operand cap.
    #[must_use]
    pub fn with_max_operands(mut self, max_operands: usize) -> Self {
        self.max_operands = max_operands;
        self
    }

    /// Set the magnitude bound.
    #[must_use]
    pub fn with_magnitude_bound(mut self, bound: f64) -> Self {
        self.magnitude_bound = bound;
        self
    }

    /// Enable or disable the fast path.
    #[must_use]
    pub fn with_fast_path(mut self, enabled: bool) -> Self {
        self.fast_path = enabled;
        self
    }

    /// Is `value` a usable search result?
    #[must_use]
    pub fn in_bounds(&self, value: f64) -> bool {
        value.is_finite() && value.abs() <= self.magnitude_bound
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_options() {
        let options = SearchOptions::default();
        assert_eq!(options.max_operands, 3);
        assert_eq!(options.magnitude_bound, 1e9);
        assert!(options.fast_path);
    }

    #[test]
    fn test_builder_pattern() {
        let options = SearchOptions::default()
            .with_max_operands(2)
            .with_magnitude_bound(100.0)
            .with_fast_path(false);

        assert_eq!(options.max_operands, 2);
        assert!(!options.fast_path);
        assert!(options.in_bounds(-100.0));
        assert!(!options.in_bounds(100.5));
        assert!(!options.in_bounds(f64::NAN));
    }
}
