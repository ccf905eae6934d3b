//! Generated rounds and generation diagnostics.

use serde::{Deserialize, Serialize};

use crate::core::{render, Hand, Token};
use crate::eval::evaluate;
use crate::objectives::{check, Objective};

/// One dealt puzzle: a hand, an objective, and a known solution.
///
/// Invariants upheld by the generator:
/// - `evaluate(&solution) == value`
/// - `objective` is satisfied by `value`
/// - `solution` is a sub-multiset of `hand`
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Round {
    pub hand: Hand,
    pub objective: Objective,
    pub solution: Vec<Token>,
    pub value: f64,
}

impl Round {
    /// Check the three round invariants.
    #[must_use]
    pub fn is_consistent(&self) -> bool {
        evaluate(&self.solution) == self.value
            && check(self.value, &self.objective)
            && self.hand.contains_all(&self.solution)
    }
}

impl std::fmt::Display for Round {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} | {} | {} = {}",
            self.hand,
            self.objective,
            render(&self.solution),
            self.value
        )
    }
}

/// Which stage of the fallback chain produced a round.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GenerationPath {
    /// A random expression, with an objective derived from its value.
    ExpressionFirst,
    /// A trivial objective with a trivial solution.
    ObjectiveFirst,
    /// The built-in round.
    LastResort,
}

/// Why expression-first attempts were thrown away.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rejections {
    /// Value was non-finite.
    pub non_finite: u32,
    /// Value was out of the search's bounds or not a positive integer where
    /// the tier requires one.
    pub unusable_value: u32,
    /// No allowed objective kind fits the value.
    pub no_objective: u32,
    /// Hand could not hold the solution.
    pub hand_mismatch: u32,
    /// Search could not re-solve the assembled round.
    pub unsolvable: u32,
}

impl Rejections {
    #[must_use]
    pub fn total(&self) -> u32 {
        self.non_finite + self.unusable_value + self.no_objective + self.hand_mismatch + self.unsolvable
    }
}

/// A round plus how it was produced.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GenerationReport {
    pub round: Round,
    pub path: GenerationPath,
    /// Expression-first attempts used, including the successful one.
    pub attempts: u32,
    pub rejections: Rejections,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::parse_tokens;

    fn round(hand: &[&str], objective: Objective, solution: &[&str], value: f64) -> Round {
        Round {
            hand: Hand::new(parse_tokens(hand).unwrap()),
            objective,
            solution: parse_tokens(solution).unwrap(),
            value,
        }
    }

    #[test]
    fn test_consistency() {
        let good = round(&["1", "+", "2", "7"], Objective::EqualTo(3), &["1", "+", "2"], 3.0);
        assert!(good.is_consistent());

        let wrong_value = round(&["1", "+", "2"], Objective::EqualTo(3), &["1", "+", "2"], 4.0);
        assert!(!wrong_value.is_consistent());

        let unmet = round(&["1", "+", "2"], Objective::Even, &["1", "+", "2"], 3.0);
        assert!(!unmet.is_consistent());

        let missing_card = round(&["1", "2"], Objective::EqualTo(3), &["1", "+", "2"], 3.0);
        assert!(!missing_card.is_consistent());
    }

    #[test]
    fn test_round_serde() {
        let r = round(&["4", "*", "2"], Objective::PowerOf(2), &["4", "*", "2"], 8.0);
        let json = serde_json::to_string(&r).unwrap();
        assert!(json.contains("\"Power of 2\""));
        let back: Round = serde_json::from_str(&json).unwrap();
        assert_eq!(back, r);
    }

    #[test]
    fn test_display() {
        let r = round(&["4", "*", "2"], Objective::PowerOf(2), &["4", "*", "2"], 8.0);
        assert_eq!(r.to_string(), "[4 * 2] | Power of 2 | 4 * 2 = 8");
    }
}
