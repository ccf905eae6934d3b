//! Difficulty tiers and their configuration.
//!
//! A tier is picked once per session. Every core call receives the tier's
//! `DifficultyConfig` explicitly; nothing here is global.

use std::fmt;
use std::ops::RangeInclusive;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::objectives::ObjectiveKind;

use super::token::Operator;

/// Difficulty tier.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    #[default]
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    /// Reference configuration for this tier.
    #[must_use]
    pub fn config(self) -> DifficultyConfig {
        DifficultyConfig::for_difficulty(self)
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Difficulty {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "easy" => Ok(Difficulty::Easy),
            "medium" => Ok(Difficulty::Medium),
            "hard" => Ok(Difficulty::Hard),
            other => Err(format!("unknown difficulty: {other}")),
        }
    }
}

/// Numeric ranges for objective parameters.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ObjectiveRanges {
    /// Gap between a derived value and its `Greater than`/`Less than` threshold.
    pub comparison_gap: RangeInclusive<i64>,
    /// Thresholds for synthesized comparison objectives.
    pub comparison_threshold: RangeInclusive<i64>,
    /// Targets for synthesized `Equal to` objectives.
    pub equal_target: RangeInclusive<i64>,
    /// Divisors for `Divisible by`.
    pub divisor: RangeInclusive<i64>,
    /// Bases for `Power of`. Values below 2 are never used.
    pub power_base: RangeInclusive<i64>,
    /// Targets for `Factor of`.
    pub factor_target: RangeInclusive<i64>,
}

impl Default for ObjectiveRanges {
    fn default() -> Self {
        Self {
            comparison_gap: 1..=5,
            comparison_threshold: 0..=30,
            equal_target: 0..=50,
            divisor: 2..=9,
            power_base: 2..=5,
            factor_target: 10..=100,
        }
    }
}

/// Immutable per-tier configuration threaded through every core call.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DifficultyConfig {
    /// Tier this record was derived from.
    pub difficulty: Difficulty,

    /// Objective kinds that may be dealt.
    pub objective_kinds: Vec<ObjectiveKind>,

    /// Operators used in solutions and distractors.
    pub operators: Vec<Operator>,

    /// Values for solution operands. Cards are single digits, so draws are
    /// clamped to `0..=9`.
    pub operand_range: RangeInclusive<u8>,

    /// Values for distractor number cards, clamped like `operand_range`.
    pub distractor_range: RangeInclusive<u8>,

    /// How many operands a generated solution uses.
    pub operand_count: RangeInclusive<usize>,

    /// Cards per hand.
    pub hand_size: usize,

    /// Padding adds number cards until the hand holds this many.
    pub min_numbers: usize,

    /// Only positive integral solution values are accepted.
    pub require_positive_integer: bool,

    /// Objective parameter ranges.
    pub ranges: ObjectiveRanges,
}

impl DifficultyConfig {
    /// Reference configuration for a tier.
    #[must_use]
    pub fn for_difficulty(difficulty: Difficulty) -> Self {
        use ObjectiveKind::*;

        let (objective_kinds, operators, operand_count, require_positive_integer) = match difficulty {
            Difficulty::Easy => (
                vec![EqualTo, GreaterThan, LessThan, Odd, Even],
                vec![Operator::Add, Operator::Sub],
                1..=2,
                false,
            ),
            Difficulty::Medium => (
                vec![EqualTo, GreaterThan, LessThan, DivisibleBy, Prime, Odd, Even],
                vec![Operator::Add, Operator::Sub, Operator::Mul],
                1..=3,
                false,
            ),
            Difficulty::Hard => (
                vec![EqualTo, DivisibleBy, PowerOf, FactorOf, Prime, Odd, Even],
                Operator::ALL.to_vec(),
                2..=3,
                true,
            ),
        };

        Self {
            difficulty,
            objective_kinds,
            operators,
            operand_range: 1..=9,
            distractor_range: 0..=9,
            operand_count,
            hand_size: 8,
            min_numbers: 5,
            require_positive_integer,
            ranges: ObjectiveRanges::default(),
        }
    }

    /// Replace the allowed objective kinds.
    #[must_use]
    pub fn with_objective_kinds(mut self, kinds: impl IntoIterator<Item = ObjectiveKind>) -> Self {
        self.objective_kinds = kinds.into_iter().collect();
        self
    }

    /// Replace the operator pool.
    #[must_use]
    pub fn with_operators(mut self, operators: impl IntoIterator<Item = Operator>) -> Self {
        self.operators = operators.into_iter().collect();
        self
    }

    /// Set the solution operand count range.
    #[must_use]
    pub fn with_operand_count(mut self, count: RangeInclusive<usize>) -> Self {
        self.operand_count = count;
        self
    }

    /// Set the solution operand range, clamped to single digits.
    #[must_use]
    pub fn with_operand_range(mut self, range: RangeInclusive<u8>) -> Self {
        self.operand_range = clamp_digits(&range);
        self
    }

    /// Set the distractor range, clamped to single digits.
    #[must_use]
    pub fn with_distractor_range(mut self, range: RangeInclusive<u8>) -> Self {
        self.distractor_range = clamp_digits(&range);
        self
    }

    /// Set the hand size.
    #[must_use]
    pub fn with_hand_size(mut self, size: usize) -> Self {
        self.hand_size = size;
        self
    }

    /// Set objective parameter ranges.
    #[must_use]
    pub fn with_ranges(mut self, ranges: ObjectiveRanges) -> Self {
        self.ranges = ranges;
        self
    }

    /// Is this objective kind dealt at this tier?
    #[must_use]
    pub fn allows(&self, kind: ObjectiveKind) -> bool {
        self.objective_kinds.contains(&kind)
    }

    /// Largest operand count a solution may use.
    #[must_use]
    pub fn max_operands(&self) -> usize {
        *self.operand_count.end()
    }

    /// Draw bounds for solution operands.
    ///
    /// Fields may be set directly or deserialized, so the clamp is applied
    /// again here.
    #[must_use]
    pub fn operand_digits(&self) -> RangeInclusive<i64> {
        widen(&clamp_digits(&self.operand_range))
    }

    /// Draw bounds for distractor number cards.
    #[must_use]
    pub fn distractor_digits(&self) -> RangeInclusive<i64> {
        widen(&clamp_digits(&self.distractor_range))
    }
}

fn clamp_digits(range: &RangeInclusive<u8>) -> RangeInclusive<u8> {
    (*range.start()).min(9)..=(*range.end()).min(9)
}

fn widen(range: &RangeInclusive<u8>) -> RangeInclusive<i64> {
    i64::from(*range.start())..=i64::from(*range.end())
}

impl Default for DifficultyConfig {
    fn default() -> Self {
        Self::for_difficulty(Difficulty::default())
    }
}
