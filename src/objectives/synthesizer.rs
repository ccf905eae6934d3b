//! Objective synthesis.
//!
//! Two directions:
//!
//! - **Sampling**: pick an allowed kind, then a parameter from the tier's
//!   ranges. Nothing guarantees a hand can reach it.
//! - **Derivation**: given a value a known expression produces, collect
//!   every allowed objective that value satisfies and pick one.

use crate::core::{DifficultyConfig, PuzzleRng};

use super::checker::{is_integral, is_power_of, is_table_prime};
use super::objective::{Objective, ObjectiveKind};

/// Objective synthesis for one difficulty configuration.
#[derive(Clone, Copy, Debug)]
pub struct ObjectiveSynthesizer<'a> {
    config: &'a DifficultyConfig,
}

impl<'a> ObjectiveSynthesizer<'a> {
    #[must_use]
    pub fn new(config: &'a DifficultyConfig) -> Self {
        Self { config }
    }

    /// Pick an allowed kind uniformly. `None` if the tier allows none.
    pub fn sample_kind(&self, rng: &mut PuzzleRng) -> Option<ObjectiveKind> {
        rng.choose(&self.config.objective_kinds).copied()
    }

    /// Pick an allowed kind from `candidates`, keeping the tier's gating.
    pub fn sample_kind_from(
        &self,
        candidates: &[ObjectiveKind],
        rng: &mut PuzzleRng,
    ) -> Option<ObjectiveKind> {
        let allowed: Vec<ObjectiveKind> = candidates
            .iter()
            .copied()
            .filter(|k| self.config.allows(*k))
            .collect();
        rng.choose(&allowed).copied()
    }

    /// Sample a parameter for `kind` from the configured ranges.
    pub fn sample_parameter(&self, kind: ObjectiveKind, rng: &mut PuzzleRng) -> Option<i64> {
        let ranges = &self.config.ranges;
        let n = match kind {
            ObjectiveKind::EqualTo => rng.gen_range(ranges.equal_target.clone()),
            ObjectiveKind::GreaterThan | ObjectiveKind::LessThan => {
                rng.gen_range(ranges.comparison_threshold.clone())
            }
            ObjectiveKind::DivisibleBy => rng.gen_range(ranges.divisor.clone()).max(1),
            ObjectiveKind::PowerOf => rng.gen_range(ranges.power_base.clone()).max(2),
            ObjectiveKind::FactorOf => rng.gen_range(ranges.factor_target.clone()),
            ObjectiveKind::Prime | ObjectiveKind::Odd | ObjectiveKind::Even => return None,
        };
        Some(n)
    }

    /// Sample a complete objective with no solvability guarantee.
    pub fn sample(&self, rng: &mut PuzzleRng) -> Option<Objective> {
        let kind = self.sample_kind(rng)?;
        let n = self.sample_parameter(kind, rng).unwrap_or(0);
        Some(kind.with_parameter(n))
    }

    /// Build an objective of `kind` that `value` satisfies, if the ranges allow one.
    pub fn derive_kind(
        &self,
        kind: ObjectiveKind,
        value: f64,
        rng: &mut PuzzleRng,
    ) -> Option<Objective> {
        if !value.is_finite() {
            return None;
        }
        let ranges = &self.config.ranges;
        let integral = is_integral(value) && value.abs() < i64::MAX as f64;

        let objective = match kind {
            ObjectiveKind::EqualTo => {
                if !integral {
                    return None;
                }
                Objective::EqualTo(value as i64)
            }
            ObjectiveKind::GreaterThan => {
                let gap = rng.gen_range(ranges.comparison_gap.clone()).max(1);
                Objective::GreaterThan(value.ceil() as i64 - gap)
            }
            ObjectiveKind::LessThan => {
                let gap = rng.gen_range(ranges.comparison_gap.clone()).max(1);
                Objective::LessThan(value.floor() as i64 + gap)
            }
            ObjectiveKind::DivisibleBy => {
                if !integral || value == 0.0 {
                    return None;
                }
                let v = value as i64;
                let divisors: Vec<i64> = ranges
                    .divisor
                    .clone()
                    .filter(|d| *d >= 2 && v % d == 0)
                    .collect();
                Objective::DivisibleBy(*rng.choose(&divisors)?)
            }
            ObjectiveKind::PowerOf => {
                if !integral || value < 2.0 {
                    return None;
                }
                let bases: Vec<i64> = ranges
                    .power_base
                    .clone()
                    .filter(|b| *b >= 2 && value >= *b as f64 && is_power_of(value, *b))
                    .collect();
                Objective::PowerOf(*rng.choose(&bases)?)
            }
            ObjectiveKind::FactorOf => {
                if !integral || value < 1.0 {
                    return None;
                }
                let v = value as i64;
                let start = *ranges.factor_target.start();
                let end = *ranges.factor_target.end();
                let lo = ((start + v - 1).div_euclid(v)).max(1);
                let hi = end.div_euclid(v);
                if lo > hi {
                    return None;
                }
                Objective::FactorOf(v * rng.gen_range(lo..=hi))
            }
            ObjectiveKind::Prime => {
                if !is_table_prime(value) {
                    return None;
                }
                Objective::Prime
            }
            ObjectiveKind::Odd | ObjectiveKind::Even => {
                if !integral {
                    return None;
                }
                let odd = (value % 2.0).abs() == 1.0;
                if odd == (kind == ObjectiveKind::Odd) {
                    kind.with_parameter(0)
                } else {
                    return None;
                }
            }
        };

        debug_assert!(objective.is_satisfied_by(value));
        Some(objective)
    }

    /// Pick one objective among every allowed kind `value` can satisfy.
    pub fn derive(&self, value: f64, rng: &mut PuzzleRng) -> Option<Objective> {
        let candidates: Vec<Objective> = self
            .config
            .objective_kinds
            .iter()
            .filter_map(|kind| self.derive_kind(*kind, value, rng))
            .collect();
        rng.choose(&candidates).copied()
    }
}
