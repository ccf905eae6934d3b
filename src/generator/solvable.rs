//! Solvable round generation.
//!
//! Generation works backwards from a solution:
//!
//! 1. **Expression-first** (up to `max_attempts`): deal a short random
//!    expression from the tier's operands and operators, evaluate it, derive
//!    an objective its value meets, and build a hand around it.
//! 2. **Objective-first** (up to `fallback_attempts`): `Equal to` a random
//!    two-operand expression, or a single card labelled by its parity.
//! 3. **Last resort**: a fixed round that is always solvable.
//!
//! Generation never fails. With `verify_solvable` set, every round it
//! returns has also been re-solved by the solvability search.

use crate::core::{Difficulty, DifficultyConfig, Hand, Operator, PuzzleRng, Token};
use crate::eval::evaluate;
use crate::objectives::{checker::is_integral, Objective, ObjectiveKind, ObjectiveSynthesizer};
use crate::search::{is_solvable, SearchOptions};

use super::config::GeneratorOptions;
use super::hand::assemble_hand;
use super::round::{GenerationPath, GenerationReport, Rejections, Round};

/// Why a single attempt was discarded.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Rejection {
    NonFinite,
    UnusableValue,
    NoObjective,
    HandMismatch,
    Unsolvable,
}

impl Rejections {
    fn record(&mut self, rejection: Rejection) {
        match rejection {
            Rejection::NonFinite => self.non_finite += 1,
            Rejection::UnusableValue => self.unusable_value += 1,
            Rejection::NoObjective => self.no_objective += 1,
            Rejection::HandMismatch => self.hand_mismatch += 1,
            Rejection::Unsolvable => self.unsolvable += 1,
        }
    }
}

/// The built-in round: `1 + 2`, `Equal to 3`.
#[must_use]
pub fn last_resort_round() -> Round {
    let hand = ["1", "+", "2", "3", "4", "5", "6", "-"]
        .iter()
        .filter_map(|s| s.parse::<Token>().ok())
        .collect::<Vec<_>>();
    Round {
        hand: Hand::new(hand),
        objective: Objective::EqualTo(3),
        solution: vec![Token::number(1), Token::op(Operator::Add), Token::number(2)],
        value: 3.0,
    }
}

/// Generates solvable rounds for one difficulty configuration.
#[derive(Clone, Debug)]
pub struct RoundGenerator {
    config: DifficultyConfig,
    options: GeneratorOptions,
    search: SearchOptions,
}

impl RoundGenerator {
    /// Generator for a tier configuration with default options.
    pub fn new(config: DifficultyConfig) -> Self {
        Self::with_options(config, GeneratorOptions::default())
    }

    /// Generator with explicit options.
    pub fn with_options(config: DifficultyConfig, options: GeneratorOptions) -> Self {
        let mut search = options.search.clone();
        search.max_operands = search.max_operands.max(config.max_operands());
        Self {
            config,
            options,
            search,
        }
    }

    /// Generator for a reference tier.
    pub fn for_difficulty(difficulty: Difficulty) -> Self {
        Self::new(difficulty.config())
    }

    #[must_use]
    pub fn config(&self) -> &DifficultyConfig {
        &self.config
    }

    #[must_use]
    pub fn options(&self) -> &GeneratorOptions {
        &self.options
    }

    /// Search options used for verification.
    #[must_use]
    pub fn search_options(&self) -> &SearchOptions {
        &self.search
    }

    /// Generate a round.
    pub fn generate(&self, rng: &mut PuzzleRng) -> Round {
        self.generate_with_report(rng).round
    }

    /// Generate a round and report how it was produced.
    pub fn generate_with_report(&self, rng: &mut PuzzleRng) -> GenerationReport {
        let mut rejections = Rejections::default();

        for attempt in 1..=self.options.max_attempts {
            match self.expression_first(rng) {
                Ok(round) => {
                    tracing::trace!(attempt, %round, "expression-first round");
                    return GenerationReport {
                        round,
                        path: GenerationPath::ExpressionFirst,
                        attempts: attempt,
                        rejections,
                    };
                }
                Err(rejection) => {
                    tracing::trace!(attempt, ?rejection, "expression-first attempt rejected");
                    rejections.record(rejection);
                }
            }
        }

        tracing::debug!(
            difficulty = %self.config.difficulty,
            attempts = self.options.max_attempts,
            "expression-first exhausted, falling back to objective-first"
        );

        for _ in 0..self.options.fallback_attempts {
            if let Some(round) = self.objective_first(rng) {
                return GenerationReport {
                    round,
                    path: GenerationPath::ObjectiveFirst,
                    attempts: self.options.max_attempts,
                    rejections,
                };
            }
        }

        tracing::debug!(difficulty = %self.config.difficulty, "using the built-in round");
        GenerationReport {
            round: last_resort_round(),
            path: GenerationPath::LastResort,
            attempts: self.options.max_attempts,
            rejections,
        }
    }

    fn random_operand(&self, rng: &mut PuzzleRng) -> Token {
        Token::digit(rng.gen_range(self.config.operand_digits()) as u8)
    }

    /// Deal `n0 op0 n1 ...` with an operand count from the tier.
    fn random_expression(&self, rng: &mut PuzzleRng) -> Vec<Token> {
        let mut count = rng.gen_range_usize(self.config.operand_count.clone()).max(1);
        if self.config.operators.is_empty() {
            count = 1;
        }

        let mut expression = Vec::with_capacity(count * 2 - 1);
        for i in 0..count {
            if i > 0 {
                if let Some(op) = rng.choose(&self.config.operators) {
                    expression.push(Token::Operator(*op));
                }
            }
            expression.push(self.random_operand(rng));
        }
        expression
    }

    fn usable_value(&self, value: f64) -> Result<(), Rejection> {
        if !value.is_finite() {
            return Err(Rejection::NonFinite);
        }
        // The search discards anything beyond its bound, so such a round
        // could never be confirmed solvable.
        if !self.search.in_bounds(value) {
            return Err(Rejection::UnusableValue);
        }
        if self.config.require_positive_integer && !(is_integral(value) && value > 0.0) {
            return Err(Rejection::UnusableValue);
        }
        Ok(())
    }

    fn expression_first(&self, rng: &mut PuzzleRng) -> Result<Round, Rejection> {
        let solution = self.random_expression(rng);
        let value = evaluate(&solution);
        self.usable_value(value)?;

        let objective = ObjectiveSynthesizer::new(&self.config)
            .derive(value, rng)
            .ok_or(Rejection::NoObjective)?;

        self.finish(solution, objective, value, rng)
    }

    fn objective_first(&self, rng: &mut PuzzleRng) -> Option<Round> {
        let synth = ObjectiveSynthesizer::new(&self.config);
        let kind = synth
            .sample_kind_from(&[ObjectiveKind::EqualTo, ObjectiveKind::Odd, ObjectiveKind::Even], rng)
            .unwrap_or(ObjectiveKind::EqualTo);

        if kind == ObjectiveKind::EqualTo && !self.config.operators.is_empty() {
            let op = *rng.choose(&self.config.operators)?;
            let solution = vec![self.random_operand(rng), Token::Operator(op), self.random_operand(rng)];
            let value = evaluate(&solution);
            if self.search.in_bounds(value) && is_integral(value) {
                if let Ok(round) = self.finish(solution, Objective::EqualTo(value as i64), value, rng) {
                    return Some(round);
                }
            }
        }

        let operand = self.random_operand(rng);
        let value = evaluate(std::slice::from_ref(&operand));
        let objective = if (value % 2.0).abs() == 1.0 {
            Objective::Odd
        } else {
            Objective::Even
        };
        self.finish(vec![operand], objective, value, rng).ok()
    }

    /// Build the hand and, if configured, confirm the round re-solves.
    fn finish(
        &self,
        solution: Vec<Token>,
        objective: Objective,
        value: f64,
        rng: &mut PuzzleRng,
    ) -> Result<Round, Rejection> {
        let hand = assemble_hand(&solution, &self.config, rng).ok_or(Rejection::HandMismatch)?;

        if self.options.verify_solvable && !is_solvable(hand.tokens(), &objective, &self.search).is_solvable() {
            tracing::warn!(%hand, %objective, "generated round failed verification");
            return Err(Rejection::Unsolvable);
        }

        Ok(Round {
            hand,
            objective,
            solution,
            value,
        })
    }
}

/// Generate a round for a reference tier with default options.
pub fn generate_round(difficulty: Difficulty, rng: &mut PuzzleRng) -> Round {
    RoundGenerator::for_difficulty(difficulty).generate(rng)
}
