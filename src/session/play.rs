//! A game session: one tier, one random stream, many rounds.

use serde::{Deserialize, Serialize};

use crate::core::{Difficulty, DifficultyConfig, PuzzleRng, PuzzleRngState, Token};
use crate::eval::evaluate;
use crate::generator::{GeneratorOptions, Round, RoundGenerator};
use crate::objectives::check;
use crate::search::{is_solvable, Witness};

/// Result of judging a player's arrangement.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Verdict {
    /// Value of the arrangement (`NaN` if malformed).
    pub value: f64,
    /// The value meets the round's objective.
    pub satisfied: bool,
    /// Every card in the arrangement came from the hand.
    pub uses_hand: bool,
}

impl Verdict {
    /// Counts as a solved round.
    #[must_use]
    pub fn is_win(&self) -> bool {
        self.satisfied && self.uses_hand
    }
}

/// Saved session position.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SessionCheckpoint {
    pub config: DifficultyConfig,
    pub options: GeneratorOptions,
    pub rng: PuzzleRngState,
    pub rounds_dealt: u32,
}

/// Deals rounds for one game session.
///
/// Each round draws from its own fork of the session RNG, so a session
/// restored from a checkpoint deals exactly the rounds the original would
/// have dealt next.
#[derive(Clone, Debug)]
pub struct PuzzleSession {
    generator: RoundGenerator,
    rng: PuzzleRng,
    rounds_dealt: u32,
}

impl PuzzleSession {
    /// Session on a reference tier.
    pub fn new(difficulty: Difficulty, seed: u64) -> Self {
        Self::with_generator(RoundGenerator::for_difficulty(difficulty), seed)
    }

    /// Session on a reference tier with an OS-entropy seed, for unseeded play.
    ///
    /// The drawn seed is kept in the RNG, so checkpoints still replay.
    pub fn from_entropy(difficulty: Difficulty) -> Self {
        Self::from_rng(RoundGenerator::for_difficulty(difficulty), PuzzleRng::from_entropy())
    }

    /// Session with a custom generator.
    pub fn with_generator(generator: RoundGenerator, seed: u64) -> Self {
        Self::from_rng(generator, PuzzleRng::new(seed))
    }

    fn from_rng(generator: RoundGenerator, rng: PuzzleRng) -> Self {
        Self {
            generator,
            rng,
            rounds_dealt: 0,
        }
    }

    /// Seed of the session stream.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }

    #[must_use]
    pub fn config(&self) -> &DifficultyConfig {
        self.generator.config()
    }

    #[must_use]
    pub fn difficulty(&self) -> Difficulty {
        self.config().difficulty
    }

    #[must_use]
    pub fn rounds_dealt(&self) -> u32 {
        self.rounds_dealt
    }

    /// Deal the next round.
    pub fn next_round(&mut self) -> Round {
        let mut round_rng = self.rng.fork();
        let report = self.generator.generate_with_report(&mut round_rng);
        self.rounds_dealt += 1;
        tracing::debug!(
            round = self.rounds_dealt,
            path = ?report.path,
            attempts = report.attempts,
            objective = %report.round.objective,
            "dealt round"
        );
        report.round
    }

    /// Judge a player's arrangement against a round.
    ///
    /// Placeholders in the arrangement are empty slots and are not cards.
    #[must_use]
    pub fn submit(&self, round: &Round, arrangement: &[Token]) -> Verdict {
        let value = evaluate(arrangement);
        let cards: Vec<Token> = arrangement.iter().filter(|t| !t.is_placeholder()).cloned().collect();
        Verdict {
            value,
            satisfied: check(value, &round.objective),
            uses_hand: round.hand.contains_all(&cards),
        }
    }

    /// A solution for the round, found by search rather than read from the
    /// round, so it may differ from the dealt solution.
    #[must_use]
    pub fn hint(&self, round: &Round) -> Option<Witness> {
        is_solvable(round.hand.tokens(), &round.objective, self.generator.search_options()).witness
    }

    /// Save the session position.
    #[must_use]
    pub fn checkpoint(&self) -> SessionCheckpoint {
        SessionCheckpoint {
            config: self.generator.config().clone(),
            options: self.generator.options().clone(),
            rng: self.rng.state(),
            rounds_dealt: self.rounds_dealt,
        }
    }

    /// Resume from a saved position.
    #[must_use]
    pub fn restore(checkpoint: &SessionCheckpoint) -> Self {
        Self {
            generator: RoundGenerator::with_options(checkpoint.config.clone(), checkpoint.options.clone()),
            rng: PuzzleRng::from_state(&checkpoint.rng),
            rounds_dealt: checkpoint.rounds_dealt,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{parse_tokens, Hand};
    use crate::objectives::Objective;

    fn fixed_round() -> Round {
        Round {
            hand: Hand::new(parse_tokens(&["1", "2", "3", "+", "*", "4", "5", "-"]).unwrap()),
            objective: Objective::EqualTo(12),
            solution: parse_tokens(&["3", "*", "4"]).unwrap(),
            value: 12.0,
        }
    }

    #[test]
    fn test_next_round_counts() {
        let mut session = PuzzleSession::new(Difficulty::Easy, 1);
        for _ in 0..3 {
            assert!(session.next_round().is_consistent());
        }
        assert_eq!(session.rounds_dealt(), 3);
        assert_eq!(session.difficulty(), Difficulty::Easy);
    }

    #[test]
    fn test_submit_win() {
        let session = PuzzleSession::new(Difficulty::Medium, 2);
        let round = fixed_round();

        let verdict = session.submit(&round, &parse_tokens(&["4", "*", "3"]).unwrap());
        assert_eq!(verdict.value, 12.0);
        assert!(verdict.is_win());

        // 1 ? 2 reads as twelve.
        let verdict = session.submit(&round, &parse_tokens(&["1", "?", "2"]).unwrap());
        assert!(verdict.is_win());
    }

    #[test]
    fn test_submit_rejects_foreign_cards() {
        let session = PuzzleSession::new(Difficulty::Medium, 3);
        let round = fixed_round();

        let verdict = session.submit(&round, &parse_tokens(&["6", "+", "6"]).unwrap());
        assert!(verdict.satisfied);
        assert!(!verdict.uses_hand);
        assert!(!verdict.is_win());
    }

    #[test]
    fn test_submit_malformed() {
        let session = PuzzleSession::new(Difficulty::Medium, 4);
        let verdict = session.submit(&fixed_round(), &parse_tokens(&["3", "*"]).unwrap());
        assert!(verdict.value.is_nan());
        assert!(!verdict.is_win());
    }

    #[test]
    fn test_hint_solves_round() {
        let session = PuzzleSession::new(Difficulty::Medium, 5);
        let round = fixed_round();
        let witness = session.hint(&round).unwrap();
        assert!(session.submit(&round, &witness.expression).is_win());
    }

    #[test]
    fn test_checkpoint_resumes_same_rounds() {
        let mut session = PuzzleSession::new(Difficulty::Hard, 6);
        session.next_round();

        let checkpoint = session.checkpoint();
        let json = serde_json::to_string(&checkpoint).unwrap();
        let mut resumed = PuzzleSession::restore(&serde_json::from_str(&json).unwrap());

        assert_eq!(resumed.rounds_dealt(), 1);
        for _ in 0..3 {
            assert_eq!(session.next_round(), resumed.next_round());
        }
    }

    #[test]
    fn test_entropy_session_replays_from_its_seed() {
        let mut session = PuzzleSession::from_entropy(Difficulty::Easy);
        let mut replay = PuzzleSession::new(Difficulty::Easy, session.seed());
        for _ in 0..3 {
            assert_eq!(session.next_round(), replay.next_round());
        }
    }
}
