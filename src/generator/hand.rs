//! Hand assembly.
//!
//! A hand is the solution's cards plus distractors, shuffled. Padding and
//! the solution are chosen independently, so the finished hand is checked
//! against the solution before it is handed out.

use crate::core::{DifficultyConfig, Hand, PuzzleRng, Token};

/// Random single-digit card from the distractor range.
pub fn distractor_number(config: &DifficultyConfig, rng: &mut PuzzleRng) -> Token {
    Token::digit(rng.gen_range(config.distractor_digits()) as u8)
}

/// Build a full hand around `required`.
///
/// Number cards are added until the hand holds `min_numbers` of them, then
/// operator cards until it is full. Returns `None` if `required` does not
/// fit or the result fails the sub-multiset check.
pub fn assemble_hand(
    required: &[Token],
    config: &DifficultyConfig,
    rng: &mut PuzzleRng,
) -> Option<Hand> {
    if required.len() > config.hand_size {
        return None;
    }

    let mut tokens: Vec<Token> = Vec::with_capacity(config.hand_size);
    tokens.extend(required.iter().filter(|t| !t.is_placeholder()).cloned());

    let mut numbers = tokens.iter().filter(|t| t.is_number()).count();
    while numbers < config.min_numbers && tokens.len() < config.hand_size {
        tokens.push(distractor_number(config, rng));
        numbers += 1;
    }

    while tokens.len() < config.hand_size {
        match rng.choose(&config.operators) {
            Some(op) => tokens.push(Token::Operator(*op)),
            None => tokens.push(distractor_number(config, rng)),
        }
    }

    rng.shuffle(&mut tokens);

    let hand = Hand::new(tokens);
    if hand.contains_all(required) {
        Some(hand)
    } else {
        tracing::warn!(%hand, "assembled hand lost part of its solution");
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{parse_tokens, Difficulty};

    #[test]
    fn test_hand_is_full_and_contains_solution() {
        let mut rng = PuzzleRng::new(11);
        let required = parse_tokens(&["3", "*", "4", "-", "2"]).unwrap();

        for difficulty in Difficulty::ALL {
            let config = difficulty.config();
            for _ in 0..50 {
                let hand = assemble_hand(&required, &config, &mut rng).unwrap();
                assert_eq!(hand.len(), config.hand_size);
                assert!(hand.contains_all(&required));
                assert!(hand.numbers().count() >= config.min_numbers);
            }
        }
    }

    #[test]
    fn test_padding_uses_tier_operators() {
        let mut rng = PuzzleRng::new(12);
        let config = Difficulty::Easy.config();
        let required = parse_tokens(&["5"]).unwrap();

        for _ in 0..50 {
            let hand = assemble_hand(&required, &config, &mut rng).unwrap();
            assert!(hand.operators().all(|op| config.operators.contains(&op)));
        }
    }

    #[test]
    fn test_oversized_solution_rejected() {
        let mut rng = PuzzleRng::new(13);
        let config = Difficulty::Easy.config().with_hand_size(2);
        let required = parse_tokens(&["1", "+", "2"]).unwrap();
        assert!(assemble_hand(&required, &config, &mut rng).is_none());
    }

    #[test]
    fn test_no_operators_pads_with_numbers() {
        let mut rng = PuzzleRng::new(14);
        let config = Difficulty::Easy.config().with_operators([]);
        let hand = assemble_hand(&parse_tokens(&["4"]).unwrap(), &config, &mut rng).unwrap();
        assert_eq!(hand.numbers().count(), config.hand_size);
    }
}
