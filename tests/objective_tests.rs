//! Objective checker and synthesizer integration tests.

use proptest::prelude::*;

use rust_mathcards::check_objective;
use rust_mathcards::core::{Difficulty, PuzzleRng};
use rust_mathcards::objectives::{check, Objective, ObjectiveKind, ObjectiveSynthesizer};

// =============================================================================
// Checker
// =============================================================================

#[test]
fn test_power_of() {
    assert!(check_objective(8.0, "Power of 2"));
    assert!(check_objective(9.0, "Power of 3"));
    assert!(!check_objective(10.0, "Power of 2"));
}

#[test]
fn test_factor_of_asymmetry() {
    assert!(check_objective(3.0, "Factor of 12"));
    assert!(!check_objective(12.0, "Factor of 3"));
}

#[test]
fn test_unknown_kind_is_false() {
    assert!(!check_objective(5.0, "Square number"));
    assert!(!check_objective(5.0, "Equal to five"));
}

#[test]
fn test_every_kind_has_a_satisfying_value() {
    let cases = [
        ("Equal to 5", 5.0),
        ("Greater than 5", 6.0),
        ("Less than 5", 4.0),
        ("Divisible by 5", 15.0),
        ("Power of 5", 125.0),
        ("Factor of 15", 5.0),
        ("Prime number", 5.0),
        ("Odd number", 5.0),
        ("Even number", 6.0),
    ];
    for (objective, value) in cases {
        assert!(check_objective(value, objective), "{objective} should accept {value}");
    }
}

// =============================================================================
// Synthesizer
// =============================================================================

#[test]
fn test_every_tier_can_sample() {
    let mut rng = PuzzleRng::new(1);
    for difficulty in Difficulty::ALL {
        let config = difficulty.config();
        let synth = ObjectiveSynthesizer::new(&config);
        for _ in 0..100 {
            let objective = synth.sample(&mut rng).unwrap();
            assert!(config.allows(objective.kind()));
            // Sampled objectives round-trip through their string form.
            assert_eq!(objective.to_string().parse::<Objective>(), Ok(objective));
        }
    }
}

#[test]
fn test_sampling_covers_allow_list() {
    let mut rng = PuzzleRng::new(2);
    let config = Difficulty::Hard.config();
    let synth = ObjectiveSynthesizer::new(&config);

    let mut seen = std::collections::HashSet::new();
    for _ in 0..500 {
        seen.insert(synth.sample_kind(&mut rng).unwrap());
    }
    assert_eq!(seen.len(), config.objective_kinds.len());
}

// =============================================================================
// Properties
// =============================================================================

fn objective_strategy() -> impl Strategy<Value = Objective> {
    (prop::sample::select(ObjectiveKind::ALL.to_vec()), -1000i64..1000)
        .prop_map(|(kind, n)| kind.with_parameter(n))
}

proptest! {
    #[test]
    fn prop_display_parse_round_trip(objective in objective_strategy()) {
        prop_assert_eq!(objective.to_string().parse::<Objective>(), Ok(objective));
    }

    #[test]
    fn prop_string_and_typed_checks_agree(objective in objective_strategy(), value in -200i64..200) {
        let value = value as f64;
        prop_assert_eq!(check(value, &objective), check_objective(value, &objective.to_string()));
    }

    #[test]
    fn prop_parity_partitions_integers(value in -10_000i64..10_000) {
        let value = value as f64;
        prop_assert!(check(value, &Objective::Odd) != check(value, &Objective::Even));
    }

    #[test]
    fn prop_factor_of_divides_target(divisor in 1i64..50, multiple in 1i64..20) {
        let target = divisor * multiple;
        prop_assert!(check(divisor as f64, &Objective::FactorOf(target)));
    }

    #[test]
    fn prop_powers_are_powers(base in 2i64..=6, exponent in 0u32..=8) {
        let value = (base as f64).powi(exponent as i32);
        prop_assert!(check(value, &Objective::PowerOf(base)));
        prop_assert!(!check(value + 1.0, &Objective::PowerOf(base)) || value + 1.0 == base as f64);
    }

    #[test]
    fn prop_derived_objective_holds(seed in any::<u64>(), value in -50i64..=150) {
        let mut rng = PuzzleRng::new(seed);
        let value = value as f64;
        for difficulty in Difficulty::ALL {
            let config = difficulty.config();
            if let Some(objective) = ObjectiveSynthesizer::new(&config).derive(value, &mut rng) {
                prop_assert!(check(value, &objective));
            }
        }
    }
}
