//! Objective checking.
//!
//! Remainders use `f64` `%`, which keeps the sign of the dividend. Parity is
//! therefore tested on the absolute remainder so negative odd numbers count.

use super::objective::Objective;

/// Primes recognised by `Prime number`. Anything outside is not prime.
pub const SMALL_PRIMES: [i64; 25] = [
    2, 3, 5, 7, 11, 13, 17, 19, 23, 29, 31, 37, 41, 43, 47, 53, 59, 61, 67, 71, 73, 79, 83, 89, 97,
];

/// Is `value` one of the tabled primes?
#[must_use]
pub fn is_table_prime(value: f64) -> bool {
    is_integral(value) && SMALL_PRIMES.binary_search(&(value as i64)).is_ok()
}

/// Finite and without a fractional part.
#[must_use]
pub fn is_integral(value: f64) -> bool {
    value.is_finite() && value.fract() == 0.0
}

/// Is `value` equal to `base^k` for some integer `k >= 0`?
#[must_use]
pub fn is_power_of(value: f64, base: i64) -> bool {
    if base < 2 || !value.is_finite() {
        return false;
    }
    let base = base as f64;
    let mut power = 1.0;
    while power < value {
        power *= base;
    }
    power == value
}

/// Does `result` satisfy `objective`?
///
/// Non-finite results never do.
#[must_use]
pub fn check(result: f64, objective: &Objective) -> bool {
    if !result.is_finite() {
        return false;
    }

    match *objective {
        Objective::EqualTo(n) => result == n as f64,
        Objective::GreaterThan(n) => result > n as f64,
        Objective::LessThan(n) => result < n as f64,
        Objective::DivisibleBy(n) => result % n as f64 == 0.0,
        Objective::PowerOf(n) => is_power_of(result, n),
        // The result divides the target, not the other way round.
        Objective::FactorOf(n) => n as f64 % result == 0.0,
        Objective::Prime => is_table_prime(result),
        Objective::Odd => (result % 2.0).abs() == 1.0,
        Objective::Even => result % 2.0 == 0.0,
    }
}

/// Check against an objective string. Unknown or malformed objectives are
/// never satisfied.
#[must_use]
pub fn check_objective(result: f64, objective: &str) -> bool {
    match objective.parse::<Objective>() {
        Ok(parsed) => check(result, &parsed),
        Err(err) => {
            tracing::debug!(objective, %err, "unrecognised objective");
            false
        }
    }
}
