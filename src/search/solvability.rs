//! Brute-force solvability search.
//!
//! Decides whether some arrangement of a subset of a hand meets an
//! objective, and returns the first arrangement found as a witness.
//!
//! The search space is tiny by construction: a hand has at most a handful
//! of number cards, and expressions use at most `max_operands` of them. For
//! an 8-card hand and three operands that is a few hundred candidates, so
//! the search runs synchronously on every round transition.

use std::fmt;
use std::time::Instant;

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{render, Operator, Token};
use crate::eval::evaluate;
use crate::objectives::{check, Objective};

use super::config::SearchOptions;
use super::stats::{SearchPhase, SearchStats};

/// A candidate expression. Three operands and two operators fit inline.
type Candidate = SmallVec<[Token; 5]>;

/// Index permutations used to pick cards.
type Picks = SmallVec<[usize; 4]>;

/// A concrete arrangement that meets the objective.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Witness {
    /// Tokens in play order. Always a sub-multiset of the searched hand.
    pub expression: Vec<Token>,
    /// Value the expression evaluates to.
    pub value: f64,
}

impl fmt::Display for Witness {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} = {}", render(&self.expression), self.value)
    }
}

/// Result of a solvability search.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SearchOutcome {
    /// First arrangement found, if any.
    pub witness: Option<Witness>,
    /// Work done.
    pub stats: SearchStats,
}

impl SearchOutcome {
    #[must_use]
    pub fn is_solvable(&self) -> bool {
        self.witness.is_some()
    }

    #[must_use]
    pub fn expression(&self) -> Option<&[Token]> {
        self.witness.as_ref().map(|w| w.expression.as_slice())
    }

    #[must_use]
    pub fn value(&self) -> Option<f64> {
        self.witness.as_ref().map(|w| w.value)
    }
}

/// All ordered selections of `k` distinct indices out of `0..n`.
fn index_permutations(n: usize, k: usize) -> Vec<Picks> {
    fn extend(n: usize, k: usize, current: &mut Picks, used: &mut [bool], out: &mut Vec<Picks>) {
        if current.len() == k {
            out.push(current.clone());
            return;
        }
        for i in 0..n {
            if used[i] {
                continue;
            }
            used[i] = true;
            current.push(i);
            extend(n, k, current, used, out);
            current.pop();
            used[i] = false;
        }
    }

    let mut out = Vec::new();
    if k <= n {
        extend(n, k, &mut Picks::new(), &mut vec![false; n], &mut out);
    }
    out
}

/// Distinct operator sequences of length `k` drawable from `pool`.
fn operator_sequences(pool: &[Operator], k: usize) -> Vec<SmallVec<[Operator; 4]>> {
    let mut seen = FxHashSet::default();
    index_permutations(pool.len(), k)
        .into_iter()
        .map(|picks| picks.iter().map(|&i| pool[i]).collect::<SmallVec<[Operator; 4]>>())
        .filter(|seq| seen.insert(seq.clone()))
        .collect()
}

/// True if the candidate divides by the literal card `0`.
fn divides_by_literal_zero(candidate: &[Token]) -> bool {
    candidate.windows(2).any(|pair| {
        pair[0] == Token::Operator(Operator::Div) && pair[1].digits() == Some("0")
    })
}

/// Searches one hand for arrangements meeting one objective.
pub struct SolvabilitySearch<'a> {
    numbers: Vec<&'a Token>,
    operators: Vec<Operator>,
    objective: &'a Objective,
    options: &'a SearchOptions,
    stats: SearchStats,
}

impl<'a> SolvabilitySearch<'a> {
    /// Split the hand into number and operator cards. Placeholders are ignored.
    pub fn new(hand: &'a [Token], objective: &'a Objective, options: &'a SearchOptions) -> Self {
        Self {
            numbers: hand.iter().filter(|t| t.is_number()).collect(),
            operators: hand.iter().filter_map(Token::as_operator).collect(),
            objective,
            options,
            stats: SearchStats::default(),
        }
    }

    /// Run the search to the first witness or to exhaustion.
    pub fn run(mut self) -> SearchOutcome {
        let start = Instant::now();

        let mut witness = None;
        if self.options.fast_path {
            witness = self.fast_path();
            if witness.is_some() {
                self.stats.found_in = Some(SearchPhase::FastPath);
            }
        }
        if witness.is_none() {
            witness = self.enumerate();
            if witness.is_some() {
                self.stats.found_in = Some(SearchPhase::Combinatorial);
            }
        }

        self.stats.time_us = start.elapsed().as_micros() as u64;
        tracing::trace!(objective = %self.objective, stats = %self.stats, "solvability search finished");

        SearchOutcome {
            witness,
            stats: self.stats,
        }
    }

    fn accept(&self, expression: &[Token], value: f64) -> Option<Witness> {
        if self.options.in_bounds(value) && check(value, self.objective) {
            Some(Witness {
                expression: expression.to_vec(),
                value,
            })
        } else {
            None
        }
    }

    /// Single cards, then every ordered pair of single-digit cards read as
    /// one two-digit number. Both count against `max_operands`.
    fn fast_path(&mut self) -> Option<Witness> {
        if self.options.max_operands == 0 {
            return None;
        }
        for &token in &self.numbers {
            self.stats.fast_path_checks += 1;
            let expression = [token.clone()];
            if let Some(witness) = self.accept(&expression, evaluate(&expression)) {
                return Some(witness);
            }
        }

        if self.options.max_operands < 2 {
            return None;
        }
        for (i, &first) in self.numbers.iter().enumerate() {
            if !first.is_single_digit() {
                continue;
            }
            for (j, &second) in self.numbers.iter().enumerate() {
                if i == j || !second.is_single_digit() {
                    continue;
                }
                self.stats.fast_path_checks += 1;
                // Adjacent number cards concatenate when evaluated.
                let expression = [first.clone(), second.clone()];
                if let Some(witness) = self.accept(&expression, evaluate(&expression)) {
                    return Some(witness);
                }
            }
        }

        None
    }

    /// Every `n0 op0 n1 op1 n2 ...` with up to `max_operands` numbers.
    fn enumerate(&mut self) -> Option<Witness> {
        let mut seen: FxHashSet<String> = FxHashSet::default();

        for k in 1..=self.options.max_operands {
            if k > self.numbers.len() || k - 1 > self.operators.len() {
                break;
            }

            let number_picks = index_permutations(self.numbers.len(), k);
            let op_sequences = operator_sequences(&self.operators, k - 1);

            for picks in &number_picks {
                for ops in &op_sequences {
                    self.stats.candidates += 1;

                    let mut candidate = Candidate::new();
                    for (slot, &index) in picks.iter().enumerate() {
                        if slot > 0 {
                            candidate.push(Token::Operator(ops[slot - 1]));
                        }
                        candidate.push(self.numbers[index].clone());
                    }

                    if !seen.insert(render(&candidate)) {
                        self.stats.duplicates += 1;
                        continue;
                    }
                    if divides_by_literal_zero(&candidate) {
                        self.stats.zero_divisions += 1;
                        continue;
                    }

                    self.stats.evaluations += 1;
                    let value = evaluate(&candidate);
                    if !self.options.in_bounds(value) {
                        self.stats.discarded += 1;
                        continue;
                    }
                    if let Some(witness) = self.accept(&candidate, value) {
                        return Some(witness);
                    }
                }
            }
        }

        None
    }
}

/// Can some arrangement of cards from `hand` meet `objective`?
#[must_use]
pub fn is_solvable(hand: &[Token], objective: &Objective, options: &SearchOptions) -> SearchOutcome {
    SolvabilitySearch::new(hand, objective, options).run()
}

/// String-objective form. An unparsable objective is never solvable.
#[must_use]
pub fn is_solvable_str(hand: &[Token], objective: &str, options: &SearchOptions) -> SearchOutcome {
    match objective.parse::<Objective>() {
        Ok(parsed) => is_solvable(hand, &parsed, options),
        Err(err) => {
            tracing::debug!(objective, %err, "unrecognised objective, nothing to search");
            SearchOutcome {
                witness: None,
                stats: SearchStats::default(),
            }
        }
    }
}
