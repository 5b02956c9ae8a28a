//! Guess selection strategies
//!
//! Defines the Strategy trait and concrete implementations.

use super::metrics::{GuessMetrics, score_pool};
use crate::core::Code;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::cell::RefCell;
use std::cmp::Ordering;

/// A strategy for selecting the best guess from a pool of candidates
pub trait Strategy {
    /// Select the best guess from the guess pool given the current candidates
    ///
    /// Returns the best guess, or `None` if the guess pool is empty.
    fn select_guess<'a>(&self, guess_pool: &'a [Code], candidates: &[Code]) -> Option<&'a Code>;
}

/// Enum wrapper for all strategy types
///
/// Allows runtime selection of strategy while maintaining static dispatch.
pub enum StrategyType {
    /// Minimize the worst-case partition (default)
    Minimax(MinimaxStrategy),
    /// Maximize expected information
    Entropy(EntropyStrategy),
    /// Random selection from candidates
    Random(RandomStrategy),
}

impl Strategy for StrategyType {
    fn select_guess<'a>(&self, guess_pool: &'a [Code], candidates: &[Code]) -> Option<&'a Code> {
        match self {
            Self::Minimax(s) => s.select_guess(guess_pool, candidates),
            Self::Entropy(s) => s.select_guess(guess_pool, candidates),
            Self::Random(s) => s.select_guess(guess_pool, candidates),
        }
    }
}

impl StrategyType {
    /// Create strategy from name string
    ///
    /// Supported names: "minimax", "entropy", "random".
    /// Defaults to minimax if name is unrecognized.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        Self::from_name_seeded(name, None)
    }

    /// Like [`StrategyType::from_name`], seeding the random strategy when a
    /// seed is given
    #[must_use]
    pub fn from_name_seeded(name: &str, seed: Option<u64>) -> Self {
        match name {
            "entropy" => Self::Entropy(EntropyStrategy),
            "random" => Self::Random(seed.map_or_else(RandomStrategy::new, RandomStrategy::seeded)),
            _ => Self::Minimax(MinimaxStrategy),
        }
    }

    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Minimax(_) => "minimax",
            Self::Entropy(_) => "entropy",
            Self::Random(_) => "random",
        }
    }
}

/// Pick the best-ranked guess, preferring possible answers on ties
///
/// `rank` orders two metrics so that `Ordering::Less` means "better".
/// Remaining ties go to the earliest guess in the pool.
fn select_by<'a, F>(guess_pool: &'a [Code], candidates: &[Code], rank: F) -> Option<&'a Code>
where
    F: Fn(&GuessMetrics, &GuessMetrics) -> Ordering,
{
    let candidate_refs: Vec<&Code> = candidates.iter().collect();
    let scored = score_pool(guess_pool, &candidate_refs);

    scored
        .iter()
        .min_by(|(code_a, a), (code_b, b)| {
            rank(a, b).then_with(|| {
                let a_is_candidate = candidates.binary_search(*code_a).is_ok();
                let b_is_candidate = candidates.binary_search(*code_b).is_ok();
                b_is_candidate.cmp(&a_is_candidate)
            })
        })
        .map(|&(code, _)| code)
}

/// Knuth-style minimax strategy
///
/// Always selects the guess that minimizes worst-case remaining candidates.
/// Expects `candidates` in ascending order (as produced by the solver).
pub struct MinimaxStrategy;

impl Strategy for MinimaxStrategy {
    fn select_guess<'a>(&self, guess_pool: &'a [Code], candidates: &[Code]) -> Option<&'a Code> {
        select_by(guess_pool, candidates, |a, b| {
            a.max_partition
                .cmp(&b.max_partition)
                .then_with(|| a.expected_remaining.total_cmp(&b.expected_remaining))
        })
    }
}

/// Pure entropy maximization strategy
///
/// Always selects the guess with the highest Shannon entropy.
pub struct EntropyStrategy;

impl Strategy for EntropyStrategy {
    fn select_guess<'a>(&self, guess_pool: &'a [Code], candidates: &[Code]) -> Option<&'a Code> {
        select_by(guess_pool, candidates, |a, b| {
            b.entropy
                .total_cmp(&a.entropy)
                .then_with(|| a.max_partition.cmp(&b.max_partition))
        })
    }
}

/// Random strategy
///
/// Randomly selects from remaining candidates.
pub struct RandomStrategy {
    rng: RefCell<StdRng>,
}

impl RandomStrategy {
    #[must_use]
    pub fn new() -> Self {
        Self {
            rng: RefCell::new(StdRng::from_os_rng()),
        }
    }

    /// Same seed, same sequence of picks
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: RefCell::new(StdRng::seed_from_u64(seed)),
        }
    }
}

impl Default for RandomStrategy {
    fn default() -> Self {
        Self::new()
    }
}

impl Strategy for RandomStrategy {
    fn select_guess<'a>(&self, guess_pool: &'a [Code], candidates: &[Code]) -> Option<&'a Code> {
        use rand::prelude::IndexedRandom;

        // Prefer candidates from the guess pool
        let valid_candidates: Vec<&Code> = candidates
            .iter()
            .filter(|c| guess_pool.contains(*c))
            .collect();

        if let Some(candidate) = valid_candidates.choose(&mut *self.rng.borrow_mut()) {
            guess_pool.iter().find(|g| g == candidate)
        } else {
            guess_pool.first()
        }
    }
}
