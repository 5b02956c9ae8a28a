//! Main Bulls and Cows solver interface

use super::strategy::Strategy;
use crate::core::{Code, Score};
use tracing::debug;

/// Main Bulls and Cows solver
///
/// Coordinates the solving process using a given strategy.
pub struct Solver<'a, S: Strategy> {
    strategy: S,
    guess_pool: &'a [Code],
    secret_pool: &'a [Code],
}

impl<'a, S: Strategy> Solver<'a, S> {
    /// Create a new solver with the given strategy and code pools
    ///
    /// # Parameters
    /// - `strategy`: The guess selection strategy to use
    /// - `guess_pool`: Codes the solver may guess
    /// - `secret_pool`: Codes that may be the secret, in ascending order
    pub const fn new(strategy: S, guess_pool: &'a [Code], secret_pool: &'a [Code]) -> Self {
        Self {
            strategy,
            guess_pool,
            secret_pool,
        }
    }

    /// Get the first guess for a new game
    ///
    /// Every opening is equivalent up to relabelling digits, so 0123 is used
    /// when available and the strategy is only consulted otherwise.
    pub fn first_guess(&self) -> Option<&'a Code> {
        self.guess_pool
            .iter()
            .find(|c| *c.digits() == [0, 1, 2, 3])
            .or_else(|| {
                self.strategy
                    .select_guess(self.guess_pool, self.secret_pool)
            })
    }

    /// Get the next best guess given previous guesses and scores
    ///
    /// # Parameters
    /// - `history`: Slice of (guess, score) pairs from previous turns
    ///
    /// Returns the best next guess, or None if no candidates remain.
    pub fn next_guess(&self, history: &[(Code, Score)]) -> Option<&'a Code> {
        if history.is_empty() {
            return self.first_guess();
        }

        let candidates = self.filter_candidates(history);

        if candidates.is_empty() {
            return None;
        }

        // If only one candidate remains, just guess it
        if candidates.len() == 1 {
            return Some(candidates[0]);
        }

        let candidate_codes: Vec<Code> = candidates.into_iter().copied().collect();
        let guess = self
            .strategy
            .select_guess(self.guess_pool, &candidate_codes);

        if let Some(code) = guess {
            debug!(%code, candidates = candidate_codes.len(), "selected guess");
        }

        guess
    }

    /// Filter the secret pool to codes consistent with the guess history
    ///
    /// Returns candidates that would produce the observed scores for all guesses.
    fn filter_candidates(&self, history: &[(Code, Score)]) -> Vec<&'a Code> {
        self.secret_pool
            .iter()
            .filter(|&candidate| {
                history.iter().all(|(guess, observed)| {
                    Score::calculate(guess, candidate) == *observed
                })
            })
            .collect()
    }

    /// Count how many candidates remain given the history
    pub fn count_candidates(&self, history: &[(Code, Score)]) -> usize {
        self.filter_candidates(history).len()
    }

    /// Get the current candidates (public accessor)
    pub fn get_candidates(&self, history: &[(Code, Score)]) -> Vec<&'a Code> {
        self.filter_candidates(history)
    }
}
