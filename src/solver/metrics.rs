//! Partition metrics for a guess
//!
//! Grouping the candidates by the score a guess would produce against each
//! of them gives a partition. Entropy and worst-case size of that partition
//! drive guess selection.

use crate::core::{Code, Score};
use rayon::prelude::*;
use rustc_hash::FxHashMap;

/// Comprehensive metrics for evaluating a guess
#[derive(Debug, Clone, Copy)]
pub struct GuessMetrics {
    /// Shannon entropy (expected information gain in bits)
    pub entropy: f64,
    /// Expected number of remaining candidates after this guess
    pub expected_remaining: f64,
    /// Maximum partition size (worst-case remaining candidates)
    pub max_partition: usize,
}

/// Count candidates per score
pub fn partition_sizes(guess: &Code, candidates: &[&Code]) -> FxHashMap<Score, usize> {
    let mut counts = FxHashMap::default();

    for &candidate in candidates {
        let score = Score::calculate(guess, candidate);
        *counts.entry(score).or_insert(0) += 1;
    }

    counts
}

/// Calculate Shannon entropy for a guess against candidates
///
/// # Examples
/// ```
/// use bulls_and_cows::core::Code;
/// use bulls_and_cows::solver::calculate_entropy;
///
/// let guess = Code::new("0123").unwrap();
/// let candidates = [Code::new("0123").unwrap(), Code::new("4567").unwrap()];
/// let refs: Vec<&Code> = candidates.iter().collect();
///
/// // Two candidates in two different partitions: exactly one bit
/// assert!((calculate_entropy(&guess, &refs) - 1.0).abs() < 1e-9);
/// ```
#[must_use]
pub fn calculate_entropy(guess: &Code, candidates: &[&Code]) -> f64 {
    calculate_metrics(guess, candidates).entropy
}

/// Calculate the worst-case number of remaining candidates for a guess
#[must_use]
pub fn calculate_max_remaining(guess: &Code, candidates: &[&Code]) -> usize {
    partition_sizes(guess, candidates)
        .values()
        .max()
        .copied()
        .unwrap_or(0)
}

/// Calculate entropy, expected remaining and max partition in one pass
pub fn calculate_metrics(guess: &Code, candidates: &[&Code]) -> GuessMetrics {
    if candidates.is_empty() {
        return GuessMetrics {
            entropy: 0.0,
            expected_remaining: 0.0,
            max_partition: 0,
        };
    }

    let counts = partition_sizes(guess, candidates);
    let total = candidates.len() as f64;

    let entropy: f64 = counts
        .values()
        .map(|&count| {
            let p = count as f64 / total;
            -p * p.log2()
        })
        .sum();

    // E[remaining] = Σ p(s) × |s| = Σ |s|² / n
    let expected_remaining = counts
        .values()
        .map(|&count| (count * count) as f64)
        .sum::<f64>()
        / total;

    let max_partition = counts.values().max().copied().unwrap_or(0);

    GuessMetrics {
        entropy,
        expected_remaining,
        max_partition,
    }
}

/// Score every guess in the pool in parallel
///
/// Returns one `(guess, metrics)` pair per pool entry, in pool order.
pub fn score_pool<'a>(pool: &'a [Code], candidates: &[&Code]) -> Vec<(&'a Code, GuessMetrics)> {
    pool.par_iter()
        .map(|guess| (guess, calculate_metrics(guess, candidates)))
        .collect()
}
