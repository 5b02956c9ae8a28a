//! Guess analysis command
//!
//! Shows how a guess splits a set of possible secrets by score.

use crate::core::{Code, Score};
use crate::solver::calculate_metrics;
use crate::solver::metrics::partition_sizes;

/// Result of analyzing a guess
pub struct AnalysisResult {
    pub code: Code,
    pub entropy: f64,
    pub expected_reduction: f64,
    pub expected_remaining: f64,
    pub max_partition: usize,
    pub total_candidates: usize,
    /// Candidates per score, best score first
    pub partitions: Vec<(Score, usize)>,
}

/// Analyze a guess against a set of candidate secrets
///
/// # Errors
///
/// Returns an error if the guess is not 4 distinct digits.
pub fn analyze_guess(guess: &str, candidates: &[Code]) -> Result<AnalysisResult, String> {
    let code = Code::new(guess).map_err(|e| format!("Invalid guess: {e}"))?;

    let candidate_refs: Vec<&Code> = candidates.iter().collect();
    let metrics = calculate_metrics(&code, &candidate_refs);

    let mut partitions: Vec<(Score, usize)> =
        partition_sizes(&code, &candidate_refs).into_iter().collect();
    partitions.sort_unstable_by(|a, b| b.0.cmp(&a.0));

    Ok(AnalysisResult {
        code,
        entropy: metrics.entropy,
        expected_reduction: metrics.entropy.exp2(),
        expected_remaining: metrics.expected_remaining,
        max_partition: metrics.max_partition,
        total_candidates: candidates.len(),
        partitions,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn analyze_opening_guess() {
        let all = Code::all();
        let result = analyze_guess("0123", &all).unwrap();

        assert_eq!(result.total_candidates, 5040);
        assert_eq!(result.partitions[0], (Score::WIN, 1));
        assert_eq!(
            result.partitions.iter().map(|(_, n)| n).sum::<usize>(),
            5040
        );
        // One digit of 0123 out of place plus three of the other six: (0, 1)
        assert_eq!(result.max_partition, 1440);
        assert!(result.entropy > 2.0);
    }

    #[test]
    fn every_opening_is_equivalent() {
        let all = Code::all();
        let a = analyze_guess("0123", &all).unwrap();
        let b = analyze_guess("8174", &all).unwrap();

        assert!((a.entropy - b.entropy).abs() < 1e-9);
        assert_eq!(a.max_partition, b.max_partition);
    }

    #[test]
    fn analyze_invalid_guess() {
        let all = Code::all();
        assert!(analyze_guess("0012", &all).is_err());
        assert!(analyze_guess("abc", &all).is_err());
    }

    #[test]
    fn analyze_empty_candidates() {
        let result = analyze_guess("0123", &[]).unwrap();
        assert_eq!(result.total_candidates, 0);
        assert!(result.partitions.is_empty());
    }
}
