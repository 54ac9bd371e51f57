//! Shannon entropy calculation for Wordle patterns
//!
//! Given a guess and set of candidates, computes the expected information gain.

use crate::core::{PATTERN_COUNT, Pattern, Word};

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

/// Calculate Shannon entropy for a guess against candidates
///
/// Returns the expected information gain in bits.
///
/// # Formula
/// H(X) = -Σ p(x) * log₂(p(x))
///
/// where p(x) is the probability of observing pattern x.
///
/// # Examples
/// ```
/// use wordle_entropy::core::Word;
/// use wordle_entropy::solver::entropy::calculate_entropy;
///
/// let guess = Word::new("crane").unwrap();
/// let candidates = vec![
///     Word::new("slate").unwrap(),
///     Word::new("irate").unwrap(),
/// ];
///
/// let entropy = calculate_entropy(&guess, &candidates);
/// assert!(entropy > 0.0 && entropy <= 1.0); // log2(2) = 1 bit max
/// ```
#[must_use]
pub fn calculate_entropy(guess: &Word, candidates: &[Word]) -> f64 {
    if candidates.is_empty() {
        return 0.0;
    }

    shannon_entropy(&pattern_counts(guess, candidates))
}

/// Bucket sizes per pattern value
///
/// A fixed array instead of a map keeps the entropy sum in pattern order,
/// so the same inputs always give the same bits.
#[must_use]
pub fn pattern_counts(guess: &Word, candidates: &[Word]) -> [u32; PATTERN_COUNT] {
    let mut counts = [0u32; PATTERN_COUNT];

    for candidate in candidates {
        let pattern = Pattern::calculate(guess, candidate);
        counts[usize::from(pattern.value())] += 1;
    }

    counts
}

/// Calculate Shannon entropy from pattern distribution
///
/// H = -Σ p * log₂(p)
///
/// # Properties
/// - Returns 0.0 for certain outcome (one pattern with p=1)
/// - Maximized for uniform distribution
/// - Always in range [0, log₂(n)] for n non-empty buckets
///
/// # Examples
/// ```
/// use wordle_entropy::solver::entropy::shannon_entropy;
///
/// let entropy = shannon_entropy(&[25, 25, 25, 25]);
/// assert!((entropy - 2.0).abs() < 0.001); // log2(4) = 2 bits
/// ```
#[must_use]
pub fn shannon_entropy(counts: &[u32]) -> f64 {
    let total = counts.iter().map(|&c| f64::from(c)).sum::<f64>();

    if total == 0.0 {
        return 0.0;
    }

    counts
        .iter()
        .filter(|&&count| count > 0)
        .map(|&count| {
            let p = f64::from(count) / total;
            -p * p.log2()
        })
        .sum()
}

/// Calculate comprehensive metrics for a guess
///
/// Returns entropy, expected remaining candidates, and max partition size.
#[must_use]
pub fn calculate_metrics(guess: &Word, candidates: &[Word]) -> GuessMetrics {
    if candidates.is_empty() {
        return GuessMetrics {
            entropy: 0.0,
            expected_remaining: 0.0,
            max_partition: 0,
        };
    }

    let counts = pattern_counts(guess, candidates);
    let total = candidates.len() as f64;

    // Σ p * |bucket|
    let expected_remaining: f64 = counts
        .iter()
        .filter(|&&c| c > 0)
        .map(|&c| {
            let size = f64::from(c);
            size / total * size
        })
        .sum();

    let max_partition = counts.iter().copied().max().unwrap_or(0) as usize;

    GuessMetrics {
        entropy: shannon_entropy(&counts),
        expected_remaining,
        max_partition,
    }
}
