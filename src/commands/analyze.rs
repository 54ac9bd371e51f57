//! Word analysis command
//!
//! Analyzes the entropy and information content of a specific opening word.

use crate::core::Word;
use crate::solver::entropy::{ScoreTable, calculate_metrics};
use crate::wordlists::WordList;
use anyhow::{Result, bail};

/// Result of analyzing a word
pub struct AnalysisResult {
    pub word: Word,
    pub entropy: f64,
    pub expected_reduction: f64,
    pub expected_remaining: f64,
    pub worst_case: usize,
    pub total_candidates: usize,
    /// 1-based position among all openers
    pub rank: usize,
}

/// Analyze a word as an opening guess against the full list
///
/// # Errors
///
/// Returns an error if:
/// - The word is invalid (not 5 letters or contains non-ASCII)
/// - The word is not in the provided word list
pub fn analyze_word(word: &str, words: &WordList, opening: &ScoreTable) -> Result<AnalysisResult> {
    let word = Word::new(word)?;

    if !words.contains(&word) {
        bail!("word '{word}' not in word list");
    }

    let metrics = calculate_metrics(&word, words.as_slice());

    // Same ordering as ScoreTable::best: higher score, then earlier word
    let rank = 1 + opening
        .iter()
        .filter(|&(other, score)| {
            score > metrics.entropy || (score.total_cmp(&metrics.entropy).is_eq() && *other < word)
        })
        .count();

    Ok(AnalysisResult {
        word,
        entropy: metrics.entropy,
        expected_reduction: metrics.entropy.exp2(),
        expected_remaining: metrics.expected_remaining,
        worst_case: metrics.max_partition,
        total_candidates: words.len(),
        rank,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::entropy::score_all;

    fn setup() -> (WordList, ScoreTable) {
        let words = WordList::from_strs(&[
            "crane", "slate", "irate", "crate", "grate", "trace", "audio", "pious", "zesty",
        ])
        .unwrap();
        let opening = score_all(words.as_slice(), words.as_slice());
        (words, opening)
    }

    #[test]
    fn analyze_valid_word() {
        let (words, opening) = setup();
        let result = analyze_word("crane", &words, &opening).unwrap();

        assert_eq!(result.word.text(), "crane");
        assert!(result.entropy > 0.0);
        assert!(result.expected_reduction >= 1.0);
        assert_eq!(result.total_candidates, words.len());
        assert!(result.worst_case >= 1);
    }

    #[test]
    fn analyze_word_not_in_list() {
        let (words, opening) = setup();
        assert!(analyze_word("zzzzz", &words, &opening).is_err());
        assert!(analyze_word("sh0rt", &words, &opening).is_err());
    }

    #[test]
    fn best_opener_ranks_first() {
        let (words, opening) = setup();
        let (best, _) = opening.best().unwrap();

        let result = analyze_word(best.text(), &words, &opening).unwrap();
        assert_eq!(result.rank, 1);

        let ranks: Vec<usize> = words
            .iter()
            .map(|w| analyze_word(w.text(), &words, &opening).unwrap().rank)
            .collect();
        let mut sorted = ranks.clone();
        sorted.sort_unstable();
        assert_eq!(sorted, (1..=words.len()).collect::<Vec<_>>());
    }

    #[test]
    fn entropy_properties() {
        let (words, opening) = setup();
        let result = analyze_word("audio", &words, &opening).unwrap();

        assert!(result.entropy >= 0.0);
        assert!(result.entropy <= (words.len() as f64).log2() + 1e-12);
        assert!(result.expected_remaining >= 1.0);
        assert!(result.expected_remaining <= words.len() as f64);
    }
}
