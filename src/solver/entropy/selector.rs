//! Pure entropy-based word selection
//!
//! Selects words that maximize Shannon entropy (expected information gain).

use super::scorer::score_all;
use crate::core::Word;

/// Select best guess by maximizing entropy
///
/// Returns the word with highest entropy and its entropy value,
/// or `None` if the guess pool is empty. Ties go to the
/// lexicographically smallest word.
///
/// # Examples
/// ```
/// use wordle_entropy::core::Word;
/// use wordle_entropy::solver::entropy::select_best_guess;
///
/// let guesses = vec![
///     Word::new("aaaaa").unwrap(),
///     Word::new("aeros").unwrap(),
/// ];
/// let candidates = vec![
///     Word::new("slate").unwrap(),
///     Word::new("irate").unwrap(),
/// ];
///
/// let (best, entropy) = select_best_guess(&guesses, &candidates).unwrap();
/// assert_eq!(best.text(), "aeros"); // AEROS has higher entropy than AAAAA
/// assert!(entropy > 0.0);
/// ```
#[must_use]
pub fn select_best_guess(guess_pool: &[Word], candidates: &[Word]) -> Option<(Word, f64)> {
    score_all(guess_pool, candidates)
        .best()
        .map(|(word, entropy)| (*word, entropy))
}
