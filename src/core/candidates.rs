//! Candidate set narrowing
//!
//! Holds the words that are still consistent with every observation.

use super::{Pattern, Word};
use crate::error::SolverError;

/// Words still possible given all feedback so far
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateSet {
    words: Vec<Word>,
}

impl CandidateSet {
    /// Start from the full word list
    #[must_use]
    pub fn new(words: &[Word]) -> Self {
        Self {
            words: words.to_vec(),
        }
    }

    /// Keep only the words that would have produced `feedback` for `guess`
    ///
    /// # Errors
    /// Returns `SolverError::EmptyCandidateSet` if nothing survives, which
    /// means the feedback contradicts every remaining word.
    ///
    /// # Examples
    /// ```
    /// use wordle_entropy::core::{CandidateSet, Pattern, Word};
    ///
    /// let words: Vec<Word> = ["crane", "slate", "irate"]
    ///     .iter()
    ///     .map(|s| Word::new(s).unwrap())
    ///     .collect();
    /// let set = CandidateSet::new(&words);
    ///
    /// let guess = Word::new("slate").unwrap();
    /// let narrowed = set.filter(&guess, Pattern::PERFECT).unwrap();
    /// assert!(narrowed.is_solved());
    /// ```
    pub fn filter(&self, guess: &Word, feedback: Pattern) -> Result<Self, SolverError> {
        let words: Vec<Word> = self
            .words
            .iter()
            .filter(|candidate| Pattern::calculate(guess, candidate) == feedback)
            .copied()
            .collect();

        if words.is_empty() {
            return Err(SolverError::EmptyCandidateSet);
        }

        Ok(Self { words })
    }

    /// In-place variant of [`filter`](Self::filter)
    ///
    /// The set is left untouched when an error is returned.
    ///
    /// # Errors
    /// Returns `SolverError::EmptyCandidateSet` if nothing survives.
    pub fn narrow(&mut self, guess: &Word, feedback: Pattern) -> Result<usize, SolverError> {
        *self = self.filter(guess, feedback)?;
        Ok(self.len())
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Exactly one word remains
    #[inline]
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.words.len() == 1
    }

    #[must_use]
    pub fn contains(&self, word: &Word) -> bool {
        self.words.contains(word)
    }

    #[inline]
    #[must_use]
    pub fn as_slice(&self) -> &[Word] {
        &self.words
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Word> {
        self.words.iter()
    }
}

impl<'a> IntoIterator for &'a CandidateSet {
    type Item = &'a Word;
    type IntoIter = std::slice::Iter<'a, Word>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
