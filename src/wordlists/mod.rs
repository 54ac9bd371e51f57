//! Word lists for Wordle solving
//!
//! A [`WordList`] is the immutable, ordered set of valid words for a run.
//! Its content digest keys the opening-score cache.

pub mod loader;

use crate::cache::Digest;
use crate::core::{Word, WordError};
use rustc_hash::FxHashSet;

pub use loader::{LoadError, load_from_file, parse_word_list};

/// The full list of valid words, in load order, without duplicates
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordList {
    words: Vec<Word>,
}

impl WordList {
    /// Build a list from words, dropping repeats after their first occurrence
    #[must_use]
    pub fn from_words(words: impl IntoIterator<Item = Word>) -> Self {
        let mut seen = FxHashSet::default();
        let words: Vec<Word> = words.into_iter().filter(|w| seen.insert(*w)).collect();
        Self { words }
    }

    /// Build a list from strings, failing on the first invalid word
    ///
    /// # Errors
    /// Returns the `WordError` of the first string that is not a valid word.
    ///
    /// # Examples
    /// ```
    /// use wordle_entropy::wordlists::WordList;
    ///
    /// let list = WordList::from_strs(&["crane", "slate", "crane"]).unwrap();
    /// assert_eq!(list.len(), 2);
    /// assert!(WordList::from_strs(&["crane", "nope"]).is_err());
    /// ```
    pub fn from_strs(words: &[&str]) -> Result<Self, WordError> {
        let words = words
            .iter()
            .map(|s| Word::new(s))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self::from_words(words))
    }

    #[inline]
    #[must_use]
    pub fn as_slice(&self) -> &[Word] {
        &self.words
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

    #[must_use]
    pub fn contains(&self, word: &Word) -> bool {
        self.words.contains(word)
    }

    /// Content digest used as the cache key
    #[must_use]
    pub fn digest(&self) -> Digest {
        Digest::of(&self.words)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Word> {
        self.words.iter()
    }
}
