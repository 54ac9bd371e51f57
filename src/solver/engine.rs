//! Main Wordle solver interface

use super::entropy::{ScoreTable, select_best_guess};
use crate::config::{GuessPool, SolverConfig};
use crate::core::{CandidateSet, Pattern, Word};
use crate::error::SolverError;
use crate::wordlists::WordList;

/// A suggested guess and its expected information in bits
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Suggestion {
    pub word: Word,
    pub entropy: f64,
}

/// State of the game after an observation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// All-green feedback
    Solved { turns: usize },
    /// Keep guessing
    Continue { remaining: usize },
    /// Attempt limit reached without a full match
    OutOfAttempts { remaining: usize },
}

/// Main Wordle solver
///
/// Owns the candidate set for one game at a time. The first guess comes from
/// the precomputed opening table; later guesses are scored live.
pub struct Solver<'w> {
    words: &'w WordList,
    opening: ScoreTable,
    guess_pool: GuessPool,
    max_attempts: usize,
    candidates: CandidateSet,
    history: Vec<(Word, Pattern)>,
}

impl<'w> Solver<'w> {
    /// Create a new solver
    ///
    /// # Parameters
    /// - `words`: The full word list (guesses and possible answers)
    /// - `opening`: Scores of every word against the full list
    /// - `config`: Guess pool and attempt limit
    #[must_use]
    pub fn new(words: &'w WordList, opening: ScoreTable, config: &SolverConfig) -> Self {
        Self {
            words,
            opening,
            guess_pool: config.guess_pool,
            max_attempts: config.max_attempts,
            candidates: CandidateSet::new(words.as_slice()),
            history: Vec::new(),
        }
    }

    /// Best next guess
    ///
    /// # Errors
    /// `GameOver` once the game is solved or out of attempts,
    /// `EmptyCandidateSet` if no word fits the feedback so far, or
    /// `NoGuessAvailable` if the word list is empty.
    pub fn next_guess(&self) -> Result<Suggestion, SolverError> {
        if self.is_over() {
            return Err(SolverError::GameOver);
        }
        if self.candidates.is_empty() {
            return Err(SolverError::EmptyCandidateSet);
        }

        if self.history.is_empty() {
            return self
                .opening
                .best()
                .map(|(word, entropy)| Suggestion {
                    word: *word,
                    entropy,
                })
                .ok_or(SolverError::NoGuessAvailable);
        }

        // If only one candidate remains, just guess it
        if let [only] = self.candidates.as_slice() {
            return Ok(Suggestion {
                word: *only,
                entropy: 0.0,
            });
        }

        let universe = match self.guess_pool {
            GuessPool::Full => self.words.as_slice(),
            GuessPool::Candidates => self.candidates.as_slice(),
        };

        select_best_guess(universe, self.candidates.as_slice())
            .map(|(word, entropy)| Suggestion { word, entropy })
            .ok_or(SolverError::NoGuessAvailable)
    }

    /// Record the feedback for `guess`
    ///
    /// # Errors
    /// Returns `GameOver` if the game already ended, and `EmptyCandidateSet`
    /// when the feedback rules out every word. Either way the observation is
    /// discarded and the state is unchanged.
    pub fn observe(&mut self, guess: Word, feedback: Pattern) -> Result<Outcome, SolverError> {
        if self.is_over() {
            return Err(SolverError::GameOver);
        }

        if feedback.is_perfect() {
            if let Ok(solved) = self.candidates.filter(&guess, feedback) {
                self.candidates = solved;
            }
            self.history.push((guess, feedback));
            return Ok(Outcome::Solved {
                turns: self.history.len(),
            });
        }

        let remaining = self.candidates.narrow(&guess, feedback)?;
        self.history.push((guess, feedback));
        log::debug!("{guess} {} leaves {remaining} candidates", feedback.to_emoji());

        if self.history.len() >= self.max_attempts {
            Ok(Outcome::OutOfAttempts { remaining })
        } else {
            Ok(Outcome::Continue { remaining })
        }
    }

    /// Drop the last observation, returning it
    pub fn undo(&mut self) -> Option<(Word, Pattern)> {
        let last = self.history.pop()?;
        self.rebuild_candidates();
        Some(last)
    }

    /// Start a new game with the same word list
    pub fn reset(&mut self) {
        self.history.clear();
        self.candidates = CandidateSet::new(self.words.as_slice());
    }

    /// Solved, or every attempt used; only `undo` or `reset` reopen it
    #[must_use]
    pub fn is_over(&self) -> bool {
        self.history.last().is_some_and(|(_, p)| p.is_perfect())
            || self.history.len() >= self.max_attempts
    }

    /// 1-based number of the turn about to be played
    #[must_use]
    pub fn turn(&self) -> usize {
        self.history.len() + 1
    }

    #[must_use]
    pub fn attempts_left(&self) -> usize {
        self.max_attempts.saturating_sub(self.history.len())
    }

    #[must_use]
    pub fn history(&self) -> &[(Word, Pattern)] {
        &self.history
    }

    #[must_use]
    pub const fn candidates(&self) -> &CandidateSet {
        &self.candidates
    }

    #[must_use]
    pub const fn opening(&self) -> &ScoreTable {
        &self.opening
    }

    #[must_use]
    pub const fn words(&self) -> &'w WordList {
        self.words
    }

    /// Replay the history from the full list
    fn rebuild_candidates(&mut self) {
        let mut candidates = CandidateSet::new(self.words.as_slice());
        for (guess, feedback) in &self.history {
            // Every entry was accepted once, so it still narrows cleanly
            if let Ok(narrowed) = candidates.filter(guess, *feedback) {
                candidates = narrowed;
            }
        }
        self.candidates = candidates;
    }
}
