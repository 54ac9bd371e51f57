//! Run configuration
//!
//! Filled from the command line in `main`; `Default` gives the values the
//! CLI falls back to.

use std::path::PathBuf;

/// Words considered as guesses after the first turn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GuessPool {
    /// Any word from the list, including words already ruled out as answers
    #[default]
    Full,
    /// Only words that could still be the answer
    Candidates,
}

#[derive(Debug, Clone)]
pub struct SolverConfig {
    /// One word per line
    pub wordlist: PathBuf,
    /// Where opening scores are persisted
    pub cache_path: PathBuf,
    /// Worker threads for the opening computation (0 = all cores)
    pub threads: usize,
    pub guess_pool: GuessPool,
    /// Guesses allowed per game
    pub max_attempts: usize,
    /// Show a progress bar while computing opening scores
    pub show_progress: bool,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            wordlist: PathBuf::from("wordlist.txt"),
            cache_path: PathBuf::from("initial_entropy.json"),
            threads: 0,
            guess_pool: GuessPool::Full,
            max_attempts: 6,
            show_progress: true,
        }
    }
}
