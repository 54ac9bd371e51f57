//! Error types shared across the solver
//!
//! Every variant is recoverable: the caller decides whether to re-prompt,
//! undo, or give up.

use crate::core::WordError;
use thiserror::Error;

/// Errors surfaced by the core solving operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SolverError {
    #[error("invalid word: {0}")]
    InvalidWord(#[from] WordError),

    #[error("invalid feedback: {0}")]
    InvalidFeedback(String),

    /// The feedback history contradicts every word in the list
    #[error("no candidates are consistent with the feedback so far")]
    EmptyCandidateSet,

    #[error("no guesses are available")]
    NoGuessAvailable,

    /// Solved or out of attempts; `undo` or `reset` before playing on
    #[error("the game is over")]
    GameOver,
}
