//! Core domain types for Wordle
//!
//! This module contains the fundamental domain types.
//! All types here are pure, testable, and have clear mathematical properties.

mod candidates;
mod pattern;
mod word;

pub use candidates::CandidateSet;
pub use pattern::{Feedback, PATTERN_COUNT, Pattern};
pub use word::{WORD_LEN, Word, WordError};
