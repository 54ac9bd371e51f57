//! Wordle Entropy
//!
//! A Wordle assistant that suggests the guess with the highest expected
//! information gain over the words still consistent with the feedback.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_entropy::core::{Pattern, Word};
//! use wordle_entropy::solver::entropy::score_all;
//! use wordle_entropy::wordlists::WordList;
//!
//! let words = WordList::from_strs(&["crane", "slate", "irate", "audio"]).unwrap();
//! let opening = score_all(words.as_slice(), words.as_slice());
//! let (best, bits) = opening.best().unwrap();
//! assert!(bits > 0.0);
//!
//! let answer = Word::new("slate").unwrap();
//! let pattern = Pattern::calculate(best, &answer);
//! println!("{best} -> {}", pattern.to_emoji());
//! ```

// Core domain types
pub mod core;

// Scoring and the game loop
pub mod solver;

// Word lists
pub mod wordlists;

// Opening-score persistence
pub mod cache;

// Run configuration
pub mod config;

pub mod error;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
