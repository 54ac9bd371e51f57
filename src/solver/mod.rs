//! Wordle solving algorithms
//!
//! Entropy scoring plus the turn-by-turn solver built on it.

mod engine;
pub mod entropy;

pub use engine::{Outcome, Solver, Suggestion};
