//! Word solving command
//!
//! Plays a whole game against a known hidden word and records every step.

use crate::core::{Pattern, Word};
use crate::solver::entropy::calculate_metrics;
use crate::solver::{Outcome, Solver};
use anyhow::{Result, bail};

/// Result of solving a word
pub struct SolveResult {
    pub success: bool,
    pub guesses: Vec<GuessStep>,
    pub target: Word,
}

/// A single guess step in the solution
pub struct GuessStep {
    pub word: Word,
    pub pattern: Pattern,
    pub candidates_before: usize,
    pub candidates_after: usize,
    pub entropy: f64,
    pub expected_remaining: f64,
}

/// Solve a specific word, starting a fresh game on `solver`
///
/// # Errors
///
/// Returns an error if:
/// - The target word is invalid (not 5 letters or contains non-ASCII)
/// - The target is not in the solver's word list
/// - The solver cannot provide a valid guess
pub fn solve_word(target: &str, solver: &mut Solver<'_>) -> Result<SolveResult> {
    let target = Word::new(target)?;
    if !solver.words().contains(&target) {
        bail!("'{target}' is not in the word list");
    }

    solver.reset();
    let mut guesses: Vec<GuessStep> = Vec::new();

    loop {
        let candidates_before = solver.candidates().len();
        let suggestion = solver.next_guess()?;
        let metrics = calculate_metrics(&suggestion.word, solver.candidates().as_slice());

        let pattern = Pattern::calculate(&suggestion.word, &target);
        let outcome = solver.observe(suggestion.word, pattern)?;

        guesses.push(GuessStep {
            word: suggestion.word,
            pattern,
            candidates_before,
            candidates_after: solver.candidates().len(),
            entropy: suggestion.entropy,
            expected_remaining: metrics.expected_remaining,
        });

        match outcome {
            Outcome::Continue { .. } => {}
            Outcome::Solved { .. } => {
                return Ok(SolveResult {
                    success: true,
                    guesses,
                    target,
                });
            }
            Outcome::OutOfAttempts { .. } => {
                return Ok(SolveResult {
                    success: false,
                    guesses,
                    target,
                });
            }
        }
    }
}
