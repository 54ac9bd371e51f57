//! Command implementations

pub mod analyze;
pub mod simple;
pub mod solve;
pub mod top;

pub use analyze::{AnalysisResult, analyze_word};
pub use simple::run_simple;
pub use solve::{GuessStep, SolveResult, solve_word};
pub use top::{RankedGuess, top_openers};
