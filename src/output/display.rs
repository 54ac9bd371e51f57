//! Display functions for command results

use super::formatters::{bits_gained, entropy_bar};
use crate::commands::{AnalysisResult, RankedGuess, SolveResult};
use colored::Colorize;

/// Print the result of solving a word
pub fn print_solve_result(result: &SolveResult, verbose: bool) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Solving: {}",
        result.target.text().to_uppercase().bright_yellow().bold()
    );
    println!("{}", "─".repeat(60).cyan());

    for (i, step) in result.guesses.iter().enumerate() {
        println!(
            "\nTurn {}: {} {}",
            i + 1,
            step.word.text().to_uppercase(),
            step.pattern.to_emoji()
        );

        if verbose {
            println!(
                "  Candidates: {} → {}",
                step.candidates_before, step.candidates_after
            );
            println!("  Entropy:    {:.3} bits", step.entropy);
            println!("  Expected:   {:.1} candidates", step.expected_remaining);

            if step.candidates_after > 0 {
                println!(
                    "  Info gained: {:.3} bits ({:.1}x reduction)",
                    bits_gained(step.candidates_before, step.candidates_after),
                    step.candidates_before as f64 / step.candidates_after as f64
                );
            }
        }
    }

    println!();
    if result.success {
        println!(
            "{}",
            format!("✅ Solved in {} guesses!", result.guesses.len())
                .green()
                .bold()
        );
    } else {
        println!(
            "{}",
            format!("❌ Failed to solve in {} guesses", result.guesses.len())
                .red()
                .bold()
        );
    }
}

/// Print the result of word analysis
pub fn print_analysis_result(result: &AnalysisResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} ",
        "ENTROPY ANALYSIS:".bright_cyan().bold(),
        result.word.text().to_uppercase().bright_yellow().bold()
    );
    println!("{}", "═".repeat(60).cyan());

    let bar = entropy_bar(result.entropy, result.total_candidates, 30);

    println!("\n📊 Against {} possible answers:", result.total_candidates);
    println!(
        "   Entropy:     [{}] {}",
        bar.green(),
        format!("{:.3} bits", result.entropy).bright_yellow()
    );
    println!(
        "   Info gain:   {:.1}x reduction",
        result.expected_reduction
    );
    println!(
        "   Expected:    {:.1} candidates remain",
        result.expected_remaining
    );
    println!("   Worst case:  {} candidates remain", result.worst_case);
    println!(
        "   Rank:        #{} of {} openers",
        result.rank, result.total_candidates
    );
}

/// Print the best opening guesses as a table
pub fn print_top_openers(openers: &[RankedGuess], total: usize) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} ",
        format!("TOP {} OPENING GUESSES", openers.len())
            .bright_cyan()
            .bold()
    );
    println!("{}", "═".repeat(60).cyan());
    println!();

    for guess in openers {
        println!(
            "  {:>4}. {}  [{}] {:.4} bits",
            guess.rank,
            guess.word.text().to_uppercase().bright_yellow().bold(),
            entropy_bar(guess.entropy, total, 20).green(),
            guess.entropy
        );
    }
}
