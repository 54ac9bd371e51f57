//! Simple interactive CLI mode
//!
//! Suggests a guess, reads the feedback the game showed, and narrows the
//! candidates until the word is found or the attempts run out.

use crate::core::Pattern;
use crate::error::SolverError;
use crate::solver::entropy::calculate_metrics;
use crate::solver::{Outcome, Solver};
use anyhow::Result;
use colored::Colorize;
use std::io::{BufRead, Write};

/// What the player typed at the feedback prompt
enum Reply {
    Quit,
    NewGame,
    Undo,
    Feedback(Pattern),
}

/// Run the simple interactive CLI mode
///
/// Reads from `input` until the player quits or the input ends.
///
/// # Errors
///
/// Returns an error if reading input or writing output fails, or if the
/// word list offers no guess at all.
#[allow(clippy::too_many_lines)] // Interactive game loop requires detailed handling
pub fn run_simple<R: BufRead, W: Write>(
    solver: &mut Solver<'_>,
    input: &mut R,
    out: &mut W,
) -> Result<()> {
    writeln!(out, "\n╔══════════════════════════════════════════════════════════════╗")?;
    writeln!(out, "║              Wordle Solver - Interactive Mode                ║")?;
    writeln!(out, "╚══════════════════════════════════════════════════════════════╝\n")?;
    writeln!(out, "After each guess, enter the feedback the game showed:\n")?;
    writeln!(out, "  - g for green (correct letter and position)")?;
    writeln!(out, "  - y for yellow (correct letter, wrong position)")?;
    writeln!(out, "  - b or - for gray (letter not in word)")?;
    writeln!(out, "  e.g. 'g y b b g', 'gybbg' or 'green, yellow, gray, gray, green'\n")?;
    writeln!(out, "Commands: 'win', 'undo', 'new', 'quit'\n")?;

    loop {
        let suggestion = solver.next_guess()?;
        let candidates = solver.candidates();
        let metrics = calculate_metrics(&suggestion.word, candidates.as_slice());

        writeln!(out, "────────────────────────────────────────────────────────────")?;
        writeln!(
            out,
            "Turn {}: {} candidates remaining ({} attempts left)",
            solver.turn(),
            candidates.len(),
            solver.attempts_left()
        )?;
        writeln!(out, "────────────────────────────────────────────────────────────")?;
        writeln!(
            out,
            "\n📊 Suggested guess: {}",
            suggestion.word.text().to_uppercase().bright_yellow().bold()
        )?;
        writeln!(out, "   Entropy:          {:.3} bits", suggestion.entropy)?;
        writeln!(
            out,
            "   Expected remain:  {:.1} candidates",
            metrics.expected_remaining
        )?;
        writeln!(out, "   Worst case:       {} candidates\n", metrics.max_partition)?;

        if candidates.len() <= 10 {
            writeln!(out, "Remaining candidates:")?;
            for candidate in candidates {
                writeln!(out, "  • {}", candidate.text().to_uppercase())?;
            }
            writeln!(out)?;
        }

        let Some(reply) = read_reply(input, out)? else {
            return Ok(());
        };

        let pattern = match reply {
            Reply::Quit => {
                writeln!(out, "\n👋 Thanks for playing!\n")?;
                return Ok(());
            }
            Reply::NewGame => {
                solver.reset();
                writeln!(out, "\n🔄 New game started!\n")?;
                continue;
            }
            Reply::Undo => {
                if solver.undo().is_some() {
                    writeln!(out, "✓ Undone! Back to turn {}\n", solver.turn())?;
                } else {
                    writeln!(out, "Nothing to undo!\n")?;
                }
                continue;
            }
            Reply::Feedback(pattern) => pattern,
        };

        let finished = match solver.observe(suggestion.word, pattern) {
            Ok(Outcome::Continue { remaining }) => {
                writeln!(out, "📉 Remaining possible words: {remaining}\n")?;
                false
            }
            Ok(Outcome::Solved { turns }) => {
                print_victory(solver, turns, out)?;
                true
            }
            Ok(Outcome::OutOfAttempts { remaining }) => {
                writeln!(
                    out,
                    "\n{}",
                    format!("❌ Out of attempts with {remaining} candidates left")
                        .red()
                        .bold()
                )?;
                true
            }
            Err(SolverError::EmptyCandidateSet) => {
                writeln!(
                    out,
                    "\n❌ No word fits that feedback! Check it and enter it again, or 'undo'.\n"
                )?;
                false
            }
            Err(err) => return Err(err.into()),
        };

        if finished {
            write!(out, "Play again? (yes/no): ")?;
            out.flush()?;
            match read_line(input)?.as_deref() {
                Some("yes" | "y") => {
                    solver.reset();
                    writeln!(out, "\n🔄 New game started!\n")?;
                }
                _ => {
                    writeln!(out, "\n👋 Thanks for playing!\n")?;
                    return Ok(());
                }
            }
        }
    }
}

/// Prompt until a command or valid feedback is entered; `None` at end of input
fn read_reply<R: BufRead, W: Write>(input: &mut R, out: &mut W) -> Result<Option<Reply>> {
    loop {
        write!(out, "💬 Enter feedback (e.g. g y b b g), or a command: ")?;
        out.flush()?;

        let Some(line) = read_line(input)? else {
            return Ok(None);
        };

        let reply = match line.as_str() {
            "" => continue,
            "quit" | "q" | "exit" => Reply::Quit,
            "new" | "n" => Reply::NewGame,
            "undo" | "u" => Reply::Undo,
            "win" | "correct" | "solved" => Reply::Feedback(Pattern::PERFECT),
            text => match text.parse::<Pattern>() {
                Ok(pattern) => Reply::Feedback(pattern),
                Err(err) => {
                    writeln!(out, "⚠️  {err}. Please enter feedback again.")?;
                    continue;
                }
            },
        };

        return Ok(Some(reply));
    }
}

/// Next trimmed, lower-cased line; `None` at end of input
fn read_line<R: BufRead>(input: &mut R) -> Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_lowercase()))
}

fn print_victory<W: Write>(solver: &Solver<'_>, turns: usize, out: &mut W) -> Result<()> {
    writeln!(out, "\n{}", "═".repeat(70).bright_cyan())?;
    writeln!(
        out,
        "{}",
        "    🎉 🎊 ✨  W O R D L E   S O L V E D !  ✨ 🎊 🎉    "
            .bright_green()
            .bold()
    )?;
    writeln!(out, "{}", "═".repeat(70).bright_cyan())?;

    writeln!(
        out,
        "\n  Solution found in {} {}",
        turns.to_string().bright_cyan().bold(),
        if turns == 1 { "guess" } else { "guesses" }
    )?;

    writeln!(out, "\n  Guess history:")?;
    for (i, (word, pattern)) in solver.history().iter().enumerate() {
        writeln!(
            out,
            "    {}. {} {}",
            (i + 1).to_string().bright_black(),
            word.text().to_uppercase().bright_white().bold(),
            pattern.to_emoji()
        )?;
    }
    writeln!(out)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SolverConfig;
    use crate::solver::entropy::score_all;
    use crate::wordlists::WordList;
    use std::io::Cursor;

    // No two words agree on their first four letters
    fn words() -> WordList {
        WordList::from_strs(&["crane", "slate", "irate", "audio", "pious", "zesty"]).unwrap()
    }

    fn session(script: &str) -> String {
        let words = words();
        let opening = score_all(words.as_slice(), words.as_slice());
        let mut solver = Solver::new(&words, opening, &SolverConfig::default());

        let mut input = Cursor::new(script.as_bytes().to_vec());
        let mut out = Vec::new();
        run_simple(&mut solver, &mut input, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn win_on_first_turn() {
        let out = session("win\nno\n");
        assert!(out.contains("Solution found in"));
        assert!(out.contains("Thanks for playing"));
    }

    #[test]
    fn quit_ends_session() {
        let out = session("quit\n");
        assert!(out.contains("Turn 1"));
        assert!(out.contains("Thanks for playing"));
    }

    #[test]
    fn invalid_feedback_is_reprompted() {
        let out = session("gyx\nq\n");
        assert!(out.contains("invalid feedback"));
        assert!(out.contains("Thanks for playing"));
    }

    #[test]
    fn contradictory_feedback_keeps_state() {
        let out = session("ggggb\nundo\nquit\n");
        assert!(out.contains("No word fits that feedback"));
        assert!(out.contains("Nothing to undo"));
    }

    #[test]
    fn end_of_input_stops_quietly() {
        let out = session("");
        assert!(out.contains("Turn 1"));
    }

    #[test]
    fn new_game_restarts() {
        let out = session("new\nquit\n");
        assert!(out.contains("New game started"));
        assert_eq!(out.matches("Turn 1:").count(), 2);
    }
}
