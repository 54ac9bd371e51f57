//! Wordle Entropy - CLI
//!
//! Suggests the guess with the highest expected information gain, either
//! interactively against a real game or by playing out a known answer.

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, Subcommand};
use rand::seq::IndexedRandom;
use std::io;
use std::path::PathBuf;
use wordle_entropy::{
    cache::{CacheOutcome, ScoreCache},
    commands::{analyze_word, run_simple, solve_word, top_openers},
    config::{GuessPool, SolverConfig},
    output::{print_analysis_result, print_solve_result, print_top_openers},
    solver::Solver,
    wordlists::load_from_file,
};

#[derive(Parser)]
#[command(
    name = "wordle_entropy",
    about = "Wordle assistant that suggests the guess with the highest expected information",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Word list file, one 5-letter word per line
    #[arg(short = 'w', long, global = true, default_value = "wordlist.txt")]
    wordlist: PathBuf,

    /// File holding the precomputed opening scores
    #[arg(short = 'c', long, global = true, default_value = "initial_entropy.json")]
    cache: PathBuf,

    /// Worker threads for computing opening scores (0 = all cores)
    #[arg(short = 'j', long, global = true, default_value_t = 0)]
    threads: usize,

    /// Only suggest words that could still be the answer
    #[arg(long, global = true)]
    candidates_only: bool,

    /// Guesses allowed per game
    #[arg(
        long,
        global = true,
        default_value_t = 6,
        value_parser = clap::builder::RangedU64ValueParser::<usize>::new().range(1..)
    )]
    max_attempts: usize,

    /// Hide the progress bar while computing opening scores
    #[arg(long, global = true)]
    no_progress: bool,

    /// More log output (-v debug, -vv trace)
    #[arg(short = 'v', long = "verbose", global = true, action = ArgAction::Count)]
    verbosity: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive mode (default): enter the feedback your game shows
    Play,

    /// Play out a game against a known answer
    Solve {
        /// The answer to find (random word from the list if omitted)
        word: Option<String>,

        /// Show candidate counts and entropy for each turn
        #[arg(short, long)]
        details: bool,
    },

    /// Analyze a word as an opening guess
    Analyze {
        /// Word to analyze
        word: String,
    },

    /// List the best opening guesses
    Top {
        /// How many openers to show
        #[arg(short = 'n', long, default_value_t = 10)]
        count: usize,
    },
}

impl Cli {
    fn solver_config(&self) -> SolverConfig {
        SolverConfig {
            wordlist: self.wordlist.clone(),
            cache_path: self.cache.clone(),
            threads: self.threads,
            guess_pool: if self.candidates_only {
                GuessPool::Candidates
            } else {
                GuessPool::Full
            },
            max_attempts: self.max_attempts,
            show_progress: !self.no_progress,
        }
    }
}

fn init_logging(verbosity: u8) {
    let filter = match verbosity {
        0 => "warn,wordle_entropy=info",
        1 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(filter))
        .format_timestamp(None)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbosity);

    let config = cli.solver_config();
    let words = load_from_file(&config.wordlist)?;

    let cache = ScoreCache::open(config.cache_path.clone()).with_progress(config.show_progress);
    let (opening, outcome) = cache
        .load_or_compute(&words, config.threads)
        .context("failed to compute opening scores")?;
    if let CacheOutcome::Computed(reason) = outcome {
        log::debug!("opening scores recomputed ({reason:?})");
    }

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => {
            let mut solver = Solver::new(&words, opening, &config);
            run_simple(&mut solver, &mut io::stdin().lock(), &mut io::stdout().lock())
        }
        Commands::Solve { word, details } => {
            let target = match word {
                Some(word) => word,
                None => words
                    .as_slice()
                    .choose(&mut rand::rng())
                    .map(|w| w.text().to_string())
                    .context("word list is empty")?,
            };
            let mut solver = Solver::new(&words, opening, &config);
            let result = solve_word(&target, &mut solver)?;
            print_solve_result(&result, details);
            Ok(())
        }
        Commands::Analyze { word } => {
            let result = analyze_word(&word, &words, &opening)?;
            print_analysis_result(&result);
            Ok(())
        }
        Commands::Top { count } => {
            print_top_openers(&top_openers(&opening, count), words.len());
            Ok(())
        }
    }
}
