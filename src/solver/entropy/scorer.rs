//! Scoring a whole guess universe
//!
//! `score_all` runs on the caller's thread. `score_all_parallel` splits the
//! universe into disjoint chunks on a dedicated rayon pool; each chunk builds
//! its own sub-table and the indexed collect stitches them back together in
//! universe order.

use super::calculator::calculate_entropy;
use super::table::ScoreTable;
use crate::core::Word;
use indicatif::ProgressBar;
use rayon::prelude::*;
use std::time::Instant;

/// Chunks handed out per worker thread
const CHUNKS_PER_THREAD: usize = 4;

/// Score every guess in `universe` against `candidates`
///
/// # Examples
/// ```
/// use wordle_entropy::core::Word;
/// use wordle_entropy::solver::entropy::score_all;
///
/// let words: Vec<Word> = ["crane", "slate", "irate"]
///     .iter()
///     .map(|s| Word::new(s).unwrap())
///     .collect();
///
/// let table = score_all(&words, &words);
/// assert_eq!(table.len(), 3);
/// assert!(table.iter().all(|(_, h)| h >= 0.0 && h <= 3f64.log2() + 1e-12));
/// ```
#[must_use]
pub fn score_all(universe: &[Word], candidates: &[Word]) -> ScoreTable {
    universe
        .iter()
        .map(|guess| (*guess, calculate_entropy(guess, candidates)))
        .collect()
}

/// Parallel version of [`score_all`]
///
/// `threads == 0` sizes the pool to the available hardware concurrency.
/// The result is bit-identical to [`score_all`] for any thread count.
///
/// # Errors
/// Returns an error if the worker pool cannot be created.
pub fn score_all_parallel(
    universe: &[Word],
    candidates: &[Word],
    threads: usize,
    progress: &ProgressBar,
) -> Result<ScoreTable, rayon::ThreadPoolBuildError> {
    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(threads)
        .thread_name(|i| format!("entropy-{i}"))
        .build()?;

    let workers = pool.current_num_threads();
    let chunk_size = universe
        .len()
        .div_ceil(workers * CHUNKS_PER_THREAD)
        .max(1);

    log::debug!(
        "scoring {} guesses against {} candidates on {workers} threads (chunks of {chunk_size})",
        universe.len(),
        candidates.len(),
    );

    let start = Instant::now();
    let parts: Vec<Vec<(Word, f64)>> = pool.install(|| {
        universe
            .par_chunks(chunk_size)
            .map(|chunk| {
                let part: Vec<(Word, f64)> = chunk
                    .iter()
                    .map(|guess| (*guess, calculate_entropy(guess, candidates)))
                    .collect();
                progress.inc(chunk.len() as u64);
                part
            })
            .collect()
    });

    log::debug!(
        "scored {} guesses in {:.2}s",
        universe.len(),
        start.elapsed().as_secs_f64()
    );

    Ok(parts.into_iter().flatten().collect())
}
