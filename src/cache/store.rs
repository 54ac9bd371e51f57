//! Persisted opening scores
//!
//! One JSON file holds the score table for the full word list scored against
//! itself, tagged with the list's digest. A file that is missing, stale or
//! fails to parse is a miss: the table is recomputed and the file rewritten.

use super::Digest;
use crate::core::Word;
use crate::solver::entropy::{ScoreTable, score_all_parallel};
use crate::wordlists::WordList;
use indicatif::{ProgressBar, ProgressStyle};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::Instant;
use thiserror::Error;

/// Bumped whenever the file layout or the scoring rules change
const CACHE_VERSION: u32 = 2;

/// Slack allowed above log2(n) when sanity-checking stored scores
const SCORE_EPSILON: f64 = 1e-9;

#[derive(Debug, Error)]
pub enum CacheError {
    #[error("cache I/O failed on '{}'", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to encode score cache")]
    Serialize(#[from] serde_json::Error),
    #[error("failed to start scoring worker pool")]
    Pool(#[from] rayon::ThreadPoolBuildError),
}

/// Why a lookup did not produce a table
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MissReason {
    /// No cache file yet
    Absent,
    /// The file was written for a different word list
    Mismatch { stored: String },
    /// The file could not be trusted
    Corrupt(String),
}

/// Result of [`ScoreCache::load`]
#[derive(Debug, Clone, PartialEq)]
pub enum CacheLookup {
    Hit(ScoreTable),
    Miss(MissReason),
}

/// How [`ScoreCache::load_or_compute`] produced its table
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CacheOutcome {
    Hit,
    Computed(MissReason),
}

#[derive(Serialize, Deserialize)]
struct CacheFile {
    version: u32,
    digest: String,
    word_count: usize,
    scores: Vec<CachedScore>,
}

#[derive(Serialize, Deserialize)]
struct CachedScore {
    word: String,
    score: f64,
}

/// Opening-score cache backed by a single file
#[derive(Debug, Clone)]
pub struct ScoreCache {
    path: PathBuf,
    show_progress: bool,
}

impl ScoreCache {
    /// Open a cache at `path`; nothing is read until [`load`](Self::load)
    #[must_use]
    pub fn open(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            show_progress: false,
        }
    }

    /// Show a progress bar while recomputing
    #[must_use]
    pub const fn with_progress(mut self, show: bool) -> Self {
        self.show_progress = show;
        self
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the stored table if it was computed for `digest`
    pub fn load(&self, digest: Digest) -> CacheLookup {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                return CacheLookup::Miss(MissReason::Absent);
            }
            Err(err) => return CacheLookup::Miss(MissReason::Corrupt(err.to_string())),
        };

        let file: CacheFile = match serde_json::from_str(&raw) {
            Ok(file) => file,
            Err(err) => return CacheLookup::Miss(MissReason::Corrupt(err.to_string())),
        };

        if file.version != CACHE_VERSION {
            return CacheLookup::Miss(MissReason::Corrupt(format!(
                "unsupported cache version {}",
                file.version
            )));
        }

        match Digest::from_hex(&file.digest) {
            Some(stored) if stored == digest => {}
            Some(_) => {
                return CacheLookup::Miss(MissReason::Mismatch {
                    stored: file.digest,
                });
            }
            None => {
                return CacheLookup::Miss(MissReason::Corrupt(format!(
                    "malformed digest '{}'",
                    file.digest
                )));
            }
        }

        match decode_scores(file) {
            Ok(table) => CacheLookup::Hit(table),
            Err(reason) => CacheLookup::Miss(MissReason::Corrupt(reason)),
        }
    }

    /// Write `table` for `digest`, replacing any previous file
    ///
    /// # Errors
    /// Returns an error if the file cannot be encoded or written.
    pub fn store(&self, digest: Digest, table: &ScoreTable) -> Result<(), CacheError> {
        let file = CacheFile {
            version: CACHE_VERSION,
            digest: digest.to_string(),
            word_count: table.len(),
            scores: table
                .iter()
                .map(|(word, score)| CachedScore {
                    word: word.text().to_string(),
                    score,
                })
                .collect(),
        };
        let encoded = serde_json::to_vec(&file)?;

        let io_err = |source| CacheError::Io {
            path: self.path.clone(),
            source,
        };

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(io_err)?;
        }

        // Single writer; the rename keeps readers from seeing a half-written file
        let tmp = self.path.with_extension("tmp");
        fs::write(&tmp, encoded).map_err(io_err)?;
        fs::rename(&tmp, &self.path).map_err(io_err)?;

        log::debug!("stored {} opening scores in {}", table.len(), self.path.display());
        Ok(())
    }

    /// Opening scores for `words`, from the file when it matches, else recomputed
    ///
    /// A recomputed table is written back before returning. Failing to write
    /// is logged and otherwise ignored.
    ///
    /// # Errors
    /// Returns an error only if the worker pool cannot be started.
    pub fn load_or_compute(
        &self,
        words: &WordList,
        threads: usize,
    ) -> Result<(ScoreTable, CacheOutcome), CacheError> {
        let digest = words.digest();

        let reason = match self.load(digest) {
            CacheLookup::Hit(table) if matches_list(&table, words) => {
                log::info!(
                    "loaded {} opening scores from {}",
                    table.len(),
                    self.path.display()
                );
                return Ok((table, CacheOutcome::Hit));
            }
            CacheLookup::Hit(_) => {
                MissReason::Corrupt("stored words do not match the word list".to_string())
            }
            CacheLookup::Miss(reason) => reason,
        };

        match &reason {
            MissReason::Absent => log::info!("no score cache at {}", self.path.display()),
            MissReason::Mismatch { stored } => {
                log::info!("word list changed (cached digest {stored}, now {digest})");
            }
            MissReason::Corrupt(why) => {
                log::warn!("ignoring unreadable score cache {}: {why}", self.path.display());
            }
        }

        let start = Instant::now();
        let progress = self.progress_bar(words.len());
        let table = score_all_parallel(words.as_slice(), words.as_slice(), threads, &progress)?;
        progress.finish_and_clear();
        log::info!(
            "computed {} opening scores in {:.2}s",
            table.len(),
            start.elapsed().as_secs_f64()
        );

        if let Err(err) = self.store(digest, &table) {
            log::warn!("could not save score cache: {err}");
        }

        Ok((table, CacheOutcome::Computed(reason)))
    }

    fn progress_bar(&self, len: usize) -> ProgressBar {
        if !self.show_progress {
            return ProgressBar::hidden();
        }

        let pb = ProgressBar::new(len as u64);
        if let Ok(style) = ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
        {
            pb.set_style(style.progress_chars("█▓▒░"));
        }
        pb.set_message("scoring opening guesses");
        pb
    }
}

/// Turn the stored entries back into a table, checking every value
fn decode_scores(file: CacheFile) -> Result<ScoreTable, String> {
    if file.scores.len() != file.word_count {
        return Err(format!(
            "expected {} scores, found {}",
            file.word_count,
            file.scores.len()
        ));
    }

    let max = if file.word_count > 0 {
        (file.word_count as f64).log2() + SCORE_EPSILON
    } else {
        0.0
    };

    file.scores
        .into_iter()
        .map(|entry| {
            let word = Word::new(&entry.word).map_err(|e| format!("bad word '{}': {e}", entry.word))?;
            if !entry.score.is_finite() || entry.score < 0.0 || entry.score > max {
                return Err(format!("score {} for '{word}' is out of range", entry.score));
            }
            Ok((word, entry.score))
        })
        .collect::<Result<Vec<_>, _>>()
        .map(ScoreTable::from_entries)
}

/// The table scores exactly the list's words, in list order
fn matches_list(table: &ScoreTable, words: &WordList) -> bool {
    table.len() == words.len() && table.iter().zip(words.iter()).all(|((a, _), b)| a == b)
}
