//! Opening-score cache
//!
//! Scoring the full word list against itself is the one quadratic step, so
//! its result is persisted and keyed by a digest of the list's content.

mod digest;
mod store;

pub use digest::Digest;
pub use store::{CacheError, CacheLookup, CacheOutcome, MissReason, ScoreCache};
