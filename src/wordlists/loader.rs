//! Word list loading utilities
//!
//! Reads a text file with one word per line. Lines are trimmed, folded to
//! ASCII (`ñ` becomes `n`, `á` becomes `a`) and lower-cased; anything that is
//! not then a 5-letter `a..=z` word is skipped.

use super::WordList;
use crate::core::Word;
use deunicode::deunicode;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read word list '{}'", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("word list '{}' contains no valid 5-letter words", .0.display())]
    Empty(PathBuf),
}

/// Load words from a file
///
/// # Errors
///
/// Returns `LoadError::Io` if the file cannot be read and
/// `LoadError::Empty` if no valid word is left after filtering.
///
/// # Examples
/// ```no_run
/// use wordle_entropy::wordlists::load_from_file;
///
/// let words = load_from_file("wordlist.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<WordList, LoadError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let words = parse_word_list(&content);
    if words.is_empty() {
        return Err(LoadError::Empty(path.to_path_buf()));
    }

    log::info!("loaded {} words from {}", words.len(), path.display());
    Ok(words)
}

/// Parse word list text, skipping blank and invalid lines
#[must_use]
pub fn parse_word_list(content: &str) -> WordList {
    let mut skipped = 0usize;

    let words: Vec<Word> = content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .filter_map(|line| match Word::new(&deunicode(line)) {
            Ok(word) => Some(word),
            Err(err) => {
                log::debug!("skipping '{line}': {err}");
                skipped += 1;
                None
            }
        })
        .collect();

    if skipped > 0 {
        log::warn!("skipped {skipped} lines that are not valid 5-letter words");
    }

    let total = words.len();
    let list = WordList::from_words(words);
    if list.len() < total {
        log::debug!("dropped {} duplicate words", total - list.len());
    }

    list
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_normalizes_and_filters() {
        let list = parse_word_list("  CRANE \n\nslate\nab\nsl4te\ncrane\nIrate\r\n");
        let texts: Vec<&str> = list.iter().map(Word::text).collect();
        assert_eq!(texts, ["crane", "slate", "irate"]);
    }

    #[test]
    fn parse_folds_accents() {
        let list = parse_word_list("árbol\ncañon\nCAÑON\ncrane\n");
        let texts: Vec<&str> = list.iter().map(Word::text).collect();
        assert_eq!(texts, ["arbol", "canon", "crane"]);
    }

    #[test]
    fn load_from_missing_file_is_io_error() {
        let path = std::env::temp_dir().join("wordle-entropy-definitely-missing.txt");
        assert!(matches!(
            load_from_file(&path),
            Err(LoadError::Io { .. })
        ));
    }

    #[test]
    fn load_from_file_round_trip() {
        let path = std::env::temp_dir().join(format!(
            "wordle-entropy-loader-{}.txt",
            std::process::id()
        ));
        fs::write(&path, "crane\nslate\n").unwrap();
        let list = load_from_file(&path).unwrap();
        assert_eq!(list.len(), 2);

        fs::write(&path, "no\nword\nhere!\n").unwrap();
        assert!(matches!(load_from_file(&path), Err(LoadError::Empty(_))));

        fs::remove_file(&path).unwrap();
    }
}
