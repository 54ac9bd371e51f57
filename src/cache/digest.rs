//! Word list content digest
//!
//! SHA-256 over the list, so the value is the same on every platform and
//! build. Order-sensitive: adding, removing, editing or reordering a word all
//! give a different digest.

use crate::core::Word;
use sha2::{Digest as _, Sha256};
use std::fmt;

const DIGEST_LEN: usize = 32;

/// SHA-256 content hash of a word sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Digest([u8; DIGEST_LEN]);

impl Digest {
    /// Hash the word count, then every word's bytes followed by a separator
    ///
    /// # Examples
    /// ```
    /// use wordle_entropy::cache::Digest;
    /// use wordle_entropy::core::Word;
    ///
    /// let a = [Word::new("crane").unwrap(), Word::new("slate").unwrap()];
    /// let b = [a[1], a[0]];
    /// assert_ne!(Digest::of(&a), Digest::of(&b));
    /// ```
    #[must_use]
    pub fn of(words: &[Word]) -> Self {
        let mut hasher = Sha256::new();
        hasher.update((words.len() as u64).to_le_bytes());
        for word in words {
            hasher.update(word.chars());
            hasher.update(b"\n");
        }

        let mut bytes = [0u8; DIGEST_LEN];
        bytes.copy_from_slice(&hasher.finalize());
        Self(bytes)
    }

    /// Parse the 64-digit lowercase hex form written by `Display`
    #[must_use]
    pub fn from_hex(hex: &str) -> Option<Self> {
        if hex.len() != DIGEST_LEN * 2 || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return None;
        }

        let mut bytes = [0u8; DIGEST_LEN];
        for (byte, pair) in bytes.iter_mut().zip(hex.as_bytes().chunks_exact(2)) {
            let pair = std::str::from_utf8(pair).ok()?;
            *byte = u8::from_str_radix(pair, 16).ok()?;
        }
        Some(Self(bytes))
    }
}

impl fmt::Display for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in &self.0 {
            write!(f, "{byte:02x}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(list: &[&str]) -> Vec<Word> {
        list.iter().map(|s| Word::new(s).unwrap()).collect()
    }

    fn base() -> Vec<Word> {
        words(&["crane", "slate", "irate", "grate"])
    }

    #[test]
    fn same_content_same_digest() {
        assert_eq!(Digest::of(&base()), Digest::of(&base()));
    }

    #[test]
    fn any_change_changes_digest() {
        let original = Digest::of(&base());

        let mut added = base();
        added.push(Word::new("trace").unwrap());

        let mut removed = base();
        removed.pop();

        let mut edited = base();
        edited[1] = Word::new("slant").unwrap();

        let mut reordered = base();
        reordered.swap(0, 3);

        for changed in [added, removed, edited, reordered] {
            assert_ne!(Digest::of(&changed), original);
        }
    }

    #[test]
    fn empty_list_has_a_digest() {
        assert_ne!(Digest::of(&[]), Digest::of(&base()));
    }

    #[test]
    fn digest_is_fixed_across_builds() {
        // SHA-256 of the little-endian count, then each word and a newline
        assert_eq!(
            Digest::of(&[]).to_string(),
            "af5570f5a1810b7af78caf4bc70a660f0df51e42baf91d4de5b2328de0e83dfc"
        );
        assert_eq!(
            Digest::of(&words(&["crane", "slate"])).to_string(),
            "3d0b5b2f555d028c1dd35fa7d8320d46fe389ab23624e081b270775aa7b18932"
        );
    }

    #[test]
    fn hex_round_trip() {
        let digest = Digest::of(&base());
        let hex = digest.to_string();

        assert_eq!(hex.len(), 64);
        assert!(hex.bytes().all(|b| b.is_ascii_hexdigit()));
        assert_eq!(Digest::from_hex(&hex), Some(digest));
        assert_eq!(Digest::from_hex(&hex.to_uppercase()), Some(digest));
        assert_eq!(Digest::from_hex("xyz"), None);
        assert_eq!(Digest::from_hex(&"z".repeat(64)), None);
        assert_eq!(Digest::from_hex(&hex[..16]), None);
    }
}
