//! Scored guesses for one candidate set

use crate::core::Word;
use std::cmp::Ordering;

/// Expected information (in bits) for every guess in a guess universe
///
/// Entries keep the order of the guess universe they were computed from.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScoreTable {
    entries: Vec<(Word, f64)>,
}

impl ScoreTable {
    #[must_use]
    pub const fn from_entries(entries: Vec<(Word, f64)>) -> Self {
        Self { entries }
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn entries(&self) -> &[(Word, f64)] {
        &self.entries
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Word, f64)> {
        self.entries.iter().map(|(word, score)| (word, *score))
    }

    /// Score of a single guess, if it was scored
    #[must_use]
    pub fn get(&self, word: &Word) -> Option<f64> {
        self.entries
            .iter()
            .find(|(w, _)| w == word)
            .map(|&(_, score)| score)
    }

    /// Highest-scoring guess
    ///
    /// Exact ties go to the lexicographically smallest word, so the choice
    /// does not depend on list order or on how the table was computed.
    ///
    /// # Examples
    /// ```
    /// use wordle_entropy::core::Word;
    /// use wordle_entropy::solver::entropy::ScoreTable;
    ///
    /// let w = |s| Word::new(s).unwrap();
    /// let table = ScoreTable::from_entries(vec![
    ///     (w("slate"), 1.5),
    ///     (w("crane"), 1.5),
    ///     (w("audio"), 0.5),
    /// ]);
    ///
    /// let (best, score) = table.best().unwrap();
    /// assert_eq!(best.text(), "crane");
    /// assert_eq!(score, 1.5);
    /// ```
    #[must_use]
    pub fn best(&self) -> Option<(&Word, f64)> {
        self.iter().min_by(|a, b| rank(*a, *b))
    }

    /// The `n` best guesses, best first, using the same ordering as [`best`](Self::best)
    #[must_use]
    pub fn top(&self, n: usize) -> Vec<(&Word, f64)> {
        let mut ranked: Vec<(&Word, f64)> = self.iter().collect();
        ranked.sort_by(|a, b| rank(*a, *b));
        ranked.truncate(n);
        ranked
    }
}

/// Higher score first, then canonical (lexicographic) word order
fn rank(a: (&Word, f64), b: (&Word, f64)) -> Ordering {
    b.1.total_cmp(&a.1).then_with(|| a.0.cmp(b.0))
}

impl FromIterator<(Word, f64)> for ScoreTable {
    fn from_iter<I: IntoIterator<Item = (Word, f64)>>(iter: I) -> Self {
        Self::from_entries(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn w(s: &str) -> Word {
        Word::new(s).unwrap()
    }

    #[test]
    fn best_picks_highest_score() {
        let table: ScoreTable = [(w("aaaaa"), 0.1), (w("slate"), 2.5), (w("crane"), 2.4)]
            .into_iter()
            .collect();

        let (best, score) = table.best().unwrap();
        assert_eq!(best.text(), "slate");
        assert!((score - 2.5).abs() < f64::EPSILON);
    }

    #[test]
    fn ties_break_lexicographically_regardless_of_order() {
        let forward = ScoreTable::from_entries(vec![(w("bravo"), 1.0), (w("alpha"), 1.0)]);
        let backward = ScoreTable::from_entries(vec![(w("alpha"), 1.0), (w("bravo"), 1.0)]);

        assert_eq!(forward.best().unwrap().0.text(), "alpha");
        assert_eq!(backward.best().unwrap().0.text(), "alpha");
    }

    #[test]
    fn empty_table_has_no_best() {
        let table = ScoreTable::default();
        assert!(table.is_empty());
        assert!(table.best().is_none());
        assert!(table.top(3).is_empty());
    }

    #[test]
    fn top_is_ranked_and_truncated() {
        let table = ScoreTable::from_entries(vec![
            (w("delta"), 0.5),
            (w("bravo"), 2.0),
            (w("alpha"), 2.0),
            (w("charm"), 3.0),
        ]);

        let top: Vec<&str> = table.top(3).iter().map(|(word, _)| word.text()).collect();
        assert_eq!(top, ["charm", "alpha", "bravo"]);
        assert_eq!(table.top(10).len(), 4);
    }

    #[test]
    fn get_finds_scores() {
        let table = ScoreTable::from_entries(vec![(w("alpha"), 0.75)]);
        assert_eq!(table.get(&w("alpha")), Some(0.75));
        assert_eq!(table.get(&w("bravo")), None);
    }
}
