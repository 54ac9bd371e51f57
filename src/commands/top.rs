//! Best opening guesses

use crate::core::Word;
use crate::solver::entropy::ScoreTable;

/// A ranked opener
pub struct RankedGuess {
    pub rank: usize,
    pub word: Word,
    pub entropy: f64,
}

/// The `count` highest-scoring openers, best first
#[must_use]
pub fn top_openers(opening: &ScoreTable, count: usize) -> Vec<RankedGuess> {
    opening
        .top(count)
        .into_iter()
        .enumerate()
        .map(|(i, (word, entropy))| RankedGuess {
            rank: i + 1,
            word: *word,
            entropy,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::entropy::score_all;
    use crate::wordlists::WordList;

    #[test]
    fn openers_are_ranked_by_entropy() {
        let words =
            WordList::from_strs(&["crane", "slate", "irate", "audio", "pious", "zesty"]).unwrap();
        let opening = score_all(words.as_slice(), words.as_slice());

        let top = top_openers(&opening, 3);

        assert_eq!(top.len(), 3);
        assert_eq!(top[0].word, *opening.best().unwrap().0);
        assert!(top.windows(2).all(|p| p[0].entropy >= p[1].entropy));
        assert_eq!(
            top.iter().map(|g| g.rank).collect::<Vec<_>>(),
            [1, 2, 3]
        );
    }

    #[test]
    fn count_larger_than_list() {
        let words = WordList::from_strs(&["crane", "slate"]).unwrap();
        let opening = score_all(words.as_slice(), words.as_slice());
        assert_eq!(top_openers(&opening, 10).len(), 2);
    }
}
