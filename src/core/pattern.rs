//! Wordle feedback pattern calculation and representation
//!
//! A pattern encodes the feedback from a guess using base-3 encoding:
//! - 0 = Absent (gray, letter not in word)
//! - 1 = Present (yellow, letter in word, wrong position)
//! - 2 = Correct (green, letter in correct position)
//!
//! The pattern is stored as a single u8 value (0-242), where each position
//! contributes digit × 3^position to the total.

use super::word::{WORD_LEN, Word};
use crate::error::SolverError;

/// Number of distinct patterns (3^5)
pub const PATTERN_COUNT: usize = 243;

/// Feedback for a single letter of a guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Feedback {
    Absent = 0,
    Present = 1,
    Correct = 2,
}

impl Feedback {
    const fn from_digit(digit: u8) -> Self {
        match digit {
            2 => Self::Correct,
            1 => Self::Present,
            _ => Self::Absent,
        }
    }

    fn from_char(ch: char) -> Option<Self> {
        match ch {
            'G' | 'g' | '🟩' => Some(Self::Correct),
            'Y' | 'y' | '🟨' => Some(Self::Present),
            'B' | 'b' | '-' | '_' | '⬜' | '⬛' => Some(Self::Absent),
            _ => None,
        }
    }

    fn from_token(token: &str) -> Option<Self> {
        match token.to_lowercase().as_str() {
            "green" => Some(Self::Correct),
            "yellow" => Some(Self::Present),
            "gray" | "grey" | "black" => Some(Self::Absent),
            other => {
                let mut chars = other.chars();
                match (chars.next(), chars.next()) {
                    (Some(ch), None) => Self::from_char(ch),
                    _ => None,
                }
            }
        }
    }

    const fn emoji(self) -> char {
        match self {
            Self::Correct => '🟩',
            Self::Present => '🟨',
            Self::Absent => '⬜',
        }
    }
}

/// Feedback pattern for a Wordle guess
///
/// Represents the colored feedback as a single byte value.
/// Value range: 0-242 (3^5 - 1 = 243 possible patterns)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Pattern(u8);

impl Pattern {
    /// All greens (perfect match)
    pub const PERFECT: Self = Self(242); // 2 + 2×3 + 2×9 + 2×27 + 2×81

    /// Get the raw pattern value (0-242)
    #[inline]
    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }

    /// Check if this is a perfect match (all greens)
    #[inline]
    #[must_use]
    pub const fn is_perfect(self) -> bool {
        self.0 == Self::PERFECT.0
    }

    /// Calculate the pattern when `guess` is guessed and `answer` is the target
    ///
    /// This implements Wordle's exact feedback rules, including proper handling
    /// of duplicate letters.
    ///
    /// # Algorithm
    /// 1. First pass: Mark all exact matches (greens) and remove from available pool
    /// 2. Second pass: Left to right, mark yellows while the pool still holds the letter
    /// 3. Encode as base-3 number
    ///
    /// # Examples
    /// ```
    /// use wordle_entropy::core::{Word, Pattern};
    ///
    /// let guess = Word::new("crane").unwrap();
    /// let answer = Word::new("slate").unwrap();
    /// let pattern = Pattern::calculate(&guess, &answer);
    ///
    /// // C(gray) R(gray) A(green) N(gray) E(green)
    /// // 0 + 0×3 + 2×9 + 0×27 + 2×81 = 180
    /// assert_eq!(pattern.value(), 180);
    /// ```
    #[must_use]
    pub fn calculate(guess: &Word, answer: &Word) -> Self {
        let guess = guess.chars();
        let mut result = [0u8; WORD_LEN];
        let mut available = answer.letter_counts();

        for (i, (&g, &a)) in guess.iter().zip(answer.chars()).enumerate() {
            if g == a {
                result[i] = 2;
                available[usize::from(g - b'a')] -= 1;
            }
        }

        for (i, &g) in guess.iter().enumerate() {
            if result[i] == 0 {
                let count = &mut available[usize::from(g - b'a')];
                if *count > 0 {
                    result[i] = 1;
                    *count -= 1;
                }
            }
        }

        Self::encode(&result)
    }

    /// Build a pattern from exactly five feedback symbols
    ///
    /// # Examples
    /// ```
    /// use wordle_entropy::core::{Feedback, Pattern};
    ///
    /// let p = Pattern::from_feedback([Feedback::Correct; 5]);
    /// assert!(p.is_perfect());
    /// ```
    #[must_use]
    pub fn from_feedback(symbols: [Feedback; WORD_LEN]) -> Self {
        Self::encode(&symbols.map(|s| s as u8))
    }

    /// Build a pattern from an arbitrary-length symbol slice
    ///
    /// # Errors
    /// Returns `SolverError::InvalidFeedback` unless exactly five symbols are given.
    pub fn try_from_symbols(symbols: &[Feedback]) -> Result<Self, SolverError> {
        let symbols: [Feedback; WORD_LEN] = symbols.try_into().map_err(|_| {
            SolverError::InvalidFeedback(format!(
                "expected {WORD_LEN} symbols, got {}",
                symbols.len()
            ))
        })?;
        Ok(Self::from_feedback(symbols))
    }

    /// Decode into per-position symbols
    #[must_use]
    pub fn symbols(self) -> [Feedback; WORD_LEN] {
        let mut out = [Feedback::Absent; WORD_LEN];
        let mut val = self.0;
        for slot in &mut out {
            *slot = Feedback::from_digit(val % 3);
            val /= 3;
        }
        out
    }

    /// Convert pattern to emoji string
    ///
    /// # Examples
    /// ```
    /// use wordle_entropy::core::Pattern;
    ///
    /// let p: Pattern = "GY-GY".parse().unwrap();
    /// assert_eq!(p.to_emoji(), "🟩🟨⬜🟩🟨");
    /// ```
    #[must_use]
    pub fn to_emoji(self) -> String {
        self.symbols().iter().map(|s| s.emoji()).collect()
    }

    fn encode(digits: &[u8; WORD_LEN]) -> Self {
        let value = digits
            .iter()
            .rev()
            .fold(0u8, |acc, &digit| acc * 3 + digit);
        Self(value)
    }
}

impl TryFrom<u8> for Pattern {
    type Error = SolverError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        if usize::from(value) < PATTERN_COUNT {
            Ok(Self(value))
        } else {
            Err(SolverError::InvalidFeedback(format!(
                "pattern code {value} is out of range"
            )))
        }
    }
}

/// Parses feedback notation
///
/// Accepts the compact form (`"GY-BG"`, `"gy_bg"`, `"🟩🟨⬜⬜🟩"`) or
/// tokens separated by spaces or commas (`"g y b b g"`,
/// `"green, yellow, gray, gray, green"`).
impl std::str::FromStr for Pattern {
    type Err = SolverError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let tokens: Vec<&str> = s
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|t| !t.is_empty())
            .collect();

        let symbols: Option<Vec<Feedback>> = match tokens.as_slice() {
            [compact] => compact.chars().map(Feedback::from_char).collect(),
            _ => tokens.iter().map(|t| Feedback::from_token(t)).collect(),
        };

        let symbols = symbols.ok_or_else(|| {
            SolverError::InvalidFeedback(format!(
                "unrecognised symbol in '{}': use g/y/b (green, yellow, gray)",
                s.trim()
            ))
        })?;

        Self::try_from_symbols(&symbols)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    fn w(s: &str) -> Word {
        Word::new(s).unwrap()
    }

    fn count(pattern: Pattern, symbol: Feedback) -> usize {
        pattern.symbols().iter().filter(|&&s| s == symbol).count()
    }

    #[test]
    fn pattern_perfect_constant() {
        assert_eq!(Pattern::PERFECT.value(), 242);
        assert!(Pattern::PERFECT.is_perfect());
        assert_eq!(count(Pattern::PERFECT, Feedback::Correct), 5);
        assert_eq!(count(Pattern::PERFECT, Feedback::Present), 0);
    }

    #[test]
    fn pattern_all_gray() {
        let pattern = Pattern::calculate(&w("abcde"), &w("fghij"));

        assert_eq!(pattern.value(), 0);
        assert_eq!(count(pattern, Feedback::Correct), 0);
        assert_eq!(count(pattern, Feedback::Present), 0);
    }

    #[test]
    fn pattern_self_is_perfect() {
        for word in ["crane", "slate", "audio", "zzzzz", "aaaaa", "speed"] {
            let word = w(word);
            assert_eq!(Pattern::calculate(&word, &word), Pattern::PERFECT);
        }
    }

    #[test]
    fn pattern_duplicate_letters_green_takes_priority() {
        // SPEED vs ERASE: S(yellow) P(gray) E(yellow) E(yellow) D(gray)
        let pattern = Pattern::calculate(&w("speed"), &w("erase"));

        // 1 + 0×3 + 1×9 + 1×27 + 0×81 = 37
        assert_eq!(pattern.value(), 37);
        assert_eq!(count(pattern, Feedback::Correct), 0);
        assert_eq!(count(pattern, Feedback::Present), 3);
    }

    #[test]
    fn pattern_duplicate_letters_complex() {
        // ROBOT vs FLOOR: first O yellow, second O green
        let pattern = Pattern::calculate(&w("robot"), &w("floor"));

        // 1 + 1×3 + 0×9 + 2×27 + 0×81 = 58
        assert_eq!(pattern.value(), 58);
    }

    #[test]
    fn pattern_extra_copy_is_absent() {
        // One 'a' in the answer at position 0, no 'b': only the green 'a' counts
        let pattern = Pattern::calculate(&w("aabbb"), &w("axyzw"));
        use Feedback::{Absent, Correct};
        assert_eq!(
            pattern.symbols(),
            [Correct, Absent, Absent, Absent, Absent]
        );
    }

    #[test]
    fn pattern_leftmost_yellow_wins() {
        // Two 'e's in the answer, one matched in place: only the leftmost spare 'e' is yellow
        let pattern = Pattern::calculate(&w("eerie"), &w("there"));
        use Feedback::{Absent, Correct, Present};
        assert_eq!(
            pattern.symbols(),
            [Present, Absent, Present, Absent, Correct]
        );

        let pattern = Pattern::calculate(&w("geese"), &w("those"));
        assert_eq!(
            pattern.symbols(),
            [Absent, Absent, Absent, Correct, Correct]
        );
    }

    #[test]
    fn pattern_random_pairs_are_well_formed() {
        let mut rng = StdRng::seed_from_u64(7);
        let random_word = |rng: &mut StdRng| {
            let bytes: Vec<u8> = (0..WORD_LEN).map(|_| rng.random_range(b'a'..=b'e')).collect();
            Word::new(std::str::from_utf8(&bytes).unwrap()).unwrap()
        };

        for _ in 0..500 {
            let guess = random_word(&mut rng);
            let answer = random_word(&mut rng);
            let pattern = Pattern::calculate(&guess, &answer);

            assert!(usize::from(pattern.value()) < PATTERN_COUNT);
            assert_eq!(pattern.symbols().len(), WORD_LEN);
            assert_eq!(pattern.is_perfect(), guess == answer);

            // Greens + yellows never exceed the shared letter multiset
            let g = guess.letter_counts();
            let a = answer.letter_counts();
            let shared: usize = g.iter().zip(a).map(|(&x, y)| usize::from(x.min(y))).sum();
            assert_eq!(
                count(pattern, Feedback::Correct) + count(pattern, Feedback::Present),
                shared
            );
        }
    }

    #[test]
    fn feedback_round_trips_through_value() {
        use Feedback::{Absent, Correct, Present};
        let symbols = [Present, Correct, Correct, Present, Present];
        let pattern = Pattern::from_feedback(symbols);

        // 1 + 2×3 + 2×9 + 1×27 + 1×81 = 133
        assert_eq!(pattern.value(), 133);
        assert_eq!(pattern.symbols(), symbols);
        assert_eq!(Pattern::try_from(133).unwrap(), pattern);
        assert_eq!(Pattern::from_feedback([Absent; 5]).value(), 0);
    }

    #[test]
    fn try_from_rejects_out_of_range() {
        assert!(Pattern::try_from(242).is_ok());
        assert!(matches!(
            Pattern::try_from(243),
            Err(SolverError::InvalidFeedback(_))
        ));
    }

    #[test]
    fn try_from_symbols_rejects_wrong_length() {
        let four = [Feedback::Correct; 4];
        assert!(matches!(
            Pattern::try_from_symbols(&four),
            Err(SolverError::InvalidFeedback(_))
        ));
        let six = [Feedback::Correct; 6];
        assert!(Pattern::try_from_symbols(&six).is_err());
    }

    #[test]
    fn parse_compact_forms() {
        let p1: Pattern = "GYG--".parse().unwrap();
        let p2: Pattern = "🟩🟨🟩⬜⬜".parse().unwrap();
        let p3: Pattern = "gygbb".parse().unwrap();

        assert_eq!(p1, p2);
        assert_eq!(p1, p3);
        // 2 + 1×3 + 2×9 = 23
        assert_eq!(p1.value(), 23);
    }

    #[test]
    fn parse_token_forms() {
        let spaced: Pattern = "g y b b g".parse().unwrap();
        let commas: Pattern = "green, yellow, gray, grey, green".parse().unwrap();
        let compact: Pattern = "gybbg".parse().unwrap();

        assert_eq!(spaced, compact);
        assert_eq!(commas, compact);
    }

    #[test]
    fn parse_invalid() {
        for bad in ["GYGGYX", "GYG", "GXGGY", "", "g y b b", "g y b b q", "gy bbg"] {
            assert!(
                matches!(bad.parse::<Pattern>(), Err(SolverError::InvalidFeedback(_))),
                "{bad:?} should be rejected"
            );
        }
    }
}
