//! Hangman reveal pattern
//!
//! A pattern has one slot per letter of the secret word. Each slot is either
//! unrevealed (stored as [`Pattern::PLACEHOLDER`]) or holds the letter that
//! has been revealed at that position.
//!
//! Patterns order lexicographically by their slot characters, with the
//! placeholder sorting before every letter. This matches the ordering of the
//! rendered strings, so `"-b-" < "a--"`.

use std::fmt;

/// Reveal pattern for the word being guessed
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Pattern {
    slots: Vec<char>,
}

impl Pattern {
    /// Character stored in unrevealed slots
    pub const PLACEHOLDER: char = '-';

    /// Create a pattern of `len` unrevealed slots
    ///
    /// # Examples
    /// ```
    /// use evil_hangman::core::Pattern;
    ///
    /// let pattern = Pattern::blank(4);
    /// assert_eq!(pattern.to_string(), "----");
    /// assert_eq!(pattern.revealed_count(), 0);
    /// ```
    #[must_use]
    pub fn blank(len: usize) -> Self {
        Self {
            slots: vec![Self::PLACEHOLDER; len],
        }
    }

    /// Pattern a word shows to a player who has tried the given letters
    ///
    /// Letters of `word` for which `is_guessed` holds are revealed, every
    /// other position stays a placeholder.
    #[must_use]
    pub fn masked(word: &str, is_guessed: impl Fn(char) -> bool) -> Self {
        Self {
            slots: word
                .chars()
                .map(|ch| if is_guessed(ch) { ch } else { Self::PLACEHOLDER })
                .collect(),
        }
    }

    /// Candidate pattern for `word` when `letter` is guessed
    ///
    /// Positions where `word` has `letter` show it; all other positions keep
    /// whatever this pattern already shows. Earlier reveals are never
    /// overwritten.
    ///
    /// `word` must have exactly [`len`](Self::len) characters.
    ///
    /// # Examples
    /// ```
    /// use evil_hangman::core::Pattern;
    ///
    /// let current = Pattern::from("-a-");
    /// assert_eq!(current.reveal("cat", 't').to_string(), "-at");
    /// assert_eq!(current.reveal("can", 't'), current);
    /// ```
    #[must_use]
    pub fn reveal(&self, word: &str, letter: char) -> Self {
        debug_assert_eq!(word.chars().count(), self.slots.len());

        Self {
            slots: word
                .chars()
                .zip(&self.slots)
                .map(|(ch, &shown)| if ch == letter { letter } else { shown })
                .collect(),
        }
    }

    /// Number of slots
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// True for a zero-length pattern
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Revealed letter at `position`, `None` while unrevealed
    ///
    /// # Panics
    /// Panics if `position >= len()`
    #[inline]
    #[must_use]
    pub fn slot(&self, position: usize) -> Option<char> {
        Some(self.slots[position]).filter(|&ch| ch != Self::PLACEHOLDER)
    }

    /// Iterate over the slots, `None` for unrevealed positions
    pub fn slots(&self) -> impl Iterator<Item = Option<char>> + '_ {
        (0..self.slots.len()).map(|i| self.slot(i))
    }

    /// Count the revealed slots across the whole pattern
    #[must_use]
    pub fn revealed_count(&self) -> usize {
        self.slots
            .iter()
            .filter(|&&ch| ch != Self::PLACEHOLDER)
            .count()
    }

    /// Check whether every slot has been revealed
    #[inline]
    #[must_use]
    pub fn is_complete(&self) -> bool {
        !self.slots.contains(&Self::PLACEHOLDER)
    }
}

impl From<&str> for Pattern {
    fn from(s: &str) -> Self {
        Self {
            slots: s.chars().collect(),
        }
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &ch in &self.slots {
            write!(f, "{ch}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_pattern_has_no_reveals() {
        let pattern = Pattern::blank(5);
        assert_eq!(pattern.len(), 5);
        assert_eq!(pattern.revealed_count(), 0);
        assert!(!pattern.is_complete());
        assert!(pattern.slots().all(|slot| slot.is_none()));
    }

    #[test]
    fn reveal_marks_every_occurrence() {
        let pattern = Pattern::blank(5);
        let revealed = pattern.reveal("speed", 'e');
        assert_eq!(revealed.to_string(), "--ee-");
        assert_eq!(revealed.revealed_count(), 2);
    }

    #[test]
    fn reveal_keeps_earlier_letters() {
        let pattern = Pattern::from("s----");
        let revealed = pattern.reveal("speed", 'd');
        assert_eq!(revealed.to_string(), "s---d");
    }

    #[test]
    fn reveal_absent_letter_is_identity() {
        let pattern = Pattern::from("-a-");
        assert_eq!(pattern.reveal("cat", 'z'), pattern);
    }

    #[test]
    fn slot_access() {
        let pattern = Pattern::from("-a-");
        assert_eq!(pattern.slot(0), None);
        assert_eq!(pattern.slot(1), Some('a'));
        assert_eq!(
            pattern.slots().collect::<Vec<_>>(),
            vec![None, Some('a'), None]
        );
    }

    #[test]
    fn masked_shows_only_guessed_letters() {
        let guessed = ['a', 't'];
        let pattern = Pattern::masked("cat", |ch| guessed.contains(&ch));
        assert_eq!(pattern.to_string(), "-at");
    }

    #[test]
    fn complete_pattern() {
        assert!(Pattern::from("cat").is_complete());
        assert!(!Pattern::from("c-t").is_complete());
        assert!(Pattern::blank(0).is_complete());
    }

    #[test]
    fn ordering_matches_rendered_strings() {
        let mut patterns = vec![
            Pattern::from("a--"),
            Pattern::from("abc"),
            Pattern::from("-b-"),
            Pattern::from("---"),
        ];
        patterns.sort();

        let rendered: Vec<String> = patterns.iter().map(ToString::to_string).collect();
        assert_eq!(rendered, ["---", "-b-", "a--", "abc"]);
    }
}
