//! Hangman engine entry point
//!
//! Owns the immutable dictionary and sets up rounds from it.

use super::error::HangmanError;
use super::round::Round;
use crate::core::Difficulty;
use std::collections::BTreeMap;
use std::sync::Arc;

/// Adversarial hangman engine
///
/// Holds the dictionary every round draws its words from. The dictionary is
/// never mutated after construction, so clones of a manager share it and can
/// set up independent rounds on different threads.
#[derive(Debug, Clone)]
pub struct HangmanManager {
    dictionary: Arc<[String]>,
}

impl HangmanManager {
    /// Create an engine over the given words
    ///
    /// Words are kept as given, duplicates included.
    ///
    /// # Errors
    /// Returns [`HangmanError::EmptyDictionary`] if `words` yields nothing.
    ///
    /// # Examples
    /// ```
    /// use evil_hangman::engine::{HangmanError, HangmanManager};
    ///
    /// let manager = HangmanManager::new(["cat", "dog", "bird"]).unwrap();
    /// assert_eq!(manager.count_by_length(3), 2);
    ///
    /// let empty: [&str; 0] = [];
    /// assert_eq!(HangmanManager::new(empty).unwrap_err(), HangmanError::EmptyDictionary);
    /// ```
    pub fn new<I, S>(words: I) -> Result<Self, HangmanError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let dictionary: Arc<[String]> = words.into_iter().map(Into::into).collect();

        if dictionary.is_empty() {
            return Err(HangmanError::EmptyDictionary);
        }

        log::debug!("Dictionary loaded with {} words", dictionary.len());
        Ok(Self { dictionary })
    }

    /// Every word in the dictionary
    #[inline]
    #[must_use]
    pub fn words(&self) -> &[String] {
        &self.dictionary
    }

    /// Number of dictionary words with exactly `length` characters
    #[must_use]
    pub fn count_by_length(&self, length: usize) -> usize {
        self.words_of_length(length).count()
    }

    /// Word counts keyed by length, shortest first
    #[must_use]
    pub fn length_histogram(&self) -> BTreeMap<usize, usize> {
        let mut histogram = BTreeMap::new();
        for word in self.dictionary.iter() {
            *histogram.entry(word.chars().count()).or_insert(0) += 1;
        }
        histogram
    }

    /// Set up a new round
    ///
    /// The round starts with every dictionary word of `word_length` live and
    /// an all-placeholder pattern.
    ///
    /// # Errors
    /// Returns [`HangmanError::InvalidRoundParameters`] if no dictionary word
    /// has `word_length` characters or `guess_budget` is zero.
    pub fn start_round(
        &self,
        word_length: usize,
        guess_budget: usize,
        difficulty: Difficulty,
    ) -> Result<Round, HangmanError> {
        let live_words: Vec<String> = self.words_of_length(word_length).cloned().collect();

        if live_words.is_empty() || guess_budget < 1 {
            return Err(HangmanError::InvalidRoundParameters {
                word_length,
                guess_budget,
            });
        }

        log::debug!(
            "Starting {difficulty} round: length {word_length}, {guess_budget} guesses, {} candidate words",
            live_words.len()
        );

        Ok(Round::new(word_length, guess_budget, difficulty, live_words))
    }

    fn words_of_length(&self, length: usize) -> impl Iterator<Item = &String> {
        self.dictionary
            .iter()
            .filter(move |word| word.chars().count() == length)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn manager() -> HangmanManager {
        HangmanManager::new(["cat", "cot", "can", "car", "bird", "a", "cat"]).unwrap()
    }

    #[test]
    fn empty_dictionary_rejected() {
        let words: Vec<String> = Vec::new();
        assert_eq!(
            HangmanManager::new(words).unwrap_err(),
            HangmanError::EmptyDictionary
        );
    }

    #[test]
    fn count_by_length_includes_duplicates() {
        let manager = manager();
        assert_eq!(manager.count_by_length(3), 5);
        assert_eq!(manager.count_by_length(4), 1);
        assert_eq!(manager.count_by_length(1), 1);
        assert_eq!(manager.count_by_length(7), 0);
    }

    #[test]
    fn count_by_length_uses_characters() {
        let manager = HangmanManager::new(["café", "cafe", "naïve"]).unwrap();
        assert_eq!(manager.count_by_length(4), 2);
        assert_eq!(manager.count_by_length(5), 1);
    }

    #[test]
    fn length_histogram() {
        let histogram = manager().length_histogram();
        assert_eq!(histogram.into_iter().collect::<Vec<_>>(), [(1, 1), (3, 5), (4, 1)]);
    }

    #[test]
    fn start_round_filters_by_length() {
        let round = manager().start_round(3, 6, Difficulty::Hard).unwrap();

        assert_eq!(round.word_length(), 3);
        assert_eq!(round.words_remaining(), 5);
        assert_eq!(round.guesses_remaining(), 6);
        assert_eq!(round.pattern().to_string(), "---");
        assert!(round.guessed_letters().next().is_none());
        assert!(round.live_words().iter().all(|w| w.chars().count() == 3));
    }

    #[test]
    fn start_round_rejects_unmatched_length() {
        assert_eq!(
            manager().start_round(9, 6, Difficulty::Easy).unwrap_err(),
            HangmanError::InvalidRoundParameters {
                word_length: 9,
                guess_budget: 6,
            }
        );
    }

    #[test]
    fn start_round_rejects_zero_budget() {
        assert!(matches!(
            manager().start_round(3, 0, Difficulty::Hard),
            Err(HangmanError::InvalidRoundParameters { guess_budget: 0, .. })
        ));
    }

    #[test]
    fn failed_start_leaves_existing_round_untouched() {
        let manager = manager();
        let mut round = manager.start_round(3, 6, Difficulty::Hard).unwrap();
        round.guess('a').unwrap();
        let before = round.clone();

        assert!(manager.start_round(12, 6, Difficulty::Hard).is_err());
        assert_eq!(round, before);
    }

    #[test]
    fn clones_share_the_dictionary() {
        let manager = manager();
        let clone = manager.clone();
        assert!(std::ptr::eq(manager.words(), clone.words()));
    }
}
