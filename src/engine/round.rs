//! Per-game round state
//!
//! A round tracks the live word set, the reveal pattern, the letters tried and
//! the remaining wrong-guess budget. Each guess partitions the live words into
//! families and commits the round to one of them.

use super::error::HangmanError;
use super::family::partition;
use super::selector::select_family;
use crate::core::{Difficulty, Pattern};
use rand::Rng;
use rand::seq::IndexedRandom;
use std::collections::{BTreeMap, BTreeSet};

/// Diagnostic outcome of one guess
///
/// Exposes the engine's branching decision: every family the guess could have
/// led to, and the one that was picked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuessReport {
    /// The guessed letter
    pub letter: char,
    /// Size of every family, ordered by pattern
    pub families: BTreeMap<Pattern, usize>,
    /// Pattern of the family the round committed to
    pub chosen: Pattern,
    /// Whether the guess revealed at least one slot
    pub revealed: bool,
}

impl GuessReport {
    /// Number of words in the chosen family
    #[must_use]
    pub fn chosen_size(&self) -> usize {
        self.families.get(&self.chosen).copied().unwrap_or(0)
    }
}

/// State of one game of hangman
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Round {
    word_length: usize,
    guesses_left: usize,
    difficulty: Difficulty,
    guessed: BTreeSet<char>,
    pattern: Pattern,
    live_words: Vec<String>,
}

impl Round {
    pub(crate) fn new(
        word_length: usize,
        guess_budget: usize,
        difficulty: Difficulty,
        live_words: Vec<String>,
    ) -> Self {
        Self {
            word_length,
            guesses_left: guess_budget,
            difficulty,
            guessed: BTreeSet::new(),
            pattern: Pattern::blank(word_length),
            live_words,
        }
    }

    #[inline]
    #[must_use]
    pub const fn word_length(&self) -> usize {
        self.word_length
    }

    #[inline]
    #[must_use]
    pub const fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    /// Number of words still consistent with every guess so far
    #[inline]
    #[must_use]
    pub fn words_remaining(&self) -> usize {
        self.live_words.len()
    }

    /// Wrong guesses the player may still make
    #[inline]
    #[must_use]
    pub const fn guesses_remaining(&self) -> usize {
        self.guesses_left
    }

    /// Letters tried this round, in sorted order
    pub fn guessed_letters(&self) -> impl Iterator<Item = char> + '_ {
        self.guessed.iter().copied()
    }

    /// Check whether `letter` was already tried this round
    #[inline]
    #[must_use]
    pub fn already_guessed(&self, letter: char) -> bool {
        self.guessed.contains(&letter)
    }

    /// Current reveal pattern
    #[inline]
    #[must_use]
    pub const fn pattern(&self) -> &Pattern {
        &self.pattern
    }

    /// Words still consistent with every guess so far
    #[inline]
    #[must_use]
    pub fn live_words(&self) -> &[String] {
        &self.live_words
    }

    /// True once every slot of the pattern is revealed
    #[inline]
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.pattern.is_complete()
    }

    /// True once the wrong-guess budget is spent
    #[inline]
    #[must_use]
    pub const fn is_lost(&self) -> bool {
        self.guesses_left == 0
    }

    #[inline]
    #[must_use]
    pub fn is_over(&self) -> bool {
        self.is_solved() || self.is_lost()
    }

    /// Process a guess
    ///
    /// Partitions the live words into families for `letter`, picks one
    /// according to the round's difficulty and narrows the round to it. A
    /// guess that leaves the pattern unchanged costs one remaining guess.
    ///
    /// # Errors
    /// - [`HangmanError::AlreadyGuessed`] if `letter` was tried before
    /// - [`HangmanError::NoWordsRemaining`] if the live set is empty
    ///
    /// The round is unchanged when an error is returned.
    ///
    /// # Examples
    /// ```
    /// use evil_hangman::core::{Difficulty, Pattern};
    /// use evil_hangman::engine::HangmanManager;
    ///
    /// let manager = HangmanManager::new(["cat", "cot", "can", "car"]).unwrap();
    /// let mut round = manager.start_round(3, 5, Difficulty::Hard).unwrap();
    ///
    /// let report = round.guess('a').unwrap();
    /// assert_eq!(report.families.len(), 2);
    /// assert_eq!(report.chosen, Pattern::from("-a-"));
    /// assert_eq!(round.words_remaining(), 3);
    /// assert_eq!(round.guesses_remaining(), 5);
    /// ```
    pub fn guess(&mut self, letter: char) -> Result<GuessReport, HangmanError> {
        if self.already_guessed(letter) {
            return Err(HangmanError::AlreadyGuessed(letter));
        }

        let mut families = partition(&self.live_words, &self.pattern, letter);
        let guess_count = self.guessed.len() + 1;
        let chosen = select_family(&families, self.difficulty, guess_count)
            .ok_or(HangmanError::NoWordsRemaining)?;

        let sizes: BTreeMap<Pattern, usize> = families
            .iter()
            .map(|(pattern, words)| (pattern.clone(), words.len()))
            .collect();
        log::debug!("Guess '{letter}' families: {sizes:?}");

        self.guessed.insert(letter);
        let revealed = chosen != self.pattern;
        if revealed {
            self.pattern = chosen.clone();
        } else {
            self.guesses_left = self.guesses_left.saturating_sub(1);
        }
        self.live_words = families.remove(&chosen).unwrap_or_default();

        log::debug!(
            "Committed to {chosen} with {} words, {} guesses left",
            self.live_words.len(),
            self.guesses_left
        );

        Ok(GuessReport {
            letter,
            families: sizes,
            chosen,
            revealed,
        })
    }

    /// Settle on a concrete secret word using the thread RNG
    ///
    /// # Errors
    /// Returns [`HangmanError::NoWordsRemaining`] if the live set is empty.
    pub fn reveal_secret(&self) -> Result<&str, HangmanError> {
        self.reveal_secret_with(&mut rand::rng())
    }

    /// Settle on a concrete secret word
    ///
    /// With a single live word it is returned as is. Otherwise one live word
    /// is drawn uniformly from `rng`.
    ///
    /// # Errors
    /// Returns [`HangmanError::NoWordsRemaining`] if the live set is empty.
    pub fn reveal_secret_with<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<&str, HangmanError> {
        match self.live_words.as_slice() {
            [] => Err(HangmanError::NoWordsRemaining),
            [only] => Ok(only.as_str()),
            words => words
                .choose(rng)
                .map(String::as_str)
                .ok_or(HangmanError::NoWordsRemaining),
        }
    }
}
