//! Engine error type
//!
//! Every variant is a broken caller precondition. None of them is retried, and
//! the engine state is left untouched when one is returned.

use std::fmt;

/// Error returned by the hangman engine
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HangmanError {
    /// The engine was constructed without any words
    EmptyDictionary,
    /// No dictionary word has the requested length, or the guess budget is zero
    InvalidRoundParameters {
        word_length: usize,
        guess_budget: usize,
    },
    /// The letter was already tried this round
    AlreadyGuessed(char),
    /// A secret was requested while no live word remains
    NoWordsRemaining,
}

impl fmt::Display for HangmanError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyDictionary => write!(f, "Dictionary must contain at least one word"),
            Self::InvalidRoundParameters {
                word_length,
                guess_budget,
            } => write!(
                f,
                "Cannot start a round with word length {word_length} and {guess_budget} guesses: \
                 the length needs at least one dictionary word and the budget must be at least 1"
            ),
            Self::AlreadyGuessed(letter) => {
                write!(f, "Letter '{letter}' has already been guessed this round")
            }
            Self::NoWordsRemaining => write!(f, "No words remain in the current word list"),
        }
    }
}

impl std::error::Error for HangmanError {}
