//! Adversarial hangman engine
//!
//! The engine never commits to a secret word. It keeps every dictionary word
//! that is still consistent with the guesses so far and, after each guess,
//! narrows to the word family that leaves the player worst off.

mod error;
pub mod family;
mod manager;
mod round;
pub mod selector;

pub use error::HangmanError;
pub use manager::HangmanManager;
pub use round::{GuessReport, Round};
