//! Evil Hangman
//!
//! An adversarial hangman engine. Instead of picking a secret word up front, it
//! keeps every dictionary word that fits the guesses so far and answers each
//! guess with whichever word family leaves the player worst off.
//!
//! # Quick Start
//!
//! ```rust
//! use evil_hangman::core::Difficulty;
//! use evil_hangman::engine::HangmanManager;
//!
//! let manager = HangmanManager::new(["cat", "cot", "can", "car"]).unwrap();
//! let mut round = manager.start_round(3, 6, Difficulty::Hard).unwrap();
//!
//! let report = round.guess('a').unwrap();
//! println!("Pattern: {} ({} words left)", report.chosen, round.words_remaining());
//! ```

// Core domain types
pub mod core;

// Adversarial engine
pub mod engine;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
