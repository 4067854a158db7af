//! Core domain types for hangman
//!
//! This module contains the fundamental domain types with zero external dependencies.
//! All types here are pure values with no game state attached.

mod difficulty;
mod pattern;

pub use difficulty::Difficulty;
pub use pattern::Pattern;
