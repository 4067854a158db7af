//! Opening analysis command
//!
//! Shows, for every letter, how the engine would split the dictionary if that
//! letter were the first guess of a round.

use crate::core::{Difficulty, Pattern};
use crate::engine::{GuessReport, HangmanManager};
use anyhow::{Context, Result};

/// How one opening letter plays out
pub struct LetterAnalysis {
    pub letter: char,
    pub report: GuessReport,
}

impl LetterAnalysis {
    /// Words left after the engine's choice
    #[must_use]
    pub fn words_left(&self) -> usize {
        self.report.chosen_size()
    }

    /// Number of distinct families the letter splits the words into
    #[must_use]
    pub fn family_count(&self) -> usize {
        self.report.families.len()
    }
}

/// Result of analyzing opening guesses for one word length
pub struct AnalysisResult {
    pub word_length: usize,
    pub difficulty: Difficulty,
    pub total_candidates: usize,
    pub letters: Vec<LetterAnalysis>,
}

impl AnalysisResult {
    /// Opening letter that leaves the fewest words, earliest letter on ties
    #[must_use]
    pub fn best_letter(&self) -> Option<&LetterAnalysis> {
        self.letters
            .iter()
            .min_by_key(|analysis| (analysis.words_left(), analysis.letter))
    }

    /// Opening letters the engine answers with a miss
    pub fn misses(&self) -> impl Iterator<Item = &LetterAnalysis> {
        self.letters.iter().filter(|analysis| !analysis.report.revealed)
    }
}

/// Analyze every letter `a..=z` as the opening guess for `word_length`
///
/// # Errors
///
/// Returns an error if the dictionary has no word of `word_length`.
pub fn analyze_opening(
    manager: &HangmanManager,
    word_length: usize,
    difficulty: Difficulty,
) -> Result<AnalysisResult> {
    let round = manager
        .start_round(word_length, 1, difficulty)
        .with_context(|| format!("Cannot analyze words of length {word_length}"))?;

    let letters = ('a'..='z')
        .map(|letter| -> Result<LetterAnalysis> {
            let report = round.clone().guess(letter)?;
            Ok(LetterAnalysis { letter, report })
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(AnalysisResult {
        word_length,
        difficulty,
        total_candidates: round.words_remaining(),
        letters,
    })
}

/// Families of one analysis ordered largest first
#[must_use]
pub fn largest_families(analysis: &LetterAnalysis, limit: usize) -> Vec<(&Pattern, usize)> {
    let mut families: Vec<(&Pattern, usize)> = analysis
        .report
        .families
        .iter()
        .map(|(pattern, &size)| (pattern, size))
        .collect();
    families.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
    families.truncate(limit);
    families
}

#[cfg(test)]
mod tests {
    use super::*;

    fn manager() -> HangmanManager {
        HangmanManager::new(["cat", "cot", "can", "car", "dog", "bird"]).unwrap()
    }

    #[test]
    fn analyzes_every_letter() {
        let result = analyze_opening(&manager(), 3, Difficulty::Hard).unwrap();

        assert_eq!(result.letters.len(), 26);
        assert_eq!(result.total_candidates, 5);
        for analysis in &result.letters {
            let total: usize = analysis.report.families.values().sum();
            assert_eq!(total, 5);
        }
    }

    #[test]
    fn absent_letters_are_misses() {
        let result = analyze_opening(&manager(), 3, Difficulty::Hard).unwrap();
        let misses: Vec<char> = result.misses().map(|a| a.letter).collect();

        assert!(misses.contains(&'z'));
        assert!(!misses.contains(&'c'));
        // 'a' keeps {cat, can, car} over {cot, dog}
        assert!(!misses.contains(&'a'));
    }

    #[test]
    fn best_letter_leaves_fewest_words() {
        let result = analyze_opening(&manager(), 3, Difficulty::Hard).unwrap();
        let best = result.best_letter().unwrap();

        // 'a', 'o' and 't' all leave three words
        assert_eq!(best.letter, 'a');
        assert_eq!(best.words_left(), 3);
        assert!(result.letters.iter().all(|a| a.words_left() >= best.words_left()));
    }

    #[test]
    fn largest_families_sorted_and_limited() {
        let result = analyze_opening(&manager(), 3, Difficulty::Hard).unwrap();
        let a = &result.letters[0];
        assert_eq!(a.family_count(), 2);

        let top = largest_families(a, 1);
        assert_eq!(top, [(&Pattern::from("-a-"), 3)]);
    }

    #[test]
    fn unplayable_length_is_an_error() {
        assert!(analyze_opening(&manager(), 7, Difficulty::Hard).is_err());
    }
}
