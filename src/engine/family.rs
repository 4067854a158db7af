//! Word family partitioning
//!
//! Given the live words of a round and a guessed letter, groups the words by
//! the pattern they would produce if that letter were revealed.

use crate::core::Pattern;
use rustc_hash::FxHashMap;

/// Live words grouped by the pattern they produce for one guessed letter
pub type Families = FxHashMap<Pattern, Vec<String>>;

/// Partition `words` into families for a guess of `letter`
///
/// Each word's candidate pattern is `current` with every position where the
/// word has `letter` revealed. Words that do not contain `letter` land in the
/// family keyed by `current` itself.
///
/// # Examples
/// ```
/// use evil_hangman::core::Pattern;
/// use evil_hangman::engine::family::partition;
///
/// let words: Vec<String> = ["cat", "cot", "can"].map(String::from).to_vec();
/// let families = partition(&words, &Pattern::blank(3), 'a');
///
/// assert_eq!(families.len(), 2);
/// assert_eq!(families[&Pattern::from("-a-")].len(), 2);
/// assert_eq!(families[&Pattern::from("---")], ["cot"]);
/// ```
#[must_use]
pub fn partition(words: &[String], current: &Pattern, letter: char) -> Families {
    let mut families = Families::default();

    for word in words {
        families
            .entry(current.reveal(word, letter))
            .or_default()
            .push(word.clone());
    }

    families
}
