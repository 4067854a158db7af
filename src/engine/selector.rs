//! Adversarial family selection
//!
//! Ranks word families by hardness and picks the one the round commits to.
//!
//! # Hardness
//! A family is harder than another if, in order of priority:
//! 1. it has more member words (more room to keep dodging the player)
//! 2. its pattern shows fewer revealed slots (less information given away)
//! 3. its pattern sorts first lexicographically (deterministic tiebreak)
//!
//! # Leniency
//! Easier difficulties take the second-hardest family on a fixed cadence of
//! guess counts, see [`Difficulty::is_lenient_at`].

use super::family::Families;
use crate::core::{Difficulty, Pattern};
use std::cmp::Ordering;

/// Ranking key of one family
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FamilyRank<'a> {
    pub size: usize,
    pub revealed: usize,
    pub pattern: &'a Pattern,
}

impl<'a> FamilyRank<'a> {
    #[must_use]
    pub fn new(pattern: &'a Pattern, size: usize) -> Self {
        Self {
            size,
            revealed: pattern.revealed_count(),
            pattern,
        }
    }
}

/// Total order over families, hardest first
///
/// # Examples
/// ```
/// use evil_hangman::core::Pattern;
/// use evil_hangman::engine::selector::{FamilyRank, hardness_order};
/// use std::cmp::Ordering;
///
/// let big = Pattern::from("a--");
/// let small = Pattern::from("-b-");
/// assert_eq!(
///     hardness_order(&FamilyRank::new(&big, 5), &FamilyRank::new(&small, 3)),
///     Ordering::Less
/// );
/// ```
#[must_use]
pub fn hardness_order(a: &FamilyRank<'_>, b: &FamilyRank<'_>) -> Ordering {
    b.size
        .cmp(&a.size)
        .then_with(|| a.revealed.cmp(&b.revealed))
        .then_with(|| a.pattern.cmp(b.pattern))
}

/// Rank every family, hardest first
#[must_use]
pub fn rank_families(families: &Families) -> Vec<FamilyRank<'_>> {
    let mut ranked: Vec<FamilyRank<'_>> = families
        .iter()
        .map(|(pattern, words)| FamilyRank::new(pattern, words.len()))
        .collect();

    ranked.sort_by(hardness_order);
    ranked
}

/// Index into a hardest-first ranking of the family to commit to
///
/// `guess_count` is the number of letters guessed this round, including the
/// guess being processed.
#[must_use]
pub fn choose_index(family_count: usize, difficulty: Difficulty, guess_count: usize) -> usize {
    if family_count > 1 && difficulty.is_lenient_at(guess_count) {
        1
    } else {
        0
    }
}

/// Pick the pattern of the family the round commits to
///
/// Returns `None` only for an empty family map.
#[must_use]
pub fn select_family(
    families: &Families,
    difficulty: Difficulty,
    guess_count: usize,
) -> Option<Pattern> {
    let ranked = rank_families(families);
    let index = choose_index(ranked.len(), difficulty, guess_count);

    if index > 0 {
        log::trace!(
            "{difficulty} leniency at guess {guess_count}: taking {} over {}",
            ranked[index].pattern,
            ranked[0].pattern
        );
    }

    ranked.get(index).map(|rank| rank.pattern.clone())
}
