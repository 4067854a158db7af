//! Formatting utilities for terminal output

use crate::core::Pattern;

/// Render a pattern with spaced slots, dashes for unrevealed letters
#[must_use]
pub fn spaced_pattern(pattern: &Pattern) -> String {
    pattern
        .slots()
        .map(|slot| slot.unwrap_or(Pattern::PLACEHOLDER).to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Render guessed letters as a bracketed, comma-joined list
///
/// Letters are printed in the order given, which for a round is sorted.
#[must_use]
pub fn bracketed_letters(letters: impl IntoIterator<Item = char>) -> String {
    let joined = letters
        .into_iter()
        .map(|c| c.to_string())
        .collect::<Vec<_>>()
        .join(", ");
    format!("[{joined}]")
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }

    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Bar showing a family's share of the live words
#[must_use]
pub fn family_bar(size: usize, total: usize, width: usize) -> String {
    create_progress_bar(size as f64, total as f64, width)
}

/// Render a gallows-style counter of remaining wrong guesses
#[must_use]
pub fn guesses_meter(remaining: usize, budget: usize) -> String {
    let used = budget.saturating_sub(remaining);
    format!("{}{}", "♥".repeat(remaining), "·".repeat(used))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spaced_pattern_renders_dashes() {
        assert_eq!(spaced_pattern(&Pattern::from("-a-")), "- a -");
        assert_eq!(spaced_pattern(&Pattern::blank(4)), "- - - -");
    }

    #[test]
    fn bracketed_letters_format() {
        assert_eq!(bracketed_letters(['a', 'c', 'e', 's', 't', 'z']), "[a, c, e, s, t, z]");
        assert_eq!(bracketed_letters(Vec::new()), "[]");
    }

    #[test]
    fn progress_bar_empty() {
        let bar = create_progress_bar(0.0, 100.0, 10);
        assert_eq!(bar, "░░░░░░░░░░");
    }

    #[test]
    fn progress_bar_full() {
        let bar = create_progress_bar(100.0, 100.0, 10);
        assert_eq!(bar, "██████████");
    }

    #[test]
    fn progress_bar_half() {
        let bar = create_progress_bar(50.0, 100.0, 10);
        assert_eq!(bar, "█████░░░░░");
    }

    #[test]
    fn progress_bar_zero_max() {
        assert_eq!(create_progress_bar(3.0, 0.0, 4), "░░░░");
    }

    #[test]
    fn family_bar_share() {
        assert_eq!(family_bar(3, 4, 4), "███░");
    }

    #[test]
    fn guesses_meter_counts() {
        assert_eq!(guesses_meter(3, 5), "♥♥♥··");
        assert_eq!(guesses_meter(0, 2), "··");
    }
}
