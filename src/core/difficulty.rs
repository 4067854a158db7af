//! Round difficulty levels

use std::fmt;
use std::str::FromStr;

/// How often the engine gives ground to the player
///
/// Easier levels periodically pick the second-hardest word family instead
/// of the hardest one, on a fixed cadence tied to the number of letters
/// guessed so far.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Difficulty {
    /// Lenient on every 2nd guess
    Easy,
    /// Lenient on every 4th guess
    Medium,
    /// Never lenient
    #[default]
    Hard,
}

impl Difficulty {
    /// All levels, easiest first
    pub const ALL: [Self; 3] = [Self::Easy, Self::Medium, Self::Hard];

    /// Guess-count period of the leniency cadence, `None` if never lenient
    #[must_use]
    pub const fn leniency_period(self) -> Option<usize> {
        match self {
            Self::Easy => Some(2),
            Self::Medium => Some(4),
            Self::Hard => None,
        }
    }

    /// Check whether the engine should be lenient after `guess_count` letters
    ///
    /// # Examples
    /// ```
    /// use evil_hangman::core::Difficulty;
    ///
    /// assert!(Difficulty::Easy.is_lenient_at(2));
    /// assert!(!Difficulty::Medium.is_lenient_at(2));
    /// assert!(Difficulty::Medium.is_lenient_at(8));
    /// assert!(!Difficulty::Hard.is_lenient_at(4));
    /// ```
    #[must_use]
    pub const fn is_lenient_at(self, guess_count: usize) -> bool {
        match self.leniency_period() {
            Some(period) => guess_count % period == 0,
            None => false,
        }
    }

    /// Lowercase name of the level
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Easy => "easy",
            Self::Medium => "medium",
            Self::Hard => "hard",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Difficulty {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "easy" | "e" | "1" => Ok(Self::Easy),
            "medium" | "m" | "2" => Ok(Self::Medium),
            "hard" | "h" | "3" => Ok(Self::Hard),
            other => Err(format!("Unknown difficulty: {other}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn leniency_periods() {
        assert_eq!(Difficulty::Easy.leniency_period(), Some(2));
        assert_eq!(Difficulty::Medium.leniency_period(), Some(4));
        assert_eq!(Difficulty::Hard.leniency_period(), None);
    }

    #[test]
    fn hard_is_never_lenient() {
        assert!((0..20).all(|n| !Difficulty::Hard.is_lenient_at(n)));
    }

    #[test]
    fn easy_lenient_on_even_counts() {
        let lenient: Vec<usize> = (1..=6)
            .filter(|&n| Difficulty::Easy.is_lenient_at(n))
            .collect();
        assert_eq!(lenient, [2, 4, 6]);
    }

    #[test]
    fn medium_lenient_every_fourth() {
        let lenient: Vec<usize> = (1..=12)
            .filter(|&n| Difficulty::Medium.is_lenient_at(n))
            .collect();
        assert_eq!(lenient, [4, 8, 12]);
    }

    #[test]
    fn parse_names() {
        assert_eq!("easy".parse::<Difficulty>(), Ok(Difficulty::Easy));
        assert_eq!("MEDIUM".parse::<Difficulty>(), Ok(Difficulty::Medium));
        assert_eq!(" h ".parse::<Difficulty>(), Ok(Difficulty::Hard));
        assert_eq!("3".parse::<Difficulty>(), Ok(Difficulty::Hard));
        assert!("nightmare".parse::<Difficulty>().is_err());
    }

    #[test]
    fn display_round_trips_through_parse() {
        for difficulty in Difficulty::ALL {
            assert_eq!(difficulty.to_string().parse::<Difficulty>(), Ok(difficulty));
        }
    }

    #[test]
    fn default_is_hard() {
        assert_eq!(Difficulty::default(), Difficulty::Hard);
    }
}
