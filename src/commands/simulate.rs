//! Simulation command
//!
//! Plays many automated rounds against the engine at every difficulty and
//! reports how often a sensible player still wins.

use crate::core::Difficulty;
use crate::engine::{HangmanManager, Round};
use anyhow::{Context, Result};
use indicatif::{ProgressBar, ProgressStyle};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rayon::prelude::*;
use rustc_hash::FxHashMap;
use std::time::{Duration, Instant};

/// Configuration for a simulation run
#[derive(Debug, Clone)]
pub struct SimulationConfig {
    pub rounds: usize,
    pub word_length: usize,
    pub guess_budget: usize,
    pub seed: u64,
    pub show_progress: bool,
}

impl SimulationConfig {
    #[must_use]
    pub const fn new(word_length: usize) -> Self {
        Self {
            rounds: 200,
            word_length,
            guess_budget: 8,
            seed: 42,
            show_progress: true,
        }
    }
}

/// Outcome of one automated round
#[derive(Debug, Clone)]
pub struct RoundOutcome {
    pub won: bool,
    pub letters_tried: usize,
    pub words_left: usize,
    pub secret: String,
}

/// Aggregate results for one difficulty
#[derive(Debug, Clone)]
pub struct DifficultyStats {
    pub difficulty: Difficulty,
    pub rounds: usize,
    pub wins: usize,
    pub average_letters: f64,
    pub average_words_left: f64,
}

impl DifficultyStats {
    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.rounds == 0 {
            0.0
        } else {
            self.wins as f64 / self.rounds as f64
        }
    }
}

/// Result of a simulation run
#[derive(Debug)]
pub struct SimulationResult {
    pub word_length: usize,
    pub guess_budget: usize,
    pub candidate_words: usize,
    pub stats: Vec<DifficultyStats>,
    pub duration: Duration,
}

/// Run the configured number of rounds at every difficulty
///
/// Rounds run in parallel. Each one owns its round state and an RNG seeded
/// from the configured seed and the round index, so results are reproducible.
///
/// # Errors
///
/// Returns an error if the engine rejects the round parameters or the
/// progress bar template is invalid.
pub fn run_simulation(manager: &HangmanManager, config: &SimulationConfig) -> Result<SimulationResult> {
    // Surface parameter problems once, before spawning any work
    manager
        .start_round(config.word_length, config.guess_budget, Difficulty::Hard)
        .context("Invalid simulation parameters")?;

    let total = (config.rounds * Difficulty::ALL.len()) as u64;
    let pb = if config.show_progress {
        ProgressBar::new(total)
    } else {
        ProgressBar::hidden()
    };
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")?
            .progress_chars("█▓▒░"),
    );

    let start = Instant::now();
    let mut stats = Vec::with_capacity(Difficulty::ALL.len());

    for difficulty in Difficulty::ALL {
        pb.set_message(difficulty.to_string());

        let outcomes: Vec<RoundOutcome> = (0..config.rounds)
            .into_par_iter()
            .map(|index| {
                let seed = config.seed.wrapping_add(index as u64);
                let outcome = play_automated(manager, config, difficulty, seed);
                pb.inc(1);
                outcome
            })
            .collect::<Result<_>>()?;

        stats.push(summarize(difficulty, &outcomes));
    }

    pb.finish_with_message("Complete!");

    Ok(SimulationResult {
        word_length: config.word_length,
        guess_budget: config.guess_budget,
        candidate_words: manager.count_by_length(config.word_length),
        stats,
        duration: start.elapsed(),
    })
}

/// Play one round with a letter-frequency player
///
/// The player always tries the untried letter that appears in the most
/// words still consistent with the board, breaking ties at random.
///
/// # Errors
///
/// Returns an error if the engine rejects the round or a guess.
pub fn play_automated(
    manager: &HangmanManager,
    config: &SimulationConfig,
    difficulty: Difficulty,
    seed: u64,
) -> Result<RoundOutcome> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut round = manager.start_round(config.word_length, config.guess_budget, difficulty)?;

    while !round.is_over() {
        let candidates = most_common_untried(&round);
        let Some(&letter) = candidates.choose(&mut rng) else {
            break;
        };
        round.guess(letter)?;
    }

    Ok(RoundOutcome {
        won: round.is_solved(),
        letters_tried: round.guessed_letters().count(),
        words_left: round.words_remaining(),
        secret: round.reveal_secret_with(&mut rng)?.to_string(),
    })
}

/// Untried letters that occur in the largest number of live words
fn most_common_untried(round: &Round) -> Vec<char> {
    let mut counts: FxHashMap<char, usize> = FxHashMap::default();

    for word in round.live_words() {
        let mut seen: Vec<char> = word.chars().filter(|&c| !round.already_guessed(c)).collect();
        seen.sort_unstable();
        seen.dedup();
        for letter in seen {
            *counts.entry(letter).or_insert(0) += 1;
        }
    }

    let best = counts.values().max().copied().unwrap_or(0);
    let mut letters: Vec<char> = counts
        .into_iter()
        .filter(|&(_, count)| count == best)
        .map(|(letter, _)| letter)
        .collect();
    // Hash order is not stable, sort so seeded choices are reproducible
    letters.sort_unstable();
    letters
}

fn summarize(difficulty: Difficulty, outcomes: &[RoundOutcome]) -> DifficultyStats {
    let rounds = outcomes.len();
    let wins = outcomes.iter().filter(|o| o.won).count();
    let average = |f: fn(&RoundOutcome) -> usize| {
        if rounds == 0 {
            0.0
        } else {
            outcomes.iter().map(f).sum::<usize>() as f64 / rounds as f64
        }
    };

    DifficultyStats {
        difficulty,
        rounds,
        wins,
        average_letters: average(|o: &RoundOutcome| o.letters_tried),
        average_words_left: average(|o: &RoundOutcome| o.words_left),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::DICTIONARY;

    fn manager() -> HangmanManager {
        HangmanManager::new(DICTIONARY.iter().copied()).unwrap()
    }

    fn quiet_config(rounds: usize) -> SimulationConfig {
        SimulationConfig {
            rounds,
            show_progress: false,
            ..SimulationConfig::new(4)
        }
    }

    #[test]
    fn simulation_covers_every_difficulty() {
        let result = run_simulation(&manager(), &quiet_config(6)).unwrap();

        assert_eq!(result.stats.len(), 3);
        for (stats, difficulty) in result.stats.iter().zip(Difficulty::ALL) {
            assert_eq!(stats.difficulty, difficulty);
            assert_eq!(stats.rounds, 6);
            assert!(stats.wins <= stats.rounds);
            assert!((0.0..=1.0).contains(&stats.win_rate()));
            assert!(stats.average_words_left >= 1.0);
        }
        assert_eq!(result.candidate_words, manager().count_by_length(4));
    }

    #[test]
    fn simulation_is_reproducible() {
        let manager = manager();
        let config = quiet_config(4);

        let a = run_simulation(&manager, &config).unwrap();
        let b = run_simulation(&manager, &config).unwrap();

        for (x, y) in a.stats.iter().zip(&b.stats) {
            assert_eq!(x.wins, y.wins);
            assert!((x.average_letters - y.average_letters).abs() < f64::EPSILON);
        }
    }

    #[test]
    fn simulation_rejects_unplayable_length() {
        let config = SimulationConfig {
            show_progress: false,
            ..SimulationConfig::new(40)
        };
        assert!(run_simulation(&manager(), &config).is_err());
    }

    #[test]
    fn automated_round_ends() {
        let manager = manager();
        let config = quiet_config(1);

        for difficulty in Difficulty::ALL {
            let outcome = play_automated(&manager, &config, difficulty, 1).unwrap();
            assert!(outcome.letters_tried >= 1);
            assert_eq!(outcome.secret.chars().count(), 4);
            if outcome.won {
                assert_eq!(outcome.words_left, 1);
            }
        }
    }

    #[test]
    fn frequency_player_prefers_shared_letters() {
        let manager = HangmanManager::new(["cat", "cot", "cut"]).unwrap();
        let round = manager.start_round(3, 5, Difficulty::Hard).unwrap();

        assert_eq!(most_common_untried(&round), ['c', 't']);
    }

    #[test]
    fn summarize_empty() {
        let stats = summarize(Difficulty::Easy, &[]);
        assert_eq!(stats.rounds, 0);
        assert!(stats.win_rate().abs() < f64::EPSILON);
    }
}
