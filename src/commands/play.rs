//! Interactive play mode
//!
//! Text-based game loop: the player guesses letters while the engine dodges.

use crate::core::Difficulty;
use crate::engine::HangmanManager;
use crate::output::{
    print_banner, print_guess_report, print_round_result, print_round_status,
    print_session_summary,
};
use anyhow::Result;
use std::io::{self, BufRead, Write};

/// Settings for an interactive session
///
/// Values left as `None` are asked for at the start of every round.
#[derive(Debug, Clone, Default)]
pub struct PlayConfig {
    pub word_length: Option<usize>,
    pub guess_budget: Option<usize>,
    pub difficulty: Option<Difficulty>,
    pub debug: bool,
}

/// Totals over an interactive session
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PlaySummary {
    pub rounds: usize,
    pub wins: usize,
}

/// Run an interactive session on stdin
///
/// # Errors
///
/// Returns an error if reading input or writing output fails.
pub fn run_play(manager: &HangmanManager, config: &PlayConfig) -> Result<PlaySummary> {
    let stdin = io::stdin();
    let mut input = stdin.lock();
    run_play_with(manager, config, &mut input)
}

/// Run an interactive session reading player input from `input`
///
/// The session ends on `quit` or at end of input.
///
/// # Errors
///
/// Returns an error if reading input or writing output fails.
pub fn run_play_with<R: BufRead>(
    manager: &HangmanManager,
    config: &PlayConfig,
    input: &mut R,
) -> Result<PlaySummary> {
    print_banner();
    let mut summary = PlaySummary::default();

    loop {
        let Some((word_length, guess_budget, difficulty)) = round_settings(manager, config, input)?
        else {
            break;
        };

        let mut round = manager.start_round(word_length, guess_budget, difficulty)?;

        while !round.is_over() {
            print_round_status(&round, guess_budget, config.debug);

            let Some(line) = prompt(input, "Your guess")? else {
                print_session_summary(&summary);
                return Ok(summary);
            };
            if is_quit(&line) {
                print_session_summary(&summary);
                return Ok(summary);
            }

            match parse_letter(&line) {
                None => println!("❌ Enter a single letter.\n"),
                Some(letter) if round.already_guessed(letter) => {
                    println!("❌ You already guessed '{letter}'.\n");
                }
                Some(letter) => {
                    let words_before = round.words_remaining();
                    let report = round.guess(letter)?;
                    print_guess_report(&report, words_before, config.debug);
                }
            }
        }

        let secret = round.reveal_secret()?;
        print_round_result(&round, secret);

        summary.rounds += 1;
        if round.is_solved() {
            summary.wins += 1;
        }

        match prompt(input, "Play again? (yes/no)")? {
            Some(answer) if matches!(answer.to_lowercase().as_str(), "yes" | "y") => {}
            _ => break,
        }
    }

    print_session_summary(&summary);
    Ok(summary)
}

/// Resolve the settings for the next round, asking for what the config leaves open
///
/// Returns `None` if the player quits or input ends.
fn round_settings<R: BufRead>(
    manager: &HangmanManager,
    config: &PlayConfig,
    input: &mut R,
) -> Result<Option<(usize, usize, Difficulty)>> {
    let word_length = match config.word_length {
        Some(length) => length,
        None => loop {
            let Some(line) = prompt(input, "Word length")? else {
                return Ok(None);
            };
            if is_quit(&line) {
                return Ok(None);
            }
            match line.parse::<usize>() {
                Ok(length) if manager.count_by_length(length) > 0 => break length,
                Ok(length) => println!("❌ No words of length {length}. Try another length.\n"),
                Err(_) => println!("❌ Enter a number.\n"),
            }
        },
    };

    let guess_budget = match config.guess_budget {
        Some(budget) => budget,
        None => loop {
            let Some(line) = prompt(input, "Number of wrong guesses allowed")? else {
                return Ok(None);
            };
            if is_quit(&line) {
                return Ok(None);
            }
            match line.parse::<usize>() {
                Ok(budget) if budget >= 1 => break budget,
                _ => println!("❌ Enter a number of at least 1.\n"),
            }
        },
    };

    let difficulty = match config.difficulty {
        Some(difficulty) => difficulty,
        None => loop {
            let Some(line) = prompt(input, "Difficulty (easy/medium/hard)")? else {
                return Ok(None);
            };
            if is_quit(&line) {
                return Ok(None);
            }
            match line.parse::<Difficulty>() {
                Ok(difficulty) => break difficulty,
                Err(e) => println!("❌ {e}\n"),
            }
        },
    };

    Ok(Some((word_length, guess_budget, difficulty)))
}

/// Parse one guessed letter, lowercased
///
/// Accepts exactly one alphabetic character surrounded by optional whitespace.
#[must_use]
pub fn parse_letter(input: &str) -> Option<char> {
    let mut chars = input.trim().chars();
    match (chars.next(), chars.next()) {
        (Some(ch), None) if ch.is_alphabetic() => ch.to_lowercase().next(),
        _ => None,
    }
}

fn is_quit(input: &str) -> bool {
    matches!(input.to_lowercase().as_str(), "quit" | "exit")
}

/// Print a prompt and read one trimmed line, `None` at end of input
fn prompt<R: BufRead>(input: &mut R, message: &str) -> Result<Option<String>> {
    print!("{message}: ");
    io::stdout().flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        println!();
        return Ok(None);
    }

    Ok(Some(line.trim().to_string()))
}
