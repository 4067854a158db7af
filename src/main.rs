//! Evil Hangman - CLI
//!
//! Play hangman against an engine that never settles on a word until it has to.

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use evil_hangman::{
    commands::{PlayConfig, SimulationConfig, analyze_opening, run_play, run_simulation},
    core::Difficulty,
    engine::HangmanManager,
    output::{print_analysis_result, print_simulation_result},
    wordlists::{DICTIONARY, loader::load_from_file},
};

#[derive(Parser)]
#[command(
    name = "evil_hangman",
    about = "Hangman against an adversary that keeps its word open as long as it can",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Wordlist: 'embedded' (default, bundled dictionary) or path to a file with one word per line
    #[arg(short = 'w', long, global = true, default_value = "embedded")]
    wordlist: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive game (default)
    Play {
        /// Word length (asked for each round if omitted)
        #[arg(short, long)]
        length: Option<usize>,

        /// Number of wrong guesses allowed (asked for each round if omitted)
        #[arg(short, long)]
        guesses: Option<usize>,

        /// Difficulty: easy, medium or hard (asked for each round if omitted)
        #[arg(short, long)]
        difficulty: Option<Difficulty>,

        /// Show the word families behind every guess
        #[arg(long)]
        debug: bool,
    },

    /// Show how the engine answers every possible opening letter
    Analyze {
        /// Word length to analyze
        #[arg(short, long, default_value = "5")]
        length: usize,

        /// Difficulty the engine plays at
        #[arg(short, long, default_value = "hard")]
        difficulty: Difficulty,
    },

    /// Play automated rounds at every difficulty and report win rates
    Simulate {
        /// Rounds per difficulty
        #[arg(short = 'n', long, default_value = "200")]
        rounds: usize,

        /// Word length
        #[arg(short, long, default_value = "5")]
        length: usize,

        /// Number of wrong guesses allowed
        #[arg(short, long, default_value = "8")]
        guesses: usize,

        /// Seed for the automated player
        #[arg(short, long, default_value = "42")]
        seed: u64,
    },
}

/// Build the engine from the -w flag
///
/// - "embedded": the dictionary compiled into the binary
/// - "<path>": words loaded from a file
fn load_manager(wordlist: &str) -> Result<HangmanManager> {
    let manager = match wordlist {
        "embedded" => HangmanManager::new(DICTIONARY.iter().copied())?,
        path => {
            let words = load_from_file(path)
                .with_context(|| format!("Failed to read word list {path}"))?;
            HangmanManager::new(words).with_context(|| format!("Word list {path} is empty"))?
        }
    };
    Ok(manager)
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let manager = load_manager(&cli.wordlist)?;

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play {
        length: None,
        guesses: None,
        difficulty: None,
        debug: false,
    });

    match command {
        Commands::Play {
            length,
            guesses,
            difficulty,
            debug,
        } => run_play_command(&manager, length, guesses, difficulty, debug),
        Commands::Analyze { length, difficulty } => {
            run_analyze_command(&manager, length, difficulty)
        }
        Commands::Simulate {
            rounds,
            length,
            guesses,
            seed,
        } => run_simulate_command(&manager, rounds, length, guesses, seed),
    }
}

fn run_play_command(
    manager: &HangmanManager,
    length: Option<usize>,
    guesses: Option<usize>,
    difficulty: Option<Difficulty>,
    debug: bool,
) -> Result<()> {
    if let Some(length) = length {
        check_length(manager, length)?;
    }
    if guesses == Some(0) {
        bail!("At least one wrong guess must be allowed");
    }

    let config = PlayConfig {
        word_length: length,
        guess_budget: guesses,
        difficulty,
        debug,
    };
    run_play(manager, &config)?;
    Ok(())
}

fn run_analyze_command(
    manager: &HangmanManager,
    length: usize,
    difficulty: Difficulty,
) -> Result<()> {
    check_length(manager, length)?;
    let result = analyze_opening(manager, length, difficulty)?;
    print_analysis_result(&result);
    Ok(())
}

fn run_simulate_command(
    manager: &HangmanManager,
    rounds: usize,
    length: usize,
    guesses: usize,
    seed: u64,
) -> Result<()> {
    check_length(manager, length)?;

    println!(
        "Simulating {rounds} rounds per difficulty on {} words of length {length}...",
        manager.count_by_length(length)
    );

    let config = SimulationConfig {
        rounds,
        guess_budget: guesses,
        seed,
        ..SimulationConfig::new(length)
    };
    let result = run_simulation(manager, &config)?;
    print_simulation_result(&result);
    Ok(())
}

/// Fail with the available lengths if no word has `length` letters
fn check_length(manager: &HangmanManager, length: usize) -> Result<()> {
    if manager.count_by_length(length) > 0 {
        return Ok(());
    }

    let available: Vec<String> = manager
        .length_histogram()
        .into_iter()
        .map(|(len, count)| format!("{len} ({count})"))
        .collect();
    bail!(
        "No words of length {length}. Available lengths: {}",
        available.join(", ")
    )
}
