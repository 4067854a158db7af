//! Display functions for game state and command results

use super::formatters::{bracketed_letters, family_bar, guesses_meter, spaced_pattern};
use crate::commands::analyze::largest_families;
use crate::commands::{AnalysisResult, PlaySummary, SimulationResult};
use crate::engine::{GuessReport, Round};
use colored::Colorize;

/// Print the interactive mode banner
pub fn print_banner() {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                      Evil Hangman                            ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");
    println!("I'm thinking of a word. Guess it one letter at a time.");
    println!("Type 'quit' at any prompt to leave.\n");
}

/// Print the board before a guess
pub fn print_round_status(round: &Round, guess_budget: usize, debug: bool) {
    println!("{}", "─".repeat(60).cyan());
    println!(
        "Word:            {}",
        spaced_pattern(round.pattern()).bright_white().bold()
    );
    println!(
        "Guesses left:    {} {}",
        guesses_meter(round.guesses_remaining(), guess_budget).red(),
        round.guesses_remaining()
    );
    println!(
        "Guessed so far:  {}",
        bracketed_letters(round.guessed_letters())
    );
    if debug {
        println!(
            "{}",
            format!("[debug] {} words still possible", round.words_remaining()).bright_black()
        );
    }
    println!("{}", "─".repeat(60).cyan());
}

/// Print what a guess did to the board
pub fn print_guess_report(report: &GuessReport, words_before: usize, debug: bool) {
    if debug {
        println!("\n{}", "[debug] word families:".bright_black());
        for (pattern, &size) in &report.families {
            let marker = if *pattern == report.chosen { "◀" } else { " " };
            println!(
                "  {} {} {:5} {}",
                pattern.to_string().bright_black(),
                family_bar(size, words_before, 20).bright_black(),
                size,
                marker.yellow()
            );
        }
    }

    if report.revealed {
        let count = report.chosen.revealed_count();
        println!(
            "\n{}\n",
            format!("✅ Yes, there is '{}' in the word ({count} letters showing)", report.letter)
                .green()
                .bold()
        );
    } else {
        println!(
            "\n{}\n",
            format!("❌ Sorry, there is no '{}'", report.letter).red().bold()
        );
    }
}

/// Print the end-of-round banner
pub fn print_round_result(round: &Round, secret: &str) {
    println!("\n{}", "═".repeat(60).bright_cyan());
    if round.is_solved() {
        println!(
            "    🎉  {} {}",
            "You beat me! The word was".bright_green().bold(),
            secret.to_uppercase().bright_yellow().bold()
        );
    } else {
        println!("{}", "    💀  Out of guesses!".red().bold());
        println!(
            "    The word was {}",
            secret.to_uppercase().bright_yellow().bold()
        );
    }
    println!(
        "    Letters tried: {}",
        bracketed_letters(round.guessed_letters())
    );
    println!("{}\n", "═".repeat(60).bright_cyan());
}

/// Print totals for an interactive session
pub fn print_session_summary(summary: &PlaySummary) {
    if summary.rounds == 0 {
        println!("\n👋 Thanks for playing!\n");
        return;
    }
    println!(
        "\n👋 Thanks for playing! You won {} of {} {}.\n",
        summary.wins.to_string().bright_green().bold(),
        summary.rounds,
        if summary.rounds == 1 { "round" } else { "rounds" }
    );
}

/// Print the opening-move analysis
pub fn print_analysis_result(result: &AnalysisResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} letters, {} ",
        "OPENING ANALYSIS:".bright_cyan().bold(),
        result.word_length.to_string().bright_yellow().bold(),
        result.difficulty
    );
    println!("{}", "═".repeat(60).cyan());
    println!("\n📊 {} candidate words\n", result.total_candidates);

    for analysis in &result.letters {
        let left = analysis.words_left();
        let bar = family_bar(left, result.total_candidates, 30);
        let verdict = if analysis.report.revealed {
            "hit ".green()
        } else {
            "miss".red()
        };
        let top: Vec<String> = largest_families(analysis, 3)
            .into_iter()
            .map(|(pattern, size)| format!("{pattern}:{size}"))
            .collect();

        println!(
            "   {} {} [{}] {:5} left, {:3} families  {}",
            analysis.letter.to_string().bright_white().bold(),
            verdict,
            bar.green(),
            left,
            analysis.family_count(),
            top.join(" ").bright_black()
        );
    }

    if let Some(best) = result.best_letter() {
        println!(
            "\n🎯 Best opening: {} ({} words left)",
            best.letter.to_string().bright_yellow().bold(),
            best.words_left()
        );
    }
}

/// Print the result of a simulation run
pub fn print_simulation_result(result: &SimulationResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "SIMULATION RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Setup:".bright_cyan().bold());
    println!("   Word length:      {}", result.word_length);
    println!("   Wrong guesses:    {}", result.guess_budget);
    println!("   Candidate words:  {}", result.candidate_words);
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());

    println!("\n📈 {}", "Player win rate:".bright_cyan().bold());
    for stats in &result.stats {
        let pct = stats.win_rate() * 100.0;
        let bar_width = (pct / 2.5) as usize;
        let bar = format!(
            "{}{}",
            "█".repeat(bar_width).green(),
            "░"
                .repeat(40_usize.saturating_sub(bar_width))
                .bright_black()
        );
        println!(
            "   {:6} {bar} {:4}/{:<4} ({pct:5.1}%)  avg {:.1} letters, {:.1} words left",
            stats.difficulty.to_string(),
            stats.wins,
            stats.rounds,
            stats.average_letters,
            stats.average_words_left
        );
    }
}
