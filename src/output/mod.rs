//! Terminal output formatting
//!
//! Display utilities for the game board, command results and pretty-printing.

pub mod display;
pub mod formatters;

pub use display::{
    print_analysis_result, print_banner, print_guess_report, print_round_result,
    print_round_status, print_session_summary, print_simulation_result,
};
