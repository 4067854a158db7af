//! Command implementations

pub mod analyze;
pub mod play;
pub mod simulate;

pub use analyze::{AnalysisResult, LetterAnalysis, analyze_opening};
pub use play::{PlayConfig, PlaySummary, run_play, run_play_with};
pub use simulate::{DifficultyStats, SimulationConfig, SimulationResult, run_simulation};
