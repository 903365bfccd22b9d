//! Shared types for the simulator.

use clap::ValueEnum;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// One JSON record per hand, then a summary record.
    Jsonl,
    /// Summary only.
    Summary,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum AiType {
    Heuristic,
    Random,
}

impl AiType {
    /// Registry name of the profile.
    pub fn name(self) -> &'static str {
        match self {
            AiType::Heuristic => "heuristic",
            AiType::Random => "random",
        }
    }
}
