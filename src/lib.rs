// Export all necessary modules
pub mod strategy;
pub mod sequence;
pub mod cli;
pub mod config;
pub mod error;
pub mod utils;

pub use error::PatternError;
pub use sequence::{HashCursor, Pull, StringSequence};
pub use strategy::{RankedEntry, RankingAlgorithm, RankingDataset, StrategySelector};
