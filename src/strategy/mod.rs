// src/strategy/mod.rs
pub mod schema;
pub mod algorithm;
pub mod selector;
pub mod simulate;
pub mod import_export;

pub use algorithm::RankingAlgorithm;
pub use schema::{RankedEntry, RankingDataset};
pub use selector::StrategySelector;
