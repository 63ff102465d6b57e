// src/strategy/selector.rs
use crate::strategy::algorithm::RankingAlgorithm;
use crate::strategy::schema::{RankedEntry, RankingDataset};
use crate::utils::utils::measure_time;
use tracing::{debug, info};

/// Holds the active ranking algorithm and the dataset it ranks
#[derive(Debug, Clone)]
pub struct StrategySelector {
    algorithm: RankingAlgorithm,
    dataset: RankingDataset,
}

impl StrategySelector {
    /// Create a selector with an empty dataset
    pub fn new(algorithm: RankingAlgorithm) -> Self {
        Self::with_dataset(algorithm, RankingDataset::new())
    }

    pub fn with_dataset(algorithm: RankingAlgorithm, dataset: RankingDataset) -> Self {
        debug!("Selector created with {} algorithm over {} entries", algorithm, dataset.len());
        Self { algorithm, dataset }
    }

    pub fn algorithm(&self) -> RankingAlgorithm {
        self.algorithm
    }

    /// Swap the ranking algorithm
    pub fn set_algorithm(&mut self, algorithm: RankingAlgorithm) {
        info!("Strategy switched from {} to {}", self.algorithm, algorithm);
        self.algorithm = algorithm;
    }

    pub fn dataset(&self) -> &RankingDataset {
        &self.dataset
    }

    pub fn set_dataset(&mut self, dataset: RankingDataset) {
        debug!("Dataset replaced ({} entries)", dataset.len());
        self.dataset = dataset;
    }

    /// Rank the current dataset with the current algorithm.
    ///
    /// Results are never cached; every call runs the algorithm again.
    pub fn rank(&self) -> Vec<RankedEntry> {
        info!("Sorting {} entries using the {} strategy", self.dataset.len(), self.algorithm);
        measure_time("rank", || self.algorithm.rank(&self.dataset))
    }
}
