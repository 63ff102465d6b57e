// src/strategy/algorithm.rs
use crate::error::PatternError;
use crate::strategy::schema::{RankedEntry, RankingDataset};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Ranking algorithms a selector can switch between
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum RankingAlgorithm {
    /// Shortest travel time first
    #[default]
    Fastest,
    /// Longest travel time first
    Slowest,
    /// Insertion order, unsorted
    Passthrough,
}

impl RankingAlgorithm {
    pub const ALL: [RankingAlgorithm; 3] = [
        RankingAlgorithm::Fastest,
        RankingAlgorithm::Slowest,
        RankingAlgorithm::Passthrough,
    ];

    /// Rank a dataset. Equal durations keep insertion order.
    pub fn rank(self, dataset: &RankingDataset) -> Vec<RankedEntry> {
        let mut entries = dataset.to_entries();
        match self {
            RankingAlgorithm::Fastest => entries.sort_by_key(|entry| entry.minutes),
            RankingAlgorithm::Slowest => {
                entries.sort_by(|a, b| b.minutes.cmp(&a.minutes))
            }
            RankingAlgorithm::Passthrough => {}
        }
        entries
    }
}

impl fmt::Display for RankingAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RankingAlgorithm::Fastest => write!(f, "fastest"),
            RankingAlgorithm::Slowest => write!(f, "slowest"),
            RankingAlgorithm::Passthrough => write!(f, "passthrough"),
        }
    }
}

impl FromStr for RankingAlgorithm {
    type Err = PatternError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "fastest" | "ascending" => Ok(RankingAlgorithm::Fastest),
            "slowest" | "descending" => Ok(RankingAlgorithm::Slowest),
            "passthrough" | "identity" => Ok(RankingAlgorithm::Passthrough),
            _ => Err(PatternError::UnknownAlgorithm(s.to_string())),
        }
    }
}

impl TryFrom<String> for RankingAlgorithm {
    type Error = PatternError;

    fn try_from(name: String) -> Result<Self, Self::Error> {
        name.parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tied() -> RankingDataset {
        [("Taxi", 40), ("Car", 25), ("Tram", 40), ("Bus", 25)]
            .into_iter()
            .collect()
    }

    fn labels(entries: &[RankedEntry]) -> Vec<&str> {
        entries.iter().map(|entry| entry.label.as_str()).collect()
    }

    #[test]
    fn fastest_breaks_ties_by_insertion_order() {
        let ranked = RankingAlgorithm::Fastest.rank(&tied());
        assert_eq!(labels(&ranked), vec!["Car", "Bus", "Taxi", "Tram"]);
    }

    #[test]
    fn slowest_breaks_ties_by_insertion_order() {
        let ranked = RankingAlgorithm::Slowest.rank(&tied());
        assert_eq!(labels(&ranked), vec!["Taxi", "Tram", "Car", "Bus"]);
    }

    #[test]
    fn passthrough_keeps_order() {
        let ranked = RankingAlgorithm::Passthrough.rank(&tied());
        assert_eq!(labels(&ranked), vec!["Taxi", "Car", "Tram", "Bus"]);
    }

    #[test]
    fn empty_dataset_ranks_empty() {
        for algorithm in RankingAlgorithm::ALL {
            assert!(algorithm.rank(&RankingDataset::new()).is_empty());
        }
    }

    #[test]
    fn parses_names_and_aliases() {
        assert_eq!("Fastest".parse::<RankingAlgorithm>().unwrap(), RankingAlgorithm::Fastest);
        assert_eq!("descending".parse::<RankingAlgorithm>().unwrap(), RankingAlgorithm::Slowest);
        assert_eq!(" identity ".parse::<RankingAlgorithm>().unwrap(), RankingAlgorithm::Passthrough);
        assert!(matches!(
            "random".parse::<RankingAlgorithm>(),
            Err(PatternError::UnknownAlgorithm(name)) if name == "random"
        ));
    }

    #[test]
    fn deserializes_aliases_and_any_case() {
        let parsed: Vec<RankingAlgorithm> =
            serde_json::from_str(r#"["Fastest", "descending", "IDENTITY"]"#).unwrap();
        assert_eq!(
            parsed,
            vec![RankingAlgorithm::Fastest, RankingAlgorithm::Slowest, RankingAlgorithm::Passthrough]
        );
        assert!(serde_json::from_str::<RankingAlgorithm>(r#""random""#).is_err());
        assert_eq!(serde_json::to_string(&RankingAlgorithm::Slowest).unwrap(), r#""slowest""#);
    }

    #[test]
    fn display_round_trips_through_from_str() {
        for algorithm in RankingAlgorithm::ALL {
            assert_eq!(algorithm.to_string().parse::<RankingAlgorithm>().unwrap(), algorithm);
        }
    }
}
