// src/cli.rs
use crate::config::Settings;
use crate::sequence::StringSequence;
use crate::strategy::import_export::{export_ranking_to_file, import_dataset_from_file};
use crate::strategy::simulate::{make_rng, sample_dataset};
use crate::strategy::{RankedEntry, RankingAlgorithm, RankingDataset, StrategySelector};
use crate::utils::log_utils::log_to_file;
use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing::warn;

#[derive(Parser)]
#[command(name = "route-patterns")]
#[command(about = "Rank commute times and hash strings lazily", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Rank travel times with one algorithm
    Rank {
        /// fastest, slowest or passthrough (defaults to the configured algorithm)
        #[arg(short, long)]
        algorithm: Option<RankingAlgorithm>,

        /// JSON object of label -> minutes; simulated when omitted
        #[arg(short, long)]
        dataset: Option<PathBuf>,

        /// Export the ranking to a JSON file
        #[arg(short, long)]
        export: Option<PathBuf>,
    },

    /// Rank with the fastest strategy, then switch to the slowest
    Compare {
        /// JSON object of label -> minutes; simulated when omitted
        #[arg(short, long)]
        dataset: Option<PathBuf>,
    },

    /// Print the SHA-1 digest of each item, in order
    Hash {
        /// Split this text on spaces and hash each word
        #[arg(short, long)]
        words: Option<String>,

        /// Items to hash
        items: Vec<String>,
    },
}

/// Load a dataset from file, or simulate one
pub fn resolve_dataset(path: Option<&Path>, settings: &Settings) -> Result<RankingDataset> {
    match path {
        Some(path) => import_dataset_from_file(path)
            .with_context(|| format!("Failed to import dataset from {}", path.display())),
        None => Ok(sample_dataset(&mut make_rng(settings.seed))),
    }
}

/// Render a ranking as report lines
pub fn render_ranking(ranking: &[RankedEntry]) -> Vec<String> {
    ranking.iter().map(ToString::to_string).collect()
}

fn print_ranking(ranking: &[RankedEntry], algorithm: RankingAlgorithm, settings: &Settings) {
    for line in render_ranking(ranking) {
        println!("{}", line);
    }

    if settings.log_to_file {
        let summary = format!("{} ranking: {:?}", algorithm, render_ranking(ranking));
        if let Err(e) = log_to_file(&settings.log_dir, &summary) {
            warn!("Failed to write report log: {}", e);
        }
    }
}

/// Digests for the items, followed by the words of `words` if given
pub fn hash_items(items: Vec<String>, words: Option<&str>) -> Vec<String> {
    let mut sequence = StringSequence::from(items);
    if let Some(text) = words {
        sequence.extend(text.split(' '));
    }
    sequence.cursor().collect()
}

/// Execute a command from the CLI
pub fn execute_command(command: Commands, settings: &Settings) -> Result<()> {
    match command {
        Commands::Rank { algorithm, dataset, export } => {
            let algorithm = algorithm.unwrap_or(settings.default_algorithm);
            let dataset = resolve_dataset(dataset.as_deref(), settings)?;

            let selector = StrategySelector::with_dataset(algorithm, dataset);
            println!("Client: Strategy is set to the {} sorting", algorithm);
            let ranking = selector.rank();
            print_ranking(&ranking, algorithm, settings);

            if let Some(export_path) = export {
                export_ranking_to_file(&ranking, &export_path)
                    .with_context(|| format!("Failed to export ranking to {}", export_path.display()))?;
                println!("\nRanking exported successfully.");
            }
        },

        Commands::Compare { dataset } => {
            let dataset = resolve_dataset(dataset.as_deref(), settings)?;
            let mut selector = StrategySelector::with_dataset(RankingAlgorithm::Fastest, dataset);

            println!("Client: Strategy is set to the fastest sorting");
            print_ranking(&selector.rank(), selector.algorithm(), settings);

            selector.set_algorithm(RankingAlgorithm::Slowest);
            println!("\nClient: Strategy is set to the slowest sorting");
            print_ranking(&selector.rank(), selector.algorithm(), settings);
        },

        Commands::Hash { words, items } => {
            for digest in hash_items(items, words.as_deref()) {
                println!("{}", digest);
            }
        },
    }

    Ok(())
}
