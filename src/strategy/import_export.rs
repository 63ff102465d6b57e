// src/strategy/import_export.rs
use crate::error::{PatternError, Result};
use crate::strategy::schema::{RankedEntry, RankingDataset};
use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;
use tracing::info;

/// Import a dataset from a JSON object file such as `{"Car": 25, "Bus": 120}`
pub fn import_dataset_from_file(file_path: &Path) -> Result<RankingDataset> {
    info!("Importing dataset from file: {}", file_path.display());

    let file = File::open(file_path)?;
    let mut reader = BufReader::new(file);
    let mut json_str = String::new();
    reader.read_to_string(&mut json_str)?;

    let dataset = parse_dataset(&json_str)?;

    info!("Dataset imported: {} entries", dataset.len());
    Ok(dataset)
}

/// Parse a dataset document. Labels must be non-empty.
pub fn parse_dataset(json_str: &str) -> Result<RankingDataset> {
    let dataset: RankingDataset = serde_json::from_str(json_str)?;

    if dataset.iter().any(|(label, _)| label.trim().is_empty()) {
        return Err(PatternError::InvalidDataset(
            "transport label is empty".to_string(),
        ));
    }

    Ok(dataset)
}

/// Export a ranking to a JSON file as an array of `{label, minutes}`
pub fn export_ranking_to_file(ranking: &[RankedEntry], file_path: &Path) -> Result<()> {
    info!("Exporting {} ranked entries to file: {}", ranking.len(), file_path.display());

    let json = serde_json::to_string_pretty(ranking)?;

    let file = File::create(file_path)?;
    let mut writer = BufWriter::new(file);
    writer.write_all(json.as_bytes())?;
    writer.flush()?;

    Ok(())
}
