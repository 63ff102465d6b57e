// src/config.rs
use crate::error::Result;
use crate::strategy::RankingAlgorithm;
use config::{Config, Environment, File};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Config file read when `ROUTE_PATTERNS_CONFIG` is not set
pub const DEFAULT_CONFIG_FILE: &str = "route-patterns.toml";

/// Runtime settings, layered as defaults < config file < environment
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Settings {
    /// Algorithm used by `rank` when none is given on the command line
    pub default_algorithm: RankingAlgorithm,
    /// Seed for the travel time simulator; random when unset
    #[serde(default)]
    pub seed: Option<u64>,
    /// Also append ranking reports to a log file
    pub log_to_file: bool,
    /// Directory for the report log
    pub log_dir: PathBuf,
}

impl Settings {
    /// Load settings from the default locations
    pub fn load() -> Result<Self> {
        let path = std::env::var("ROUTE_PATTERNS_CONFIG")
            .unwrap_or_else(|_| DEFAULT_CONFIG_FILE.to_string());
        Self::load_from(Path::new(&path))
    }

    /// Load settings from an explicit file, which may be missing
    pub fn load_from(path: &Path) -> Result<Self> {
        debug!("Loading settings from {}", path.display());

        let settings = Config::builder()
            .set_default("default_algorithm", "fastest")?
            .set_default("log_to_file", false)?
            .set_default("log_dir", "logs")?
            .add_source(File::from(path).required(false))
            .add_source(Environment::with_prefix("ROUTE_PATTERNS").try_parsing(true))
            .build()?
            .try_deserialize()?;

        Ok(settings)
    }
}
