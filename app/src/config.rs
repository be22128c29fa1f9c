//! FILENAME: app/src/config.rs
//! PURPOSE: Dashboard settings, loaded from an optional JSON file.
//! CONTEXT: Every field has a default, so a partial file (or no file at all)
//! is valid. Command-line flags are applied on top by the binary.

use std::path::{Path, PathBuf};

use generator::{GeneratorConfig, DEFAULT_RECORD_COUNT};
use log::LevelFilter;
use persistence::DEFAULT_SHEET_NAME;
use serde::{Deserialize, Serialize};

use crate::error::DashboardError;

pub const DEFAULT_DATA_FILE: &str = "supermarket_data.xlsx";
pub const DEFAULT_EXPORT_FILE: &str = "filtered_supermarket_data.csv";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    /// Workbook holding the dataset.
    pub data_path: PathBuf,
    pub sheet_name: String,
    /// Records to generate when the workbook is missing.
    pub record_count: usize,
    /// Seed for reproducible generation.
    pub seed: Option<u64>,
    /// File name offered for the filtered CSV download.
    pub export_file_name: String,
    /// Log file; None logs to the console only.
    pub log_path: Option<PathBuf>,
    /// One of off, error, warn, info, debug, trace.
    pub log_level: String,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        DashboardConfig {
            data_path: PathBuf::from(DEFAULT_DATA_FILE),
            sheet_name: DEFAULT_SHEET_NAME.to_string(),
            record_count: DEFAULT_RECORD_COUNT,
            seed: None,
            export_file_name: DEFAULT_EXPORT_FILE.to_string(),
            log_path: None,
            log_level: "info".to_string(),
        }
    }
}

impl DashboardConfig {
    /// Reads the config file. A missing file yields the defaults.
    pub fn load(path: &Path) -> Result<Self, DashboardError> {
        if !path.exists() {
            return Ok(DashboardConfig::default());
        }

        let text = std::fs::read_to_string(path).map_err(|e| DashboardError::Config {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        let config = Self::from_json(&text).map_err(|message| DashboardError::Config {
            path: path.to_path_buf(),
            message,
        })?;
        config.log_level_filter().map_err(|message| DashboardError::Config {
            path: path.to_path_buf(),
            message,
        })?;
        Ok(config)
    }

    pub fn from_json(json: &str) -> Result<Self, String> {
        serde_json::from_str(json).map_err(|e| e.to_string())
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_default()
    }

    pub fn log_level_filter(&self) -> Result<LevelFilter, String> {
        self.log_level
            .parse::<LevelFilter>()
            .map_err(|_| format!("unknown log level '{}'", self.log_level))
    }

    pub fn generator_config(&self) -> GeneratorConfig {
        GeneratorConfig {
            count: self.record_count,
            seed: self.seed,
            today: None,
        }
    }
}
