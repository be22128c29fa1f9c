//! FILENAME: app/src/error.rs

use persistence::PersistenceError;
use std::path::PathBuf;
use thiserror::Error;

/// Failures reported to the caller of the dashboard backend.
#[derive(Error, Debug)]
pub enum DashboardError {
    /// Generation could not persist its output.
    #[error("Failed to write dataset: {0}")]
    Write(#[source] PersistenceError),

    /// The dataset file is missing or malformed.
    #[error("Failed to load dataset: {0}")]
    Load(#[source] PersistenceError),

    #[error("Failed to export CSV: {0}")]
    Export(#[source] PersistenceError),

    #[error("Invalid configuration in {}: {message}", .path.display())]
    Config { path: PathBuf, message: String },
}

impl DashboardError {
    /// True when loading failed only because the data file does not exist.
    pub fn is_missing_dataset(&self) -> bool {
        matches!(self, DashboardError::Load(e) if e.is_not_found())
    }
}
