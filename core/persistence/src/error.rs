//! FILENAME: core/persistence/src/error.rs

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PersistenceError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("XLSX write error: {0}")]
    XlsxWrite(#[from] rust_xlsxwriter::XlsxError),

    #[error("XLSX read error: {0}")]
    XlsxRead(#[from] calamine::XlsxError),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Data file not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("Invalid file format: {0}")]
    InvalidFormat(String),

    #[error("Sheet not found: {0}")]
    SheetNotFound(String),

    #[error("Missing required column: {0}")]
    MissingColumn(String),

    #[error("Invalid value in row {row}, column '{column}': {message}")]
    InvalidValue {
        row: usize,
        column: &'static str,
        message: String,
    },
}

impl PersistenceError {
    /// True when the data file simply does not exist yet, as opposed to
    /// existing but being unreadable or malformed.
    pub fn is_not_found(&self) -> bool {
        match self {
            PersistenceError::NotFound(_) => true,
            PersistenceError::Io(e) => e.kind() == std::io::ErrorKind::NotFound,
            _ => false,
        }
    }
}
