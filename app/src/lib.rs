//! FILENAME: app/src/lib.rs
// PURPOSE: Dashboard backend library: session state, reports and CSV export.
// CONTEXT: The `supermarket` binary is a thin clap front end over this crate.

pub mod logging;

pub mod config;
pub mod dashboard;
pub mod error;
pub mod report;
pub mod state;

pub use config::{DashboardConfig, DEFAULT_DATA_FILE, DEFAULT_EXPORT_FILE};
pub use dashboard::{CsvDownload, Dashboard, DashboardSnapshot, FilterSelection};
pub use error::DashboardError;
pub use logging::{get_log_path, init_logging, next_seq, write_log};
pub use report::{render_report, Report};
pub use state::DatasetCache;
