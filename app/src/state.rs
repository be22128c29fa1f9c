//! FILENAME: app/src/state.rs
// PURPOSE: Owns the in-memory copy of the dataset for the session.
// CONTEXT: The workbook is read at most once until `invalidate` or `reload`
//          is called; on-disk changes in between are not observed.

use std::path::{Path, PathBuf};

use engine::{Dataset, DatasetSummary};
use generator::{generate_to_file, GeneratorConfig};
use persistence::load_dataset;

use crate::config::DashboardConfig;
use crate::error::DashboardError;
use crate::{log_debug, log_info, log_warn};

#[derive(Debug)]
pub struct DatasetCache {
    path: PathBuf,
    sheet_name: String,
    dataset: Option<Dataset>,
    /// How many times the workbook has actually been read.
    reads: usize,
}

impl DatasetCache {
    pub fn new(path: impl Into<PathBuf>, sheet_name: impl Into<String>) -> Self {
        DatasetCache {
            path: path.into(),
            sheet_name: sheet_name.into(),
            dataset: None,
            reads: 0,
        }
    }

    pub fn from_config(config: &DashboardConfig) -> Self {
        Self::new(config.data_path.clone(), config.sheet_name.clone())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn is_loaded(&self) -> bool {
        self.dataset.is_some()
    }

    pub fn read_count(&self) -> usize {
        self.reads
    }

    /// Generates the workbook if it does not exist yet. Returns the summary
    /// of the generated data, or None when the file was already present.
    pub fn ensure_dataset_exists(
        &self,
        generator: &GeneratorConfig,
    ) -> Result<Option<DatasetSummary>, DashboardError> {
        if self.path.exists() {
            log_debug!("CACHE", "dataset present at {}", self.path.display());
            return Ok(None);
        }

        log_info!("CACHE", "dataset missing at {}, generating", self.path.display());
        let summary = generate_to_file(generator, &self.path, &self.sheet_name)
            .map_err(DashboardError::Write)?;
        Ok(Some(summary))
    }

    /// Returns the cached dataset, reading the workbook on first use.
    pub fn load(&mut self) -> Result<&Dataset, DashboardError> {
        let dataset = match self.dataset.take() {
            Some(dataset) => {
                log_debug!("CACHE", "cache hit ({} rows)", dataset.len());
                dataset
            }
            None => self.read()?,
        };
        let dataset: &Dataset = self.dataset.insert(dataset);
        Ok(dataset)
    }

    /// Loads the dataset, generating the workbook first if loading fails
    /// because it is missing. Loading is retried once; any other failure is
    /// returned as-is.
    pub fn load_or_generate(&mut self, generator: &GeneratorConfig) -> Result<&Dataset, DashboardError> {
        let first_attempt = self.load().map(|_| ());
        if let Err(err) = first_attempt {
            if !err.is_missing_dataset() {
                return Err(err);
            }
            log_warn!("CACHE", "{}; generating a new dataset", err);
            self.ensure_dataset_exists(generator)?;
        }
        self.load()
    }

    /// Drops the cached copy; the next `load` reads the workbook again.
    pub fn invalidate(&mut self) {
        if self.dataset.take().is_some() {
            log_info!("CACHE", "invalidated cached dataset");
        }
    }

    pub fn reload(&mut self) -> Result<&Dataset, DashboardError> {
        self.invalidate();
        self.load()
    }

    fn read(&mut self) -> Result<Dataset, DashboardError> {
        let dataset =
            load_dataset(&self.path, Some(self.sheet_name.as_str())).map_err(DashboardError::Load)?;
        self.reads += 1;
        log_info!(
            "CACHE",
            "loaded {} rows from {}",
            dataset.len(),
            self.path.display()
        );
        Ok(dataset)
    }
}
