//! FILENAME: app/src/dashboard.rs
// PURPOSE: One dashboard session: cached dataset, filter selection, metrics
//          and CSV export.
// CONTEXT: Each criteria change re-runs the full filter and aggregate pass
//          over the cached dataset. Nothing is updated incrementally.

use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use engine::{Category, CustomerType, Dataset, PaymentMethod, PurchaseRecord};
use generator::GeneratorConfig;
use pivot_engine::{aggregate, filter, FilterCriteria, Metrics};

use crate::config::DashboardConfig;
use crate::error::DashboardError;
use crate::state::DatasetCache;
use crate::{log_enter, log_exit, log_info, log_warn};

// ============================================================================
// FILTER SELECTION
// ============================================================================

/// A user's filter input before it is applied to a dataset.
///
/// Unlike `FilterCriteria`, an empty list here means "not specified" and
/// resolves to every value present in the dataset, the way the dashboard's
/// multiselects start out fully selected. Missing dates resolve to the
/// dataset's first and last purchase dates.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterSelection {
    pub categories: Vec<Category>,
    pub payment_methods: Vec<PaymentMethod>,
    pub customer_types: Vec<CustomerType>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
}

impl FilterSelection {
    pub fn resolve(&self, dataset: &Dataset) -> FilterCriteria {
        let mut criteria = FilterCriteria::all_from(dataset);

        if !self.categories.is_empty() {
            criteria = criteria.with_categories(self.categories.iter().copied());
        }
        if !self.payment_methods.is_empty() {
            criteria = criteria.with_payment_methods(self.payment_methods.iter().copied());
        }
        if !self.customer_types.is_empty() {
            criteria = criteria.with_customer_types(self.customer_types.iter().copied());
        }

        let start = self.start_date.unwrap_or(criteria.start_date);
        let end = self.end_date.unwrap_or(criteria.end_date);
        criteria.with_date_range(start, end)
    }
}

// ============================================================================
// SNAPSHOT
// ============================================================================

/// Result of one filter-and-aggregate pass.
#[derive(Debug, Clone)]
pub struct DashboardSnapshot {
    pub criteria: FilterCriteria,
    pub filtered: Dataset,
    pub metrics: Metrics,
}

impl DashboardSnapshot {
    /// Filtered purchases for the details table, newest first.
    pub fn details(&self) -> Vec<&PurchaseRecord> {
        self.filtered.sorted_by_date_desc()
    }

    pub fn is_empty(&self) -> bool {
        self.filtered.is_empty()
    }
}

/// A CSV payload ready to be offered as a download.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CsvDownload {
    pub file_name: String,
    pub bytes: Vec<u8>,
}

// ============================================================================
// DASHBOARD
// ============================================================================

pub struct Dashboard {
    cache: DatasetCache,
    generator: GeneratorConfig,
    export_file_name: String,
}

impl Dashboard {
    pub fn new(config: &DashboardConfig) -> Self {
        Dashboard {
            cache: DatasetCache::from_config(config),
            generator: config.generator_config(),
            export_file_name: config.export_file_name.clone(),
        }
    }

    /// Replaces the generator settings used when the dataset is missing.
    pub fn with_generator(mut self, generator: GeneratorConfig) -> Self {
        self.generator = generator;
        self
    }

    pub fn cache(&self) -> &DatasetCache {
        &self.cache
    }

    /// The full dataset, generating it first if the workbook is missing.
    pub fn dataset(&mut self) -> Result<&Dataset, DashboardError> {
        self.cache.load_or_generate(&self.generator)
    }

    /// Criteria selecting the whole dataset.
    pub fn default_criteria(&mut self) -> Result<FilterCriteria, DashboardError> {
        Ok(FilterCriteria::all_from(self.dataset()?))
    }

    pub fn resolve(&mut self, selection: &FilterSelection) -> Result<FilterCriteria, DashboardError> {
        Ok(selection.resolve(self.dataset()?))
    }

    /// Filters the cached dataset and aggregates the result.
    pub fn refresh(&mut self, criteria: &FilterCriteria) -> Result<DashboardSnapshot, DashboardError> {
        log_enter!("DASH", "refresh");
        let dataset = self.cache.load_or_generate(&self.generator)?;

        let filtered = filter(dataset, criteria);
        if filtered.is_empty() {
            log_warn!(
                "FILTER",
                "EmptyResultWarning: no purchases match the selected filters ({} to {})",
                criteria.start_date,
                criteria.end_date
            );
        }
        let metrics = aggregate(&filtered);

        log_exit!("DASH", "refresh", "{} of {} rows", filtered.len(), dataset.len());
        Ok(DashboardSnapshot {
            criteria: criteria.clone(),
            filtered,
            metrics,
        })
    }

    /// The filtered subset as CSV bytes, with the configured download name.
    pub fn csv_download(&mut self, criteria: &FilterCriteria) -> Result<CsvDownload, DashboardError> {
        let snapshot = self.refresh(criteria)?;
        let bytes = persistence::to_csv_bytes(&snapshot.filtered).map_err(DashboardError::Export)?;
        Ok(CsvDownload {
            file_name: self.export_file_name.clone(),
            bytes,
        })
    }

    /// Writes the filtered subset to `path`, or to the configured export
    /// file name in the working directory. Returns the path written.
    pub fn export_csv(
        &mut self,
        criteria: &FilterCriteria,
        path: Option<&Path>,
    ) -> Result<PathBuf, DashboardError> {
        let target = path
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from(&self.export_file_name));

        let snapshot = self.refresh(criteria)?;
        persistence::export_csv(&snapshot.filtered, &target).map_err(DashboardError::Export)?;

        log_info!(
            "EXPORT",
            "wrote {} rows to {}",
            snapshot.filtered.len(),
            target.display()
        );
        Ok(target)
    }
}
