//! FILENAME: tests/test_cache.rs
//! Integration tests for dataset caching, generation on demand and load errors.

mod common;

use app_lib::{DashboardError, DatasetCache};
use common::{PurchaseFixture, TestHarness};

// ============================================================================
// LOAD ONCE
// ============================================================================

#[test]
fn test_load_reads_workbook_once() {
    let harness = TestHarness::with_records(PurchaseFixture::records());
    let mut cache = DatasetCache::from_config(&harness.config);

    assert_eq!(cache.load().unwrap().len(), 5);
    assert_eq!(cache.load().unwrap().len(), 5);
    assert_eq!(cache.read_count(), 1);
    assert!(cache.is_loaded());
}

#[test]
fn test_on_disk_changes_are_not_observed_until_reload() {
    let harness = TestHarness::with_records(PurchaseFixture::records());
    let mut cache = DatasetCache::from_config(&harness.config);
    assert_eq!(cache.load().unwrap().len(), 5);

    let fewer: engine::Dataset = PurchaseFixture::records().into_iter().take(2).collect();
    persistence::save_dataset(&fewer, &harness.config.data_path, &harness.config.sheet_name).unwrap();

    assert_eq!(cache.load().unwrap().len(), 5);
    assert_eq!(cache.reload().unwrap().len(), 2);
    assert_eq!(cache.read_count(), 2);
}

#[test]
fn test_invalidate_forces_next_read() {
    let harness = TestHarness::with_records(PurchaseFixture::records());
    let mut cache = DatasetCache::from_config(&harness.config);
    cache.load().unwrap();

    cache.invalidate();
    assert!(!cache.is_loaded());
    cache.load().unwrap();
    assert_eq!(cache.read_count(), 2);
}

// ============================================================================
// LOAD OR GENERATE
// ============================================================================

#[test]
fn test_missing_workbook_is_generated_then_loaded() {
    let harness = TestHarness::new();
    assert!(!harness.config.data_path.exists());

    let mut cache = DatasetCache::from_config(&harness.config);
    let dataset = cache.load_or_generate(&harness.generator_config()).unwrap();
    assert_eq!(dataset.len(), 300);
    assert!(harness.config.data_path.exists());
    assert_eq!(cache.read_count(), 1);
}

#[test]
fn test_generated_workbook_matches_seeded_generation() {
    let harness = TestHarness::new();
    let mut cache = DatasetCache::from_config(&harness.config);
    let loaded = cache.load_or_generate(&harness.generator_config()).unwrap().clone();
    assert_eq!(loaded, generator::generate(&harness.generator_config()));
}

#[test]
fn test_ensure_dataset_exists_leaves_existing_file() {
    let harness = TestHarness::with_records(PurchaseFixture::records());
    let cache = DatasetCache::from_config(&harness.config);
    assert!(cache.ensure_dataset_exists(&harness.generator_config()).unwrap().is_none());

    let mut cache = cache;
    assert_eq!(cache.load().unwrap().len(), 5);
}

#[test]
fn test_ensure_dataset_exists_reports_summary() {
    let harness = TestHarness::new();
    let cache = DatasetCache::from_config(&harness.config);
    let summary = cache
        .ensure_dataset_exists(&harness.generator_config())
        .unwrap()
        .unwrap();
    assert_eq!(summary.record_count, 300);
    assert_eq!(summary.category_count, 9);
}

#[test]
fn test_generation_failure_is_write_error() {
    let harness = TestHarness::new();
    let mut cache = DatasetCache::new(harness.path("no_such_dir/data.xlsx"), "Purchases");
    let err = cache.load_or_generate(&harness.generator_config()).unwrap_err();
    assert!(matches!(err, DashboardError::Write(_)), "{:?}", err);
}

// ============================================================================
// MALFORMED FILES
// ============================================================================

#[test]
fn test_malformed_workbook_is_load_error_without_regeneration() {
    let harness = TestHarness::new();
    std::fs::write(&harness.config.data_path, b"this is not a workbook").unwrap();

    let mut cache = DatasetCache::from_config(&harness.config);
    let err = cache.load_or_generate(&harness.generator_config()).unwrap_err();
    assert!(matches!(err, DashboardError::Load(_)), "{:?}", err);
    assert!(!err.is_missing_dataset());

    // The broken file is left in place.
    assert_eq!(
        std::fs::read(&harness.config.data_path).unwrap(),
        b"this is not a workbook"
    );
}

/// Writes a one-row workbook whose Category cell holds `category`.
fn write_workbook_with_category(path: &std::path::Path, category: &str) {
    let mut workbook = rust_xlsxwriter::Workbook::new();
    let sheet = workbook.add_worksheet();
    sheet.set_name("Purchases").unwrap();
    for (col, name) in persistence::COLUMNS.iter().enumerate() {
        sheet.write_string(0, col as u16, *name).unwrap();
    }
    let cells = [
        "PUR00001", "2024-03-01", "12:30", category, "Bread", "4.00", "2", "8.00", "Cash", "Regular",
    ];
    for (col, value) in cells.iter().enumerate() {
        sheet.write_string(1, col as u16, *value).unwrap();
    }
    workbook.save(path).unwrap();
}

#[test]
fn test_unknown_category_label_is_load_error() {
    let harness = TestHarness::new();
    write_workbook_with_category(&harness.config.data_path, "Toys");

    let mut cache = DatasetCache::from_config(&harness.config);
    let err = cache.load().unwrap_err();
    assert!(matches!(err, DashboardError::Load(_)), "{:?}", err);
    assert!(!err.is_missing_dataset());
    assert!(err.to_string().contains("Category"), "{}", err);
    assert!(!cache.is_loaded());
}

#[test]
fn test_text_cells_with_known_labels_load() {
    let harness = TestHarness::new();
    write_workbook_with_category(&harness.config.data_path, "Bakery");

    let mut cache = DatasetCache::from_config(&harness.config);
    let dataset = cache.load().unwrap();
    assert_eq!(dataset.len(), 1);
    assert_eq!(dataset.records()[0].total, 8.0);
}

#[test]
fn test_wrong_sheet_is_load_error() {
    let harness = TestHarness::with_records(PurchaseFixture::records());
    let mut cache = DatasetCache::new(harness.config.data_path.clone(), "Sales");
    let err = cache.load().unwrap_err();
    assert!(matches!(err, DashboardError::Load(_)), "{:?}", err);
}
