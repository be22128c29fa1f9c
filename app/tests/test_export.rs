//! FILENAME: tests/test_export.rs
//! Integration tests for CSV export of the filtered subset.

mod common;

use app_lib::{DashboardError, FilterSelection};
use common::{PurchaseFixture, TestHarness};
use engine::Category;

#[test]
fn test_export_round_trips_filtered_rows() {
    let harness = TestHarness::with_records(PurchaseFixture::records());
    let mut dashboard = harness.dashboard();

    let selection = FilterSelection {
        categories: vec![Category::Bakery],
        ..FilterSelection::default()
    };
    let criteria = dashboard.resolve(&selection).unwrap();
    let target = harness.path("bakery.csv");
    let written = dashboard.export_csv(&criteria, Some(&target)).unwrap();
    assert_eq!(written, target);

    let exported = persistence::read_csv_file(&target).unwrap();
    let expected = dashboard.refresh(&criteria).unwrap().filtered;
    assert_eq!(exported, expected);
    assert_eq!(exported.len(), 3);
}

#[test]
fn test_export_header_and_row_format() {
    let harness = TestHarness::with_records(PurchaseFixture::records());
    let mut dashboard = harness.dashboard();
    let criteria = dashboard.default_criteria().unwrap();

    let download = dashboard.csv_download(&criteria).unwrap();
    assert_eq!(download.file_name, "filtered_supermarket_data.csv");

    let text = String::from_utf8(download.bytes).unwrap();
    let mut lines = text.lines();
    assert_eq!(
        lines.next().unwrap(),
        "Purchase ID,Date,Time,Category,Product,Unit Price,Quantity,Total,Payment Method,Customer Type"
    );
    assert!(lines.next().unwrap().starts_with("PUR00001,2024-03-01,12:30,Bakery,Bread,"));
    assert_eq!(text.lines().count(), 6);
}

#[test]
fn test_empty_export_has_header_only() {
    let harness = TestHarness::with_records(PurchaseFixture::records());
    let mut dashboard = harness.dashboard();
    let criteria = dashboard.default_criteria().unwrap().with_categories([Category::Snacks]);

    let download = dashboard.csv_download(&criteria).unwrap();
    let text = String::from_utf8(download.bytes).unwrap();
    assert_eq!(text.lines().count(), 1);
}

#[test]
fn test_export_to_missing_directory_is_export_error() {
    let harness = TestHarness::with_records(PurchaseFixture::records());
    let mut dashboard = harness.dashboard();
    let criteria = dashboard.default_criteria().unwrap();

    let err = dashboard
        .export_csv(&criteria, Some(&harness.path("nope/out.csv")))
        .unwrap_err();
    assert!(matches!(err, DashboardError::Export(_)), "{:?}", err);
}
