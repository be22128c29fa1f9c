//! FILENAME: tests/common/mod.rs
//! Test harness and fixtures for dashboard backend integration tests.

#![allow(dead_code)]

use std::path::PathBuf;

use app_lib::{Dashboard, DashboardConfig};
use chrono::NaiveDate;
use engine::{Category, CustomerType, Dataset, PaymentMethod, PurchaseRecord};
use generator::GeneratorConfig;
use tempfile::TempDir;

/// Reference date for every generated fixture.
pub fn fixture_today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 9, 30).unwrap()
}

/// Test harness owning a scratch directory and a config pointing into it.
pub struct TestHarness {
    pub dir: TempDir,
    pub config: DashboardConfig,
}

impl TestHarness {
    /// Create a harness whose data file does not exist yet.
    pub fn new() -> Self {
        let dir = tempfile::tempdir().unwrap();
        let config = DashboardConfig {
            data_path: dir.path().join("supermarket_data.xlsx"),
            record_count: 300,
            seed: Some(2024),
            ..DashboardConfig::default()
        };
        TestHarness { dir, config }
    }

    /// Create a harness with a generated workbook already on disk.
    pub fn with_generated_data() -> Self {
        let harness = Self::new();
        generator::generate_to_file(
            &harness.generator_config(),
            &harness.config.data_path,
            &harness.config.sheet_name,
        )
        .unwrap();
        harness
    }

    /// Create a harness whose workbook holds exactly `records`.
    pub fn with_records(records: Vec<PurchaseRecord>) -> Self {
        let harness = Self::new();
        persistence::save_dataset(
            &Dataset::new(records),
            &harness.config.data_path,
            &harness.config.sheet_name,
        )
        .unwrap();
        harness
    }

    pub fn generator_config(&self) -> GeneratorConfig {
        self.config.generator_config().with_today(fixture_today())
    }

    pub fn dashboard(&self) -> Dashboard {
        Dashboard::new(&self.config).with_generator(self.generator_config())
    }

    pub fn path(&self, file_name: &str) -> PathBuf {
        self.dir.path().join(file_name)
    }
}

/// Hand-written purchases with easily checked totals.
pub struct PurchaseFixture;

impl PurchaseFixture {
    pub fn record(
        id: usize,
        date: (i32, u32, u32),
        category: Category,
        product: &str,
        unit_price: f64,
        quantity: u32,
        payment_method: PaymentMethod,
        customer_type: CustomerType,
    ) -> PurchaseRecord {
        PurchaseRecord {
            id: PurchaseRecord::purchase_id(id),
            date: NaiveDate::from_ymd_opt(date.0, date.1, date.2).unwrap(),
            time: "12:30".to_string(),
            category,
            product: product.to_string(),
            unit_price,
            quantity,
            total: PurchaseRecord::line_total(unit_price, quantity),
            payment_method,
            customer_type,
        }
    }

    /// Five purchases over three days, two categories and two payment methods.
    pub fn records() -> Vec<PurchaseRecord> {
        use Category::*;
        use CustomerType::*;
        use PaymentMethod::*;
        vec![
            Self::record(1, (2024, 3, 1), Bakery, "Bread", 4.0, 2, Cash, Regular),
            Self::record(2, (2024, 3, 1), Beverages, "Coffee", 5.0, 2, CreditCard, Member),
            Self::record(3, (2024, 3, 2), Bakery, "Croissants", 3.5, 4, CreditCard, New),
            Self::record(4, (2024, 3, 3), Beverages, "Juice", 6.0, 2, Cash, Member),
            Self::record(5, (2024, 3, 3), Bakery, "Bread", 5.0, 1, Cash, Regular),
        ]
    }
}
