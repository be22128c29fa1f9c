//! FILENAME: core/persistence/src/lib.rs
//! Purchase Data Persistence Module
//!
//! Handles saving and loading the purchase dataset as a single-sheet XLSX
//! workbook, and exporting/importing filtered subsets as CSV.

mod csv_io;
mod error;
mod xlsx_reader;
mod xlsx_writer;

pub use csv_io::{export_csv, read_csv, read_csv_file, to_csv_bytes, write_csv};
pub use error::PersistenceError;
pub use xlsx_reader::load_dataset;
pub use xlsx_writer::save_dataset;

// ============================================================================
// COLUMN LAYOUT
// ============================================================================

/// Sheet name used when the dataset is written.
pub const DEFAULT_SHEET_NAME: &str = "Purchases";

/// Format of the Date column.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

pub const COL_PURCHASE_ID: &str = "Purchase ID";
pub const COL_DATE: &str = "Date";
pub const COL_TIME: &str = "Time";
pub const COL_CATEGORY: &str = "Category";
pub const COL_PRODUCT: &str = "Product";
pub const COL_UNIT_PRICE: &str = "Unit Price";
pub const COL_QUANTITY: &str = "Quantity";
pub const COL_TOTAL: &str = "Total";
pub const COL_PAYMENT_METHOD: &str = "Payment Method";
pub const COL_CUSTOMER_TYPE: &str = "Customer Type";

/// Header row, in the order columns are written.
pub const COLUMNS: [&str; 10] = [
    COL_PURCHASE_ID,
    COL_DATE,
    COL_TIME,
    COL_CATEGORY,
    COL_PRODUCT,
    COL_UNIT_PRICE,
    COL_QUANTITY,
    COL_TOTAL,
    COL_PAYMENT_METHOD,
    COL_CUSTOMER_TYPE,
];

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use engine::{Category, CustomerType, Dataset, PaymentMethod, PurchaseRecord};

    pub(crate) fn sample_dataset() -> Dataset {
        let rows = [
            (Category::Beverages, "Coffee", 5.49, 2, PaymentMethod::CreditCard, CustomerType::Member, 1),
            (Category::MeatSeafood, "Salmon", 19.95, 1, PaymentMethod::Cash, CustomerType::Regular, 4),
            (Category::PersonalCare, "Shampoo", 7.3, 3, PaymentMethod::MobilePayment, CustomerType::New, 4),
        ];

        rows.iter()
            .enumerate()
            .map(|(i, (category, product, price, qty, payment, customer, day))| PurchaseRecord {
                id: PurchaseRecord::purchase_id(i + 1),
                date: NaiveDate::from_ymd_opt(2024, 6, *day).unwrap(),
                time: format!("{:02}:{:02}", 8 + i, 15 * i),
                category: *category,
                product: product.to_string(),
                unit_price: *price,
                quantity: *qty,
                total: PurchaseRecord::line_total(*price, *qty),
                payment_method: *payment,
                customer_type: *customer,
            })
            .collect()
    }

    #[test]
    fn test_columns_are_unique() {
        let mut names = COLUMNS.to_vec();
        names.sort();
        names.dedup();
        assert_eq!(names.len(), COLUMNS.len());
    }

    #[test]
    fn test_xlsx_round_trip_preserves_records() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("purchases.xlsx");
        let dataset = sample_dataset();

        save_dataset(&dataset, &path, DEFAULT_SHEET_NAME).unwrap();
        let loaded = load_dataset(&path, Some(DEFAULT_SHEET_NAME)).unwrap();

        assert_eq!(loaded, dataset);
    }

    #[test]
    fn test_load_missing_file_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_dataset(&dir.path().join("absent.xlsx"), None).unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn test_load_unknown_sheet() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("purchases.xlsx");
        save_dataset(&sample_dataset(), &path, DEFAULT_SHEET_NAME).unwrap();

        let err = load_dataset(&path, Some("Sales")).unwrap_err();
        assert!(matches!(err, PersistenceError::SheetNotFound(name) if name == "Sales"));
    }

    #[test]
    fn test_save_into_missing_directory_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("no").join("such").join("dir.xlsx");
        let err = save_dataset(&sample_dataset(), &path, DEFAULT_SHEET_NAME).unwrap_err();
        assert!(matches!(err, PersistenceError::XlsxWrite(_) | PersistenceError::Io(_)));
        assert!(!path.exists());
    }
}
