//! FILENAME: core/engine/src/lib.rs
//! PURPOSE: Main library entry point for the purchase data model.
//! CONTEXT: Re-exports public types and modules for use by other crates.

pub mod catalog;
pub mod dataset;
pub mod money;
pub mod record;

// Re-export commonly used types at the crate root
pub use catalog::PriceRange;
pub use dataset::{Dataset, DatasetSummary};
pub use money::{format_average, format_currency, round_to_cents};
pub use record::{Category, CustomerType, ParseLabelError, PaymentMethod, PurchaseRecord};

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn it_collects_records_into_a_dataset() {
        let dataset: Dataset = (1..=3)
            .map(|i| PurchaseRecord {
                id: PurchaseRecord::purchase_id(i),
                date: NaiveDate::from_ymd_opt(2024, 1, i as u32).unwrap(),
                time: "08:30".to_string(),
                category: Category::Household,
                product: "Sponges".to_string(),
                unit_price: 3.0,
                quantity: 2,
                total: PurchaseRecord::line_total(3.0, 2),
                payment_method: PaymentMethod::DebitCard,
                customer_type: CustomerType::New,
            })
            .collect();

        assert_eq!(dataset.len(), 3);
        assert!(dataset.iter().all(PurchaseRecord::is_consistent));
        assert_eq!(dataset.records()[2].id, "PUR00003");
    }
}
