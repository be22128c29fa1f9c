//! FILENAME: core/engine/src/record.rs
//! PURPOSE: Defines a single purchase transaction and its enumerated attributes.
//! CONTEXT: The enum labels are the exact strings persisted in the workbook and
//! the CSV export, so `Display`/`FromStr` and the serde names must agree.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

use crate::catalog;
use crate::money::round_to_cents;

/// Raised when a persisted label does not name a known enum value.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown {kind} '{label}'")]
pub struct ParseLabelError {
    pub kind: &'static str,
    pub label: String,
}

/// Declares a fieldless enum whose variants map 1:1 onto display labels.
macro_rules! labelled_enum {
    (
        $(#[$meta:meta])*
        $name:ident, $kind:literal {
            $($variant:ident => $label:literal),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        pub enum $name {
            $(
                #[serde(rename = $label)]
                $variant,
            )+
        }

        impl $name {
            /// Every value, in declaration order.
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            pub fn label(&self) -> &'static str {
                match self {
                    $($name::$variant => $label,)+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.pad(self.label())
            }
        }

        impl FromStr for $name {
            type Err = ParseLabelError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s.trim() {
                    $($label => Ok($name::$variant),)+
                    other => Err(ParseLabelError {
                        kind: $kind,
                        label: other.to_string(),
                    }),
                }
            }
        }
    };
}

labelled_enum! {
    /// Store department a product belongs to.
    Category, "category" {
        FruitsVegetables => "Fruits & Vegetables",
        DairyEggs => "Dairy & Eggs",
        MeatSeafood => "Meat & Seafood",
        Bakery => "Bakery",
        Beverages => "Beverages",
        Snacks => "Snacks",
        FrozenFoods => "Frozen Foods",
        Household => "Household",
        PersonalCare => "Personal Care",
    }
}

labelled_enum! {
    PaymentMethod, "payment method" {
        Cash => "Cash",
        CreditCard => "Credit Card",
        DebitCard => "Debit Card",
        MobilePayment => "Mobile Payment",
    }
}

labelled_enum! {
    CustomerType, "customer type" {
        Regular => "Regular",
        Member => "Member",
        New => "New",
    }
}

impl Category {
    /// Inclusive unit price bounds for products in this category.
    pub fn price_range(&self) -> catalog::PriceRange {
        catalog::price_range(*self)
    }

    /// The fixed product list for this category.
    pub fn products(&self) -> &'static [&'static str] {
        catalog::products(*self)
    }

    pub fn has_product(&self, product: &str) -> bool {
        self.products().contains(&product)
    }
}

// ============================================================================
// PURCHASE RECORD
// ============================================================================

/// One synthetic purchase transaction.
///
/// Field names are renamed to the column headers used by the workbook and the
/// CSV export, so a record serializes straight into a row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PurchaseRecord {
    #[serde(rename = "Purchase ID")]
    pub id: String,
    #[serde(rename = "Date")]
    pub date: NaiveDate,
    /// Wall-clock time as "HH:MM".
    #[serde(rename = "Time")]
    pub time: String,
    #[serde(rename = "Category")]
    pub category: Category,
    #[serde(rename = "Product")]
    pub product: String,
    #[serde(rename = "Unit Price")]
    pub unit_price: f64,
    #[serde(rename = "Quantity")]
    pub quantity: u32,
    #[serde(rename = "Total")]
    pub total: f64,
    #[serde(rename = "Payment Method")]
    pub payment_method: PaymentMethod,
    #[serde(rename = "Customer Type")]
    pub customer_type: CustomerType,
}

impl PurchaseRecord {
    /// Builds the id for the 1-based generation index, e.g. `PUR00042`.
    pub fn purchase_id(index: usize) -> String {
        format!("PUR{:05}", index)
    }

    /// Line total for a unit price and quantity, rounded to cents.
    pub fn line_total(unit_price: f64, quantity: u32) -> f64 {
        round_to_cents(unit_price * quantity as f64)
    }

    /// Checks the record-level invariants: the product belongs to the
    /// category, the price is inside the category range and the total matches
    /// the rounded line total.
    pub fn is_consistent(&self) -> bool {
        self.category.has_product(&self.product)
            && self.category.price_range().contains(self.unit_price)
            && self.total == Self::line_total(self.unit_price, self.quantity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> PurchaseRecord {
        PurchaseRecord {
            id: PurchaseRecord::purchase_id(7),
            date: NaiveDate::from_ymd_opt(2024, 3, 9).unwrap(),
            time: "09:05".to_string(),
            category: Category::Bakery,
            product: "Bagels".to_string(),
            unit_price: 3.35,
            quantity: 3,
            total: PurchaseRecord::line_total(3.35, 3),
            payment_method: PaymentMethod::MobilePayment,
            customer_type: CustomerType::Member,
        }
    }

    #[test]
    fn test_purchase_id_is_zero_padded() {
        assert_eq!(PurchaseRecord::purchase_id(1), "PUR00001");
        assert_eq!(PurchaseRecord::purchase_id(1000), "PUR01000");
        assert_eq!(PurchaseRecord::purchase_id(99999), "PUR99999");
    }

    #[test]
    fn test_line_total_rounds_to_cents() {
        assert_eq!(PurchaseRecord::line_total(3.35, 3), 10.05);
        assert_eq!(PurchaseRecord::line_total(1.11, 5), 5.55);
    }

    #[test]
    fn test_labels_round_trip() {
        for category in Category::ALL {
            assert_eq!(category.label().parse::<Category>().unwrap(), *category);
        }
        for method in PaymentMethod::ALL {
            assert_eq!(method.to_string().parse::<PaymentMethod>().unwrap(), *method);
        }
        for customer in CustomerType::ALL {
            assert_eq!(customer.to_string().parse::<CustomerType>().unwrap(), *customer);
        }
    }

    #[test]
    fn test_unknown_label_is_rejected() {
        let err = "Toys".parse::<Category>().unwrap_err();
        assert_eq!(err.kind, "category");
        assert_eq!(err.to_string(), "unknown category 'Toys'");
    }

    #[test]
    fn test_enum_counts() {
        assert_eq!(Category::ALL.len(), 9);
        assert_eq!(PaymentMethod::ALL.len(), 4);
        assert_eq!(CustomerType::ALL.len(), 3);
    }

    #[test]
    fn test_consistency_checks() {
        let record = sample();
        assert!(record.is_consistent());

        let mut wrong_product = sample();
        wrong_product.product = "Salmon".to_string();
        assert!(!wrong_product.is_consistent());

        let mut wrong_total = sample();
        wrong_total.total = 10.0;
        assert!(!wrong_total.is_consistent());

        let mut out_of_range = sample();
        out_of_range.unit_price = 10.5;
        out_of_range.total = PurchaseRecord::line_total(10.5, 3);
        assert!(!out_of_range.is_consistent());
    }

    #[test]
    fn test_serde_uses_column_headers() {
        let json = serde_json::to_value(sample()).unwrap();
        assert_eq!(json["Purchase ID"], "PUR00007");
        assert_eq!(json["Date"], "2024-03-09");
        assert_eq!(json["Category"], "Bakery");
        assert_eq!(json["Payment Method"], "Mobile Payment");
    }
}
