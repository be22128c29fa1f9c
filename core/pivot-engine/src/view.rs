//! FILENAME: core/pivot-engine/src/view.rs
//! Metrics View - The output handed to the presentation layer.
//!
//! Every breakdown is already ordered the way it is displayed, so a renderer
//! can draw the vectors as-is.

use chrono::NaiveDate;
use engine::money::format_average;
use engine::{Category, CustomerType, PaymentMethod};
use serde::Serialize;

/// Revenue attributed to one group key.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GroupTotal<K> {
    pub key: K,
    pub revenue: f64,
}

/// Number of records in one group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GroupCount<K> {
    pub key: K,
    pub count: usize,
}

/// Aggregate figures for a (typically filtered) dataset.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Metrics {
    /// Number of purchases.
    pub purchase_count: usize,

    /// Sum of line totals.
    pub total_revenue: f64,

    /// Mean line total. None for an empty dataset, displayed as "N/A".
    pub average_purchase: Option<f64>,

    /// Sum of quantities.
    pub products_sold: u64,

    /// Highest revenue first.
    pub revenue_by_category: Vec<GroupTotal<Category>>,

    /// Most frequent first.
    pub payment_method_counts: Vec<GroupCount<PaymentMethod>>,

    /// Ordered by customer type label.
    pub revenue_by_customer_type: Vec<GroupTotal<CustomerType>>,

    /// Best selling products by revenue, highest first.
    pub top_products: Vec<GroupTotal<String>>,

    /// Revenue per day, oldest first. Days without purchases are absent.
    pub daily_revenue: Vec<GroupTotal<NaiveDate>>,
}

impl Metrics {
    pub fn is_empty(&self) -> bool {
        self.purchase_count == 0
    }

    /// The average purchase as display text (`$12.34` or `N/A`).
    pub fn average_display(&self) -> String {
        format_average(self.average_purchase)
    }
}
