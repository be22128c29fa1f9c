//! FILENAME: core/engine/src/dataset.rs
//! PURPOSE: The ordered, read-only collection of purchase records.
//! CONTEXT: A Dataset is produced once by the generator (or by loading the
//! workbook) and is never mutated afterwards; filtering produces new Datasets.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use std::hash::Hash;

use crate::money::{format_average, format_currency, from_cents, to_cents};
use crate::record::{Category, CustomerType, PaymentMethod, PurchaseRecord};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    records: Vec<PurchaseRecord>,
}

impl Dataset {
    pub fn new(records: Vec<PurchaseRecord>) -> Self {
        Dataset { records }
    }

    pub fn records(&self) -> &[PurchaseRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, PurchaseRecord> {
        self.records.iter()
    }

    /// Earliest and latest purchase dates, or None for an empty dataset.
    pub fn date_bounds(&self) -> Option<(NaiveDate, NaiveDate)> {
        let first = self.records.first()?.date;
        Some(self.records.iter().fold((first, first), |(min, max), r| {
            (min.min(r.date), max.max(r.date))
        }))
    }

    /// Distinct categories in first-seen order.
    pub fn distinct_categories(&self) -> Vec<Category> {
        first_seen(self.records.iter().map(|r| r.category))
    }

    /// Distinct payment methods in first-seen order.
    pub fn distinct_payment_methods(&self) -> Vec<PaymentMethod> {
        first_seen(self.records.iter().map(|r| r.payment_method))
    }

    /// Distinct customer types in first-seen order.
    pub fn distinct_customer_types(&self) -> Vec<CustomerType> {
        first_seen(self.records.iter().map(|r| r.customer_type))
    }

    pub fn distinct_products(&self) -> Vec<&str> {
        first_seen(self.records.iter().map(|r| r.product.as_str()))
    }

    /// Records ordered newest first. Records sharing a date keep their
    /// dataset order.
    pub fn sorted_by_date_desc(&self) -> Vec<&PurchaseRecord> {
        let mut rows: Vec<&PurchaseRecord> = self.records.iter().collect();
        rows.sort_by(|a, b| b.date.cmp(&a.date));
        rows
    }

    pub fn summary(&self) -> DatasetSummary {
        let revenue_cents: i64 = self.records.iter().map(|r| to_cents(r.total)).sum();
        let total_revenue = from_cents(revenue_cents);

        DatasetSummary {
            record_count: self.records.len(),
            category_count: self.distinct_categories().len(),
            product_count: self.distinct_products().len(),
            total_revenue,
            average_purchase: if self.records.is_empty() {
                None
            } else {
                Some(total_revenue / self.records.len() as f64)
            },
            date_range: self.date_bounds(),
        }
    }
}

impl FromIterator<PurchaseRecord> for Dataset {
    fn from_iter<I: IntoIterator<Item = PurchaseRecord>>(iter: I) -> Self {
        Dataset::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a Dataset {
    type Item = &'a PurchaseRecord;
    type IntoIter = std::slice::Iter<'a, PurchaseRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

fn first_seen<T: Eq + Hash + Copy>(values: impl Iterator<Item = T>) -> Vec<T> {
    let mut seen = HashSet::new();
    values.filter(|v| seen.insert(*v)).collect()
}

// ============================================================================
// SUMMARY
// ============================================================================

/// Headline figures for a dataset, reported after generation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DatasetSummary {
    pub record_count: usize,
    pub category_count: usize,
    pub product_count: usize,
    pub total_revenue: f64,
    /// None when the dataset is empty.
    pub average_purchase: Option<f64>,
    pub date_range: Option<(NaiveDate, NaiveDate)>,
}

impl fmt::Display for DatasetSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Records: {}", self.record_count)?;
        writeln!(f, "  - Categories: {}", self.category_count)?;
        writeln!(f, "  - Products: {}", self.product_count)?;
        writeln!(f, "  - Total revenue: {}", format_currency(self.total_revenue))?;
        writeln!(f, "  - Average purchase: {}", format_average(self.average_purchase))?;
        match self.date_range {
            Some((start, end)) => write!(f, "  - Date range: {} to {}", start, end),
            None => write!(f, "  - Date range: N/A"),
        }
    }
}
