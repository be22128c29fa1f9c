//! FILENAME: core/pivot-engine/src/engine.rs
//! Aggregation Engine - Turns a dataset and a filter selection into metrics.
//!
//! Algorithm:
//! 1. Filter: keep records matching every predicate, preserving order
//! 2. Single pass: feed each record into the overall accumulator and the
//!    per-category, per-payment, per-customer, per-product and per-day groups
//! 3. Order each breakdown for display (stable, so ties keep first-seen order)

use crate::cache::{AggregateAccumulator, GroupedAggregates};
use crate::definition::FilterCriteria;
use crate::view::{GroupCount, GroupTotal, Metrics};
use engine::Dataset;
use std::cmp::Ordering;

/// Number of entries in the top products breakdown.
pub const TOP_PRODUCTS_LIMIT: usize = 10;

/// Returns the records that satisfy all criteria, in dataset order.
pub fn filter(dataset: &Dataset, criteria: &FilterCriteria) -> Dataset {
    if criteria.excludes_everything() {
        log::debug!("criteria exclude every record");
        return Dataset::default();
    }
    let filtered: Dataset = dataset.iter().filter(|r| criteria.matches(r)).cloned().collect();
    log::debug!("filter kept {} of {} records", filtered.len(), dataset.len());
    filtered
}

/// Computes the headline metrics and grouped breakdowns for a dataset.
/// An empty dataset yields zero sums and no average.
pub fn aggregate(dataset: &Dataset) -> Metrics {
    let mut overall = AggregateAccumulator::new();
    let mut by_category = GroupedAggregates::new();
    let mut by_payment = GroupedAggregates::new();
    let mut by_customer = GroupedAggregates::new();
    let mut by_product = GroupedAggregates::new();
    let mut by_date = GroupedAggregates::new();

    for record in dataset {
        overall.add(record);
        by_category.add(record.category, record);
        by_payment.add(record.payment_method, record);
        by_customer.add(record.customer_type, record);
        by_product.add(record.product.clone(), record);
        by_date.add(record.date, record);
    }

    let mut revenue_by_category = revenue_totals(by_category);
    revenue_by_category.sort_by(descending_revenue);

    let mut payment_method_counts: Vec<GroupCount<_>> = by_payment
        .into_groups()
        .into_iter()
        .map(|(key, acc)| GroupCount { key, count: acc.count })
        .collect();
    payment_method_counts.sort_by(|a, b| b.count.cmp(&a.count));

    let mut revenue_by_customer_type = revenue_totals(by_customer);
    revenue_by_customer_type.sort_by(|a, b| a.key.label().cmp(b.key.label()));

    let mut top_products = revenue_totals(by_product);
    top_products.sort_by(descending_revenue);
    top_products.truncate(TOP_PRODUCTS_LIMIT);

    let mut daily_revenue = revenue_totals(by_date);
    daily_revenue.sort_by_key(|g| g.key);

    Metrics {
        purchase_count: overall.count,
        total_revenue: overall.revenue(),
        average_purchase: overall.mean(),
        products_sold: overall.quantity,
        revenue_by_category,
        payment_method_counts,
        revenue_by_customer_type,
        top_products,
        daily_revenue,
    }
}

fn revenue_totals<K: Eq + std::hash::Hash + Clone>(groups: GroupedAggregates<K>) -> Vec<GroupTotal<K>> {
    groups
        .into_groups()
        .into_iter()
        .map(|(key, acc)| GroupTotal { key, revenue: acc.revenue() })
        .collect()
}

fn descending_revenue<K>(a: &GroupTotal<K>, b: &GroupTotal<K>) -> Ordering {
    b.revenue.partial_cmp(&a.revenue).unwrap_or(Ordering::Equal)
}
