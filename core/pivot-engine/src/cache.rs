//! FILENAME: core/pivot-engine/src/cache.rs
//! Group Accumulators - The internal representation used while aggregating.
//!
//! Architecture:
//! - Each distinct group key is interned once and assigned a slot index
//! - Slots are kept in first-seen order, so a stable sort over them breaks
//!   ties by first appearance in the dataset
//! - Revenue is accumulated in integer cents

use engine::money::{from_cents, to_cents};
use engine::PurchaseRecord;
use rustc_hash::FxHashMap;
use std::hash::Hash;

// ============================================================================
// ACCUMULATOR
// ============================================================================

/// Running totals for one group of records.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AggregateAccumulator {
    /// Number of records.
    pub count: usize,
    /// Sum of `total`, in cents.
    pub revenue_cents: i64,
    /// Sum of `quantity`.
    pub quantity: u64,
}

impl AggregateAccumulator {
    pub fn new() -> Self {
        AggregateAccumulator::default()
    }

    pub fn add(&mut self, record: &PurchaseRecord) {
        self.count += 1;
        self.revenue_cents += to_cents(record.total);
        self.quantity += u64::from(record.quantity);
    }

    pub fn revenue(&self) -> f64 {
        from_cents(self.revenue_cents)
    }

    /// Mean line total; None when nothing was accumulated.
    pub fn mean(&self) -> Option<f64> {
        if self.count == 0 {
            None
        } else {
            Some(self.revenue() / self.count as f64)
        }
    }
}

// ============================================================================
// GROUPED AGGREGATES
// ============================================================================

/// Accumulators keyed by group, in first-seen key order.
#[derive(Debug, Clone)]
pub struct GroupedAggregates<K> {
    /// Map from key to its slot in `groups` (for deduplication during build).
    key_to_slot: FxHashMap<K, usize>,
    groups: Vec<(K, AggregateAccumulator)>,
}

impl<K: Eq + Hash + Clone> GroupedAggregates<K> {
    pub fn new() -> Self {
        GroupedAggregates {
            key_to_slot: FxHashMap::default(),
            groups: Vec::new(),
        }
    }

    /// Adds the record to the group for `key`, creating the group on first use.
    pub fn add(&mut self, key: K, record: &PurchaseRecord) {
        let slot = match self.key_to_slot.get(&key) {
            Some(&slot) => slot,
            None => {
                let slot = self.groups.len();
                self.key_to_slot.insert(key.clone(), slot);
                self.groups.push((key, AggregateAccumulator::new()));
                slot
            }
        };
        self.groups[slot].1.add(record);
    }

    /// Groups in first-seen order.
    pub fn into_groups(self) -> Vec<(K, AggregateAccumulator)> {
        self.groups
    }
}

impl<K: Eq + Hash + Clone> Default for GroupedAggregates<K> {
    fn default() -> Self {
        Self::new()
    }
}
