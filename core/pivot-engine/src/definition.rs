//! FILENAME: core/pivot-engine/src/definition.rs
//! Filter Definition - The serializable filter selection.
//!
//! A `FilterCriteria` is an immutable snapshot of what the user selected:
//! allowed categories, payment methods and customer types, plus an inclusive
//! date range. All four predicates are combined with AND.

use chrono::NaiveDate;
use engine::{Category, CustomerType, Dataset, PaymentMethod, PurchaseRecord};
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterCriteria {
    /// Allowed categories. Empty means no record passes.
    pub categories: FxHashSet<Category>,

    /// Allowed payment methods. Empty means no record passes.
    pub payment_methods: FxHashSet<PaymentMethod>,

    /// Allowed customer types. Empty means no record passes.
    pub customer_types: FxHashSet<CustomerType>,

    /// First day included.
    pub start_date: NaiveDate,

    /// Last day included.
    pub end_date: NaiveDate,
}

impl FilterCriteria {
    /// Criteria over the given date range that selects no attribute values
    /// yet, and therefore matches nothing until values are added.
    pub fn new(start_date: NaiveDate, end_date: NaiveDate) -> Self {
        FilterCriteria {
            categories: FxHashSet::default(),
            payment_methods: FxHashSet::default(),
            customer_types: FxHashSet::default(),
            start_date,
            end_date,
        }
    }

    /// Criteria that every possible record satisfies.
    pub fn everything() -> Self {
        FilterCriteria::new(NaiveDate::MIN, NaiveDate::MAX)
            .with_categories(Category::ALL.iter().copied())
            .with_payment_methods(PaymentMethod::ALL.iter().copied())
            .with_customer_types(CustomerType::ALL.iter().copied())
    }

    /// The default selection for a dataset: every value present in it and
    /// its full date range.
    pub fn all_from(dataset: &Dataset) -> Self {
        let (start, end) = dataset.date_bounds().unwrap_or((NaiveDate::MIN, NaiveDate::MAX));
        FilterCriteria::new(start, end)
            .with_categories(dataset.distinct_categories())
            .with_payment_methods(dataset.distinct_payment_methods())
            .with_customer_types(dataset.distinct_customer_types())
    }

    pub fn with_categories(mut self, categories: impl IntoIterator<Item = Category>) -> Self {
        self.categories = categories.into_iter().collect();
        self
    }

    pub fn with_payment_methods(mut self, methods: impl IntoIterator<Item = PaymentMethod>) -> Self {
        self.payment_methods = methods.into_iter().collect();
        self
    }

    pub fn with_customer_types(mut self, types: impl IntoIterator<Item = CustomerType>) -> Self {
        self.customer_types = types.into_iter().collect();
        self
    }

    pub fn with_date_range(mut self, start_date: NaiveDate, end_date: NaiveDate) -> Self {
        self.start_date = start_date;
        self.end_date = end_date;
        self
    }

    /// True when the record passes every predicate.
    pub fn matches(&self, record: &PurchaseRecord) -> bool {
        self.categories.contains(&record.category)
            && self.payment_methods.contains(&record.payment_method)
            && self.customer_types.contains(&record.customer_type)
            && record.date >= self.start_date
            && record.date <= self.end_date
    }

    /// True when no record can match, e.g. an empty set or an inverted range.
    pub fn excludes_everything(&self) -> bool {
        self.categories.is_empty()
            || self.payment_methods.is_empty()
            || self.customer_types.is_empty()
            || self.start_date > self.end_date
    }
}

impl Default for FilterCriteria {
    fn default() -> Self {
        FilterCriteria::everything()
    }
}
