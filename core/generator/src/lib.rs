//! FILENAME: core/generator/src/lib.rs
//! PURPOSE: Produces the synthetic purchase dataset and writes it to disk.
//! CONTEXT: Every random draw goes through an explicitly passed `Rng`, so a
//! seeded generator reproduces the same dataset. The reference date ("today")
//! is also explicit; only `GeneratorConfig` falls back to the local clock.

use chrono::{Days, Local, NaiveDate};
use engine::{
    round_to_cents, Category, CustomerType, Dataset, DatasetSummary, PaymentMethod, PurchaseRecord,
};
use persistence::{save_dataset, PersistenceError};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::path::Path;

/// Number of records produced when no count is configured.
pub const DEFAULT_RECORD_COUNT: usize = 1000;

/// Purchases fall within this many days before the reference date (inclusive
/// of both ends).
pub const DATE_WINDOW_DAYS: u64 = 90;

/// First and last hour a purchase can be rung up.
pub const OPENING_HOUR: u32 = 8;
pub const CLOSING_HOUR: u32 = 21;

/// Largest quantity of one product in a single purchase.
pub const MAX_QUANTITY: u32 = 5;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorConfig {
    pub count: usize,
    /// Seed for a reproducible run; None draws from OS entropy.
    pub seed: Option<u64>,
    /// Last day of the date window; None uses the local date.
    pub today: Option<NaiveDate>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        GeneratorConfig {
            count: DEFAULT_RECORD_COUNT,
            seed: None,
            today: None,
        }
    }
}

impl GeneratorConfig {
    pub fn with_count(mut self, count: usize) -> Self {
        self.count = count;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_today(mut self, today: NaiveDate) -> Self {
        self.today = Some(today);
        self
    }

    pub fn reference_date(&self) -> NaiveDate {
        self.today.unwrap_or_else(|| Local::now().date_naive())
    }
}

// ============================================================================
// GENERATION
// ============================================================================

/// Generates `count` records whose dates fall in the window ending at `today`.
/// Ids run from `PUR00001` in generation order.
pub fn generate_records<R: Rng + ?Sized>(rng: &mut R, count: usize, today: NaiveDate) -> Dataset {
    let window_start = today - Days::new(DATE_WINDOW_DAYS);
    (1..=count)
        .map(|index| generate_record(rng, index, window_start))
        .collect()
}

/// Draws one record. `index` is the 1-based position used for the id.
pub fn generate_record<R: Rng + ?Sized>(rng: &mut R, index: usize, window_start: NaiveDate) -> PurchaseRecord {
    let category = pick(rng, Category::ALL);
    let product = pick(rng, category.products());

    let range = category.price_range();
    let unit_price = round_to_cents(rng.gen_range(range.min..=range.max));
    let quantity = rng.gen_range(1..=MAX_QUANTITY);

    let payment_method = pick(rng, PaymentMethod::ALL);
    let customer_type = pick(rng, CustomerType::ALL);

    let date = window_start + Days::new(rng.gen_range(0..=DATE_WINDOW_DAYS));
    let hour = rng.gen_range(OPENING_HOUR..=CLOSING_HOUR);
    let minute = rng.gen_range(0..60u32);

    PurchaseRecord {
        id: PurchaseRecord::purchase_id(index),
        date,
        time: format!("{:02}:{:02}", hour, minute),
        category,
        product: product.to_string(),
        unit_price,
        quantity,
        total: PurchaseRecord::line_total(unit_price, quantity),
        payment_method,
        customer_type,
    }
}

/// Uniform choice from a non-empty static list.
fn pick<T: Copy, R: Rng + ?Sized>(rng: &mut R, items: &[T]) -> T {
    items[rng.gen_range(0..items.len())]
}

/// Generates a dataset according to `config`.
pub fn generate(config: &GeneratorConfig) -> Dataset {
    let today = config.reference_date();
    match config.seed {
        Some(seed) => generate_records(&mut StdRng::seed_from_u64(seed), config.count, today),
        None => generate_records(&mut rand::thread_rng(), config.count, today),
    }
}

/// Generates a dataset and writes it to `path` as a single-sheet workbook.
/// Returns the summary of what was written.
pub fn generate_to_file(
    config: &GeneratorConfig,
    path: &Path,
    sheet_name: &str,
) -> Result<DatasetSummary, PersistenceError> {
    log::info!(
        "generating {} purchase records (seed={:?}) into {}",
        config.count,
        config.seed,
        path.display()
    );

    let dataset = generate(config);
    save_dataset(&dataset, path, sheet_name)?;

    let summary = dataset.summary();
    log::info!(
        "generated {} records, revenue {:.2}",
        summary.record_count,
        summary.total_revenue
    );
    Ok(summary)
}
