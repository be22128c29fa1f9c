//! FILENAME: core/pivot-engine/src/lib.rs
//! Filter/aggregate subsystem for the purchase dashboard.
//!
//! Takes a loaded `Dataset`, narrows it with a `FilterCriteria`, and reduces
//! the result to the headline metrics and grouped breakdowns the dashboard
//! displays.
//!
//! Layers:
//! - `definition`: Serializable filter configuration (what the user selected)
//! - `cache`: Group accumulators (HOW we sum and count)
//! - `view`: Metrics output for the presentation layer (WHAT we display)
//! - `engine`: Filtering and aggregation passes (HOW we calculate)

pub mod definition;
pub mod cache;
pub mod view;
pub mod engine;

pub use definition::*;
pub use cache::{AggregateAccumulator, GroupedAggregates};
pub use view::*;
pub use crate::engine::{aggregate, filter, TOP_PRODUCTS_LIMIT};
