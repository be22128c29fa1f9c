//! FILENAME: app/src/report.rs
// PURPOSE: Plain-text rendering of a dashboard snapshot.

use std::fmt;

use engine::format_currency;
use pivot_engine::{GroupCount, GroupTotal};

use crate::dashboard::DashboardSnapshot;

/// Rows shown in the recent-purchases section.
pub const DETAIL_ROWS: usize = 10;

/// Renders the metric cards, every grouped breakdown and the most recent
/// purchases.
pub fn render_report(snapshot: &DashboardSnapshot) -> String {
    Report(snapshot).to_string()
}

/// Display adapter over a snapshot.
pub struct Report<'a>(pub &'a DashboardSnapshot);

impl fmt::Display for Report<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let snapshot = self.0;
        let metrics = &snapshot.metrics;
        let criteria = &snapshot.criteria;

        writeln!(f, "Supermarket purchases, {} to {}", criteria.start_date, criteria.end_date)?;
        writeln!(f)?;
        writeln!(f, "Total Purchases:   {}", metrics.purchase_count)?;
        writeln!(f, "Total Revenue:     {}", format_currency(metrics.total_revenue))?;
        writeln!(f, "Average Purchase:  {}", metrics.average_display())?;
        writeln!(f, "Products Sold:     {}", metrics.products_sold)?;

        if metrics.is_empty() {
            writeln!(f)?;
            return writeln!(f, "No purchases match the selected filters.");
        }

        write_totals(f, "Revenue by Category", &metrics.revenue_by_category)?;
        write_counts(f, "Payment Methods", &metrics.payment_method_counts)?;
        write_totals(f, "Revenue by Customer Type", &metrics.revenue_by_customer_type)?;
        write_totals(f, "Top Products", &metrics.top_products)?;
        write_totals(f, "Daily Revenue", &metrics.daily_revenue)?;

        writeln!(f)?;
        writeln!(f, "Recent Purchases")?;
        for record in snapshot.details().into_iter().take(DETAIL_ROWS) {
            writeln!(
                f,
                "  {}  {} {}  {:<20} {:<24} {:>3} x {:>8}  {:>10}  {}  {}",
                record.id,
                record.date,
                record.time,
                record.category,
                record.product,
                record.quantity,
                format_currency(record.unit_price),
                format_currency(record.total),
                record.payment_method,
                record.customer_type
            )?;
        }
        Ok(())
    }
}

fn write_totals<K: fmt::Display>(
    f: &mut fmt::Formatter<'_>,
    title: &str,
    groups: &[GroupTotal<K>],
) -> fmt::Result {
    writeln!(f)?;
    writeln!(f, "{}", title)?;
    for group in groups {
        writeln!(f, "  {:<28} {:>12}", group.key.to_string(), format_currency(group.revenue))?;
    }
    Ok(())
}

fn write_counts<K: fmt::Display>(
    f: &mut fmt::Formatter<'_>,
    title: &str,
    groups: &[GroupCount<K>],
) -> fmt::Result {
    writeln!(f)?;
    writeln!(f, "{}", title)?;
    for group in groups {
        writeln!(f, "  {:<28} {:>12}", group.key.to_string(), group.count)?;
    }
    Ok(())
}
