//! FILENAME: core/persistence/src/xlsx_writer.rs

use crate::{PersistenceError, COLUMNS, DATE_FORMAT};
use engine::Dataset;
use rust_xlsxwriter::{Format, Workbook as XlsxWorkbook};
use std::path::Path;

/// Column widths in Excel character units, matching `COLUMNS`.
const COLUMN_WIDTHS: [f64; 10] = [12.0, 11.0, 7.0, 20.0, 16.0, 10.0, 9.0, 10.0, 16.0, 14.0];

/// Writes the dataset as a single sheet: one header row followed by one row
/// per record, in dataset order. Dates are written as ISO text.
pub fn save_dataset(dataset: &Dataset, path: &Path, sheet_name: &str) -> Result<(), PersistenceError> {
    let mut xlsx = XlsxWorkbook::new();
    let worksheet = xlsx.add_worksheet();
    worksheet.set_name(sheet_name)?;

    let header_format = Format::new().set_bold();
    let money_format = Format::new().set_num_format("0.00");

    for (col, (name, width)) in COLUMNS.iter().zip(COLUMN_WIDTHS).enumerate() {
        worksheet.write_string_with_format(0, col as u16, *name, &header_format)?;
        worksheet.set_column_width(col as u16, width)?;
    }

    for (i, record) in dataset.iter().enumerate() {
        let row = (i + 1) as u32;
        worksheet.write_string(row, 0, record.id.as_str())?;
        worksheet.write_string(row, 1, record.date.format(DATE_FORMAT).to_string())?;
        worksheet.write_string(row, 2, record.time.as_str())?;
        worksheet.write_string(row, 3, record.category.label())?;
        worksheet.write_string(row, 4, record.product.as_str())?;
        worksheet.write_number_with_format(row, 5, record.unit_price, &money_format)?;
        worksheet.write_number(row, 6, record.quantity)?;
        worksheet.write_number_with_format(row, 7, record.total, &money_format)?;
        worksheet.write_string(row, 8, record.payment_method.label())?;
        worksheet.write_string(row, 9, record.customer_type.label())?;
    }

    xlsx.save(path)?;
    log::debug!("saved {} purchase rows to {}", dataset.len(), path.display());
    Ok(())
}
