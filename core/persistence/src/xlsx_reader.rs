// FILENAME: core\persistence\src\xlsx_reader.rs

use crate::{
    PersistenceError, COLUMNS, COL_CATEGORY, COL_CUSTOMER_TYPE, COL_DATE, COL_PAYMENT_METHOD,
    COL_PRODUCT, COL_PURCHASE_ID, COL_QUANTITY, COL_TIME, COL_TOTAL, COL_UNIT_PRICE, DATE_FORMAT,
};
use calamine::{open_workbook, Data, Reader, Xlsx};
use chrono::{Duration, NaiveDate, NaiveDateTime};
use engine::{round_to_cents, Dataset, PurchaseRecord};
use std::collections::HashMap;
use std::path::Path;
use std::str::FromStr;

/// Loads the purchase dataset from a workbook.
///
/// `sheet_name` selects the sheet; `None` reads the first one. Columns are
/// located by their header text, so their order in the sheet does not matter.
/// Fully blank rows are skipped.
pub fn load_dataset(path: &Path, sheet_name: Option<&str>) -> Result<Dataset, PersistenceError> {
    if !path.exists() {
        return Err(PersistenceError::NotFound(path.to_path_buf()));
    }

    let mut workbook: Xlsx<_> = open_workbook(path)?;
    let sheet_names = workbook.sheet_names().to_vec();

    let sheet = match sheet_name {
        Some(name) => sheet_names
            .iter()
            .find(|s| s.as_str() == name)
            .cloned()
            .ok_or_else(|| PersistenceError::SheetNotFound(name.to_string()))?,
        None => sheet_names.first().cloned().ok_or_else(|| {
            PersistenceError::InvalidFormat("Workbook contains no sheets".to_string())
        })?,
    };

    let range = workbook
        .worksheet_range(&sheet)
        .map_err(|e| PersistenceError::InvalidFormat(e.to_string()))?;

    let mut rows = range.rows();
    let header = rows
        .next()
        .ok_or_else(|| PersistenceError::InvalidFormat(format!("Sheet '{}' is empty", sheet)))?;
    let layout = ColumnLayout::from_header(header)?;

    let mut records = Vec::with_capacity(range.height().saturating_sub(1));
    for (i, row) in rows.enumerate() {
        if row.iter().all(|cell| matches!(cell, Data::Empty)) {
            continue;
        }
        // Row numbers are 1-based and count the header, like the sheet itself.
        records.push(layout.parse_record(row, i + 2)?);
    }

    log::debug!("loaded {} purchase rows from {} [{}]", records.len(), path.display(), sheet);
    Ok(Dataset::new(records))
}

// ============================================================================
// COLUMN LAYOUT
// ============================================================================

/// Position of every required column within a sheet row.
struct ColumnLayout {
    positions: HashMap<&'static str, usize>,
}

impl ColumnLayout {
    fn from_header(header: &[Data]) -> Result<Self, PersistenceError> {
        let mut positions = HashMap::new();

        for (idx, cell) in header.iter().enumerate() {
            if let Data::String(name) = cell {
                if let Some(column) = COLUMNS.iter().find(|c| **c == name.trim()) {
                    positions.entry(*column).or_insert(idx);
                }
            }
        }

        for column in COLUMNS {
            if !positions.contains_key(column) {
                return Err(PersistenceError::MissingColumn(column.to_string()));
            }
        }

        Ok(ColumnLayout { positions })
    }

    fn cell<'a>(&self, row: &'a [Data], column: &'static str) -> &'a Data {
        self.positions
            .get(column)
            .and_then(|idx| row.get(*idx))
            .unwrap_or(&Data::Empty)
    }

    fn parse_record(&self, row: &[Data], row_number: usize) -> Result<PurchaseRecord, PersistenceError> {
        let invalid = |column: &'static str, message: String| PersistenceError::InvalidValue {
            row: row_number,
            column,
            message,
        };

        let text = |column: &'static str| -> Result<String, PersistenceError> {
            cell_text(self.cell(row, column)).ok_or_else(|| invalid(column, "expected text".to_string()))
        };
        let number = |column: &'static str| -> Result<f64, PersistenceError> {
            cell_number(self.cell(row, column)).ok_or_else(|| invalid(column, "expected a number".to_string()))
        };

        let date = cell_date(self.cell(row, COL_DATE))
            .ok_or_else(|| invalid(COL_DATE, format!("expected a {} date", DATE_FORMAT)))?;
        let time = cell_time(self.cell(row, COL_TIME))
            .ok_or_else(|| invalid(COL_TIME, "expected HH:MM".to_string()))?;

        let quantity = number(COL_QUANTITY)?;
        if quantity < 0.0 || quantity.fract() != 0.0 || quantity > u32::MAX as f64 {
            return Err(invalid(COL_QUANTITY, format!("{} is not a whole quantity", quantity)));
        }

        Ok(PurchaseRecord {
            id: text(COL_PURCHASE_ID)?,
            date,
            time,
            category: parse_label(&text(COL_CATEGORY)?).map_err(|e| invalid(COL_CATEGORY, e))?,
            product: text(COL_PRODUCT)?,
            unit_price: round_to_cents(number(COL_UNIT_PRICE)?),
            quantity: quantity as u32,
            total: round_to_cents(number(COL_TOTAL)?),
            payment_method: parse_label(&text(COL_PAYMENT_METHOD)?)
                .map_err(|e| invalid(COL_PAYMENT_METHOD, e))?,
            customer_type: parse_label(&text(COL_CUSTOMER_TYPE)?)
                .map_err(|e| invalid(COL_CUSTOMER_TYPE, e))?,
        })
    }
}

fn parse_label<T>(value: &str) -> Result<T, String>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    value.parse::<T>().map_err(|e| e.to_string())
}

// ============================================================================
// CELL CONVERSION
// ============================================================================

/// Day zero of the Excel 1900 date system (serial 0, accounting for the
/// phantom 1900-02-29).
fn excel_epoch() -> NaiveDate {
    NaiveDate::from_ymd_opt(1899, 12, 30).unwrap_or_default()
}

fn cell_text(cell: &Data) -> Option<String> {
    match cell {
        Data::String(s) | Data::DateTimeIso(s) => {
            let trimmed = s.trim();
            (!trimmed.is_empty()).then(|| trimmed.to_string())
        }
        Data::Int(i) => Some(i.to_string()),
        Data::Float(f) => Some(f.to_string()),
        _ => None,
    }
}

fn cell_number(cell: &Data) -> Option<f64> {
    match cell {
        Data::Float(f) => Some(*f),
        Data::Int(i) => Some(*i as f64),
        Data::String(s) => s.trim().parse().ok(),
        _ => None,
    }
    .filter(|n: &f64| n.is_finite())
}

fn cell_date(cell: &Data) -> Option<NaiveDate> {
    match cell {
        Data::String(s) | Data::DateTimeIso(s) => parse_date_text(s.trim()),
        Data::DateTime(dt) => serial_to_date(dt.as_f64()),
        Data::Float(f) => serial_to_date(*f),
        Data::Int(i) => serial_to_date(*i as f64),
        _ => None,
    }
}

/// Accepts a plain ISO date or an ISO date-time whose time part is dropped.
fn parse_date_text(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s, DATE_FORMAT)
        .ok()
        .or_else(|| NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S").ok().map(|dt| dt.date()))
        .or_else(|| NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S").ok().map(|dt| dt.date()))
}

/// Serial of 9999-12-31, the last date Excel can represent.
const EXCEL_MAX_SERIAL: f64 = 2_958_465.0;

fn serial_to_date(serial: f64) -> Option<NaiveDate> {
    if !(1.0..EXCEL_MAX_SERIAL + 1.0).contains(&serial) {
        return None;
    }
    let days = Duration::try_days(serial.floor() as i64)?;
    excel_epoch().checked_add_signed(days)
}

fn cell_time(cell: &Data) -> Option<String> {
    match cell {
        Data::String(s) => {
            let (h, m) = s.trim().split_once(':')?;
            let hour: u32 = h.parse().ok()?;
            let minute: u32 = m.get(..2).unwrap_or(m).parse().ok()?;
            (hour < 24 && minute < 60).then(|| format!("{:02}:{:02}", hour, minute))
        }
        // Excel stores times as a fraction of a day.
        Data::DateTime(dt) => fraction_to_time(dt.as_f64()),
        Data::Float(f) => fraction_to_time(*f),
        _ => None,
    }
}

fn fraction_to_time(value: f64) -> Option<String> {
    if !value.is_finite() {
        return None;
    }
    let minutes = (value.fract() * 1440.0).round() as u32 % 1440;
    Some(format!("{:02}:{:02}", minutes / 60, minutes % 60))
}
