//! FILENAME: core/persistence/src/csv_io.rs
//! PURPOSE: CSV export of a (filtered) dataset and re-import of such files.
//! CONTEXT: Rows use the same column headers as the workbook. The header row is
//! always written, even when there are no records to export.

use crate::{PersistenceError, COLUMNS};
use engine::{Dataset, PurchaseRecord};
use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;

/// Serializes the dataset as UTF-8 CSV into `writer`.
pub fn write_csv<W: Write>(dataset: &Dataset, writer: W) -> Result<(), PersistenceError> {
    let mut wtr = csv::WriterBuilder::new().has_headers(false).from_writer(writer);
    wtr.write_record(COLUMNS)?;
    for record in dataset {
        wtr.serialize(record)?;
    }
    wtr.flush()?;
    Ok(())
}

/// CSV bytes for a download.
pub fn to_csv_bytes(dataset: &Dataset) -> Result<Vec<u8>, PersistenceError> {
    let mut buf = Vec::new();
    write_csv(dataset, &mut buf)?;
    Ok(buf)
}

/// Writes the dataset to a CSV file, replacing any existing file.
pub fn export_csv(dataset: &Dataset, path: &Path) -> Result<(), PersistenceError> {
    let file = File::create(path)?;
    write_csv(dataset, BufWriter::new(file))?;
    log::debug!("exported {} purchase rows to {}", dataset.len(), path.display());
    Ok(())
}

/// Parses CSV produced by `write_csv`. Columns are matched by header name.
pub fn read_csv<R: Read>(reader: R) -> Result<Dataset, PersistenceError> {
    let mut rdr = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(reader);

    let headers = rdr.headers()?.clone();
    for column in COLUMNS {
        if !headers.iter().any(|h| h == column) {
            return Err(PersistenceError::MissingColumn(column.to_string()));
        }
    }

    let records = rdr
        .deserialize::<PurchaseRecord>()
        .collect::<Result<Vec<_>, _>>()?;
    Ok(Dataset::new(records))
}

pub fn read_csv_file(path: &Path) -> Result<Dataset, PersistenceError> {
    if !path.exists() {
        return Err(PersistenceError::NotFound(path.to_path_buf()));
    }
    read_csv(BufReader::new(File::open(path)?))
}
