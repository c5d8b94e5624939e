// src/logstore/csv.rs

use crate::errors::{AppError, AppResult};
use crate::models::{COLUMNS, SessionRecord};
use std::path::Path;

/// Read every session row from the CSV log at `path`.
pub(crate) fn read_csv(path: &Path) -> AppResult<Vec<SessionRecord>> {
    let mut rdr = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_path(path)
        .map_err(|e| AppError::persistence(path, e))?;

    let headers = rdr
        .headers()
        .map_err(|e| AppError::persistence(path, e))?
        .clone();

    // zero-byte file: nothing logged yet
    if headers.is_empty() {
        return Ok(Vec::new());
    }

    if !headers.iter().eq(COLUMNS.iter().copied()) {
        return Err(AppError::persistence(
            path,
            format!(
                "unexpected columns [{}], expected [{}]",
                headers.iter().collect::<Vec<_>>().join(", "),
                COLUMNS.join(", ")
            ),
        ));
    }

    let mut records = Vec::new();
    for item in rdr.deserialize::<SessionRecord>() {
        records.push(item.map_err(|e| AppError::persistence(path, e))?);
    }

    Ok(records)
}

/// Write the full table to `path`, header included even when empty.
pub(crate) fn write_csv(path: &Path, records: &[SessionRecord]) -> AppResult<()> {
    let mut wtr = csv::WriterBuilder::new()
        .has_headers(false)
        .from_path(path)
        .map_err(|e| AppError::persistence(path, e))?;

    wtr.write_record(COLUMNS)
        .map_err(|e| AppError::persistence(path, e))?;

    for record in records {
        wtr.serialize(record)
            .map_err(|e| AppError::persistence(path, e))?;
    }

    wtr.flush().map_err(|e| AppError::persistence(path, e))?;
    Ok(())
}
