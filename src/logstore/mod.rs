// src/logstore/mod.rs

mod csv;
mod excel_date;
mod xlsx;

use crate::errors::{AppError, AppResult};
use crate::models::SessionRecord;
use crate::utils::path::extension_of;
use std::path::{Path, PathBuf};

/// Default target, relative to the working directory.
pub const DEFAULT_LOG_FILE: &str = "time_log.xlsx";

/// On-disk layout of the log, chosen from the target's extension.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LogFormat {
    Xlsx,
    Csv,
}

impl LogFormat {
    /// `.xlsx` or no extension → spreadsheet, `.csv` → CSV.
    pub fn from_path(path: &Path) -> AppResult<Self> {
        match extension_of(path).as_deref() {
            None | Some("xlsx") => Ok(LogFormat::Xlsx),
            Some("csv") => Ok(LogFormat::Csv),
            Some(other) => Err(AppError::persistence(
                path,
                format!("unsupported log format '.{other}' (use .xlsx or .csv)"),
            )),
        }
    }
}

/// Append-only table of completed sessions at a user settable path.
#[derive(Debug, Clone)]
pub struct LogStore {
    target: PathBuf,
}

impl Default for LogStore {
    fn default() -> Self {
        Self::new(DEFAULT_LOG_FILE)
    }
}

impl LogStore {
    pub fn new<P: Into<PathBuf>>(target: P) -> Self {
        Self {
            target: target.into(),
        }
    }

    pub fn target_path(&self) -> &Path {
        &self.target
    }

    /// Point the store at another file. The file itself is not touched.
    pub fn set_target_path<P: Into<PathBuf>>(&mut self, target: P) {
        self.target = target.into();
    }

    /// All rows currently stored; a missing file has none.
    pub fn read_rows(&self) -> AppResult<Vec<SessionRecord>> {
        let format = LogFormat::from_path(&self.target)?;

        if !self.target.exists() {
            return Ok(Vec::new());
        }

        match format {
            LogFormat::Xlsx => xlsx::read_xlsx(&self.target),
            LogFormat::Csv => csv::read_csv(&self.target),
        }
    }

    /// Append `record` as the last row and rewrite the whole file.
    ///
    /// Returns the number of rows now in the table.
    pub fn append(&self, record: &SessionRecord) -> AppResult<usize> {
        let format = LogFormat::from_path(&self.target)?;

        let mut rows = self.read_rows()?;
        rows.push(record.clone());

        match format {
            LogFormat::Xlsx => xlsx::write_xlsx(&self.target, &rows)?,
            LogFormat::Csv => csv::write_csv(&self.target, &rows)?,
        }

        Ok(rows.len())
    }
}
