//! Unified application error type.
//! Tracker, log store, config and front end all return AppError so that
//! every failure reaches the user through the same notification path.

use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // Session state machine
    // ---------------------------
    #[error("Invalid state: {0}")]
    InvalidState(String),

    // ---------------------------
    // Log file
    // ---------------------------
    #[error("Cannot use log file {}: {reason}", .path.display())]
    Persistence { path: PathBuf, reason: String },

    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Audit database
    // ---------------------------
    #[error("Database error: {0}")]
    Db(#[from] rusqlite::Error),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),
}

impl AppError {
    pub fn persistence<R: ToString>(path: &Path, reason: R) -> Self {
        AppError::Persistence {
            path: path.to_path_buf(),
            reason: reason.to_string(),
        }
    }

    pub fn is_invalid_state(&self) -> bool {
        matches!(self, AppError::InvalidState(_))
    }

    pub fn is_persistence(&self) -> bool {
        matches!(self, AppError::Persistence { .. })
    }
}

pub type AppResult<T> = Result<T, AppError>;
