//! Path utilities: expand ~, apply the default log extension.

use std::path::{Path, PathBuf};

/// Extension given to a save location typed without one.
pub const DEFAULT_EXTENSION: &str = "xlsx";

pub fn expand_tilde(path: &str) -> PathBuf {
    if path.starts_with("~/")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(path.trim_start_matches("~/"));
    }
    PathBuf::from(path)
}

/// Resolve a user supplied save location: expand `~` and add `.xlsx`
/// when the file name has no extension.
pub fn resolve_save_location(raw: &str) -> PathBuf {
    let mut path = expand_tilde(raw.trim());
    if path.extension().is_none() {
        path.set_extension(DEFAULT_EXTENSION);
    }
    path
}

/// Lower-cased extension of `path`, if any.
pub fn extension_of(path: &Path) -> Option<String> {
    path.extension()
        .map(|e| e.to_string_lossy().to_ascii_lowercase())
}
