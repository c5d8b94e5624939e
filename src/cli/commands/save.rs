use crate::core::{Clock, TimeTracker};
use crate::errors::AppResult;
use crate::ui::messages::{info, notify};

/// Write the sessions that failed to persist earlier.
pub fn handle<C: Clock>(app: &mut TimeTracker<C>) -> AppResult<()> {
    match app.save_pending()? {
        None => info("Nothing to save."),
        Some(rows) => notify(
            "Saved",
            format!(
                "Unsaved sessions written to {} ({} rows).",
                app.store().target_path().display(),
                rows
            ),
        ),
    }
    Ok(())
}
