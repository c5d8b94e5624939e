use crate::core::{Clock, TimeTracker};
use crate::errors::AppResult;
use crate::models::COLUMNS;
use crate::ui::messages::{error, notify, warning};
use crate::utils::table::Table;

/// Check out, append to the log and print the logged row.
pub fn handle<C: Clock>(app: &mut TimeTracker<C>) -> AppResult<()> {
    match app.end_session() {
        Ok(outcome) => {
            notify(
                "Session Ended",
                format!("Session logged and saved to {}.", outcome.path.display()),
            );

            let mut table = Table::with_headers(&COLUMNS);
            table.add_row(outcome.record.to_row());
            println!("\n{}", table.render());
            Ok(())
        }
        Err(e) if e.is_persistence() => {
            // the session is closed either way; the record waits in the queue
            error(&e);
            warning(format!(
                "{} unsaved session(s) kept in memory. \
                 Fix the problem or choose another location, then type 'save'.",
                app.pending().len()
            ));
            Ok(())
        }
        Err(e) => Err(e),
    }
}
