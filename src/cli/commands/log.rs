use crate::core::log::LogLogic;
use crate::core::{Clock, TimeTracker};
use crate::errors::AppResult;
use crate::ui::messages::warning;

pub fn handle<C: Clock>(app: &TimeTracker<C>) -> AppResult<()> {
    match app.audit() {
        Some(pool) => LogLogic::print_log(pool),
        None => {
            warning("Internal log is not available in this run.");
            Ok(())
        }
    }
}
