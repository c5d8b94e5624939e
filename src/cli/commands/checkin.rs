use crate::core::{Clock, TimeTracker};
use crate::errors::AppResult;
use crate::ui::messages::notify;

/// Start a session.
pub fn handle<C: Clock>(app: &mut TimeTracker<C>) -> AppResult<()> {
    let at = app.check_in()?;
    notify("Checked In", format!("Checked in at {}", at.format("%H:%M:%S")));
    Ok(())
}
