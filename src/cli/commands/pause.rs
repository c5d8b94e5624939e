use crate::core::{Clock, PauseToggle, TimeTracker};
use crate::errors::AppResult;
use crate::ui::messages::notify;
use crate::utils::time::format_duration;

/// Pause or resume, depending on the current state.
pub fn handle<C: Clock>(app: &mut TimeTracker<C>) -> AppResult<()> {
    let toggle = app.pause()?;
    report(&toggle);
    Ok(())
}

pub(crate) fn report(toggle: &PauseToggle) {
    match toggle {
        PauseToggle::Paused { .. } => notify("Paused", "Session paused."),
        PauseToggle::Resumed { interval, .. } => notify(
            "Resumed",
            format!("Session resumed after {}.", format_duration(*interval)),
        ),
    }
}
