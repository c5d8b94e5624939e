use crate::core::{Clock, TimeTracker};
use crate::ui::messages::{info, warning};

/// Leave the prompt, warning about anything that will not be logged.
pub fn handle<C: Clock>(app: &mut TimeTracker<C>) {
    if app.discard_session() {
        warning("The open session was discarded without being logged.");
    }
    if !app.pending().is_empty() {
        warning(format!(
            "{} unsaved session(s) are lost.",
            app.pending().len()
        ));
    }
    info("Bye.");
}
