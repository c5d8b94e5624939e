use crate::cli::commands::pause::report;
use crate::core::{Clock, TimeTracker};
use crate::errors::AppResult;

pub fn handle<C: Clock>(app: &mut TimeTracker<C>) -> AppResult<()> {
    let toggle = app.resume()?;
    report(&toggle);
    Ok(())
}
