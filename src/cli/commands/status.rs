use crate::core::{Clock, TimeTracker};
use crate::errors::AppResult;
use crate::utils::formatting::bold;
use crate::utils::time::format_duration;

/// Print the session in progress and the controls it allows.
pub fn handle<C: Clock>(app: &TimeTracker<C>) -> AppResult<()> {
    let tracker = app.tracker();
    let panel = app.controls();

    println!("{} {}", bold("State:"), tracker.state());

    if let Some(at) = tracker.check_in_time() {
        println!("{} {}", bold("Checked in:"), at.format("%Y-%m-%d %H:%M:%S"));
    }
    if let Some(elapsed) = tracker.elapsed() {
        println!("{} {}", bold("Elapsed:"), format_duration(elapsed));
    }
    if tracker.state().is_active() {
        println!(
            "{} {}",
            bold("Paused for:"),
            format_duration(tracker.total_pause_duration())
        );
    }
    if let Some(at) = tracker.pause_start_time() {
        println!("{} {}", bold("Paused since:"), at.format("%H:%M:%S"));
    }
    if !app.pending().is_empty() {
        println!("{} {}", bold("Unsaved sessions:"), app.pending().len());
    }

    println!("{}", panel.render());
    println!("{}", panel.location_label);
    Ok(())
}
