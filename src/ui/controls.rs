//! Which controls the front end offers, derived from the tracker state.
//!
//! Recomputed after every transition instead of toggled by hand.

use crate::models::SessionState;
use crate::utils::formatting::control;
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ControlPanel {
    pub check_in_enabled: bool,
    pub pause_enabled: bool,
    /// "Pause" while checked in, "Resume" while paused.
    pub pause_label: &'static str,
    pub end_enabled: bool,
    pub set_location_enabled: bool,
    pub location_label: String,
}

impl ControlPanel {
    pub fn for_state(state: SessionState, save_path: &Path) -> Self {
        Self {
            check_in_enabled: state == SessionState::Idle,
            pause_enabled: state.is_active(),
            pause_label: if state.is_paused() { "Resume" } else { "Pause" },
            end_enabled: state == SessionState::CheckedIn,
            set_location_enabled: true,
            location_label: format!("Save Location: {}", save_path.display()),
        }
    }

    /// One line with every control, enabled ones highlighted.
    pub fn render(&self) -> String {
        [
            control("Check In", self.check_in_enabled),
            control(self.pause_label, self.pause_enabled),
            control("End", self.end_enabled),
            control("Set Save Location", self.set_location_enabled),
        ]
        .join(" ")
    }
}
