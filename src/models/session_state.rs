use serde::Serialize;
use std::fmt;

/// Observable states of the session tracker.
///
/// There is no `Ended` variant: ending a session hands back the completed
/// record and the tracker is already `Idle` again when the call returns.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, Default)]
pub enum SessionState {
    #[default]
    Idle,
    CheckedIn,
    Paused,
}

impl SessionState {
    pub fn as_str(&self) -> &'static str {
        match self {
            SessionState::Idle => "idle",
            SessionState::CheckedIn => "checked in",
            SessionState::Paused => "paused",
        }
    }

    pub fn is_idle(&self) -> bool {
        matches!(self, SessionState::Idle)
    }

    pub fn is_paused(&self) -> bool {
        matches!(self, SessionState::Paused)
    }

    /// True while a session is open, paused or not.
    pub fn is_active(&self) -> bool {
        !self.is_idle()
    }
}

impl fmt::Display for SessionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
