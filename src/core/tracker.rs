//! Session state machine: check-in → [pause/resume]* → check-out.

use crate::core::clock::{Clock, SystemClock};
use crate::errors::{AppError, AppResult};
use crate::models::{SessionRecord, SessionState};
use crate::utils::time::non_negative;
use chrono::{NaiveDateTime, TimeDelta};

/// Outcome of the pause/resume toggle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PauseToggle {
    Paused { at: NaiveDateTime },
    Resumed { at: NaiveDateTime, interval: TimeDelta },
}

/// Accumulates one session at a time.
///
/// Every operation either performs its transition or fails with
/// [`AppError::InvalidState`] leaving all fields untouched.
#[derive(Debug)]
pub struct SessionTracker<C: Clock = SystemClock> {
    clock: C,
    state: SessionState,
    check_in_time: Option<NaiveDateTime>,
    check_out_time: Option<NaiveDateTime>,
    pause_start_time: Option<NaiveDateTime>,
    total_pause_duration: TimeDelta,
}

impl SessionTracker<SystemClock> {
    pub fn new() -> Self {
        Self::with_clock(SystemClock)
    }
}

impl Default for SessionTracker<SystemClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Clock> SessionTracker<C> {
    pub fn with_clock(clock: C) -> Self {
        Self {
            clock,
            state: SessionState::Idle,
            check_in_time: None,
            check_out_time: None,
            pause_start_time: None,
            total_pause_duration: TimeDelta::zero(),
        }
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn check_in_time(&self) -> Option<NaiveDateTime> {
        self.check_in_time
    }

    pub fn check_out_time(&self) -> Option<NaiveDateTime> {
        self.check_out_time
    }

    pub fn pause_start_time(&self) -> Option<NaiveDateTime> {
        self.pause_start_time
    }

    /// Sum of the completed pause intervals; a pause still open is not counted.
    pub fn total_pause_duration(&self) -> TimeDelta {
        self.total_pause_duration
    }

    /// Wall-clock time since check-in, if a session is open.
    pub fn elapsed(&self) -> Option<TimeDelta> {
        self.check_in_time
            .map(|start| non_negative(self.clock.now() - start))
    }

    /// Start a session. Only valid from `Idle`.
    pub fn check_in(&mut self) -> AppResult<NaiveDateTime> {
        if self.state != SessionState::Idle {
            return Err(AppError::InvalidState(format!(
                "cannot check in while {}",
                self.state
            )));
        }

        let now = self.clock.now();
        self.check_in_time = Some(now);
        self.state = SessionState::CheckedIn;
        Ok(now)
    }

    /// Toggle between `CheckedIn` and `Paused`.
    pub fn pause(&mut self) -> AppResult<PauseToggle> {
        match self.state {
            SessionState::CheckedIn => {
                let now = self.clock.now();
                self.pause_start_time = Some(now);
                self.state = SessionState::Paused;
                Ok(PauseToggle::Paused { at: now })
            }
            SessionState::Paused => self.resume(),
            SessionState::Idle => Err(AppError::InvalidState(
                "cannot pause: no session is checked in".into(),
            )),
        }
    }

    /// Close the open pause interval. Only valid from `Paused`.
    pub fn resume(&mut self) -> AppResult<PauseToggle> {
        let started = match (self.state, self.pause_start_time) {
            (SessionState::Paused, Some(started)) => started,
            _ => {
                return Err(AppError::InvalidState(format!(
                    "cannot resume while {}",
                    self.state
                )));
            }
        };

        let now = self.clock.now();
        let interval = non_negative(now - started);
        self.total_pause_duration += interval;
        self.pause_start_time = None;
        self.state = SessionState::CheckedIn;
        Ok(PauseToggle::Resumed { at: now, interval })
    }

    /// Check out and hand back the completed record.
    ///
    /// Only valid from `CheckedIn`. On success the tracker is already back
    /// to `Idle` when this returns.
    pub fn end_session(&mut self) -> AppResult<SessionRecord> {
        let check_in = match (self.state, self.check_in_time) {
            (SessionState::CheckedIn, Some(check_in)) => check_in,
            (SessionState::Paused, _) => {
                return Err(AppError::InvalidState(
                    "resume before ending the session".into(),
                ));
            }
            _ => {
                return Err(AppError::InvalidState(
                    "cannot end: no session is checked in".into(),
                ));
            }
        };

        let now = self.clock.now();
        self.check_out_time = Some(now);
        let record = SessionRecord::from_interval(check_in, now, self.total_pause_duration);

        self.reset();
        Ok(record)
    }

    /// Back to `Idle` defaults, dropping any open session.
    pub fn reset(&mut self) {
        self.state = SessionState::Idle;
        self.check_in_time = None;
        self.check_out_time = None;
        self.pause_start_time = None;
        self.total_pause_duration = TimeDelta::zero();
    }
}
