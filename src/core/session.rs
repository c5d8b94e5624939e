//! Front-end facing controller: one tracker, one log store, one audit log.

use crate::core::clock::{Clock, SystemClock};
use crate::core::tracker::{PauseToggle, SessionTracker};
use crate::db::log::ttlog;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::logstore::LogStore;
use crate::models::{SessionRecord, SessionState};
use crate::ui::controls::ControlPanel;
use crate::ui::messages::warning;
use crate::utils::path::resolve_save_location;
use crate::utils::time::{format_duration, format_hours};
use chrono::NaiveDateTime;
use std::path::{Path, PathBuf};

/// Result of a successful check-out.
#[derive(Debug, Clone, PartialEq)]
pub struct EndOutcome {
    pub record: SessionRecord,
    /// Rows in the log after the append.
    pub rows: usize,
    pub path: PathBuf,
}

pub struct TimeTracker<C: Clock = SystemClock> {
    tracker: SessionTracker<C>,
    store: LogStore,
    audit: Option<DbPool>,
    pending: Vec<SessionRecord>,
}

impl TimeTracker<SystemClock> {
    pub fn new(store: LogStore) -> Self {
        Self::with_tracker(SessionTracker::new(), store)
    }
}

impl<C: Clock> TimeTracker<C> {
    pub fn with_tracker(tracker: SessionTracker<C>, store: LogStore) -> Self {
        Self {
            tracker,
            store,
            audit: None,
            pending: Vec::new(),
        }
    }

    /// Record every operation in `pool`.
    pub fn with_audit(mut self, pool: DbPool) -> Self {
        self.audit = Some(pool);
        self
    }

    pub fn state(&self) -> SessionState {
        self.tracker.state()
    }

    pub fn tracker(&self) -> &SessionTracker<C> {
        &self.tracker
    }

    pub fn store(&self) -> &LogStore {
        &self.store
    }

    pub fn audit(&self) -> Option<&DbPool> {
        self.audit.as_ref()
    }

    /// Completed sessions that could not be written yet, oldest first.
    pub fn pending(&self) -> &[SessionRecord] {
        &self.pending
    }

    pub fn controls(&self) -> ControlPanel {
        ControlPanel::for_state(self.tracker.state(), self.store.target_path())
    }

    pub fn check_in(&mut self) -> AppResult<NaiveDateTime> {
        let at = self.tracker.check_in()?;
        self.audit_line("check_in", "", &format!("Checked in at {}", at.format("%F %T")));
        Ok(at)
    }

    /// Pause the running session, or resume the paused one.
    pub fn pause(&mut self) -> AppResult<PauseToggle> {
        let toggle = self.tracker.pause()?;
        self.audit_toggle(&toggle);
        Ok(toggle)
    }

    /// Resume the paused session. Refused in any other state.
    pub fn resume(&mut self) -> AppResult<PauseToggle> {
        let toggle = self.tracker.resume()?;
        self.audit_toggle(&toggle);
        Ok(toggle)
    }

    fn audit_toggle(&self, toggle: &PauseToggle) {
        match toggle {
            PauseToggle::Paused { at } => {
                self.audit_line("pause", "", &format!("Paused at {}", at.format("%T")));
            }
            PauseToggle::Resumed { at, interval } => {
                let message = format!(
                    "Resumed at {} after {}",
                    at.format("%T"),
                    format_duration(*interval)
                );
                self.audit_line("resume", "", &message);
            }
        }
    }

    /// Check out and append the session to the log.
    ///
    /// The tracker is back to `Idle` whatever happens to the file. When the
    /// write fails the record stays queued and [`Self::save_pending`] can
    /// retry it; queued records are always written before newer ones.
    pub fn end_session(&mut self) -> AppResult<EndOutcome> {
        let record = self.tracker.end_session()?;
        self.pending.push(record.clone());

        let rows = self.flush_pending()?;
        Ok(EndOutcome {
            record,
            rows,
            path: self.store.target_path().to_path_buf(),
        })
    }

    /// Retry writing queued records to the current target.
    ///
    /// `Ok(None)` when nothing was queued, otherwise the row count after
    /// the last write.
    pub fn save_pending(&mut self) -> AppResult<Option<usize>> {
        if self.pending.is_empty() {
            return Ok(None);
        }
        let queued = self.pending.len();
        let rows = self.flush_pending()?;

        let target = self.store.target_path().display().to_string();
        self.audit_line(
            "save_pending",
            &target,
            &format!("{} queued record(s) saved", queued),
        );
        Ok(Some(rows))
    }

    /// Redirect future appends. An empty or absent path (cancelled
    /// selection) changes nothing and yields `None`.
    pub fn set_save_location(&mut self, raw: Option<&str>) -> Option<&Path> {
        let raw = raw.map(str::trim).filter(|s| !s.is_empty())?;

        let path = resolve_save_location(raw);
        self.store.set_target_path(path);

        let target = self.store.target_path().display().to_string();
        self.audit_line("save_location", &target, "Save location changed");
        Some(self.store.target_path())
    }

    /// Drop an open session without logging it.
    pub fn discard_session(&mut self) -> bool {
        let active = self.tracker.state().is_active();
        if active {
            self.tracker.reset();
            self.audit_line("discard", "", "Open session discarded");
        }
        active
    }

    fn flush_pending(&mut self) -> AppResult<usize> {
        let mut rows = 0;
        let target = self.store.target_path().display().to_string();

        while let Some(record) = self.pending.first().cloned() {
            match self.store.append(&record) {
                Ok(n) => {
                    rows = n;
                    self.pending.remove(0);
                    self.audit_line(
                        "end",
                        &target,
                        &format!(
                            "Session {} {}-{} logged: {} h worked",
                            record.date,
                            record.check_in.format("%T"),
                            record.check_out.format("%T"),
                            format_hours(record.working_hours)
                        ),
                    );
                }
                Err(e) => {
                    self.audit_line(
                        "save_failed",
                        &target,
                        &format!("{} record(s) kept for re-save: {}", self.pending.len(), e),
                    );
                    return Err(e);
                }
            }
        }

        Ok(rows)
    }

    fn audit_line(&self, operation: &str, target: &str, message: &str) {
        if let Some(pool) = &self.audit
            && let Err(e) = ttlog(&pool.conn, operation, target, message)
        {
            warning(format!("Failed to write internal log: {}", e));
        }
    }
}
