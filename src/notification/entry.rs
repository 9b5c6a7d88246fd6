//! Per-toast presentation state
//!
//! Each mounted toast walks `Entering -> Visible -> Leaving` and then asks the
//! store to drop it. The entry owns every timer driving that sequence, so
//! unmounting the entry (dropping it) cancels them.

use std::time::{Duration, Instant};

use super::timer::OneShot;
use super::toast::{Toast, ToastId};

/// Exit animation hold before a leaving toast requests removal
pub const DEFAULT_EXIT_HOLD: Duration = Duration::from_millis(300);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Mounted but not drawn yet
    Entering,
    Visible,
    /// Playing the exit animation; removal follows after the exit hold
    Leaving,
}

#[derive(Debug)]
pub struct ToastEntry {
    toast: Toast,
    phase: Phase,
    enter: OneShot,
    expiry: OneShot,
    exit: OneShot,
    exit_hold: Duration,
}

impl ToastEntry {
    /// Mount the view for `toast` at `now`, arming its enter and expiry timers
    pub fn mount(toast: Toast, now: Instant, exit_hold: Duration) -> Self {
        let expiry = match toast.effective_duration() {
            Some(ttl) => OneShot::armed(now, ttl),
            None => OneShot::idle(),
        };

        log::debug!(
            "Mounted {} ({})",
            toast.id,
            if expiry.is_armed() {
                "auto-expiring"
            } else {
                "stays until dismissed"
            }
        );

        Self {
            toast,
            phase: Phase::Entering,
            enter: OneShot::armed(now, Duration::ZERO),
            expiry,
            exit: OneShot::idle(),
            exit_hold,
        }
    }

    pub fn id(&self) -> ToastId {
        self.toast.id
    }

    pub fn toast(&self) -> &Toast {
        &self.toast
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_leaving(&self) -> bool {
        self.phase == Phase::Leaving
    }

    /// User dismissal. Returns false if the entry is already leaving.
    pub fn dismiss(&mut self, now: Instant) -> bool {
        if self.is_leaving() {
            return false;
        }
        self.begin_leaving(now);
        true
    }

    /// Advance timers to `now`
    ///
    /// Returns true exactly once, when the exit hold has elapsed and the
    /// toast should be removed from the store.
    pub fn poll(&mut self, now: Instant) -> bool {
        if self.enter.fire(now).is_some() && self.phase == Phase::Entering {
            self.phase = Phase::Visible;
        }

        // Leaving starts at the expiry deadline, not at the poll time
        if let Some(deadline) = self.expiry.fire(now) {
            log::debug!("{} expired", self.toast.id);
            self.begin_leaving(deadline);
        }

        self.exit.fire(now).is_some()
    }

    /// Earliest pending timer deadline, if any
    pub fn next_deadline(&self) -> Option<Instant> {
        [self.enter, self.expiry, self.exit]
            .iter()
            .filter_map(OneShot::deadline)
            .min()
    }

    pub fn has_pending_timers(&self) -> bool {
        self.enter.is_armed() || self.expiry.is_armed() || self.exit.is_armed()
    }

    fn begin_leaving(&mut self, at: Instant) {
        self.enter.cancel();
        self.expiry.cancel();
        self.exit.arm(at, self.exit_hold);
        self.phase = Phase::Leaving;
        log::debug!("{} leaving", self.toast.id);
    }
}

impl Drop for ToastEntry {
    fn drop(&mut self) {
        if self.has_pending_timers() {
            log::debug!("Unmounted {} with pending timers cancelled", self.toast.id);
        }
    }
}

#[cfg(test)]
#[path = "entry_tests.rs"]
mod entry_tests;
