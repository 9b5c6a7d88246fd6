use std::time::{Duration, Instant};

/// A cancelable run-once timer, polled by its owner
///
/// The timer never calls back on its own; the owner asks it with
/// [`OneShot::fire`] whether it became due. Dropping the owner cancels it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OneShot {
    deadline: Option<Instant>,
}

impl OneShot {
    pub fn idle() -> Self {
        Self { deadline: None }
    }

    pub fn armed(now: Instant, delay: Duration) -> Self {
        let mut timer = Self::idle();
        timer.arm(now, delay);
        timer
    }

    /// Arm the timer to fire `delay` after `now`, replacing any earlier deadline
    pub fn arm(&mut self, now: Instant, delay: Duration) {
        // An unrepresentable deadline is treated as never firing
        self.deadline = now.checked_add(delay);
    }

    pub fn cancel(&mut self) {
        self.deadline = None;
    }

    pub fn is_armed(&self) -> bool {
        self.deadline.is_some()
    }

    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    /// Disarm and return the deadline if it has passed at `now`
    pub fn fire(&mut self, now: Instant) -> Option<Instant> {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                Some(deadline)
            }
            _ => None,
        }
    }
}

#[cfg(test)]
#[path = "timer_tests.rs"]
mod timer_tests;
