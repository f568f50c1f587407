use crate::options::DEFAULT_INTERVAL_MS;

/// A cancellable repeating deadline driven by the caller's clock.
///
/// There is at most one pending deadline. `reset` cancels and re-arms it in one step, so
/// repeated manual navigation never stacks timers.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AutoplayTimer {
    interval_ms: u64,
    armed_at_ms: Option<u64>,
    due_ms: Option<u64>,
}

impl Default for AutoplayTimer {
    fn default() -> Self {
        Self::new(DEFAULT_INTERVAL_MS)
    }
}

impl AutoplayTimer {
    pub fn new(interval_ms: u64) -> Self {
        Self {
            interval_ms: interval_ms.max(1),
            armed_at_ms: None,
            due_ms: None,
        }
    }

    pub fn interval_ms(&self) -> u64 {
        self.interval_ms
    }

    /// Changes the interval. A running timer is re-armed from `now_ms`.
    pub fn set_interval_ms(&mut self, interval_ms: u64, now_ms: u64) {
        self.interval_ms = interval_ms.max(1);
        if self.is_running() {
            self.start(now_ms);
        }
    }

    pub fn is_running(&self) -> bool {
        self.due_ms.is_some()
    }

    /// When the next tick fires, if running.
    pub fn due_ms(&self) -> Option<u64> {
        self.due_ms
    }

    /// Arms the timer so that the first tick fires one interval after `now_ms`.
    pub fn start(&mut self, now_ms: u64) {
        self.armed_at_ms = Some(now_ms);
        self.due_ms = Some(now_ms.saturating_add(self.interval_ms));
    }

    pub fn stop(&mut self) {
        self.armed_at_ms = None;
        self.due_ms = None;
    }

    /// Cancels any pending tick and re-arms from `now_ms`.
    pub fn reset(&mut self, now_ms: u64) {
        self.stop();
        self.start(now_ms);
    }

    /// Returns `true` if a tick is due at `now_ms`, and schedules the following one.
    ///
    /// The cadence is kept: the next deadline is the first multiple of the interval after
    /// `now_ms`, so several missed intervals coalesce into one tick. A tick whose successor
    /// would not fit in a `u64` stops the timer.
    pub fn poll(&mut self, now_ms: u64) -> bool {
        let Some(due) = self.due_ms else {
            return false;
        };
        if now_ms < due {
            return false;
        }
        let missed = (now_ms - due) / self.interval_ms;
        let next = due.saturating_add(self.interval_ms.saturating_mul(missed.saturating_add(1)));
        if next <= now_ms {
            // The clock is exhausted; there is no later deadline to arm.
            self.stop();
            return true;
        }
        self.armed_at_ms = Some(next.saturating_sub(self.interval_ms));
        self.due_ms = Some(next);
        true
    }

    /// Fraction of the current interval that has elapsed at `now_ms`, in `[0, 1]`.
    ///
    /// `0.0` when stopped.
    pub fn progress(&self, now_ms: u64) -> f32 {
        let Some(armed) = self.armed_at_ms else {
            return 0.0;
        };
        let elapsed = now_ms.saturating_sub(armed);
        (elapsed as f32 / self.interval_ms as f32).clamp(0.0, 1.0)
    }
}
