//! Fixed-rate frame pacing for the terminal event loop.

use std::time::{Duration, Instant};

use netpulse_core::FrameScheduler;

/// Schedules the next frame one interval after it was requested.
///
/// Holds at most one pending request; the event loop waits for input until
/// [`FixedRateScheduler::time_until_due`] runs out, then takes the request.
#[derive(Debug)]
pub struct FixedRateScheduler {
    /// Time between frames.
    interval: Duration,
    /// When the pending frame becomes due, `None` when nothing is pending.
    due: Option<Instant>,
}

impl FixedRateScheduler {
    /// Create a scheduler with the first frame already due.
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            due: Some(Instant::now()),
        }
    }

    /// How long until the pending frame is due. `None` when idle.
    pub fn time_until_due(&self, now: Instant) -> Option<Duration> {
        self.due.map(|due| due.saturating_duration_since(now))
    }

    /// Consume the pending request if it is due at `now`.
    pub fn take_due(&mut self, now: Instant) -> bool {
        match self.due {
            Some(due) if due <= now => {
                self.due = None;
                true
            }
            _ => false,
        }
    }

    fn request_at(&mut self, now: Instant) {
        self.due = Some(now + self.interval);
    }
}

impl FrameScheduler for FixedRateScheduler {
    fn request_frame(&mut self) {
        self.request_at(Instant::now());
    }
}
