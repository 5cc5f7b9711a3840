//! Fixed-interval scheduler for the visibility recompute.
//!
//! The frame loop polls `due(now)`; the ticker fires at most once per call
//! and skips missed beats instead of bursting.

pub const DEFAULT_INTERVAL_MS: f64 = 50.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ticker {
    interval_ms: f64,
    next_due: Option<f64>,
}

impl Ticker {
    /// A stopped ticker.
    pub fn new(interval_ms: f64) -> Self {
        Self {
            interval_ms: interval_ms.max(1.0),
            next_due: None,
        }
    }

    /// Start (or restart); the first beat is due immediately.
    pub fn start(&mut self, now: f64) {
        self.next_due = Some(now);
    }

    pub fn stop(&mut self) {
        self.next_due = None;
    }

    pub fn is_running(&self) -> bool {
        self.next_due.is_some()
    }

    pub fn interval_ms(&self) -> f64 {
        self.interval_ms
    }

    /// Whether a beat is due at `now`. Consumes the beat.
    pub fn due(&mut self, now: f64) -> bool {
        match self.next_due {
            Some(next) if now >= next => {
                let following = next + self.interval_ms;
                self.next_due = Some(if following <= now {
                    now + self.interval_ms
                } else {
                    following
                });
                true
            }
            _ => false,
        }
    }

    /// Milliseconds until the next beat, if running.
    pub fn until_due(&self, now: f64) -> Option<f64> {
        self.next_due.map(|next| (next - now).max(0.0))
    }
}

impl Default for Ticker {
    fn default() -> Self {
        Self::new(DEFAULT_INTERVAL_MS)
    }
}
