//! Rotation clock.
//!
//! The carousel turns one full revolution every 30 seconds. The angle is a
//! pure function of `now - epoch` while running; pausing freezes it, and
//! resuming moves the epoch so the angle continues from where it stopped.

/// Duration of one revolution.
pub const REVOLUTION_MS: f64 = 30_000.0;

/// Angular speed in degrees per millisecond.
pub const DEGREES_PER_MS: f64 = 360.0 / REVOLUTION_MS;

/// Wrap an angle into `[0, 360)`.
#[inline]
pub fn normalize_degrees(angle: f64) -> f64 {
    let a = angle.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360 for tiny negative inputs
    if a >= 360.0 {
        0.0
    } else {
        a
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RotationClock {
    epoch: f64,
    paused: bool,
    angle: f64,
}

impl RotationClock {
    /// A running clock at angle 0.
    pub fn new(now: f64) -> Self {
        Self {
            epoch: now,
            paused: false,
            angle: 0.0,
        }
    }

    /// Angle at `now` without mutating the clock.
    pub fn angle_at(&self, now: f64) -> f64 {
        if self.paused {
            self.angle
        } else {
            normalize_degrees((now - self.epoch) * DEGREES_PER_MS)
        }
    }

    /// Recompute and store the angle for `now`.
    pub fn advance(&mut self, now: f64) -> f64 {
        self.angle = self.angle_at(now);
        self.angle
    }

    /// Freeze at the current angle. The epoch is left untouched.
    pub fn pause(&mut self, now: f64) {
        if !self.paused {
            self.angle = self.angle_at(now);
            self.paused = true;
        }
    }

    /// Continue from the frozen angle.
    pub fn resume(&mut self, now: f64) {
        if self.paused {
            self.epoch = now - self.angle / DEGREES_PER_MS;
            self.paused = false;
        }
    }

    /// Restart from the first panel's base position.
    pub fn reset(&mut self, now: f64) {
        self.epoch = now;
        self.angle = 0.0;
        self.paused = false;
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn epoch(&self) -> f64 {
        self.epoch
    }

    /// Last computed angle.
    pub fn angle(&self) -> f64 {
        self.angle
    }
}
