//! Timer types
//!
//! Two kinds of timers coexist and are kept apart on purpose:
//! - [`FrameCountdown`] counts simulation ticks, so its real duration
//!   depends on the frame rate (the boss cutscene).
//! - [`Deadline`] compares against the host's monotonic clock, so it lasts
//!   the same wall time at any frame rate (HUD messages).

use serde::{Deserialize, Serialize};

/// Countdown decremented once per tick while running
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrameCountdown {
    remaining: u32,
    running: bool,
}

impl FrameCountdown {
    /// Armed with `frames` but not yet counting
    pub fn new(frames: u32) -> Self {
        Self {
            remaining: frames,
            running: false,
        }
    }

    /// Begin counting (no-op once started or finished)
    pub fn start(&mut self) {
        if self.remaining > 0 {
            self.running = true;
        }
    }

    /// Advance one frame; stops by itself on reaching zero
    pub fn tick(&mut self) {
        if self.running {
            self.remaining = self.remaining.saturating_sub(1);
            if self.remaining == 0 {
                self.running = false;
            }
        }
    }

    pub fn remaining(&self) -> u32 {
        self.remaining
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// True once the countdown has reached zero
    pub fn is_finished(&self) -> bool {
        self.remaining == 0
    }
}

/// Wall-clock expiry time, in host clock seconds
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Deadline {
    at: Option<f64>,
}

impl Deadline {
    /// Arm to expire `duration` seconds after `now` (re-arming replaces)
    pub fn arm(&mut self, now: f64, duration: f64) {
        self.at = Some(now + duration);
    }

    pub fn clear(&mut self) {
        self.at = None;
    }

    pub fn is_armed(&self) -> bool {
        self.at.is_some()
    }

    /// Armed and `now` has reached the expiry time
    pub fn is_expired(&self, now: f64) -> bool {
        self.at.is_some_and(|at| now >= at)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_countdown_only_counts_after_start() {
        let mut c = FrameCountdown::new(3);
        c.tick();
        assert_eq!(c.remaining(), 3);
        c.start();
        c.tick();
        c.tick();
        assert_eq!(c.remaining(), 1);
        assert!(c.is_running());
        c.tick();
        assert!(c.is_finished());
        assert!(!c.is_running());
        // Further ticks stay at zero
        c.tick();
        assert_eq!(c.remaining(), 0);
    }

    #[test]
    fn test_finished_countdown_cannot_restart() {
        let mut c = FrameCountdown::new(1);
        c.start();
        c.tick();
        c.start();
        assert!(!c.is_running());
    }

    #[test]
    fn test_deadline_expiry() {
        let mut d = Deadline::default();
        assert!(!d.is_expired(100.0));
        d.arm(10.0, 2.0);
        assert!(d.is_armed());
        assert!(!d.is_expired(11.999));
        assert!(d.is_expired(12.0));
        d.clear();
        assert!(!d.is_expired(50.0));
    }
}
