//! Host frame clock
//!
//! Supplies the per-frame delta and the monotonic "now" that `TickInput`
//! carries. Deltas are capped so a stall (debugger, suspended window) does
//! not turn into one giant simulation step.

use std::time::{Duration, Instant};

/// Default cap on a single frame's delta (seconds)
pub const DEFAULT_MAX_DELTA: f32 = 0.1;

#[derive(Debug, Clone)]
enum Source {
    /// Real monotonic clock
    Wall { start: Instant, last: Instant },
    /// Constant step for headless runs and tests
    Fixed { step: f32, now: f64 },
}

/// Produces `(dt, now)` pairs once per frame
#[derive(Debug, Clone)]
pub struct FrameClock {
    source: Source,
    max_delta: f32,
}

impl FrameClock {
    /// Clock backed by `Instant`, with deltas capped at `max_delta`
    pub fn new(max_delta: f32) -> Self {
        let start = Instant::now();
        Self {
            source: Source::Wall { start, last: start },
            max_delta,
        }
    }

    /// Clock that advances by exactly `step` seconds per frame
    pub fn fixed(step: f32) -> Self {
        Self {
            source: Source::Fixed { step, now: 0.0 },
            max_delta: step,
        }
    }

    /// Advance one frame; returns the capped delta and seconds since start
    pub fn tick(&mut self) -> (f32, f64) {
        match &mut self.source {
            Source::Wall { start, last } => {
                let now = Instant::now();
                let dt = now.saturating_duration_since(*last);
                *last = now;
                (
                    cap(dt, self.max_delta),
                    now.saturating_duration_since(*start).as_secs_f64(),
                )
            }
            Source::Fixed { step, now } => {
                *now += f64::from(*step);
                (*step, *now)
            }
        }
    }
}

fn cap(dt: Duration, max_delta: f32) -> f32 {
    dt.as_secs_f32().min(max_delta)
}
