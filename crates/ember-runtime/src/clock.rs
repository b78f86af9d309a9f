//! Frame clock: absolute time plus a clamped per-frame delta

use std::time::Instant;

/// Longest delta a single frame may report, in seconds
pub const MAX_FRAME_DELTA: f64 = 0.25;

/// Tracks simulation time for the frame loop.
///
/// `delta_time` is never negative and never exceeds [`MAX_FRAME_DELTA`], so
/// integrators fed from it never see a backwards or huge step.
#[derive(Debug, Clone)]
pub struct FrameClock {
    /// Total elapsed time in seconds
    pub total_time: f64,
    /// Time since last frame in seconds
    pub delta_time: f64,
    /// Number of frames ticked so far
    pub frame: u64,
    last_instant: Instant,
    first_tick: bool,
}

impl Default for FrameClock {
    fn default() -> Self {
        Self {
            total_time: 0.0,
            delta_time: 0.0,
            frame: 0,
            last_instant: Instant::now(),
            first_tick: true,
        }
    }
}

impl FrameClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance from the wall clock. Call once per frame.
    pub fn tick(&mut self) {
        let now = Instant::now();

        if self.first_tick {
            self.first_tick = false;
            self.last_instant = now;
            self.delta_time = 0.0;
            self.frame += 1;
            return;
        }

        let elapsed = now.duration_since(self.last_instant).as_secs_f64();
        self.last_instant = now;
        self.advance(elapsed);
    }

    /// Advance by an explicit step (headless runs, tests)
    pub fn advance(&mut self, dt: f64) {
        self.first_tick = false;
        self.delta_time = if dt.is_finite() {
            dt.clamp(0.0, MAX_FRAME_DELTA)
        } else {
            0.0
        };
        self.total_time += self.delta_time;
        self.frame += 1;
    }
}
