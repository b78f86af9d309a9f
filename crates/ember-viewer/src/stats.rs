//! Frame statistics: FPS counter over a sliding one-second window

use std::collections::VecDeque;
use std::time::{Duration, Instant};

/// Tracks how many frames were shown during the last second
pub struct FrameStats {
    frame_times: VecDeque<Instant>,
    fps: f32,
    last_update: Option<Instant>,
}

impl Default for FrameStats {
    fn default() -> Self {
        Self {
            frame_times: VecDeque::new(),
            fps: 0.0,
            last_update: None,
        }
    }
}

impl FrameStats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record that a frame was shown at `now`
    pub fn record_frame(&mut self, now: Instant) {
        self.frame_times.push_back(now);

        // Keep only frames from the last second
        while self
            .frame_times
            .front()
            .is_some_and(|&t| now.duration_since(t) > Duration::from_secs(1))
        {
            self.frame_times.pop_front();
        }

        // Refresh the displayed value every 250ms
        let stale = self
            .last_update
            .map_or(true, |last| now.duration_since(last) > Duration::from_millis(250));
        if stale {
            self.fps = self.frame_times.len() as f32;
            self.last_update = Some(now);
        }
    }

    pub fn fps(&self) -> f32 {
        self.fps
    }

    pub fn summary(&self) -> String {
        if self.fps > 0.0 {
            format!("FPS: {:.0} ({:.1}ms)", self.fps, 1000.0 / self.fps)
        } else {
            "FPS: -".to_string()
        }
    }
}
