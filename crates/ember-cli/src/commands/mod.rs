//! CLI command implementations

pub mod init;
pub mod random;
pub mod run;

use anyhow::Result;
use ember_runtime::{FrameClock, RuntimeSystem};
use glam::Vec2;

/// Run `system` for `frames` fixed steps of `dt` seconds, calling
/// `after_frame` once the system has seen each frame.
pub fn drive<S: RuntimeSystem>(
    system: &mut S,
    frames: u64,
    dt: f64,
    mut after_frame: impl FnMut(&S, &FrameClock),
) -> Result<FrameClock> {
    let mut clock = FrameClock::new();
    system.initialize()?;
    for _ in 0..frames {
        clock.advance(dt);
        system.update(&clock)?;
        after_frame(system, &clock);
    }
    system.shutdown()?;
    tracing::debug!(system = system.name(), frames, "run finished");
    Ok(clock)
}

/// Reject frame steps the clock would clamp or zero out
pub fn check_dt(dt: f64) -> Result<()> {
    if !(dt.is_finite() && dt > 0.0 && dt <= ember_runtime::MAX_FRAME_DELTA) {
        anyhow::bail!(
            "--dt must be in (0, {}], got {}",
            ember_runtime::MAX_FRAME_DELTA,
            dt
        );
    }
    Ok(())
}

/// Axis-aligned bounds of a point set
pub fn bounds(points: impl IntoIterator<Item = Vec2>) -> Option<(Vec2, Vec2)> {
    points.into_iter().fold(None, |acc, p| match acc {
        None => Some((p, p)),
        Some((min, max)) => Some((min.min(p), max.max(p))),
    })
}
