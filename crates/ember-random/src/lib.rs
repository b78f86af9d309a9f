//! Ember Random - batch particle system with in-place recycling
//!
//! A fixed number of particles stored as parallel arrays. Every particle
//! drifts with a shared rocking motion plus its own jitter, fades out as its
//! lifetime runs down, and is respawned in place when the lifetime runs out.

mod system;

use ember_core::Result;
use ember_runtime::{FrameClock, RuntimeSystem};

pub use system::RandomSystem;

/// Drives a [`RandomSystem`] from the frame clock at a fixed speed factor
#[derive(Debug, Clone)]
pub struct RandomRunner {
    pub system: RandomSystem,
    pub speed: f32,
}

impl RandomRunner {
    pub fn new(system: RandomSystem, speed: f32) -> Self {
        Self { system, speed }
    }
}

impl RuntimeSystem for RandomRunner {
    fn initialize(&mut self) -> Result<()> {
        tracing::info!(
            particles = self.system.len(),
            speed = self.speed,
            "random system ready"
        );
        Ok(())
    }

    fn update(&mut self, clock: &FrameClock) -> Result<()> {
        self.system.update(clock.total_time, self.speed);
        Ok(())
    }

    fn shutdown(&mut self) -> Result<()> {
        Ok(())
    }

    fn name(&self) -> &str {
        "random"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn runner_follows_clock_time() {
        let mut runner = RandomRunner::new(RandomSystem::with_seed(10, 1), 0.0);
        runner.initialize().unwrap();
        let before = runner.system.positions().to_vec();

        let mut clock = FrameClock::new();
        clock.advance(0.1);
        runner.update(&clock).unwrap();

        // zero speed freezes everything
        assert_eq!(runner.system.positions(), before.as_slice());
        assert_eq!(runner.name(), "random");
    }
}
