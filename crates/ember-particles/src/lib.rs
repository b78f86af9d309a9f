//! Ember Particles - emitter/effect particle simulation
//!
//! Provides the interactive particle model:
//! - Semi-implicit Euler integration of position/velocity/acceleration
//! - Uniform, directional and spinner emitters (one particle per frame each)
//! - Gravity well and wind effects with a guarded inverse-distance falloff
//! - Stable in-place removal of expired particles
//! - TOML scene files

pub mod config;
pub mod effect;
pub mod emitter;
pub mod particle;
pub mod scene;

use ember_core::Result;
use ember_runtime::{FrameClock, RuntimeSystem};

pub use config::{SceneConfig, SimulationSettings};
pub use effect::{Effect, EffectKind, ForceFalloff};
pub use emitter::{Emitter, EmitterKind};
pub use particle::{Particle, ParticlePool};
pub use scene::{ParticleScene, StepStats};

impl RuntimeSystem for ParticleScene {
    fn initialize(&mut self) -> Result<()> {
        tracing::info!(
            emitters = self.emitters().len(),
            effects = self.effects().len(),
            seed = self.seed(),
            "particle scene ready"
        );
        Ok(())
    }

    fn update(&mut self, clock: &FrameClock) -> Result<()> {
        self.step(clock.delta_time as f32);
        Ok(())
    }

    fn shutdown(&mut self) -> Result<()> {
        tracing::debug!(alive = self.particle_count(), "particle scene shut down");
        Ok(())
    }

    fn name(&self) -> &str {
        "particles"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn runtime_update_uses_clock_delta() {
        let mut scene = ParticleScene::with_seed(SimulationSettings::default(), 3);
        scene.add_emitter(Emitter::spinner());
        scene.initialize().unwrap();

        let mut clock = FrameClock::new();
        clock.advance(0.1);
        scene.update(&clock).unwrap();

        let p = scene.particles()[0];
        assert!((p.lifetime - 0.1).abs() < 1e-6);
        assert_eq!(scene.name(), "particles");
        scene.shutdown().unwrap();
    }
}
