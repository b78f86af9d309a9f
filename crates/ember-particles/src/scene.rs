//! The particle scene: emitters, effects and live particles stepped as one unit

use crate::config::SimulationSettings;
use crate::effect::Effect;
use crate::emitter::Emitter;
use crate::particle::{Particle, ParticlePool};
use ember_core::ParticleRng;

/// Counters from one frame step
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StepStats {
    pub spawned: usize,
    pub removed: usize,
    pub alive: usize,
}

/// Owns everything the frame step touches. Cloning deep-copies all particles
/// and forks the random stream.
#[derive(Debug, Clone)]
pub struct ParticleScene {
    settings: SimulationSettings,
    emitters: Vec<Emitter>,
    effects: Vec<Effect>,
    particles: ParticlePool,
    rng: ParticleRng,
}

impl ParticleScene {
    /// Empty scene seeded from OS entropy
    pub fn new(settings: SimulationSettings) -> Self {
        Self::with_rng(settings, ParticleRng::from_entropy())
    }

    /// Empty scene with a reproducible random stream
    pub fn with_seed(settings: SimulationSettings, seed: u64) -> Self {
        Self::with_rng(settings, ParticleRng::new(seed))
    }

    fn with_rng(settings: SimulationSettings, rng: ParticleRng) -> Self {
        Self {
            settings,
            emitters: Vec::new(),
            effects: Vec::new(),
            particles: ParticlePool::new(),
            rng,
        }
    }

    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }

    pub fn settings(&self) -> &SimulationSettings {
        &self.settings
    }

    pub fn settings_mut(&mut self) -> &mut SimulationSettings {
        &mut self.settings
    }

    // ── Emitters ──

    /// Append an emitter, returning its index
    pub fn add_emitter(&mut self, emitter: Emitter) -> usize {
        self.emitters.push(emitter);
        tracing::debug!(kind = emitter.kind.label(), count = self.emitters.len(), "added emitter");
        self.emitters.len() - 1
    }

    pub fn remove_emitter(&mut self, index: usize) -> Option<Emitter> {
        if index >= self.emitters.len() {
            return None;
        }
        let emitter = self.emitters.remove(index);
        tracing::debug!(kind = emitter.kind.label(), index, "removed emitter");
        Some(emitter)
    }

    pub fn emitters(&self) -> &[Emitter] {
        &self.emitters
    }

    pub fn emitters_mut(&mut self) -> &mut [Emitter] {
        &mut self.emitters
    }

    pub fn emitter_mut(&mut self, index: usize) -> Option<&mut Emitter> {
        self.emitters.get_mut(index)
    }

    // ── Effects ──

    /// Append an effect, returning its index
    pub fn add_effect(&mut self, effect: Effect) -> usize {
        self.effects.push(effect);
        tracing::debug!(kind = effect.kind.label(), count = self.effects.len(), "added effect");
        self.effects.len() - 1
    }

    pub fn remove_effect(&mut self, index: usize) -> Option<Effect> {
        if index >= self.effects.len() {
            return None;
        }
        let effect = self.effects.remove(index);
        tracing::debug!(kind = effect.kind.label(), index, "removed effect");
        Some(effect)
    }

    pub fn effects(&self) -> &[Effect] {
        &self.effects
    }

    pub fn effects_mut(&mut self) -> &mut [Effect] {
        &mut self.effects
    }

    pub fn effect_mut(&mut self, index: usize) -> Option<&mut Effect> {
        self.effects.get_mut(index)
    }

    // ── Particles ──

    pub fn particles(&self) -> &[Particle] {
        self.particles.as_slice()
    }

    pub fn particle_count(&self) -> usize {
        self.particles.len()
    }

    pub fn clear_particles(&mut self) {
        self.particles.clear();
    }

    /// Advance one frame.
    ///
    /// Order: every emitter spawns one particle, every effect pushes on the
    /// whole collection, then particles are aged; those strictly past
    /// `max_lifetime` are dropped and the rest integrated by `dt`.
    /// `dt` must not be negative.
    pub fn step(&mut self, dt: f32) -> StepStats {
        for emitter in &self.emitters {
            self.particles.push(emitter.create_particle(&mut self.rng));
        }

        let falloff = self.settings.force_falloff();
        for effect in &self.effects {
            effect.apply(self.particles.as_mut_slice(), &falloff);
        }

        let removed = self
            .particles
            .age_and_integrate(dt, self.settings.max_lifetime);

        let stats = StepStats {
            spawned: self.emitters.len(),
            removed,
            alive: self.particles.len(),
        };
        tracing::trace!(?stats, dt, "particle step");
        stats
    }
}

impl Default for ParticleScene {
    fn default() -> Self {
        Self::new(SimulationSettings::default())
    }
}
