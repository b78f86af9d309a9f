//! Force effects: attract (gravity well) or repel (wind) every live particle

use crate::particle::Particle;
use ember_core::math::{safe_normalize_len, GREEN};
use glam::{Vec2, Vec4};

/// Divisor applied to distance in the force falloff
pub const DEFAULT_FALLOFF: f32 = 5.0;
/// Distances below this are treated as this when computing the falloff
pub const DEFAULT_MIN_DISTANCE: f32 = 1e-3;
/// Force of a freshly added effect
pub const DEFAULT_FORCE: f32 = 0.05;

/// Inverse-distance falloff shared by every effect
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ForceFalloff {
    pub k: f32,
    pub min_distance: f32,
}

impl Default for ForceFalloff {
    fn default() -> Self {
        Self {
            k: DEFAULT_FALLOFF,
            min_distance: DEFAULT_MIN_DISTANCE,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EffectKind {
    GravityWell,
    Wind,
}

impl EffectKind {
    pub fn label(&self) -> &'static str {
        match self {
            EffectKind::GravityWell => "gravity_well",
            EffectKind::Wind => "wind",
        }
    }
}

/// A point force source. Holds no per-particle state between frames.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Effect {
    pub position: Vec2,
    pub radius: f32,
    pub color: Vec4,
    pub force: f32,
    pub kind: EffectKind,
}

impl Effect {
    pub fn new(kind: EffectKind) -> Self {
        Self {
            position: Vec2::new(0.2, 0.0),
            radius: 10.0,
            color: GREEN,
            force: DEFAULT_FORCE,
            kind,
        }
    }

    pub fn gravity_well() -> Self {
        Self::new(EffectKind::GravityWell)
    }

    pub fn wind() -> Self {
        Self::new(EffectKind::Wind)
    }

    pub fn with_position(mut self, position: Vec2) -> Self {
        self.position = position;
        self
    }

    pub fn with_force(mut self, force: f32) -> Self {
        self.force = force;
        self
    }

    /// Acceleration delta this effect adds to a particle at `target`.
    ///
    /// Magnitude is `force / (distance * k)`, pointing toward the effect for a
    /// gravity well and away from it for wind. A particle sitting exactly on
    /// the effect receives nothing.
    pub fn acceleration_at(&self, target: Vec2, falloff: &ForceFalloff) -> Vec2 {
        let (dir, len) = safe_normalize_len(self.position - target, falloff.min_distance);
        if len <= 0.0 {
            return Vec2::ZERO;
        }
        let pull = dir * (self.force / (len * falloff.k));
        match self.kind {
            EffectKind::GravityWell => pull,
            EffectKind::Wind => -pull,
        }
    }

    /// Add this effect's contribution to every particle's acceleration
    pub fn apply(&self, particles: &mut [Particle], falloff: &ForceFalloff) {
        for p in particles {
            p.acceleration += self.acceleration_at(p.position, falloff);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gravity_well_attracts() {
        let well = Effect::gravity_well()
            .with_position(Vec2::new(1.0, 0.0))
            .with_force(0.5);
        let mut particles = [Particle::at(Vec2::ZERO)];
        well.apply(&mut particles, &ForceFalloff::default());
        let a = particles[0].acceleration;
        assert!(a.x > 0.0);
        assert!(a.y.abs() < 1e-9);
        // 0.5 / (1 * 5)
        assert!((a.x - 0.1).abs() < 1e-6);
    }

    #[test]
    fn wind_repels() {
        let wind = Effect::wind().with_position(Vec2::new(1.0, 0.0));
        let delta = wind.acceleration_at(Vec2::ZERO, &ForceFalloff::default());
        assert!(delta.x < 0.0);
    }

    #[test]
    fn wind_mirrors_gravity_well() {
        let falloff = ForceFalloff::default();
        let target = Vec2::new(-0.3, 0.4);
        let well = Effect::gravity_well().with_position(Vec2::new(0.1, 0.1));
        let wind = Effect {
            kind: EffectKind::Wind,
            ..well
        };
        let sum = well.acceleration_at(target, &falloff) + wind.acceleration_at(target, &falloff);
        assert!(sum.length() < 1e-7);
    }

    #[test]
    fn zero_distance_is_finite() {
        let well = Effect::gravity_well().with_position(Vec2::new(0.2, 0.0));
        let mut particles = [Particle::at(Vec2::new(0.2, 0.0))];
        well.apply(&mut particles, &ForceFalloff::default());
        let a = particles[0].acceleration;
        assert!(a.is_finite());
        assert_eq!(a, Vec2::ZERO);
    }

    #[test]
    fn tiny_distance_is_floored() {
        let falloff = ForceFalloff::default();
        let well = Effect::gravity_well().with_position(Vec2::ZERO).with_force(1.0);
        let delta = well.acceleration_at(Vec2::new(1e-9, 0.0), &falloff);
        assert!(delta.is_finite());
        assert!(delta.length() <= 1.0 / (falloff.min_distance * falloff.k) + 1e-3);
    }

    #[test]
    fn contributions_accumulate() {
        let well = Effect::gravity_well().with_position(Vec2::new(1.0, 0.0));
        let mut particles = [Particle::at(Vec2::ZERO)];
        let falloff = ForceFalloff::default();
        well.apply(&mut particles, &falloff);
        let once = particles[0].acceleration;
        well.apply(&mut particles, &falloff);
        assert!((particles[0].acceleration - once * 2.0).length() < 1e-7);
    }

    #[test]
    fn empty_collection_is_fine() {
        let mut particles: [Particle; 0] = [];
        Effect::wind().apply(&mut particles, &ForceFalloff::default());
    }
}
