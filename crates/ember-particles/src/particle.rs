//! Particle state, the semi-implicit Euler integrator, and the live pool

use ember_core::math::{direction_vector, WHITE};
use glam::{Vec2, Vec4};

/// Radius given to freshly launched particles
pub const DEFAULT_RADIUS: f32 = 5.0;
/// Magnitude of the initial acceleration along the launch direction
pub const LAUNCH_FORCE: f32 = 1.0;

/// One live particle. `lifetime` counts up from zero.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    pub position: Vec2,
    pub velocity: Vec2,
    pub acceleration: Vec2,
    pub lifetime: f32,
    pub radius: f32,
    pub color: Vec4,
}

impl Particle {
    /// A particle at rest with no acceleration
    pub fn at(position: Vec2) -> Self {
        Self {
            position,
            velocity: Vec2::ZERO,
            acceleration: Vec2::ZERO,
            lifetime: 0.0,
            radius: DEFAULT_RADIUS,
            color: WHITE,
        }
    }

    /// A particle at rest, pushed along `theta` by [`LAUNCH_FORCE`]
    pub fn launched(position: Vec2, theta: f32) -> Self {
        Self {
            acceleration: direction_vector(theta) * LAUNCH_FORCE,
            ..Self::at(position)
        }
    }

    /// Semi-implicit Euler: velocity first, then position with the new velocity
    pub fn integrate(&mut self, dt: f32) {
        self.velocity += self.acceleration * dt;
        self.position += self.velocity * dt;
    }

    /// Strictly past `max_lifetime`; a particle exactly at the limit is still alive
    pub fn is_expired(&self, max_lifetime: f32) -> bool {
        self.lifetime > max_lifetime
    }
}

/// Growable collection of live particles with stable in-place removal.
#[derive(Debug, Clone, Default)]
pub struct ParticlePool {
    particles: Vec<Particle>,
}

impl ParticlePool {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, particle: Particle) {
        self.particles.push(particle);
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    pub fn clear(&mut self) {
        self.particles.clear();
    }

    /// Age every particle by `dt`, drop the expired ones and integrate the rest.
    ///
    /// Survivors keep their relative order. Returns how many were removed.
    pub fn age_and_integrate(&mut self, dt: f32, max_lifetime: f32) -> usize {
        let before = self.particles.len();
        self.particles.retain_mut(|p| {
            p.lifetime += dt;
            if p.is_expired(max_lifetime) {
                return false;
            }
            p.integrate(dt);
            true
        });
        before - self.particles.len()
    }

    pub fn as_slice(&self) -> &[Particle] {
        &self.particles
    }

    pub fn as_mut_slice(&mut self) -> &mut [Particle] {
        &mut self.particles
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integrate_unit_step() {
        let mut p = Particle::at(Vec2::ZERO);
        p.acceleration = Vec2::new(1.0, 0.0);
        p.integrate(1.0);
        assert_eq!(p.velocity, Vec2::new(1.0, 0.0));
        assert_eq!(p.position, Vec2::new(1.0, 0.0));
    }

    #[test]
    fn integrate_uses_updated_velocity() {
        let mut p = Particle::at(Vec2::ZERO);
        p.velocity = Vec2::new(0.0, 1.0);
        p.acceleration = Vec2::new(0.0, 2.0);
        p.integrate(0.5);
        // v = 1 + 2 * 0.5 = 2, x = 2 * 0.5 = 1
        assert!((p.velocity.y - 2.0).abs() < 1e-6);
        assert!((p.position.y - 1.0).abs() < 1e-6);
    }

    #[test]
    fn launched_particle_points_along_theta() {
        let p = Particle::launched(Vec2::new(0.5, 0.5), 0.0);
        assert!((p.acceleration.x - LAUNCH_FORCE).abs() < 1e-6);
        assert!(p.acceleration.y.abs() < 1e-6);
        assert_eq!(p.velocity, Vec2::ZERO);
        assert_eq!(p.lifetime, 0.0);
        assert_eq!(p.radius, DEFAULT_RADIUS);
    }

    #[test]
    fn particle_at_threshold_survives_until_pushed_over() {
        let mut pool = ParticlePool::new();
        let mut p = Particle::at(Vec2::ZERO);
        p.lifetime = 4.0;
        pool.push(p);

        assert_eq!(pool.age_and_integrate(0.0, 4.0), 0);
        assert_eq!(pool.len(), 1);

        assert_eq!(pool.age_and_integrate(0.01, 4.0), 1);
        assert!(pool.is_empty());
    }

    #[test]
    fn consecutive_expired_particles_are_all_removed() {
        let mut pool = ParticlePool::new();
        for (i, age) in [5.0, 5.0, 1.0, 5.0, 2.0].into_iter().enumerate() {
            let mut p = Particle::at(Vec2::new(i as f32, 0.0));
            p.lifetime = age;
            pool.push(p);
        }

        let removed = pool.age_and_integrate(0.0, 4.0);
        assert_eq!(removed, 3);
        let xs: Vec<f32> = pool.as_slice().iter().map(|p| p.position.x).collect();
        assert_eq!(xs, vec![2.0, 4.0]);
    }

    #[test]
    fn survivors_are_integrated_once() {
        let mut pool = ParticlePool::new();
        let mut p = Particle::at(Vec2::ZERO);
        p.acceleration = Vec2::new(1.0, 0.0);
        pool.push(p);

        pool.age_and_integrate(1.0, 4.0);
        let p = pool.as_slice()[0];
        assert_eq!(p.position, Vec2::new(1.0, 0.0));
        assert_eq!(p.lifetime, 1.0);
    }

    #[test]
    fn empty_pool_is_fine() {
        let mut pool = ParticlePool::new();
        assert_eq!(pool.age_and_integrate(0.016, 4.0), 0);
        assert!(pool.as_slice().is_empty());
    }
}
