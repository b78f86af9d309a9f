//! Structure-of-arrays particle set with shared drift and per-particle respawn

use ember_core::ParticleRng;
use glam::{Vec2, Vec4};

const SIZE_RANGE: (f32, f32) = (1.0, 10.0);
const COLOR_RANGE: (f32, f32) = (0.0, 1.0);
const LIFETIME_RANGE: (f32, f32) = (0.5, 2.5);
const JITTER_RANGE: (f32, f32) = (-1.0, 1.0);
const INITIAL_ALPHA: f32 = 0.5;
const DRIFT_AMPLITUDE: f32 = 0.2;

/// `N` particles in four index-aligned arrays. `N` never changes after
/// construction: expired particles are resampled in place.
///
/// Here `lifetime` is time remaining, counting down to zero.
#[derive(Debug, Clone)]
pub struct RandomSystem {
    positions: Vec<Vec2>,
    sizes: Vec<f32>,
    colors: Vec<Vec4>,
    lifetimes: Vec<f32>,
    rng: ParticleRng,
    prev_time: f64,
}

impl RandomSystem {
    /// `count` particles with positions in [-1, 1]², sizes in [1, 10],
    /// random RGB with alpha 0.5 and lifetimes in [0.5, 2.5].
    pub fn new(count: usize) -> Self {
        Self::with_rng(count, ParticleRng::from_entropy())
    }

    /// Same as [`RandomSystem::new`] with a reproducible stream
    pub fn with_seed(count: usize, seed: u64) -> Self {
        Self::with_rng(count, ParticleRng::new(seed))
    }

    fn with_rng(count: usize, mut rng: ParticleRng) -> Self {
        let positions = (0..count).map(|_| rand_position(&mut rng)).collect();
        let sizes = (0..count).map(|_| rand_size(&mut rng)).collect();
        let colors = (0..count).map(|_| rand_color(&mut rng)).collect();
        let lifetimes = (0..count).map(|_| rand_lifetime(&mut rng)).collect();
        Self {
            positions,
            sizes,
            colors,
            lifetimes,
            rng,
            prev_time: 0.0,
        }
    }

    /// Advance to absolute `time`, scaling simulated time by `speed`.
    ///
    /// Zero speed freezes the system; a negative speed runs the drift backwards
    /// and makes lifetimes grow, so nothing recycles.
    pub fn update(&mut self, time: f64, speed: f32) {
        let dt = time - self.prev_time;
        self.prev_time = time;

        let drift = DRIFT_AMPLITUDE * Vec2::new(time.cos() as f32, -(time.sin().abs() as f32));
        let sim_dt = dt as f32 * speed;

        let mut recycled = 0usize;
        for i in 0..self.positions.len() {
            let jitter = Vec2::new(
                self.rng.range(JITTER_RANGE.0, JITTER_RANGE.1),
                self.rng.range(JITTER_RANGE.0, JITTER_RANGE.1),
            );
            self.positions[i] += (drift + jitter) * sim_dt;
            self.colors[i].w = self.colors[i].w.min(self.lifetimes[i]);
            self.lifetimes[i] -= sim_dt;

            if self.lifetimes[i] < 0.0 {
                self.positions[i] = rand_position(&mut self.rng);
                self.colors[i] = rand_color(&mut self.rng);
                self.sizes[i] = rand_size(&mut self.rng);
                self.lifetimes[i] = rand_lifetime(&mut self.rng);
                recycled += 1;
            }
        }
        tracing::trace!(time, sim_dt, recycled, "random system update");
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    pub fn positions(&self) -> &[Vec2] {
        &self.positions
    }

    pub fn sizes(&self) -> &[f32] {
        &self.sizes
    }

    pub fn colors(&self) -> &[Vec4] {
        &self.colors
    }

    pub fn lifetimes(&self) -> &[f32] {
        &self.lifetimes
    }
}

fn rand_position(rng: &mut ParticleRng) -> Vec2 {
    rng.unit_square()
}

fn rand_size(rng: &mut ParticleRng) -> f32 {
    rng.range(SIZE_RANGE.0, SIZE_RANGE.1)
}

fn rand_color(rng: &mut ParticleRng) -> Vec4 {
    Vec4::new(
        rng.range(COLOR_RANGE.0, COLOR_RANGE.1),
        rng.range(COLOR_RANGE.0, COLOR_RANGE.1),
        rng.range(COLOR_RANGE.0, COLOR_RANGE.1),
        INITIAL_ALPHA,
    )
}

fn rand_lifetime(rng: &mut ParticleRng) -> f32 {
    rng.range(LIFETIME_RANGE.0, LIFETIME_RANGE.1)
}
