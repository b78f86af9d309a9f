//! Seedable particle RNG built on ChaCha8, with forking clones

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::cell::Cell;
use std::f32::consts::TAU;

/// Random stream owned by exactly one simulation.
///
/// Cloning does not duplicate the stream: the clone continues from the same
/// position on a different ChaCha stream, so a copied simulation evolves
/// independently of its source.
#[derive(Debug)]
pub struct ParticleRng {
    seed: u64,
    inner: ChaCha8Rng,
    forks: Cell<u64>,
}

impl ParticleRng {
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            inner: ChaCha8Rng::seed_from_u64(seed),
            forks: Cell::new(0),
        }
    }

    /// Seed from the operating system's entropy source
    pub fn from_entropy() -> Self {
        Self::new(rand::random())
    }

    /// The seed this stream (or the stream it was forked from) started with
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Returns a float in [0, 1)
    pub fn next_f32(&mut self) -> f32 {
        self.inner.gen::<f32>()
    }

    /// Returns a float in [min, max), or `min` when the range is empty or not finite
    pub fn range(&mut self, min: f32, max: f32) -> f32 {
        let span = max - min;
        if !(span.is_finite() && span > 0.0) {
            return min;
        }
        self.inner.gen_range(min..max)
    }

    /// Returns an angle in [0, 2π)
    pub fn angle(&mut self) -> f32 {
        self.range(0.0, TAU)
    }

    /// Returns a point in [-1, 1)²
    pub fn unit_square(&mut self) -> Vec2 {
        Vec2::new(self.range(-1.0, 1.0), self.range(-1.0, 1.0))
    }
}

impl Clone for ParticleRng {
    fn clone(&self) -> Self {
        let fork = self.forks.get().wrapping_add(1);
        self.forks.set(fork);

        let mut inner = self.inner.clone();
        inner.set_stream(fork_stream(self.inner.get_stream(), fork));
        Self {
            seed: self.seed,
            inner,
            forks: Cell::new(0),
        }
    }
}

/// SplitMix64 finalizer over the parent stream id and fork counter
fn fork_stream(stream: u64, fork: u64) -> u64 {
    let mut z = stream ^ fork.wrapping_mul(0x9E37_79B9_7F4A_7C15);
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^ (z >> 31)
}
