//! Ember Core - Foundational types for the Ember particle sandbox
//!
//! This crate provides the types that all other Ember crates depend on:
//! - `ParticleRng` - Owned, seedable random stream that forks on clone
//! - `math` - 2D direction and normalization helpers, color constants
//! - Error types and Result alias

mod error;
pub mod math;
mod rng;

pub use error::{EmberError, Result};
pub use glam::{Vec2, Vec4};
pub use rng::ParticleRng;
