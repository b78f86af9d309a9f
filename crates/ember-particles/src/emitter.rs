//! Emitters: closed set of spawn patterns sharing a common base

use crate::particle::Particle;
use ember_core::math::RED;
use ember_core::ParticleRng;
use glam::{Vec2, Vec4};

/// Launch direction of a fresh directional emitter, in radians
pub const DEFAULT_DIRECTION: f32 = 1.0;
/// Fresh directional emitters fire in a single direction
pub const DEFAULT_WIDTH: f32 = 0.0;

/// Spawn pattern of an emitter
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EmitterKind {
    /// Launch angle uniform over the full circle
    Uniform,
    /// Launch angle uniform over `[direction, direction + width)`
    Directional { direction: f32, width: f32 },
    /// Always launches along +x; there is no rotation state yet
    Spinner,
}

impl EmitterKind {
    pub fn label(&self) -> &'static str {
        match self {
            EmitterKind::Uniform => "uniform",
            EmitterKind::Directional { .. } => "directional",
            EmitterKind::Spinner => "spinner",
        }
    }
}

/// A particle source. Owns only its configuration; particles it creates
/// belong to whoever collects them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Emitter {
    pub position: Vec2,
    pub radius: f32,
    pub color: Vec4,
    pub kind: EmitterKind,
}

impl Emitter {
    pub fn new(kind: EmitterKind) -> Self {
        Self {
            position: Vec2::ZERO,
            radius: 10.0,
            color: RED,
            kind,
        }
    }

    pub fn uniform() -> Self {
        Self::new(EmitterKind::Uniform)
    }

    pub fn directional() -> Self {
        Self::new(EmitterKind::Directional {
            direction: DEFAULT_DIRECTION,
            width: DEFAULT_WIDTH,
        })
    }

    pub fn spinner() -> Self {
        Self::new(EmitterKind::Spinner)
    }

    pub fn with_position(mut self, position: Vec2) -> Self {
        self.position = position;
        self
    }

    /// `(direction, width)` for directional emitters
    pub fn direction_width(&self) -> Option<Vec2> {
        match self.kind {
            EmitterKind::Directional { direction, width } => Some(Vec2::new(direction, width)),
            _ => None,
        }
    }

    pub fn direction(&self) -> Option<f32> {
        self.direction_width().map(|v| v.x)
    }

    pub fn width(&self) -> Option<f32> {
        self.direction_width().map(|v| v.y)
    }

    /// Set direction (x) and width (y). Returns false for other variants.
    pub fn set_direction_width(&mut self, values: Vec2) -> bool {
        match &mut self.kind {
            EmitterKind::Directional { direction, width } => {
                *direction = values.x;
                *width = values.y;
                true
            }
            _ => false,
        }
    }

    /// Sample the launch angle for the next particle
    pub fn launch_angle(&self, rng: &mut ParticleRng) -> f32 {
        match self.kind {
            EmitterKind::Uniform => rng.angle(),
            EmitterKind::Directional { direction, width } => direction + width * rng.next_f32(),
            EmitterKind::Spinner => 0.0,
        }
    }

    /// Create one particle at the emitter position
    pub fn create_particle(&self, rng: &mut ParticleRng) -> Particle {
        Particle::launched(self.position, self.launch_angle(rng))
    }
}

impl Default for Emitter {
    fn default() -> Self {
        Self::uniform()
    }
}
