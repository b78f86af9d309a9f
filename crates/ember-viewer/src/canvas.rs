//! Draw-point canvas and the draw order for each simulation

use ember_particles::ParticleScene;
use ember_random::RandomSystem;
use glam::{Vec2, Vec4};

/// Anything that can plot a filled point in normalized [-1, 1]² coordinates
pub trait Canvas {
    fn draw_point(&mut self, position: Vec2, radius: f32, color: Vec4);
}

/// Particles first, then emitters, then effects on top
pub fn draw_scene(canvas: &mut dyn Canvas, scene: &ParticleScene) {
    for p in scene.particles() {
        canvas.draw_point(p.position, p.radius, p.color);
    }
    for emitter in scene.emitters() {
        canvas.draw_point(emitter.position, emitter.radius, emitter.color);
    }
    for effect in scene.effects() {
        canvas.draw_point(effect.position, effect.radius, effect.color);
    }
}

pub fn draw_random_system(canvas: &mut dyn Canvas, system: &RandomSystem) {
    for ((position, size), color) in system
        .positions()
        .iter()
        .zip(system.sizes())
        .zip(system.colors())
    {
        canvas.draw_point(*position, *size, *color);
    }
}
