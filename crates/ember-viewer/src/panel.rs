//! Control panel: add, select, remove and edit emitters and effects

use ember_particles::{Effect, Emitter, ParticleScene};
use glam::Vec2;

/// Slider range for positions, matching the visible area
const POSITION_RANGE: (f32, f32) = (-1.0, 1.0);
/// Slider range for a directional emitter's direction and width, in radians
const ANGLE_RANGE: (f32, f32) = (0.0, 6.24);
const FORCE_RANGE: (f32, f32) = (0.0, 0.5);
const LIFETIME_RANGE: (f32, f32) = (0.5, 10.0);

/// Immediate-mode widget calls the panel needs from its host.
/// Every method returns whether the user changed or clicked something this frame.
pub trait Widgets {
    fn button(&mut self, label: &str) -> bool;
    fn slider_index(&mut self, label: &str, value: &mut usize, max: usize) -> bool;
    fn slider_f32(&mut self, label: &str, value: &mut f32, min: f32, max: f32) -> bool;
    fn slider_vec2(&mut self, label: &str, value: &mut Vec2, min: f32, max: f32) -> bool;
    fn label(&mut self, text: &str);
}

/// Selection state for the emitter and effect windows
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ControlPanel {
    pub current_emitter: usize,
    pub current_effect: usize,
}

impl ControlPanel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pull selections back into range after the collections shrank
    pub fn clamp_selection(&mut self, scene: &ParticleScene) {
        self.current_emitter = self
            .current_emitter
            .min(scene.emitters().len().saturating_sub(1));
        self.current_effect = self
            .current_effect
            .min(scene.effects().len().saturating_sub(1));
    }

    pub fn emitters_ui(&mut self, widgets: &mut dyn Widgets, scene: &mut ParticleScene) {
        self.clamp_selection(scene);

        let count = scene.emitters().len();
        if count > 0 {
            widgets.slider_index("Current Emitter", &mut self.current_emitter, count - 1);
        }

        if widgets.button("Add Uniform") {
            scene.add_emitter(Emitter::uniform());
        }
        if widgets.button("Add Directional") {
            scene.add_emitter(Emitter::directional());
        }
        if widgets.button("Add Spinner") {
            scene.add_emitter(Emitter::spinner());
        }

        if !scene.emitters().is_empty() && widgets.button("Remove Current Emitter") {
            scene.remove_emitter(self.current_emitter);
            self.current_emitter = 0;
        }

        let Some(emitter) = scene.emitter_mut(self.current_emitter) else {
            return;
        };
        widgets.slider_vec2(
            "Position (x,y)",
            &mut emitter.position,
            POSITION_RANGE.0,
            POSITION_RANGE.1,
        );
        if let Some(mut values) = emitter.direction_width() {
            if widgets.slider_vec2("Direction and Width", &mut values, ANGLE_RANGE.0, ANGLE_RANGE.1)
            {
                emitter.set_direction_width(values);
            }
        }
    }

    pub fn effects_ui(&mut self, widgets: &mut dyn Widgets, scene: &mut ParticleScene) {
        self.clamp_selection(scene);

        let count = scene.effects().len();
        if count > 0 {
            widgets.slider_index("Current Effect", &mut self.current_effect, count - 1);
        }

        if widgets.button("Add Gravity Well") {
            scene.add_effect(Effect::gravity_well());
        }
        if widgets.button("Add Wind") {
            scene.add_effect(Effect::wind());
        }

        if !scene.effects().is_empty() && widgets.button("Remove Current Effect") {
            scene.remove_effect(self.current_effect);
            self.current_effect = 0;
        }

        let Some(effect) = scene.effect_mut(self.current_effect) else {
            return;
        };
        widgets.slider_vec2(
            "Position (x,y)",
            &mut effect.position,
            POSITION_RANGE.0,
            POSITION_RANGE.1,
        );
        widgets.slider_f32("Force", &mut effect.force, FORCE_RANGE.0, FORCE_RANGE.1);
    }

    /// Particle count, lifetime limit and a reset button
    pub fn simulation_ui(&mut self, widgets: &mut dyn Widgets, scene: &mut ParticleScene) {
        widgets.label(&format!("Particles: {}", scene.particle_count()));
        widgets.slider_f32(
            "Max Lifetime",
            &mut scene.settings_mut().max_lifetime,
            LIFETIME_RANGE.0,
            LIFETIME_RANGE.1,
        );
        if widgets.button("Clear Particles") {
            scene.clear_particles();
        }
    }
}
