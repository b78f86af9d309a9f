//! egui implementations of `Widgets` and `Canvas`, and the per-frame sandbox driver

use crate::canvas::{draw_random_system, draw_scene, Canvas};
use crate::panel::{ControlPanel, Widgets};
use crate::stats::FrameStats;
use ember_core::math::BLACK;
use ember_particles::ParticleScene;
use ember_random::RandomSystem;
use ember_runtime::FrameClock;
use glam::{Vec2, Vec4};
use std::time::Instant;

/// `Widgets` over an egui `Ui`
pub struct EguiWidgets<'a> {
    ui: &'a mut egui::Ui,
}

impl<'a> EguiWidgets<'a> {
    pub fn new(ui: &'a mut egui::Ui) -> Self {
        Self { ui }
    }
}

impl Widgets for EguiWidgets<'_> {
    fn button(&mut self, label: &str) -> bool {
        self.ui.button(label).clicked()
    }

    fn slider_index(&mut self, label: &str, value: &mut usize, max: usize) -> bool {
        self.ui
            .add(egui::Slider::new(value, 0..=max).text(label))
            .changed()
    }

    fn slider_f32(&mut self, label: &str, value: &mut f32, min: f32, max: f32) -> bool {
        self.ui
            .add(egui::Slider::new(value, min..=max).text(label))
            .changed()
    }

    fn slider_vec2(&mut self, label: &str, value: &mut Vec2, min: f32, max: f32) -> bool {
        self.ui.label(label);
        let x = self
            .ui
            .add(egui::Slider::new(&mut value.x, min..=max).text("x"))
            .changed();
        let y = self
            .ui
            .add(egui::Slider::new(&mut value.y, min..=max).text("y"))
            .changed();
        x || y
    }

    fn label(&mut self, text: &str) {
        self.ui.monospace(text);
    }
}

/// `Canvas` over an egui painter. Maps [-1, 1]² onto `rect` with +y up.
pub struct EguiCanvas {
    painter: egui::Painter,
    rect: egui::Rect,
}

impl EguiCanvas {
    pub fn new(painter: egui::Painter, rect: egui::Rect) -> Self {
        Self { painter, rect }
    }

    pub fn to_screen(&self, position: Vec2) -> egui::Pos2 {
        let center = self.rect.center();
        let half = self.rect.size() * 0.5;
        egui::pos2(center.x + position.x * half.x, center.y - position.y * half.y)
    }

    pub fn clear(&self, color: Vec4) {
        self.painter.rect_filled(self.rect, 0.0, to_color32(color));
    }
}

impl Canvas for EguiCanvas {
    fn draw_point(&mut self, position: Vec2, radius: f32, color: Vec4) {
        self.painter
            .circle_filled(self.to_screen(position), radius, to_color32(color));
    }
}

fn to_color32(color: Vec4) -> egui::Color32 {
    let c = color.clamp(Vec4::ZERO, Vec4::ONE);
    egui::Rgba::from_rgba_unmultiplied(c.x, c.y, c.z, c.w).into()
}

/// Allocate the remaining space of `ui` as a black canvas
fn allocate_canvas(ui: &mut egui::Ui) -> EguiCanvas {
    let (response, painter) = ui.allocate_painter(ui.available_size(), egui::Sense::hover());
    let canvas = EguiCanvas::new(painter, response.rect);
    canvas.clear(BLACK);
    canvas
}

pub fn paint_scene(ui: &mut egui::Ui, scene: &ParticleScene) {
    let mut canvas = allocate_canvas(ui);
    draw_scene(&mut canvas, scene);
}

pub fn paint_random_system(ui: &mut egui::Ui, system: &RandomSystem) {
    let mut canvas = allocate_canvas(ui);
    draw_random_system(&mut canvas, system);
}

/// The emitter, effect and simulation windows
pub fn show_control_panel(ctx: &egui::Context, panel: &mut ControlPanel, scene: &mut ParticleScene) {
    egui::Window::new("Emitters").show(ctx, |ui| {
        panel.emitters_ui(&mut EguiWidgets::new(ui), scene);
    });
    egui::Window::new("Effects").show(ctx, |ui| {
        panel.effects_ui(&mut EguiWidgets::new(ui), scene);
    });
    egui::Window::new("Simulation").show(ctx, |ui| {
        panel.simulation_ui(&mut EguiWidgets::new(ui), scene);
    });
}

/// Everything one frame of the interactive sandbox needs: clock, scene,
/// panel selection and FPS counter. The host calls [`Sandbox::frame`] once
/// per egui pass.
pub struct Sandbox {
    pub clock: FrameClock,
    pub scene: ParticleScene,
    pub panel: ControlPanel,
    pub stats: FrameStats,
}

impl Sandbox {
    pub fn new(scene: ParticleScene) -> Self {
        tracing::info!(
            emitters = scene.emitters().len(),
            effects = scene.effects().len(),
            seed = scene.seed(),
            "sandbox started"
        );
        Self {
            clock: FrameClock::new(),
            scene,
            panel: ControlPanel::new(),
            stats: FrameStats::new(),
        }
    }

    /// Tick the clock, step the scene, then draw it and the control windows
    pub fn frame(&mut self, ctx: &egui::Context) {
        self.clock.tick();
        self.scene.step(self.clock.delta_time as f32);
        self.stats.record_frame(Instant::now());

        egui::CentralPanel::default()
            .frame(egui::Frame::none())
            .show(ctx, |ui| paint_scene(ui, &self.scene));
        show_control_panel(ctx, &mut self.panel, &mut self.scene);
        egui::Window::new("Stats").show(ctx, |ui| {
            ui.monospace(self.stats.summary());
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ember_particles::{Effect, Emitter, SimulationSettings};

    fn run_frame(ctx: &egui::Context, mut f: impl FnMut(&egui::Context)) -> egui::FullOutput {
        let input = egui::RawInput {
            screen_rect: Some(egui::Rect::from_min_size(
                egui::Pos2::ZERO,
                egui::vec2(800.0, 800.0),
            )),
            ..Default::default()
        };
        ctx.run(input, |ctx| f(ctx))
    }

    #[test]
    fn canvas_maps_unit_square_to_rect() {
        let ctx = egui::Context::default();
        let rect = egui::Rect::from_min_size(egui::Pos2::ZERO, egui::vec2(200.0, 100.0));
        let painter = egui::Painter::new(ctx, egui::LayerId::background(), rect);
        let canvas = EguiCanvas::new(painter, rect);

        assert_eq!(canvas.to_screen(Vec2::ZERO), egui::pos2(100.0, 50.0));
        assert_eq!(canvas.to_screen(Vec2::new(1.0, 1.0)), egui::pos2(200.0, 0.0));
        assert_eq!(canvas.to_screen(Vec2::new(-1.0, -1.0)), egui::pos2(0.0, 100.0));
    }

    #[test]
    fn color_conversion_clamps() {
        let c = to_color32(Vec4::new(2.0, -1.0, 0.0, 1.0));
        assert_eq!(c, egui::Color32::from_rgb(255, 0, 0));
    }

    #[test]
    fn sandbox_frame_renders_headless() {
        let ctx = egui::Context::default();
        let mut scene = ParticleScene::with_seed(SimulationSettings::default(), 4);
        scene.add_emitter(Emitter::uniform());
        scene.add_effect(Effect::gravity_well());
        let mut sandbox = Sandbox::new(scene);

        let output = run_frame(&ctx, |ctx| sandbox.frame(ctx));
        assert!(!output.shapes.is_empty());
        // one particle per emitter per pass; egui may run more than one pass
        assert!(sandbox.clock.frame >= 1);
        assert_eq!(sandbox.scene.particle_count() as u64, sandbox.clock.frame);

        run_frame(&ctx, |ctx| sandbox.frame(ctx));
        assert_eq!(sandbox.scene.particle_count() as u64, sandbox.clock.frame);
    }

    #[test]
    fn random_system_paints_headless() {
        let ctx = egui::Context::default();
        let system = RandomSystem::with_seed(50, 9);
        let output = run_frame(&ctx, |ctx| {
            egui::CentralPanel::default().show(ctx, |ui| paint_random_system(ui, &system));
        });
        assert!(!output.shapes.is_empty());
    }
}
