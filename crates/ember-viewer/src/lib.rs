//! Ember Viewer - the sandbox's face toward a rendering host
//!
//! The simulation crates know nothing about windows or widgets. This crate
//! defines the two narrow interfaces a host must provide:
//! - `Canvas`: a draw-point primitive
//! - `Widgets`: immediate-mode buttons, sliders and labels
//!
//! and implements the control panel on top of them, plus egui adapters for
//! hosts that already run an egui context.

pub mod canvas;
pub mod egui_frontend;
pub mod panel;
pub mod stats;

pub use canvas::{draw_random_system, draw_scene, Canvas};
pub use egui_frontend::{
    paint_random_system, paint_scene, show_control_panel, EguiCanvas, EguiWidgets, Sandbox,
};
pub use panel::{ControlPanel, Widgets};
pub use stats::FrameStats;
