/*
 * UI Module
 *
 * This module contains the egui control panel. It edits the simulation
 * parameters in place and reports what the app has to act on afterwards.
 * Parameter change detection is handled by the SimulationParams struct.
 */

use nannou_egui::{egui, Egui};

use crate::debug::DebugInfo;
use crate::params::SimulationParams;
use crate::theme::Theme;

/// What the panel asked for this frame.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct UiActions {
    pub reset_flock: bool,
    pub num_boids_changed: bool,
    pub params_changed: bool,
}

pub fn update_ui(
    egui: &mut Egui,
    params: &mut SimulationParams,
    theme: &mut Theme,
    paused: &mut bool,
    debug_info: &DebugInfo,
) -> UiActions {
    let mut reset_flock = false;

    // Take a snapshot of current parameter values for change detection
    params.take_snapshot();

    let ctx = egui.begin_frame();

    egui::Window::new("Shoal")
        .default_pos([10.0, 10.0])
        .default_open(false)
        .show(&ctx, |ui| {
            ui.collapsing("Flock", |ui| {
                ui.add(egui::Slider::new(&mut params.num_boids, SimulationParams::get_num_boids_range()).text("Boids"));
                if ui.button("Reset Flock").clicked() {
                    reset_flock = true;
                }
                ui.add(egui::Slider::new(&mut params.max_speed, SimulationParams::get_max_speed_range()).text("Max Speed"));
                ui.add(egui::Slider::new(&mut params.jitter, SimulationParams::get_jitter_range()).text("Jitter"));
            });

            ui.collapsing("Flocking Behavior", |ui| {
                ui.add(egui::Slider::new(&mut params.separation_radius, SimulationParams::get_radius_range()).text("Separation Radius"));
                ui.add(egui::Slider::new(&mut params.alignment_radius, SimulationParams::get_radius_range()).text("Alignment Radius"));
                ui.add(egui::Slider::new(&mut params.cohesion_radius, SimulationParams::get_radius_range()).text("Cohesion Radius"));
                ui.add(egui::Slider::new(&mut params.separation_weight, 0.0..=0.2).text("Separation"));
                ui.add(egui::Slider::new(&mut params.alignment_weight, 0.0..=0.1).text("Alignment"));
                ui.add(egui::Slider::new(&mut params.cohesion_weight, 0.0..=0.005).text("Cohesion"));
            });

            ui.collapsing("Stats", |ui| {
                ui.label(format!("FPS: {:.1}", debug_info.fps));
                ui.label(format!("Frame time: {:.2} ms", debug_info.frame_time.as_secs_f64() * 1000.0));
                ui.label(format!("Frames drawn: {}", debug_info.frames_drawn));
                ui.label(format!("Boids: {}", debug_info.boid_count));
                if debug_info.pointer_active {
                    ui.label(format!("Pointer speed: {:.1}", debug_info.pointer_speed));
                } else {
                    ui.label("Pointer: outside");
                }
            });

            if ui.button(format!("Theme: {} (T)", theme.name())).clicked() {
                *theme = theme.toggled();
            }
            ui.checkbox(paused, "Pause (Space)");
        });

    // Detect parameter changes
    let (num_boids_changed, params_changed) = params.detect_changes();

    UiActions {
        reset_flock,
        num_boids_changed,
        params_changed,
    }
}
