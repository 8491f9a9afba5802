/*
 * Application Module
 *
 * This module defines the nannou application model for the shoal.
 * The window drives the animation loop: `update` fires the frame the loop
 * asked for into a persistent `Draw`, `view` presents it with the control
 * panel on top, and `exit` tears the loop down.
 */

use std::sync::OnceLock;

use nannou::prelude::*;
use nannou_egui::Egui;
use tracing::{info, warn};

use crate::animation::{AnimationLoop, FrameQueue};
use crate::debug::DebugInfo;
use crate::input::{key_pressed, mouse_exited, mouse_moved, raw_window_event, resized, window_bounds};
use crate::params::SimulationParams;
use crate::renderer::{view, NannouSurface};
use crate::theme::Theme;
use crate::ui;

/// Startup settings handed from the command line to the model function.
#[derive(Debug, Clone)]
pub struct Settings {
    pub params: SimulationParams,
    pub seed: Option<u64>,
    pub theme: Theme,
}

static SETTINGS: OnceLock<Settings> = OnceLock::new();

// Main model for the application
pub struct Model {
    pub animation: AnimationLoop<FrameQueue>,
    pub params: SimulationParams,
    pub theme: Theme,
    pub paused: bool,
    pub egui: Egui,
    pub draw: Draw,
    pub debug_info: DebugInfo,
}

/// Open the window and run until it is closed.
pub fn run(settings: Settings) {
    if SETTINGS.set(settings).is_err() {
        warn!("Settings were already installed, keeping the first ones");
    }
    nannou::app(model).update(update).exit(exit).run();
}

// Initialize the model
fn model(app: &App) -> Model {
    let settings = SETTINGS.get().cloned().unwrap_or_else(|| Settings {
        params: SimulationParams::default(),
        seed: None,
        theme: Theme::default(),
    });

    let window_id = app
        .new_window()
        .title("Shoal")
        .size(1280, 800)
        .view(view)
        .mouse_moved(mouse_moved)
        .mouse_exited(mouse_exited)
        .resized(resized)
        .key_pressed(key_pressed)
        .raw_event(raw_window_event)
        .build()
        .expect("failed to build the main window");

    let window = app.window(window_id).expect("main window vanished after creation");
    let egui = Egui::from_window(&window);

    let mut animation = AnimationLoop::new(settings.params.clone(), FrameQueue::new());
    animation.start(Some(window_bounds(app)), settings.seed);

    Model {
        animation,
        params: settings.params,
        theme: settings.theme,
        paused: false,
        egui,
        draw: Draw::new(),
        debug_info: DebugInfo::default(),
    }
}

// Update the model
fn update(app: &App, model: &mut Model, update: Update) {
    model.debug_info.fps = app.fps();
    model.debug_info.frame_time = update.since_last;
    model.egui.set_elapsed_time(update.since_start);

    let actions = ui::update_ui(
        &mut model.egui,
        &mut model.params,
        &mut model.theme,
        &mut model.paused,
        &model.debug_info,
    );

    if actions.params_changed {
        match model.params.validate() {
            Ok(()) => model.animation.set_params(model.params.clone()),
            Err(err) => warn!(%err, "Ignoring invalid parameters from the panel"),
        }
    }
    if actions.reset_flock || actions.num_boids_changed {
        model.animation.reset();
    }

    // While paused the due frame stays queued and the last drawing is kept
    if !model.paused {
        if let Some(handle) = model.animation.scheduler_mut().take_due() {
            model.draw.reset();
            let size = app.window_rect().wh();
            let mut surface = NannouSurface::new(&model.draw, size, model.theme.background());
            if model.animation.on_frame(handle, &mut surface, &model.theme) {
                model.debug_info.frames_drawn += 1;
            }
        }
    }

    model.debug_info.observe(model.animation.world());
}

fn exit(_app: &App, mut model: Model) {
    model.animation.teardown();
    info!(frames = model.debug_info.frames_drawn, "Window closed");
}
