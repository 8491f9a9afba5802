/*
 * Input Module
 *
 * This module handles window events for the shoal simulation.
 * nannou reports the cursor in window space (centre origin, y up); the
 * simulation works in canvas space (top-left origin, y down), so positions
 * are converted before being handed to the animation loop.
 *
 * Features:
 * - Pointer tracking for the orbit/flee field
 * - Resize notifications
 * - Theme toggle (T), pause (Space) and flock reset (R)
 * - Forwarding raw events to egui
 */

use nannou::prelude::*;

use crate::animation::InputEvent;
use crate::app::Model;
use crate::pointer::PointerEvent;
use crate::world::Bounds;

/// Convert a window-space point into canvas coordinates for a window of `size`.
pub fn window_to_canvas(pos: Point2, size: Vec2) -> Vec2 {
    vec2(pos.x + size.x / 2.0, size.y / 2.0 - pos.y)
}

pub fn window_bounds(app: &App) -> Bounds {
    let rect = app.window_rect();
    Bounds::new(rect.w(), rect.h())
}

// Mouse moved event handler
pub fn mouse_moved(app: &App, model: &mut Model, pos: Point2) {
    // Pointer over the control panel should not stir the flock
    if model.egui.ctx().is_pointer_over_area() {
        return;
    }
    let canvas_pos = window_to_canvas(pos, app.window_rect().wh());
    model
        .animation
        .handle_input(InputEvent::Pointer(PointerEvent::Move(canvas_pos)));
}

// Mouse left the window
pub fn mouse_exited(_app: &App, model: &mut Model) {
    model
        .animation
        .handle_input(InputEvent::Pointer(PointerEvent::Leave));
}

// Window resized
pub fn resized(_app: &App, model: &mut Model, size: Vec2) {
    model
        .animation
        .handle_input(InputEvent::Resize(Bounds::new(size.x, size.y)));
}

pub fn key_pressed(_app: &App, model: &mut Model, key: Key) {
    if model.egui.ctx().wants_keyboard_input() {
        return;
    }
    match key {
        Key::T => model.theme = model.theme.toggled(),
        Key::Space => model.paused = !model.paused,
        Key::R => model.animation.reset(),
        _ => {}
    }
}

// Handle raw window events for egui
pub fn raw_window_event(_app: &App, model: &mut Model, event: &nannou::winit::event::WindowEvent) {
    model.egui.handle_raw_event(event);
}
