/*
 * Renderer Module
 *
 * Bridges the canvas-style `RenderSurface` onto nannou's `Draw` API.
 *
 * nannou draws in window space: origin at the window centre, y pointing up.
 * The surface keeps its own canvas-space transform stack, applies it to path
 * points as they are added, and converts to window space only when stroking.
 * Quadratic curves are flattened into polylines.
 */

use nannou::prelude::*;
use tracing::error;

use crate::app::Model;
use crate::surface::{LineCap, LineJoin, RenderSurface};

// Segments used to flatten one quadratic curve
const CURVE_SEGMENTS: usize = 12;

// Canvas transform: p -> origin + R(angle) * p
#[derive(Debug, Clone, Copy, PartialEq)]
struct Transform {
    origin: Vec2,
    angle: f32,
}

impl Transform {
    const IDENTITY: Transform = Transform {
        origin: Vec2::ZERO,
        angle: 0.0,
    };

    fn apply(&self, p: Vec2) -> Vec2 {
        let (sin, cos) = self.angle.sin_cos();
        self.origin + vec2(p.x * cos - p.y * sin, p.x * sin + p.y * cos)
    }
}

pub struct NannouSurface<'a> {
    draw: &'a Draw,
    size: Vec2,
    background: Rgb<u8>,
    transform: Transform,
    saved: Vec<Transform>,
    stroke_color: Rgb<u8>,
    line_width: f32,
    line_cap: LineCap,
    line_join: LineJoin,
    subpaths: Vec<Vec<Vec2>>,
}

impl<'a> NannouSurface<'a> {
    /// A surface of `size` pixels whose clears paint `background`.
    pub fn new(draw: &'a Draw, size: Vec2, background: Rgb<u8>) -> Self {
        Self {
            draw,
            size,
            background,
            transform: Transform::IDENTITY,
            saved: Vec::new(),
            stroke_color: rgb(0, 0, 0),
            line_width: 1.0,
            line_cap: LineCap::Butt,
            line_join: LineJoin::Miter,
            subpaths: Vec::new(),
        }
    }

    // Canvas space (top-left origin, y down) to window space (centre origin, y up)
    fn to_window(&self, p: Vec2) -> Vec2 {
        vec2(p.x - self.size.x / 2.0, self.size.y / 2.0 - p.y)
    }

    fn cursor(&self) -> Option<Vec2> {
        self.subpaths.last().and_then(|path| path.last().copied())
    }
}

impl<'a> RenderSurface for NannouSurface<'a> {
    fn clear_rect(&mut self, x: f32, y: f32, width: f32, height: f32) {
        let centre = self.to_window(vec2(x + width / 2.0, y + height / 2.0));
        self.draw
            .rect()
            .xy(centre)
            .w_h(width, height)
            .color(self.background);
    }

    fn save(&mut self) {
        self.saved.push(self.transform);
    }

    fn restore(&mut self) {
        if let Some(transform) = self.saved.pop() {
            self.transform = transform;
        }
    }

    fn translate(&mut self, x: f32, y: f32) {
        self.transform.origin = self.transform.apply(vec2(x, y));
    }

    fn rotate(&mut self, angle: f32) {
        self.transform.angle += angle;
    }

    fn set_stroke_style(&mut self, color: Rgb<u8>) {
        self.stroke_color = color;
    }

    fn set_line_width(&mut self, width: f32) {
        self.line_width = width;
    }

    fn set_line_cap(&mut self, cap: LineCap) {
        self.line_cap = cap;
    }

    fn set_line_join(&mut self, join: LineJoin) {
        self.line_join = join;
    }

    fn begin_path(&mut self) {
        self.subpaths.clear();
    }

    fn move_to(&mut self, x: f32, y: f32) {
        let point = self.transform.apply(vec2(x, y));
        self.subpaths.push(vec![point]);
    }

    fn quadratic_curve_to(&mut self, cx: f32, cy: f32, x: f32, y: f32) {
        let control = self.transform.apply(vec2(cx, cy));
        let end = self.transform.apply(vec2(x, y));
        let Some(start) = self.cursor() else {
            // No current point: the control point starts the subpath
            self.subpaths.push(vec![control, end]);
            return;
        };

        if let Some(path) = self.subpaths.last_mut() {
            for i in 1..=CURVE_SEGMENTS {
                let t = i as f32 / CURVE_SEGMENTS as f32;
                let u = 1.0 - t;
                path.push(start * (u * u) + control * (2.0 * u * t) + end * (t * t));
            }
        }
    }

    fn stroke(&mut self) {
        for path in &self.subpaths {
            if path.len() < 2 {
                continue;
            }
            let points: Vec<Vec2> = path.iter().map(|&p| self.to_window(p)).collect();

            let line = self.draw.polyline().weight(self.line_width);
            let line = match self.line_cap {
                LineCap::Butt => line.caps_butt(),
                LineCap::Round => line.caps_round(),
                LineCap::Square => line.caps_square(),
            };
            let line = match self.line_join {
                LineJoin::Miter => line.join_miter(),
                LineJoin::Round => line.join_round(),
                LineJoin::Bevel => line.join_bevel(),
            };
            line.points(points).color(self.stroke_color);
        }
    }
}

// Render the model
pub fn view(app: &App, model: &Model, frame: Frame) {
    // The flock was drawn into the model's Draw during update
    if let Err(err) = model.draw.to_frame(app, &frame) {
        error!(?err, "Failed to render flock");
    }

    // Draw the egui UI
    if let Err(err) = model.egui.draw_to_frame(&frame) {
        error!(?err, "Failed to render control panel");
    }
}
