/*
 * Render Surface Module
 *
 * The immediate-mode 2D drawing interface the flock draws itself onto.
 * Coordinates are canvas coordinates: origin at the top-left corner,
 * x grows to the right and y grows downwards.
 *
 * Two implementations exist: the nannou adapter in `renderer` used by the
 * desktop app, and `RecordingSurface` here which keeps the command stream
 * for headless runs and inspection.
 */

use nannou::color::Rgb;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineCap {
    Butt,
    Round,
    Square,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineJoin {
    Miter,
    Round,
    Bevel,
}

/// A 2D drawing context over a pixel area.
///
/// Transforms set with `translate`/`rotate` apply to path points at the time
/// they are added, and are saved/restored as a stack.
pub trait RenderSurface {
    fn clear_rect(&mut self, x: f32, y: f32, width: f32, height: f32);
    fn save(&mut self);
    fn restore(&mut self);
    fn translate(&mut self, x: f32, y: f32);
    fn rotate(&mut self, angle: f32);
    fn set_stroke_style(&mut self, color: Rgb<u8>);
    fn set_line_width(&mut self, width: f32);
    fn set_line_cap(&mut self, cap: LineCap);
    fn set_line_join(&mut self, join: LineJoin);
    fn begin_path(&mut self);
    fn move_to(&mut self, x: f32, y: f32);
    fn quadratic_curve_to(&mut self, cx: f32, cy: f32, x: f32, y: f32);
    fn stroke(&mut self);
}

/// One call made against a `RecordingSurface`.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    ClearRect { x: f32, y: f32, width: f32, height: f32 },
    Save,
    Restore,
    Translate { x: f32, y: f32 },
    Rotate(f32),
    StrokeStyle(Rgb<u8>),
    LineWidth(f32),
    LineCap(LineCap),
    LineJoin(LineJoin),
    BeginPath,
    MoveTo { x: f32, y: f32 },
    QuadraticCurveTo { cx: f32, cy: f32, x: f32, y: f32 },
    Stroke,
}

/// Surface that records every call instead of rasterising.
#[derive(Debug, Default)]
pub struct RecordingSurface {
    pub commands: Vec<DrawCommand>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.commands.clear();
    }

    /// Number of `stroke` calls recorded so far.
    pub fn stroke_count(&self) -> usize {
        self.commands
            .iter()
            .filter(|command| matches!(command, DrawCommand::Stroke))
            .count()
    }
}

impl RenderSurface for RecordingSurface {
    fn clear_rect(&mut self, x: f32, y: f32, width: f32, height: f32) {
        self.commands.push(DrawCommand::ClearRect { x, y, width, height });
    }

    fn save(&mut self) {
        self.commands.push(DrawCommand::Save);
    }

    fn restore(&mut self) {
        self.commands.push(DrawCommand::Restore);
    }

    fn translate(&mut self, x: f32, y: f32) {
        self.commands.push(DrawCommand::Translate { x, y });
    }

    fn rotate(&mut self, angle: f32) {
        self.commands.push(DrawCommand::Rotate(angle));
    }

    fn set_stroke_style(&mut self, color: Rgb<u8>) {
        self.commands.push(DrawCommand::StrokeStyle(color));
    }

    fn set_line_width(&mut self, width: f32) {
        self.commands.push(DrawCommand::LineWidth(width));
    }

    fn set_line_cap(&mut self, cap: LineCap) {
        self.commands.push(DrawCommand::LineCap(cap));
    }

    fn set_line_join(&mut self, join: LineJoin) {
        self.commands.push(DrawCommand::LineJoin(join));
    }

    fn begin_path(&mut self) {
        self.commands.push(DrawCommand::BeginPath);
    }

    fn move_to(&mut self, x: f32, y: f32) {
        self.commands.push(DrawCommand::MoveTo { x, y });
    }

    fn quadratic_curve_to(&mut self, cx: f32, cy: f32, x: f32, y: f32) {
        self.commands.push(DrawCommand::QuadraticCurveTo { cx, cy, x, y });
    }

    fn stroke(&mut self) {
        self.commands.push(DrawCommand::Stroke);
    }
}
