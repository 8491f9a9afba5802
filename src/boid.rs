/*
 * Boid Module
 *
 * This module defines the Boid struct and its behavior.
 * Each frame a boid:
 * 1. Reacts to its neighbors (separation, alignment, cohesion)
 * 2. Picks up a little random jitter
 * 3. Reacts to the pointer field (orbit or flee)
 * 4. Clamps its speed, moves, and wraps around the canvas edges
 *
 * Boids are drawn as a four-stroke fish outline pointing along their velocity.
 */

use nannou::prelude::*;
use rand::Rng;

use crate::params::SimulationParams;
use crate::physics;
use crate::pointer::PointerField;
use crate::surface::{LineCap, LineJoin, RenderSurface};
use crate::theme::ThemeSource;
use crate::world::Bounds;

const LINE_WIDTH: f32 = 2.0;

/// Render distinction only; both variants obey the same rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Variant {
    Normal,
    Highlighted,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Boid {
    pub id: usize,
    pub position: Vec2,
    pub velocity: Vec2,
    pub size: f32,
    pub variant: Variant,
}

impl Boid {
    /// A boid placed uniformly over `bounds` with a random initial velocity.
    pub fn new<R: Rng>(id: usize, bounds: Bounds, variant: Variant, params: &SimulationParams, rng: &mut R) -> Self {
        let position = vec2(
            rng.gen::<f32>() * bounds.width,
            rng.gen::<f32>() * bounds.height,
        );
        let velocity = vec2(
            (rng.gen::<f32>() - 0.5) * 2.0 * params.initial_speed,
            (rng.gen::<f32>() - 0.5) * 2.0 * params.initial_speed,
        );
        Self::with_state(id, position, velocity, params.boid_size, variant)
    }

    pub fn with_state(id: usize, position: Vec2, velocity: Vec2, size: f32, variant: Variant) -> Self {
        Self {
            id,
            position,
            velocity,
            size,
            variant,
        }
    }

    /// Direction of travel in radians.
    pub fn heading(&self) -> f32 {
        self.velocity.y.atan2(self.velocity.x)
    }

    pub fn speed(&self) -> f32 {
        self.velocity.length()
    }

    /// Advance one frame against the whole flock, which may include this boid.
    pub fn step<R: Rng>(
        &mut self,
        flock: &[Boid],
        pointer: &PointerField,
        bounds: Bounds,
        params: &SimulationParams,
        rng: &mut R,
    ) {
        self.velocity += physics::neighbor_forces(self, flock, params);
        self.velocity += physics::jitter(rng, params.jitter);
        physics::apply_pointer(self.position, &mut self.velocity, pointer);
        self.velocity = physics::limit_speed(self.velocity, params.max_speed);

        self.position += self.velocity;
        self.wrap_edges(bounds);
    }

    // Re-enter from the opposite edge once fully past one, with a margin of `size`
    pub fn wrap_edges(&mut self, bounds: Bounds) {
        let s = self.size;

        if self.position.x < -s {
            self.position.x = bounds.width + s;
        }
        if self.position.x > bounds.width + s {
            self.position.x = -s;
        }

        if self.position.y < -s {
            self.position.y = bounds.height + s;
        }
        if self.position.y > bounds.height + s {
            self.position.y = -s;
        }
    }

    // Draw the boid
    pub fn render<S, T>(&self, surface: &mut S, theme: &T)
    where
        S: RenderSurface + ?Sized,
        T: ThemeSource + ?Sized,
    {
        surface.save();
        surface.translate(self.position.x, self.position.y);
        surface.rotate(self.heading());

        surface.set_stroke_style(theme.stroke_color(self.variant));
        surface.set_line_width(LINE_WIDTH);
        surface.set_line_cap(LineCap::Round);
        surface.set_line_join(LineJoin::Round);

        let s = self.size;

        // Body, nose to tail on each side
        for side in [-1.0, 1.0] {
            surface.begin_path();
            surface.move_to(s * 1.1, 0.0);
            surface.quadratic_curve_to(s * 0.1, side * s * 0.95, -s * 0.95, side * s * 0.8);
            surface.stroke();
        }

        // Ribs, crossing over behind the body
        for side in [-1.0, 1.0] {
            surface.begin_path();
            surface.move_to(-s * 0.35, side * s * 0.7);
            surface.quadratic_curve_to(s * 0.15, side * s * 0.05, -s * 1.1, -side * s * 0.35);
            surface.stroke();
        }

        surface.restore();
    }
}
