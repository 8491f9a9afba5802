/*
 * World Module
 *
 * Owns the canvas bounds, the flock, the pointer field and the random
 * source, and advances them one frame at a time. Boids are stepped in
 * order and in place, so later boids already see the updated state of
 * earlier ones within the same frame.
 */

use tracing::{debug, info};

use crate::boid::{Boid, Variant};
use crate::params::SimulationParams;
use crate::pointer::{PointerEvent, PointerField};
use crate::rng::{create_rng, SimRng};
use crate::surface::RenderSurface;
use crate::theme::ThemeSource;

/// Pixel size of the drawing surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub width: f32,
    pub height: f32,
}

impl Bounds {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// True when there is no area to simulate in.
    pub fn is_empty(&self) -> bool {
        !(self.width > 0.0 && self.height > 0.0)
    }
}

pub struct World {
    pub boids: Vec<Boid>,
    pub params: SimulationParams,
    pub pointer: PointerField,
    bounds: Bounds,
    rng: SimRng,
}

impl World {
    pub fn new(params: SimulationParams, seed: Option<u64>) -> Self {
        Self {
            boids: Vec::new(),
            params,
            pointer: PointerField::new(),
            bounds: Bounds::new(0.0, 0.0),
            rng: create_rng(seed),
        }
    }

    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    /// Adopt new canvas bounds; boids keep their state and wrap against the new edges.
    pub fn resize(&mut self, bounds: Bounds) {
        debug!(width = bounds.width, height = bounds.height, "Resizing world");
        self.bounds = bounds;
    }

    /// Replace the flock with one highlighted boid followed by `count` normal ones.
    pub fn init(&mut self, count: usize) {
        let bounds = self.bounds;
        let params = &self.params;
        let rng = &mut self.rng;

        self.boids.clear();
        self.boids.reserve(count + 1);
        self.boids.push(Boid::new(0, bounds, Variant::Highlighted, params, rng));
        for id in 1..=count {
            self.boids.push(Boid::new(id, bounds, Variant::Normal, params, rng));
        }

        info!(boids = self.boids.len(), "Initialised flock");
    }

    pub fn handle_pointer(&mut self, event: PointerEvent) {
        self.pointer.track(event);
    }

    /// Clear the surface, then step and draw every boid.
    pub fn frame<S, T>(&mut self, surface: &mut S, theme: &T)
    where
        S: RenderSurface + ?Sized,
        T: ThemeSource + ?Sized,
    {
        surface.clear_rect(0.0, 0.0, self.bounds.width, self.bounds.height);
        self.advance(|boid| boid.render(surface, theme));
    }

    /// Step every boid once without drawing.
    pub fn tick(&mut self) {
        self.advance(|_| {});
    }

    fn advance<F: FnMut(&Boid)>(&mut self, mut on_stepped: F) {
        for i in 0..self.boids.len() {
            let mut boid = self.boids[i];
            boid.step(&self.boids, &self.pointer, self.bounds, &self.params, &mut self.rng);
            self.boids[i] = boid;
            on_stepped(&self.boids[i]);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::{DrawCommand, RecordingSurface};
    use crate::theme::Theme;

    fn world(count: usize) -> World {
        let mut world = World::new(SimulationParams::default(), Some(42));
        world.resize(Bounds::new(800.0, 600.0));
        world.init(count);
        world
    }

    #[test]
    fn init_creates_one_highlighted_boid() {
        let world = world(80);
        assert_eq!(world.boids.len(), 81);
        let highlighted = world
            .boids
            .iter()
            .filter(|boid| boid.variant == Variant::Highlighted)
            .count();
        assert_eq!(highlighted, 1);
    }

    #[test]
    fn init_replaces_the_previous_flock() {
        let mut world = world(10);
        world.init(3);
        assert_eq!(world.boids.len(), 4);
    }

    #[test]
    fn resize_keeps_boids() {
        let mut world = world(5);
        let before = world.boids.clone();
        world.resize(Bounds::new(100.0, 100.0));
        assert_eq!(world.boids, before);
        assert_eq!(world.bounds(), Bounds::new(100.0, 100.0));
    }

    #[test]
    fn frame_clears_then_draws_each_boid() {
        let mut world = world(4);
        let mut surface = RecordingSurface::new();
        world.frame(&mut surface, &Theme::Dark);

        assert_eq!(
            surface.commands[0],
            DrawCommand::ClearRect { x: 0.0, y: 0.0, width: 800.0, height: 600.0 }
        );
        assert_eq!(surface.stroke_count(), 5 * 4);
    }

    #[test]
    fn empty_bounds_are_detected() {
        assert!(Bounds::new(0.0, 10.0).is_empty());
        assert!(Bounds::new(f32::NAN, 10.0).is_empty());
        assert!(!Bounds::new(1.0, 1.0).is_empty());
    }
}
