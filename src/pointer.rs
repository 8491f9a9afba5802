/*
 * Pointer Module
 *
 * Tracks the pointer (mouse) as a force source for the flock. Raw move and
 * leave events are folded into a `PointerField` snapshot that every boid
 * reads during its step. Velocity is a plain finite difference between
 * events, not normalised by elapsed time.
 */

use nannou::prelude::*;

/// Raw pointer input, in canvas coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    Move(Vec2),
    Leave,
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PointerField {
    pub position: Option<Vec2>,
    pub last_position: Option<Vec2>,
    pub velocity: Vec2,
    pub active: bool,
}

impl PointerField {
    pub fn new() -> Self {
        Self::default()
    }

    /// An active pointer at `position` already moving with `velocity`.
    pub fn moving(position: Vec2, velocity: Vec2) -> Self {
        Self {
            position: Some(position),
            last_position: Some(position - velocity),
            velocity,
            active: true,
        }
    }

    pub fn track(&mut self, event: PointerEvent) {
        match event {
            PointerEvent::Move(raw) => self.moved(raw),
            PointerEvent::Leave => self.left(),
        }
    }

    fn moved(&mut self, raw: Vec2) {
        // Velocity is measured against the position before the current one,
        // and "last" only takes the current position after that.
        if let Some(last) = self.last_position {
            self.velocity = raw - last;
        }
        self.last_position = self.position;
        self.position = Some(raw);
        self.active = true;
    }

    fn left(&mut self) {
        self.active = false;
        self.velocity = Vec2::ZERO;
    }

    /// Position of the pointer if it should currently act on the flock.
    pub fn active_position(&self) -> Option<Vec2> {
        if self.active {
            self.position
        } else {
            None
        }
    }

    pub fn speed(&self) -> f32 {
        self.velocity.length()
    }
}
