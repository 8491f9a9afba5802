/*
 * Physics Module
 *
 * The force model behind a boid step:
 * 1. Separation, alignment and cohesion against every other boid (O(n) per boid)
 * 2. Uniform per-axis jitter that keeps the flock from settling
 * 3. The pointer field: flee from a fast pointer up close, otherwise orbit it
 * 4. Speed clamping
 *
 * Every term that would divide by a distance is skipped when that distance
 * is zero, so coincident boids or a pointer sitting on a boid never produce
 * NaN velocities.
 */

use nannou::prelude::*;
use rand::Rng;

use crate::boid::Boid;
use crate::params::SimulationParams;
use crate::pointer::PointerField;

// Pointer field constants
pub const ATTRACTION_RADIUS: f32 = 250.0;
pub const FLEE_RADIUS: f32 = 100.0;
pub const FLEE_SPEED: f32 = 5.0;
pub const FLEE_FORCE: f32 = 0.15;
pub const ORBIT_RADIUS: f32 = 150.0;
pub const ORBIT_FORCE: f32 = 0.03;
pub const ORBIT_SPRING: f32 = 0.003;
pub const DRAG_SPEED: f32 = 1.0;
pub const DRAG_FORCE: f32 = 0.005;
pub const SPEED_BOOST: f32 = 0.5;

/// Which pointer behaviour applied to a boid this frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerMode {
    Flee,
    Orbit,
}

/// Velocity change from separation, alignment and cohesion.
///
/// `boid` itself may be part of `flock`; it is recognised by id and skipped.
pub fn neighbor_forces(boid: &Boid, flock: &[Boid], params: &SimulationParams) -> Vec2 {
    let mut separation = Vec2::ZERO;
    let mut alignment = Vec2::ZERO;
    let mut cohesion = Vec2::ZERO;
    let mut separation_count = 0usize;
    let mut alignment_count = 0usize;
    let mut cohesion_count = 0usize;

    for other in flock {
        if other.id == boid.id {
            continue;
        }

        let offset = boid.position - other.position;
        let dist = offset.length();

        if dist > 0.0 && dist < params.separation_radius {
            separation += offset / dist;
            separation_count += 1;
        }

        if dist < params.alignment_radius {
            alignment += other.velocity;
            alignment_count += 1;
        }

        if dist < params.cohesion_radius {
            cohesion += other.position;
            cohesion_count += 1;
        }
    }

    let mut delta = Vec2::ZERO;
    let mut velocity = boid.velocity;

    // Terms apply in order, each seeing the velocity left by the previous one
    if separation_count > 0 {
        let push = separation / separation_count as f32 * params.separation_weight;
        velocity += push;
        delta += push;
    }

    if alignment_count > 0 {
        let average = alignment / alignment_count as f32;
        let steer = (average - velocity) * params.alignment_weight;
        velocity += steer;
        delta += steer;
    }

    if cohesion_count > 0 {
        let centroid = cohesion / cohesion_count as f32;
        delta += (centroid - boid.position) * params.cohesion_weight;
    }

    delta
}

/// Independent uniform noise in `[-amplitude, amplitude]` on each axis.
pub fn jitter<R: Rng>(rng: &mut R, amplitude: f32) -> Vec2 {
    if amplitude <= 0.0 {
        return Vec2::ZERO;
    }
    vec2(
        rng.gen_range(-amplitude..=amplitude),
        rng.gen_range(-amplitude..=amplitude),
    )
}

/// Apply the pointer field to `velocity` for a boid at `position`.
///
/// Returns the mode that was applied, or `None` when the pointer is inactive
/// or out of range.
pub fn apply_pointer(position: Vec2, velocity: &mut Vec2, pointer: &PointerField) -> Option<PointerMode> {
    let pointer_position = pointer.active_position()?;

    let d = position - pointer_position;
    let dist = d.length();
    if dist >= ATTRACTION_RADIUS {
        return None;
    }

    let pointer_speed = pointer.speed();
    let mode = if pointer_speed > FLEE_SPEED && dist < FLEE_RADIUS {
        if dist > 0.0 {
            *velocity += d / dist * FLEE_FORCE;
        }
        PointerMode::Flee
    } else {
        if dist > 0.0 {
            let radial = d / dist;
            let tangent = vec2(-radial.y, radial.x);
            *velocity += tangent * ORBIT_FORCE * (1.0 - dist / ATTRACTION_RADIUS);

            // Spring toward the orbit ring from either side
            let spring = (dist - ORBIT_RADIUS) * ORBIT_SPRING;
            *velocity -= radial * spring;
        }

        if pointer_speed > DRAG_SPEED {
            *velocity += pointer.velocity * DRAG_FORCE;
        }
        PointerMode::Orbit
    };

    // Closer boids get faster
    *velocity *= 1.0 + (1.0 - dist / ATTRACTION_RADIUS) * SPEED_BOOST;

    Some(mode)
}

/// Rescale `velocity` down to `max_speed` if it is faster, keeping its direction.
pub fn limit_speed(velocity: Vec2, max_speed: f32) -> Vec2 {
    let speed = velocity.length();
    if speed > max_speed {
        velocity / speed * max_speed
    } else {
        velocity
    }
}
