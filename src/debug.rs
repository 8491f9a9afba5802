/*
 * Debug Information Module
 *
 * Frame statistics shown in the control panel.
 */

use std::time::Duration;

use crate::world::World;

#[derive(Debug, Clone, Default)]
pub struct DebugInfo {
    pub fps: f32,
    pub frame_time: Duration,
    pub frames_drawn: u64,
    pub boid_count: usize,
    pub pointer_active: bool,
    pub pointer_speed: f32,
}

impl DebugInfo {
    /// Refresh the flock-derived fields from the running world.
    pub fn observe(&mut self, world: Option<&World>) {
        match world {
            Some(world) => {
                self.boid_count = world.boids.len();
                self.pointer_active = world.pointer.active;
                self.pointer_speed = world.pointer.speed();
            }
            None => {
                self.boid_count = 0;
                self.pointer_active = false;
                self.pointer_speed = 0.0;
            }
        }
    }
}
