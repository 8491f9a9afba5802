/*
 * Simulation Parameters Module
 *
 * This module defines the SimulationParams struct that contains all the
 * adjustable parameters of the flocking model. These parameters can be
 * modified through the UI or the command line. It also provides validation
 * and change detection so the app knows when the flock has to be rebuilt.
 */

use thiserror::Error;

/// Rejected parameter values.
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("{name} must be a finite positive number, got {value}")]
    NotPositive { name: &'static str, value: f32 },
    #[error("{name} must be a finite non-negative number, got {value}")]
    Negative { name: &'static str, value: f32 },
}

// Parameters for the simulation that can be adjusted via UI
#[derive(Debug, Clone, PartialEq)]
pub struct SimulationParams {
    pub num_boids: usize,
    pub boid_size: f32,
    pub max_speed: f32,
    pub initial_speed: f32,
    pub separation_radius: f32,
    pub alignment_radius: f32,
    pub cohesion_radius: f32,
    pub separation_weight: f32,
    pub alignment_weight: f32,
    pub cohesion_weight: f32,
    pub jitter: f32,

    // Internal state for tracking changes
    previous_values: Option<ParamSnapshot>,
}

// A snapshot of parameter values used for change detection
#[derive(Debug, Clone, PartialEq)]
struct ParamSnapshot {
    num_boids: usize,
    boid_size: f32,
    max_speed: f32,
    separation_radius: f32,
    alignment_radius: f32,
    cohesion_radius: f32,
    separation_weight: f32,
    alignment_weight: f32,
    cohesion_weight: f32,
    jitter: f32,
}

impl Default for SimulationParams {
    fn default() -> Self {
        Self {
            num_boids: 80,
            boid_size: 8.0,
            max_speed: 2.0,
            initial_speed: 1.0,
            separation_radius: 30.0,
            alignment_radius: 50.0,
            cohesion_radius: 50.0,
            separation_weight: 0.03,
            alignment_weight: 0.01,
            cohesion_weight: 0.0005,
            jitter: 0.05,
            previous_values: None,
        }
    }
}

impl SimulationParams {
    /// Check every tunable for values that would break the force model.
    pub fn validate(&self) -> Result<(), ConfigError> {
        positive("boid_size", self.boid_size)?;
        positive("max_speed", self.max_speed)?;
        non_negative("initial_speed", self.initial_speed)?;
        non_negative("separation_radius", self.separation_radius)?;
        non_negative("alignment_radius", self.alignment_radius)?;
        non_negative("cohesion_radius", self.cohesion_radius)?;
        non_negative("separation_weight", self.separation_weight)?;
        non_negative("alignment_weight", self.alignment_weight)?;
        non_negative("cohesion_weight", self.cohesion_weight)?;
        non_negative("jitter", self.jitter)?;
        Ok(())
    }

    // Take a snapshot of current parameter values for change detection
    pub fn take_snapshot(&mut self) {
        self.previous_values = Some(self.snapshot());
    }

    // Check if any parameters have changed since the last snapshot
    // Returns a tuple of (num_boids_changed, any_changed)
    pub fn detect_changes(&self) -> (bool, bool) {
        // If we don't have previous values, nothing has changed
        match &self.previous_values {
            Some(prev) => {
                let num_boids_changed = self.num_boids != prev.num_boids;
                (num_boids_changed, *prev != self.snapshot())
            }
            None => (false, false),
        }
    }

    fn snapshot(&self) -> ParamSnapshot {
        ParamSnapshot {
            num_boids: self.num_boids,
            boid_size: self.boid_size,
            max_speed: self.max_speed,
            separation_radius: self.separation_radius,
            alignment_radius: self.alignment_radius,
            cohesion_radius: self.cohesion_radius,
            separation_weight: self.separation_weight,
            alignment_weight: self.alignment_weight,
            cohesion_weight: self.cohesion_weight,
            jitter: self.jitter,
        }
    }

    // Get parameter ranges for UI sliders
    pub fn get_num_boids_range() -> std::ops::RangeInclusive<usize> {
        0..=1000
    }

    pub fn get_max_speed_range() -> std::ops::RangeInclusive<f32> {
        0.5..=10.0
    }

    pub fn get_radius_range() -> std::ops::RangeInclusive<f32> {
        0.0..=200.0
    }

    pub fn get_jitter_range() -> std::ops::RangeInclusive<f32> {
        0.0..=0.5
    }
}

fn positive(name: &'static str, value: f32) -> Result<(), ConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::NotPositive { name, value })
    }
}

fn non_negative(name: &'static str, value: f32) -> Result<(), ConfigError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(ConfigError::Negative { name, value })
    }
}
