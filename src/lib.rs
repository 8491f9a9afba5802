/*
 * Shoal - Module Definitions
 *
 * This file defines the module structure for the shoal simulation.
 * The simulation core (boid, physics, pointer, world, animation, surface,
 * theme) has no window dependency beyond nannou's math and color types;
 * the remaining modules wire it into a nannou window.
 */

// Re-export key components for easier access
pub use animation::{AnimationLoop, FrameHandle, FrameQueue, FrameScheduler, InputEvent};
pub use boid::{Boid, Variant};
pub use params::{ConfigError, SimulationParams};
pub use pointer::{PointerEvent, PointerField};
pub use surface::{DrawCommand, RecordingSurface, RenderSurface};
pub use theme::{Theme, ThemeSource};
pub use world::{Bounds, World};

// Define modules
pub mod animation;
pub mod app;
pub mod boid;
pub mod debug;
pub mod input;
pub mod params;
pub mod physics;
pub mod pointer;
pub mod renderer;
pub mod rng;
pub mod surface;
pub mod theme;
pub mod ui;
pub mod world;
