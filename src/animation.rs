/*
 * Animation Module
 *
 * The frame loop as an explicit state machine: the host fires the frame
 * handle it was given, `on_frame` draws one frame and asks for the next.
 * Teardown cancels the outstanding request, stops listening to input and
 * drops the world, after which no frame or event touches simulation state.
 */

use tracing::{debug, info, trace};

use crate::params::SimulationParams;
use crate::pointer::PointerEvent;
use crate::surface::RenderSurface;
use crate::theme::ThemeSource;
use crate::world::{Bounds, World};

/// Ticket for one requested frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FrameHandle(pub u64);

/// "Run before the next display refresh" registration.
pub trait FrameScheduler {
    fn request_frame(&mut self) -> FrameHandle;
    fn cancel_frame(&mut self, handle: FrameHandle);
}

/// Scheduler for hosts that call back once per refresh: keeps the one due handle.
#[derive(Debug, Default)]
pub struct FrameQueue {
    next_id: u64,
    due: Option<FrameHandle>,
}

impl FrameQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Hand the due frame to the host, if any.
    pub fn take_due(&mut self) -> Option<FrameHandle> {
        self.due.take()
    }

    pub fn is_due(&self) -> bool {
        self.due.is_some()
    }
}

impl FrameScheduler for FrameQueue {
    fn request_frame(&mut self) -> FrameHandle {
        self.next_id += 1;
        let handle = FrameHandle(self.next_id);
        self.due = Some(handle);
        handle
    }

    fn cancel_frame(&mut self, handle: FrameHandle) {
        if self.due == Some(handle) {
            self.due = None;
        }
    }
}

/// Input the loop listens to while running.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    Resize(Bounds),
    Pointer(PointerEvent),
}

pub struct AnimationLoop<S: FrameScheduler> {
    params: SimulationParams,
    scheduler: S,
    world: Option<World>,
    pending: Option<FrameHandle>,
    listening: bool,
}

impl<S: FrameScheduler> AnimationLoop<S> {
    pub fn new(params: SimulationParams, scheduler: S) -> Self {
        Self {
            params,
            scheduler,
            world: None,
            pending: None,
            listening: false,
        }
    }

    /// Build the world and request the first frame.
    ///
    /// Does nothing and returns `false` without usable bounds.
    pub fn start(&mut self, bounds: Option<Bounds>, seed: Option<u64>) -> bool {
        let bounds = match bounds {
            Some(bounds) if !bounds.is_empty() => bounds,
            _ => {
                debug!(?bounds, "No drawable area, animation not started");
                return false;
            }
        };

        if self.pending.is_some() {
            self.teardown();
        }

        let mut world = World::new(self.params.clone(), seed);
        world.resize(bounds);
        world.init(self.params.num_boids);
        self.world = Some(world);
        self.listening = true;
        self.pending = Some(self.scheduler.request_frame());

        info!(?seed, width = bounds.width, height = bounds.height, "Animation started");
        true
    }

    /// Run the frame for `handle` if it is the one outstanding, then request the next.
    pub fn on_frame<R, T>(&mut self, handle: FrameHandle, surface: &mut R, theme: &T) -> bool
    where
        R: RenderSurface + ?Sized,
        T: ThemeSource + ?Sized,
    {
        if self.pending != Some(handle) {
            trace!(?handle, "Ignoring stale frame callback");
            return false;
        }
        let Some(world) = self.world.as_mut() else {
            self.pending = None;
            return false;
        };

        world.frame(surface, theme);
        self.pending = Some(self.scheduler.request_frame());
        true
    }

    pub fn handle_input(&mut self, event: InputEvent) {
        if !self.listening {
            trace!(?event, "Input ignored, not listening");
            return;
        }
        let Some(world) = self.world.as_mut() else {
            return;
        };

        match event {
            InputEvent::Resize(bounds) => world.resize(bounds),
            InputEvent::Pointer(pointer) => world.handle_pointer(pointer),
        }
    }

    /// Rebuild the flock with the current agent count, keeping bounds and pointer.
    pub fn reset(&mut self) {
        let count = self.params.num_boids;
        if let Some(world) = self.world.as_mut() {
            world.init(count);
        }
    }

    /// Push live parameter changes into the running world.
    pub fn set_params(&mut self, params: SimulationParams) {
        if let Some(world) = self.world.as_mut() {
            world.params = params.clone();
        }
        self.params = params;
    }

    pub fn teardown(&mut self) {
        if let Some(handle) = self.pending.take() {
            self.scheduler.cancel_frame(handle);
        }
        let was_running = self.world.take().is_some();
        self.listening = false;

        if was_running {
            info!("Animation torn down");
        }
    }

    pub fn is_running(&self) -> bool {
        self.pending.is_some()
    }

    pub fn world(&self) -> Option<&World> {
        self.world.as_ref()
    }

    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    pub fn scheduler_mut(&mut self) -> &mut S {
        &mut self.scheduler
    }
}
