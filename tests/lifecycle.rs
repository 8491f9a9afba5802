use nannou::prelude::vec2;
use shoal::{
    AnimationLoop, Bounds, FrameHandle, FrameScheduler, InputEvent, PointerEvent, RecordingSurface,
    SimulationParams, Theme,
};

/// Scheduler that records every registration and cancellation.
#[derive(Default)]
struct SpyScheduler {
    requested: Vec<FrameHandle>,
    cancelled: Vec<FrameHandle>,
}

impl SpyScheduler {
    fn last_requested(&self) -> FrameHandle {
        *self.requested.last().expect("no frame requested")
    }
}

impl FrameScheduler for SpyScheduler {
    fn request_frame(&mut self) -> FrameHandle {
        let handle = FrameHandle(self.requested.len() as u64 + 1);
        self.requested.push(handle);
        handle
    }

    fn cancel_frame(&mut self, handle: FrameHandle) {
        self.cancelled.push(handle);
    }
}

fn running_loop() -> AnimationLoop<SpyScheduler> {
    let mut animation = AnimationLoop::new(SimulationParams::default(), SpyScheduler::default());
    assert!(animation.start(Some(Bounds::new(800.0, 600.0)), Some(31)));
    animation
}

fn fire(animation: &mut AnimationLoop<SpyScheduler>, surface: &mut RecordingSurface) -> bool {
    let handle = animation.scheduler().last_requested();
    animation.on_frame(handle, surface, &Theme::Dark)
}

#[test]
fn loop_runs_one_frame_per_callback() {
    let mut animation = running_loop();
    let mut surface = RecordingSurface::new();

    for _ in 0..5 {
        assert!(fire(&mut animation, &mut surface));
    }
    // the initial request plus one per frame
    assert_eq!(animation.scheduler().requested.len(), 6);
    // 81 fish, four strokes each, every frame
    assert_eq!(surface.stroke_count(), 5 * 81 * 4);
}

#[test]
fn firing_an_old_handle_twice_does_nothing() {
    let mut animation = running_loop();
    let mut surface = RecordingSurface::new();
    let first = animation.scheduler().last_requested();

    assert!(animation.on_frame(first, &mut surface, &Theme::Dark));
    surface.clear();
    assert!(!animation.on_frame(first, &mut surface, &Theme::Dark));
    assert!(surface.commands.is_empty());
}

#[test]
fn no_straggler_frame_after_teardown() {
    let mut animation = running_loop();
    let mut surface = RecordingSurface::new();
    assert!(fire(&mut animation, &mut surface));

    let outstanding = animation.scheduler().last_requested();
    animation.teardown();

    assert_eq!(animation.scheduler().cancelled, vec![outstanding]);
    assert!(!animation.is_running());

    surface.clear();
    assert!(!animation.on_frame(outstanding, &mut surface, &Theme::Dark));
    assert!(surface.commands.is_empty());
    assert_eq!(animation.scheduler().requested.len(), 2);
}

#[test]
fn input_after_teardown_changes_nothing() {
    let mut animation = running_loop();
    animation.teardown();

    animation.handle_input(InputEvent::Pointer(PointerEvent::Move(vec2(10.0, 10.0))));
    animation.handle_input(InputEvent::Pointer(PointerEvent::Leave));
    animation.handle_input(InputEvent::Resize(Bounds::new(10.0, 10.0)));

    assert!(animation.world().is_none());
    assert_eq!(animation.scheduler().requested.len(), 1);
}

#[test]
fn pointer_events_reach_the_flock_while_running() {
    let mut animation = running_loop();
    for x in [100.0, 110.0, 125.0] {
        animation.handle_input(InputEvent::Pointer(PointerEvent::Move(vec2(x, 300.0))));
    }

    let world = animation.world().expect("world is running");
    assert!(world.pointer.active);
    assert_eq!(world.pointer.velocity, vec2(25.0, 0.0));
}

#[test]
fn resizing_keeps_the_flock() {
    let mut animation = running_loop();
    let before = animation.world().expect("world is running").boids.clone();

    animation.handle_input(InputEvent::Resize(Bounds::new(1024.0, 768.0)));

    let world = animation.world().expect("world is running");
    assert_eq!(world.bounds(), Bounds::new(1024.0, 768.0));
    assert_eq!(world.boids, before);
}

#[test]
fn starting_without_a_surface_schedules_nothing() {
    let mut animation = AnimationLoop::new(SimulationParams::default(), SpyScheduler::default());
    assert!(!animation.start(None, Some(1)));
    assert!(animation.scheduler().requested.is_empty());
    assert!(animation.world().is_none());
}
