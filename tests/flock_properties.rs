use nannou::prelude::{vec2, Vec2};
use proptest::prelude::*;
use shoal::rng::create_rng;
use shoal::{Boid, Bounds, PointerEvent, PointerField, SimulationParams, Variant, World};

const EPSILON: f32 = 1e-4;

fn quiet_params() -> SimulationParams {
    let mut params = SimulationParams::default();
    params.jitter = 0.0;
    params
}

fn assert_contained(world: &World) {
    let bounds = world.bounds();
    for boid in &world.boids {
        let s = boid.size;
        assert!(
            boid.position.x >= -s && boid.position.x <= bounds.width + s,
            "x out of range: {:?}",
            boid.position
        );
        assert!(
            boid.position.y >= -s && boid.position.y <= bounds.height + s,
            "y out of range: {:?}",
            boid.position
        );
    }
}

#[test]
fn speed_and_position_stay_bounded_with_a_busy_pointer() {
    let mut world = World::new(SimulationParams::default(), Some(2024));
    world.resize(Bounds::new(640.0, 480.0));
    world.init(80);

    for frame in 0..300 {
        // sweep fast enough to trigger both flee and orbit
        let x = (frame as f32 * 7.0) % 640.0;
        world.handle_pointer(PointerEvent::Move(vec2(x, 240.0)));
        world.tick();

        for boid in &world.boids {
            assert!(boid.velocity.is_finite());
            assert!(boid.speed() <= world.params.max_speed + EPSILON);
        }
        assert_contained(&world);
    }
}

#[test]
fn shrinking_the_canvas_wraps_boids_back_inside() {
    let mut world = World::new(SimulationParams::default(), Some(8));
    world.resize(Bounds::new(1000.0, 1000.0));
    world.init(40);
    world.resize(Bounds::new(200.0, 150.0));
    world.tick();
    assert_contained(&world);
}

#[test]
fn boid_just_past_the_edge_reenters_at_the_far_margin() {
    let size = 8.0;
    let width = 500.0;
    let mut boid = Boid::with_state(0, vec2(width + size + 1.0, 10.0), Vec2::ZERO, size, Variant::Normal);
    boid.wrap_edges(Bounds::new(width, 100.0));
    assert_eq!(boid.position.x, -size);
}

#[test]
fn coincident_boids_never_produce_nan() {
    let params = quiet_params();
    let mut rng = create_rng(Some(1));
    let a = Boid::with_state(0, vec2(50.0, 50.0), vec2(1.0, 0.0), 8.0, Variant::Normal);
    let b = Boid::with_state(1, vec2(50.0, 50.0), vec2(0.0, 1.0), 8.0, Variant::Normal);
    let flock = [a, b];

    let mut stepped = a;
    stepped.step(&flock, &PointerField::new(), Bounds::new(100.0, 100.0), &params, &mut rng);
    assert!(stepped.velocity.is_finite());
    assert!(stepped.position.is_finite());
}

#[test]
fn pointer_exactly_on_a_boid_never_produces_nan() {
    let params = quiet_params();
    let mut rng = create_rng(Some(1));
    for pointer_velocity in [Vec2::ZERO, vec2(0.5, 0.0), vec2(3.0, 0.0), vec2(12.0, 0.0)] {
        let mut boid = Boid::with_state(0, vec2(50.0, 50.0), vec2(1.0, 1.0), 8.0, Variant::Normal);
        let pointer = PointerField::moving(vec2(50.0, 50.0), pointer_velocity);
        boid.step(&[], &pointer, Bounds::new(100.0, 100.0), &params, &mut rng);
        assert!(boid.velocity.is_finite(), "NaN with pointer velocity {pointer_velocity:?}");
    }
}

#[test]
fn separation_pushes_each_boid_away_from_the_other() {
    let mut params = quiet_params();
    params.alignment_weight = 0.0;
    params.cohesion_weight = 0.0;
    let mut rng = create_rng(Some(1));
    let bounds = Bounds::new(400.0, 400.0);

    let a = Boid::with_state(0, vec2(100.0, 100.0), Vec2::ZERO, 8.0, Variant::Normal);
    let b = Boid::with_state(1, vec2(110.0, 120.0), Vec2::ZERO, 8.0, Variant::Normal);
    let flock = [a, b];
    let line = (b.position - a.position).normalize();

    let mut next_a = a;
    next_a.step(&flock, &PointerField::new(), bounds, &params, &mut rng);
    let mut next_b = b;
    next_b.step(&flock, &PointerField::new(), bounds, &params, &mut rng);

    // anti-parallel to the line for a, parallel for b, both 0.03 long
    assert!((next_a.velocity + line * 0.03).length() < EPSILON);
    assert!((next_b.velocity - line * 0.03).length() < EPSILON);
}

#[test]
fn fast_pointer_up_close_makes_the_boid_flee() {
    let params = quiet_params();
    let mut rng = create_rng(Some(1));
    let mut boid = Boid::with_state(0, vec2(300.0, 250.0), Vec2::ZERO, 8.0, Variant::Normal);
    let pointer = PointerField::moving(vec2(300.0, 200.0), vec2(6.0, 0.0));

    boid.step(&[], &pointer, Bounds::new(600.0, 600.0), &params, &mut rng);

    // straight away from the pointer: 0.15 boosted by 1 + (1 - 50/250) * 0.5
    assert!(boid.velocity.x.abs() < EPSILON);
    assert!((boid.velocity.y - 0.15 * 1.4).abs() < EPSILON);
}

#[test]
fn slow_pointer_makes_the_boid_orbit() {
    let params = quiet_params();
    let mut rng = create_rng(Some(1));
    let mut boid = Boid::with_state(0, vec2(300.0, 250.0), Vec2::ZERO, 8.0, Variant::Normal);
    let pointer = PointerField::moving(vec2(300.0, 200.0), vec2(0.5, 0.0));

    boid.step(&[], &pointer, Bounds::new(600.0, 600.0), &params, &mut rng);

    // tangential 0.03 * 0.8 and a spring of 0.3 out toward the 150 ring, boosted by 1.4
    assert!((boid.velocity.x - (-0.024 * 1.4)).abs() < EPSILON);
    assert!((boid.velocity.y - 0.3 * 1.4).abs() < EPSILON);
    assert!((boid.velocity.y - 0.15 * 1.4).abs() > 0.1);
}

#[test]
fn moving_pointer_drags_orbiting_boids_along() {
    let params = quiet_params();
    let mut rng = create_rng(Some(1));
    let still = PointerField::moving(vec2(300.0, 200.0), vec2(0.0, 0.0));
    let dragging = PointerField::moving(vec2(300.0, 200.0), vec2(4.0, 0.0));

    let mut a = Boid::with_state(0, vec2(300.0, 350.0), Vec2::ZERO, 8.0, Variant::Normal);
    let mut b = a;
    a.step(&[], &still, Bounds::new(600.0, 600.0), &params, &mut rng);
    b.step(&[], &dragging, Bounds::new(600.0, 600.0), &params, &mut rng);

    // 4 * 0.005 extra along x, scaled by the 1.2 boost at distance 150
    assert!(((b.velocity.x - a.velocity.x) - 0.02 * 1.2).abs() < EPSILON);
}

#[test]
fn lone_boid_only_drifts() {
    let mut world = World::new(SimulationParams::default(), Some(77));
    world.resize(Bounds::new(300.0, 300.0));
    world.init(0);
    assert_eq!(world.boids.len(), 1);

    for _ in 0..1000 {
        world.tick();
        let boid = &world.boids[0];
        assert!(boid.velocity.is_finite() && boid.position.is_finite());
        assert!(boid.speed() <= 2.0 + EPSILON);
    }
    assert_contained(&world);
}

#[test]
fn lone_boid_without_jitter_keeps_its_velocity() {
    let mut world = World::new(quiet_params(), Some(77));
    world.resize(Bounds::new(300.0, 300.0));
    world.init(0);
    let before = world.boids[0].velocity;
    world.tick();
    assert_eq!(world.boids[0].velocity, before);
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn invariants_hold_for_any_seed(
        seed in any::<u64>(),
        count in 0usize..40,
        width in 50.0f32..1200.0,
        height in 50.0f32..900.0,
        pointer_path in prop::collection::vec((0.0f32..1.0, 0.0f32..1.0), 0..20),
    ) {
        let mut world = World::new(SimulationParams::default(), Some(seed));
        world.resize(Bounds::new(width, height));
        world.init(count);

        for frame in 0..40 {
            if let Some(&(fx, fy)) = pointer_path.get(frame) {
                world.handle_pointer(PointerEvent::Move(vec2(fx * width, fy * height)));
            } else if frame == pointer_path.len() {
                world.handle_pointer(PointerEvent::Leave);
            }
            world.tick();

            for boid in &world.boids {
                prop_assert!(boid.velocity.is_finite());
                prop_assert!(boid.speed() <= 2.0 + EPSILON);
                prop_assert!(boid.position.x >= -boid.size && boid.position.x <= width + boid.size);
                prop_assert!(boid.position.y >= -boid.size && boid.position.y <= height + boid.size);
            }
        }
    }
}
