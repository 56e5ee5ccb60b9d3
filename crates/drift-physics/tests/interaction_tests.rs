// End-to-end scenarios: the interaction layer driving a real rapier world.

use drift_core::{
    Camera, DragController, Entity, EntityKind, InteractionScene, PointerTracker, RigidBodyWorld,
    ScreenBounds, SurfaceRect, DEFAULT_FOV_DEG, DESKTOP_CAMERA_Z, PICK_SPHERE_RADIUS,
};
use drift_physics::{BodyDesc, RapierWorld};
use glam::Vec3;

const RECT: SurfaceRect = SurfaceRect {
    left: 0.0,
    top: 0.0,
    width: 1280.0,
    height: 720.0,
};

fn setup() -> (InteractionScene, RapierWorld) {
    let camera = Camera::facing_origin(DEFAULT_FOV_DEG, RECT.aspect(), DESKTOP_CAMERA_Z);
    (InteractionScene::new(camera, 9), RapierWorld::new())
}

fn add_model(scene: &mut InteractionScene, world: &mut RapierWorld, name: &str, pos: Vec3) -> usize {
    let body = world
        .add_body(&BodyDesc {
            position: pos,
            ..BodyDesc::default()
        })
        .expect("valid shape");
    scene.add_entity(Entity::new(name, pos, PICK_SPHERE_RADIUS).with_body(body))
}

#[test]
fn wall_bounce_through_a_real_physics_step() {
    // Entity at the origin, bounds of +/-5 on every axis, velocity (6,0,0),
    // one undamped step of dt=1: the step carries it to x=6, containment
    // clamps to 5 - 0.2 and reflects the velocity to -6 * 0.9.
    let (mut scene, mut world) = setup();
    scene.bounds = ScreenBounds {
        min: Vec3::splat(-5.0),
        max: Vec3::splat(5.0),
    };
    scene.ambient_motion = false;
    let i = add_model(&mut scene, &mut world, "text5", Vec3::ZERO);
    let body = scene.entities[i].body.unwrap();
    world.set_linear_velocity(body, Vec3::new(6.0, 0.0, 0.0));

    scene.tick(1.0, Some(&mut world));

    let e = &scene.entities[i];
    assert!(
        (e.position - Vec3::new(4.8, 0.0, 0.0)).length() < 1e-3,
        "position {:?}",
        e.position
    );
    assert!(
        (e.velocity - Vec3::new(-5.4, 0.0, 0.0)).length() < 1e-3,
        "velocity {:?}",
        e.velocity
    );
}

#[test]
fn bounced_entity_returns_into_bounds_over_time() {
    let (mut scene, mut world) = setup();
    scene.bounds = ScreenBounds {
        min: Vec3::splat(-5.0),
        max: Vec3::splat(5.0),
    };
    scene.ambient_motion = false;
    let i = add_model(&mut scene, &mut world, "text5", Vec3::ZERO);
    let body = scene.entities[i].body.unwrap();
    world.set_linear_velocity(body, Vec3::new(6.0, 3.0, 0.0));

    for _ in 0..120 {
        scene.tick(1.0 / 30.0, Some(&mut world));
        let p = scene.entities[i].position;
        assert!(p.x.abs() <= 4.8 + 1e-3 && p.y.abs() <= 4.8 + 1e-3, "escaped: {:?}", p);
    }
}

#[test]
fn full_drag_and_throw_gesture_over_rapier() {
    let (mut scene, mut world) = setup();
    scene.ambient_motion = false;
    let i = add_model(&mut scene, &mut world, "text5", Vec3::ZERO);
    let body = scene.entities[i].body.unwrap();
    let mut controller = DragController::new(3);
    let mut tracker = PointerTracker::new();

    // Grab at screen center.
    let mv = tracker.track(640.0, 360.0, &RECT, 0.0);
    assert_eq!(controller.pointer_down(&mut scene, &mut world, mv.sample), Some(i));

    // While held, ticks must not move the body: it is kinematic.
    let held_before = world.translation(body).unwrap();
    scene.tick(1.0 / 30.0, Some(&mut world));
    assert!((world.translation(body).unwrap() - held_before).length() < 1e-6);

    // Sweep right and release.
    for step in 1..=6 {
        let mv = tracker.track(640.0 + 25.0 * step as f32, 360.0, &RECT, step as f64 * 0.016);
        controller.pointer_move(&mut scene, &mut world, mv);
    }
    let held = scene.entities[i].position;
    let thrown = controller.pointer_up(&mut scene, &mut world).unwrap();
    assert_eq!(world.translation(body).unwrap(), held);
    assert!(thrown.x > 0.0);

    // Free flight: the body drifts in the throw direction.
    scene.tick(0.5, Some(&mut world));
    assert!(scene.entities[i].position.x > held.x);
    assert_eq!(scene.entities[i].kind, EntityKind::Free);
}

#[test]
fn projectile_lives_until_it_falls_out_of_the_world() {
    let (mut scene, mut world) = setup();
    scene.ambient_motion = false;
    world.set_gravity(Vec3::new(0.0, -9.81, 0.0));

    let (origin, velocity) = scene.projectile_launch(glam::Vec2::ZERO);
    let body = world.add_projectile_body(origin, 0.2, velocity).unwrap();
    scene.add_projectile(body, origin);

    let mut removed_at = None;
    for frame in 0..600 {
        scene.tick(1.0 / 30.0, Some(&mut world));
        if scene.projectiles.is_empty() {
            removed_at = Some(frame);
            break;
        }
    }
    // Gravity eventually drags it past the removal threshold and both the
    // scene entry and the body go away.
    let frame = removed_at.expect("projectile never despawned");
    assert!(frame > 0);
    assert!(world.translation(body).is_none());
}

#[test]
fn scene_with_a_bodiless_entity_still_ticks() {
    // A model whose collision shape was rejected keeps working visually.
    let (mut scene, mut world) = setup();
    let bad = BodyDesc {
        half_extents: Vec3::ZERO,
        ..BodyDesc::default()
    };
    assert!(world.add_body(&bad).is_err());
    let i = scene.add_entity(
        Entity::new("text9", Vec3::new(1.0, 0.0, 0.0), PICK_SPHERE_RADIUS).with_spin(Vec3::Y, 1.0),
    );
    scene.tick(1.0 / 30.0, Some(&mut world));
    assert!(scene.entities[i].custom_rotation.is_some());
    assert_eq!(scene.entities[i].position, Vec3::new(1.0, 0.0, 0.0));
}
