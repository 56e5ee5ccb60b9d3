//! Headless demo: builds the default scene, scripts a drag-and-throw
//! gesture plus a projectile shot, and runs the frame loop for a few
//! simulated seconds, logging what happens.

use anyhow::Result;
use drift_core::{
    spin_for, Camera, DragController, DeviceProfile, Entity, FrameClock, InteractionScene,
    PointerTracker, SurfaceRect, DEFAULT_FOV_DEG, MODEL_PLACEMENTS, PICK_SPHERE_RADIUS,
    TARGET_FPS,
};
use drift_physics::{BodyDesc, RapierWorld};
use glam::Vec2;

const SEED: u64 = 7;
const SIM_SECONDS: f64 = 6.0;

fn build_scene(profile: DeviceProfile, aspect: f32, world: &mut RapierWorld) -> InteractionScene {
    let camera = Camera::facing_origin(DEFAULT_FOV_DEG, aspect, profile.camera_z());
    let mut scene = InteractionScene::new(camera, SEED);

    for placement in &MODEL_PLACEMENTS {
        let position = placement.position_for(profile);
        let mut entity = Entity::new(placement.name, position, PICK_SPHERE_RADIUS);
        if let Some((axis, speed)) = spin_for(placement.name) {
            entity = entity.with_spin(axis, speed);
        }
        if placement.fixed {
            scene.add_entity(entity.fixed());
            continue;
        }
        match world.add_body(&BodyDesc {
            position,
            ..BodyDesc::default()
        }) {
            Ok(body) => {
                scene.add_entity(entity.with_body(body));
            }
            Err(err) => {
                // Keep the model visible without a body rather than dropping it.
                log::warn!("no physics body for {}: {}", placement.name, err);
                scene.add_entity(entity);
            }
        }
    }
    scene
}

fn main() -> Result<()> {
    env_logger::init();

    let rect = SurfaceRect::new(0.0, 0.0, 1280.0, 720.0);
    let mut world = RapierWorld::new();
    let mut scene = build_scene(DeviceProfile::Desktop, rect.aspect(), &mut world);
    let mut controller = DragController::new(SEED);
    let mut tracker = PointerTracker::new();
    let mut clock = FrameClock::with_target_fps(TARGET_FPS);

    log::info!(
        "scene ready: {} models, bounds {:?}..{:?}",
        scene.entities.len(),
        scene.bounds.min,
        scene.bounds.max
    );

    // Scripted input: press on the center model at t=1s, sweep right for a
    // third of a second, release, then fire a projectile at t=3s.
    let frame_dt = 1.0 / TARGET_FPS;
    let mut now = 0.0_f64;
    let mut shot_fired = false;

    while now < SIM_SECONDS {
        now += frame_dt;

        let pointer_x = match now {
            t if (1.0..1.33).contains(&t) => 640.0 + ((t - 1.0) * 900.0) as f32,
            _ => 640.0,
        };
        let mv = tracker.track(pointer_x, 360.0, &rect, now);

        if (now - 1.0).abs() < frame_dt / 2.0 {
            if let Some(i) = controller.pointer_down(&mut scene, &mut world, mv.sample) {
                log::info!("grabbed {}", scene.entities[i].name);
            }
        } else if (now - 1.33).abs() < frame_dt / 2.0 && controller.is_dragging() {
            if let Some(v) = controller.pointer_up(&mut scene, &mut world) {
                log::info!("thrown with velocity {:?}", v);
            }
        } else {
            controller.pointer_move(&mut scene, &mut world, mv);
        }

        if now >= 3.0 && !shot_fired {
            shot_fired = true;
            let (origin, velocity) = scene.projectile_launch(Vec2::new(0.3, 0.1));
            let body = world.add_projectile_body(origin, 0.2, velocity)?;
            scene.add_projectile(body, origin);
            log::info!("projectile away from {:?}", origin);
        }

        if let Some(dt) = clock.tick(now) {
            scene.tick(dt, Some(&mut world));
        }
    }

    for e in &scene.entities {
        log::info!(
            "{:<7} pos {:>24} vel {:>24}",
            e.name,
            format!("{:.2?}", e.position),
            format!("{:.2?}", e.velocity)
        );
    }
    println!(
        "simulated {:.0}s, {} bodies, {} projectiles in flight",
        SIM_SECONDS,
        world.body_count(),
        scene.projectiles.len()
    );
    Ok(())
}
