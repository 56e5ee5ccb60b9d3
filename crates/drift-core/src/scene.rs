//! The interaction scene: entity registry, cached bounds, and the per-tick
//! driver that keeps the physics collaborator and entity transforms in sync.
//!
//! All mutable interaction state lives on [`InteractionScene`] rather than in
//! module-level globals; the host owns one instance and threads it through
//! the frame loop and the drag controller.

use crate::bounds::ScreenBounds;
use crate::camera::Camera;
use crate::constants::{
    AMBIENT_NUDGE_CHANCE, AMBIENT_NUDGE_MAX, BOUNCE_SPIN_MAX, FALL_REMOVE_Y, PROJECTILE_SPAWN_DISTANCE,
    PROJECTILE_SPEED, RUNAWAY_DAMP, RUNAWAY_SPEED,
};
use crate::containment;
use crate::entity::{Entity, EntityKind};
use crate::world::{BodyHandle, RigidBodyWorld};
use glam::{Quat, Vec2, Vec3};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Ray-sphere intersection returning the near hit parameter, if any.
#[inline]
pub fn ray_sphere(ray_origin: Vec3, ray_dir: Vec3, center: Vec3, radius: f32) -> Option<f32> {
    let oc = ray_origin - center;
    let b = oc.dot(ray_dir);
    let c = oc.dot(oc) - radius * radius;
    let disc = b * b - c;
    if disc < 0.0 {
        return None;
    }
    let t = -b - disc.sqrt();
    (t >= 0.0).then_some(t)
}

/// A shot entity: simulated and read back like the text models, but exempt
/// from containment so it can leave the screen, and removed once it falls
/// past [`FALL_REMOVE_Y`].
pub struct Projectile {
    pub body: BodyHandle,
    pub position: Vec3,
}

pub struct InteractionScene {
    pub camera: Camera,
    pub bounds: ScreenBounds,
    pub entities: Vec<Entity>,
    pub projectiles: Vec<Projectile>,
    /// Occasional random nudges that keep idle models drifting. On by
    /// default; hosts can switch the effect off.
    pub ambient_motion: bool,
    rng: StdRng,
}

impl InteractionScene {
    pub fn new(camera: Camera, seed: u64) -> Self {
        let bounds = ScreenBounds::for_camera(&camera);
        Self {
            camera,
            bounds,
            entities: Vec::new(),
            projectiles: Vec::new(),
            ambient_motion: true,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Replace the camera and recompute the cached bounds. Must be called on
    /// any viewport resize or camera move, or entities get clamped to a stale
    /// screen.
    pub fn set_camera(&mut self, camera: Camera) {
        self.camera = camera;
        self.bounds = ScreenBounds::for_camera(&self.camera);
    }

    pub fn set_viewport_aspect(&mut self, aspect: f32) {
        self.camera.aspect = aspect;
        self.bounds = ScreenBounds::for_camera(&self.camera);
    }

    pub fn add_entity(&mut self, entity: Entity) -> usize {
        self.entities.push(entity);
        self.entities.len() - 1
    }

    /// Nearest entity hit by the ray, as `(index, distance)`. Statics are
    /// included only when `include_static`. Ordering on exact ties follows
    /// iteration order.
    pub fn pick(
        &self,
        ray_origin: Vec3,
        ray_dir: Vec3,
        include_static: bool,
    ) -> Option<(usize, f32)> {
        let mut best: Option<(usize, f32)> = None;
        for (i, e) in self.entities.iter().enumerate() {
            if e.kind == EntityKind::Dragged {
                continue;
            }
            if !include_static && !e.draggable() {
                continue;
            }
            if let Some(t) = ray_sphere(ray_origin, ray_dir, e.position, e.pick_radius) {
                match best {
                    Some((_, bt)) if t >= bt => {}
                    _ => best = Some((i, t)),
                }
            }
        }
        best
    }

    /// Spawn transform for a shot through the given screen point: returns
    /// `(origin, velocity)` along the camera ray.
    pub fn projectile_launch(&self, ndc: Vec2) -> (Vec3, Vec3) {
        let (ro, rd) = self.camera.ndc_ray(ndc);
        (ro + rd * PROJECTILE_SPAWN_DISTANCE, rd * PROJECTILE_SPEED)
    }

    pub fn add_projectile(&mut self, body: BodyHandle, position: Vec3) {
        self.projectiles.push(Projectile { body, position });
    }

    /// One interaction tick: advance spin animations, contain, step the
    /// simulation, contain again, and read transforms back.
    ///
    /// Without a physics world only the spin animation advances, so a failed
    /// physics init degrades to a static (but still animated) scene.
    pub fn tick(&mut self, dt: f32, world: Option<&mut dyn RigidBodyWorld>) {
        self.advance_spin(dt);
        let Some(world) = world else {
            return;
        };

        // Enforce both before and after the step: the step itself can carry
        // a body back past the threshold within one tick.
        self.enforce_all(world);
        world.step(dt);
        self.enforce_all(world);

        self.read_back(world, dt);
        self.despawn_fallen(world);
    }

    /// Integrate spin animations for entities not currently held. The result
    /// is stored as the custom rotation so the physics read-back defers to it.
    fn advance_spin(&mut self, dt: f32) {
        for e in &mut self.entities {
            if e.kind == EntityKind::Dragged {
                continue;
            }
            if let Some(spin) = e.spin {
                let step = Quat::from_axis_angle(spin.axis.normalize(), spin.speed * dt);
                e.rotation = (e.rotation * step).normalize();
                e.custom_rotation = Some(e.rotation);
            }
        }
    }

    fn enforce_all(&mut self, world: &mut dyn RigidBodyWorld) {
        for e in &self.entities {
            if e.kind != EntityKind::Free {
                continue;
            }
            let Some(h) = e.body else { continue };
            let Some(mut pos) = world.translation(h) else {
                continue;
            };
            let mut vel = world.linear_velocity(h);
            if containment::enforce(&self.bounds, &mut pos, &mut vel) {
                world.set_translation(h, pos);
                world.set_linear_velocity(h, vel);
                // Random tumble so wall hits read as impacts.
                let kick = Vec3::new(
                    self.rng.gen_range(-BOUNCE_SPIN_MAX..=BOUNCE_SPIN_MAX),
                    self.rng.gen_range(-BOUNCE_SPIN_MAX..=BOUNCE_SPIN_MAX),
                    self.rng.gen_range(-BOUNCE_SPIN_MAX..=BOUNCE_SPIN_MAX),
                );
                world.set_angular_velocity(h, kick);
                world.wake(h);
            }
        }
    }

    /// Pull simulation results into the entities and apply loop safeguards.
    fn read_back(&mut self, world: &mut dyn RigidBodyWorld, _dt: f32) {
        // Nudges pause while anything is held; they would fight the pointer.
        let nudging = self.ambient_motion
            && !self.entities.iter().any(|e| e.kind == EntityKind::Dragged);
        for e in &mut self.entities {
            if e.kind == EntityKind::Dragged {
                continue; // transform is controller-written this frame
            }
            let Some(h) = e.body else { continue };
            if let Some(pos) = world.translation(h) {
                e.position = pos;
            }
            // Position always flows from the simulation; rotation direction
            // depends on whether an animation owns this entity.
            match e.custom_rotation {
                Some(q) => world.set_rotation(h, q),
                None => {
                    if let Some(q) = world.rotation(h) {
                        e.rotation = q;
                    }
                }
            }
            e.velocity = world.linear_velocity(h);

            if e.kind != EntityKind::Free {
                continue;
            }
            let speed = e.velocity.length();
            if speed > RUNAWAY_SPEED {
                e.velocity *= RUNAWAY_DAMP;
                world.set_linear_velocity(h, e.velocity);
                log::debug!("runaway velocity on {} halved from {:.1}", e.name, speed);
            }
            if nudging && self.rng.gen::<f32>() < AMBIENT_NUDGE_CHANCE {
                let nudge = Vec3::new(
                    self.rng.gen_range(-AMBIENT_NUDGE_MAX..=AMBIENT_NUDGE_MAX),
                    self.rng.gen_range(-AMBIENT_NUDGE_MAX..=AMBIENT_NUDGE_MAX),
                    self.rng.gen_range(-AMBIENT_NUDGE_MAX..=AMBIENT_NUDGE_MAX),
                );
                world.apply_central_impulse(h, nudge);
            }
        }

        for p in &mut self.projectiles {
            if let Some(pos) = world.translation(p.body) {
                p.position = pos;
            }
        }
    }

    fn despawn_fallen(&mut self, world: &mut dyn RigidBodyWorld) {
        self.projectiles.retain(|p| {
            if p.position.y < FALL_REMOVE_Y {
                world.remove(p.body);
                false
            } else {
                true
            }
        });
    }
}
