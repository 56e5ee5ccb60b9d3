//! Pointer-driven drag state machine: Idle -> Hovering -> Dragging.
//!
//! While held, an entity is kinematic and follows the pointer ray at the
//! distance it was grabbed at, clamped to the screen bounds. On release it
//! flips back to dynamic at exactly the last dragged position and receives a
//! throw velocity computed from the recent pointer motion.

use crate::constants::{SMOOTHED_VELOCITY_MAX, VELOCITY_SMOOTHING};
use crate::entity::EntityKind;
use crate::pointer::{PointerMove, PointerSample};
use crate::scene::InteractionScene;
use crate::throw::{throw_velocity, ThrowInputs};
use crate::world::RigidBodyWorld;
use glam::{Vec2, Vec3};
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Transient state spanning pointer-down to pointer-up. At most one exists
/// at a time (single-pointer interaction).
#[derive(Clone, Copy, Debug)]
pub struct DragSession {
    pub entity: usize,
    pub start_position: Vec3,
    /// Entity distance from the camera, captured at grab and held constant
    /// for the whole drag; the pointer only steers the angle.
    pub grab_distance: f32,
    /// Exponentially smoothed pointer velocity, per-axis clamped. Exposed to
    /// hosts for cursor/trail effects; the throw itself uses the raw history.
    pub smoothed_velocity: Vec2,
    pub last_radial: f32,
    /// Radial NDC movement over the last processed move.
    pub radial_delta: f32,
}

pub struct DragController {
    session: Option<DragSession>,
    hover: Option<usize>,
    rng: StdRng,
}

impl DragController {
    pub fn new(seed: u64) -> Self {
        Self {
            session: None,
            hover: None,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Entity under the pointer while not dragging (statics included, so the
    /// host can light up the button).
    pub fn hover(&self) -> Option<usize> {
        self.hover
    }

    pub fn session(&self) -> Option<&DragSession> {
        self.session.as_ref()
    }

    pub fn is_dragging(&self) -> bool {
        self.session.is_some()
    }

    /// Try to start a drag at the given pointer position. Empty space is a
    /// silent no-op, and so is a press whose nearest hit is a static: the
    /// button masks anything floating behind it.
    pub fn pointer_down(
        &mut self,
        scene: &mut InteractionScene,
        world: &mut dyn RigidBodyWorld,
        at: PointerSample,
    ) -> Option<usize> {
        if self.session.is_some() {
            return None;
        }
        let (ro, rd) = scene.camera.ndc_ray(at.ndc);
        let (index, _) = scene.pick(ro, rd, true)?;
        if !scene.entities[index].draggable() {
            return None;
        }

        let entity = &mut scene.entities[index];
        entity.kind = EntityKind::Dragged;
        entity.velocity_history.clear();
        if let Some(h) = entity.body {
            // Kinematic while held so simulation forces cannot fight the
            // pointer.
            world.set_kinematic(h, true);
        }
        let grab_distance = (entity.position - scene.camera.eye).length();
        log::info!("[drag] begin on {} at distance {:.1}", entity.name, grab_distance);

        self.hover = None;
        self.session = Some(DragSession {
            entity: index,
            start_position: entity.position,
            grab_distance,
            smoothed_velocity: Vec2::ZERO,
            last_radial: at.ndc.length(),
            radial_delta: 0.0,
        });
        self.session.map(|s| s.entity)
    }

    /// Feed a pointer move: repositions the held entity, or updates the
    /// hover target when idle.
    pub fn pointer_move(
        &mut self,
        scene: &mut InteractionScene,
        world: &mut dyn RigidBodyWorld,
        mv: PointerMove,
    ) {
        let Some(session) = self.session.as_mut() else {
            let (ro, rd) = scene.camera.ndc_ray(mv.sample.ndc);
            self.hover = scene.pick(ro, rd, true).map(|(i, _)| i);
            return;
        };

        // Re-project along the new pointer ray at the grab distance, then
        // clamp per axis so the model cannot be parked off screen.
        let (ro, rd) = scene.camera.ndc_ray(mv.sample.ndc);
        let target = ro + rd * session.grab_distance;
        let clamped = scene.bounds.clamp(target);

        let entity = &mut scene.entities[session.entity];
        entity.position = clamped;
        if let Some(h) = entity.body {
            world.set_translation(h, clamped);
        }

        let instantaneous = mv.velocity;
        session.smoothed_velocity = (session.smoothed_velocity * (1.0 - VELOCITY_SMOOTHING)
            + instantaneous * VELOCITY_SMOOTHING)
            .clamp(
                Vec2::splat(-SMOOTHED_VELOCITY_MAX),
                Vec2::splat(SMOOTHED_VELOCITY_MAX),
            );
        entity.push_velocity_sample(instantaneous);

        let radial = mv.sample.ndc.length();
        session.radial_delta = radial - session.last_radial;
        session.last_radial = radial;
    }

    /// End the drag: hand the entity back to the simulation with a throw
    /// velocity. Returns the applied velocity, or `None` if nothing was held.
    pub fn pointer_up(
        &mut self,
        scene: &mut InteractionScene,
        world: &mut dyn RigidBodyWorld,
    ) -> Option<Vec3> {
        let session = self.session.take()?;
        let entity = &mut scene.entities[session.entity];

        let velocity = throw_velocity(
            &ThrowInputs {
                history: &entity.velocity_history,
                radial_delta: session.radial_delta,
                camera_distance: session.grab_distance,
            },
            &mut self.rng,
        );

        // Dynamic again at exactly the last dragged position; the flip must
        // not move the body.
        entity.kind = EntityKind::Free;
        entity.velocity = velocity;
        if let Some(h) = entity.body {
            world.set_kinematic(h, false);
            world.set_linear_velocity(h, velocity);
            world.wake(h);
        }
        log::info!("[drag] release {} with velocity {:.2?}", entity.name, velocity);
        Some(velocity)
    }
}
