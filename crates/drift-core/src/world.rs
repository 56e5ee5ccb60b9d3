//! Seam to the rigid-body collaborator.
//!
//! The interaction layer drives whatever simulation backs the scene through
//! this trait; `drift-physics` implements it over rapier. Keeping the trait
//! here lets the core logic be tested against a scripted world.

use glam::{Quat, Vec3};

/// Opaque handle to a rigid body owned by the collaborator.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct BodyHandle(pub u64);

/// Minimal rigid-body world surface the interaction layer needs.
///
/// Accessors return `None`/no-op for stale handles so a removed body never
/// takes the frame loop down.
pub trait RigidBodyWorld {
    /// Advance the simulation by `dt` seconds.
    fn step(&mut self, dt: f32);

    fn translation(&self, body: BodyHandle) -> Option<Vec3>;
    fn rotation(&self, body: BodyHandle) -> Option<Quat>;
    fn set_translation(&mut self, body: BodyHandle, position: Vec3);
    fn set_rotation(&mut self, body: BodyHandle, rotation: Quat);

    fn linear_velocity(&self, body: BodyHandle) -> Vec3;
    fn set_linear_velocity(&mut self, body: BodyHandle, velocity: Vec3);
    fn set_angular_velocity(&mut self, body: BodyHandle, velocity: Vec3);

    /// Toggle between externally-driven (kinematic) and simulated (dynamic)
    /// motion. Must preserve the body's current transform.
    fn set_kinematic(&mut self, body: BodyHandle, kinematic: bool);

    /// One-off momentum change at the center of mass.
    fn apply_central_impulse(&mut self, body: BodyHandle, impulse: Vec3);

    /// Undo any sleep/deactivation state.
    fn wake(&mut self, body: BodyHandle);

    /// Remove the body from the simulation. The handle is dead afterwards.
    fn remove(&mut self, body: BodyHandle);
}
