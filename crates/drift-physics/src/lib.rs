//! Rapier-backed rigid-body world for the drift interaction layer.
//!
//! Wraps the Rapier 3D physics engine behind [`drift_core::RigidBodyWorld`]
//! so the interaction logic stays independent of the engine. Gravity defaults
//! to zero: the models float and are kept on screen by the interaction
//! layer's own containment, not by gravity.

use drift_core::{BodyHandle, RigidBodyWorld};
use glam::{Quat, Vec3};
use rapier3d::prelude::*;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ShapeError {
    /// Zero, negative, or non-finite extents would produce a collider the
    /// solver cannot handle. Callers skip the body and keep the scene alive.
    #[error("degenerate collision shape: half extents {0:?}")]
    Degenerate([f32; 3]),
}

/// Parameters for one model's rigid body and its box collider.
#[derive(Clone, Copy, Debug)]
pub struct BodyDesc {
    pub position: Vec3,
    pub half_extents: Vec3,
    pub mass: f32,
    pub restitution: f32,
    pub friction: f32,
}

impl Default for BodyDesc {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            half_extents: Vec3::new(1.0, 0.4, 0.2),
            mass: 0.1,
            restitution: 0.7,
            friction: 0.5,
        }
    }
}

pub struct RapierWorld {
    gravity: Vector<Real>,
    integration_parameters: IntegrationParameters,
    physics_pipeline: PhysicsPipeline,
    island_manager: IslandManager,
    broad_phase: DefaultBroadPhase,
    narrow_phase: NarrowPhase,
    rigid_body_set: RigidBodySet,
    collider_set: ColliderSet,
    impulse_joint_set: ImpulseJointSet,
    multibody_joint_set: MultibodyJointSet,
    ccd_solver: CCDSolver,
}

impl RapierWorld {
    pub fn new() -> Self {
        Self {
            gravity: vector![0.0, 0.0, 0.0],
            integration_parameters: IntegrationParameters::default(),
            physics_pipeline: PhysicsPipeline::new(),
            island_manager: IslandManager::new(),
            broad_phase: DefaultBroadPhase::new(),
            narrow_phase: NarrowPhase::new(),
            rigid_body_set: RigidBodySet::new(),
            collider_set: ColliderSet::new(),
            impulse_joint_set: ImpulseJointSet::new(),
            multibody_joint_set: MultibodyJointSet::new(),
            ccd_solver: CCDSolver::new(),
        }
    }

    pub fn set_gravity(&mut self, gravity: Vec3) {
        self.gravity = to_na(gravity);
    }

    /// Create a dynamic body with a cuboid collider for a model.
    pub fn add_body(&mut self, desc: &BodyDesc) -> Result<BodyHandle, ShapeError> {
        let he = desc.half_extents;
        if !(he.x.is_finite() && he.y.is_finite() && he.z.is_finite())
            || he.min_element() <= 0.0
        {
            log::warn!("rejected body with half extents {:?}", he);
            return Err(ShapeError::Degenerate(he.to_array()));
        }
        let body = RigidBodyBuilder::dynamic()
            .translation(to_na(desc.position))
            .build();
        let handle = self.rigid_body_set.insert(body);
        let collider = ColliderBuilder::cuboid(he.x, he.y, he.z)
            .mass(desc.mass)
            .restitution(desc.restitution)
            .friction(desc.friction)
            .build();
        self.collider_set
            .insert_with_parent(collider, handle, &mut self.rigid_body_set);
        Ok(pack(handle))
    }

    /// Create a small ball-shaped projectile already in flight.
    pub fn add_projectile_body(
        &mut self,
        position: Vec3,
        radius: f32,
        velocity: Vec3,
    ) -> Result<BodyHandle, ShapeError> {
        if !radius.is_finite() || radius <= 0.0 {
            log::warn!("rejected projectile with radius {}", radius);
            return Err(ShapeError::Degenerate([radius; 3]));
        }
        let body = RigidBodyBuilder::dynamic()
            .translation(to_na(position))
            .linvel(to_na(velocity))
            .build();
        let handle = self.rigid_body_set.insert(body);
        let collider = ColliderBuilder::ball(radius).mass(0.2).build();
        self.collider_set
            .insert_with_parent(collider, handle, &mut self.rigid_body_set);
        Ok(pack(handle))
    }

    pub fn body_count(&self) -> usize {
        self.rigid_body_set.len()
    }

    fn body(&self, h: BodyHandle) -> Option<&RigidBody> {
        self.rigid_body_set.get(unpack(h))
    }

    fn body_mut(&mut self, h: BodyHandle) -> Option<&mut RigidBody> {
        self.rigid_body_set.get_mut(unpack(h))
    }
}

impl Default for RapierWorld {
    fn default() -> Self {
        Self::new()
    }
}

impl RigidBodyWorld for RapierWorld {
    fn step(&mut self, dt: f32) {
        self.integration_parameters.dt = dt;
        self.physics_pipeline.step(
            &self.gravity,
            &self.integration_parameters,
            &mut self.island_manager,
            &mut self.broad_phase,
            &mut self.narrow_phase,
            &mut self.rigid_body_set,
            &mut self.collider_set,
            &mut self.impulse_joint_set,
            &mut self.multibody_joint_set,
            &mut self.ccd_solver,
            None,
            &(),
            &(),
        );
    }

    fn translation(&self, h: BodyHandle) -> Option<Vec3> {
        self.body(h).map(|b| from_na(*b.translation()))
    }

    fn rotation(&self, h: BodyHandle) -> Option<Quat> {
        self.body(h).map(|b| from_na_quat(b.rotation()))
    }

    fn set_translation(&mut self, h: BodyHandle, position: Vec3) {
        if let Some(b) = self.body_mut(h) {
            b.set_translation(to_na(position), true);
        }
    }

    fn set_rotation(&mut self, h: BodyHandle, rotation: Quat) {
        if let Some(b) = self.body_mut(h) {
            b.set_rotation(to_na_quat(rotation), true);
        }
    }

    fn linear_velocity(&self, h: BodyHandle) -> Vec3 {
        self.body(h).map(|b| from_na(*b.linvel())).unwrap_or(Vec3::ZERO)
    }

    fn set_linear_velocity(&mut self, h: BodyHandle, velocity: Vec3) {
        if let Some(b) = self.body_mut(h) {
            b.set_linvel(to_na(velocity), true);
        }
    }

    fn set_angular_velocity(&mut self, h: BodyHandle, velocity: Vec3) {
        if let Some(b) = self.body_mut(h) {
            b.set_angvel(to_na(velocity), true);
        }
    }

    fn set_kinematic(&mut self, h: BodyHandle, kinematic: bool) {
        if let Some(b) = self.body_mut(h) {
            let ty = if kinematic {
                RigidBodyType::KinematicPositionBased
            } else {
                RigidBodyType::Dynamic
            };
            b.set_body_type(ty, true);
        }
    }

    fn apply_central_impulse(&mut self, h: BodyHandle, impulse: Vec3) {
        if let Some(b) = self.body_mut(h) {
            b.apply_impulse(to_na(impulse), true);
        }
    }

    fn wake(&mut self, h: BodyHandle) {
        if let Some(b) = self.body_mut(h) {
            b.wake_up(true);
        }
    }

    fn remove(&mut self, h: BodyHandle) {
        self.rigid_body_set.remove(
            unpack(h),
            &mut self.island_manager,
            &mut self.collider_set,
            &mut self.impulse_joint_set,
            &mut self.multibody_joint_set,
            true,
        );
    }
}

// -------- handle and math conversions --------

#[inline]
fn pack(h: RigidBodyHandle) -> BodyHandle {
    let (index, generation) = h.into_raw_parts();
    BodyHandle(((index as u64) << 32) | generation as u64)
}

#[inline]
fn unpack(h: BodyHandle) -> RigidBodyHandle {
    RigidBodyHandle::from_raw_parts((h.0 >> 32) as u32, h.0 as u32)
}

#[inline]
fn to_na(v: Vec3) -> Vector<Real> {
    vector![v.x, v.y, v.z]
}

#[inline]
fn from_na(v: Vector<Real>) -> Vec3 {
    Vec3::new(v.x, v.y, v.z)
}

#[inline]
fn to_na_quat(q: Quat) -> Rotation<Real> {
    Rotation::from_quaternion(nalgebra::Quaternion::new(q.w, q.x, q.y, q.z))
}

#[inline]
fn from_na_quat(q: &Rotation<Real>) -> Quat {
    Quat::from_xyzw(q.i, q.j, q.k, q.w)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn desc_at(position: Vec3) -> BodyDesc {
        BodyDesc {
            position,
            ..BodyDesc::default()
        }
    }

    #[test]
    fn default_desc_builds_a_light_bouncy_text_body() {
        let d = BodyDesc::default();
        assert_eq!(d.mass, 0.1);
        assert_eq!(d.restitution, 0.7);
    }

    #[test]
    fn world_starts_empty_and_weightless() {
        let world = RapierWorld::new();
        assert_eq!(world.body_count(), 0);
        assert_eq!(world.gravity, vector![0.0, 0.0, 0.0]);
    }

    #[test]
    fn degenerate_shapes_are_rejected_not_inserted() {
        let mut world = RapierWorld::new();
        let bad = BodyDesc {
            half_extents: Vec3::new(0.0, 1.0, 1.0),
            ..BodyDesc::default()
        };
        assert!(world.add_body(&bad).is_err());
        let nan = BodyDesc {
            half_extents: Vec3::new(f32::NAN, 1.0, 1.0),
            ..BodyDesc::default()
        };
        assert!(world.add_body(&nan).is_err());
        assert_eq!(world.body_count(), 0);
    }

    #[test]
    fn velocity_integrates_position_without_gravity() {
        let mut world = RapierWorld::new();
        let h = world.add_body(&desc_at(Vec3::ZERO)).unwrap();
        world.set_linear_velocity(h, Vec3::new(2.0, 0.0, 0.0));
        for _ in 0..10 {
            world.step(0.1);
        }
        let p = world.translation(h).unwrap();
        assert!((p.x - 2.0).abs() < 1e-3, "p.x = {}", p.x);
        assert!(p.y.abs() < 1e-4 && p.z.abs() < 1e-4);
    }

    #[test]
    fn kinematic_toggle_preserves_the_transform() {
        let mut world = RapierWorld::new();
        let h = world.add_body(&desc_at(Vec3::new(1.0, 2.0, 3.0))).unwrap();
        world.set_kinematic(h, true);
        world.set_translation(h, Vec3::new(4.0, 5.0, 6.0));
        world.set_kinematic(h, false);
        assert_eq!(world.translation(h).unwrap(), Vec3::new(4.0, 5.0, 6.0));
    }

    #[test]
    fn kinematic_bodies_ignore_velocity_and_impulses() {
        let mut world = RapierWorld::new();
        let h = world.add_body(&desc_at(Vec3::ZERO)).unwrap();
        world.set_kinematic(h, true);
        world.apply_central_impulse(h, Vec3::new(10.0, 0.0, 0.0));
        world.step(1.0);
        assert_eq!(world.translation(h).unwrap(), Vec3::ZERO);
    }

    #[test]
    fn rotation_round_trips_through_the_body() {
        let mut world = RapierWorld::new();
        let h = world.add_body(&desc_at(Vec3::ZERO)).unwrap();
        let q = Quat::from_axis_angle(Vec3::Y, 1.2);
        world.set_rotation(h, q);
        let out = world.rotation(h).unwrap();
        assert!(out.dot(q).abs() > 0.9999);
    }

    #[test]
    fn removed_bodies_answer_with_none() {
        let mut world = RapierWorld::new();
        let h = world.add_body(&desc_at(Vec3::ZERO)).unwrap();
        world.remove(h);
        assert!(world.translation(h).is_none());
        assert_eq!(world.linear_velocity(h), Vec3::ZERO);
        // Mutations on a dead handle are silent no-ops.
        world.set_translation(h, Vec3::ONE);
        world.wake(h);
    }

    #[test]
    fn projectiles_spawn_in_flight() {
        let mut world = RapierWorld::new();
        let h = world
            .add_projectile_body(Vec3::ZERO, 0.2, Vec3::new(0.0, 0.0, -12.0))
            .unwrap();
        world.step(0.5);
        let p = world.translation(h).unwrap();
        assert!((p.z + 6.0).abs() < 1e-3, "p.z = {}", p.z);
    }
}
