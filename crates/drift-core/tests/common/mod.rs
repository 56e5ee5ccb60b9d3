// Scripted rigid-body world for exercising the interaction logic without a
// real physics engine. Dynamic bodies integrate position from velocity and
// nothing else.

#![allow(dead_code)]

use drift_core::{BodyHandle, RigidBodyWorld};
use glam::{Quat, Vec3};

pub struct TestBody {
    pub position: Vec3,
    pub rotation: Quat,
    pub linvel: Vec3,
    pub angvel: Vec3,
    pub kinematic: bool,
    pub awake: bool,
    pub alive: bool,
    pub impulses: Vec<Vec3>,
}

#[derive(Default)]
pub struct TestWorld {
    pub bodies: Vec<TestBody>,
    pub steps: u32,
}

impl TestWorld {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_body(&mut self, position: Vec3) -> BodyHandle {
        self.bodies.push(TestBody {
            position,
            rotation: Quat::IDENTITY,
            linvel: Vec3::ZERO,
            angvel: Vec3::ZERO,
            kinematic: false,
            awake: true,
            alive: true,
            impulses: Vec::new(),
        });
        BodyHandle(self.bodies.len() as u64 - 1)
    }

    pub fn body(&self, h: BodyHandle) -> &TestBody {
        &self.bodies[h.0 as usize]
    }

    fn get(&self, h: BodyHandle) -> Option<&TestBody> {
        self.bodies.get(h.0 as usize).filter(|b| b.alive)
    }

    fn get_mut(&mut self, h: BodyHandle) -> Option<&mut TestBody> {
        self.bodies.get_mut(h.0 as usize).filter(|b| b.alive)
    }
}

impl RigidBodyWorld for TestWorld {
    fn step(&mut self, dt: f32) {
        self.steps += 1;
        for b in &mut self.bodies {
            if b.alive && !b.kinematic {
                b.position += b.linvel * dt;
            }
        }
    }

    fn translation(&self, h: BodyHandle) -> Option<Vec3> {
        self.get(h).map(|b| b.position)
    }

    fn rotation(&self, h: BodyHandle) -> Option<Quat> {
        self.get(h).map(|b| b.rotation)
    }

    fn set_translation(&mut self, h: BodyHandle, position: Vec3) {
        if let Some(b) = self.get_mut(h) {
            b.position = position;
        }
    }

    fn set_rotation(&mut self, h: BodyHandle, rotation: Quat) {
        if let Some(b) = self.get_mut(h) {
            b.rotation = rotation;
        }
    }

    fn linear_velocity(&self, h: BodyHandle) -> Vec3 {
        self.get(h).map(|b| b.linvel).unwrap_or(Vec3::ZERO)
    }

    fn set_linear_velocity(&mut self, h: BodyHandle, velocity: Vec3) {
        if let Some(b) = self.get_mut(h) {
            b.linvel = velocity;
        }
    }

    fn set_angular_velocity(&mut self, h: BodyHandle, velocity: Vec3) {
        if let Some(b) = self.get_mut(h) {
            b.angvel = velocity;
        }
    }

    fn set_kinematic(&mut self, h: BodyHandle, kinematic: bool) {
        if let Some(b) = self.get_mut(h) {
            b.kinematic = kinematic;
        }
    }

    fn apply_central_impulse(&mut self, h: BodyHandle, impulse: Vec3) {
        if let Some(b) = self.get_mut(h) {
            b.linvel += impulse;
            b.impulses.push(impulse);
        }
    }

    fn wake(&mut self, h: BodyHandle) {
        if let Some(b) = self.get_mut(h) {
            b.awake = true;
        }
    }

    fn remove(&mut self, h: BodyHandle) {
        if let Some(b) = self.bodies.get_mut(h.0 as usize) {
            b.alive = false;
        }
    }
}
