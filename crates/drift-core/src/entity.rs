//! Scene entities: draggable models backed by rigid bodies.

use crate::constants::VELOCITY_HISTORY_CAP;
use crate::world::BodyHandle;
use glam::{Quat, Vec2, Vec3};
use smallvec::SmallVec;

/// How an entity participates in the interaction.
///
/// `Free` bodies are dynamic and contained to the screen bounds, `Dragged`
/// bodies are kinematic and follow the pointer, `Static` entities (the UI
/// button model) can be hovered but never picked up or simulated.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EntityKind {
    Free,
    Dragged,
    Static,
}

/// Per-entity spin animation applied while the entity is not being dragged.
#[derive(Clone, Copy, Debug)]
pub struct Spin {
    pub axis: Vec3,
    /// Radians per second; negative spins the other way.
    pub speed: f32,
}

pub struct Entity {
    pub name: String,
    pub kind: EntityKind,
    /// Absent when the physics collaborator skipped this model (degenerate
    /// collision geometry, or physics unavailable). The entity then only
    /// ever moves through its spin animation.
    pub body: Option<BodyHandle>,
    pub position: Vec3,
    pub rotation: Quat,
    /// Linear velocity mirrored from the physics body each tick.
    pub velocity: Vec3,
    /// Rotation driven by the spin animation instead of the simulation. When
    /// set, the frame loop writes it back into the body rather than accepting
    /// the simulated rotation.
    pub custom_rotation: Option<Quat>,
    pub spin: Option<Spin>,
    /// Rolling instantaneous pointer velocities from the current/last drag,
    /// oldest first. Bounded; pushing beyond the cap evicts the oldest.
    pub velocity_history: SmallVec<[Vec2; VELOCITY_HISTORY_CAP]>,
    pub pick_radius: f32,
}

impl Entity {
    pub fn new(name: impl Into<String>, position: Vec3, pick_radius: f32) -> Self {
        Self {
            name: name.into(),
            kind: EntityKind::Free,
            body: None,
            position,
            rotation: Quat::IDENTITY,
            velocity: Vec3::ZERO,
            custom_rotation: None,
            spin: None,
            velocity_history: SmallVec::new(),
            pick_radius,
        }
    }

    pub fn with_body(mut self, body: BodyHandle) -> Self {
        self.body = Some(body);
        self
    }

    pub fn with_spin(mut self, axis: Vec3, speed: f32) -> Self {
        self.spin = Some(Spin { axis, speed });
        self
    }

    /// Mark as a hover-only entity that never enters the simulation.
    pub fn fixed(mut self) -> Self {
        self.kind = EntityKind::Static;
        self
    }

    pub fn draggable(&self) -> bool {
        self.kind != EntityKind::Static
    }

    /// Push an instantaneous pointer-velocity sample, evicting the oldest
    /// once the cap is reached.
    pub fn push_velocity_sample(&mut self, v: Vec2) {
        if self.velocity_history.len() == VELOCITY_HISTORY_CAP {
            self.velocity_history.remove(0);
        }
        self.velocity_history.push(v);
    }
}
