pub mod bounds;
pub mod camera;
pub mod constants;
pub mod containment;
pub mod drag;
pub mod entity;
pub mod frame;
pub mod layout;
pub mod pointer;
pub mod scene;
pub mod throw;
pub mod world;

pub use bounds::ScreenBounds;
pub use camera::Camera;
pub use constants::*;
pub use drag::{DragController, DragSession};
pub use entity::{Entity, EntityKind, Spin};
pub use frame::FrameClock;
pub use layout::{spin_for, DeviceProfile, ModelPlacement, MODEL_PLACEMENTS, SPIN_TABLE};
pub use pointer::{client_to_ndc, PointerMove, PointerSample, PointerTracker, SurfaceRect};
pub use scene::{ray_sphere, InteractionScene, Projectile};
pub use throw::{throw_velocity, ThrowInputs};
pub use world::{BodyHandle, RigidBodyWorld};
