// Shared interaction tuning constants used by both the controller and the
// per-frame loop.

// Camera / scene layout
pub const DEFAULT_FOV_DEG: f32 = 5.0; // narrow FOV, matches the flat "billboard" look
pub const DESKTOP_CAMERA_Z: f32 = 75.0;
pub const MOBILE_CAMERA_Z: f32 = 150.0; // pulled back so the stack fits portrait screens
pub const MOBILE_RESIZE_CAMERA_Z: f32 = 100.0; // closer distance used on later resizes
pub const DESKTOP_MODEL_SCALE: f32 = 1.1;

// Screen bounds
pub const FRUSTUM_MARGIN: f32 = 0.05; // shrink the visible frustum slice by 5%
pub const BOUNDS_Z_MIN: f32 = -10.0; // fixed depth limits, independent of camera
pub const BOUNDS_Z_MAX: f32 = 10.0;

// Containment
pub const CONTAIN_MARGIN: f32 = 0.2; // inward margin before a bounce triggers
pub const BOUNCE_RESTITUTION: f32 = 0.9; // retained speed after a wall bounce
pub const BOUNCE_SPIN_MAX: f32 = 0.75; // random angular kick per axis (rad/s)

// Drag smoothing
pub const VELOCITY_HISTORY_CAP: usize = 10; // rolling pointer-velocity samples per entity
pub const VELOCITY_SMOOTHING: f32 = 0.3; // exponential smoothing alpha
pub const SMOOTHED_VELOCITY_MAX: f32 = 15.0; // per-axis clamp on smoothed velocity (ndc/s)

// Throw
pub const HISTORY_WEIGHT_BASE: f32 = 1.5; // weight of sample i is base^i, recent dominates
pub const SPEED_MULTIPLIER_DIVISOR: f32 = 4.0;
pub const SPEED_MULTIPLIER_MIN: f32 = 1.0;
pub const SPEED_MULTIPLIER_MAX: f32 = 5.0;
pub const DISTANCE_FACTOR_SCALE: f32 = 0.05; // throw scales with camera distance, capped
pub const DISTANCE_FACTOR_MAX: f32 = 0.5;
pub const THROW_FORCE: f32 = 1.5; // multiplies the planar and Z terms alike
pub const RADIAL_Z_SCALE: f32 = 2.0; // outward pointer motion maps to +Z velocity
pub const THROW_SPEED_BASE_CAP: f32 = 5.0; // total cap is min(MAX_CAP, BASE_CAP + latest/2)
pub const THROW_SPEED_MAX_CAP: f32 = 10.0;
pub const THROW_JITTER: f32 = 0.05; // per-axis uniform jitter on release

// Loop safeguards
pub const RUNAWAY_SPEED: f32 = 20.0; // above this the velocity is halved
pub const RUNAWAY_DAMP: f32 = 0.5;
pub const AMBIENT_NUDGE_CHANCE: f32 = 0.01; // per entity per frame, paused during a drag
pub const AMBIENT_NUDGE_MAX: f32 = 0.03; // nudge magnitude per axis
pub const FALL_REMOVE_Y: f32 = -20.0; // projectiles below this leave the scene

// Frame pacing
pub const TARGET_FPS: f64 = 30.0; // retro cap, ticks arriving early are skipped

// Picking
pub const PICK_SPHERE_RADIUS: f32 = 0.8; // ray-sphere radius for hover/drag picking

// Projectiles
pub const PROJECTILE_SPEED: f32 = 12.0;
pub const PROJECTILE_SPAWN_DISTANCE: f32 = 2.0; // spawn offset along the camera ray
