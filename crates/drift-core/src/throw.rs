//! Release-velocity calculation.
//!
//! Turns the rolling pointer-velocity history of a drag into the linear
//! velocity imparted on release. X/Y come from a recency-weighted average of
//! the history; Z comes from how the pointer moved relative to the screen
//! center (flinging outward pushes the model away). The result is magnitude
//! capped and lightly jittered, so tests assert bounds rather than exact
//! values.

use crate::constants::{
    DISTANCE_FACTOR_MAX, DISTANCE_FACTOR_SCALE, HISTORY_WEIGHT_BASE, RADIAL_Z_SCALE,
    SPEED_MULTIPLIER_DIVISOR, SPEED_MULTIPLIER_MAX, SPEED_MULTIPLIER_MIN, THROW_FORCE,
    THROW_JITTER, THROW_SPEED_BASE_CAP, THROW_SPEED_MAX_CAP,
};
use glam::{Vec2, Vec3};
use rand::Rng;

/// Everything the release computation needs from the drag session.
#[derive(Clone, Copy, Debug)]
pub struct ThrowInputs<'a> {
    /// Instantaneous pointer velocities, oldest first.
    pub history: &'a [Vec2],
    /// Change in the pointer's radial distance from screen center over the
    /// last move; positive means the pointer moved outward.
    pub radial_delta: f32,
    /// Entity distance from the camera at release.
    pub camera_distance: f32,
}

/// Exponentially-weighted mean of the history; weight of sample `i` (oldest
/// first) is `HISTORY_WEIGHT_BASE^i`, so recent samples dominate.
pub(crate) fn weighted_history_average(history: &[Vec2]) -> Vec2 {
    if history.is_empty() {
        return Vec2::ZERO;
    }
    let mut sum = Vec2::ZERO;
    let mut total = 0.0f32;
    for (i, v) in history.iter().enumerate() {
        let w = HISTORY_WEIGHT_BASE.powi(i as i32);
        sum += *v * w;
        total += w;
    }
    sum / total
}

/// Total speed allowance for a release whose latest sample had the given
/// magnitude: `min(10, 5 + latest/2)`.
pub(crate) fn speed_cap(latest_magnitude: f32) -> f32 {
    (THROW_SPEED_BASE_CAP + latest_magnitude / 2.0).min(THROW_SPEED_MAX_CAP)
}

/// Compute the post-release linear velocity.
pub fn throw_velocity(inputs: &ThrowInputs, rng: &mut impl Rng) -> Vec3 {
    let avg = weighted_history_average(inputs.history);
    let latest = inputs
        .history
        .last()
        .map(|v| v.length())
        .unwrap_or(0.0);

    // A hard final flick amplifies the whole average.
    let multiplier = (latest / SPEED_MULTIPLIER_DIVISOR)
        .clamp(SPEED_MULTIPLIER_MIN, SPEED_MULTIPLIER_MAX);
    // Far-away entities need larger world-space velocities for the same
    // screen-space motion, up to a cap.
    let distance_factor = (inputs.camera_distance * DISTANCE_FACTOR_SCALE).min(DISTANCE_FACTOR_MAX);

    let planar = avg * multiplier * distance_factor * THROW_FORCE;
    let mut v = Vec3::new(
        planar.x,
        planar.y,
        inputs.radial_delta * RADIAL_Z_SCALE * THROW_FORCE,
    );

    let cap = speed_cap(latest);
    let speed = v.length();
    if speed > cap {
        v *= cap / speed;
    }

    // Jitter for visual variety; deliberately applied after the cap.
    v.x += rng.gen_range(-THROW_JITTER..=THROW_JITTER);
    v.y += rng.gen_range(-THROW_JITTER..=THROW_JITTER);
    v.z += rng.gen_range(-THROW_JITTER..=THROW_JITTER);
    v
}
