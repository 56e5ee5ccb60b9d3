//! Per-step screen-bound enforcement for free entities.
//!
//! Positions are clamped to the bounds box minus a fixed inward margin, and
//! the velocity component on a violated axis is reflected to point back
//! inward at 90% of its magnitude.

use crate::bounds::ScreenBounds;
use crate::constants::{BOUNCE_RESTITUTION, CONTAIN_MARGIN};
use glam::Vec3;

/// Clamp `position` to the margin-inset bounds and reflect `velocity` on any
/// violated axis. Returns true if a correction was applied; the caller is
/// then expected to kick the body awake and give it a small random spin.
pub fn enforce(bounds: &ScreenBounds, position: &mut Vec3, velocity: &mut Vec3) -> bool {
    let mut corrected = false;
    for axis in 0..3 {
        let lo = bounds.min[axis] + CONTAIN_MARGIN;
        let hi = bounds.max[axis] - CONTAIN_MARGIN;
        if position[axis] < lo {
            position[axis] = lo;
            // Inward means positive on the min side, regardless of prior sign.
            velocity[axis] = velocity[axis].abs() * BOUNCE_RESTITUTION;
            corrected = true;
        } else if position[axis] > hi {
            position[axis] = hi;
            velocity[axis] = -velocity[axis].abs() * BOUNCE_RESTITUTION;
            corrected = true;
        }
    }
    corrected
}
