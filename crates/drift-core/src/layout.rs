//! Default scene layout: the floating text models and their spin animation.

use crate::constants::{
    DESKTOP_CAMERA_Z, DESKTOP_MODEL_SCALE, MOBILE_CAMERA_Z, MOBILE_RESIZE_CAMERA_Z,
};
use glam::Vec3;

/// Which placement table and camera distance applies.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DeviceProfile {
    Desktop,
    Mobile,
}

impl DeviceProfile {
    pub fn camera_z(self) -> f32 {
        match self {
            DeviceProfile::Desktop => DESKTOP_CAMERA_Z,
            DeviceProfile::Mobile => MOBILE_CAMERA_Z,
        }
    }

    /// Camera distance after a live viewport resize. Mobile re-layouts sit
    /// closer than the initial load does.
    pub fn resize_camera_z(self) -> f32 {
        match self {
            DeviceProfile::Desktop => DESKTOP_CAMERA_Z,
            DeviceProfile::Mobile => MOBILE_RESIZE_CAMERA_Z,
        }
    }
}

/// Static placement of one model, with the portrait-layout alternative.
#[derive(Clone, Copy, Debug)]
pub struct ModelPlacement {
    pub name: &'static str,
    pub position: [f32; 3],
    pub mobile_position: [f32; 3],
    pub mobile_scale: f32,
    /// The button is hover-only; it never gets a physics body.
    pub fixed: bool,
}

impl ModelPlacement {
    pub fn position_for(&self, profile: DeviceProfile) -> Vec3 {
        match profile {
            DeviceProfile::Desktop => Vec3::from(self.position),
            DeviceProfile::Mobile => Vec3::from(self.mobile_position),
        }
    }

    pub fn scale_for(&self, profile: DeviceProfile) -> f32 {
        match profile {
            DeviceProfile::Desktop => DESKTOP_MODEL_SCALE,
            DeviceProfile::Mobile => self.mobile_scale,
        }
    }
}

pub const MODEL_PLACEMENTS: [ModelPlacement; 9] = [
    ModelPlacement {
        name: "text1",
        position: [-1.5, 2.0, 0.0],
        mobile_position: [0.0, 5.0, 0.0],
        mobile_scale: 0.8,
        fixed: false,
    },
    ModelPlacement {
        name: "text2",
        position: [3.5, 2.0, 0.0],
        mobile_position: [0.0, 3.2, 0.0],
        mobile_scale: 1.8,
        fixed: false,
    },
    ModelPlacement {
        name: "text3",
        position: [0.0, 1.0, 0.0],
        mobile_position: [0.0, 1.5, 0.0],
        mobile_scale: 0.6,
        fixed: false,
    },
    ModelPlacement {
        name: "text4",
        position: [-3.0, 0.0, 0.0],
        mobile_position: [-1.5, 0.0, 0.0],
        mobile_scale: 0.8,
        fixed: false,
    },
    ModelPlacement {
        name: "text5",
        position: [0.0, 0.0, 0.0],
        mobile_position: [0.0, 0.0, 0.0],
        mobile_scale: 0.8,
        fixed: false,
    },
    ModelPlacement {
        name: "text6",
        position: [3.0, 0.0, 0.0],
        mobile_position: [1.5, 0.0, 0.0],
        mobile_scale: 0.8,
        fixed: false,
    },
    ModelPlacement {
        name: "text7",
        position: [-1.0, -1.5, 0.0],
        mobile_position: [-0.3, -2.0, 0.0],
        mobile_scale: 0.8,
        fixed: false,
    },
    ModelPlacement {
        name: "text8",
        position: [0.0, -2.0, 0.0],
        mobile_position: [0.0, -4.0, 0.0],
        mobile_scale: 1.2,
        fixed: false,
    },
    ModelPlacement {
        name: "button",
        position: [0.0, 0.0, 0.0],
        mobile_position: [-1.5, -4.0, 0.0],
        mobile_scale: 0.8,
        fixed: true,
    },
];

/// Spin animation table: `(model, radians per second, axis)`.
pub const SPIN_TABLE: [(&str, f32, [f32; 3]); 4] = [
    ("text2", 0.5, [0.0, 1.0, 0.0]),
    ("text4", 1.0, [0.0, 1.0, 0.0]),
    ("text6", -0.5, [0.0, 1.0, 0.0]),
    ("text8", 1.0, [0.0, 1.0, 0.0]),
];

/// Look up the spin entry for a model name, if it has one.
pub fn spin_for(name: &str) -> Option<(Vec3, f32)> {
    SPIN_TABLE
        .iter()
        .find(|(n, _, _)| *n == name)
        .map(|(_, speed, axis)| (Vec3::from(*axis), *speed))
}
