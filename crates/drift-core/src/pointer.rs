//! Pointer/touch normalization and per-move velocity sampling.

use glam::Vec2;

/// Interaction-surface rectangle in client coordinates.
#[derive(Clone, Copy, Debug)]
pub struct SurfaceRect {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

impl SurfaceRect {
    pub fn new(left: f32, top: f32, width: f32, height: f32) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    pub fn aspect(&self) -> f32 {
        self.width / self.height.max(1.0)
    }
}

/// One normalized pointer position with its timestamp (seconds).
#[derive(Clone, Copy, Debug)]
pub struct PointerSample {
    /// Normalized device coordinates, both axes in [-1, 1], Y up.
    pub ndc: Vec2,
    pub time: f64,
}

/// A processed pointer move: the new sample plus delta and instantaneous
/// screen-space velocity against the previous one.
#[derive(Clone, Copy, Debug)]
pub struct PointerMove {
    pub sample: PointerSample,
    pub delta: Vec2,
    pub velocity: Vec2,
}

/// Convert client-space coordinates to NDC against the surface rect.
///
/// Note the Y flip: client Y grows downward, NDC Y grows upward.
#[inline]
pub fn client_to_ndc(client_x: f32, client_y: f32, rect: &SurfaceRect) -> Vec2 {
    let w = rect.width.max(1.0);
    let h = rect.height.max(1.0);
    Vec2::new(
        2.0 * (client_x - rect.left) / w - 1.0,
        -(2.0 * (client_y - rect.top) / h - 1.0),
    )
}

/// Tracks the latest pointer sample and derives deltas. Holds no history
/// beyond one previous sample.
#[derive(Default, Clone, Copy, Debug)]
pub struct PointerTracker {
    prev: Option<PointerSample>,
}

impl PointerTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Ingest a raw pointer event. The first sample yields zero delta and
    /// velocity, as does a zero time step.
    pub fn track(&mut self, client_x: f32, client_y: f32, rect: &SurfaceRect, time: f64) -> PointerMove {
        let sample = PointerSample {
            ndc: client_to_ndc(client_x, client_y, rect),
            time,
        };
        let (delta, velocity) = match self.prev {
            Some(prev) => {
                let dt = (sample.time - prev.time) as f32;
                let delta = sample.ndc - prev.ndc;
                let velocity = if dt > 0.0 { delta / dt } else { Vec2::ZERO };
                (delta, velocity)
            }
            None => (Vec2::ZERO, Vec2::ZERO),
        };
        self.prev = Some(sample);
        PointerMove {
            sample,
            delta,
            velocity,
        }
    }

    pub fn last(&self) -> Option<PointerSample> {
        self.prev
    }

    pub fn reset(&mut self) {
        self.prev = None;
    }
}
