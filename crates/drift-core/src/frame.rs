//! Frame pacing for the interaction loop.

use crate::constants::TARGET_FPS;

/// Caps the loop to a target rate by skipping ticks that arrive before the
/// frame interval has elapsed. Timestamps come from the host (seconds); the
/// clock itself never reads a system timer.
#[derive(Clone, Copy, Debug)]
pub struct FrameClock {
    min_interval: f64,
    last_processed: Option<f64>,
}

impl FrameClock {
    pub fn new() -> Self {
        Self::with_target_fps(TARGET_FPS)
    }

    pub fn with_target_fps(fps: f64) -> Self {
        Self {
            min_interval: 1.0 / fps,
            last_processed: None,
        }
    }

    /// Returns the elapsed simulation time for this tick, or `None` when the
    /// tick should be skipped. The first call only establishes the epoch.
    pub fn tick(&mut self, now_sec: f64) -> Option<f32> {
        match self.last_processed {
            None => {
                self.last_processed = Some(now_sec);
                None
            }
            Some(last) => {
                let dt = now_sec - last;
                if dt < self.min_interval {
                    return None;
                }
                self.last_processed = Some(now_sec);
                Some(dt as f32)
            }
        }
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}
