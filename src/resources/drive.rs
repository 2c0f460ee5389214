//! Per-tick values handed from one driver stage to the next.

use bevy_ecs::prelude::Resource;

use crate::resources::tuning::MAX_FRAME_HOLD_MS;

/// RMS loudness of the latest analysis window.
#[derive(Resource, Debug, Clone, Copy, PartialEq, Default)]
pub struct Loudness(pub f32);

/// Frame-hold duration (ms) derived from the latest loudness.
#[derive(Resource, Debug, Clone, Copy, PartialEq)]
pub struct FrameHold(pub f32);

impl Default for FrameHold {
    fn default() -> Self {
        FrameHold(MAX_FRAME_HOLD_MS)
    }
}
