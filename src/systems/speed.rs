//! Speed mapper: loudness to frame-hold duration.

use bevy_ecs::prelude::*;

use crate::resources::drive::{FrameHold, Loudness};
use crate::resources::tuning::AnimationTuning;

/// Linearly map loudness onto a frame-hold duration.
///
/// Loudness is capped at 1.0, so anything louder holds frames for
/// `min_duration`. Silence holds them for `max_duration`.
pub fn map_speed(loudness: f32, min_duration: f32, max_duration: f32) -> f32 {
    max_duration - loudness.min(1.0) * (max_duration - min_duration)
}

/// Store the frame-hold duration for the loudness sampled this tick.
pub fn speed_system(
    loudness: Res<Loudness>,
    tuning: Res<AnimationTuning>,
    mut hold: ResMut<FrameHold>,
) {
    hold.0 = map_speed(loudness.0, tuning.min_frame_hold, tuning.max_frame_hold);
}
