//! Shared lockstep animation state.
//!
//! One [`AnimationState`] drives both characters. The frame clock owns the
//! frame index and timestamp; the playback observers own `is_running`.

use bevy_ecs::prelude::Resource;

#[derive(Resource, Debug, Clone, Copy, PartialEq, Default)]
pub struct AnimationState {
    /// Current frame, always below the shared frame count.
    pub current_frame_index: usize,
    /// Timestamp (ms) of the last frame advance.
    pub last_advance_timestamp: f64,
    pub is_running: bool,
}

impl AnimationState {
    /// State at the moment playback starts: frame 0, held from `timestamp`.
    pub fn started_at(timestamp: f64) -> Self {
        Self {
            current_frame_index: 0,
            last_advance_timestamp: timestamp,
            is_running: true,
        }
    }
}
