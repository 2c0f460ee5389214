//! Fixed tuning constants for the audio-reactive loop.
//!
//! These values are compile-time constants. The [`AnimationTuning`] resource
//! carries them into systems so tests can run with the same numbers the
//! application uses.

use bevy_ecs::prelude::Resource;

/// Number of time-domain samples read per tick.
pub const ANALYSIS_WINDOW: usize = 256;
/// Byte value of a silent sample in the 8-bit time-domain format.
pub const SILENCE_BASELINE: f32 = 128.0;
/// Frame-hold duration at full loudness, in milliseconds.
pub const MIN_FRAME_HOLD_MS: f32 = 50.0;
/// Frame-hold duration at silence, in milliseconds.
pub const MAX_FRAME_HOLD_MS: f32 = 500.0;
/// Horizontal gap between the two characters, in pixels.
pub const CHARACTER_GAP: f32 = 50.0;

/// Tuning values read by the driver and compositor systems.
#[derive(Resource, Debug, Clone, Copy, PartialEq)]
pub struct AnimationTuning {
    /// Fastest frame-hold duration (loudest input).
    pub min_frame_hold: f32,
    /// Slowest frame-hold duration (silent input).
    pub max_frame_hold: f32,
    /// Gap between the characters.
    pub gap: f32,
}

impl Default for AnimationTuning {
    fn default() -> Self {
        Self {
            min_frame_hold: MIN_FRAME_HOLD_MS,
            max_frame_hold: MAX_FRAME_HOLD_MS,
            gap: CHARACTER_GAP,
        }
    }
}
