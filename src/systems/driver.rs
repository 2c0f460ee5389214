//! Animation driver.
//!
//! One tick of the audio-reactive loop is the chain
//! sample → map → clock, followed by the compositor in the host schedule.
//! The chain only runs while playback is `Running`; the host calls the
//! schedule once per display frame, which is the whole scheduling model.
//!
//! ```text
//! AudioSession ─▶ amplitude_system ─▶ Loudness
//!                  speed_system     ─▶ FrameHold
//!                  frame_clock_system (+ WorldTime) ─▶ AnimationState
//!                  render_system (after DriverSet)  ─▶ pixels
//! ```

use bevy_ecs::prelude::*;

use crate::resources::animationstate::AnimationState;
use crate::resources::drive::{FrameHold, Loudness};
use crate::resources::playback::{PlaybackState, PlaybackStates};
use crate::resources::tuning::AnimationTuning;
use crate::systems::amplitude::amplitude_system;
use crate::systems::frameclock::frame_clock_system;
use crate::systems::speed::speed_system;

/// System set containing the per-tick driver chain.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub struct DriverSet;

/// Run condition: the animation loop is active.
pub fn playback_is_running(state: Res<PlaybackState>, anim: Res<AnimationState>) -> bool {
    state.get() == PlaybackStates::Running && anim.is_running
}

/// Insert the resources the driver chain reads and writes.
pub fn init_driver_resources(world: &mut World) {
    world.init_resource::<AnimationState>();
    world.init_resource::<Loudness>();
    world.init_resource::<FrameHold>();
    world.init_resource::<AnimationTuning>();
    world.init_resource::<PlaybackState>();
}

/// Add the chained driver systems to `schedule`.
pub fn add_driver_systems(schedule: &mut Schedule) {
    schedule.add_systems(
        (amplitude_system, speed_system, frame_clock_system)
            .chain()
            .in_set(DriverSet)
            .run_if(playback_is_running),
    );
}
