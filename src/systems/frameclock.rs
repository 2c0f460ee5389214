//! Frame clock.
//!
//! Decides once per tick whether the shared frame index moves on. The tick
//! rate itself is the display refresh rate; a shorter frame-hold only means
//! more ticks pass the threshold. The index moves by at most one per tick.

use bevy_ecs::prelude::*;

use crate::resources::animationstate::AnimationState;
use crate::resources::characters::CharacterPair;
use crate::resources::drive::FrameHold;
use crate::resources::worldtime::WorldTime;

/// Advance `state` when more than `frame_duration` ms passed since the last advance.
///
/// Otherwise the state is returned unchanged.
pub fn tick(
    state: AnimationState,
    timestamp: f64,
    frame_duration: f32,
    frame_count: usize,
) -> AnimationState {
    if frame_count == 0 {
        return state;
    }
    let delta = timestamp - state.last_advance_timestamp;
    if delta > frame_duration as f64 {
        AnimationState {
            current_frame_index: (state.current_frame_index + 1) % frame_count,
            last_advance_timestamp: timestamp,
            ..state
        }
    } else {
        state
    }
}

/// Apply [`tick`] to the shared [`AnimationState`] using the current frame time.
pub fn frame_clock_system(
    mut state: ResMut<AnimationState>,
    hold: Res<FrameHold>,
    time: Res<WorldTime>,
    pair: Res<CharacterPair>,
) {
    let next = tick(*state, time.elapsed, hold.0, pair.frame_count());
    if next != *state {
        log::trace!(
            "frame {} -> {} at {:.1}ms (hold {:.1}ms)",
            state.current_frame_index,
            next.current_frame_index,
            time.elapsed,
            hold.0
        );
        *state = next;
    }
}
