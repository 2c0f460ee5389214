//! Playback state machine resource.
//!
//! `Idle` until the user triggers a start, `Loading` while the audio thread
//! decodes the track, `Running` once the track is audible and the animation
//! loop ticks. See `crate::events::playback` and
//! `crate::systems::playback` for the transitions.

use bevy_ecs::prelude::Resource;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PlaybackStates {
    #[default]
    Idle,
    Loading,
    Running,
}

/// Authoritative playback state.
#[derive(Resource, Debug, Clone, PartialEq, Eq, Default)]
pub struct PlaybackState {
    current: PlaybackStates,
}

impl PlaybackState {
    pub fn get(&self) -> PlaybackStates {
        self.current
    }

    pub fn set(&mut self, state: PlaybackStates) {
        self.current = state;
    }
}
