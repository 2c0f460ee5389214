//! User-facing playback events.
//!
//! [`StartTriggerEvent`] is the one-shot "play" interaction and
//! [`StopPlaybackEvent`] cancels a running session. The observers that apply
//! them live in [`crate::systems::playback`].

use bevy_ecs::prelude::*;

/// The user asked to start the music and the animation.
#[derive(Event, Debug, Clone, Copy)]
pub struct StartTriggerEvent {}

/// The user asked to stop playback and return to idle.
#[derive(Event, Debug, Clone, Copy)]
pub struct StopPlaybackEvent {}
