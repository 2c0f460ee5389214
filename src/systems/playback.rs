//! Playback state machine transitions.
//!
//! - [`start_trigger_observer`]: Idle → Loading, asks the audio thread to load
//!   the track. Ignored unless the trigger is enabled.
//! - [`playback_messages_system`]: reacts to audio thread messages. A loaded
//!   track becomes the [`AudioSession`] and starts looping; the first
//!   `TrackStarted` after that moves Loading → Running. A failed load leaves
//!   the machine in Idle with a terminal [`Notice`].
//! - [`stop_playback_observer`]: Loading/Running → Idle, tearing the session
//!   down.
//!
//! Nothing here retries. A failure is final for the process.

use bevy_ecs::observer::On;
use bevy_ecs::prelude::*;
use log::{debug, error, info, warn};

use crate::events::audio::{AudioCmd, AudioMessage};
use crate::events::playback::{StartTriggerEvent, StopPlaybackEvent};
use crate::resources::animationstate::AnimationState;
use crate::resources::appconfig::AppConfig;
use crate::resources::assets::AssetReadiness;
use crate::resources::audiosession::AudioSession;
use crate::resources::notice::Notice;
use crate::resources::playback::{PlaybackState, PlaybackStates};
use crate::resources::worldtime::WorldTime;
use crate::systems::overlay::trigger_enabled;

/// Id under which the looping track is known to the audio thread.
pub const TRACK_ID: &str = "theme";

pub fn start_trigger_observer(
    _trigger: On<StartTriggerEvent>,
    mut playback: ResMut<PlaybackState>,
    readiness: Res<AssetReadiness>,
    notice: Res<Notice>,
    config: Res<AppConfig>,
    mut audio_cmds: MessageWriter<AudioCmd>,
) {
    if !trigger_enabled(&readiness, playback.get(), &notice) {
        debug!(
            "Start trigger ignored (state={:?}, assets {}/2, notice={})",
            playback.get(),
            readiness.loaded(),
            notice.is_terminal()
        );
        return;
    }
    info!("Start triggered, loading audio '{}'", config.audio_path);
    playback.set(PlaybackStates::Loading);
    audio_cmds.write(AudioCmd::LoadTrack {
        id: TRACK_ID.to_string(),
        path: config.audio_path.clone(),
    });
}

pub fn stop_playback_observer(
    _trigger: On<StopPlaybackEvent>,
    mut playback: ResMut<PlaybackState>,
    mut anim: ResMut<AnimationState>,
    mut audio_cmds: MessageWriter<AudioCmd>,
    mut commands: Commands,
) {
    if playback.get() == PlaybackStates::Idle {
        debug!("Stop ignored, already idle");
        return;
    }
    info!("Stopping playback from {:?}", playback.get());
    audio_cmds.write(AudioCmd::StopTrack {
        id: TRACK_ID.to_string(),
    });
    audio_cmds.write(AudioCmd::UnloadTrack {
        id: TRACK_ID.to_string(),
    });
    commands.remove_resource::<AudioSession>();
    anim.is_running = false;
    playback.set(PlaybackStates::Idle);
}

/// Apply audio thread messages to the playback state and session.
pub fn playback_messages_system(
    mut reader: MessageReader<AudioMessage>,
    mut playback: ResMut<PlaybackState>,
    mut anim: ResMut<AnimationState>,
    mut notice: ResMut<Notice>,
    mut session: Option<ResMut<AudioSession>>,
    time: Res<WorldTime>,
    mut audio_cmds: MessageWriter<AudioCmd>,
    mut commands: Commands,
) {
    for msg in reader.read() {
        match msg {
            AudioMessage::TrackLoaded { id, pcm } if id == TRACK_ID => {
                if playback.get() != PlaybackStates::Loading {
                    debug!("Track '{}' loaded after playback was cancelled", id);
                    continue;
                }
                info!(
                    "Track '{}' decoded: {:.1}s at {} Hz",
                    id,
                    pcm.duration_secs(),
                    pcm.sample_rate
                );
                commands.insert_resource(AudioSession::new(id.clone(), pcm.clone()));
                audio_cmds.write(AudioCmd::PlayTrack {
                    id: id.clone(),
                    looped: true,
                });
            }
            AudioMessage::TrackLoadFailed { id, error } if id == TRACK_ID => {
                if playback.get() != PlaybackStates::Loading {
                    warn!("Track '{}' failed after playback was cancelled: {}", id, error);
                    continue;
                }
                error!("Failed to load audio track '{}': {}", id, error);
                notice.fail(format!("Could not load audio: {}", error));
                playback.set(PlaybackStates::Idle);
            }
            AudioMessage::TrackStarted { id } if id == TRACK_ID => {
                match playback.get() {
                    // a start left over from a stopped session; wait for our own load
                    PlaybackStates::Loading if session.is_none() => {
                        debug!("Track '{}' start ignored, no session loaded yet", id);
                    }
                    PlaybackStates::Loading => {
                        info!("Track '{}' playing, animation running", id);
                        *anim = AnimationState::started_at(time.elapsed);
                        playback.set(PlaybackStates::Running);
                    }
                    _ => debug!("Track '{}' restarted", id),
                }
            }
            AudioMessage::TrackPosition { id, seconds } => {
                if let Some(session) = session.as_mut().filter(|s| s.track_id() == id.as_str()) {
                    session.set_position(*seconds);
                }
            }
            AudioMessage::TrackStopped { id } | AudioMessage::TrackUnloaded { id } => {
                debug!("Track '{}' stopped or unloaded", id);
            }
            _ => {}
        }
    }
}
