use std::sync::Arc;

use bevy_ecs::message::Message;

use crate::resources::audiosession::PcmTrack;

/// Commands sent *to* the audio thread
#[derive(Message, Debug, Clone, PartialEq)]
pub enum AudioCmd {
    LoadTrack { id: String, path: String },
    PlayTrack { id: String, looped: bool },
    StopTrack { id: String },
    UnloadTrack { id: String },
    Shutdown,
}

/// Messages sent *back* from the audio thread
#[derive(Message, Debug, Clone)]
pub enum AudioMessage {
    /// Stream is ready and `pcm` holds the decoded mono samples.
    TrackLoaded { id: String, pcm: Arc<PcmTrack> },
    TrackLoadFailed { id: String, error: String },
    /// Playback started (also sent when a looped track restarts).
    TrackStarted { id: String },
    /// Current playback position of a playing track.
    TrackPosition { id: String, seconds: f32 },
    TrackStopped { id: String },
    TrackUnloaded { id: String },
}
