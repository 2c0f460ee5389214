//! Audio system implementation backed by a dedicated thread and Raylib.
//!
//! This module hosts the background audio thread and the systems that bridge
//! it with the ECS world:
//! - [`audio_thread`] runs on its own OS thread, owns the Raylib audio device,
//!   and processes [`AudioCmd`] messages, emitting [`AudioMessage`] responses.
//! - [`forward_audio_cmds`] pushes ECS `AudioCmd` messages into the channel.
//! - [`poll_audio_messages`] non-blockingly drains the thread's replies into
//!   the ECS message queue each frame.
//!
//! Loading a track opens it twice: as a streaming `Music` for playback, and
//! as a `Wave` that is decoded to mono PCM and sent back with
//! [`AudioMessage::TrackLoaded`]. The main thread analyses that PCM at the
//! positions reported by [`AudioMessage::TrackPosition`].

use std::sync::Arc;

use crate::events::audio::{AudioCmd, AudioMessage};
use crate::resources::audio::AudioBridge;
use crate::resources::audiosession::PcmTrack;
use bevy_ecs::prelude::Messages;
use bevy_ecs::{
    prelude::{MessageReader, MessageWriter, Res},
    system::ResMut,
};
use crossbeam_channel::{Receiver, Sender};
use log::{debug, error, info};
use raylib::core::audio::{Music, RaylibAudio};
use rustc_hash::{FxHashMap, FxHashSet};

/// Drain pending replies from the audio thread into `Messages<AudioMessage>`.
pub fn poll_audio_messages(bridge: Res<AudioBridge>, mut writer: MessageWriter<AudioMessage>) {
    writer.write_batch(bridge.rx_msg.try_iter());
}

/// Advance the ECS message queue for [`AudioMessage`].
pub fn update_bevy_audio_messages(mut msgs: ResMut<Messages<AudioMessage>>) {
    msgs.update();
}

/// Forward ECS `AudioCmd` messages to the audio thread via the bridge sender.
pub fn forward_audio_cmds(bridge: Res<AudioBridge>, mut reader: MessageReader<AudioCmd>) {
    for cmd in reader.read() {
        // ignore send error on shutdown
        let _ = bridge.tx_cmd.send(cmd.clone());
    }
}

/// Advance the ECS message queue for `AudioCmd`.
pub fn update_bevy_audio_cmds(mut msgs: ResMut<Messages<AudioCmd>>) {
    msgs.update();
}

fn decode_pcm(audio: &RaylibAudio, path: &str) -> Result<PcmTrack, String> {
    let mut wave = audio.new_wave(path).map_err(|e| e.to_string())?;
    let sample_rate = wave.sample_rate();
    // mono f32 so the exposed sample slice spans every frame
    wave.format(sample_rate as i32, 32, 1);
    let samples = wave.load_samples();
    let pcm = PcmTrack::from_frames(
        samples.as_ref(),
        wave.frame_count(),
        wave.channels(),
        sample_rate,
    )?;
    debug!("[audio] decoded {} mono samples from '{}'", pcm.len(), path);
    Ok(pcm)
}

/// Serve commands without a device: every load fails, everything else is a no-op.
fn run_without_device(rx_cmd: Receiver<AudioCmd>, tx_msg: Sender<AudioMessage>, reason: String) {
    for cmd in rx_cmd.iter() {
        match cmd {
            AudioCmd::LoadTrack { id, .. } => {
                let _ = tx_msg.send(AudioMessage::TrackLoadFailed {
                    id,
                    error: reason.clone(),
                });
            }
            AudioCmd::Shutdown => break,
            _ => {}
        }
    }
}

/// Entry point of the dedicated audio thread.
///
/// Owns the raylib audio device and every `Music` handle for the life of the
/// thread. Commands are drained without blocking, playing streams are pumped
/// and their positions reported, finished looped tracks are restarted. The
/// loop sleeps briefly between iterations and exits on [`AudioCmd::Shutdown`].
pub fn audio_thread(rx_cmd: Receiver<AudioCmd>, tx_msg: Sender<AudioMessage>) {
    let audio = match RaylibAudio::init_audio_device() {
        Ok(device) => device,
        Err(e) => {
            error!("[audio] failed to initialize audio device: {}", e);
            run_without_device(rx_cmd, tx_msg, e.to_string());
            return;
        }
    };

    info!(
        "[audio] thread starting (id={:?})",
        std::thread::current().id()
    );

    let mut tracks: FxHashMap<String, Music> = FxHashMap::default();
    let mut playing: FxHashSet<String> = FxHashSet::default();
    let mut looped: FxHashSet<String> = FxHashSet::default();

    'run: loop {
        // 1) Drain commands
        for cmd in rx_cmd.try_iter() {
            match cmd {
                AudioCmd::LoadTrack { id, path } => {
                    let loaded = audio
                        .new_music(&path)
                        .map_err(|e| e.to_string())
                        .and_then(|music| decode_pcm(&audio, &path).map(|pcm| (music, pcm)));
                    match loaded {
                        Ok((music, pcm)) => {
                            info!("[audio] loaded id='{}' path='{}'", id, path);
                            tracks.insert(id.clone(), music);
                            let _ = tx_msg.send(AudioMessage::TrackLoaded {
                                id,
                                pcm: Arc::new(pcm),
                            });
                        }
                        Err(e) => {
                            error!(
                                "[audio] load failed id='{}' path='{}' error='{}'",
                                id, path, e
                            );
                            let _ = tx_msg.send(AudioMessage::TrackLoadFailed { id, error: e });
                        }
                    }
                }
                AudioCmd::PlayTrack {
                    id,
                    looped: want_loop,
                } => {
                    if let Some(music) = tracks.get(&id) {
                        info!("[audio] play start id='{}' looped={}", id, want_loop);
                        music.seek_stream(0.0);
                        music.play_stream();
                        playing.insert(id.clone());
                        if want_loop {
                            looped.insert(id.clone());
                        } else {
                            looped.remove(&id);
                        }
                        let _ = tx_msg.send(AudioMessage::TrackStarted { id });
                    }
                }
                AudioCmd::StopTrack { id } => {
                    if let Some(music) = tracks.get(&id) {
                        info!("[audio] stop id='{}'", id);
                        music.stop_stream();
                        playing.remove(&id);
                        looped.remove(&id);
                        let _ = tx_msg.send(AudioMessage::TrackStopped { id });
                    }
                }
                AudioCmd::UnloadTrack { id } => {
                    playing.remove(&id);
                    looped.remove(&id);
                    if tracks.remove(&id).is_some() {
                        info!("[audio] unload id='{}'", id);
                        let _ = tx_msg.send(AudioMessage::TrackUnloaded { id });
                    }
                }
                AudioCmd::Shutdown => {
                    info!("[audio] shutdown requested");
                    playing.clear();
                    looped.clear();
                    tracks.clear();
                    break 'run;
                }
            }
        }

        // 2) Pump streams, report positions, restart looped tracks that ended.
        let mut ended: Vec<String> = Vec::new();
        for id in playing.iter() {
            if let Some(music) = tracks.get(id) {
                if music.is_stream_playing() {
                    music.update_stream();
                    let _ = tx_msg.send(AudioMessage::TrackPosition {
                        id: id.clone(),
                        seconds: music.get_time_played(),
                    });
                } else {
                    let len = music.get_time_length();
                    let played = music.get_time_played();
                    if played >= len - 0.01 {
                        ended.push(id.clone());
                    }
                }
            }
        }
        for id in ended.iter() {
            if looped.contains(id) {
                if let Some(music) = tracks.get(id) {
                    debug!("[audio] restarting looped id='{}'", id);
                    music.seek_stream(0.0);
                    music.play_stream();
                    let _ = tx_msg.send(AudioMessage::TrackStarted { id: id.clone() });
                }
            } else {
                info!("[audio] finished id='{}'", id);
                playing.remove(id);
                let _ = tx_msg.send(AudioMessage::TrackStopped { id: id.clone() });
            }
        }

        std::thread::sleep(std::time::Duration::from_millis(10));
    } // 'run

    info!(
        "[audio] thread exiting (id={:?})",
        std::thread::current().id()
    );

    // On exit, tracks drop before `audio`, satisfying lifetimes
}
