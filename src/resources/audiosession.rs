//! Audio session: decoded PCM of the playing track plus the analysis buffer.
//!
//! The audio thread owns the raylib stream that is actually heard. It also
//! decodes the same file once into a mono [`PcmTrack`] and hands it over, so
//! the main thread can look at the samples around the reported playback
//! position without touching raylib audio.
//!
//! [`AudioSession::read_amplitude_frame`] plays the role of an analyser node:
//! it rewrites the fixed-size byte buffer with the time-domain window that
//! ends at the current position, using the 8-bit format where 128 is silence.

use std::sync::Arc;

use bevy_ecs::prelude::Resource;

use crate::resources::tuning::{ANALYSIS_WINDOW, SILENCE_BASELINE};

/// Mono PCM samples in `[-1.0, 1.0]`.
#[derive(Debug, Clone, PartialEq)]
pub struct PcmTrack {
    pub sample_rate: u32,
    pub samples: Vec<f32>,
}

impl PcmTrack {
    pub fn new(sample_rate: u32, samples: Vec<f32>) -> Self {
        Self {
            sample_rate,
            samples,
        }
    }

    /// Build a track from a full decode of `frame_count` interleaved frames.
    ///
    /// Fails when fewer or more samples arrive than the frames promise, which
    /// would otherwise shorten the track and misalign every position lookup.
    pub fn from_frames(
        samples: &[f32],
        frame_count: u32,
        channels: u32,
        sample_rate: u32,
    ) -> Result<Self, String> {
        let expected = frame_count as usize * channels.max(1) as usize;
        if samples.len() != expected {
            return Err(format!(
                "decoded {} samples, expected {} ({} frames x {} channels)",
                samples.len(),
                expected,
                frame_count,
                channels
            ));
        }
        Ok(Self::from_interleaved(samples, channels, sample_rate))
    }

    /// Down-mix interleaved frames by averaging the channels.
    pub fn from_interleaved(interleaved: &[f32], channels: u32, sample_rate: u32) -> Self {
        let channels = channels.max(1) as usize;
        let samples = interleaved
            .chunks(channels)
            .map(|frame| frame.iter().sum::<f32>() / frame.len() as f32)
            .collect();
        Self::new(sample_rate, samples)
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn duration_secs(&self) -> f32 {
        if self.sample_rate == 0 {
            return 0.0;
        }
        self.samples.len() as f32 / self.sample_rate as f32
    }

    /// Index of the sample playing at `seconds`, wrapped into the track.
    pub fn index_at(&self, seconds: f32) -> usize {
        if self.samples.is_empty() {
            return 0;
        }
        let idx = (seconds.max(0.0) * self.sample_rate as f32) as usize;
        idx % self.samples.len()
    }
}

/// Convert one `f32` sample into the unsigned 8-bit time-domain format.
pub fn sample_to_byte(sample: f32) -> u8 {
    (SILENCE_BASELINE + sample * SILENCE_BASELINE).clamp(0.0, 255.0) as u8
}

#[derive(Resource, Debug)]
pub struct AudioSession {
    track_id: String,
    pcm: Arc<PcmTrack>,
    position_secs: f32,
    buffer: [u8; ANALYSIS_WINDOW],
}

impl AudioSession {
    pub fn new(track_id: impl Into<String>, pcm: Arc<PcmTrack>) -> Self {
        Self {
            track_id: track_id.into(),
            pcm,
            position_secs: 0.0,
            buffer: [SILENCE_BASELINE as u8; ANALYSIS_WINDOW],
        }
    }

    pub fn track_id(&self) -> &str {
        &self.track_id
    }

    pub fn position_secs(&self) -> f32 {
        self.position_secs
    }

    /// Record the playback position reported by the audio thread.
    pub fn set_position(&mut self, seconds: f32) {
        self.position_secs = seconds;
    }

    /// The buffer as last filled by [`read_amplitude_frame`](Self::read_amplitude_frame).
    pub fn buffer(&self) -> &[u8] {
        &self.buffer
    }

    /// Refill the analysis buffer with the window ending at the current position.
    ///
    /// Samples that would fall before the start of the track read as silence.
    pub fn read_amplitude_frame(&mut self) -> &[u8] {
        let pcm = &self.pcm;
        if pcm.is_empty() {
            self.buffer.fill(SILENCE_BASELINE as u8);
            return &self.buffer;
        }

        let end = pcm.index_at(self.position_secs) as isize;
        let start = end - ANALYSIS_WINDOW as isize;
        for (i, slot) in self.buffer.iter_mut().enumerate() {
            let idx = start + i as isize;
            *slot = if idx < 0 {
                SILENCE_BASELINE as u8
            } else {
                sample_to_byte(pcm.samples[idx as usize])
            };
        }
        &self.buffer
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_to_byte_baseline_and_extremes() {
        assert_eq!(sample_to_byte(0.0), 128);
        assert_eq!(sample_to_byte(-1.0), 0);
        assert_eq!(sample_to_byte(1.0), 255);
        assert_eq!(sample_to_byte(4.0), 255);
    }

    #[test]
    fn test_downmix_averages_channels() {
        let pcm = PcmTrack::from_interleaved(&[1.0, 0.0, -0.5, -0.5], 2, 44100);
        assert_eq!(pcm.samples, vec![0.5, -0.5]);
    }

    #[test]
    fn test_full_stereo_decode_keeps_every_frame() {
        // 4 stereo frames at 4 Hz: one second of audio
        let interleaved = [0.5, 0.5, 1.0, 0.0, -1.0, -1.0, 0.0, 0.0];
        let pcm = PcmTrack::from_frames(&interleaved, 4, 2, 4).unwrap();
        assert_eq!(pcm.len(), 4);
        assert_eq!(pcm.duration_secs(), 1.0);
        assert_eq!(pcm.samples, vec![0.5, 0.5, -1.0, 0.0]);
        assert_eq!(pcm.index_at(0.75), 3);
    }

    #[test]
    fn test_truncated_decode_is_rejected() {
        // only frame_count values of a stereo decode: half the track
        let half = [0.5, 0.5, 1.0, 0.0];
        assert!(PcmTrack::from_frames(&half, 4, 2, 4).is_err());
    }

    #[test]
    fn test_mono_decode_matches_frame_count() {
        let pcm = PcmTrack::from_frames(&[0.1, 0.2, 0.3], 3, 1, 3).unwrap();
        assert_eq!(pcm.len(), 3);
        assert_eq!(pcm.samples, vec![0.1, 0.2, 0.3]);
    }

    #[test]
    fn test_index_wraps_for_looping_track() {
        let pcm = PcmTrack::new(10, vec![0.0; 20]);
        assert_eq!(pcm.index_at(0.5), 5);
        assert_eq!(pcm.index_at(2.5), 5);
        assert_eq!(pcm.index_at(-1.0), 0);
    }

    #[test]
    fn test_window_before_start_reads_silence() {
        let pcm = Arc::new(PcmTrack::new(1000, vec![1.0; 1000]));
        let mut session = AudioSession::new("theme", pcm);
        session.set_position(0.0);
        assert!(session.read_amplitude_frame().iter().all(|&b| b == 128));
    }

    #[test]
    fn test_window_ends_at_position() {
        // first half silent, second half full-scale
        let mut samples = vec![0.0; 500];
        samples.extend(std::iter::repeat_n(1.0, 500));
        let mut session = AudioSession::new("theme", Arc::new(PcmTrack::new(1000, samples)));

        session.set_position(0.4);
        assert!(session.read_amplitude_frame().iter().all(|&b| b == 128));

        session.set_position(0.9);
        assert!(session.read_amplitude_frame().iter().all(|&b| b == 255));
        assert_eq!(session.buffer().len(), ANALYSIS_WINDOW);
    }

    #[test]
    fn test_empty_track_reads_silence() {
        let mut session = AudioSession::new("theme", Arc::new(PcmTrack::new(44100, Vec::new())));
        session.set_position(3.0);
        assert!(session.read_amplitude_frame().iter().all(|&b| b == 128));
    }
}
