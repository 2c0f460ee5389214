//! Amplitude sampler.
//!
//! Turns the current time-domain byte window into one RMS loudness value per
//! tick. The window is read fresh from the [`AudioSession`] every tick.

use bevy_ecs::prelude::*;

use crate::resources::audiosession::AudioSession;
use crate::resources::drive::Loudness;
use crate::resources::tuning::SILENCE_BASELINE;

/// Root-mean-square of unsigned 8-bit samples centred on 128.
///
/// Each byte is normalised with `raw / 128 - 1` before squaring, so silence
/// gives 0 and a full-scale square wave gives just under 1. An empty buffer
/// is treated as silence.
pub fn sample_loudness(buffer: &[u8]) -> f32 {
    if buffer.is_empty() {
        return 0.0;
    }
    let sum: f32 = buffer
        .iter()
        .map(|&raw| {
            let norm = raw as f32 / SILENCE_BASELINE - 1.0;
            norm * norm
        })
        .sum();
    (sum / buffer.len() as f32).sqrt()
}

/// Refresh the analysis window and store its loudness.
pub fn amplitude_system(session: Option<ResMut<AudioSession>>, mut loudness: ResMut<Loudness>) {
    let Some(mut session) = session else {
        loudness.0 = 0.0;
        return;
    };
    loudness.0 = sample_loudness(session.read_amplitude_frame());
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 1e-6;

    #[test]
    fn test_silence_is_zero() {
        assert_eq!(sample_loudness(&[128; 256]), 0.0);
    }

    #[test]
    fn test_empty_buffer_is_zero() {
        assert_eq!(sample_loudness(&[]), 0.0);
    }

    #[test]
    fn test_full_scale_square_wave() {
        let buffer: Vec<u8> = (0..256).map(|i| if i % 2 == 0 { 0 } else { 255 }).collect();
        let rms = sample_loudness(&buffer);
        let high = 255.0_f32 / 128.0 - 1.0;
        let expected = ((1.0 + high * high) / 2.0).sqrt();
        assert!((rms - expected).abs() < EPSILON);
        assert!(rms > 0.99 && rms < 1.0);
    }

    #[test]
    fn test_constant_offset() {
        // every sample at 192 normalises to 0.5
        assert!((sample_loudness(&[192; 64]) - 0.5).abs() < EPSILON);
        assert!((sample_loudness(&[64; 64]) - 0.5).abs() < EPSILON);
    }
}
