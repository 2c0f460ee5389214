//! Play button overlay.
//!
//! Geometry and labels for the button shown while playback is not running.
//! The button is the only way to fire the start trigger, so
//! [`trigger_enabled`] is also what the input system checks.

use raylib::prelude::Rectangle;

use crate::resources::assets::AssetReadiness;
use crate::resources::notice::Notice;
use crate::resources::playback::PlaybackStates;

pub const BUTTON_WIDTH: f32 = 320.0;
pub const BUTTON_HEIGHT: f32 = 64.0;

pub const LABEL_LOADING_ASSETS: &str = "Loading...";
pub const LABEL_READY: &str = "Play music and start";
pub const LABEL_STARTING: &str = "Starting...";

/// Button rectangle centred on a canvas of `w` x `h` pixels.
pub fn button_rect(w: i32, h: i32) -> Rectangle {
    Rectangle {
        x: w as f32 / 2.0 - BUTTON_WIDTH / 2.0,
        y: h as f32 / 2.0 - BUTTON_HEIGHT / 2.0,
        width: BUTTON_WIDTH,
        height: BUTTON_HEIGHT,
    }
}

pub fn contains(rect: &Rectangle, x: f32, y: f32) -> bool {
    x >= rect.x && x <= rect.x + rect.width && y >= rect.y && y <= rect.y + rect.height
}

/// Whether a start trigger would be accepted right now.
pub fn trigger_enabled(readiness: &AssetReadiness, state: PlaybackStates, notice: &Notice) -> bool {
    readiness.all_ready() && state == PlaybackStates::Idle && !notice.is_terminal()
}

/// Text for the overlay, or `None` while running (overlay hidden).
pub fn overlay_label<'a>(
    readiness: &AssetReadiness,
    state: PlaybackStates,
    notice: &'a Notice,
) -> Option<&'a str> {
    if let Some(message) = notice.message() {
        return Some(message);
    }
    match state {
        PlaybackStates::Running => None,
        PlaybackStates::Loading => Some(LABEL_STARTING),
        PlaybackStates::Idle if readiness.all_ready() => Some(LABEL_READY),
        PlaybackStates::Idle => Some(LABEL_LOADING_ASSETS),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ready() -> AssetReadiness {
        let mut r = AssetReadiness::new(2);
        r.mark_loaded();
        r.mark_loaded();
        r
    }

    #[test]
    fn test_button_is_centred() {
        let rect = button_rect(1000, 600);
        assert_eq!(rect.x, 340.0);
        assert_eq!(rect.y, 268.0);
        assert!(contains(&rect, 500.0, 300.0));
        assert!(!contains(&rect, 10.0, 10.0));
    }

    #[test]
    fn test_trigger_disabled_until_assets_ready() {
        let notice = Notice::default();
        assert!(!trigger_enabled(&AssetReadiness::new(2), PlaybackStates::Idle, &notice));
        assert!(trigger_enabled(&ready(), PlaybackStates::Idle, &notice));
    }

    #[test]
    fn test_trigger_disabled_outside_idle() {
        let notice = Notice::default();
        assert!(!trigger_enabled(&ready(), PlaybackStates::Loading, &notice));
        assert!(!trigger_enabled(&ready(), PlaybackStates::Running, &notice));
    }

    #[test]
    fn test_trigger_disabled_after_failure() {
        let mut notice = Notice::default();
        notice.fail("no audio");
        assert!(!trigger_enabled(&ready(), PlaybackStates::Idle, &notice));
        assert_eq!(
            overlay_label(&ready(), PlaybackStates::Idle, &notice),
            Some("no audio")
        );
    }

    #[test]
    fn test_labels_follow_state() {
        let notice = Notice::default();
        assert_eq!(
            overlay_label(&AssetReadiness::new(2), PlaybackStates::Idle, &notice),
            Some(LABEL_LOADING_ASSETS)
        );
        assert_eq!(
            overlay_label(&ready(), PlaybackStates::Idle, &notice),
            Some(LABEL_READY)
        );
        assert_eq!(
            overlay_label(&ready(), PlaybackStates::Loading, &notice),
            Some(LABEL_STARTING)
        );
        assert_eq!(overlay_label(&ready(), PlaybackStates::Running, &notice), None);
    }
}
