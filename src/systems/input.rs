//! Input system.
//!
//! Reads the mouse and keyboard from raylib and turns them into playback
//! events: a click on the play button (or Enter/Space) fires
//! [`StartTriggerEvent`] while the trigger is enabled, and Backspace fires
//! [`StopPlaybackEvent`] while running.
use bevy_ecs::prelude::*;
use raylib::ffi::{KeyboardKey, MouseButton};

use crate::events::playback::{StartTriggerEvent, StopPlaybackEvent};
use crate::resources::assets::AssetReadiness;
use crate::resources::canvas::CanvasSurface;
use crate::resources::notice::Notice;
use crate::resources::playback::{PlaybackState, PlaybackStates};
use crate::systems::overlay::{button_rect, contains, trigger_enabled};

pub fn update_input_state(
    rl: NonSend<raylib::RaylibHandle>,
    canvas: Res<CanvasSurface>,
    playback: Res<PlaybackState>,
    readiness: Res<AssetReadiness>,
    notice: Res<Notice>,
    mut commands: Commands,
) {
    let state = playback.get();

    if trigger_enabled(&readiness, state, &notice) {
        let clicked = rl.is_mouse_button_pressed(MouseButton::MOUSE_BUTTON_LEFT) && {
            let pos = rl.get_mouse_position();
            contains(&button_rect(canvas.w, canvas.h), pos.x, pos.y)
        };
        let key = rl.is_key_pressed(KeyboardKey::KEY_ENTER)
            || rl.is_key_pressed(KeyboardKey::KEY_SPACE);
        if clicked || key {
            commands.trigger(StartTriggerEvent {});
        }
    }

    if state == PlaybackStates::Running && rl.is_key_pressed(KeyboardKey::KEY_BACKSPACE) {
        commands.trigger(StopPlaybackEvent {});
    }
}
