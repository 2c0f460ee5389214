//! Sprite compositor and frame rendering.
//!
//! [`layout_sprites`] is the pure geometry: both characters side by side,
//! centred as one unit with a fixed gap, each centred vertically on its own
//! frame height, drawn unscaled. [`draw_sprites`] clears the surface and
//! issues both draws through the [`DrawSurface`] seam. [`render_system`]
//! binds that seam to raylib and draws the play overlay when idle.

use bevy_ecs::prelude::*;
use raylib::prelude::*;

use crate::resources::animationstate::AnimationState;
use crate::resources::assets::AssetReadiness;
use crate::resources::canvas::CanvasSurface;
use crate::resources::characters::CharacterPair;
use crate::resources::notice::Notice;
use crate::resources::playback::PlaybackState;
use crate::resources::texturestore::TextureStore;
use crate::resources::tuning::AnimationTuning;
use crate::systems::overlay::{button_rect, overlay_label, trigger_enabled};

const BACKGROUND: Color = Color::new(24, 24, 32, 255);
const BUTTON_ENABLED: Color = Color::new(230, 180, 40, 255);
const BUTTON_DISABLED: Color = Color::new(90, 90, 100, 255);
const LABEL_FONT_SIZE: i32 = 24;

/// Minimal drawing surface the compositor needs.
pub trait DrawSurface {
    fn width(&self) -> i32;
    fn height(&self) -> i32;
    fn clear(&mut self, x: i32, y: i32, w: i32, h: i32);
    fn draw_region(&mut self, tex_key: &str, src: Rectangle, dst: Rectangle);
}

/// Where one character's current frame is cut from and drawn to.
#[derive(Debug, Clone, Copy)]
pub struct SpritePlacement {
    /// Index into [`CharacterPair::characters`].
    pub slot: usize,
    pub src: Rectangle,
    pub dst: Rectangle,
}

/// Compute source and destination rectangles for both characters.
pub fn layout_sprites(
    surface_w: f32,
    surface_h: f32,
    pair: &CharacterPair,
    frame_index: usize,
    gap: f32,
) -> [SpritePlacement; 2] {
    let [first, second] = pair.characters();
    let w1 = first.sheet.frame_width() as f32;
    let w2 = second.sheet.frame_width() as f32;
    let total_width = w1 + w2 + gap;

    let x1 = surface_w / 2.0 - total_width / 2.0;
    let x2 = x1 + w1 + gap;

    let place = |slot: usize, x: f32| {
        let sheet = pair.characters()[slot].sheet;
        let fw = sheet.frame_width() as f32;
        let fh = sheet.frame_height() as f32;
        SpritePlacement {
            slot,
            src: Rectangle {
                x: frame_index as f32 * fw,
                y: 0.0,
                width: fw,
                height: fh,
            },
            dst: Rectangle {
                x,
                y: surface_h / 2.0 - fh / 2.0,
                width: fw,
                height: fh,
            },
        }
    };

    [place(0, x1), place(1, x2)]
}

/// Clear the whole surface and draw both characters at the shared frame.
pub fn draw_sprites<S: DrawSurface>(
    surface: &mut S,
    pair: &CharacterPair,
    state: &AnimationState,
    gap: f32,
) {
    let (w, h) = (surface.width(), surface.height());
    surface.clear(0, 0, w, h);
    for placement in layout_sprites(w as f32, h as f32, pair, state.current_frame_index, gap) {
        if let Some(character) = pair.get(placement.slot) {
            surface.draw_region(&character.tex_key, placement.src, placement.dst);
        }
    }
}

/// [`DrawSurface`] over a raylib draw handle.
pub struct RaylibSurface<'a, 'b> {
    d: &'a mut RaylibDrawHandle<'b>,
    textures: &'a TextureStore,
}

impl<'a, 'b> RaylibSurface<'a, 'b> {
    pub fn new(d: &'a mut RaylibDrawHandle<'b>, textures: &'a TextureStore) -> Self {
        Self { d, textures }
    }
}

impl DrawSurface for RaylibSurface<'_, '_> {
    fn width(&self) -> i32 {
        self.d.get_screen_width()
    }

    fn height(&self) -> i32 {
        self.d.get_screen_height()
    }

    fn clear(&mut self, x: i32, y: i32, w: i32, h: i32) {
        self.d.draw_rectangle(x, y, w, h, BACKGROUND);
    }

    fn draw_region(&mut self, tex_key: &str, src: Rectangle, dst: Rectangle) {
        if let Some(tex) = self.textures.get(tex_key) {
            self.d
                .draw_texture_pro(tex, src, dst, Vector2 { x: 0.0, y: 0.0 }, 0.0, Color::WHITE);
        }
    }
}

fn draw_overlay(d: &mut RaylibDrawHandle, canvas: &CanvasSurface, label: &str, enabled: bool) {
    let rect = button_rect(canvas.w, canvas.h);
    let color = if enabled {
        BUTTON_ENABLED
    } else {
        BUTTON_DISABLED
    };
    d.draw_rectangle_rec(rect, color);

    let text_w = d.measure_text(label, LABEL_FONT_SIZE);
    let x = (rect.x + rect.width / 2.0) as i32 - text_w / 2;
    let y = (rect.y + rect.height / 2.0) as i32 - LABEL_FONT_SIZE / 2;
    d.draw_text(label, x, y, LABEL_FONT_SIZE, Color::BLACK);
}

/// Draw one display frame: the characters while running, the overlay otherwise.
pub fn render_system(
    mut rl: NonSendMut<raylib::RaylibHandle>,
    th: NonSend<raylib::RaylibThread>,
    textures: Res<TextureStore>,
    pair: Res<CharacterPair>,
    anim: Res<AnimationState>,
    tuning: Res<AnimationTuning>,
    playback: Res<PlaybackState>,
    readiness: Res<AssetReadiness>,
    notice: Res<Notice>,
    canvas: Res<CanvasSurface>,
) {
    let mut d = rl.begin_drawing(&th);
    d.clear_background(BACKGROUND);

    if anim.is_running {
        let mut surface = RaylibSurface::new(&mut d, &textures);
        draw_sprites(&mut surface, &pair, &anim, tuning.gap);
    }

    if let Some(label) = overlay_label(&readiness, playback.get(), &notice) {
        let enabled = trigger_enabled(&readiness, playback.get(), &notice);
        draw_overlay(&mut d, &canvas, label, enabled);
    }
}
