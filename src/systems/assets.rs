//! Sprite sheet loading.
//!
//! Loads both character textures at startup and reports each success to
//! [`AssetReadiness`]. A failed load is logged and leaves the start trigger
//! disabled.

use bevy_ecs::prelude::*;
use log::{error, info, warn};
use raylib::prelude::*;

use crate::resources::appconfig::AppConfig;
use crate::resources::assets::AssetReadiness;
use crate::resources::characters::CharacterPair;
use crate::resources::texturestore::TextureStore;

/// Load the sprite sheets named in `config` into a [`TextureStore`].
pub fn load_sprite_sheets(
    rl: &mut RaylibHandle,
    thread: &RaylibThread,
    config: &AppConfig,
    pair: &CharacterPair,
    readiness: &mut AssetReadiness,
) -> TextureStore {
    let mut store = TextureStore::new();
    for (character, character_config) in pair.characters().iter().zip(config.characters.iter()) {
        let path = &character_config.texture_path;
        match rl.load_texture(thread, path) {
            Ok(texture) => {
                if texture.width as u32 != character.sheet.sheet_width()
                    || texture.height as u32 != character.sheet.sheet_height()
                {
                    warn!(
                        "Texture '{}' is {}x{} but configured as {}x{}",
                        path,
                        texture.width,
                        texture.height,
                        character.sheet.sheet_width(),
                        character.sheet.sheet_height()
                    );
                }
                info!("Loaded sprite sheet '{}' from '{}'", character.tex_key, path);
                store.insert(character.tex_key.clone(), texture);
                readiness.mark_loaded();
            }
            Err(e) => {
                error!("Failed to load sprite sheet '{}': {}", path, e);
            }
        }
    }
    store
}

/// Load the sprite sheets into `world`, updating its [`AssetReadiness`].
pub fn insert_sprite_sheets(world: &mut World, rl: &mut RaylibHandle, thread: &RaylibThread) {
    let config = world.resource::<AppConfig>().clone();
    let pair = world.resource::<CharacterPair>().clone();
    let mut readiness = *world.resource::<AssetReadiness>();
    let store = load_sprite_sheets(rl, thread, &config, &pair, &mut readiness);
    world.insert_resource(readiness);
    world.insert_resource(store);
}
