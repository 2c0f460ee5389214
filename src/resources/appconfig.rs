//! Application configuration resource.
//!
//! Settings are read from an INI file. Every key is optional; missing keys
//! keep their defaults, so the application starts without any file at all.
//!
//! # Configuration File Format
//!
//! ```ini
//! [window]
//! width = 1280
//! height = 720
//! target_fps = 60
//! title = Beat Dance
//!
//! [audio]
//! path = audio/theme.mp3
//!
//! [character1]
//! path = character/combination_character.png
//! sheet_width = 581
//! sheet_height = 110
//! frames = 7
//!
//! [character2]
//! path = character 2/combination_character 2.png
//! sheet_width = 938
//! sheet_height = 110
//! frames = 7
//! ```

use bevy_ecs::prelude::*;
use configparser::ini::Ini;
use log::info;
use serde::Serialize;
use std::path::PathBuf;

use crate::error::ConfigError;
use crate::resources::characters::{Character, CharacterPair, SpriteSheetSpec};

const DEFAULT_WINDOW_WIDTH: u32 = 1280;
const DEFAULT_WINDOW_HEIGHT: u32 = 720;
const DEFAULT_TARGET_FPS: u32 = 60;
const DEFAULT_TITLE: &str = "Beat Dance";
const DEFAULT_AUDIO_PATH: &str = "audio/theme.mp3";
const DEFAULT_CONFIG_PATH: &str = "./config.ini";

/// Texture keys of the two characters, left then right.
pub const CHARACTER_KEYS: [&str; 2] = ["character1", "character2"];

/// Where one character's sprite sheet lives and how it is laid out.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CharacterConfig {
    pub texture_path: String,
    pub sheet_width: u32,
    pub sheet_height: u32,
    pub frames: u32,
}

#[derive(Resource, Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AppConfig {
    pub window_width: u32,
    pub window_height: u32,
    pub target_fps: u32,
    pub title: String,
    /// Looping track that drives the animation.
    pub audio_path: String,
    pub characters: [CharacterConfig; 2],
    /// Path to the configuration file.
    #[serde(skip)]
    pub config_path: PathBuf,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl AppConfig {
    /// Create a configuration with the built-in defaults.
    pub fn new() -> Self {
        Self {
            window_width: DEFAULT_WINDOW_WIDTH,
            window_height: DEFAULT_WINDOW_HEIGHT,
            target_fps: DEFAULT_TARGET_FPS,
            title: DEFAULT_TITLE.to_string(),
            audio_path: DEFAULT_AUDIO_PATH.to_string(),
            characters: [
                CharacterConfig {
                    texture_path: "character/combination_character.png".to_string(),
                    sheet_width: 581,
                    sheet_height: 110,
                    frames: 7,
                },
                CharacterConfig {
                    texture_path: "character 2/combination_character 2.png".to_string(),
                    sheet_width: 938,
                    sheet_height: 110,
                    frames: 7,
                },
            ],
            config_path: PathBuf::from(DEFAULT_CONFIG_PATH),
        }
    }

    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            config_path: path.into(),
            ..Self::new()
        }
    }

    /// Load configuration from the INI file at `config_path`.
    pub fn load_from_file(&mut self) -> Result<(), ConfigError> {
        let mut ini = Ini::new();
        ini.load(&self.config_path)
            .map_err(|e| ConfigError::Load(format!("{}: {}", self.config_path.display(), e)))?;
        self.apply_ini(&ini);
        info!(
            "Loaded config from {:?}: {}x{} window, fps={}, audio='{}'",
            self.config_path,
            self.window_width,
            self.window_height,
            self.target_fps,
            self.audio_path
        );
        Ok(())
    }

    /// Load configuration from INI text.
    pub fn load_from_str(&mut self, text: &str) -> Result<(), ConfigError> {
        let mut ini = Ini::new();
        ini.read(text.to_string()).map_err(ConfigError::Load)?;
        self.apply_ini(&ini);
        Ok(())
    }

    fn apply_ini(&mut self, ini: &Ini) {
        // [window] section
        if let Some(width) = ini.getuint("window", "width").ok().flatten() {
            self.window_width = width as u32;
        }
        if let Some(height) = ini.getuint("window", "height").ok().flatten() {
            self.window_height = height as u32;
        }
        if let Some(fps) = ini.getuint("window", "target_fps").ok().flatten() {
            self.target_fps = fps as u32;
        }
        if let Some(title) = ini.get("window", "title") {
            self.title = title;
        }

        // [audio] section
        if let Some(path) = ini.get("audio", "path") {
            self.audio_path = path;
        }

        // [character1] / [character2] sections
        for (section, character) in CHARACTER_KEYS.iter().zip(self.characters.iter_mut()) {
            if let Some(path) = ini.get(section, "path") {
                character.texture_path = path;
            }
            if let Some(width) = ini.getuint(section, "sheet_width").ok().flatten() {
                character.sheet_width = width as u32;
            }
            if let Some(height) = ini.getuint(section, "sheet_height").ok().flatten() {
                character.sheet_height = height as u32;
            }
            if let Some(frames) = ini.getuint(section, "frames").ok().flatten() {
                character.frames = frames as u32;
            }
        }
    }

    /// Validate the sprite geometry and build the lockstep character pair.
    pub fn character_pair(&self) -> Result<CharacterPair, ConfigError> {
        let [first, second] = CHARACTER_KEYS.map(|key| key.to_string());
        let build = |key: String, c: &CharacterConfig| -> Result<Character, ConfigError> {
            let sheet = SpriteSheetSpec::new(&key, c.sheet_width, c.sheet_height, c.frames)?;
            Ok(Character {
                tex_key: key,
                sheet,
            })
        };
        CharacterPair::new(
            build(first, &self.characters[0])?,
            build(second, &self.characters[1])?,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = AppConfig::new();
        let pair = config.character_pair().unwrap();
        assert_eq!(pair.frame_count(), 7);
        assert_eq!(pair.characters()[0].sheet.frame_width(), 83);
        assert_eq!(pair.characters()[1].sheet.frame_width(), 134);
    }

    #[test]
    fn test_partial_ini_keeps_defaults() {
        let mut config = AppConfig::new();
        config
            .load_from_str("[window]\nwidth = 800\n\n[audio]\npath = music/loop.ogg\n")
            .unwrap();
        assert_eq!(config.window_width, 800);
        assert_eq!(config.window_height, DEFAULT_WINDOW_HEIGHT);
        assert_eq!(config.audio_path, "music/loop.ogg");
        assert_eq!(config.characters[0].sheet_width, 581);
    }

    #[test]
    fn test_character_sections() {
        let mut config = AppConfig::new();
        config
            .load_from_str(
                "[character2]\npath = b.png\nsheet_width = 400\nsheet_height = 64\nframes = 8\n\
                 [character1]\nsheet_width = 256\nframes = 8\n",
            )
            .unwrap();
        assert_eq!(config.characters[1].texture_path, "b.png");
        assert_eq!(config.characters[1].sheet_height, 64);
        let pair = config.character_pair().unwrap();
        assert_eq!(pair.frame_count(), 8);
        assert_eq!(pair.characters()[0].sheet.frame_width(), 32);
        assert_eq!(pair.characters()[1].sheet.frame_width(), 50);
    }

    #[test]
    fn test_bad_geometry_fails_fast() {
        let mut config = AppConfig::new();
        config
            .load_from_str("[character1]\nsheet_width = 583\n")
            .unwrap();
        assert!(matches!(
            config.character_pair(),
            Err(ConfigError::UnevenFrames { width: 583, .. })
        ));
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let mut config = AppConfig::with_path("/nonexistent/beatdance.ini");
        assert!(matches!(config.load_from_file(), Err(ConfigError::Load(_))));
        assert_eq!(config.window_width, DEFAULT_WINDOW_WIDTH);
    }
}
