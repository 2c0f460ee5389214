//! Sprite sheet geometry for the two dancing characters.
//!
//! Each sheet is a single horizontal strip of equal-width frames. Both
//! characters advance in lockstep from one shared frame index, so
//! [`CharacterPair::new`] refuses sheets whose frame counts differ.

use bevy_ecs::prelude::Resource;
use serde::Serialize;

use crate::error::ConfigError;

/// Immutable geometry of one sprite sheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SpriteSheetSpec {
    sheet_width: u32,
    sheet_height: u32,
    frame_count: u32,
}

impl SpriteSheetSpec {
    /// Validate and build a sheet spec. `key` only labels the error.
    pub fn new(
        key: &str,
        sheet_width: u32,
        sheet_height: u32,
        frame_count: u32,
    ) -> Result<Self, ConfigError> {
        if frame_count == 0 {
            return Err(ConfigError::ZeroFrames {
                key: key.to_string(),
            });
        }
        if sheet_width == 0 || sheet_height == 0 {
            return Err(ConfigError::ZeroSize {
                key: key.to_string(),
                width: sheet_width,
                height: sheet_height,
            });
        }
        if sheet_width % frame_count != 0 {
            return Err(ConfigError::UnevenFrames {
                key: key.to_string(),
                width: sheet_width,
                frames: frame_count,
            });
        }
        Ok(Self {
            sheet_width,
            sheet_height,
            frame_count,
        })
    }

    pub fn sheet_width(&self) -> u32 {
        self.sheet_width
    }

    pub fn sheet_height(&self) -> u32 {
        self.sheet_height
    }

    pub fn frame_count(&self) -> u32 {
        self.frame_count
    }

    /// Width of a single frame. Exact because the constructor checked divisibility.
    pub fn frame_width(&self) -> u32 {
        self.sheet_width / self.frame_count
    }

    /// Frames span the full sheet height.
    pub fn frame_height(&self) -> u32 {
        self.sheet_height
    }
}

/// A character: the texture it draws from and the sheet layout of that texture.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Character {
    pub tex_key: String,
    pub sheet: SpriteSheetSpec,
}

/// The two characters, left then right.
#[derive(Resource, Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CharacterPair {
    characters: [Character; 2],
}

impl CharacterPair {
    pub fn new(first: Character, second: Character) -> Result<Self, ConfigError> {
        let (a, b) = (first.sheet.frame_count(), second.sheet.frame_count());
        if a != b {
            return Err(ConfigError::FrameCountMismatch {
                first: a,
                second: b,
            });
        }
        Ok(Self {
            characters: [first, second],
        })
    }

    pub fn characters(&self) -> &[Character; 2] {
        &self.characters
    }

    pub fn get(&self, slot: usize) -> Option<&Character> {
        self.characters.get(slot)
    }

    /// Shared frame count of both sheets.
    pub fn frame_count(&self) -> usize {
        self.characters[0].sheet.frame_count() as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn character(key: &str, width: u32, frames: u32) -> Character {
        Character {
            tex_key: key.to_string(),
            sheet: SpriteSheetSpec::new(key, width, 110, frames).unwrap(),
        }
    }

    #[test]
    fn test_frame_width_is_derived() {
        let spec = SpriteSheetSpec::new("c1", 581, 110, 7).unwrap();
        assert_eq!(spec.frame_width(), 83);
        assert_eq!(spec.frame_height(), 110);
    }

    #[test]
    fn test_zero_frames_rejected() {
        let err = SpriteSheetSpec::new("c1", 581, 110, 0).unwrap_err();
        assert_eq!(
            err,
            ConfigError::ZeroFrames {
                key: "c1".to_string()
            }
        );
    }

    #[test]
    fn test_zero_size_rejected() {
        assert!(matches!(
            SpriteSheetSpec::new("c1", 0, 110, 7),
            Err(ConfigError::ZeroSize { .. })
        ));
        assert!(matches!(
            SpriteSheetSpec::new("c1", 581, 0, 7),
            Err(ConfigError::ZeroSize { .. })
        ));
    }

    #[test]
    fn test_uneven_width_rejected() {
        // 583 / 7 leaves a remainder
        let err = SpriteSheetSpec::new("c1", 583, 110, 7).unwrap_err();
        assert_eq!(
            err,
            ConfigError::UnevenFrames {
                key: "c1".to_string(),
                width: 583,
                frames: 7
            }
        );
    }

    #[test]
    fn test_pair_requires_matching_frame_counts() {
        let err = CharacterPair::new(character("a", 581, 7), character("b", 800, 8)).unwrap_err();
        assert_eq!(
            err,
            ConfigError::FrameCountMismatch {
                first: 7,
                second: 8
            }
        );
    }

    #[test]
    fn test_pair_frame_count() {
        let pair = CharacterPair::new(character("a", 581, 7), character("b", 938, 7)).unwrap();
        assert_eq!(pair.frame_count(), 7);
        assert_eq!(pair.get(1).map(|c| c.tex_key.as_str()), Some("b"));
        assert!(pair.get(2).is_none());
    }
}
