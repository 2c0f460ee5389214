//! Configuration and geometry errors.
//!
//! Sprite geometry is validated when the configuration is turned into
//! [`CharacterPair`](crate::resources::characters::CharacterPair), so a bad
//! sheet never reaches the compositor.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// A sprite sheet declared zero frames.
    #[error("sprite sheet '{key}' must have at least one frame")]
    ZeroFrames { key: String },

    /// A sprite sheet declared a zero width or height.
    #[error("sprite sheet '{key}' has an empty size {width}x{height}")]
    ZeroSize {
        key: String,
        width: u32,
        height: u32,
    },

    /// The sheet width does not split into equal frames.
    #[error("sprite sheet '{key}' width {width} is not divisible by {frames} frames")]
    UnevenFrames { key: String, width: u32, frames: u32 },

    /// Lockstep animation needs both sheets to share a frame count.
    #[error("characters must share a frame count (got {first} and {second})")]
    FrameCountMismatch { first: u32, second: u32 },

    /// The configuration file could not be read or parsed.
    #[error("failed to load configuration: {0}")]
    Load(String),
}
