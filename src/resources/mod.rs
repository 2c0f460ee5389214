//! ECS resources made available to systems.
//!
//! This module groups the long-lived data injected into the ECS world and
//! accessed by systems during execution. Each submodule documents the
//! semantics and intended usage of its resource(s).
//!
//! Overview
//! - `animationstate` – shared lockstep frame index and last-advance timestamp
//! - `appconfig` – INI-backed application configuration
//! - `assets` – readiness count of the sprite sheets
//! - `audio` – bridge and channels for the background audio thread
//! - `audiosession` – decoded PCM, playback position and analysis buffer
//! - `canvas` – current drawable surface size
//! - `characters` – validated sprite sheet geometry of both characters
//! - `drive` – loudness and frame-hold values passed along the driver chain
//! - `notice` – terminal error shown to the user
//! - `playback` – Idle/Loading/Running state machine
//! - `texturestore` – loaded textures keyed by character
//! - `tuning` – fixed timing and layout constants
//! - `worldtime` – host frame timestamp in milliseconds
pub mod animationstate;
pub mod appconfig;
pub mod assets;
pub mod audio;
pub mod audiosession;
pub mod canvas;
pub mod characters;
pub mod drive;
pub mod notice;
pub mod playback;
pub mod texturestore;
pub mod tuning;
pub mod worldtime;
