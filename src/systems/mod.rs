//! Application systems.
//!
//! Submodules overview
//! - [`amplitude`] – RMS loudness of the current audio window
//! - [`assets`] – load sprite sheet textures and report readiness
//! - [`audio`] – audio thread and the systems bridging it with the ECS
//! - [`driver`] – per-tick chain sample → map → clock and its run condition
//! - [`frameclock`] – advance the shared frame index when the hold elapsed
//! - [`input`] – mouse/keyboard to start and stop events
//! - [`overlay`] – play button geometry, labels and trigger gating
//! - [`playback`] – playback state machine observers and message handling
//! - [`render`] – sprite compositor and raylib drawing
//! - [`speed`] – loudness to frame-hold mapping
//! - [`time`] – update the frame timestamp

pub mod amplitude;
pub mod assets;
pub mod audio;
pub mod driver;
pub mod frameclock;
pub mod input;
pub mod overlay;
pub mod playback;
pub mod render;
pub mod speed;
pub mod time;
