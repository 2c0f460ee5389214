//! Event and message types.
//!
//! Submodules:
//! - [`audio`] – commands and messages for the background audio thread
//! - [`playback`] – start trigger and stop request from the user
pub mod audio;
pub mod playback;
