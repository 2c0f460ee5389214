//! Beat Dance library.
//!
//! Two sprite-sheet characters dancing in lockstep to a looping track: the
//! louder the music, the faster the frames advance. The crate exposes its ECS
//! resources, systems and events for the binary and for integration tests.

pub mod app;
pub mod error;
pub mod events;
pub mod resources;
pub mod systems;
