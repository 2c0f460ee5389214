//! Canvas size resource.
//!
//! Mirrors the window framebuffer size. The host loop rewrites it every frame
//! so a resize is visible to the very next tick; nothing caches it.

use bevy_ecs::prelude::Resource;

/// Current drawable surface size in pixels.
#[derive(Resource, Debug, Clone, Copy, PartialEq, Eq)]
pub struct CanvasSurface {
    /// Width in pixels.
    pub w: i32,
    /// Height in pixels.
    pub h: i32,
}
