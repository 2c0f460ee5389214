use bevy_ecs::prelude::Resource;

/// Host clock in milliseconds, sampled once per display frame.
#[derive(Resource, Clone, Copy, Debug, Default)]
pub struct WorldTime {
    /// Timestamp of the current frame.
    pub elapsed: f64,
}
