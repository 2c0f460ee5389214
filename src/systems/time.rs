//! Time update system.
//!
//! Updates the shared [`WorldTime`](crate::resources::worldtime::WorldTime)
//! resource once per display frame from the host clock.
use bevy_ecs::prelude::*;

use crate::resources::worldtime::WorldTime;

/// Record `now_ms` as the current frame timestamp.
///
/// `now_ms` is a monotonic host timestamp in milliseconds.
pub fn update_world_time(world: &mut World, now_ms: f64) {
    world.resource_mut::<WorldTime>().elapsed = now_ms;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timestamp_follows_host_clock() {
        let mut world = World::new();
        world.init_resource::<WorldTime>();

        update_world_time(&mut world, 16.5);
        assert_eq!(world.resource::<WorldTime>().elapsed, 16.5);

        update_world_time(&mut world, 33.0);
        assert_eq!(world.resource::<WorldTime>().elapsed, 33.0);
    }
}
