//! World setup shared by the binary and the integration tests.
//!
//! [`init_world`] inserts every resource that does not need a window or an
//! audio device and registers the playback observers.
//! [`add_core_systems`] adds the systems that run without raylib: playback
//! message handling followed by the driver chain.

use bevy_ecs::observer::Observer;
use bevy_ecs::prelude::*;

use crate::resources::appconfig::AppConfig;
use crate::resources::assets::AssetReadiness;
use crate::resources::audio::init_audio_messages;
use crate::resources::canvas::CanvasSurface;
use crate::resources::characters::CharacterPair;
use crate::resources::notice::Notice;
use crate::resources::worldtime::WorldTime;
use crate::systems::driver::{DriverSet, add_driver_systems, init_driver_resources};
use crate::systems::playback::{
    playback_messages_system, start_trigger_observer, stop_playback_observer,
};

pub fn init_world(world: &mut World, config: AppConfig, pair: CharacterPair) {
    world.insert_resource(WorldTime::default());
    world.insert_resource(CanvasSurface {
        w: config.window_width as i32,
        h: config.window_height as i32,
    });
    world.insert_resource(AssetReadiness::new(pair.characters().len() as u32));
    world.insert_resource(Notice::default());
    world.insert_resource(pair);
    world.insert_resource(config);
    init_driver_resources(world);
    init_audio_messages(world);

    world.spawn(Observer::new(start_trigger_observer));
    world.spawn(Observer::new(stop_playback_observer));
    // Ensure observers are registered before anything triggers events.
    world.flush();
}

pub fn add_core_systems(schedule: &mut Schedule) {
    schedule.add_systems(playback_messages_system.before(DriverSet));
    add_driver_systems(schedule);
}
