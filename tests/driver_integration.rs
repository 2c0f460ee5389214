//! Driver tick integration tests: sample → map → clock over a real world.
//!
//! The audio session is synthetic PCM, so no window or audio device is needed.

use std::sync::Arc;

use bevy_ecs::prelude::*;

use beatdance::app::init_world;
use beatdance::resources::animationstate::AnimationState;
use beatdance::resources::appconfig::AppConfig;
use beatdance::resources::audiosession::{AudioSession, PcmTrack};
use beatdance::resources::drive::{FrameHold, Loudness};
use beatdance::resources::playback::{PlaybackState, PlaybackStates};
use beatdance::systems::driver::add_driver_systems;
use beatdance::systems::playback::TRACK_ID;
use beatdance::systems::time::update_world_time;

const EPSILON: f32 = 1e-3;

fn approx_eq(a: f32, b: f32) -> bool {
    (a - b).abs() < EPSILON
}

const SAMPLE_RATE: u32 = 1000;

fn silent_track() -> Vec<f32> {
    vec![0.0; 2000]
}

fn full_scale_track() -> Vec<f32> {
    (0..2000).map(|i| if i % 2 == 0 { -1.0 } else { 1.0 }).collect()
}

/// World already in the Running state, started at t=0.
fn make_running_world(samples: Vec<f32>, position_secs: f32) -> World {
    let mut world = World::new();
    let config = AppConfig::new();
    let pair = config.character_pair().unwrap();
    init_world(&mut world, config, pair);

    let mut session = AudioSession::new(TRACK_ID, Arc::new(PcmTrack::new(SAMPLE_RATE, samples)));
    session.set_position(position_secs);
    world.insert_resource(session);
    world
        .resource_mut::<PlaybackState>()
        .set(PlaybackStates::Running);
    *world.resource_mut::<AnimationState>() = AnimationState::started_at(0.0);
    world
}

fn driver_schedule() -> Schedule {
    let mut schedule = Schedule::default();
    add_driver_systems(&mut schedule);
    schedule
}

fn run_tick(world: &mut World, schedule: &mut Schedule, now_ms: f64) {
    update_world_time(world, now_ms);
    schedule.run(world);
}

fn frame_index(world: &World) -> usize {
    world.resource::<AnimationState>().current_frame_index
}

#[test]
fn silent_audio_holds_frames_for_max_duration() {
    let mut world = make_running_world(silent_track(), 1.0);
    let mut schedule = driver_schedule();

    let mut advances = 0;
    let mut previous = frame_index(&world);
    for step in 1..=30 {
        run_tick(&mut world, &mut schedule, step as f64 * 20.0);
        let current = frame_index(&world);
        if current != previous {
            advances += 1;
        }
        previous = current;
    }

    assert_eq!(world.resource::<Loudness>().0, 0.0);
    assert!(approx_eq(world.resource::<FrameHold>().0, 500.0));
    assert_eq!(advances, 1);
    assert_eq!(frame_index(&world), 1);
    assert_eq!(world.resource::<AnimationState>().last_advance_timestamp, 520.0);
}

#[test]
fn full_scale_audio_advances_at_most_one_frame_per_tick() {
    let mut world = make_running_world(full_scale_track(), 1.0);
    let mut schedule = driver_schedule();
    let frame_count = 7;

    let mut previous = frame_index(&world);
    for step in 1..=10 {
        run_tick(&mut world, &mut schedule, step as f64 * 60.0);
        let current = frame_index(&world);
        assert_eq!(current, (previous + 1) % frame_count, "tick {step}");
        previous = current;
    }

    let loudness = world.resource::<Loudness>().0;
    assert!(loudness > 0.99, "loudness {loudness}");
    let hold = world.resource::<FrameHold>().0;
    assert!(hold > 50.0 && hold < 52.0, "hold {hold}");
    assert_eq!(frame_index(&world), 10 % frame_count);
}

#[test]
fn fast_refresh_with_loud_audio_never_skips_frames() {
    let mut world = make_running_world(full_scale_track(), 1.0);
    let mut schedule = driver_schedule();

    let mut previous = frame_index(&world);
    for step in 1..=120 {
        run_tick(&mut world, &mut schedule, step as f64 * (1000.0 / 60.0));
        let current = frame_index(&world);
        assert!(current == previous || current == (previous + 1) % 7);
        previous = current;
    }
}

#[test]
fn half_scale_audio_maps_to_intermediate_hold() {
    let mut world = make_running_world(vec![0.5; 2000], 1.0);
    let mut schedule = driver_schedule();

    run_tick(&mut world, &mut schedule, 16.0);

    assert!(approx_eq(world.resource::<Loudness>().0, 0.5));
    assert!(approx_eq(world.resource::<FrameHold>().0, 275.0));
}

#[test]
fn first_tick_holds_frame_zero() {
    let mut world = make_running_world(full_scale_track(), 1.0);
    let mut schedule = driver_schedule();

    // start time is the seed, so the first tick sees no elapsed time
    *world.resource_mut::<AnimationState>() = AnimationState::started_at(5000.0);
    run_tick(&mut world, &mut schedule, 5000.0);

    assert_eq!(frame_index(&world), 0);
}

#[test]
fn driver_does_not_tick_while_idle() {
    let mut world = make_running_world(full_scale_track(), 1.0);
    world.resource_mut::<PlaybackState>().set(PlaybackStates::Idle);
    let mut schedule = driver_schedule();

    run_tick(&mut world, &mut schedule, 10_000.0);

    assert_eq!(frame_index(&world), 0);
    assert_eq!(world.resource::<Loudness>().0, 0.0);
}

#[test]
fn loudness_follows_playback_position() {
    // first second silent, second second full-scale
    let mut samples = silent_track();
    samples.truncate(1000);
    samples.extend(full_scale_track().into_iter().take(1000));
    let mut world = make_running_world(samples, 0.5);
    let mut schedule = driver_schedule();

    run_tick(&mut world, &mut schedule, 16.0);
    assert_eq!(world.resource::<Loudness>().0, 0.0);

    world.resource_mut::<AudioSession>().set_position(1.5);
    run_tick(&mut world, &mut schedule, 32.0);
    assert!(world.resource::<Loudness>().0 > 0.99);
}
