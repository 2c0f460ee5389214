//! Beat Dance main entry point.
//!
//! Two characters dance side by side while a looping track plays; their
//! shared animation speeds up with the loudness of the music.
//!
//! Built on:
//! - **raylib** for the window, textures and audio
//! - **bevy_ecs** for resources, observers and the per-frame schedule
//!
//! # Main Loop
//!
//! 1. Load `config.ini`, validate the sprite geometry
//! 2. Open the raylib window, load both sprite sheets, spawn the audio thread
//! 3. Every display frame:
//!    - update the frame timestamp and canvas size
//!    - read input (play button / Enter / Space, Backspace to stop)
//!    - exchange audio commands and messages
//!    - sample loudness, map it to a frame-hold, step the frame clock
//!    - draw the characters (or the play overlay)
//! 4. Shut the audio thread down on exit
//!
//! # Running
//!
//! ```sh
//! cargo run --release -- --config config.ini
//! ```

// Do not create console on Windows
#![cfg_attr(target_os = "windows", windows_subsystem = "windows")]

use beatdance::app::{add_core_systems, init_world};
use beatdance::resources::appconfig::AppConfig;
use beatdance::resources::audio::{setup_audio, shutdown_audio};
use beatdance::resources::canvas::CanvasSurface;
use beatdance::systems::assets::insert_sprite_sheets;
use beatdance::systems::audio::{
    forward_audio_cmds, poll_audio_messages, update_bevy_audio_cmds, update_bevy_audio_messages,
};
use beatdance::systems::driver::DriverSet;
use beatdance::systems::input::update_input_state;
use beatdance::systems::playback::playback_messages_system;
use beatdance::systems::render::render_system;
use beatdance::systems::time::update_world_time;
use bevy_ecs::prelude::*;
use clap::Parser;
use std::path::PathBuf;

/// Beat Dance: sprites dancing to the loudness of a looping track
#[derive(Parser)]
#[command(version, about)]
struct Cli {
    /// INI configuration file.
    #[arg(long, value_name = "PATH", default_value = "./config.ini")]
    config: PathBuf,

    /// Override the audio track path from the configuration.
    #[arg(long, value_name = "PATH")]
    audio: Option<String>,

    /// Print the resolved configuration as JSON and exit.
    #[arg(long)]
    print_config: bool,

    /// Validate the configuration and exit.
    #[arg(long)]
    check: bool,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    let mut config = AppConfig::with_path(cli.config);
    if let Err(e) = config.load_from_file() {
        log::warn!("{}; using defaults", e);
    }
    if let Some(audio) = cli.audio {
        config.audio_path = audio;
    }

    let pair = match config.character_pair() {
        Ok(pair) => pair,
        Err(e) => {
            log::error!("Invalid configuration: {}", e);
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    };

    // Early-exit: dump the resolved configuration (no window/audio needed)
    if cli.print_config {
        let dump = serde_json::json!({
            "config": &config,
            "characters": &pair,
        });
        match serde_json::to_string_pretty(&dump) {
            Ok(text) => println!("{text}"),
            Err(e) => {
                eprintln!("Error: {e}");
                std::process::exit(1);
            }
        }
        return;
    }

    if cli.check {
        let [first, second] = pair.characters();
        println!(
            "Configuration OK: {} frames, frame widths {} and {}",
            pair.frame_count(),
            first.sheet.frame_width(),
            second.sheet.frame_width()
        );
        return;
    }

    // --------------- Raylib window & assets ---------------
    let (mut rl, thread) = raylib::init()
        .size(config.window_width as i32, config.window_height as i32)
        .resizable()
        .title(&config.title)
        .build();
    rl.set_target_fps(config.target_fps);

    // --------------- ECS world + resources ---------------
    let mut world = World::new();
    init_world(&mut world, config, pair);
    insert_sprite_sheets(&mut world, &mut rl, &thread);
    setup_audio(&mut world);

    world.insert_non_send_resource(rl);
    world.insert_non_send_resource(thread);
    world.flush();

    let mut update = Schedule::default();
    update.add_systems(update_input_state);
    update.add_systems(
        // audio systems must be together
        (
            update_bevy_audio_cmds,
            forward_audio_cmds,
            poll_audio_messages,
            update_bevy_audio_messages,
        )
            .chain()
            .after(update_input_state)
            .before(playback_messages_system),
    );
    add_core_systems(&mut update);
    update.add_systems(render_system.after(DriverSet));

    update
        .initialize(&mut world)
        .expect("Failed to initialize schedule");

    // --------------- Main loop ---------------
    while !world
        .non_send_resource::<raylib::RaylibHandle>()
        .window_should_close()
    {
        let (now_ms, w, h) = {
            let rl = world.non_send_resource::<raylib::RaylibHandle>();
            (
                rl.get_time() * 1000.0,
                rl.get_screen_width(),
                rl.get_screen_height(),
            )
        };
        update_world_time(&mut world, now_ms);
        // Canvas follows the window each frame (may change due to resize)
        *world.resource_mut::<CanvasSurface>() = CanvasSurface { w, h };

        update.run(&mut world);

        world.clear_trackers();
    }
    shutdown_audio(&mut world);
}
