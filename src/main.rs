//! Sonic Airborne entry point.
//!
//! A small side-scrolling arcade game built on:
//! - **raylib** for windowing, graphics, and audio
//! - **bevy_ecs** for entities, resources and system scheduling
//!
//! # Main Loop
//!
//! 1. Parse the CLI, initialise logging and load `config.ini`
//! 2. Open the window, load textures and start the audio thread
//! 3. Spawn the level and queue the stage soundtrack
//! 4. Each frame: advance the clock, then run input, motion, collisions,
//!    the event drain, the game-over step, the audio bridge and rendering
//! 5. Shut the audio thread down on exit

// Do not create console on Windows
#![cfg_attr(target_os = "windows", windows_subsystem = "windows")]

use clap::Parser;
use log::{error, info, warn};
use std::path::PathBuf;

use sonic_airborne::game;
use sonic_airborne::resources::audio::{setup_audio, shutdown_audio};
use sonic_airborne::resources::debugmode::DebugMode;
use sonic_airborne::resources::gameconfig::GameConfig;
use sonic_airborne::resources::input::InputState;
use sonic_airborne::systems::time::{frame_time_ms, update_world_time};

/// Sonic Airborne
#[derive(Parser)]
#[command(version, about = "Dodge enemies, grab rings, don't run out of lives.")]
struct Cli {
    /// Path to the INI configuration file.
    #[arg(long, value_name = "PATH", default_value = "./config.ini")]
    config: PathBuf,

    /// Start with audio muted.
    #[arg(long)]
    mute: bool,

    /// Start with the debug overlay enabled (toggle with F11).
    #[arg(long)]
    debug: bool,

    /// Log at debug level unless RUST_LOG says otherwise.
    #[arg(long)]
    verbose: bool,

    /// Write the default configuration to --config and exit.
    #[arg(long)]
    write_config: bool,
}

fn main() {
    let cli = Cli::parse();

    let default_filter = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    if cli.write_config {
        let config = GameConfig::with_path(&cli.config);
        if let Err(e) = config.save_to_file() {
            error!("{}", e);
            std::process::exit(1);
        }
        return;
    }

    let mut config = GameConfig::with_path(&cli.config);
    if let Err(e) = config.load_from_file() {
        warn!("{}; using defaults", e);
    }
    if cli.mute {
        config.muted = true;
    }

    // --------------- Raylib window & assets ---------------
    let (width, height) = config.window_size();
    let (mut rl, thread) = raylib::init()
        .size(width, height)
        .title("Sonic Airborne")
        .build();
    rl.set_target_fps(config.target_fps);
    // Escape is handled through InputState
    rl.set_exit_key(None);

    let textures = match game::load_textures(&mut rl, &thread, config.stage) {
        Ok(store) => store,
        Err(e) => {
            error!("{}", e);
            std::process::exit(1);
        }
    };

    // --------------- ECS world + resources ---------------
    let mut world = game::init_world(&config);
    world.insert_resource(textures);
    if cli.debug {
        world.insert_resource(DebugMode {});
    }
    world.insert_non_send_resource(rl);
    world.insert_non_send_resource(thread);

    // Must precede start_level, which queues audio commands.
    setup_audio(&mut world);

    let mut rng = fastrand::Rng::new();
    game::start_level(&mut world, &mut rng);

    let mut frame = game::frame_schedule();
    if let Err(e) = frame.initialize(&mut world) {
        error!("Failed to initialize schedule: {}", e);
        shutdown_audio(&mut world);
        std::process::exit(1);
    }
    info!("starting stage {}", config.stage);

    // --------------- Main loop ---------------
    while !world
        .non_send_resource::<raylib::RaylibHandle>()
        .window_should_close()
        && !world.resource::<InputState>().action_back.just_pressed
    {
        let dt = world
            .non_send_resource::<raylib::RaylibHandle>()
            .get_frame_time();
        update_world_time(&mut world, frame_time_ms(dt));

        frame.run(&mut world);

        world.clear_trackers();
    }

    info!("shutting down");
    shutdown_audio(&mut world);
}
