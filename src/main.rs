//! railreflex entry point.
//!
//! Built on:
//! - **raylib** for windowing, graphics, input and audio
//! - **bevy_ecs** for the entity-component-system architecture
//!
//! # Main Loop
//!
//! 1. Read `config.ini` and the command line, load the track
//! 2. Open the window at the variant's size, build the ECS world
//! 3. Register observers and the lifecycle hooks, enter `Setup`
//! 4. Every frame: input, lifecycle transitions, audio bridge, timers,
//!    buttons, train motion, sensors, animation, labels, drawing
//! 5. Stop the audio thread on exit
//!
//! # Running
//!
//! ```sh
//! cargo run --release -- --variant arcade
//! RUST_LOG=debug cargo run -- --tracks ./assets/tracks.json
//! ```

// Do not create console on Windows
#![cfg_attr(target_os = "windows", windows_subsystem = "windows")]

use std::path::PathBuf;

use bevy_ecs::prelude::*;
use clap::Parser;
use log::{error, info, warn};

use railreflex::components::persistent::Persistent;
use railreflex::events::gamestate::{GameStateChangedEvent, observe_gamestate_change_event};
use railreflex::events::switchdebug::switch_debug_observer;
use railreflex::game;
use railreflex::resources::animationstore::AnimationStore;
use railreflex::resources::audio::{setup_audio, shutdown_audio};
use railreflex::resources::gameconfig::GameConfig;
use railreflex::resources::gamestate::{GameState, GameStates, NextGameState};
use railreflex::resources::input::InputState;
use railreflex::resources::scenario::{Scenario, Variant};
use railreflex::resources::screensize::ScreenSize;
use railreflex::resources::simulation::Simulation;
use railreflex::resources::systemsstore::SystemsStore;
use railreflex::resources::texturestore::TextureStore;
use railreflex::resources::track::Track;
use railreflex::resources::worldsignals::WorldSignals;
use railreflex::resources::worldtime::WorldTime;
use railreflex::systems::animation::animation;
use railreflex::systems::audio::{
    forward_audio_cmds, log_audio_messages, poll_audio_messages, update_bevy_audio_cmds,
    update_bevy_audio_messages,
};
use railreflex::systems::button::button_system;
use railreflex::systems::gamestate::{check_pending_state, state_is_playing};
use railreflex::systems::input::update_input_state;
use railreflex::systems::movement::movement_system;
use railreflex::systems::render::render_system;
use railreflex::systems::sensor::sensor_overlap_system;
use railreflex::systems::signalbinding::update_world_signals_binding_system;
use railreflex::systems::simulation::{
    observe_button_click, observe_input_event, observe_sim_input, observe_sim_state_change,
    observe_timer_event, restart_system, sync_train_speed,
};
use railreflex::systems::time::{update_timers, update_world_time};
use railreflex::systems::waypoint::waypoint_follower_system;

/// Train reaction-time simulator.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Cli {
    /// Which scene to play; overrides the config file.
    #[arg(long, value_enum)]
    variant: Option<Variant>,
    /// Track JSON file; overrides the config file.
    #[arg(long)]
    tracks: Option<PathBuf>,
    /// INI configuration file.
    #[arg(long, default_value = "./config.ini")]
    config: PathBuf,
}

fn register_hook<M>(
    world: &mut World,
    store: &mut SystemsStore,
    name: &str,
    system: impl IntoSystem<(), (), M> + 'static,
) {
    let id = world.register_system(system);
    // registered systems are entities and must survive scene cleanup
    world.entity_mut(id.entity()).insert(Persistent);
    store.insert(name, id);
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let cli = Cli::parse();

    let mut config = GameConfig::with_path(&cli.config);
    if let Err(e) = config.load_from_file() {
        warn!("{}; using defaults", e);
    }
    if let Some(variant) = cli.variant {
        config.variant = variant;
    }
    if let Some(tracks) = cli.tracks {
        config.tracks_path = tracks;
    }

    let track = match Track::load(&config.tracks_path) {
        Ok(track) => track,
        Err(e) => {
            error!("{}", e);
            std::process::exit(1);
        }
    };
    let scenario = Scenario::new(config.variant, config.check_interval);
    info!("starting {} ({}x{})", scenario.variant, scenario.width, scenario.height);

    // --------------- Raylib window ---------------
    let mut builder = raylib::init();
    builder
        .size(scenario.width, scenario.height)
        .title(&format!("railreflex - {}", scenario.variant));
    if config.vsync {
        builder.vsync();
    }
    let (mut rl, thread) = builder.build();
    rl.set_target_fps(config.target_fps);
    // Escape goes through InputEvent so quitting runs the Quitting hook
    rl.set_exit_key(None);

    // --------------- ECS world + resources ---------------
    let mut world = World::new();
    world.insert_resource(WorldTime::default());
    world.insert_resource(WorldSignals::default());
    world.insert_resource(ScreenSize {
        w: scenario.width,
        h: scenario.height,
    });
    world.insert_resource(InputState::default());
    world.insert_resource(Simulation::new(scenario.rules));
    world.insert_resource(scenario);
    world.insert_resource(track);
    world.insert_resource(config);
    // replaced by the setup hook
    world.insert_resource(TextureStore::new());
    world.insert_resource(AnimationStore::default());

    setup_audio(&mut world); // must go before the setup hook writes AudioCmd

    world.insert_resource(GameState::new());
    world.insert_resource(NextGameState::new());
    world.insert_non_send_resource(rl);
    world.insert_non_send_resource(thread);

    world.spawn((Observer::new(observe_gamestate_change_event), Persistent));
    world.spawn((Observer::new(switch_debug_observer), Persistent));
    world.spawn((Observer::new(observe_input_event), Persistent));
    world.spawn((Observer::new(observe_button_click), Persistent));
    world.spawn((Observer::new(observe_timer_event), Persistent));
    world.spawn((Observer::new(observe_sim_input), Persistent));
    world.spawn((Observer::new(observe_sim_state_change), Persistent));

    let mut systems_store = SystemsStore::new();
    register_hook(&mut world, &mut systems_store, "setup", game::setup);
    register_hook(&mut world, &mut systems_store, "enter_play", game::enter_play);
    register_hook(&mut world, &mut systems_store, "clean_scene", game::clean_scene);
    register_hook(&mut world, &mut systems_store, "quit_game", game::quit_game);
    world.insert_resource(systems_store);
    world.flush();

    world.resource_mut::<NextGameState>().set(GameStates::Setup);
    world.trigger(GameStateChangedEvent {}); // enter Setup immediately
    world.flush();

    let mut update = Schedule::default();
    update.add_systems(update_input_state);
    update.add_systems(check_pending_state.after(update_input_state));
    update.add_systems(
        // audio systems must be together
        (
            update_bevy_audio_cmds,
            forward_audio_cmds,
            poll_audio_messages,
            update_bevy_audio_messages,
            log_audio_messages,
        )
            .chain(),
    );
    update.add_systems(
        (
            button_system,
            update_timers,
            sync_train_speed,
            waypoint_follower_system,
            movement_system,
            sensor_overlap_system,
            restart_system,
            animation,
            update_world_signals_binding_system,
        )
            .chain()
            .run_if(state_is_playing)
            .after(check_pending_state),
    );
    update.add_systems(render_system.after(update_world_signals_binding_system));

    // --------------- Main loop ---------------
    while !world
        .non_send_resource::<raylib::RaylibHandle>()
        .window_should_close()
        && !world.resource::<WorldSignals>().has_flag("quit_game")
    {
        let dt = world
            .non_send_resource::<raylib::RaylibHandle>()
            .get_frame_time();
        update_world_time(&mut world, dt);

        update.run(&mut world);

        world.clear_trackers();
    }
    shutdown_audio(&mut world);
    info!("bye");
}
