//! Scene lifecycle hooks run by the game-state observer.
//!
//! - [`setup`] loads textures, animation clips and sounds, then asks for `Playing`.
//! - [`enter_play`] spawns the scene of the selected variant.
//! - [`clean_scene`] despawns everything not marked [`Persistent`]; it runs
//!   when `Playing` is left, so re-entering `Playing` is a reset.
//! - [`quit_game`] raises the `quit_game` flag the main loop watches.

use bevy_ecs::prelude::*;
use log::{error, info, warn};
use raylib::prelude::*;

use crate::components::animation::Animation;
use crate::components::boxcollider::BoxCollider;
use crate::components::button::{Button, ButtonAction, ButtonFrames, FrameCycler};
use crate::components::dynamictext::DynamicText;
use crate::components::group::Group;
use crate::components::mapposition::MapPosition;
use crate::components::persistent::Persistent;
use crate::components::rigidbody::RigidBody;
use crate::components::rotation::Rotation;
use crate::components::scale::Scale;
use crate::components::sensor::{Locomotive, Sensor, Wagon};
use crate::components::shape::{FilledRect, TrackLine};
use crate::components::signalbinding::SignalBinding;
use crate::components::sprite::Sprite;
use crate::components::timer::Timer;
use crate::components::waypointfollower::WaypointFollower;
use crate::components::zindex::ZIndex;
use crate::events::audio::AudioCmd;
use crate::events::timer::SIGNAL_AUTOSTART;
use crate::resources::animationstore::{AnimationResource, AnimationStore};
use crate::resources::gameconfig::GameConfig;
use crate::resources::gamestate::{GameStates, NextGameState};
use crate::resources::scenario::{Scenario, Variant};
use crate::resources::simulation::{SimState, Simulation};
use crate::resources::texturestore::TextureStore;
use crate::resources::track::Track;
use crate::resources::worldsignals::WorldSignals;
use crate::systems::simulation::{RINGING_SOUND, keys, signal};

const TEXTURES: &[(&str, &str)] = &[
    ("train", "./assets/train.png"),
    ("sensor", "./assets/pipe.png"),
    ("background", "./assets/background.png"),
    ("controlButton", "./assets/controlButton.png"),
    ("semaphor", "./assets/semaphor.png"),
    ("speedControl", "./assets/speedControl.png"),
    ("reactionButton", "./assets/button.png"),
    ("reactionSignal", "./assets/signal.png"),
    ("reactionBell", "./assets/bell.png"),
    ("schemat", "./assets/schemat.png"),
];

/// Sizes used for single images when their file is missing.
const PIPE_SIZE: (f32, f32) = (200.0, 40.0);
const BACKGROUND_SIZE: (f32, f32) = (600.0, 400.0);

const TOP_LEFT: Vector2 = Vector2 { x: 0.0, y: 0.0 };
const CENTER: Vector2 = Vector2 { x: 0.5, y: 0.5 };

const Z_BACKGROUND: i32 = -10;
const Z_TRACK: i32 = -5;
const Z_SENSOR: i32 = 0;
const Z_TRAIN: i32 = 1;
const Z_UI: i32 = 5;
const Z_TEXT: i32 = 10;

/// Clips: sheet frames, fps, looped.
pub fn animation_clips() -> AnimationStore {
    let mut store = AnimationStore::default();
    store.insert("step1", AnimationResource::new(vec![0, 1], 4.0, true));
    store.insert("step2", AnimationResource::new(vec![2, 3], 4.0, true));
    store.insert("signaling", AnimationResource::new(vec![0, 1], 4.0, true));
    store.insert("ringing", AnimationResource::new(vec![0, 1], 8.0, true));
    store
}

pub fn setup(
    mut commands: Commands,
    mut next_state: ResMut<NextGameState>,
    mut rl: NonSendMut<raylib::RaylibHandle>,
    th: NonSend<raylib::RaylibThread>,
    config: Res<GameConfig>,
    mut audio_cmd_writer: MessageWriter<AudioCmd>,
) {
    let mut tex_store = TextureStore::new();
    for (key, path) in TEXTURES {
        match rl.load_texture(&th, path) {
            Ok(texture) => tex_store.insert(*key, texture),
            Err(e) => warn!("texture '{}' not loaded, drawing a placeholder: {}", key, e),
        }
    }
    info!("{} of {} textures loaded", tex_store.len(), TEXTURES.len());
    commands.insert_resource(tex_store);
    commands.insert_resource(animation_clips());

    audio_cmd_writer.write(AudioCmd::LoadMusic {
        id: RINGING_SOUND.into(),
        path: "./assets/ringing.wav".into(),
    });
    audio_cmd_writer.write(AudioCmd::VolumeMusic {
        id: RINGING_SOUND.into(),
        vol: config.ringing_volume,
    });

    next_state.set(GameStates::Playing);
    info!("setup done, next state set to Playing");
}

fn image_size(textures: &TextureStore, key: &str, fallback: (f32, f32)) -> (f32, f32) {
    textures
        .get(key)
        .map_or(fallback, |t| (t.width as f32, t.height as f32))
}

/// Spawn the scene of the current variant and put the simulation back to
/// `BeforeStart`.
pub fn enter_play(
    mut commands: Commands,
    scenario: Res<Scenario>,
    track: Res<Track>,
    textures: Res<TextureStore>,
    mut simulation: ResMut<Simulation>,
    mut signals: ResMut<WorldSignals>,
) {
    simulation.rules = scenario.rules;
    simulation.enter(SimState::BeforeStart);

    signals.clear_scene();
    signals.set_scalar(signal::TRAIN_SPEED, scenario.initial_speed);
    signals.set_integer(signal::SCORE, 0);
    signals.set_string(signal::DESCRIPTION, "Press Start to begin.");
    signals.set_string(signal::END_INFO, "");

    let clock = commands.spawn(Group::new("reaction_clock")).id();
    signals.set_entity(keys::REACTION_CLOCK, clock);

    if let Some(delay) = scenario.autostart_after {
        commands.spawn((Group::new("autostart"), Timer::once(delay, SIGNAL_AUTOSTART)));
    }

    spawn_track(&mut commands, &scenario, &track, &textures, &mut signals);
    match scenario.variant {
        Variant::Simulation => spawn_control_room(&mut commands, &textures, &mut signals),
        Variant::Arcade => spawn_arcade_hud(&mut commands, &textures, &mut signals),
    }
    info!("{} scene spawned", scenario.variant);
}

/// Track line, sensors, locomotive and wagons.
fn spawn_track(
    commands: &mut Commands,
    scenario: &Scenario,
    track: &Track,
    textures: &TextureStore,
    signals: &mut WorldSignals,
) {
    if let Some(width) = scenario.track_width {
        commands.spawn((
            Group::new("track"),
            ZIndex(Z_TRACK),
            TrackLine {
                points: track.polyline(),
                thickness: width,
                color: Color::BLACK,
            },
        ));
    }

    let layout = scenario.sensor;
    let (sw, sh) = image_size(textures, "sensor", layout.fallback);
    let scale = layout.scale_for(sw, sh);
    for point in track.sensor_points() {
        commands.spawn((
            Group::new("sensor"),
            Sensor,
            MapPosition::from_vec(point),
            ZIndex(Z_SENSOR),
            Sprite::new("sensor", sw, sh, layout.anchor),
            Scale { scale },
            BoxCollider::anchored(sw * scale.x, sh * scale.y, layout.anchor),
        ));
    }

    let is_cycle = track.is_cycle || scenario.force_cycle;
    let Some(follower) = WaypointFollower::new(track.positions(), is_cycle, scenario.initial_speed)
    else {
        error!("track has no points, no train spawned");
        return;
    };
    let layout = scenario.train;
    let (tw, th) = image_size(textures, "train", layout.fallback);
    let scale = layout.scale_for(tw, th);
    let train = |follower: &WaypointFollower, gap: u32| {
        (
            MapPosition::from_vec(follower.spawn_position(tw * scale.x, gap)),
            ZIndex(Z_TRAIN),
            Sprite::new("train", tw, th, layout.anchor),
            Scale { scale },
            BoxCollider::anchored(tw * scale.x, th * scale.y, layout.anchor),
            RigidBody::new(),
            follower.clone(),
        )
    };

    let locomotive = commands
        .spawn((Group::new("train"), Locomotive, train(&follower, 0)))
        .id();
    signals.set_entity(keys::LOCOMOTIVE, locomotive);
    for gap in 1..=scenario.wagons {
        commands.spawn((Group::new("wagon"), Wagon, train(&follower, gap)));
    }
}

fn text(x: f32, y: f32, content: &str, size: f32, color: Color) -> (MapPosition, ZIndex, DynamicText) {
    (
        MapPosition::new(x, y),
        ZIndex(Z_TEXT),
        DynamicText::new(content, size, color),
    )
}

/// Background panels, control buttons, schema, description and the
/// reaction panel.
fn spawn_control_room(commands: &mut Commands, textures: &TextureStore, signals: &mut WorldSignals) {
    for (x, y, w, h, grey) in [
        (0.0, 0.0, 1000.0, 400.0, 0xEE),
        (0.0, 400.0, 600.0, 200.0, 0xDD),
        (600.0, 400.0, 400.0, 200.0, 0xCC),
    ] {
        commands.spawn((
            Group::new("background"),
            MapPosition::new(x, y),
            ZIndex(Z_BACKGROUND),
            FilledRect::new(w, h, Color::new(grey, grey, grey, 255)),
        ));
    }
    let (bw, bh) = image_size(textures, "background", BACKGROUND_SIZE);
    commands.spawn((
        Group::new("background"),
        MapPosition::new(0.0, 0.0),
        ZIndex(Z_BACKGROUND + 1),
        Sprite::new("background", bw, bh, TOP_LEFT),
        Scale::new(600.0 / bw, 400.0 / bh),
    ));

    commands.spawn((
        Group::new("semaphore"),
        MapPosition::new(10.0, 200.0),
        ZIndex(Z_UI),
        Sprite::new("semaphor", 50.0, 100.0, TOP_LEFT).with_columns(3),
        Button::new(ButtonAction::Semaphore, ButtonFrames::fixed(0)),
        FrameCycler::new(3),
    ));

    for (x, action, frames) in [
        (194.0, ButtonAction::Start, ButtonFrames::new(2, 1, 0)),
        (268.0, ButtonAction::Pause, ButtonFrames::new(5, 4, 3)),
        (342.0, ButtonAction::Reset, ButtonFrames::new(8, 7, 6)),
    ] {
        commands.spawn((
            Group::new("control_button"),
            MapPosition::new(x, 40.0),
            ZIndex(Z_UI),
            Sprite::new("controlButton", 64.0, 64.0, TOP_LEFT)
                .with_columns(9)
                .with_frame(frames.out),
            Button::new(action, frames),
        ));
    }

    let schema = commands
        .spawn((
            Group::new("schema"),
            MapPosition::new(600.0, 0.0),
            ZIndex(Z_UI),
            Sprite::new("schemat", 400.0, 400.0, TOP_LEFT).with_columns(4),
            Animation::new("step1"),
        ))
        .id();
    signals.set_entity(keys::SCHEMA, schema);

    commands.spawn((Group::new("description"), text(20.0, 420.0, "DESCRIPTION", 30.0, Color::BLACK)));
    commands.spawn((
        Group::new("description"),
        text(20.0, 450.0, "", 20.0, Color::new(0x22, 0x22, 0x22, 255)),
        SignalBinding::new(signal::DESCRIPTION),
    ));

    // control panel, origin at (600, 400)
    commands.spawn((
        Group::new("speed_control"),
        MapPosition::new(650.0, 410.0),
        ZIndex(Z_UI),
        Sprite::new("speedControl", 200.0, 200.0, TOP_LEFT).with_columns(7),
        Button::new(ButtonAction::SpeedControl, ButtonFrames::fixed(0)),
        FrameCycler::new(7),
    ));
    commands.spawn((
        Group::new("speed_label"),
        text(610.0, 500.0, "0", 30.0, Color::BLACK),
        SignalBinding::new(signal::TRAIN_SPEED),
    ));

    let button = commands
        .spawn((
            Group::new("reaction_button"),
            MapPosition::new(900.0, 550.0),
            ZIndex(Z_UI),
            Sprite::new("reactionButton", 168.0, 168.0, CENTER).with_columns(2),
            Scale::uniform(0.5),
            Button::new(ButtonAction::Reaction, ButtonFrames::new(0, 0, 1)),
        ))
        .id();
    signals.set_entity(keys::REACTION_BUTTON, button);

    let lamp = commands
        .spawn((
            Group::new("reaction_signal"),
            MapPosition::new(875.0, 450.0),
            ZIndex(Z_UI),
            Sprite::new("reactionSignal", 160.0, 160.0, CENTER).with_columns(2),
            Scale::uniform(0.5),
            Animation::new("signaling"),
        ))
        .id();
    signals.set_entity(keys::REACTION_SIGNAL, lamp);

    let bell = commands
        .spawn((
            Group::new("bell"),
            MapPosition::new(950.0, 450.0),
            ZIndex(Z_UI),
            Sprite::new("reactionBell", 50.0, 50.0, CENTER).with_columns(2),
            Animation::new("ringing"),
        ))
        .id();
    signals.set_entity(keys::BELL, bell);
}

/// Tilting reaction button, score and end message.
fn spawn_arcade_hud(commands: &mut Commands, textures: &TextureStore, signals: &mut WorldSignals) {
    let (w, h) = image_size(textures, "sensor", PIPE_SIZE);
    let button = commands
        .spawn((
            Group::new("reaction_button"),
            MapPosition::new(50.0, 50.0),
            ZIndex(Z_UI),
            Sprite::new("sensor", w, h, CENTER),
            Rotation::default(),
            Button::new(ButtonAction::Reaction, ButtonFrames::fixed(0)),
        ))
        .id();
    signals.set_entity(keys::REACTION_BUTTON, button);

    commands.spawn((
        Group::new("score"),
        text(300.0, 20.0, "0", 30.0, Color::WHITE),
        SignalBinding::new(signal::SCORE),
    ));
    commands.spawn((
        Group::new("end_info"),
        text(125.0, 250.0, "", 30.0, Color::WHITE),
        SignalBinding::new(signal::END_INFO),
    ));
}

/// Despawn the scene and silence it.
pub fn clean_scene(
    mut commands: Commands,
    query: Query<Entity, Without<Persistent>>,
    mut audio_cmd_writer: MessageWriter<AudioCmd>,
) {
    let mut count = 0;
    for entity in query.iter() {
        commands.entity(entity).despawn();
        count += 1;
    }
    audio_cmd_writer.write(AudioCmd::StopAllMusic);
    info!("scene cleaned, {} entities despawned", count);
}

pub fn quit_game(mut signals: ResMut<WorldSignals>) {
    info!("quitting");
    signals.set_flag("quit_game");
}
