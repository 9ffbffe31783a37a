//! Glue between the reaction state machine and the scene.
//!
//! Observers here translate raw happenings (keys, button clicks, timers) into
//! [`SimInputEvent`]s, feed them to [`Simulation`], and play out the
//! consequences of every [`SimStateChangedEvent`] on the scene entities named
//! in [`WorldSignals::entities`].

use bevy_ecs::observer::On;
use bevy_ecs::prelude::*;
use log::{debug, info};

use crate::components::animation::Animation;
use crate::components::button::{ButtonAction, FrameCycler};
use crate::components::mapposition::MapPosition;
use crate::components::rotation::Rotation;
use crate::components::sensor::Locomotive;
use crate::components::sprite::Sprite;
use crate::components::timer::Timer;
use crate::components::waypointfollower::WaypointFollower;
use crate::events::audio::AudioCmd;
use crate::events::button::ButtonClickedEvent;
use crate::events::input::{InputAction, InputEvent};
use crate::events::simulation::{SimInputEvent, SimStateChangedEvent};
use crate::events::timer::{SIGNAL_AUTOSTART, SIGNAL_CHECK_REACTION, TimerEvent};
use crate::resources::gamestate::{GameStates, NextGameState};
use crate::resources::input::InputState;
use crate::resources::scenario::Scenario;
use crate::resources::screensize::ScreenSize;
use crate::resources::simulation::{SimInput, SimState, Simulation};
use crate::resources::worldsignals::WorldSignals;

pub const RINGING_SOUND: &str = "ringing";

/// Entity keys in [`WorldSignals`] for scene parts the state machine drives.
pub mod keys {
    pub const REACTION_CLOCK: &str = "reaction_clock";
    pub const REACTION_BUTTON: &str = "reaction_button";
    pub const REACTION_SIGNAL: &str = "reaction_signal";
    pub const BELL: &str = "bell";
    pub const SCHEMA: &str = "schema";
    pub const LOCOMOTIVE: &str = "locomotive";
}

/// Signal keys read by labels.
pub mod signal {
    pub const TRAIN_SPEED: &str = "train_speed";
    pub const SCORE: &str = "score";
    pub const DESCRIPTION: &str = "description";
    pub const END_INFO: &str = "end_info";
}

/// Feed an input to the state machine, move or halt the trains, and announce
/// each transition taken.
pub fn observe_sim_input(
    trigger: On<SimInputEvent>,
    mut commands: Commands,
    mut simulation: ResMut<Simulation>,
    mut followers: Query<&mut WaypointFollower>,
    mut timers: Query<&mut Timer>,
) {
    let input = trigger.event().input;
    debug!("simulation input {:?} in {:?}", input, simulation.state());
    let was_ended = simulation.is_ended;
    let taken = simulation.apply(input);

    match input {
        SimInput::Start if !was_ended => {
            for mut follower in followers.iter_mut() {
                follower.start();
            }
            for mut timer in timers.iter_mut() {
                timer.resume();
            }
        }
        SimInput::Pause => {
            for mut follower in followers.iter_mut() {
                follower.stop();
            }
            for mut timer in timers.iter_mut() {
                timer.pause();
            }
        }
        _ => {}
    }

    for (from, to) in taken {
        commands.trigger(SimStateChangedEvent { from, to });
    }
}

/// Presentation of each state entered: texts, animations, sound, the
/// reaction window timer and the score.
#[allow(clippy::too_many_arguments)]
pub fn observe_sim_state_change(
    trigger: On<SimStateChangedEvent>,
    mut commands: Commands,
    scenario: Res<Scenario>,
    mut signals: ResMut<WorldSignals>,
    mut animations: Query<&mut Animation>,
    mut rotations: Query<&mut Rotation>,
    mut followers: Query<&mut WaypointFollower>,
    mut audio: MessageWriter<AudioCmd>,
) {
    let SimStateChangedEvent { from, to } = *trigger.event();
    info!("state {:?} -> {:?}", from, to);

    let entity = |key: &str| signals.get_entity(key).copied();
    let clock = entity(keys::REACTION_CLOCK);
    let schema = entity(keys::SCHEMA);
    let reaction_signal = entity(keys::REACTION_SIGNAL);
    let bell = entity(keys::BELL);
    let button = entity(keys::REACTION_BUTTON);

    let mut tilt = |degrees: f32| {
        if let Some(mut rotation) = button.and_then(|e| rotations.get_mut(e).ok()) {
            rotation.degrees = degrees;
        }
    };
    let stop_ringing = |audio: &mut MessageWriter<AudioCmd>| {
        audio.write(AudioCmd::StopMusic {
            id: RINGING_SOUND.to_string(),
        });
    };

    match to {
        SimState::BeforeStart => {}
        SimState::Start => {
            signals.set_string(signal::DESCRIPTION, "Simulation started");
            play(&mut animations, schema, "step1");
        }
        SimState::NeedReaction => {
            signals.set_string(signal::DESCRIPTION, "Reaction required");
            play(&mut animations, schema, "step2");
            play(&mut animations, reaction_signal, "signaling");
            tilt(45.0);
            if from == SimState::FirstNoReaction {
                stop_ringing(&mut audio);
                stop(&mut animations, bell);
            }
            if let Some(clock) = clock {
                let rules = scenario.rules;
                commands.entity(clock).insert(Timer::repeating(
                    rules.check_interval,
                    rules.checks.saturating_sub(1),
                    SIGNAL_CHECK_REACTION,
                ));
            }
        }
        SimState::GainReaction => {
            signals.set_string(signal::DESCRIPTION, "Reaction confirmed");
            stop_ringing(&mut audio);
            stop(&mut animations, reaction_signal);
            stop(&mut animations, bell);
            tilt(0.0);
            if let Some(clock) = clock {
                commands.entity(clock).remove::<Timer>();
            }
            if scenario.rules.score_on_success {
                let score = signals.increment_integer(signal::SCORE, 1);
                debug!("score {}", score);
            }
        }
        SimState::FirstNoReaction => {
            signals.set_string(signal::DESCRIPTION, "No reaction! Press the button");
            audio.write(AudioCmd::PlayMusic {
                id: RINGING_SOUND.to_string(),
                looped: true,
            });
            play(&mut animations, bell, "ringing");
        }
        SimState::SecondNoReaction => {
            stop_ringing(&mut audio);
            stop(&mut animations, reaction_signal);
            stop(&mut animations, bell);
            tilt(0.0);
            if let Some(clock) = clock {
                commands.entity(clock).remove::<Timer>();
            }
            for mut follower in followers.iter_mut() {
                follower.stop();
            }
        }
        SimState::End => {
            signals.set_string(signal::DESCRIPTION, "Simulation ended");
            if scenario.restart_on_click {
                signals.set_string(signal::END_INFO, "Click anywhere to restart.");
            }
        }
    }
}

fn play(animations: &mut Query<&mut Animation>, target: Option<Entity>, clip: &str) {
    if let Some(mut anim) = target.and_then(|e| animations.get_mut(e).ok()) {
        anim.play(clip);
    }
}

fn stop(animations: &mut Query<&mut Animation>, target: Option<Entity>) {
    if let Some(mut anim) = target.and_then(|e| animations.get_mut(e).ok()) {
        anim.stop();
    }
}

/// Timer signals owned by the simulation.
pub fn observe_timer_event(trigger: On<TimerEvent>, mut commands: Commands) {
    let input = match trigger.event().signal.as_str() {
        SIGNAL_CHECK_REACTION => SimInput::ReactionCheck,
        SIGNAL_AUTOSTART => SimInput::Start,
        other => {
            debug!("unhandled timer signal '{}'", other);
            return;
        }
    };
    commands.trigger(SimInputEvent { input });
}

/// On-screen buttons.
pub fn observe_button_click(
    trigger: On<ButtonClickedEvent>,
    mut commands: Commands,
    mut next_state: ResMut<NextGameState>,
    mut signals: ResMut<WorldSignals>,
    mut cyclers: Query<(&mut FrameCycler, &mut Sprite)>,
) {
    let ButtonClickedEvent { entity, action } = *trigger.event();
    debug!("button {:?} clicked", action);
    match action {
        ButtonAction::Start => commands.trigger(SimInputEvent {
            input: SimInput::Start,
        }),
        ButtonAction::Pause => commands.trigger(SimInputEvent {
            input: SimInput::Pause,
        }),
        ButtonAction::Reaction => commands.trigger(SimInputEvent {
            input: SimInput::ReactionPressed,
        }),
        ButtonAction::Reset => next_state.set(GameStates::Playing),
        ButtonAction::Semaphore | ButtonAction::SpeedControl => {
            if let Ok((mut cycler, mut sprite)) = cyclers.get_mut(entity) {
                let frame = cycler.advance();
                sprite.set_frame(frame);
                if action == ButtonAction::SpeedControl {
                    signals.set_scalar(signal::TRAIN_SPEED, frame as f32 * 10.0);
                }
            }
        }
    }
}

/// Keyboard shortcuts mirror the buttons.
pub fn observe_input_event(
    trigger: On<InputEvent>,
    mut commands: Commands,
    mut next_state: ResMut<NextGameState>,
) {
    let input = match trigger.event().action {
        InputAction::Reaction => SimInput::ReactionPressed,
        InputAction::Start => SimInput::Start,
        InputAction::Pause => SimInput::Pause,
        InputAction::Reset => {
            next_state.set(GameStates::Playing);
            return;
        }
        InputAction::Back => {
            next_state.set(GameStates::Quitting);
            return;
        }
    };
    commands.trigger(SimInputEvent { input });
}

/// Every train runs at the speed held in the `train_speed` signal.
pub fn sync_train_speed(signals: Res<WorldSignals>, mut followers: Query<&mut WaypointFollower>) {
    let Some(speed) = signals.get_scalar(signal::TRAIN_SPEED) else {
        return;
    };
    for mut follower in followers.iter_mut() {
        if follower.max_speed != speed {
            follower.max_speed = speed;
        }
    }
}

/// Arcade restarts: a click after the end, or the locomotive leaving the screen.
pub fn restart_system(
    scenario: Res<Scenario>,
    simulation: Res<Simulation>,
    input: Res<InputState>,
    screen: Res<ScreenSize>,
    locomotives: Query<&MapPosition, With<Locomotive>>,
    mut next_state: ResMut<NextGameState>,
) {
    if scenario.restart_on_click && simulation.is_ended && input.pointer.just_pressed {
        info!("restart on click");
        next_state.set(GameStates::Playing);
        return;
    }
    if scenario.restart_off_screen
        && locomotives
            .iter()
            .any(|p| !screen.contains(p.pos.x, p.pos.y))
    {
        info!("locomotive left the screen, restarting");
        next_state.set(GameStates::Playing);
    }
}
