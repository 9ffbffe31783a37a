//! Reaction-time state machine.
//!
//! ```text
//! BeforeStart --Start--> Start --SensorEntered--> NeedReaction
//! NeedReaction --ReactionPressed--> GainReaction
//! NeedReaction --ReactionCheck--> FirstNoReaction   (warn_before_end)
//! NeedReaction --ReactionCheck--> SecondNoReaction  (otherwise)
//! FirstNoReaction --ReactionPressed--> GainReaction
//! FirstNoReaction --ReactionCheck--> SecondNoReaction --> End
//! ```
//!
//! A sensor re-arms the machine from any state but `End`. Transitions are
//! computed by [`Simulation::next_state`] without side effects;
//! [`Simulation::apply`] commits them and keeps the flags in step.
//! Presentation (sounds, animations, texts) reacts to the resulting
//! [`SimStateChangedEvent`](crate::events::simulation::SimStateChangedEvent)s.

use bevy_ecs::prelude::Resource;
use log::info;

use crate::resources::scenario::ReactionRules;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SimState {
    #[default]
    BeforeStart,
    Start,
    NeedReaction,
    GainReaction,
    FirstNoReaction,
    SecondNoReaction,
    End,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SimInput {
    Start,
    Pause,
    SensorEntered,
    ReactionPressed,
    /// One tick of the reaction timer.
    ReactionCheck,
}

#[derive(Resource, Debug, Clone)]
pub struct Simulation {
    state: SimState,
    pub rules: ReactionRules,
    /// Locomotive overlapped a sensor on the previous frame.
    pub train_over_sensor: bool,
    pub is_reaction: bool,
    pub is_ringing: bool,
    pub is_ended: bool,
    /// Trains are moving.
    pub running: bool,
}

impl Simulation {
    pub fn new(rules: ReactionRules) -> Self {
        Simulation {
            state: SimState::BeforeStart,
            rules,
            train_over_sensor: false,
            is_reaction: false,
            is_ringing: false,
            is_ended: false,
            running: false,
        }
    }

    pub fn state(&self) -> SimState {
        self.state
    }

    /// State `input` leads to from the current one, if any.
    pub fn next_state(&self, input: SimInput) -> Option<SimState> {
        if self.is_ended {
            return None;
        }
        match (input, self.state) {
            (SimInput::Start, SimState::BeforeStart) => Some(SimState::Start),
            (SimInput::SensorEntered, _) => Some(SimState::NeedReaction),
            (
                SimInput::ReactionPressed,
                SimState::NeedReaction | SimState::FirstNoReaction,
            ) => Some(SimState::GainReaction),
            (SimInput::ReactionCheck, SimState::NeedReaction) => {
                if self.rules.warn_before_end {
                    Some(SimState::FirstNoReaction)
                } else {
                    Some(SimState::SecondNoReaction)
                }
            }
            (SimInput::ReactionCheck, SimState::FirstNoReaction) => {
                Some(SimState::SecondNoReaction)
            }
            _ => None,
        }
    }

    /// Feed one input. Returns the transitions taken, in order, as
    /// `(from, to)` pairs. `SecondNoReaction` always chains into `End`.
    pub fn apply(&mut self, input: SimInput) -> Vec<(SimState, SimState)> {
        match input {
            SimInput::Start if !self.is_ended => self.running = true,
            SimInput::Pause => self.running = false,
            _ => {}
        }

        let mut taken = Vec::new();
        let Some(mut next) = self.next_state(input) else {
            return taken;
        };
        loop {
            let from = self.enter(next);
            taken.push((from, next));
            if next != SimState::SecondNoReaction {
                break;
            }
            next = SimState::End;
        }
        taken
    }

    /// Force a state and update the flags. Returns the previous state.
    pub fn enter(&mut self, state: SimState) -> SimState {
        let from = self.state;
        info!("simulation {:?} -> {:?}", from, state);
        self.state = state;
        match state {
            SimState::BeforeStart => {
                self.train_over_sensor = false;
                self.is_reaction = false;
                self.is_ringing = false;
                self.is_ended = false;
                self.running = false;
            }
            SimState::Start => {}
            SimState::NeedReaction => {
                self.is_reaction = false;
                self.is_ringing = false;
            }
            SimState::GainReaction => {
                self.is_reaction = true;
                self.is_ringing = false;
            }
            SimState::FirstNoReaction => self.is_ringing = true,
            SimState::SecondNoReaction | SimState::End => {
                self.is_ringing = false;
                self.is_ended = true;
                self.running = false;
            }
        }
        from
    }
}
