//! Events around the reaction-time state machine.
//!
//! [`SimInputEvent`] feeds the [`Simulation`](crate::resources::simulation::Simulation)
//! resource; every transition it causes is announced as a
//! [`SimStateChangedEvent`] so presentation observers can react.

use bevy_ecs::prelude::*;

use crate::resources::simulation::{SimInput, SimState};

#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct SimInputEvent {
    pub input: SimInput,
}

#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct SimStateChangedEvent {
    pub from: SimState,
    pub to: SimState,
}
