//! On-screen button clicks.

use bevy_ecs::prelude::*;

use crate::components::button::ButtonAction;

/// A press and release both landed inside the button.
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct ButtonClickedEvent {
    pub entity: Entity,
    pub action: ButtonAction,
}
