//! Input action events.
//!
//! [`InputEvent`] is triggered when a shortcut key is pressed. Observers map
//! it to simulation inputs or lifecycle requests without reading
//! [`InputState`](crate::resources::input::InputState) directly.

use bevy_ecs::prelude::*;

/// Logical shortcut actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputAction {
    /// Space: same as the reaction button.
    Reaction,
    /// Enter: same as the start button.
    Start,
    /// P
    Pause,
    /// R
    Reset,
    /// Escape: leave the application.
    Back,
}

/// Event emitted when an input action is pressed.
#[derive(Event, Debug, Clone, Copy)]
pub struct InputEvent {
    pub action: InputAction,
}
