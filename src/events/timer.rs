//! Timer expiration events.
//!
//! Each time a [`Timer`](crate::components::timer::Timer) component elapses,
//! [`update_timers`](crate::systems::time::update_timers) triggers a
//! [`TimerEvent`]. The simulation observer matches on the signal:
//!
//! - `check_reaction`: one tick of the reaction window
//! - `autostart`: start the trains without user input

use bevy_ecs::prelude::*;

pub const SIGNAL_CHECK_REACTION: &str = "check_reaction";
pub const SIGNAL_AUTOSTART: &str = "autostart";

/// Event emitted when a timer elapses.
#[derive(Event, Debug, Clone, PartialEq, Eq)]
pub struct TimerEvent {
    /// The entity carrying the timer.
    pub entity: Entity,
    /// The signal name configured on the timer.
    pub signal: String,
}
