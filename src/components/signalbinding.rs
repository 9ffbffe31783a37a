//! Signal binding component for reactive UI updates.
//!
//! Binds a [`DynamicText`](super::dynamictext::DynamicText) to a value in
//! [`WorldSignals`](crate::resources::worldsignals::WorldSignals), so labels
//! like the train speed or the score follow the simulation without scene code
//! touching them.
//!
//! # Example
//!
//! ```ignore
//! commands.spawn((
//!     DynamicText::new("0", 30.0, Color::BLACK),
//!     SignalBinding::new("train_speed"),
//! ));
//!
//! commands.spawn((
//!     DynamicText::new("", 30.0, Color::WHITE),
//!     SignalBinding::new("score").with_format("Score: {}"),
//! ));
//! ```
//!
//! # Related
//!
//! - [`crate::systems::signalbinding::update_world_signals_binding_system`] – the update system

use bevy_ecs::prelude::Component;

/// Binds a [`DynamicText`](super::dynamictext::DynamicText) to a world signal value.
#[derive(Component, Clone, Debug)]
pub struct SignalBinding {
    /// The key of the signal to read from.
    pub signal_key: String,
    /// Optional format string. Use `{}` as a placeholder for the value.
    pub format: Option<String>,
}

impl SignalBinding {
    pub fn new(signal_key: impl ToString) -> Self {
        SignalBinding {
            signal_key: signal_key.to_string(),
            format: None,
        }
    }

    /// Sets a format string for the displayed value.
    ///
    /// Use `{}` as a placeholder for the signal value.
    pub fn with_format(mut self, format: impl ToString) -> Self {
        self.format = Some(format.to_string());
        self
    }
}
