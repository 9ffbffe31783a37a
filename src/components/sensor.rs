//! Sensor zones and the train parts that interact with them.

use bevy_ecs::prelude::Component;

/// A zone on the track that asks the driver for a reaction when the
/// locomotive rolls over it.
#[derive(Component, Clone, Copy, Debug, Default)]
pub struct Sensor;

/// The leading train unit. Only its collider is checked against sensors.
#[derive(Component, Clone, Copy, Debug, Default)]
pub struct Locomotive;

/// A car trailing the locomotive along the same path.
#[derive(Component, Clone, Copy, Debug, Default)]
pub struct Wagon;
