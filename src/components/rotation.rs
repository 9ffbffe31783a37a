use bevy_ecs::prelude::Component;

/// Rotation of a sprite around its origin, in degrees.
#[derive(Component, Clone, Debug, Copy, Default)]
pub struct Rotation {
    pub degrees: f32,
}
