//! World-space position component.
//!
//! [`MapPosition`] is the pivot of an entity in world coordinates. Sprites are
//! drawn around it using their origin, colliders are offset from it, and the
//! waypoint follower steers it along the track.

use bevy_ecs::prelude::Component;
use raylib::prelude::Vector2;

/// World-space position (pivot) for an entity.
#[derive(Component, Clone, Copy, Debug)]
pub struct MapPosition {
    pub pos: Vector2,
}

impl Default for MapPosition {
    fn default() -> Self {
        Self {
            pos: Vector2 { x: 0.0, y: 0.0 },
        }
    }
}

impl MapPosition {
    pub fn new(x: f32, y: f32) -> Self {
        Self {
            pos: Vector2 { x, y },
        }
    }

    pub fn from_vec(pos: Vector2) -> Self {
        Self { pos }
    }

    /// Distance to a point in world units.
    pub fn distance_to(&self, point: Vector2) -> f32 {
        let dx = point.x - self.pos.x;
        let dy = point.y - self.pos.y;
        (dx * dx + dy * dy).sqrt()
    }
}
