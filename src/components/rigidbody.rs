//! Kinematic body component.
//!
//! The [`RigidBody`] stores the velocity that
//! [`movement_system`](crate::systems::movement::movement_system) integrates
//! into [`MapPosition`](super::mapposition::MapPosition) each frame. There are
//! no forces or friction here: the waypoint follower sets the velocity
//! directly, and zeroes it when a train stops or the simulation is paused.

use bevy_ecs::prelude::Component;
use raylib::prelude::Vector2;

/// Kinematic body storing velocity in world units per second.
#[derive(Component, Clone, Copy, Debug)]
pub struct RigidBody {
    /// Current velocity in world units per second.
    pub velocity: Vector2,
}

impl Default for RigidBody {
    fn default() -> Self {
        Self::new()
    }
}

impl RigidBody {
    /// Create a RigidBody with zero velocity.
    pub fn new() -> Self {
        Self {
            velocity: Vector2 { x: 0.0, y: 0.0 },
        }
    }

    /// Set the velocity of the RigidBody.
    pub fn set_velocity(&mut self, velocity: Vector2) {
        self.velocity = velocity;
    }

    /// Zero the velocity.
    pub fn halt(&mut self) {
        self.velocity = Vector2 { x: 0.0, y: 0.0 };
    }

    /// Current speed (velocity magnitude).
    pub fn speed(&self) -> f32 {
        self.velocity.length()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rigidbody_new_is_at_rest() {
        let rb = RigidBody::new();
        assert_eq!(rb.velocity.x, 0.0);
        assert_eq!(rb.velocity.y, 0.0);
    }

    #[test]
    fn test_halt_zeroes_velocity() {
        let mut rb = RigidBody::new();
        rb.set_velocity(Vector2 { x: 3.0, y: 4.0 });
        assert!((rb.speed() - 5.0).abs() < 1e-6);
        rb.halt();
        assert_eq!(rb.speed(), 0.0);
    }
}
