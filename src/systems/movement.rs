use bevy_ecs::prelude::*;

use crate::components::mapposition::MapPosition;
use crate::components::rigidbody::RigidBody;
use crate::resources::worldtime::WorldTime;

/// Integrate velocity into position.
pub fn movement_system(mut query: Query<(&mut MapPosition, &RigidBody)>, time: Res<WorldTime>) {
    for (mut position, rigidbody) in query.iter_mut() {
        let delta = rigidbody.velocity.scale_by(time.delta);
        position.pos = position.pos + delta;
    }
}
