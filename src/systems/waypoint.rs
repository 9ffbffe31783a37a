//! Steering of trains along their waypoints.
use bevy_ecs::prelude::*;

use crate::components::mapposition::MapPosition;
use crate::components::rigidbody::RigidBody;
use crate::components::waypointfollower::{FollowStep, WaypointFollower};
use crate::resources::worldtime::WorldTime;

/// Point each follower's velocity at its current waypoint, or snap onto the
/// waypoint when it is within one frame of travel. Runs before
/// [`movement_system`](crate::systems::movement::movement_system).
pub fn waypoint_follower_system(
    mut query: Query<(&mut WaypointFollower, &mut MapPosition, &mut RigidBody)>,
    time: Res<WorldTime>,
) {
    for (mut follower, mut position, mut rigidbody) in query.iter_mut() {
        match follower.step(position.pos, time.delta) {
            FollowStep::Idle => rigidbody.halt(),
            FollowStep::Move(velocity) => rigidbody.set_velocity(velocity),
            FollowStep::Arrive(target) => {
                position.pos = target;
                rigidbody.halt();
            }
        }
    }
}
