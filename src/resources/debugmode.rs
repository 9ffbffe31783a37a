//! Debug toggle resource.
//!
//! The mere presence of this resource indicates that debug rendering and
//! diagnostics should be enabled. Remove it to disable debug behavior.

use bevy_ecs::prelude::Resource;

/// Marker resource: when present, the renderer draws colliders, waypoints and stats.
#[derive(Resource, Clone, Copy)]
pub struct DebugMode {}
