//! Persistent entity marker component.
//!
//! Entities with the [`Persistent`] component are not despawned when the
//! scene is reset. Observers and registered systems carry it so they survive
//! a restart of the simulation.

use bevy_ecs::prelude::Component;

/// Tag component used to mark entities that should persist across scene resets.
#[derive(Component, Clone, Debug)]
pub struct Persistent;
