//! railreflex library.
//!
//! A reaction-time train simulator on raylib and bevy_ecs. Trains follow a
//! waypoint track; when the locomotive runs over a sensor the operator must
//! press the reaction button before the window closes, or the run ends.
//!
//! The ECS components, resources, systems and events are exposed here for
//! the binary and for integration tests.

pub mod components;
pub mod events;
pub mod game;
pub mod resources;
pub mod systems;
