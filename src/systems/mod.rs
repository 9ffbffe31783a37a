//! ECS systems.
//!
//! Submodules overview
//! - [`animation`] – advance sprite animations
//! - [`audio`] – bridge with the audio thread (forward commands, poll replies)
//! - [`button`] – hover, press and click detection for on-screen buttons
//! - [`gamestate`] – check for pending lifecycle transitions
//! - [`input`] – read hardware input into [`crate::resources::input::InputState`]
//! - [`movement`] – integrate positions from rigid body velocities
//! - [`render`] – draw the scene and the debug overlay with Raylib
//! - [`sensor`] – locomotive versus sensor overlap
//! - [`signalbinding`] – keep labels in step with world signals
//! - [`simulation`] – observers driving the reaction state machine and its presentation
//! - [`time`] – world clock and timers
//! - [`waypoint`] – steer trains along their waypoints

pub mod animation;
pub mod audio;
pub mod button;
pub mod gamestate;
pub mod input;
pub mod movement;
pub mod render;
pub mod sensor;
pub mod signalbinding;
pub mod simulation;
pub mod time;
pub mod waypoint;
