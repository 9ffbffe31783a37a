//! Event types and observers.
//!
//! Submodules:
//! - [`audio`] – commands and messages for the background audio thread
//! - [`button`] – clicks on on-screen buttons
//! - [`gamestate`] – lifecycle transitions and the observer running their hooks
//! - [`input`] – keyboard shortcuts
//! - [`simulation`] – inputs to and transitions of the reaction state machine
//! - [`switchdebug`] – toggle the debug overlay
//! - [`timer`] – timer expirations
pub mod audio;
pub mod button;
pub mod gamestate;
pub mod input;
pub mod simulation;
pub mod switchdebug;
pub mod timer;
