//! ECS resources made available to systems.
//!
//! Overview
//! - `animationstore` – named sprite-sheet clips reused across entities
//! - `audio` – bridge and channels for the background audio thread
//! - `debugmode` – presence toggles the debug overlay
//! - `gameconfig` – settings read from the INI file
//! - `gamestate` – authoritative and pending lifecycle state
//! - `input` – per-frame keyboard and mouse state
//! - `scenario` – the two variants and their tuning
//! - `screensize` – scene dimensions in pixels
//! - `simulation` – the reaction-time state machine
//! - `systemsstore` – registry of systems addressable by name
//! - `texturestore` – loaded textures keyed by name
//! - `track` – waypoints loaded from JSON
//! - `worldsignals` – shared values read by UI labels
//! - `worldtime` – simulation time and delta
pub mod animationstore;
pub mod audio;
pub mod debugmode;
pub mod gameconfig;
pub mod gamestate;
pub mod input;
pub mod scenario;
pub mod screensize;
pub mod simulation;
pub mod systemsstore;
pub mod texturestore;
pub mod track;
pub mod worldsignals;
pub mod worldtime;
