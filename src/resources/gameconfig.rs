//! Game configuration resource.
//!
//! Settings loaded from an INI file. Every key is optional; a missing file
//! or key keeps the defaults below, and the command line can override the
//! variant and the track file afterwards.
//!
//! # Configuration File Format
//!
//! ```ini
//! [window]
//! target_fps = 60
//! vsync = true
//!
//! [simulation]
//! variant = simulation
//! tracks = ./assets/tracks.json
//! check_interval = 1.5
//!
//! [audio]
//! ringing_volume = 0.5
//! ```

use crate::resources::scenario::Variant;
use bevy_ecs::prelude::*;
use configparser::ini::Ini;
use log::{info, warn};
use std::path::PathBuf;

const DEFAULT_TARGET_FPS: u32 = 60;
const DEFAULT_VSYNC: bool = true;
const DEFAULT_TRACKS_PATH: &str = "./assets/tracks.json";
const DEFAULT_CHECK_INTERVAL: f32 = 1.5;
const DEFAULT_RINGING_VOLUME: f32 = 0.5;
const DEFAULT_CONFIG_PATH: &str = "./config.ini";

#[derive(Resource, Debug, Clone)]
pub struct GameConfig {
    pub target_fps: u32,
    pub vsync: bool,
    pub variant: Variant,
    /// JSON file holding the waypoints.
    pub tracks_path: PathBuf,
    /// Seconds between two reaction checks.
    pub check_interval: f32,
    /// Volume of the looping warning bell, 0.0 to 1.0.
    pub ringing_volume: f32,
    pub config_path: PathBuf,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl GameConfig {
    /// Create a new configuration with safe default values.
    pub fn new() -> Self {
        Self {
            target_fps: DEFAULT_TARGET_FPS,
            vsync: DEFAULT_VSYNC,
            variant: Variant::default(),
            tracks_path: PathBuf::from(DEFAULT_TRACKS_PATH),
            check_interval: DEFAULT_CHECK_INTERVAL,
            ringing_volume: DEFAULT_RINGING_VOLUME,
            config_path: PathBuf::from(DEFAULT_CONFIG_PATH),
        }
    }

    /// Create a new configuration with a custom config file path.
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            config_path: path.into(),
            ..Self::new()
        }
    }

    /// Load configuration from the INI file.
    ///
    /// Missing values retain their current values. Returns an error if the
    /// file cannot be read or parsed.
    pub fn load_from_file(&mut self) -> Result<(), String> {
        let mut config = Ini::new();
        config
            .load(&self.config_path)
            .map_err(|e| format!("Failed to load config file {:?}: {}", self.config_path, e))?;

        // [window]
        if let Some(fps) = config.getuint("window", "target_fps").ok().flatten() {
            self.target_fps = fps as u32;
        }
        if let Some(vsync) = config.getbool("window", "vsync").ok().flatten() {
            self.vsync = vsync;
        }

        // [simulation]
        if let Some(name) = config.get("simulation", "variant") {
            match name.parse::<Variant>() {
                Ok(variant) => self.variant = variant,
                Err(e) => warn!("{}; keeping {}", e, self.variant),
            }
        }
        if let Some(path) = config.get("simulation", "tracks") {
            self.tracks_path = PathBuf::from(path);
        }
        if let Some(secs) = config.getfloat("simulation", "check_interval").ok().flatten() {
            let secs = secs as f32;
            if secs > 0.0 && secs.is_finite() {
                self.check_interval = secs;
            } else {
                warn!("check_interval must be a positive number of seconds, got {}", secs);
            }
        }

        // [audio]
        if let Some(vol) = config.getfloat("audio", "ringing_volume").ok().flatten() {
            self.ringing_volume = (vol as f32).clamp(0.0, 1.0);
        }

        info!(
            "Loaded config: variant={}, tracks={:?}, fps={}, vsync={}, check_interval={}",
            self.variant, self.tracks_path, self.target_fps, self.vsync, self.check_interval
        );

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write_ini(name: &str, body: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!("railreflex_{}_{}.ini", name, std::process::id()));
        std::fs::write(&path, body).unwrap();
        path
    }

    #[test]
    fn test_defaults() {
        let config = GameConfig::new();
        assert_eq!(config.target_fps, 60);
        assert_eq!(config.variant, Variant::Simulation);
        assert_eq!(config.check_interval, 1.5);
        assert_eq!(config.ringing_volume, 0.5);
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let mut config = GameConfig::with_path("/nonexistent/railreflex.ini");
        assert!(config.load_from_file().is_err());
        assert_eq!(config.variant, Variant::Simulation);
    }

    #[test]
    fn test_load_overrides_present_keys_only() {
        let path = write_ini(
            "partial",
            "[simulation]\nvariant = arcade\ncheck_interval = 2.0\n[audio]\nringing_volume = 3\n",
        );
        let mut config = GameConfig::with_path(&path);
        config.load_from_file().unwrap();
        assert_eq!(config.variant, Variant::Arcade);
        assert_eq!(config.check_interval, 2.0);
        assert_eq!(config.ringing_volume, 1.0);
        assert_eq!(config.target_fps, 60);
        assert_eq!(config.tracks_path, PathBuf::from("./assets/tracks.json"));
        let _ = std::fs::remove_file(path);
    }

    #[test]
    fn test_bad_values_keep_defaults() {
        let path = write_ini(
            "bad",
            "[simulation]\nvariant = tram\ncheck_interval = -1\n",
        );
        let mut config = GameConfig::with_path(&path);
        config.load_from_file().unwrap();
        assert_eq!(config.variant, Variant::Simulation);
        assert_eq!(config.check_interval, 1.5);
        let _ = std::fs::remove_file(path);
    }

    #[test]
    fn test_endless_check_interval_rejected() {
        for (name, value) in [("inf", "inf"), ("huge", "1e300"), ("nan", "NaN")] {
            let path = write_ini(name, &format!("[simulation]\ncheck_interval = {}\n", value));
            let mut config = GameConfig::with_path(&path);
            config.load_from_file().unwrap();
            assert_eq!(config.check_interval, 1.5, "accepted {}", value);
            let _ = std::fs::remove_file(path);
        }
    }
}
