//! The two playable variants and their tuning.
//!
//! Both variants run on the same systems. They differ only in the data held
//! by [`Scenario`]: screen size, train speed and length, how strict the
//! reaction window is, and a few arcade conveniences such as autostart and
//! click-to-restart.

use std::fmt;
use std::str::FromStr;

use bevy_ecs::prelude::Resource;
use clap::ValueEnum;
use raylib::prelude::{Color, Vector2};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, ValueEnum)]
pub enum Variant {
    /// Control-panel trainer: speed dial, semaphore, bell warning.
    #[default]
    Simulation,
    /// Looping track with wagons and a score.
    Arcade,
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Variant::Simulation => write!(f, "simulation"),
            Variant::Arcade => write!(f, "arcade"),
        }
    }
}

impl FromStr for Variant {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "simulation" => Ok(Variant::Simulation),
            "arcade" => Ok(Variant::Arcade),
            other => Err(format!("Unknown variant '{}'", other)),
        }
    }
}

/// How the reaction window is judged.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReactionRules {
    /// Seconds between two checks.
    pub check_interval: f32,
    /// Number of checks per window.
    pub checks: u32,
    /// A first miss only rings the bell; the second one ends the run.
    pub warn_before_end: bool,
    pub score_on_success: bool,
}

/// How a train car or sensor sprite is sized and pinned to its waypoint.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpriteLayout {
    /// Frame size used when the texture is missing.
    pub fallback: (f32, f32),
    /// Uniform scale applied to the texture.
    pub scale: f32,
    /// Fixed on-screen size; overrides `scale`.
    pub size: Option<(f32, f32)>,
    /// Normalized pivot, (0,0) top-left.
    pub anchor: Vector2,
}

impl SpriteLayout {
    /// Scale that draws a `width` x `height` frame at the laid out size.
    pub fn scale_for(&self, width: f32, height: f32) -> Vector2 {
        match self.size {
            Some((w, h)) if width > 0.0 && height > 0.0 => Vector2 {
                x: w / width,
                y: h / height,
            },
            _ => Vector2 {
                x: self.scale,
                y: self.scale,
            },
        }
    }
}

/// Per-variant tuning, inserted as a resource at startup.
#[derive(Resource, Debug, Clone, PartialEq)]
pub struct Scenario {
    pub variant: Variant,
    pub width: i32,
    pub height: i32,
    pub background: Color,
    pub rules: ReactionRules,
    pub train: SpriteLayout,
    pub sensor: SpriteLayout,
    /// Locomotive speed in px/s when the scene starts.
    pub initial_speed: f32,
    pub wagons: u32,
    /// Start the train by itself after this many seconds.
    pub autostart_after: Option<f32>,
    /// Line width of the drawn track; `None` hides the track.
    pub track_width: Option<f32>,
    /// Cycle the track even if the file says otherwise.
    pub force_cycle: bool,
    /// After the end, a click anywhere resets the scene.
    pub restart_on_click: bool,
    /// Reset when the locomotive leaves the screen.
    pub restart_off_screen: bool,
}

impl Scenario {
    pub fn new(variant: Variant, check_interval: f32) -> Self {
        match variant {
            Variant::Simulation => Scenario {
                variant,
                width: 1000,
                height: 600,
                background: Color::WHITE,
                rules: ReactionRules {
                    check_interval,
                    checks: 3,
                    warn_before_end: true,
                    score_on_success: false,
                },
                train: SpriteLayout {
                    fallback: (200.0, 120.0),
                    scale: 0.25,
                    size: None,
                    anchor: Vector2 { x: 0.5, y: 1.0 },
                },
                sensor: SpriteLayout {
                    fallback: (200.0, 40.0),
                    scale: 0.5,
                    size: None,
                    anchor: Vector2 { x: 0.5, y: 0.1 },
                },
                initial_speed: 0.0,
                wagons: 0,
                autostart_after: None,
                track_width: None,
                force_cycle: false,
                restart_on_click: false,
                restart_off_screen: false,
            },
            Variant::Arcade => Scenario {
                variant,
                width: 600,
                height: 600,
                background: Color::new(0x71, 0xc5, 0xcf, 255),
                rules: ReactionRules {
                    check_interval,
                    checks: 1,
                    warn_before_end: false,
                    score_on_success: true,
                },
                train: SpriteLayout {
                    fallback: (34.0, 24.0),
                    scale: 1.0,
                    size: None,
                    anchor: Vector2 { x: 0.5, y: 0.5 },
                },
                sensor: SpriteLayout {
                    fallback: (20.0, 20.0),
                    scale: 1.0,
                    size: Some((20.0, 20.0)),
                    anchor: Vector2 { x: 0.5, y: 0.5 },
                },
                initial_speed: 200.0,
                wagons: 5,
                autostart_after: Some(1.5),
                track_width: Some(10.0),
                force_cycle: true,
                restart_on_click: true,
                restart_off_screen: true,
            },
        }
    }
}
