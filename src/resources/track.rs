//! Track (waypoint list) loaded from JSON.
//!
//! File shape:
//!
//! ```json
//! { "points": [ { "x": 40, "y": 300 }, { "x": 560, "y": 300, "sensor": true } ],
//!   "isCycle": true }
//! ```
//!
//! `sensor` and `isCycle` default to `false`.

use std::path::Path;
use std::sync::Arc;

use bevy_ecs::prelude::Resource;
use log::info;
use raylib::prelude::Vector2;
use serde::Deserialize;

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct Waypoint {
    pub x: f32,
    pub y: f32,
    #[serde(default)]
    pub sensor: bool,
}

impl Waypoint {
    pub fn pos(&self) -> Vector2 {
        Vector2::new(self.x, self.y)
    }
}

#[derive(Resource, Debug, Clone, PartialEq, Deserialize)]
pub struct Track {
    pub points: Vec<Waypoint>,
    #[serde(default, rename = "isCycle")]
    pub is_cycle: bool,
}

impl Track {
    /// Parse and validate a track from JSON text.
    pub fn from_json_str(text: &str) -> Result<Track, String> {
        let track: Track =
            serde_json::from_str(text).map_err(|e| format!("Invalid track JSON: {}", e))?;
        if track.points.is_empty() {
            return Err("Track has no points".to_string());
        }
        Ok(track)
    }

    /// Read a track file from disk.
    pub fn load(path: impl AsRef<Path>) -> Result<Track, String> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .map_err(|e| format!("Failed to read track file {:?}: {}", path, e))?;
        let track = Self::from_json_str(&text).map_err(|e| format!("{:?}: {}", path, e))?;
        info!(
            "Loaded track {:?}: {} points, {} sensors, cycle={}",
            path,
            track.points.len(),
            track.sensor_points().count(),
            track.is_cycle
        );
        Ok(track)
    }

    /// Positions a follower visits, in order.
    pub fn positions(&self) -> Arc<[Vector2]> {
        self.points.iter().map(Waypoint::pos).collect()
    }

    /// Sensor waypoints. The start point never gets a sensor even when flagged.
    pub fn sensor_points(&self) -> impl Iterator<Item = Vector2> + '_ {
        self.points
            .iter()
            .skip(1)
            .filter(|p| p.sensor)
            .map(Waypoint::pos)
    }

    /// Points of the drawn line, closed back to the start on a cycle.
    pub fn polyline(&self) -> Vec<Vector2> {
        let mut line: Vec<Vector2> = self.points.iter().map(Waypoint::pos).collect();
        if self.is_cycle && line.len() > 1 {
            line.push(line[0]);
        }
        line
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{
        "points": [
            { "x": 0, "y": 0, "sensor": true },
            { "x": 100, "y": 0 },
            { "x": 100, "y": 100, "sensor": true }
        ],
        "isCycle": true
    }"#;

    #[test]
    fn test_parse_defaults() {
        let track = Track::from_json_str(r#"{ "points": [ { "x": 1, "y": 2 } ] }"#).unwrap();
        assert!(!track.is_cycle);
        assert!(!track.points[0].sensor);
        assert_eq!(track.points[0].pos(), Vector2::new(1.0, 2.0));
    }

    #[test]
    fn test_empty_track_rejected() {
        assert!(Track::from_json_str(r#"{ "points": [] }"#).is_err());
        assert!(Track::from_json_str("not json").is_err());
    }

    #[test]
    fn test_sensor_points_skip_start() {
        let track = Track::from_json_str(SAMPLE).unwrap();
        let sensors: Vec<Vector2> = track.sensor_points().collect();
        assert_eq!(sensors, vec![Vector2::new(100.0, 100.0)]);
    }

    #[test]
    fn test_polyline_closes_cycle() {
        let mut track = Track::from_json_str(SAMPLE).unwrap();
        let line = track.polyline();
        assert_eq!(line.len(), 4);
        assert_eq!(line[3], line[0]);
        track.is_cycle = false;
        assert_eq!(track.polyline().len(), 3);
    }

    #[test]
    fn test_load_missing_file() {
        let err = Track::load("/nonexistent/tracks.json").unwrap_err();
        assert!(err.contains("Failed to read track file"));
    }
}
