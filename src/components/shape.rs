//! Untextured drawables: background panels and track polylines.

use bevy_ecs::prelude::Component;
use raylib::prelude::{Color, Vector2};

/// Filled rectangle with its top-left corner on the entity's position.
#[derive(Component, Clone, Copy, Debug)]
pub struct FilledRect {
    pub size: Vector2,
    pub color: Color,
}

impl FilledRect {
    pub fn new(width: f32, height: f32, color: Color) -> Self {
        Self {
            size: Vector2 {
                x: width,
                y: height,
            },
            color,
        }
    }
}

/// Open polyline in world coordinates, drawn as connected thick segments.
#[derive(Component, Clone, Debug)]
pub struct TrackLine {
    pub points: Vec<Vector2>,
    pub thickness: f32,
    pub color: Color,
}
