//! Screen size resource.
//!
//! Logical size of the scene in pixels. The window is opened at this size;
//! the arcade layout is used as a "world" rectangle the locomotive must stay in.

use bevy_ecs::prelude::Resource;

/// Current screen size in pixels.
#[derive(Resource, Clone, Copy, Debug)]
pub struct ScreenSize {
    /// Width in pixels.
    pub w: i32,
    /// Height in pixels.
    pub h: i32,
}

impl ScreenSize {
    pub fn contains(&self, x: f32, y: f32) -> bool {
        x >= 0.0 && y >= 0.0 && x <= self.w as f32 && y <= self.h as f32
    }
}
