use bevy_ecs::prelude::Component;
use raylib::prelude::Vector2;

/// Sprite is identified by a texture key, its frame size in texture pixels and an offset if the texture is a spritesheet.
/// The offset is used to select the correct frame from the spritesheet.
/// The origin selects the pivot point (in pixels) relative to the frame's top-left
/// used for placement/rotation/scaling when rendering.
#[derive(Component, Clone, Debug)]
pub struct Sprite {
    pub tex_key: String,
    pub width: f32,
    pub height: f32,
    pub offset: Vector2,
    pub origin: Vector2,
    /// Frames per row in the sheet; frames are laid out left-to-right, top-to-bottom.
    pub columns: usize,
    /// Currently displayed frame index.
    pub frame: usize,
}

impl Sprite {
    /// Single-row sheet (or plain image) with the pivot at the normalized `anchor`.
    pub fn new(tex_key: impl Into<String>, width: f32, height: f32, anchor: Vector2) -> Self {
        Self {
            tex_key: tex_key.into(),
            width,
            height,
            offset: Vector2 { x: 0.0, y: 0.0 },
            origin: Vector2 {
                x: width * anchor.x,
                y: height * anchor.y,
            },
            columns: 1,
            frame: 0,
        }
    }

    pub fn with_columns(mut self, columns: usize) -> Self {
        self.columns = columns.max(1);
        self.set_frame(self.frame);
        self
    }

    pub fn with_frame(mut self, frame: usize) -> Self {
        self.set_frame(frame);
        self
    }

    /// Top-left corner and size on screen when drawn at `position` with `scale`.
    pub fn screen_rect(&self, position: Vector2, scale: Vector2) -> (Vector2, Vector2) {
        let size = Vector2 {
            x: self.width * scale.x,
            y: self.height * scale.y,
        };
        let min = Vector2 {
            x: position.x - self.origin.x * scale.x,
            y: position.y - self.origin.y * scale.y,
        };
        (min, size)
    }

    /// Whether `point` falls on the sprite, ignoring rotation.
    pub fn contains_point(&self, position: Vector2, scale: Vector2, point: Vector2) -> bool {
        let (min, size) = self.screen_rect(position, scale);
        point.x >= min.x && point.x <= min.x + size.x && point.y >= min.y && point.y <= min.y + size.y
    }

    /// Select a frame of the sheet by index.
    pub fn set_frame(&mut self, frame: usize) {
        let col = frame % self.columns;
        let row = frame / self.columns;
        self.frame = frame;
        self.offset = Vector2 {
            x: col as f32 * self.width,
            y: row as f32 * self.height,
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contains_point_scaled_and_centered() {
        let s = Sprite::new("button", 168.0, 168.0, Vector2 { x: 0.5, y: 0.5 });
        let pos = Vector2 { x: 300.0, y: 150.0 };
        let half = Vector2 { x: 0.5, y: 0.5 };
        assert!(s.contains_point(pos, half, Vector2 { x: 340.0, y: 190.0 }));
        assert!(!s.contains_point(pos, half, Vector2 { x: 390.0, y: 150.0 }));
    }

    #[test]
    fn test_origin_from_anchor() {
        let s = Sprite::new("train", 200.0, 100.0, Vector2 { x: 0.5, y: 1.0 });
        assert_eq!(s.origin.x, 100.0);
        assert_eq!(s.origin.y, 100.0);
    }

    #[test]
    fn test_set_frame_walks_grid() {
        let mut s = Sprite::new("controlButton", 64.0, 64.0, Vector2 { x: 0.0, y: 0.0 })
            .with_columns(3);
        s.set_frame(4);
        assert_eq!(s.offset.x, 64.0);
        assert_eq!(s.offset.y, 64.0);
        s.set_frame(2);
        assert_eq!(s.offset.x, 128.0);
        assert_eq!(s.offset.y, 0.0);
    }

    #[test]
    fn test_zero_columns_clamped() {
        let s = Sprite::new("x", 10.0, 10.0, Vector2 { x: 0.0, y: 0.0 })
            .with_columns(0)
            .with_frame(3);
        assert_eq!(s.columns, 1);
        assert_eq!(s.offset.y, 30.0);
    }
}
