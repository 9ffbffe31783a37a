//! Animation resource registry.
//!
//! Named clips shared by every entity that plays them. A clip is a list of
//! sprite-sheet frames played at a fixed rate, looping or not.

use bevy_ecs::prelude::Resource;
use rustc_hash::FxHashMap;

/// Central registry of reusable animation definitions keyed by string IDs.
#[derive(Resource, Default)]
pub struct AnimationStore {
    pub animations: FxHashMap<String, AnimationResource>,
}

/// Immutable data describing a sprite-sheet clip.
#[derive(Debug, Clone, PartialEq)]
pub struct AnimationResource {
    /// Sheet frames shown in order.
    pub frames: Vec<usize>,
    /// Frames per second playback speed.
    pub fps: f32,
    /// Whether the animation restarts after the last frame.
    pub looped: bool,
}

impl AnimationResource {
    pub fn new(frames: Vec<usize>, fps: f32, looped: bool) -> Self {
        Self {
            frames,
            fps,
            looped,
        }
    }

    /// Sheet frame for a clip position, clamped to the last frame.
    pub fn sheet_frame(&self, index: usize) -> usize {
        match self.frames.len() {
            0 => 0,
            n => self.frames[index.min(n - 1)],
        }
    }
}

impl AnimationStore {
    pub fn insert(&mut self, key: impl Into<String>, clip: AnimationResource) {
        self.animations.insert(key.into(), clip);
    }

    pub fn get(&self, key: &str) -> Option<&AnimationResource> {
        self.animations.get(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sheet_frame_clamps() {
        let clip = AnimationResource::new(vec![2, 3], 4.0, true);
        assert_eq!(clip.sheet_frame(0), 2);
        assert_eq!(clip.sheet_frame(1), 3);
        assert_eq!(clip.sheet_frame(9), 3);
        let empty = AnimationResource::new(vec![], 4.0, true);
        assert_eq!(empty.sheet_frame(0), 0);
    }
}
