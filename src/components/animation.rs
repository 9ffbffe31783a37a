//! Sprite animation playback state.
//!
//! An [`Animation`] points at a clip in
//! [`AnimationStore`](crate::resources::animationstore::AnimationStore) and
//! remembers where playback is. Clips are played and stopped from scene code
//! when the simulation changes state; stopping rewinds to the clip's first
//! frame so a signal lamp goes dark and a bell stops mid-swing.

use bevy_ecs::prelude::Component;

#[derive(Debug, Clone, Component)]
pub struct Animation {
    pub animation_key: String,
    /// Index into the clip's frame list (not the sheet frame itself).
    pub frame_index: usize,
    pub elapsed_time: f32,
    pub playing: bool,
    /// Set when playback stopped and the sprite should show the first frame again.
    pub rewind: bool,
}

impl Animation {
    /// A stopped animation parked on the first frame of `animation_key`.
    pub fn new(animation_key: impl Into<String>) -> Self {
        Self {
            animation_key: animation_key.into(),
            frame_index: 0,
            elapsed_time: 0.0,
            playing: false,
            rewind: false,
        }
    }

    /// Start (or restart) playback of a clip. Playing the clip that is
    /// already running leaves it untouched.
    pub fn play(&mut self, animation_key: impl Into<String>) {
        let key = animation_key.into();
        if self.playing && self.animation_key == key {
            return;
        }
        self.animation_key = key;
        self.frame_index = 0;
        self.elapsed_time = 0.0;
        self.playing = true;
        self.rewind = false;
    }

    /// Stop playback and rewind to the first frame of the current clip.
    pub fn stop(&mut self) {
        self.playing = false;
        self.frame_index = 0;
        self.elapsed_time = 0.0;
        self.rewind = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_is_stopped() {
        let a = Animation::new("ringing");
        assert!(!a.playing);
        assert_eq!(a.frame_index, 0);
    }

    #[test]
    fn test_play_switches_clip_and_restarts() {
        let mut a = Animation::new("step1");
        a.play("step1");
        a.frame_index = 1;
        a.play("step2");
        assert_eq!(a.animation_key, "step2");
        assert_eq!(a.frame_index, 0);
        assert!(a.playing);
    }

    #[test]
    fn test_play_same_clip_keeps_progress() {
        let mut a = Animation::new("signaling");
        a.play("signaling");
        a.frame_index = 1;
        a.play("signaling");
        assert_eq!(a.frame_index, 1);
    }

    #[test]
    fn test_stop_rewinds() {
        let mut a = Animation::new("ringing");
        a.play("ringing");
        a.frame_index = 1;
        a.elapsed_time = 0.1;
        a.stop();
        assert!(!a.playing);
        assert!(a.rewind);
        assert_eq!(a.frame_index, 0);
    }
}
