//! Global signal storage resource.
//!
//! The [`WorldSignals`] resource is a world-wide map for cross-system
//! communication: the train speed chosen on the dial, the score, the current
//! description line, and flags such as `quit_game`. UI texts read from it
//! through [`SignalBinding`](crate::components::signalbinding::SignalBinding).

use bevy_ecs::prelude::{Entity, Resource};
use rustc_hash::{FxHashMap, FxHashSet};

/// Global signal storage for cross-system communication.
#[derive(Debug, Clone, Resource, Default)]
pub struct WorldSignals {
    /// Floating-point numeric signals addressed by string keys.
    pub scalars: FxHashMap<String, f32>,
    /// Integer numeric signals addressed by string keys.
    pub integers: FxHashMap<String, i32>,
    /// String signals addressed by string keys.
    pub strings: FxHashMap<String, String>,
    /// Presence-only boolean flags; a key being present means "true".
    pub flags: FxHashSet<String>,
    /// Map of entities of interest for the current scene.
    pub entities: FxHashMap<String, Entity>,
}

impl WorldSignals {
    /// Set a floating-point signal value.
    pub fn set_scalar(&mut self, key: impl Into<String>, value: f32) {
        self.scalars.insert(key.into(), value);
    }
    /// Get a floating-point signal by key.
    pub fn get_scalar(&self, key: &str) -> Option<f32> {
        self.scalars.get(key).copied()
    }
    /// Set an integer signal value.
    pub fn set_integer(&mut self, key: impl Into<String>, value: i32) {
        self.integers.insert(key.into(), value);
    }
    /// Get an integer signal by key.
    pub fn get_integer(&self, key: &str) -> Option<i32> {
        self.integers.get(key).copied()
    }
    /// Add `by` to an integer signal, starting from 0 when missing.
    pub fn increment_integer(&mut self, key: &str, by: i32) -> i32 {
        let value = self.integers.entry(key.to_string()).or_insert(0);
        *value += by;
        *value
    }
    /// Set a string signal value.
    pub fn set_string(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.strings.insert(key.into(), value.into());
    }
    /// Get a string signal by key.
    pub fn get_string(&self, key: &str) -> Option<&String> {
        self.strings.get(key)
    }
    /// Mark a flag as present/true.
    pub fn set_flag(&mut self, key: impl Into<String>) {
        self.flags.insert(key.into());
    }
    /// Whether a flag is set.
    pub fn has_flag(&self, key: &str) -> bool {
        self.flags.contains(key)
    }
    /// Get an entity by key.
    pub fn get_entity(&self, key: &str) -> Option<&Entity> {
        self.entities.get(key)
    }
    /// Set an entity by key.
    pub fn set_entity(&mut self, key: impl Into<String>, entity: Entity) {
        self.entities.insert(key.into(), entity);
    }
    /// Remove an entity by key. Returns the removed entity if it existed.
    pub fn remove_entity(&mut self, key: &str) -> Option<Entity> {
        self.entities.remove(key)
    }
    /// Drop every scene-scoped value, keeping flags.
    pub fn clear_scene(&mut self) {
        self.scalars.clear();
        self.integers.clear();
        self.strings.clear();
        self.entities.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_increment_integer_starts_at_zero() {
        let mut s = WorldSignals::default();
        assert_eq!(s.increment_integer("score", 1), 1);
        assert_eq!(s.increment_integer("score", 1), 2);
        assert_eq!(s.get_integer("score"), Some(2));
    }

    #[test]
    fn test_flags() {
        let mut s = WorldSignals::default();
        s.set_flag("quit_game");
        assert!(s.has_flag("quit_game"));
        assert!(!s.has_flag("debug"));
    }

    #[test]
    fn test_clear_scene_keeps_flags() {
        let mut s = WorldSignals::default();
        s.set_scalar("train_speed", 30.0);
        s.set_string("description", "x");
        s.set_flag("quit_game");
        s.clear_scene();
        assert!(s.get_scalar("train_speed").is_none());
        assert!(s.get_string("description").is_none());
        assert!(s.has_flag("quit_game"));
    }
}
