//! Per-frame keyboard and mouse input resource.
//!
//! Captures the subset of hardware state the simulator cares about: the
//! shortcut keys that mirror the on-screen buttons, and the left mouse button
//! with the pointer position used for hit-testing buttons.
use bevy_ecs::prelude::*;
use raylib::prelude::*;

#[derive(Debug, Clone, Copy)]
/// Boolean key state with an associated keyboard binding.
pub struct BoolState {
    /// Whether the key is currently held.
    pub active: bool,
    /// Whether the key was pressed this frame.
    pub just_pressed: bool,
    /// Whether the key was released this frame.
    pub just_released: bool,
    pub key_binding: KeyboardKey,
}

impl BoolState {
    pub fn bound_to(key_binding: KeyboardKey) -> Self {
        Self {
            key_binding,
            ..Self::default()
        }
    }

    /// Store this frame's readings.
    pub fn update(&mut self, down: bool, pressed: bool, released: bool) {
        self.active = down;
        self.just_pressed = pressed;
        self.just_released = released;
    }
}

impl Default for BoolState {
    fn default() -> Self {
        Self {
            active: false,
            just_pressed: false,
            just_released: false,
            key_binding: KeyboardKey::KEY_NULL,
        }
    }
}

/// Left mouse button and pointer position in screen pixels.
#[derive(Debug, Clone, Copy)]
pub struct PointerState {
    pub position: Vector2,
    pub active: bool,
    pub just_pressed: bool,
    pub just_released: bool,
}

impl Default for PointerState {
    fn default() -> Self {
        Self {
            position: Vector2::zero(),
            active: false,
            just_pressed: false,
            just_released: false,
        }
    }
}

/// Resource capturing the per-frame input relevant to the simulator.
#[derive(Resource, Debug, Clone)]
pub struct InputState {
    pub action_reaction: BoolState,
    pub action_start: BoolState,
    pub action_pause: BoolState,
    pub action_reset: BoolState,
    pub action_back: BoolState,
    pub mode_debug: BoolState,
    pub pointer: PointerState,
}

impl Default for InputState {
    fn default() -> Self {
        Self {
            action_reaction: BoolState::bound_to(KeyboardKey::KEY_SPACE),
            action_start: BoolState::bound_to(KeyboardKey::KEY_ENTER),
            action_pause: BoolState::bound_to(KeyboardKey::KEY_P),
            action_reset: BoolState::bound_to(KeyboardKey::KEY_R),
            action_back: BoolState::bound_to(KeyboardKey::KEY_ESCAPE),
            mode_debug: BoolState::bound_to(KeyboardKey::KEY_F11),
            pointer: PointerState::default(),
        }
    }
}
