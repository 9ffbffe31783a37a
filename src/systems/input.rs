//! Input systems.
//!
//! [`update_input_state`] reads hardware input from Raylib each frame, writes
//! it into [`InputState`] and triggers [`InputEvent`] for shortcut presses
//! (F11 toggles debug mode via [`SwitchDebugEvent`]).
use bevy_ecs::prelude::*;
use raylib::ffi::{KeyboardKey, MouseButton};

use crate::events::input::{InputAction, InputEvent};
use crate::events::switchdebug::SwitchDebugEvent;
use crate::resources::input::{BoolState, InputState};

/// Poll Raylib for keyboard and mouse input and update the `InputState` resource.
pub fn update_input_state(
    mut input: ResMut<InputState>,
    rl: NonSendMut<raylib::RaylibHandle>,
    mut commands: Commands,
) {
    let read = |state: &mut BoolState| {
        let key: KeyboardKey = state.key_binding;
        state.update(rl.is_key_down(key), rl.is_key_pressed(key), rl.is_key_released(key));
    };

    read(&mut input.action_reaction);
    read(&mut input.action_start);
    read(&mut input.action_pause);
    read(&mut input.action_reset);
    read(&mut input.action_back);
    read(&mut input.mode_debug);

    input.pointer.position = rl.get_mouse_position();
    input.pointer.active = rl.is_mouse_button_down(MouseButton::MOUSE_BUTTON_LEFT);
    input.pointer.just_pressed = rl.is_mouse_button_pressed(MouseButton::MOUSE_BUTTON_LEFT);
    input.pointer.just_released = rl.is_mouse_button_released(MouseButton::MOUSE_BUTTON_LEFT);

    if input.mode_debug.just_pressed {
        commands.trigger(SwitchDebugEvent {});
    }

    for (state, action) in [
        (&input.action_reaction, InputAction::Reaction),
        (&input.action_start, InputAction::Start),
        (&input.action_pause, InputAction::Pause),
        (&input.action_reset, InputAction::Reset),
        (&input.action_back, InputAction::Back),
    ] {
        if state.just_pressed {
            commands.trigger(InputEvent { action });
        }
    }
}
