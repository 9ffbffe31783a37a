//! Pointer handling for on-screen buttons.
use bevy_ecs::prelude::*;
use raylib::prelude::Vector2;

use crate::components::button::{Button, FrameCycler, PointerState};
use crate::components::mapposition::MapPosition;
use crate::components::scale::Scale;
use crate::components::sprite::Sprite;
use crate::events::button::ButtonClickedEvent;
use crate::resources::input::InputState;

/// Track hover and press state of every button and trigger
/// [`ButtonClickedEvent`] when a press that started on a button is released
/// over it. Buttons without a [`FrameCycler`] show the frame matching their
/// pointer state.
pub fn button_system(
    mut query: Query<(
        Entity,
        &mut Button,
        &mut Sprite,
        &MapPosition,
        Option<&Scale>,
        Option<&FrameCycler>,
    )>,
    input: Res<InputState>,
    mut commands: Commands,
) {
    let pointer = input.pointer;
    for (entity, mut button, mut sprite, position, scale, cycler) in query.iter_mut() {
        let scale = scale.map_or(Vector2 { x: 1.0, y: 1.0 }, |s| s.scale);
        let inside = sprite.contains_point(position.pos, scale, pointer.position);

        if inside && button.state == PointerState::Down && pointer.just_released {
            commands.trigger(ButtonClickedEvent {
                entity,
                action: button.action,
            });
        }

        let next = match (inside, pointer.active) {
            (false, _) => PointerState::Out,
            (true, true) if pointer.just_pressed || button.state == PointerState::Down => {
                PointerState::Down
            }
            (true, _) => PointerState::Over,
        };
        if next != button.state {
            button.state = next;
        }

        if cycler.is_none() && sprite.frame != button.current_frame() {
            let frame = button.current_frame();
            sprite.set_frame(frame);
        }
    }
}
