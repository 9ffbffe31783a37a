//! Game state transition event and observer.
//!
//! Systems request a change of
//! [`GameStates`](crate::resources::gamestate::GameStates) by updating
//! [`NextGameState`].
//! Triggering a [`GameStateChangedEvent`] then makes
//! [`observe_gamestate_change_event`] apply the transition to [`GameState`]
//! and run the exit hook of the old state followed by the enter hook of the
//! new one, both looked up in [`SystemsStore`].
use crate::resources::gamestate::NextGameStates::{Pending, Unchanged};
use crate::resources::gamestate::{GameState, NextGameState};
use crate::resources::systemsstore::SystemsStore;
use bevy_ecs::observer::On;
use bevy_ecs::prelude::*;
use log::{debug, info, warn};

/// Event used to indicate that a pending game state transition should be
/// applied.
#[derive(Event, Debug, Clone, Copy)]
pub struct GameStateChangedEvent {}

/// Observer that applies a pending game state transition.
///
/// Requesting the state the game is already in is a full restart of that
/// state: `Playing -> Playing` cleans the scene and spawns it again.
pub fn observe_gamestate_change_event(
    _trigger: On<GameStateChangedEvent>,
    mut commands: Commands,
    mut next_game_state: Option<ResMut<NextGameState>>,
    mut game_state: Option<ResMut<GameState>>,
    systems_store: Res<SystemsStore>,
) {
    debug!("GameStateChangedEvent triggered");

    let (Some(next_game_state), Some(game_state)) =
        (next_game_state.as_deref_mut(), game_state.as_deref_mut())
    else {
        warn!(
            "Game state resources missing. next_state: {:?}, game_state: {:?}",
            next_game_state.is_some(),
            game_state.is_some()
        );
        return;
    };

    match *next_game_state.get() {
        Pending(new_state) => {
            let old_state = *game_state.get();
            info!("Transitioning from {:?} to {:?}", old_state, new_state);
            game_state.set(new_state);
            next_game_state.reset();
            run_hook(old_state.exit_hook(), &mut commands, &systems_store);
            run_hook(new_state.enter_hook(), &mut commands, &systems_store);
        }
        Unchanged => debug!("No state change pending."),
    }
}

fn run_hook(hook: Option<&str>, commands: &mut Commands, systems_store: &SystemsStore) {
    let Some(name) = hook else {
        return;
    };
    match systems_store.get(name) {
        Some(id) => {
            debug!("Running state hook '{}'", name);
            commands.run_system(*id);
        }
        None => warn!("State hook '{}' not registered in SystemsStore", name),
    }
}
