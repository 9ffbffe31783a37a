//! High-level game state resources.
//!
//! [`GameState`] is the authoritative lifecycle state of the application and
//! [`NextGameState`] holds a transition requested by any system. The
//! `check_pending_state` system turns a pending request into a
//! [`GameStateChangedEvent`](crate::events::gamestate::GameStateChangedEvent),
//! whose observer runs the exit and enter hooks registered in the
//! [`SystemsStore`](crate::resources::systemsstore::SystemsStore).

use bevy_ecs::prelude::Resource;

/// Discrete lifecycle states.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum GameStates {
    #[default]
    None,
    /// Loading textures, sounds and the track.
    Setup,
    /// A scene is live. Re-entering this state resets the scene.
    Playing,
    Quitting,
}

impl GameStates {
    /// Name of the system run when this state is entered.
    pub fn enter_hook(&self) -> Option<&'static str> {
        match self {
            GameStates::None => None,
            GameStates::Setup => Some("setup"),
            GameStates::Playing => Some("enter_play"),
            GameStates::Quitting => Some("quit_game"),
        }
    }

    /// Name of the system run when this state is left.
    pub fn exit_hook(&self) -> Option<&'static str> {
        match self {
            GameStates::Playing => Some("clean_scene"),
            _ => None,
        }
    }
}

/// Representation of a requested next state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum NextGameStates {
    #[default]
    Unchanged,
    Pending(GameStates),
}

/// Authoritative current game state.
#[derive(Resource, Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct GameState {
    current: GameStates,
}

impl GameState {
    pub fn new() -> Self {
        GameState {
            current: GameStates::None,
        }
    }
    /// Read-only access to the current state.
    pub fn get(&self) -> &GameStates {
        &self.current
    }
    /// Update the current state immediately, without running any hook.
    pub fn set(&mut self, state: GameStates) {
        self.current = state;
    }
}

/// Intent to change to a new game state.
#[derive(Resource, Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct NextGameState {
    next: NextGameStates,
}

impl NextGameState {
    pub fn new() -> Self {
        NextGameState {
            next: NextGameStates::Unchanged,
        }
    }

    pub fn get(&self) -> &NextGameStates {
        &self.next
    }

    /// Request a transition to `next`. Requesting the current state is valid
    /// and re-runs its exit and enter hooks.
    pub fn set(&mut self, next: GameStates) {
        self.next = NextGameStates::Pending(next);
    }

    pub fn reset(&mut self) {
        self.next = NextGameStates::Unchanged;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_next_state_set_and_reset() {
        let mut next = NextGameState::new();
        assert_eq!(*next.get(), NextGameStates::Unchanged);
        next.set(GameStates::Playing);
        assert_eq!(*next.get(), NextGameStates::Pending(GameStates::Playing));
        next.reset();
        assert_eq!(*next.get(), NextGameStates::Unchanged);
    }

    #[test]
    fn test_playing_hooks() {
        assert_eq!(GameStates::Playing.enter_hook(), Some("enter_play"));
        assert_eq!(GameStates::Playing.exit_hook(), Some("clean_scene"));
        assert_eq!(GameStates::Setup.exit_hook(), None);
        assert_eq!(GameStates::None.enter_hook(), None);
    }
}
