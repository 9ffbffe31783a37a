//! Clickable on-screen controls.
//!
//! A [`Button`] is a sprite that reacts to the mouse: it shows an `over`,
//! `out` or `down` frame of its sheet and, when the left button is pressed
//! and released inside its area, triggers a
//! [`ButtonClickedEvent`](crate::events::button::ButtonClickedEvent) with its
//! [`ButtonAction`].
//!
//! Controls whose face reflects a setting (the semaphore, the speed dial)
//! carry a [`FrameCycler`] instead of fixed frames: each click moves them to
//! the next frame and the button shows that frame in every state.

use bevy_ecs::prelude::Component;

/// What a button does when clicked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ButtonAction {
    Start,
    Pause,
    Reset,
    Reaction,
    Semaphore,
    SpeedControl,
}

/// Sheet frames shown for each pointer state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ButtonFrames {
    pub over: usize,
    pub out: usize,
    pub down: usize,
}

impl ButtonFrames {
    pub fn new(over: usize, out: usize, down: usize) -> Self {
        Self { over, out, down }
    }

    /// Same frame for every state.
    pub fn fixed(frame: usize) -> Self {
        Self::new(frame, frame, frame)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PointerState {
    #[default]
    Out,
    Over,
    Down,
}

#[derive(Component, Debug, Clone)]
pub struct Button {
    pub action: ButtonAction,
    pub frames: ButtonFrames,
    pub state: PointerState,
}

impl Button {
    pub fn new(action: ButtonAction, frames: ButtonFrames) -> Self {
        Self {
            action,
            frames,
            state: PointerState::Out,
        }
    }

    /// Sheet frame matching the current pointer state.
    pub fn current_frame(&self) -> usize {
        match self.state {
            PointerState::Out => self.frames.out,
            PointerState::Over => self.frames.over,
            PointerState::Down => self.frames.down,
        }
    }
}

/// Cycles through `count` frames, one step per click.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameCycler {
    pub frame: usize,
    pub count: usize,
}

impl FrameCycler {
    pub fn new(count: usize) -> Self {
        Self {
            frame: 0,
            count: count.max(1),
        }
    }

    /// Advance to the next frame, wrapping to 0, and return it.
    pub fn advance(&mut self) -> usize {
        self.frame = (self.frame + 1) % self.count;
        self.frame
    }
}
