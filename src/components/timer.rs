//! Countdown timer component.
//!
//! A [`Timer`] accumulates scaled frame time and, when it reaches `duration`,
//! triggers a [`TimerEvent`](crate::events::timer::TimerEvent) carrying its
//! `signal`. Timers either fire once or repeat a fixed number of extra times;
//! the reaction window is a repeating timer that fires once per check.
//!
//! Pausing the simulation pauses every timer; resuming picks up exactly where
//! it left off.

use bevy_ecs::prelude::Component;

#[derive(Component, Clone, Debug)]
pub struct Timer {
    /// Seconds between firings.
    pub duration: f32,
    /// Seconds accumulated since the last firing.
    pub elapsed: f32,
    /// Signal name carried by the emitted event.
    pub signal: String,
    /// Extra firings after the next one.
    pub repeats_left: u32,
    pub paused: bool,
}

/// What happened to a timer after time was added to it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerTick {
    Pending,
    /// Fired and will fire again.
    Fired,
    /// Fired for the last time; the timer should be removed.
    Finished,
}

impl Timer {
    /// Fires once after `duration` seconds.
    pub fn once(duration: f32, signal: impl Into<String>) -> Self {
        Self::repeating(duration, 0, signal)
    }

    /// Fires after `duration` seconds and then `repeats` more times, for
    /// `repeats + 1` firings in total.
    pub fn repeating(duration: f32, repeats: u32, signal: impl Into<String>) -> Self {
        Timer {
            duration,
            elapsed: 0.0,
            signal: signal.into(),
            repeats_left: repeats,
            paused: false,
        }
    }

    pub fn pause(&mut self) {
        self.paused = true;
    }

    pub fn resume(&mut self) {
        self.paused = false;
    }

    /// Add `dt` seconds and report whether the timer fired.
    ///
    /// At most one firing is reported per call; surplus time carries over.
    pub fn advance(&mut self, dt: f32) -> TimerTick {
        if self.paused {
            return TimerTick::Pending;
        }
        self.elapsed += dt;
        if self.elapsed < self.duration {
            return TimerTick::Pending;
        }
        self.elapsed -= self.duration;
        if self.repeats_left == 0 {
            return TimerTick::Finished;
        }
        self.repeats_left -= 1;
        TimerTick::Fired
    }
}
