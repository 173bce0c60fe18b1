//! Input sources
//!
//! The run loop asks an `InputSource` for two things each frame: the
//! edge-triggered commands, then the steering intent for the (possibly new)
//! run.

use std::collections::HashSet;

use crate::sim::{DrillState, Orientation};

/// Discrete commands, true only on the frame the key went down
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Commands {
    /// Swap horizontal/vertical drilling (starts a new run)
    pub toggle_mode: bool,
    /// Start a new run in the current mode
    pub restart: bool,
}

/// Anything that can drive the drill
pub trait InputSource {
    /// Commands issued since the last call. Consumes the edges.
    fn commands(&mut self) -> Commands;

    /// Steering intent in [-1, 1] for the current run
    fn steer(&self, state: &DrillState) -> f64;
}

/// Keys the game listens to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    ArrowUp,
    ArrowDown,
    ArrowLeft,
    ArrowRight,
    /// Toggle mode
    T,
    /// Restart
    R,
}

impl Key {
    /// Map a DOM `KeyboardEvent.code`
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "ArrowUp" => Some(Key::ArrowUp),
            "ArrowDown" => Some(Key::ArrowDown),
            "ArrowLeft" => Some(Key::ArrowLeft),
            "ArrowRight" => Some(Key::ArrowRight),
            "KeyT" => Some(Key::T),
            "KeyR" => Some(Key::R),
            _ => None,
        }
    }
}

/// Held keys plus keys pressed since the last frame
#[derive(Debug, Clone, Default)]
pub struct KeyboardState {
    pressed: HashSet<Key>,
    just_pressed: HashSet<Key>,
}

impl KeyboardState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Key went down. Auto-repeat of a held key is not a new edge.
    pub fn key_down(&mut self, key: Key) {
        if self.pressed.insert(key) {
            self.just_pressed.insert(key);
        }
    }

    pub fn key_up(&mut self, key: Key) {
        self.pressed.remove(&key);
    }

    pub fn is_pressed(&self, key: Key) -> bool {
        self.pressed.contains(&key)
    }

    pub fn was_just_pressed(&self, key: Key) -> bool {
        self.just_pressed.contains(&key)
    }

    pub fn clear_just_pressed(&mut self) {
        self.just_pressed.clear();
    }

    /// Sum of the two steering keys for the mode
    pub fn steer_input(&self, mode: Orientation) -> f64 {
        let (negative, positive) = match mode {
            Orientation::Horizontal => (Key::ArrowDown, Key::ArrowUp),
            Orientation::Vertical => (Key::ArrowLeft, Key::ArrowRight),
        };

        let mut steer = 0.0;
        if self.is_pressed(positive) {
            steer += 1.0;
        }
        if self.is_pressed(negative) {
            steer -= 1.0;
        }
        steer
    }
}

impl InputSource for KeyboardState {
    fn commands(&mut self) -> Commands {
        let commands = Commands {
            toggle_mode: self.was_just_pressed(Key::T),
            restart: self.was_just_pressed(Key::R),
        };
        self.clear_just_pressed();
        commands
    }

    fn steer(&self, state: &DrillState) -> f64 {
        self.steer_input(state.mode)
    }
}
