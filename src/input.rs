//! Input port
//!
//! The simulation never sees raw key events. A host implements `InputPort`
//! (or feeds a `KeyboardState`) and the tick samples it into a `TickInput`.

use std::collections::HashSet;

/// Named control signals
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    RotateLeft,
    RotateRight,
    Thrust,
    Fire,
}

impl Action {
    pub const ALL: [Action; 4] = [
        Action::RotateLeft,
        Action::RotateRight,
        Action::Thrust,
        Action::Fire,
    ];

    /// Default key names (DOM `KeyboardEvent.key` spelling) bound to this action
    pub fn default_keys(&self) -> &'static [&'static str] {
        match self {
            Action::RotateLeft => &["ArrowLeft", "a"],
            Action::RotateRight => &["ArrowRight", "d"],
            Action::Thrust => &["ArrowUp", "w"],
            Action::Fire => &[" "],
        }
    }
}

/// Anything that can answer "is this control held right now?"
pub trait InputPort {
    fn is_pressed(&self, action: Action) -> bool;
}

/// Held-key tracker with the default bindings
#[derive(Debug, Clone, Default)]
pub struct KeyboardState {
    held: HashSet<String>,
}

impl KeyboardState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn key_down(&mut self, key: &str) {
        self.held.insert(key.to_string());
    }

    pub fn key_up(&mut self, key: &str) {
        self.held.remove(key);
    }

    /// Drop all held keys (e.g. on focus loss)
    pub fn release_all(&mut self) {
        self.held.clear();
    }

    pub fn is_key_held(&self, key: &str) -> bool {
        self.held.contains(key)
    }
}

impl InputPort for KeyboardState {
    fn is_pressed(&self, action: Action) -> bool {
        action.default_keys().iter().any(|k| self.is_key_held(k))
    }
}
