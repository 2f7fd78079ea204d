//! Keyboard input mapping
//!
//! Key events arrive between frames and only touch [`InputState`]; the
//! simulation reads one [`TickInput`] snapshot per step. Keys are tracked by
//! their raw `KeyboardEvent.key` name so two keys bound to the same action
//! can be held and released independently.

use std::collections::HashSet;

use crate::sim::TickInput;

/// Logical game actions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    MoveLeft,
    MoveRight,
    Jump,
    /// Handled directly by the key-down listener, never by the step
    Restart,
}

impl Action {
    /// Keys bound to this action
    pub fn keys(self) -> &'static [&'static str] {
        match self {
            Action::MoveLeft => &["ArrowLeft", "a"],
            Action::MoveRight => &["ArrowRight", "d"],
            Action::Jump => &[" ", "ArrowUp", "w"],
            Action::Restart => &["r", "R"],
        }
    }

    /// Map a key name to its action, if bound
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "ArrowLeft" | "a" => Some(Action::MoveLeft),
            "ArrowRight" | "d" => Some(Action::MoveRight),
            " " | "ArrowUp" | "w" => Some(Action::Jump),
            "r" | "R" => Some(Action::Restart),
            _ => None,
        }
    }
}

/// Whether the browser's default handling (page scroll) should be blocked for `key`
pub fn suppresses_default(key: &str) -> bool {
    matches!(
        key,
        "ArrowUp" | "ArrowDown" | "ArrowLeft" | "ArrowRight" | " "
    )
}

/// Currently held keys
#[derive(Debug, Clone, Default)]
pub struct InputState {
    held: HashSet<String>,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn key_down(&mut self, key: &str) {
        if !self.held.contains(key) {
            self.held.insert(key.to_owned());
        }
    }

    pub fn key_up(&mut self, key: &str) {
        self.held.remove(key);
    }

    /// Release everything (e.g. when the window loses focus and key-ups go missing)
    pub fn release_all(&mut self) {
        self.held.clear();
    }

    pub fn is_key_held(&self, key: &str) -> bool {
        self.held.contains(key)
    }

    /// True while any key bound to `action` is held
    pub fn is_held(&self, action: Action) -> bool {
        action.keys().iter().any(|k| self.held.contains(*k))
    }

    /// Freeze the held actions for one simulation step
    pub fn snapshot(&self) -> TickInput {
        TickInput {
            move_left: self.is_held(Action::MoveLeft),
            move_right: self.is_held(Action::MoveRight),
            jump: self.is_held(Action::Jump),
        }
    }
}
