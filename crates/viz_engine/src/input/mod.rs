//! Input state and camera controllers
//!
//! The windowing collaborator translates its native events into
//! [`AppEvent`](crate::AppEvent)s; [`InputState`] folds those into
//! queryable key/mouse state, and the controllers in [`controllers`] turn
//! state and events into camera motion.

pub mod controllers;

use crate::application::AppEvent;
use std::collections::HashSet;

pub use controllers::{KeyboardCameraController, ViewerController};

/// Key codes understood by the built-in controllers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyCode {
    /// W key
    W,
    /// A key
    A,
    /// S key
    S,
    /// D key
    D,
    /// Q key
    Q,
    /// E key
    E,
    /// R key
    R,
    /// Space key
    Space,
    /// Escape key
    Escape,
}

/// Mouse buttons
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    /// Left mouse button
    Left,
    /// Right mouse button
    Right,
    /// Middle mouse button
    Middle,
}

/// Folded key/mouse state, updated from application events
#[derive(Debug, Default)]
pub struct InputState {
    pressed_keys: HashSet<KeyCode>,
    pressed_buttons: HashSet<MouseButton>,
    mouse_position: (f64, f64),
}

impl InputState {
    /// Create an empty input state
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one application event into the state
    pub fn apply(&mut self, event: &AppEvent) {
        match *event {
            AppEvent::KeyInput { key, pressed } => {
                if pressed {
                    self.pressed_keys.insert(key);
                } else {
                    self.pressed_keys.remove(&key);
                }
            }
            AppEvent::MouseButton { button, pressed } => {
                if pressed {
                    self.pressed_buttons.insert(button);
                } else {
                    self.pressed_buttons.remove(&button);
                }
            }
            AppEvent::MouseMoved { x, y } => {
                self.mouse_position = (x, y);
            }
            _ => {}
        }
    }

    /// Whether `key` is currently held
    pub fn is_key_down(&self, key: KeyCode) -> bool {
        self.pressed_keys.contains(&key)
    }

    /// Whether `button` is currently held
    pub fn is_button_down(&self, button: MouseButton) -> bool {
        self.pressed_buttons.contains(&button)
    }

    /// Last seen mouse position
    pub fn mouse_position(&self) -> (f64, f64) {
        self.mouse_position
    }
}
