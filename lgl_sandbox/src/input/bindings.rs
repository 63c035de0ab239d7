/// Camera input bindings.
///
/// A controller owns a list of [`InputBinding`]s. The list is the source of
/// truth; [`BindingMap`] is the lookup form rebuilt whenever it changes.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use super::event::{Key, MouseButton};

/// What a camera controller can be asked to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CameraAction {
    MoveForward,
    MoveBackward,
    MoveLeft,
    MoveRight,
    MoveUp,
    MoveDown,
    RotateCamera,
    /// Scroll wheel: both directions
    Zoom,
}

impl CameraAction {
    /// Number of actions (size of per-action state arrays)
    pub const COUNT: usize = 8;

    /// Dense index for per-action state arrays
    pub fn index(self) -> usize {
        self as usize
    }
}

/// Physical input that triggers an action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InputSource {
    Key(Key),
    MouseButton(MouseButton),
    MouseMovement,
    ScrollWheel,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputBinding {
    pub source: InputSource,
    pub action: CameraAction,
}

impl InputBinding {
    pub fn new(source: InputSource, action: CameraAction) -> Self {
        Self { source, action }
    }
}

/// Lookup tables derived from a binding list.
///
/// When two bindings share a source, the later one wins.
#[derive(Debug, Clone, Default)]
pub struct BindingMap {
    keys: FxHashMap<Key, CameraAction>,
    mouse_buttons: FxHashMap<MouseButton, CameraAction>,
    mouse_movement: Option<CameraAction>,
    scroll_wheel: Option<CameraAction>,
}

impl BindingMap {
    pub fn from_bindings(bindings: &[InputBinding]) -> Self {
        let mut map = Self::default();
        for binding in bindings {
            match binding.source {
                InputSource::MouseMovement => map.mouse_movement = Some(binding.action),
                InputSource::ScrollWheel => map.scroll_wheel = Some(binding.action),
                InputSource::MouseButton(button) => {
                    map.mouse_buttons.insert(button, binding.action);
                }
                InputSource::Key(Key::Unknown) => {}
                InputSource::Key(key) => {
                    map.keys.insert(key, binding.action);
                }
            }
        }
        map
    }

    pub fn key_action(&self, key: Key) -> Option<CameraAction> {
        self.keys.get(&key).copied()
    }

    pub fn mouse_button_action(&self, button: MouseButton) -> Option<CameraAction> {
        self.mouse_buttons.get(&button).copied()
    }

    pub fn mouse_movement_action(&self) -> Option<CameraAction> {
        self.mouse_movement
    }

    pub fn scroll_action(&self) -> Option<CameraAction> {
        self.scroll_wheel
    }
}

#[cfg(test)]
#[path = "bindings_tests.rs"]
mod tests;
