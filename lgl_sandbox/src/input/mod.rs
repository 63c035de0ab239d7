//! Input module — window-agnostic input events and camera bindings.
//!
//! Window backends translate their native events into [`InputEvent`]
//! (see [`translate_window_event`] for winit). Controllers consume only
//! these types.

mod bindings;
mod event;
mod winit_bridge;

pub use bindings::{BindingMap, CameraAction, InputBinding, InputSource};
pub use event::{ButtonState, InputEvent, Key, MouseButton};
pub use winit_bridge::translate_window_event;
