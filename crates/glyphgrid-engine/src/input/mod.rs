//! Input subsystem.
//!
//! Public API is platform-agnostic. Hosts translate their window-system
//! events into `InputEvent`s.

mod types;

pub use types::{
    InputEvent,
    Key,
    KeyState,
    MouseButton,
    MouseButtonState,
    PointerSignal,
};
