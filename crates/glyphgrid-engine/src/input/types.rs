use std::fmt;

use crate::coords::Vec2;

/// Keyboard key identifier.
///
/// Printable keys arrive as `Char`; the rest are the editing and navigation
/// keys layouts react to. Anything else maps to `Unknown` with a stable
/// platform code.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Key {
    Char(char),

    Escape,
    Enter,
    Tab,
    Backspace,
    Delete,

    ArrowUp,
    ArrowDown,
    ArrowLeft,
    ArrowRight,

    /// Platform-dependent key not represented here.
    Unknown(u32),
}

impl Key {
    /// The character typed by this key when it is printable ASCII.
    pub fn printable(self) -> Option<char> {
        match self {
            Key::Char(c) if (' '..='~').contains(&c) => Some(c),
            _ => None,
        }
    }
}

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum KeyState {
    Pressed,
    Released,
}

/// Mouse button identifier.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
    Other(u16),
}

impl MouseButton {
    /// Buttons that select entities.
    #[inline]
    pub fn selects(self) -> bool {
        matches!(self, MouseButton::Left | MouseButton::Right)
    }
}

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum MouseButtonState {
    Pressed,
    Released,
}

/// Pointer button transition at a position in pixels.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct PointerSignal {
    pub button: MouseButton,
    pub state: MouseButtonState,
    pub pos: Vec2,
}

impl PointerSignal {
    pub fn press(button: MouseButton, pos: Vec2) -> Self {
        Self { button, state: MouseButtonState::Pressed, pos }
    }

    pub fn release(button: MouseButton, pos: Vec2) -> Self {
        Self { button, state: MouseButtonState::Released, pos }
    }
}

/// Platform-agnostic input events a host feeds to a layout session.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum InputEvent {
    Key { key: Key, state: KeyState },
    Pointer(PointerSignal),
    /// Pointer left the window surface.
    PointerLeft,
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Key::Char(c) => write!(f, "{c:?}"),
            other => write!(f, "{:?}", other),
        }
    }
}
