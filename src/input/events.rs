//! Generic input event types for cross-shell compatibility.

/// Generic key representation.
///
/// UI shells map their native key codes to these values before forwarding
/// them to the canvas state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    /// Return/Enter key (finish the in-progress group)
    Return,
    /// Shift modifier (continue modifier on click, close modifier on Return)
    Shift,
    /// Unmapped or unrecognized key
    Unknown,
}

/// Mouse button identification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MouseButton {
    /// Left mouse button (places points)
    Left,
    /// Right mouse button (currently unused)
    Right,
    /// Middle mouse button (currently unused)
    Middle,
}
