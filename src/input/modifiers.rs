//! Keyboard modifier state tracking.

/// Keyboard modifier state.
///
/// Shift doubles as both the continue modifier (a shift-click extends the
/// current group instead of closing it) and the close modifier (Shift+Return
/// loops the polyline back to its first point).
#[derive(Debug, Clone, Copy, Default)]
pub struct Modifiers {
    /// Shift key pressed
    pub shift: bool,
}

impl Modifiers {
    /// Creates a new Modifiers instance with all keys released.
    pub fn new() -> Self {
        Self { shift: false }
    }
}
