//! Input handling and the point-group capture state machine.
//!
//! This module translates shell pointer and keyboard events into canvas
//! operations. It owns the drawing session state: finalized groups, the
//! group under construction, active colors, and the undo history.

pub mod events;
pub mod modifiers;
pub mod state;

// Re-export commonly used types at module level
pub use events::{Key, MouseButton};
pub use state::{CanvasState, DrawingState};

// Re-export for public API (unused internally but part of public interface)
#[allow(unused_imports)]
pub use modifiers::Modifiers;
