use crate::draw::palette::{self, PaletteError};
use crate::input::events::Key;
use log::debug;

use super::{CanvasState, DrawingState};

impl CanvasState {
    /// Processes a key press event.
    ///
    /// Shift is tracked as modifier state; Return finishes the in-progress
    /// group, looping it back to its first point when Shift is held.
    pub fn on_key_press(&mut self, key: Key) {
        match key {
            Key::Shift => self.modifiers.shift = true,
            Key::Return => self.close_group(self.modifiers.shift),
            Key::Unknown => {}
        }
    }

    /// Processes a key release event.
    ///
    /// Only tracks modifier releases.
    pub fn on_key_release(&mut self, key: Key) {
        if key == Key::Shift {
            self.modifiers.shift = false;
        }
    }

    /// Explicitly finishes the in-progress group.
    ///
    /// With `close_held`, a copy of the group's first point is appended
    /// first so the polyline closes into a loop. No-op while Idle.
    pub fn close_group(&mut self, close_held: bool) {
        if let DrawingState::Drawing { group } = &mut self.state {
            if close_held {
                group.close_loop();
            }
            self.finalize_group();
            self.needs_redraw = true;
        }
    }

    /// Restores the most recent history snapshot.
    ///
    /// Silent no-op when the history is empty. Only well-defined while Idle:
    /// invoked mid-draw it replaces `groups` but leaves the in-progress
    /// group alone, and whichever finalizes last wins.
    pub fn undo(&mut self) {
        if let Some(snapshot) = self.history.pop() {
            debug!("undo to snapshot with {} groups", snapshot.len());
            self.groups = snapshot;
            self.needs_redraw = true;
        }
    }

    /// Empties the drawing, pushing the current groups as an undo snapshot.
    ///
    /// Any in-progress group is abandoned without finalizing, even if it had
    /// enough points to commit.
    pub fn clear(&mut self) {
        self.snapshot_history();
        self.groups = Vec::new();
        self.state = DrawingState::Idle;
        self.needs_redraw = true;
    }

    /// Sets the active stroke (and export label) color by palette index.
    ///
    /// An out-of-range index fails and leaves the previous color unchanged.
    pub fn set_active_color(&mut self, index: usize) -> Result<(), PaletteError> {
        palette::entry(index)?;
        self.active_color_index = index;
        self.needs_redraw = true;
        Ok(())
    }

    /// Sets the background to the resolved color of a palette entry.
    ///
    /// Stroke and background may be the same color; no contrast rule is
    /// enforced.
    pub fn set_background_color(&mut self, index: usize) -> Result<(), PaletteError> {
        self.background = palette::entry(index)?.rgb();
        self.needs_redraw = true;
        Ok(())
    }
}
