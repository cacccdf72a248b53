//! Drawing state machine and canvas session state.

mod actions;
mod pointer;

use crate::draw::{Group, Point, Rgb, palette};
use crate::export;
use crate::input::modifiers::Modifiers;

/// Current drawing mode state machine.
///
/// A group under construction lives inside the `Drawing` variant, so the
/// "is drawing" flag and the presence of an in-progress group cannot drift
/// apart.
#[derive(Debug)]
pub enum DrawingState {
    /// Not capturing a group - waiting for the first click
    Idle,
    /// Capturing a group; holds at least one point
    Drawing {
        /// The polyline under construction
        group: Group,
    },
}

/// Main canvas state containing the whole drawing session.
///
/// Owns the finalized groups, the in-progress group (via [`DrawingState`]),
/// the active stroke color, the resolved background color, and the undo
/// history. All mutation goes through the event handlers and operations on
/// this type; rendering shells only read.
pub struct CanvasState {
    /// Finalized groups in draw order. Append-only except for undo/clear,
    /// which replace the whole list.
    groups: Vec<Group>,
    /// Current drawing mode state machine
    state: DrawingState,
    /// Palette index of the current stroke (and export label) color
    active_color_index: usize,
    /// Resolved background color (a value, not a palette index)
    background: Rgb,
    /// Snapshots of `groups`, pushed on every new-group start and clear
    history: Vec<Vec<Group>>,
    /// Current modifier key state
    pub modifiers: Modifiers,
    /// Whether the display needs to be redrawn
    pub needs_redraw: bool,
    /// Last clamped pointer position (for the dashed preview segment)
    pointer: Option<Point>,
}

impl Default for CanvasState {
    fn default() -> Self {
        Self::new()
    }
}

impl CanvasState {
    /// Creates a canvas with the documented defaults: `void` strokes on a
    /// `white` background.
    pub fn new() -> Self {
        Self {
            groups: Vec::new(),
            state: DrawingState::Idle,
            active_color_index: palette::DEFAULT_STROKE_INDEX,
            background: palette::PALETTE[palette::DEFAULT_BACKGROUND_INDEX].rgb(),
            history: Vec::new(),
            modifiers: Modifiers::new(),
            needs_redraw: true,
            pointer: None,
        }
    }

    /// Creates a canvas with explicit initial colors.
    ///
    /// Fails with [`palette::PaletteError::OutOfRange`] if either index is
    /// outside the palette.
    pub fn with_colors(
        stroke_index: usize,
        background_index: usize,
    ) -> Result<Self, palette::PaletteError> {
        let mut canvas = Self::new();
        canvas.set_active_color(stroke_index)?;
        canvas.set_background_color(background_index)?;
        Ok(canvas)
    }

    /// Finalized groups in draw order.
    pub fn groups(&self) -> &[Group] {
        &self.groups
    }

    /// The group under construction, if the user is mid-draw.
    pub fn current_group(&self) -> Option<&Group> {
        match &self.state {
            DrawingState::Drawing { group } => Some(group),
            DrawingState::Idle => None,
        }
    }

    /// Whether a group is currently being captured.
    pub fn is_drawing(&self) -> bool {
        matches!(self.state, DrawingState::Drawing { .. })
    }

    /// Palette index of the active stroke color.
    pub fn active_color_index(&self) -> usize {
        self.active_color_index
    }

    /// Palette entry of the active stroke color.
    pub fn active_color(&self) -> &'static palette::PaletteEntry {
        // The index is validated on every write, so this cannot be out of
        // range here.
        &palette::PALETTE[self.active_color_index]
    }

    /// Resolved background color for the renderer's canvas fill.
    pub fn background(&self) -> Rgb {
        self.background
    }

    /// Last clamped pointer position, tracked for the live preview segment.
    pub fn pointer(&self) -> Option<Point> {
        self.pointer
    }

    /// Number of undo snapshots currently held.
    pub fn history_depth(&self) -> usize {
        self.history.len()
    }

    /// Serializes the finalized groups with the active color's name.
    pub fn export(&self) -> String {
        export::export(&self.groups, self.active_color().name)
    }

    fn snapshot_history(&mut self) {
        self.history.push(self.groups.clone());
    }
}
