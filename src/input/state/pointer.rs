use crate::draw::{Group, Point};
use crate::input::events::MouseButton;
use log::debug;

use super::{CanvasState, DrawingState};

impl CanvasState {
    /// Processes a pointer button press.
    ///
    /// Raw coordinates are clamped onto the canvas before they touch the
    /// state machine. Only the left button places points; a press while Idle
    /// starts a new group, a press while Drawing extends it (and closes it
    /// unless Shift is held).
    pub fn on_pointer_press(&mut self, button: MouseButton, raw_x: i32, raw_y: i32) {
        if button != MouseButton::Left {
            return;
        }

        let point = Point::clamped(raw_x, raw_y);
        self.pointer = Some(point);
        self.begin_or_continue(point, self.modifiers.shift);
    }

    /// Processes pointer motion.
    ///
    /// Tracks the clamped position so the renderer can draw the dashed
    /// preview segment from the last committed point; only forces a redraw
    /// while a group is being captured.
    pub fn on_pointer_motion(&mut self, raw_x: i32, raw_y: i32) {
        self.pointer = Some(Point::clamped(raw_x, raw_y));
        if self.is_drawing() {
            self.needs_redraw = true;
        }
    }

    /// Places a point: starts a new group while Idle, extends the current
    /// one while Drawing.
    ///
    /// Starting a group pushes an undo snapshot first, so a later undo
    /// reverts to the state before the group began. While Drawing, the group
    /// is finalized immediately unless `continue_held` is set - the first
    /// point of a group never closes it, whatever the modifier state.
    pub fn begin_or_continue(&mut self, point: Point, continue_held: bool) {
        match &mut self.state {
            DrawingState::Idle => {
                self.snapshot_history();
                self.state = DrawingState::Drawing {
                    group: Group::new(point),
                };
                debug!("started group at {},{}", point.x, point.y);
            }
            DrawingState::Drawing { group } => {
                group.push(point);
                if !continue_held {
                    self.finalize_group();
                }
            }
        }
        self.needs_redraw = true;
    }

    /// Commits the in-progress group and returns to Idle.
    ///
    /// Groups with fewer than two points are discarded silently: a single
    /// point draws no line and is not worth recording. No-op while Idle.
    pub(super) fn finalize_group(&mut self) {
        let state = std::mem::replace(&mut self.state, DrawingState::Idle);
        if let DrawingState::Drawing { group } = state {
            if group.is_drawable() {
                debug!("finalized group with {} points", group.len());
                self.groups.push(group);
            } else {
                debug!("discarded {}-point group", group.len());
            }
        }
    }
}
