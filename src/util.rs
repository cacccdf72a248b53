//! Canvas geometry constants and coordinate normalization.
//!
//! Raw pointer coordinates arrive from whatever shell hosts the canvas and
//! may fall outside the drawable area; everything is clamped here before it
//! reaches the state machine.

/// Width and height of the canvas in pixels (the coordinate space is square).
pub const CANVAS_SIZE: i32 = 256;

/// Largest valid coordinate on either axis.
pub const CANVAS_MAX: i32 = CANVAS_SIZE - 1;

/// Clamps a raw coordinate onto the canvas.
///
/// Total over all integers; values below 0 map to 0 and values above
/// [`CANVAS_MAX`] map to [`CANVAS_MAX`].
pub fn clamp_coord(raw: i32) -> i32 {
    raw.clamp(0, CANVAS_MAX)
}
