//! Point and polyline group containers.

use crate::util;

/// A single canvas coordinate.
///
/// Both axes are clamped to the canvas (`0..=255`) at construction time via
/// [`Point::clamped`]; a point is never mutated once recorded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    /// Creates a point from coordinates already known to be on the canvas.
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Creates a point from raw pointer coordinates, clamping each axis onto
    /// the canvas. Total over all integer inputs.
    pub fn clamped(raw_x: i32, raw_y: i32) -> Self {
        Self {
            x: util::clamp_coord(raw_x),
            y: util::clamp_coord(raw_y),
        }
    }
}

/// An ordered run of points forming one polyline.
///
/// Insertion order defines vertex order. A group is built up point by point
/// while the user is drawing and becomes immutable once the canvas commits it
/// to the finalized list; groups with fewer than two points are never
/// committed (a single point draws nothing).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Group {
    points: Vec<Point>,
}

impl Group {
    /// Starts a new group from its first point.
    pub fn new(first: Point) -> Self {
        Self {
            points: vec![first],
        }
    }

    /// Appends a vertex to the polyline.
    pub fn push(&mut self, point: Point) {
        self.points.push(point);
    }

    /// Appends a copy of the first vertex, closing the polyline into a loop.
    ///
    /// No-op on an empty group.
    pub fn close_loop(&mut self) {
        if let Some(first) = self.points.first().copied() {
            self.points.push(first);
        }
    }

    /// Number of vertices in the group.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Whether the group describes at least one visible line segment.
    pub fn is_drawable(&self) -> bool {
        self.points.len() >= 2
    }

    /// Vertices in insertion order.
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// The most recently added vertex, if any.
    pub fn last(&self) -> Option<Point> {
        self.points.last().copied()
    }
}
