// SPDX-License-Identifier: MPL-2.0
//! Drag state management
//!
//! Handles grab-and-drag interaction state for panning a zoomed image.
//! Shared by mouse dragging and single-touch panning.

use iced::{Point, Vector};

/// Manages grab-and-drag state
#[derive(Debug, Clone, Default)]
pub struct DragState {
    /// Whether a drag operation is currently active
    pub is_dragging: bool,

    /// Position where the drag started
    pub start_position: Option<Point>,

    /// Pan offset when the drag started
    pub start_pan: Option<Vector>,
}

impl DragState {
    /// Starts a drag operation
    pub fn start(&mut self, position: Point, pan: Vector) {
        self.is_dragging = true;
        self.start_position = Some(position);
        self.start_pan = Some(pan);
    }

    /// Stops the drag operation
    pub fn stop(&mut self) {
        self.is_dragging = false;
        self.start_position = None;
        self.start_pan = None;
    }

    /// Calculates the unclamped pan for the current pointer position.
    ///
    /// Equivalent to `current - (start - start_pan)`: the pointer keeps the
    /// same relation to the image it had when the drag began, so resuming a
    /// drag never jumps.
    #[must_use]
    pub fn calculate_pan(&self, current_position: Point) -> Option<Vector> {
        if !self.is_dragging {
            return None;
        }

        let start_pos = self.start_position?;
        let start_pan = self.start_pan?;

        Some(start_pan + (current_position - start_pos))
    }

    /// Straight-line distance between the drag start and `current_position`.
    #[must_use]
    pub fn travel(&self, current_position: Point) -> Option<f32> {
        self.start_position
            .map(|start| start.distance(current_position))
    }
}
