// SPDX-License-Identifier: MPL-2.0
//! Mouse drag-to-pan sub-component with double-click detection.

use crate::domain::ui::DoubleTapWindow;
use crate::ui::state::DragState;
use iced::{Point, Vector};
use std::time::Instant;

/// Drag sub-component state.
/// Encapsulates `DragState` and adds cursor tracking and double-click detection.
#[derive(Debug, Clone, Default)]
pub struct State {
    /// The underlying drag state.
    pub inner: DragState,
    /// Current cursor position within the viewer.
    pub cursor_position: Option<Point>,
    /// Last click for double-click detection.
    last_click: Option<(Instant, Point)>,
    /// Maximum delay between the clicks of a double-click.
    window: DoubleTapWindow,
    /// Maximum distance between the clicks of a double-click.
    radius: f32,
}

/// Messages for the drag sub-component.
#[derive(Debug, Clone, Copy)]
pub enum Message {
    /// Left button pressed. A drag only starts when `can_pan` is set.
    Pressed {
        position: Point,
        pan: Vector,
        can_pan: bool,
        at: Instant,
    },
    /// Cursor moved (tracks position, updates an active drag).
    Moved(Point),
    /// Left button released.
    Released,
    /// Cursor left the viewer.
    Left,
}

/// Effects produced by drag operations.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Effect {
    /// No effect.
    None,
    /// Double-click detected - orchestrator should toggle zoom.
    DoubleClick,
    /// New unclamped pan offset to apply.
    SetPan(Vector),
}

impl State {
    /// Creates a drag component with the given double-click tolerances.
    #[must_use]
    pub fn new(window: DoubleTapWindow, radius: f32) -> Self {
        Self {
            window,
            radius,
            ..Self::default()
        }
    }

    /// Handle a drag message.
    ///
    /// Note: Takes `Message` by value following Iced's `update(message: Message)` pattern.
    #[allow(clippy::needless_pass_by_value)]
    pub fn handle(&mut self, msg: Message) -> Effect {
        match msg {
            Message::Pressed {
                position,
                pan,
                can_pan,
                at,
            } => {
                self.cursor_position = Some(position);

                let is_double_click = self.last_click.is_some_and(|(time, point)| {
                    at.saturating_duration_since(time) <= self.window.as_duration()
                        && point.distance(position) <= self.radius
                });

                if is_double_click {
                    self.last_click = None; // Reset to avoid triple-click
                    self.inner.stop();
                    return Effect::DoubleClick;
                }

                self.last_click = Some((at, position));
                if can_pan {
                    self.inner.start(position, pan);
                }
                Effect::None
            }
            Message::Moved(position) => {
                self.cursor_position = Some(position);
                self.inner
                    .calculate_pan(position)
                    .map_or(Effect::None, Effect::SetPan)
            }
            Message::Released => {
                self.inner.stop();
                Effect::None
            }
            Message::Left => {
                self.cursor_position = None;
                self.inner.stop();
                Effect::None
            }
        }
    }

    /// Ends any drag and forgets click history (mode or image change).
    pub fn release(&mut self) {
        self.inner.stop();
        self.last_click = None;
    }

    /// Check if a drag is currently in progress.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.inner.is_dragging
    }

    /// Get the current cursor position (if known).
    #[must_use]
    pub fn cursor_position(&self) -> Option<Point> {
        self.cursor_position
    }
}
