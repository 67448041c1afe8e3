// SPDX-License-Identifier: MPL-2.0
//! Touch gesture disambiguation.
//!
//! Raw finger events are classified into exactly one active gesture at a time:
//!
//! - two or more fingers in fullscreen: **pinch** (zoom relative to the
//!   finger distance at pinch start)
//! - one finger while zoomed in fullscreen: **pan**
//! - one finger otherwise: a pending **swipe**, which commits to an axis once
//!   either delta exceeds the swipe threshold
//!
//! Deltas are measured as `current - start`. A committed horizontal swipe with
//! a positive delta means the finger travelled right and maps to
//! [`Direction::Previous`]; a committed vertical swipe with a positive delta
//! means the finger travelled down and dismisses the viewer.
//!
//! Releasing a finger that barely moved records a tap. A second tap inside the
//! double-tap window and radius toggles zoom instead of starting a gesture.

use crate::config::GestureSettings;
use crate::domain::ui::{Direction, Layout, ViewMode, ZoomLevel};
use crate::ui::state::DragState;
use iced::touch::Finger;
use iced::{Point, Vector};
use std::time::Instant;

/// Pinch distances are floored to this value to keep the zoom ratio finite.
const MIN_PINCH_DISTANCE: f32 = 1.0;

/// Snapshot of the viewer the classifier needs to decide on a gesture.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Context {
    pub mode: ViewMode,
    pub layout: Layout,
    pub zoom: ZoomLevel,
    pub pan: Vector,
    pub image_count: usize,
}

/// Messages for the gesture sub-component.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Message {
    FingerPressed {
        id: Finger,
        position: Point,
        at: Instant,
    },
    FingerMoved {
        id: Finger,
        position: Point,
    },
    FingerLifted {
        id: Finger,
        position: Point,
        at: Instant,
    },
    /// The platform cancelled the touch. Never produces an action.
    FingerLost {
        id: Finger,
    },
}

/// What the orchestrator should do in response to a touch event.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Intent {
    None,
    /// Absolute zoom from a pinch.
    SetZoom(ZoomLevel),
    /// Unclamped pan offset from a one-finger drag.
    SetPan(Vector),
    Navigate(Direction),
    Dismiss,
    ToggleZoom,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Axis {
    Horizontal,
    Vertical,
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct TouchPoint {
    id: Finger,
    start: Point,
    current: Point,
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct Tap {
    at: Instant,
    position: Point,
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct Swipe {
    start: Point,
    delta: Vector,
    committed: Option<Axis>,
}

impl Swipe {
    fn new(start: Point) -> Self {
        Self {
            start,
            delta: Vector::ZERO,
            committed: None,
        }
    }

    fn track(&mut self, position: Point, settings: &GestureSettings) {
        self.delta = position - self.start;
        if self.committed.is_none() {
            self.committed = dominant_axis(self.delta, settings);
        }
    }

    /// Offset along the committed axis only.
    fn offset(&self) -> Vector {
        match self.committed {
            Some(Axis::Horizontal) => Vector::new(self.delta.x, 0.0),
            Some(Axis::Vertical) => Vector::new(0.0, self.delta.y),
            None => Vector::ZERO,
        }
    }
}

#[derive(Debug, Clone, Default)]
enum Active {
    #[default]
    Idle,
    Pinch {
        initial_distance: f32,
        initial_zoom: ZoomLevel,
    },
    Pan(DragState),
    Swipe(Swipe),
}

/// Gesture sub-component state.
#[derive(Debug, Clone, Default)]
pub struct State {
    touches: Vec<TouchPoint>,
    active: Active,
    last_tap: Option<Tap>,
    drag_offset: Vector,
    settings: GestureSettings,
}

impl State {
    #[must_use]
    pub fn new(settings: GestureSettings) -> Self {
        Self {
            settings,
            ..Self::default()
        }
    }

    /// Handle a touch message.
    pub fn handle(&mut self, msg: Message, ctx: &Context) -> Intent {
        match msg {
            Message::FingerPressed { id, position, at } => self.finger_pressed(id, position, at, ctx),
            Message::FingerMoved { id, position } => self.finger_moved(id, position),
            Message::FingerLifted { id, position, at } => {
                self.finger_lifted(id, position, at, ctx)
            }
            Message::FingerLost { id } => {
                self.touches.retain(|touch| touch.id != id);
                self.drag_offset = Vector::ZERO;
                if self.touches.is_empty() {
                    self.active = Active::Idle;
                } else {
                    self.restart(ctx);
                }
                Intent::None
            }
        }
    }

    /// Abandons the active gesture and tap history without producing an action.
    /// Fingers still down stay tracked but are ignored until lifted.
    pub fn cancel(&mut self) {
        self.active = Active::Idle;
        self.last_tap = None;
        self.drag_offset = Vector::ZERO;
    }

    /// Forgets everything, including fingers still down.
    pub fn reset(&mut self) {
        self.touches.clear();
        self.cancel();
    }

    /// Visual offset of the current image during a committed swipe.
    #[must_use]
    pub fn drag_offset(&self) -> Vector {
        self.drag_offset
    }

    /// Whether the host should suppress its own handling (scrolling) of touch moves.
    #[must_use]
    pub fn suppresses_default(&self) -> bool {
        match &self.active {
            Active::Pinch { .. } | Active::Pan(_) => true,
            Active::Swipe(swipe) => swipe.committed.is_some(),
            Active::Idle => false,
        }
    }

    /// Number of fingers currently down.
    #[must_use]
    pub fn touch_count(&self) -> usize {
        self.touches.len()
    }

    fn finger_pressed(&mut self, id: Finger, position: Point, at: Instant, ctx: &Context) -> Intent {
        if let Some(touch) = self.touches.iter_mut().find(|touch| touch.id == id) {
            touch.start = position;
            touch.current = position;
        } else {
            self.touches.push(TouchPoint {
                id,
                start: position,
                current: position,
            });
        }
        self.drag_offset = Vector::ZERO;

        if self.touches.len() > 1 {
            self.classify_multi(ctx);
            return Intent::None;
        }

        if ctx.mode.is_fullscreen() && self.take_double_tap(position, at) {
            log::trace!("double-tap at ({:.0}, {:.0})", position.x, position.y);
            self.active = Active::Idle;
            return Intent::ToggleZoom;
        }
        self.start_single(position, ctx);
        Intent::None
    }

    fn finger_moved(&mut self, id: Finger, position: Point) -> Intent {
        let Some(touch) = self.touches.iter_mut().find(|touch| touch.id == id) else {
            return Intent::None;
        };
        touch.current = position;

        match &mut self.active {
            Active::Pinch {
                initial_distance,
                initial_zoom,
            } => {
                let current = pinch_distance(&self.touches);
                Intent::SetZoom(initial_zoom.scaled_by(current / *initial_distance))
            }
            Active::Pan(drag) => drag
                .calculate_pan(position)
                .map_or(Intent::None, Intent::SetPan),
            Active::Swipe(swipe) => {
                swipe.track(position, &self.settings);
                self.drag_offset = swipe.offset();
                Intent::None
            }
            Active::Idle => Intent::None,
        }
    }

    fn finger_lifted(&mut self, id: Finger, position: Point, at: Instant, ctx: &Context) -> Intent {
        let Some(index) = self.touches.iter().position(|touch| touch.id == id) else {
            return Intent::None;
        };
        self.touches.remove(index);
        self.drag_offset = Vector::ZERO;

        if self.touches.is_empty() {
            let active = std::mem::take(&mut self.active);
            self.finish(active, position, at, ctx)
        } else {
            self.restart(ctx);
            Intent::None
        }
    }

    /// Resolves the gesture when the last finger lifts.
    fn finish(&mut self, active: Active, position: Point, at: Instant, ctx: &Context) -> Intent {
        match active {
            Active::Swipe(mut swipe) => {
                swipe.track(position, &self.settings);
                match dominant_axis(swipe.delta, &self.settings) {
                    Some(Axis::Horizontal) => self.resolve_horizontal(swipe.delta.x, ctx),
                    Some(Axis::Vertical) if swipe.delta.y > 0.0 => {
                        log::trace!("swipe down {:.0}px: dismiss", swipe.delta.y);
                        Intent::Dismiss
                    }
                    Some(Axis::Vertical) => Intent::None,
                    None => {
                        let travel = swipe.delta.x.hypot(swipe.delta.y);
                        self.record_tap(travel, position, at, ctx);
                        Intent::None
                    }
                }
            }
            Active::Pan(drag) => {
                if let Some(travel) = drag.travel(position) {
                    self.record_tap(travel, position, at, ctx);
                }
                Intent::None
            }
            Active::Pinch { .. } | Active::Idle => Intent::None,
        }
    }

    fn resolve_horizontal(&self, dx: f32, ctx: &Context) -> Intent {
        if dx < 0.0 && ctx.layout == Layout::Split && self.settings.leftward_dismiss_in_split {
            return Intent::Dismiss;
        }
        if ctx.image_count < 2 {
            return Intent::None;
        }
        let direction = if dx > 0.0 {
            Direction::Previous
        } else {
            Direction::Next
        };
        log::trace!("swipe {dx:.0}px: {direction:?}");
        Intent::Navigate(direction)
    }

    /// Re-classifies after the finger count changed while some remain down.
    /// The remaining finger's current position becomes its new start, and no
    /// double-tap check happens.
    fn restart(&mut self, ctx: &Context) {
        if self.touches.len() > 1 {
            self.classify_multi(ctx);
            return;
        }
        if let Some(touch) = self.touches.first_mut() {
            touch.start = touch.current;
            let position = touch.current;
            self.start_single(position, ctx);
        } else {
            self.active = Active::Idle;
        }
    }

    fn start_single(&mut self, position: Point, ctx: &Context) {
        self.active = if ctx.mode.is_fullscreen() && ctx.zoom.is_zoomed() {
            let mut drag = DragState::default();
            drag.start(position, ctx.pan);
            Active::Pan(drag)
        } else {
            Active::Swipe(Swipe::new(position))
        };
    }

    fn classify_multi(&mut self, ctx: &Context) {
        self.active = if ctx.mode.is_fullscreen() {
            log::trace!("pinch started at {:.2}x", ctx.zoom.value());
            Active::Pinch {
                initial_distance: pinch_distance(&self.touches),
                initial_zoom: ctx.zoom,
            }
        } else {
            Active::Idle
        };
    }

    fn record_tap(&mut self, travel: f32, position: Point, at: Instant, ctx: &Context) {
        if ctx.mode.is_fullscreen() && travel < self.settings.tap_max_movement {
            self.last_tap = Some(Tap { at, position });
        }
    }

    fn take_double_tap(&mut self, position: Point, at: Instant) -> bool {
        let Some(tap) = self.last_tap else {
            return false;
        };
        let in_time =
            at.saturating_duration_since(tap.at) <= self.settings.double_tap_window.as_duration();
        let in_reach = tap.position.distance(position) <= self.settings.double_tap_radius;
        if in_time && in_reach {
            self.last_tap = None;
            true
        } else {
            false
        }
    }
}

/// The axis with the larger absolute delta, once either exceeds the threshold.
/// Equal deltas commit to neither.
fn dominant_axis(delta: Vector, settings: &GestureSettings) -> Option<Axis> {
    let threshold = settings.swipe_threshold;
    if !threshold.is_exceeded_by(delta.x) && !threshold.is_exceeded_by(delta.y) {
        return None;
    }
    let (dx, dy) = (delta.x.abs(), delta.y.abs());
    if dx > dy {
        Some(Axis::Horizontal)
    } else if dy > dx {
        Some(Axis::Vertical)
    } else {
        None
    }
}

fn pinch_distance(touches: &[TouchPoint]) -> f32 {
    match touches {
        [first, second, ..] => first.current.distance(second.current).max(MIN_PINCH_DISTANCE),
        _ => MIN_PINCH_DISTANCE,
    }
}
