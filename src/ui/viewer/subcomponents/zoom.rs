// SPDX-License-Identifier: MPL-2.0
//! Zoom sub-component encapsulating `ZoomState`, the viewport and their handlers.

use crate::domain::ui::{WheelZoomStep, ZoomLevel};
use crate::ui::state::{ViewportState, ZoomState};
use iced::{Size, Vector};

/// Zoom sub-component state.
#[derive(Debug, Clone, Default)]
pub struct State {
    /// The underlying zoom and pan state.
    pub inner: ZoomState,
    /// Container used for the pan boundary.
    pub viewport: ViewportState,
    /// Zoom change per wheel tick.
    pub wheel_step: WheelZoomStep,
}

/// Messages for the zoom sub-component.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Message {
    /// Wheel scrolled by this many ticks (positive zooms in).
    Wheel(f32),
    /// Set an absolute zoom level (pinch).
    SetLevel(ZoomLevel),
    /// Double-tap / double-click toggle.
    Toggle,
    /// Set a raw pan offset; the boundary is applied.
    SetPan(Vector),
    /// The container was resized.
    Resize(Size),
    /// Return to 1× and center.
    Reset,
}

/// Effects produced by zoom changes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Effect {
    /// No effect.
    None,
    /// Zoom level or pan changed.
    ZoomChanged,
}

impl State {
    /// Creates a zoom component using `wheel_step` per wheel tick.
    #[must_use]
    pub fn new(wheel_step: WheelZoomStep) -> Self {
        Self {
            wheel_step,
            ..Self::default()
        }
    }

    /// Handle a zoom message.
    pub fn handle(&mut self, msg: Message) -> Effect {
        let before = self.inner.clone();
        match msg {
            Message::Wheel(ticks) => {
                self.inner
                    .apply_wheel(ticks, self.wheel_step.value(), &self.viewport);
            }
            Message::SetLevel(level) => self.inner.set_level(level, &self.viewport),
            Message::Toggle => self.inner.toggle(&self.viewport),
            Message::SetPan(pan) => self.inner.set_pan(pan, &self.viewport),
            Message::Resize(size) => {
                if self.viewport.update(size) {
                    self.inner.reclamp(&self.viewport);
                }
            }
            Message::Reset => self.inner.reset(),
        }

        if self.inner == before {
            Effect::None
        } else {
            Effect::ZoomChanged
        }
    }

    /// Get the current zoom level.
    #[must_use]
    pub fn level(&self) -> ZoomLevel {
        self.inner.level
    }

    /// Get the current pan offset.
    #[must_use]
    pub fn pan(&self) -> Vector {
        self.inner.pan
    }

    /// Check if the image is magnified.
    #[must_use]
    pub fn is_zoomed(&self) -> bool {
        self.inner.is_zoomed()
    }
}
