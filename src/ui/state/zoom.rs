// SPDX-License-Identifier: MPL-2.0
//! Zoom state management
//!
//! This module handles the zoom factor and pan offset of the fullscreen image:
//! - Wheel steps and pinch scaling, clamped to 1×–5×
//! - Double-tap toggling between 1× and 2×
//! - Pan clamping against the viewport (see [`ViewportState::clamp_pan`])
//!
//! Every mutation re-applies the pan boundary, so `zoom == 1` always implies
//! a zero pan.

pub use crate::config::{DEFAULT_ZOOM, DOUBLE_TAP_ZOOM, MAX_ZOOM, MIN_ZOOM};
pub use crate::domain::ui::ZoomLevel;

use super::ViewportState;
use iced::Vector;

/// Manages zoom factor and pan offset for the displayed image
#[derive(Debug, Clone, PartialEq)]
pub struct ZoomState {
    /// Current zoom factor (guaranteed valid by type)
    pub level: ZoomLevel,

    /// Current pan offset from the centered position, in container pixels
    pub pan: Vector,
}

impl Default for ZoomState {
    fn default() -> Self {
        Self {
            level: ZoomLevel::default(),
            pan: Vector::ZERO,
        }
    }
}

impl ZoomState {
    /// Sets the zoom factor and re-clamps the pan.
    pub fn set_level(&mut self, level: ZoomLevel, viewport: &ViewportState) {
        self.level = level;
        self.pan = viewport.clamp_pan(self.pan, level);
    }

    /// Applies `ticks` wheel steps of `step` each (positive zooms in).
    pub fn apply_wheel(&mut self, ticks: f32, step: f32, viewport: &ViewportState) {
        self.set_level(self.level.offset_by(ticks * step), viewport);
    }

    /// Double-tap rule: 1× ↔ 2×, leaving any zoom returns the pan to center.
    pub fn toggle(&mut self, viewport: &ViewportState) {
        let next = self.level.toggled();
        if next.is_zoomed() {
            self.set_level(next, viewport);
        } else {
            self.reset();
        }
    }

    /// Sets a raw pan offset, clamped to the boundary for the current zoom.
    pub fn set_pan(&mut self, pan: Vector, viewport: &ViewportState) {
        self.pan = viewport.clamp_pan(pan, self.level);
    }

    /// Re-applies the boundary after the viewport changed size.
    pub fn reclamp(&mut self, viewport: &ViewportState) {
        self.pan = viewport.clamp_pan(self.pan, self.level);
    }

    /// Resets zoom to 1× and pan to the center together.
    pub fn reset(&mut self) {
        self.level = ZoomLevel::MIN;
        self.pan = Vector::ZERO;
    }

    /// Returns whether the image is magnified (panning allowed).
    #[must_use]
    pub fn is_zoomed(&self) -> bool {
        self.level.is_zoomed()
    }
}
