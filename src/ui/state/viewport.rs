// SPDX-License-Identifier: MPL-2.0
//! Viewport state management
//!
//! Tracks the container the image is displayed in and derives the pan
//! boundary from it.

use crate::domain::ui::ZoomLevel;
use iced::{Size, Vector};

/// Manages the container size used for pan bounds
#[derive(Debug, Clone)]
pub struct ViewportState {
    /// Current container size
    pub size: Size,

    /// Previous container size (for layout change detection)
    pub previous_size: Option<Size>,
}

impl Default for ViewportState {
    fn default() -> Self {
        Self {
            size: Size::ZERO,
            previous_size: None,
        }
    }
}

impl ViewportState {
    /// Records a new container size.
    /// Returns true if the size actually changed.
    pub fn update(&mut self, size: Size) -> bool {
        self.previous_size = Some(self.size);
        let changed = self.size != size;
        self.size = size;
        changed
    }

    /// Largest pan magnitude allowed on each axis at `zoom`.
    ///
    /// `max(0, extent * (zoom - 1) / 2)`: the overflow of the scaled image
    /// split evenly between both sides of the container.
    #[must_use]
    pub fn max_pan(&self, zoom: ZoomLevel) -> Vector {
        let overflow = zoom.value() - 1.0;
        Vector::new(
            (self.size.width * overflow / 2.0).max(0.0),
            (self.size.height * overflow / 2.0).max(0.0),
        )
    }

    /// Clamps `pan` into the boundary for `zoom`. Unzoomed images never pan.
    #[must_use]
    pub fn clamp_pan(&self, pan: Vector, zoom: ZoomLevel) -> Vector {
        if !zoom.is_zoomed() {
            return Vector::ZERO;
        }
        let max = self.max_pan(zoom);
        Vector::new(clamp_axis(pan.x, max.x), clamp_axis(pan.y, max.y))
    }
}

fn clamp_axis(value: f32, limit: f32) -> f32 {
    if value.is_finite() {
        value.clamp(-limit, limit)
    } else {
        0.0
    }
}
