// SPDX-License-Identifier: MPL-2.0
//! UI newtypes.
//!
//! This module provides type-safe wrappers for the viewer's tunable values,
//! ensuring they are always within valid ranges.

use crate::config::defaults::{
    DEFAULT_DOUBLE_TAP_WINDOW_MS, DEFAULT_EXIT_TRANSITION_MS, DEFAULT_SWIPE_THRESHOLD,
    DEFAULT_WHEEL_ZOOM_STEP, DEFAULT_ZOOM, DOUBLE_TAP_ZOOM, MAX_DOUBLE_TAP_WINDOW_MS,
    MAX_EXIT_TRANSITION_MS, MAX_SWIPE_THRESHOLD, MAX_WHEEL_ZOOM_STEP, MAX_ZOOM,
    MIN_DOUBLE_TAP_WINDOW_MS, MIN_EXIT_TRANSITION_MS, MIN_SWIPE_THRESHOLD, MIN_WHEEL_ZOOM_STEP,
    MIN_ZOOM, ZOOM_SNAP_EPSILON,
};
use std::time::Duration;

// =============================================================================
// ZoomLevel
// =============================================================================

/// Zoom factor, guaranteed to be within the valid range (1×–5×).
///
/// Values within a small epsilon of either bound snap onto it, so a sequence
/// of wheel steps that should land on 1× does not leave a residual zoom that
/// keeps panning enabled.
///
/// # Example
///
/// ```
/// use iced_lightbox::domain::ui::ZoomLevel;
///
/// assert_eq!(ZoomLevel::new(3.0).value(), 3.0);
/// assert_eq!(ZoomLevel::new(12.0).value(), 5.0);
/// assert!(!ZoomLevel::new(0.2).is_zoomed());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct ZoomLevel(f32);

impl ZoomLevel {
    /// The unzoomed level.
    pub const MIN: Self = Self(MIN_ZOOM);

    /// Creates a new zoom level, clamping the value to the valid range.
    /// Non-finite input resolves to the minimum.
    #[must_use]
    pub fn new(factor: f32) -> Self {
        if !factor.is_finite() {
            return Self::MIN;
        }
        let clamped = factor.clamp(MIN_ZOOM, MAX_ZOOM);
        if clamped - MIN_ZOOM < ZOOM_SNAP_EPSILON {
            Self(MIN_ZOOM)
        } else if MAX_ZOOM - clamped < ZOOM_SNAP_EPSILON {
            Self(MAX_ZOOM)
        } else {
            Self(clamped)
        }
    }

    /// Returns the raw zoom factor.
    #[must_use]
    pub fn value(self) -> f32 {
        self.0
    }

    /// Returns whether the image is magnified past its fitted size.
    #[must_use]
    pub fn is_zoomed(self) -> bool {
        self.0 > MIN_ZOOM
    }

    /// Returns whether the zoom is at the maximum value.
    #[must_use]
    pub fn is_max(self) -> bool {
        self.0 >= MAX_ZOOM
    }

    /// Adds `delta` to the factor and clamps.
    #[must_use]
    pub fn offset_by(self, delta: f32) -> Self {
        Self::new(self.0 + delta)
    }

    /// Multiplies the factor by `ratio` and clamps.
    #[must_use]
    pub fn scaled_by(self, ratio: f32) -> Self {
        Self::new(self.0 * ratio)
    }

    /// Double-tap rule: zoomed levels return to 1×, otherwise jump to 2×.
    #[must_use]
    pub fn toggled(self) -> Self {
        if self.is_zoomed() {
            Self::MIN
        } else {
            Self::new(DOUBLE_TAP_ZOOM)
        }
    }
}

impl Default for ZoomLevel {
    fn default() -> Self {
        Self(DEFAULT_ZOOM)
    }
}

// =============================================================================
// WheelZoomStep
// =============================================================================

/// Zoom change per wheel tick, guaranteed to be within 0.01–1.0.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WheelZoomStep(f32);

impl WheelZoomStep {
    /// Creates a new wheel step, clamping the value to the valid range.
    #[must_use]
    pub fn new(step: f32) -> Self {
        Self(step.clamp(MIN_WHEEL_ZOOM_STEP, MAX_WHEEL_ZOOM_STEP))
    }

    /// Returns the raw step value.
    #[must_use]
    pub fn value(self) -> f32 {
        self.0
    }
}

impl Default for WheelZoomStep {
    fn default() -> Self {
        Self(DEFAULT_WHEEL_ZOOM_STEP)
    }
}

// =============================================================================
// SwipeThreshold
// =============================================================================

/// Distance in pixels a touch must exceed to count as a swipe (10–200 px).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SwipeThreshold(f32);

impl SwipeThreshold {
    /// Creates a new threshold, clamping to the valid range.
    #[must_use]
    pub fn new(pixels: f32) -> Self {
        Self(pixels.clamp(MIN_SWIPE_THRESHOLD, MAX_SWIPE_THRESHOLD))
    }

    /// Returns the threshold in pixels.
    #[must_use]
    pub fn value(self) -> f32 {
        self.0
    }

    /// Strict comparison: a travel equal to the threshold does not exceed it.
    #[must_use]
    pub fn is_exceeded_by(self, travel: f32) -> bool {
        travel.abs() > self.0
    }
}

impl Default for SwipeThreshold {
    fn default() -> Self {
        Self(DEFAULT_SWIPE_THRESHOLD)
    }
}

// =============================================================================
// DoubleTapWindow
// =============================================================================

/// Maximum delay between two taps of a double-tap (100–1000 ms).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DoubleTapWindow(u64);

impl DoubleTapWindow {
    /// Creates a new window, clamping to the valid range.
    #[must_use]
    pub fn new(millis: u64) -> Self {
        Self(millis.clamp(MIN_DOUBLE_TAP_WINDOW_MS, MAX_DOUBLE_TAP_WINDOW_MS))
    }

    /// Returns the window in milliseconds.
    #[must_use]
    pub fn value(self) -> u64 {
        self.0
    }

    /// Returns the window as a Duration.
    #[must_use]
    pub fn as_duration(self) -> Duration {
        Duration::from_millis(self.0)
    }
}

impl Default for DoubleTapWindow {
    fn default() -> Self {
        Self(DEFAULT_DOUBLE_TAP_WINDOW_MS)
    }
}

// =============================================================================
// ExitTransition
// =============================================================================

/// Delay between beginning a close and notifying the caller (0–1000 ms).
///
/// A zero delay closes immediately without scheduling a timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExitTransition(u64);

impl ExitTransition {
    /// Creates a new exit transition, clamping to the valid range.
    #[must_use]
    pub fn new(millis: u64) -> Self {
        Self(millis.clamp(MIN_EXIT_TRANSITION_MS, MAX_EXIT_TRANSITION_MS))
    }

    /// Returns the delay in milliseconds.
    #[must_use]
    pub fn value(self) -> u64 {
        self.0
    }

    /// Returns the delay as a Duration.
    #[must_use]
    pub fn as_duration(self) -> Duration {
        Duration::from_millis(self.0)
    }

    /// Returns true when closing should not wait for a transition.
    #[must_use]
    pub fn is_immediate(self) -> bool {
        self.0 == 0
    }
}

impl Default for ExitTransition {
    fn default() -> Self {
        Self(DEFAULT_EXIT_TRANSITION_MS)
    }
}

// =============================================================================
// Tests
// =============================================================================
