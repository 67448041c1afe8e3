// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all gesture engine constants.
//!
//! This module serves as the single source of truth for the numeric
//! thresholds the viewer relies on. Constants are organized by category.
//!
//! # Categories
//!
//! - **Zoom**: Zoom factor bounds and wheel step
//! - **Touch**: Double-tap, tap and swipe thresholds
//! - **Dismiss**: Drag-to-dismiss fade window
//! - **Transition**: Exit transition delay before the close is committed

// ==========================================================================
// Zoom Defaults
// ==========================================================================

/// Zoom factor when an image is first shown (1.0 = fit).
pub const DEFAULT_ZOOM: f32 = 1.0;

/// Minimum allowed zoom factor.
pub const MIN_ZOOM: f32 = 1.0;

/// Maximum allowed zoom factor.
pub const MAX_ZOOM: f32 = 5.0;

/// Zoom factor reached by a double-tap or double-click while unzoomed.
pub const DOUBLE_TAP_ZOOM: f32 = 2.0;

/// Zoom values this close to a bound snap onto it.
pub const ZOOM_SNAP_EPSILON: f32 = 1e-3;

/// Default zoom change per wheel tick.
pub const DEFAULT_WHEEL_ZOOM_STEP: f32 = 0.1;

/// Minimum wheel zoom step.
pub const MIN_WHEEL_ZOOM_STEP: f32 = 0.01;

/// Maximum wheel zoom step.
pub const MAX_WHEEL_ZOOM_STEP: f32 = 1.0;

/// Pixel wheel deltas are converted to ticks using this many pixels per tick.
pub const PIXELS_PER_WHEEL_TICK: f32 = 120.0;

// ==========================================================================
// Touch Defaults
// ==========================================================================

/// Default window in which a second tap counts as a double-tap (milliseconds).
pub const DEFAULT_DOUBLE_TAP_WINDOW_MS: u64 = 300;

/// Minimum double-tap window (milliseconds).
pub const MIN_DOUBLE_TAP_WINDOW_MS: u64 = 100;

/// Maximum double-tap window (milliseconds).
pub const MAX_DOUBLE_TAP_WINDOW_MS: u64 = 1000;

/// Default maximum distance between two taps of a double-tap (pixels).
pub const DEFAULT_DOUBLE_TAP_RADIUS: f32 = 50.0;

/// Default distance a single touch must travel before it commits as a swipe.
/// The comparison is exclusive: travelling exactly this far is not a swipe.
pub const DEFAULT_SWIPE_THRESHOLD: f32 = 50.0;

/// Minimum swipe threshold (pixels).
pub const MIN_SWIPE_THRESHOLD: f32 = 10.0;

/// Maximum swipe threshold (pixels).
pub const MAX_SWIPE_THRESHOLD: f32 = 200.0;

/// Total travel below which a released touch is recorded as a tap.
pub const DEFAULT_TAP_MAX_MOVEMENT: f32 = 10.0;

// ==========================================================================
// Dismiss Defaults
// ==========================================================================

/// Vertical drag distance over which the backdrop fades out completely.
pub const DEFAULT_DISMISS_FADE_DISTANCE: f32 = 200.0;

// ==========================================================================
// Transition Defaults
// ==========================================================================

/// Default delay between beginning and committing a close (milliseconds).
pub const DEFAULT_EXIT_TRANSITION_MS: u64 = 200;

/// Minimum exit transition (milliseconds). Zero closes immediately.
pub const MIN_EXIT_TRANSITION_MS: u64 = 0;

/// Maximum exit transition (milliseconds).
pub const MAX_EXIT_TRANSITION_MS: u64 = 1000;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    // Zoom validation
    assert!(MIN_ZOOM > 0.0);
    assert!(MAX_ZOOM > MIN_ZOOM);
    assert!(DEFAULT_ZOOM >= MIN_ZOOM);
    assert!(DEFAULT_ZOOM <= MAX_ZOOM);
    assert!(DOUBLE_TAP_ZOOM > MIN_ZOOM);
    assert!(DOUBLE_TAP_ZOOM <= MAX_ZOOM);
    assert!(MIN_WHEEL_ZOOM_STEP > 0.0);
    assert!(MAX_WHEEL_ZOOM_STEP >= MIN_WHEEL_ZOOM_STEP);
    assert!(DEFAULT_WHEEL_ZOOM_STEP >= MIN_WHEEL_ZOOM_STEP);
    assert!(DEFAULT_WHEEL_ZOOM_STEP <= MAX_WHEEL_ZOOM_STEP);

    // Touch validation
    assert!(MIN_DOUBLE_TAP_WINDOW_MS > 0);
    assert!(MAX_DOUBLE_TAP_WINDOW_MS >= MIN_DOUBLE_TAP_WINDOW_MS);
    assert!(DEFAULT_DOUBLE_TAP_WINDOW_MS >= MIN_DOUBLE_TAP_WINDOW_MS);
    assert!(DEFAULT_DOUBLE_TAP_WINDOW_MS <= MAX_DOUBLE_TAP_WINDOW_MS);
    assert!(MIN_SWIPE_THRESHOLD > 0.0);
    assert!(DEFAULT_SWIPE_THRESHOLD >= MIN_SWIPE_THRESHOLD);
    assert!(DEFAULT_SWIPE_THRESHOLD <= MAX_SWIPE_THRESHOLD);
    assert!(DEFAULT_TAP_MAX_MOVEMENT < DEFAULT_SWIPE_THRESHOLD);

    // Transition validation
    assert!(MAX_EXIT_TRANSITION_MS >= MIN_EXIT_TRANSITION_MS);
    assert!(DEFAULT_EXIT_TRANSITION_MS <= MAX_EXIT_TRANSITION_MS);
};
