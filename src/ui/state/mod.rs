// SPDX-License-Identifier: MPL-2.0
//! UI state management modules
//!
//! This module contains the zoom/pan state logic separated from the viewer
//! orchestrator, following the principle of separation of concerns.

pub mod drag;
pub mod viewport;
pub mod zoom;

// Re-export commonly used types for convenience
pub use drag::DragState;
pub use viewport::ViewportState;
pub use zoom::ZoomState;
