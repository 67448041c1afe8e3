// SPDX-License-Identifier: MPL-2.0
//! Nested TEA sub-components for the viewer.
//!
//! Each sub-component has its own State, Message, Effect, and handle() method.
//! The main component.rs orchestrates these sub-components.
//!
//! ## Architecture
//!
//! ```text
//! component.rs (orchestrator)
//!     ├── mode        - Carousel/fullscreen transitions and close requests
//!     ├── navigation  - Current index with wraparound
//!     ├── zoom        - Encapsulates ZoomState and ViewportState
//!     ├── drag        - Mouse drag-to-pan and double-click
//!     ├── gesture     - Touch pinch/pan/swipe/double-tap classification
//!     └── closing     - Exit transition before the close is committed
//! ```

pub mod closing;
pub mod drag;
pub mod gesture;
pub mod mode;
pub mod navigation;
pub mod zoom;
