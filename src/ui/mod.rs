// SPDX-License-Identifier: MPL-2.0
//! User interface components and state management.
//!
//! This module organizes all UI-related code following a component-based architecture
//! with the Elm-style "state down, messages up" pattern.
//!
//! - [`viewer`] - Lightbox component: modes, navigation, gestures and close lifecycle
//! - [`state`] - Reusable state management (zoom, viewport, drag)

pub mod state;
pub mod viewer;
