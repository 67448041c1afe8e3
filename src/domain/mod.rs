// SPDX-License-Identifier: MPL-2.0
//! Domain layer - viewer value objects with ZERO external dependencies.
//!
//! This module contains pure domain types and business rules. It has no
//! dependencies on external crates (except `std`) to ensure testability.
//!
//! # Modules
//!
//! - [`ui`]: Viewer value objects ([`ZoomLevel`](ui::newtypes::ZoomLevel),
//!   [`ViewMode`](ui::mode::ViewMode), [`Layout`](ui::mode::Layout),
//!   [`SwipeThreshold`](ui::newtypes::SwipeThreshold))

pub mod ui;
