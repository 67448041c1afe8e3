// SPDX-License-Identifier: MPL-2.0
//! Port definitions (traits) for dependency inversion.
//!
//! This module defines abstract interfaces that the embedding application
//! implements. The viewer only calls them; it never inspects their state.
//!
//! # Available Ports
//!
//! - [`scroll_lock`]: Page scroll locking and input focus capture while open
//!
//! # Design Notes
//!
//! - Traits use no Iced types
//! - Methods are infallible: a collaborator failure must not break the viewer

pub mod scroll_lock;

pub use scroll_lock::{NoopScrollLock, ScrollLock};
