// SPDX-License-Identifier: MPL-2.0
//! Scroll-lock port definition.
//!
//! While the viewer is open it owns page scrolling and input focus. The host
//! provides the actual mechanism; the viewer guarantees that every `acquire`
//! is followed by a `release` on every exit path, including being dropped.
//!
//! # Example
//!
//! ```
//! use iced_lightbox::application::port::ScrollLock;
//!
//! #[derive(Debug, Default)]
//! struct BodyOverflowLock {
//!     locked: bool,
//! }
//!
//! impl ScrollLock for BodyOverflowLock {
//!     fn acquire(&mut self) {
//!         self.locked = true;
//!     }
//!
//!     fn release(&mut self) {
//!         self.locked = false;
//!     }
//! }
//! ```

use std::fmt;

/// Exclusive page scroll / focus capture held while the viewer is open.
///
/// Implementations must be idempotent, and `release` must be safe to call
/// without a prior `acquire`.
pub trait ScrollLock: fmt::Debug {
    /// Locks page scrolling and captures focus.
    fn acquire(&mut self);

    /// Restores page scrolling and focus.
    fn release(&mut self);
}

/// Scroll lock for hosts with nothing to lock (e.g. a dedicated window).
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopScrollLock;

impl ScrollLock for NoopScrollLock {
    fn acquire(&mut self) {}

    fn release(&mut self) {}
}
