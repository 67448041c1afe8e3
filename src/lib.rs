// SPDX-License-Identifier: MPL-2.0
//! `iced_lightbox` is a headless lightbox engine for the Iced GUI framework.
//!
//! It shows a sequence of images either as a carousel (optionally paired with
//! a detail sidebar) or fullscreen, and turns touch, mouse and keyboard input
//! into zoom, pan, navigation and dismissal. Rendering stays with the host:
//! it forwards events, reads the viewer state back and reacts to effects.
//!
//! ```
//! use iced_lightbox::config;
//! use iced_lightbox::ui::viewer::{Effect, Message, OpenRequest, State};
//!
//! let (config, _warning) = config::load();
//! let mut viewer = State::new(config.gesture_settings());
//! viewer.handle(Message::Open(OpenRequest {
//!     images: vec!["a.jpg".into(), "b.jpg".into()],
//!     initial_index: 0,
//!     has_sidebar: false,
//! }));
//!
//! // The close waits for the exit transition; the returned task reports back.
//! let (effect, _task) = viewer.handle_message(Message::CloseRequested);
//! assert!(matches!(effect, Effect::CloseScheduled { .. }));
//! ```

#![doc(html_root_url = "https://docs.rs/iced_lightbox/0.1.0")]

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod ui;

#[cfg(test)]
mod test_utils;
