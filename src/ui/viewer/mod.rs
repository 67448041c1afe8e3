// SPDX-License-Identifier: MPL-2.0
//! Lightbox viewer for a sequence of images.

pub mod component;
pub mod subcomponents;

pub use component::{CloseTicket, Effect, Message, OpenRequest, State};
pub use subcomponents::gesture::Message as TouchMessage;
